//! Schedule API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::{require_admin, require_employee};
use crate::core::ServerState;

/// Schedule router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/schedules", routes())
}

fn routes() -> Router<ServerState> {
    // 管理路由：仅管理员下发排班
    let manage_routes = Router::new()
        .route("/", post(handler::create))
        .layer(middleware::from_fn(require_admin));

    // 查询路由：员工查看自己的排班（管理员没有员工档案，不开放）
    let own_routes = Router::new()
        .route("/", get(handler::list_own))
        .layer(middleware::from_fn(require_employee));

    manage_routes.merge(own_routes)
}
