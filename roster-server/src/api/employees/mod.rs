//! Employee API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    // 管理路由：仅管理员可用（创建档案、查看全员列表）
    let manage_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .layer(middleware::from_fn(require_admin));

    // 工时上报：本人或管理员（归属检查在 handler 内完成）
    let hours_routes = Router::new().route("/{email}/hours", put(handler::record_hours));

    manage_routes.merge(hours_routes)
}
