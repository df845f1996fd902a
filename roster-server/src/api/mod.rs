//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`upload`] - 照片上传接口
//! - [`employees`] - 员工档案与工时接口
//! - [`clients`] - 客户档案接口
//! - [`schedules`] - 排班接口

pub mod auth;
pub mod clients;
pub mod employees;
pub mod health;
pub mod schedules;
pub mod upload;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::auth::require_auth;
use crate::core::ServerState;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(auth::router())
        .merge(health::router())
        .merge(upload::router())
        // Data model APIs
        .merge(employees::router())
        .merge(clients::router())
        .merge(schedules::router())
}

/// Build the full application with middleware and state
///
/// JWT 认证中间件在 Router 级别应用，`require_auth` 内部会跳过公共路由。
/// 集成测试也通过这个入口直接驱动路由。
pub fn app(state: ServerState) -> Router {
    build_app()
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
