//! Upload API Module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Upload router (authentication handled by global require_auth middleware)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/upload", post(handler::upload))
}
