//! Authentication Handlers
//!
//! Handles login and current-user lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{RepoError, identity};

// Re-use shared DTOs for API consistency
use shared::client::{LoginRequest, LoginResponse, UserInfo};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = req.email.clone();

    let result = identity::verify_credentials(&state.store, &req.email, &req.password).await;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent email enumeration
    let identity = match result {
        Ok(identity) => identity,
        Err(RepoError::AuthFailed) => {
            tracing::warn!(email = %email, "Login failed - invalid credentials");
            return Err(AppError::invalid_credentials());
        }
        Err(e) => return Err(e.into()),
    };

    // Generate JWT token
    let token = state
        .get_jwt_service()
        .generate_token(&identity.email, identity.role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        email = %identity.email,
        role = %identity.role,
        "User logged in successfully"
    );

    Ok(Json(LoginResponse {
        token,
        role: identity.role,
        user: UserInfo {
            email: identity.email,
            role: identity.role,
        },
    }))
}

/// Get current user info
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<UserInfo> {
    Json(UserInfo {
        email: user.email,
        role: user.role,
    })
}
