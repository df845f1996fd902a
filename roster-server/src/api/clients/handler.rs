//! Client API Handlers

use axum::{Json, extract::State, http::StatusCode};

use crate::core::ServerState;
use crate::db::repository::client_profile;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_optional_text, validate_required_text,
};
use shared::models::{ClientCreate, ClientProfile};

/// List all clients
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<ClientProfile>>> {
    let clients = client_profile::find_all(&state.store).await;
    Ok(Json(clients))
}

/// Create a new client profile
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ClientCreate>,
) -> AppResult<(StatusCode, Json<ClientProfile>)> {
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.phone_number, "phone_number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.services_needed, "services_needed", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.photo_url, "photo_url", MAX_URL_LEN)?;

    let profile = client_profile::create(&state.store, payload).await?;

    tracing::info!(email = %profile.email, "Client profile created");

    Ok((StatusCode::CREATED, Json(profile)))
}
