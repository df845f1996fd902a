//! Schedule API Handlers

use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::schedule;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_EMAIL_LEN, validate_required_text};
use shared::models::{ScheduleCreate, ScheduleRecord};

/// Create a schedule assignment for an employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ScheduleCreate>,
) -> AppResult<(StatusCode, Json<ScheduleRecord>)> {
    validate_required_text(&payload.employee_email, "employee_email", MAX_EMAIL_LEN)?;

    let record = schedule::create(&state.store, payload).await?;

    tracing::info!(
        id = %record.id,
        employee = %record.employee_email,
        "Schedule assigned"
    );

    Ok((StatusCode::CREATED, Json(record)))
}

/// List the caller's own schedule assignments
///
/// The result set is keyed by the token's email — an employee can never
/// page through another employee's assignments. Zero assignments is a
/// normal empty list, not an error.
pub async fn list_own(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<Vec<ScheduleRecord>>> {
    let schedules = schedule::find_by_employee(&state.store, &user.email).await;
    Ok(Json(schedules))
}
