//! Employee API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::employee;
use crate::security_log;
use crate::utils::time;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_hours,
    validate_optional_text, validate_password, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{EmployeeCreate, EmployeeProfile, RecordHours};

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeProfile>>> {
    let employees = employee::find_all(&state.store).await;
    Ok(Json(employees))
}

/// Create a new employee profile and its login identity
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<EmployeeProfile>)> {
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_password(&payload.password)?;
    validate_optional_text(&payload.job_title, "job_title", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.department, "department", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.phone_number, "phone_number", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(
        &payload.social_security_number,
        "social_security_number",
        MAX_SHORT_TEXT_LEN,
    )?;
    validate_optional_text(&payload.photo_url, "photo_url", MAX_URL_LEN)?;

    let profile = employee::create(&state.store, payload).await?;

    tracing::info!(email = %profile.email, "Employee profile created");

    Ok((StatusCode::CREATED, Json(profile)))
}

/// Record work hours for one employee and date
///
/// Admins may write any ledger; an employee only their own. The ownership
/// check runs before the employee lookup, so a denied caller learns
/// nothing about which profiles exist.
pub async fn record_hours(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(email): Path<String>,
    Json(payload): Json<RecordHours>,
) -> AppResult<Json<EmployeeProfile>> {
    if !user.can_act_for(&email) {
        security_log!(
            "WARN",
            "hours_denied",
            email = user.email.clone(),
            target = email.clone()
        );
        return Err(AppError::forbidden(
            "Cannot record hours for another employee",
        ));
    }

    let date = time::parse_date(&payload.date)?;
    validate_hours(payload.hours)?;

    let date_key = date.format("%Y-%m-%d").to_string();
    let profile = employee::record_hours(&state.store, &email, &date_key, payload.hours).await?;

    tracing::info!(
        email = %email,
        date = %date_key,
        hours = payload.hours,
        "Work hours recorded"
    );

    Ok(Json(profile))
}
