//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! The in-memory store enforces no lengths of its own, so every
//! user-supplied string is bounded here before it reaches a repository.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employee, client
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone, job title, department, SSN
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Free-form notes: services needed
pub const MAX_NOTE_LEN: usize = 500;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate a plaintext password before provisioning an identity.
pub fn validate_password(value: &str) -> Result<(), AppError> {
    if value.len() < MIN_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if value.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "password is too long ({} chars, max {MAX_PASSWORD_LEN})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a work-hours amount is finite and non-negative
pub fn validate_hours(value: f64) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation("hours must be a finite number"));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "hours must be non-negative, got {value}"
        )));
    }
    Ok(())
}
