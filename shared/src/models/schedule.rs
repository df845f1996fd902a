//! Schedule Model

use serde::{Deserialize, Serialize};

/// A schedule assignment linking an employee (and optionally a client)
/// to an opaque schedule payload. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub id: String,
    pub employee_email: String,
    /// Schedule payload as sent by the admin frontend; the server never
    /// interprets its shape
    pub details: serde_json::Value,
    pub client_email: Option<String>,
    pub created_at: i64,
}

/// Create schedule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCreate {
    pub employee_email: String,
    pub details: serde_json::Value,
    pub client_email: Option<String>,
}
