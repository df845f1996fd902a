//! Employee Model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Employee profile (keyed by email)
///
/// Carries no password material: login credentials live in a separate
/// identity record owned by the credential store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub email: String,
    pub name: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub social_security_number: Option<String>,
    /// Reference to an uploaded photo (`/uploads/...`), stored opaque
    pub photo_url: Option<String>,
    /// Reported hours per date (`YYYY-MM-DD` -> hours), last write wins
    #[serde(default)]
    pub work_hours: BTreeMap<String, f64>,
    pub created_at: i64,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub email: String,
    pub name: String,
    pub password: String,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub phone_number: Option<String>,
    pub social_security_number: Option<String>,
    pub photo_url: Option<String>,
}

/// Record work hours payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordHours {
    /// Ledger date (`YYYY-MM-DD`)
    pub date: String,
    pub hours: f64,
}
