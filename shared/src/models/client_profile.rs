//! Client Profile Model
//!
//! Clients (service recipients) have no login identity.

use serde::{Deserialize, Serialize};

/// Client profile (keyed by email)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    /// Free-form description of the services this client needs
    pub services_needed: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: i64,
}

/// Create client payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCreate {
    pub email: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub services_needed: Option<String>,
    pub photo_url: Option<String>,
}
