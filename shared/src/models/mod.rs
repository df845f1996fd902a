//! Data models
//!
//! Shared between roster-server and frontend (via API).
//! Profile records are keyed by email; timestamps are Unix millis (`i64`).

pub mod client_profile;
pub mod employee;
pub mod role;
pub mod schedule;

// Re-exports
pub use client_profile::*;
pub use employee::*;
pub use role::*;
pub use schedule::*;
