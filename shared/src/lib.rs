//! Shared types for the Roster backend
//!
//! Common types used across crates: API request/response DTOs and
//! the domain models exchanged between server and clients.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
