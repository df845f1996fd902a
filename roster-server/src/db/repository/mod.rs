//! Repository Module
//!
//! Per-entity operations over the in-memory [`Store`](crate::db::Store).
//! Repositories are the only code that locks the collections; handlers
//! pass `&Store` in and get owned records back.

pub mod client_profile;
pub mod employee;
pub mod identity;
pub mod schedule;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication failed")]
    AuthFailed,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
