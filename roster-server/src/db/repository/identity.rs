//! Identity Repository
//!
//! Credential records: registration and verification. Argon2 work always
//! runs on the blocking pool so request dispatch is never stalled by a hash.

use shared::models::Role;

use super::{RepoError, RepoResult};
use crate::db::Store;
use crate::db::models::Identity;

/// Find an identity by email
pub async fn find_by_email(store: &Store, email: &str) -> Option<Identity> {
    store.identities.read().await.get(email).cloned()
}

/// Register a new login identity
///
/// Fails with `Duplicate` if the email is already registered.
pub async fn register(
    store: &Store,
    email: &str,
    password: &str,
    role: Role,
) -> RepoResult<Identity> {
    let hash_pass = hash_password_blocking(password.to_string()).await?;

    let mut identities = store.identities.write().await;
    if identities.contains_key(email) {
        return Err(RepoError::Duplicate(format!(
            "Email '{}' is already registered",
            email
        )));
    }

    let identity = Identity {
        email: email.to_string(),
        hash_pass,
        role,
    };
    identities.insert(email.to_string(), identity.clone());
    Ok(identity)
}

/// Verify credentials against the stored hash
///
/// Returns a uniform `AuthFailed` for both unknown email and wrong
/// password, so callers cannot distinguish the two.
pub async fn verify_credentials(
    store: &Store,
    email: &str,
    password: &str,
) -> RepoResult<Identity> {
    let identity = match find_by_email(store, email).await {
        Some(identity) => identity,
        None => return Err(RepoError::AuthFailed),
    };

    let checked = identity.clone();
    let password = password.to_string();
    let valid = tokio::task::spawn_blocking(move || checked.verify_password(&password))
        .await
        .map_err(|e| RepoError::Internal(format!("Verification task failed: {e}")))?
        .map_err(|e| RepoError::Internal(format!("Password verification failed: {e}")))?;

    if !valid {
        return Err(RepoError::AuthFailed);
    }
    Ok(identity)
}

/// Hash a password on the blocking pool
pub(crate) async fn hash_password_blocking(password: String) -> RepoResult<String> {
    tokio::task::spawn_blocking(move || Identity::hash_password(&password))
        .await
        .map_err(|e| RepoError::Internal(format!("Hashing task failed: {e}")))?
        .map_err(|e| RepoError::Internal(format!("Failed to hash password: {e}")))
}
