//! Internal storage models
//!
//! [`Identity`] is the only record that never crosses the API boundary:
//! profiles are shared DTOs, credentials stay in this crate.

use serde::{Deserialize, Serialize};

use shared::models::Role;

/// Login identity record (email, password hash, role)
///
/// Owned exclusively by the credential store; `hash_pass` is never
/// serialized even if an identity ends up in a response by mistake.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    #[serde(skip_serializing, default)]
    pub hash_pass: String,
    pub role: Role,
}

impl Identity {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}
