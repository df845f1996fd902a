//! Client Profile Repository

use shared::models::{ClientCreate, ClientProfile};

use super::{RepoError, RepoResult};
use crate::db::Store;
use crate::utils::time;

/// Find all clients, in creation order
pub async fn find_all(store: &Store) -> Vec<ClientProfile> {
    store.clients.read().await.clone()
}

/// Check whether a client profile exists
pub async fn exists(store: &Store, email: &str) -> bool {
    store.clients.read().await.iter().any(|c| c.email == email)
}

/// Create a new client profile
///
/// Clients get no login identity. The email stays the identifying key,
/// so collisions are rejected the same way employee emails are.
pub async fn create(store: &Store, data: ClientCreate) -> RepoResult<ClientProfile> {
    let mut clients = store.clients.write().await;
    if clients.iter().any(|c| c.email == data.email) {
        return Err(RepoError::Duplicate(format!(
            "Client '{}' already exists",
            data.email
        )));
    }

    let profile = ClientProfile {
        email: data.email,
        name: data.name,
        phone_number: data.phone_number,
        services_needed: data.services_needed,
        photo_url: data.photo_url,
        created_at: time::now_millis(),
    };
    clients.push(profile.clone());
    Ok(profile)
}
