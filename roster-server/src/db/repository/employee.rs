//! Employee Repository

use shared::models::{EmployeeCreate, EmployeeProfile, Role};

use super::{RepoError, RepoResult, identity};
use crate::db::Store;
use crate::db::models::Identity;
use crate::utils::time;

/// Find all employees, ordered by email
pub async fn find_all(store: &Store) -> Vec<EmployeeProfile> {
    store.employees.read().await.values().cloned().collect()
}

/// Find employee by email
pub async fn find_by_email(store: &Store, email: &str) -> Option<EmployeeProfile> {
    store.employees.read().await.get(email).cloned()
}

/// Check whether an employee profile exists
pub async fn exists(store: &Store, email: &str) -> bool {
    store.employees.read().await.contains_key(email)
}

/// Create an employee profile together with its login identity
///
/// The identity (role `employee`) and the profile share one email and are
/// inserted while both collection write locks are held — either both
/// records exist afterwards or neither does. Lock order is identities
/// then employees; this is the only path that takes two locks.
pub async fn create(store: &Store, data: EmployeeCreate) -> RepoResult<EmployeeProfile> {
    // Hash before touching any lock
    let hash_pass = identity::hash_password_blocking(data.password.clone()).await?;

    let mut identities = store.identities.write().await;
    if identities.contains_key(&data.email) {
        return Err(RepoError::Duplicate(format!(
            "Email '{}' is already registered",
            data.email
        )));
    }
    let mut employees = store.employees.write().await;

    let profile = EmployeeProfile {
        email: data.email.clone(),
        name: data.name,
        job_title: data.job_title,
        department: data.department,
        phone_number: data.phone_number,
        social_security_number: data.social_security_number,
        photo_url: data.photo_url,
        work_hours: Default::default(),
        created_at: time::now_millis(),
    };

    identities.insert(
        data.email.clone(),
        Identity {
            email: data.email,
            hash_pass,
            role: Role::Employee,
        },
    );
    employees.insert(profile.email.clone(), profile.clone());

    Ok(profile)
}

/// Upsert reported hours for one ledger date (last write wins)
pub async fn record_hours(
    store: &Store,
    email: &str,
    date: &str,
    hours: f64,
) -> RepoResult<EmployeeProfile> {
    let mut employees = store.employees.write().await;
    let profile = employees
        .get_mut(email)
        .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", email)))?;
    profile.work_hours.insert(date.to_string(), hours);
    Ok(profile.clone())
}
