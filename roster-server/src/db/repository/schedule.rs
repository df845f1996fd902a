//! Schedule Repository

use uuid::Uuid;

use shared::models::{ScheduleCreate, ScheduleRecord};

use super::{RepoError, RepoResult};
use crate::db::Store;
use crate::utils::time;

/// Create a schedule record after resolving its references
///
/// The employee key must resolve, and so must the client key when one is
/// given; nothing is appended otherwise. Records are immutable once
/// created — there is no update or delete.
pub async fn create(store: &Store, data: ScheduleCreate) -> RepoResult<ScheduleRecord> {
    if !super::employee::exists(store, &data.employee_email).await {
        return Err(RepoError::NotFound(format!(
            "Employee {} not found",
            data.employee_email
        )));
    }
    if let Some(ref client_email) = data.client_email
        && !super::client_profile::exists(store, client_email).await
    {
        return Err(RepoError::NotFound(format!(
            "Client {} not found",
            client_email
        )));
    }

    let record = ScheduleRecord {
        id: Uuid::new_v4().to_string(),
        employee_email: data.employee_email,
        details: data.details,
        client_email: data.client_email,
        created_at: time::now_millis(),
    };
    store.schedules.write().await.push(record.clone());
    Ok(record)
}

/// All schedules assigned to one employee, in creation order
pub async fn find_by_employee(store: &Store, email: &str) -> Vec<ScheduleRecord> {
    store
        .schedules
        .read()
        .await
        .iter()
        .filter(|s| s.employee_email == email)
        .cloned()
        .collect()
}
