//! Storage Module
//!
//! Process-lifetime in-memory store. Each collection sits behind its own
//! `tokio::sync::RwLock`; mutations hold exactly the write locks they need,
//! reads take read locks, and nothing else in the crate touches the
//! collections directly. Cross-collection atomicity (employee + identity)
//! is the employee repository's job and uses a fixed lock order.

pub mod models;
pub mod repository;

use std::collections::{BTreeMap, HashMap};

use tokio::sync::RwLock;

use shared::models::{ClientProfile, EmployeeProfile, ScheduleRecord};

use models::Identity;

/// Shared in-memory store — one lock per collection
///
/// | Collection | Keyed by | Ordering |
/// |------------|----------|----------|
/// | identities | email | n/a |
/// | employees | email | email (listing) |
/// | clients | email (unique, checked on insert) | creation |
/// | schedules | — | creation |
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) identities: RwLock<HashMap<String, Identity>>,
    pub(crate) employees: RwLock<BTreeMap<String, EmployeeProfile>>,
    pub(crate) clients: RwLock<Vec<ClientProfile>>,
    pub(crate) schedules: RwLock<Vec<ScheduleRecord>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
