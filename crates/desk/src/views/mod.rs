//! Role dashboards.
//!
//! Each view is a read-only projection of the store for one role.

pub mod admin;
pub mod manager;
pub mod resident;

use chrono::{DateTime, Utc};
use serde::Serialize;

use domain::models::UserRole;
use persistence::InMemoryStore;

use crate::config::SessionConfig;
use crate::error::DeskError;

pub use admin::AdminDashboard;
pub use manager::{ManagerDashboard, ResidentActivity};
pub use resident::{RequestProgress, ResidentDashboard};

/// The dashboard of the current session, tagged with its role.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Snapshot {
    Admin(AdminDashboard),
    Manager(ManagerDashboard),
    Resident(ResidentDashboard),
}

impl Snapshot {
    pub fn role(&self) -> UserRole {
        match self {
            Snapshot::Admin(_) => UserRole::Admin,
            Snapshot::Manager(_) => UserRole::Manager,
            Snapshot::Resident(_) => UserRole::Resident,
        }
    }
}

pub fn snapshot(
    store: &InMemoryStore,
    session: &SessionConfig,
    generated_at: DateTime<Utc>,
) -> Result<Snapshot, DeskError> {
    let snapshot = match session.role {
        UserRole::Admin => Snapshot::Admin(admin::build(store, generated_at)),
        UserRole::Manager => Snapshot::Manager(manager::build(store, &session.society)?),
        UserRole::Resident => Snapshot::Resident(resident::build(store, &session.resident_name)?),
    };
    Ok(snapshot)
}
