//! A desk session: the seeded store, the lifecycle engine wrapped around it,
//! and the operations the dashboards trigger.
//!
//! Every operation either applies fully or returns a [`DeskError`] whose
//! [`notice`](DeskError::notice) is what the user sees.

use chrono::{NaiveDate, Utc};
use metrics::counter;
use uuid::Uuid;

use domain::models::{
    Announcement, CreateAnnouncement, CreateService, CreateServiceRequest, CreateStaff,
    RequestFilter, RequestStatus, Service, ServiceRequest, Staff, StaffWorkload,
};
use domain::services::{bulletin, catalog, inbox, RequestLifecycleEngine, TransitionPolicy};
use domain::DomainError;
use persistence::metrics::record_collection_sizes;
use persistence::InMemoryStore;
use shared::pagination::Page;

use crate::config::{Config, PaginationConfig, SessionConfig};
use crate::error::DeskError;
use crate::views::{self, Snapshot};

pub struct Workspace {
    engine: RequestLifecycleEngine<InMemoryStore>,
    pagination: PaginationConfig,
}

impl Workspace {
    /// Builds a session from configuration.
    pub fn bootstrap(config: &Config) -> Self {
        let store = if config.seed.enabled {
            InMemoryStore::seeded()
        } else {
            InMemoryStore::empty()
        };
        record_collection_sizes(&store);

        tracing::info!(
            policy = %config.lifecycle.transition_policy,
            seeded = config.seed.enabled,
            "Workspace ready"
        );
        Self::new(store, config.lifecycle.transition_policy, config.pagination.clone())
    }

    pub fn new(store: InMemoryStore, policy: TransitionPolicy, pagination: PaginationConfig) -> Self {
        Self {
            engine: RequestLifecycleEngine::with_policy(store, policy),
            pagination,
        }
    }

    pub fn engine(&self) -> &RequestLifecycleEngine<InMemoryStore> {
        &self.engine
    }

    pub fn store(&self) -> &InMemoryStore {
        self.engine.store()
    }

    // Requests

    pub fn create_request(&mut self, input: CreateServiceRequest) -> Result<ServiceRequest, DeskError> {
        track("create_request", self.engine.create(input))
    }

    pub fn request(&self, id: Uuid) -> Result<ServiceRequest, DeskError> {
        track("request", self.engine.get(id).cloned())
    }

    pub fn assign(&mut self, id: Uuid, staff_name: &str) -> Result<ServiceRequest, DeskError> {
        track("assign", self.engine.assign(id, staff_name).cloned())
    }

    pub fn assign_staff(&mut self, id: Uuid, staff_id: Uuid) -> Result<ServiceRequest, DeskError> {
        track("assign_staff", self.engine.assign_staff(id, staff_id).cloned())
    }

    pub fn update_status(&mut self, id: Uuid, status: RequestStatus) -> Result<ServiceRequest, DeskError> {
        track("update_status", self.engine.transition(id, status).cloned())
    }

    pub fn approve(&mut self, id: Uuid) -> Result<ServiceRequest, DeskError> {
        track("approve", self.engine.approve(id).cloned())
    }

    pub fn reject(&mut self, id: Uuid) -> Result<ServiceRequest, DeskError> {
        track("reject", self.engine.reject(id).cloned())
    }

    pub fn schedule(&mut self, id: Uuid, date: NaiveDate) -> Result<ServiceRequest, DeskError> {
        track("schedule", self.engine.schedule(id, date).cloned())
    }

    /// One page of requests. `page_size` falls back to the configured default
    /// and is capped at the configured maximum.
    pub fn list_requests(
        &self,
        filter: &RequestFilter,
        cursor: Option<&str>,
        page_size: Option<usize>,
    ) -> Result<Page<ServiceRequest>, DeskError> {
        let limit = self.pagination.page_size(page_size);
        track("list_requests", self.engine.list_requests(filter, cursor, limit))
    }

    // Staff

    pub fn add_staff(&mut self, input: CreateStaff) -> Result<Staff, DeskError> {
        track("add_staff", self.engine.add_staff(input))
    }

    pub fn toggle_availability(&mut self, staff_id: Uuid) -> Result<Staff, DeskError> {
        track("toggle_availability", self.engine.toggle_availability(staff_id).cloned())
    }

    pub fn remove_staff(&mut self, staff_id: Uuid) -> Result<Staff, DeskError> {
        track("remove_staff", self.engine.remove_staff(staff_id))
    }

    pub fn workload(&self) -> Vec<StaffWorkload> {
        self.engine.workload()
    }

    // Catalog

    pub fn add_service(&mut self, input: CreateService) -> Result<Service, DeskError> {
        track("add_service", catalog::add(self.engine.store_mut(), input))
    }

    pub fn toggle_service(&mut self, id: Uuid) -> Result<Service, DeskError> {
        track("toggle_service", catalog::toggle_active(self.engine.store_mut(), id).cloned())
    }

    pub fn remove_service(&mut self, id: Uuid) -> Result<Service, DeskError> {
        track("remove_service", catalog::remove(self.engine.store_mut(), id))
    }

    // Bulletin

    pub fn publish(&mut self, input: CreateAnnouncement) -> Result<Announcement, DeskError> {
        track("publish", bulletin::publish(self.engine.store_mut(), input))
    }

    pub fn delete_announcement(&mut self, id: Uuid) -> Result<Announcement, DeskError> {
        track("delete_announcement", bulletin::delete(self.engine.store_mut(), id))
    }

    // Inbox

    pub fn mark_notification_read(&mut self, id: Uuid) -> Result<(), DeskError> {
        track("mark_notification_read", inbox::mark_read(self.engine.store_mut(), id))
    }

    /// Returns how many notifications changed.
    pub fn mark_all_notifications_read(&mut self) -> Result<usize, DeskError> {
        track(
            "mark_all_notifications_read",
            Ok(inbox::mark_all_read(self.engine.store_mut())),
        )
    }

    /// Dashboard for the given session.
    pub fn snapshot(&self, session: &SessionConfig) -> Result<Snapshot, DeskError> {
        views::snapshot(self.store(), session, Utc::now())
    }

    /// Dashboard for the given session as pretty-printed JSON.
    pub fn render_snapshot(&self, session: &SessionConfig) -> Result<String, DeskError> {
        let snapshot = self.snapshot(session)?;
        tracing::info!(role = %snapshot.role(), "Dashboard snapshot ready");
        Ok(serde_json::to_string_pretty(&snapshot)?)
    }
}

/// Counts the operation by outcome and converts its error.
fn track<T>(operation: &'static str, result: Result<T, DomainError>) -> Result<T, DeskError> {
    let outcome = if result.is_ok() { "ok" } else { "rejected" };
    counter!(
        "desk_operations_total",
        "operation" => operation,
        "outcome" => outcome
    )
    .increment(1);

    result.map_err(|err| {
        tracing::debug!(operation, error = %err, "Operation rejected");
        DeskError::from(err)
    })
}
