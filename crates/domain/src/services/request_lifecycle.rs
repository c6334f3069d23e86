//! Service request lifecycle engine.
//!
//! Owns the injected store and applies every status and assignment change to
//! service requests, manages the staff roster, and computes dashboard metrics
//! on demand. All operations are synchronous and either succeed immediately
//! or return a [`DomainError`].

use chrono::{DateTime, NaiveDate, Utc};
use shared::pagination::{decode_cursor, encode_cursor, Page};
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;
use crate::models::{
    CreateServiceRequest, CreateStaff, DashboardMetrics, RequestFilter, RequestStatus,
    ServiceRequest, Staff, StaffWorkload,
};
use crate::repository::{
    PaymentRepository, RevenueRepository, ServiceRequestRepository, StaffRepository,
};
use crate::services::lifecycle::TransitionPolicy;
use crate::services::metrics::{self, MetricsInput};

const REQUEST: &str = "Service request";
const STAFF: &str = "Staff member";

/// Targets accepted by [`RequestLifecycleEngine::transition`].
const TRANSITION_TARGETS: [RequestStatus; 4] = [
    RequestStatus::Approved,
    RequestStatus::InProgress,
    RequestStatus::Completed,
    RequestStatus::Cancelled,
];

pub struct RequestLifecycleEngine<S> {
    store: S,
    policy: TransitionPolicy,
}

impl<S> RequestLifecycleEngine<S> {
    /// Creates an engine with the permissive transition policy.
    pub fn new(store: S) -> Self {
        Self::with_policy(store, TransitionPolicy::default())
    }

    pub fn with_policy(store: S, policy: TransitionPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access for the catalog, bulletin and inbox services.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S> RequestLifecycleEngine<S>
where
    S: ServiceRequestRepository + StaffRepository,
{
    /// Records a new request as pending.
    pub fn create(&mut self, input: CreateServiceRequest) -> Result<ServiceRequest, DomainError> {
        input.validate()?;

        let now = Utc::now();
        let request = ServiceRequest {
            id: Uuid::new_v4(),
            service_id: input.service_id,
            service_name: input.service_name,
            resident_name: input.resident_name,
            resident_flat: input.resident_flat,
            society: input.society,
            description: input.description,
            status: RequestStatus::Pending,
            priority: input.priority,
            assigned_staff: None,
            created_at: now,
            updated_at: now,
            scheduled_date: input.scheduled_date,
            completed_date: None,
        };

        tracing::info!(
            request_id = %request.id,
            service = %request.service_name,
            priority = %request.priority,
            society = %request.society,
            "Service request created"
        );

        self.store.insert_request(request.clone());
        Ok(request)
    }

    pub fn get(&self, id: Uuid) -> Result<&ServiceRequest, DomainError> {
        self.store
            .find_request(id)
            .ok_or_else(|| DomainError::not_found(REQUEST, id))
    }

    /// Assigns a request to a staff member by display name.
    ///
    /// Last write wins: assigning again overwrites the previous staff name.
    pub fn assign(&mut self, id: Uuid, staff_name: &str) -> Result<&ServiceRequest, DomainError> {
        if staff_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "Staff name must not be blank".to_string(),
            ));
        }
        self.apply(id, RequestStatus::Assigned, Some(staff_name))
    }

    /// Assigns a request to a staff member looked up by id.
    ///
    /// Unavailable staff cannot take new assignments.
    pub fn assign_staff(
        &mut self,
        id: Uuid,
        staff_id: Uuid,
    ) -> Result<&ServiceRequest, DomainError> {
        let member = self
            .store
            .find_staff(staff_id)
            .ok_or_else(|| DomainError::not_found(STAFF, staff_id))?;

        if !member.availability {
            return Err(DomainError::Validation(format!(
                "{} is not available for new assignments",
                member.name
            )));
        }

        let name = member.name.clone();
        self.apply(id, RequestStatus::Assigned, Some(&name))
    }

    /// Moves a request to `approved`, `in-progress`, `completed` or `cancelled`.
    ///
    /// `pending` and `assigned` are not valid targets; assignment goes through
    /// [`assign`](Self::assign).
    pub fn transition(
        &mut self,
        id: Uuid,
        to: RequestStatus,
    ) -> Result<&ServiceRequest, DomainError> {
        if !TRANSITION_TARGETS.contains(&to) {
            return Err(DomainError::Validation(format!(
                "Cannot set status to {} directly",
                to
            )));
        }
        self.apply(id, to, None)
    }

    /// Approves a request. The current status is not required to be pending.
    pub fn approve(&mut self, id: Uuid) -> Result<&ServiceRequest, DomainError> {
        self.apply(id, RequestStatus::Approved, None)
    }

    /// Rejects a request by cancelling it.
    pub fn reject(&mut self, id: Uuid) -> Result<&ServiceRequest, DomainError> {
        self.apply(id, RequestStatus::Cancelled, None)
    }

    /// Sets the visit date of an open request.
    pub fn schedule(&mut self, id: Uuid, date: NaiveDate) -> Result<&ServiceRequest, DomainError> {
        let request = self
            .store
            .request_mut(id)
            .ok_or_else(|| DomainError::not_found(REQUEST, id))?;

        if request.is_terminal() {
            return Err(DomainError::TerminalStatus {
                id: id.to_string(),
                status: request.status,
            });
        }

        request.scheduled_date = Some(date);
        request.updated_at = Utc::now();
        tracing::info!(request_id = %id, scheduled_date = %date, "Service request scheduled");
        Ok(&*request)
    }

    fn apply(
        &mut self,
        id: Uuid,
        to: RequestStatus,
        staff_name: Option<&str>,
    ) -> Result<&ServiceRequest, DomainError> {
        let policy = self.policy;
        let request = self
            .store
            .request_mut(id)
            .ok_or_else(|| DomainError::not_found(REQUEST, id))?;

        let from = request.status;
        if let Err(err) = policy.check(id, from, to) {
            tracing::warn!(request_id = %id, from = %from, to = %to, error = %err, "Transition rejected");
            return Err(err);
        }

        let now = Utc::now();
        request.status = to;
        request.updated_at = now;
        if let Some(name) = staff_name {
            request.assigned_staff = Some(name.to_string());
        }
        if to == RequestStatus::Completed {
            request.completed_date = Some(now.date_naive());
        }

        tracing::info!(
            request_id = %id,
            from = %from,
            to = %to,
            staff = request.assigned_staff.as_deref().unwrap_or("-"),
            "Service request status updated"
        );
        Ok(&*request)
    }

    /// Requests matching `filter`, newest first.
    pub fn search(&self, filter: &RequestFilter) -> Vec<&ServiceRequest> {
        let mut matched: Vec<&ServiceRequest> = self
            .store
            .requests()
            .iter()
            .filter(|r| filter.matches(r))
            .collect();
        matched.sort_by(|a, b| newest_first(a.created_at, a.id, b.created_at, b.id));
        matched
    }

    /// One page of matching requests, newest first.
    ///
    /// `cursor` is the `next_cursor` of the previous page.
    pub fn list_requests(
        &self,
        filter: &RequestFilter,
        cursor: Option<&str>,
        limit: usize,
    ) -> Result<Page<ServiceRequest>, DomainError> {
        if limit == 0 {
            return Err(DomainError::Validation(
                "Page size must be at least 1".to_string(),
            ));
        }

        let matched = self.search(filter);
        let total = matched.len();

        let start = match cursor {
            None => 0,
            Some(cursor) => {
                let (created_at, id) = decode_cursor(cursor)?;
                matched
                    .iter()
                    .position(|r| {
                        newest_first(created_at, id, r.created_at, r.id).is_lt()
                    })
                    .unwrap_or(total)
            }
        };

        let items: Vec<ServiceRequest> = matched
            .iter()
            .skip(start)
            .take(limit)
            .map(|r| (*r).clone())
            .collect();

        let next_cursor = if start + items.len() < total {
            items.last().map(|last| encode_cursor(last.created_at, last.id))
        } else {
            None
        };

        Ok(Page {
            items,
            next_cursor,
            total,
        })
    }

    /// Flips a staff member's availability. Assignments are left untouched.
    pub fn toggle_availability(&mut self, staff_id: Uuid) -> Result<&Staff, DomainError> {
        let member = self
            .store
            .staff_mut(staff_id)
            .ok_or_else(|| DomainError::not_found(STAFF, staff_id))?;

        member.availability = !member.availability;
        tracing::info!(
            staff_id = %staff_id,
            name = %member.name,
            available = member.availability,
            "Staff availability updated"
        );
        Ok(&*member)
    }

    /// Onboards a staff member: available, unrated, no assignments.
    pub fn add_staff(&mut self, input: CreateStaff) -> Result<Staff, DomainError> {
        input.validate()?;

        let member = Staff {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            specialty: input.specialty,
            availability: true,
            assigned_requests: 0,
            rating: 0.0,
            joined_date: Utc::now().date_naive(),
        };

        tracing::info!(staff_id = %member.id, name = %member.name, specialty = %member.specialty, "Staff member added");
        self.store.insert_staff(member.clone());
        Ok(member)
    }

    /// Removes a staff member.
    ///
    /// Requests already assigned keep the removed member's name.
    pub fn remove_staff(&mut self, staff_id: Uuid) -> Result<Staff, DomainError> {
        let removed = self
            .store
            .remove_staff(staff_id)
            .ok_or_else(|| DomainError::not_found(STAFF, staff_id))?;

        let orphaned = metrics::live_assignment_count(&removed.name, self.store.requests());
        if orphaned > 0 {
            tracing::warn!(
                staff_id = %staff_id,
                name = %removed.name,
                open_assignments = orphaned,
                "Removed staff member still named on open requests"
            );
        } else {
            tracing::info!(staff_id = %staff_id, name = %removed.name, "Staff member removed");
        }
        Ok(removed)
    }

    /// Staff who can take new assignments.
    pub fn available_staff(&self) -> Vec<&Staff> {
        self.store.staff().iter().filter(|s| s.availability).collect()
    }

    /// Seeded and live assignment counts per staff member.
    pub fn workload(&self) -> Vec<StaffWorkload> {
        metrics::staff_workload(self.store.staff(), self.store.requests())
    }
}

impl<S> RequestLifecycleEngine<S>
where
    S: ServiceRequestRepository + StaffRepository + PaymentRepository + RevenueRepository,
{
    /// Computes the dashboard metrics from the current store contents.
    pub fn metrics(&self) -> DashboardMetrics {
        self.metrics_at(Utc::now())
    }

    pub fn metrics_at(&self, generated_at: DateTime<Utc>) -> DashboardMetrics {
        metrics::compute_dashboard(
            MetricsInput {
                requests: self.store.requests(),
                payments: self.store.payments(),
                monthly_revenue: self.store.monthly_revenue(),
                service_stats: self.store.service_stats(),
                staff: self.store.staff(),
            },
            generated_at,
        )
    }
}

/// Ordering for newest-first listings: later `created_at` first, ties broken
/// by descending id.
fn newest_first(
    a_created: DateTime<Utc>,
    a_id: Uuid,
    b_created: DateTime<Utc>,
    b_id: Uuid,
) -> std::cmp::Ordering {
    b_created.cmp(&a_created).then_with(|| b_id.cmp(&a_id))
}
