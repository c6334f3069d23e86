//! Personal dashboard for a resident.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use domain::models::{
    Announcement, Payment, PaymentStatus, Priority, RequestStatus, Resident, ServiceRequest,
    UserRole,
};
use domain::repository::{
    AnnouncementRepository, DirectoryRepository, NotificationRepository, PaymentRepository,
    ServiceRequestRepository,
};
use domain::services::{bulletin, inbox};

use crate::error::DeskError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentDashboard {
    pub resident: Resident,
    pub active_requests: usize,
    pub completed_requests: usize,
    /// Sum of invoices still awaiting payment; overdue invoices are not
    /// included.
    pub pending_payment_amount: i64,
    pub total_paid: i64,
    pub requests: Vec<RequestProgress>,
    pub payments: Vec<Payment>,
    pub announcements: Vec<Announcement>,
    pub unread_notifications: usize,
}

/// A request as shown on the resident's tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestProgress {
    pub id: Uuid,
    pub service_name: String,
    pub status: RequestStatus,
    pub priority: Priority,
    pub assigned_staff: Option<String>,
    pub progress_percent: u8,
    pub created_at: DateTime<Utc>,
}

impl From<&ServiceRequest> for RequestProgress {
    fn from(request: &ServiceRequest) -> Self {
        Self {
            id: request.id,
            service_name: request.service_name.clone(),
            status: request.status,
            priority: request.priority,
            assigned_staff: request.assigned_staff.clone(),
            progress_percent: request.status.progress_percent(),
            created_at: request.created_at,
        }
    }
}

pub fn build<S>(store: &S, resident_name: &str) -> Result<ResidentDashboard, DeskError>
where
    S: ServiceRequestRepository
        + PaymentRepository
        + DirectoryRepository
        + AnnouncementRepository
        + NotificationRepository,
{
    let resident = store
        .residents()
        .iter()
        .find(|r| r.name == resident_name)
        .cloned()
        .ok_or_else(|| DeskError::NotFound(format!("Resident not found: {}", resident_name)))?;

    let mut requests: Vec<&ServiceRequest> = store
        .requests()
        .iter()
        .filter(|r| r.resident_name == resident_name)
        .collect();
    requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let payments: Vec<Payment> = store
        .payments()
        .iter()
        .filter(|p| p.resident_name == resident_name)
        .cloned()
        .collect();

    let sum_where = |status: PaymentStatus| -> i64 {
        payments
            .iter()
            .filter(|p| p.status == status)
            .map(|p| p.amount)
            .sum()
    };

    Ok(ResidentDashboard {
        active_requests: requests.iter().filter(|r| r.is_active()).count(),
        completed_requests: requests
            .iter()
            .filter(|r| r.status == RequestStatus::Completed)
            .count(),
        pending_payment_amount: sum_where(PaymentStatus::Pending),
        total_paid: sum_where(PaymentStatus::Paid),
        requests: requests.into_iter().map(RequestProgress::from).collect(),
        announcements: bulletin::for_society(store, &resident.society)
            .into_iter()
            .cloned()
            .collect(),
        unread_notifications: inbox::for_role(store, UserRole::Resident)
            .iter()
            .filter(|n| !n.read)
            .count(),
        payments,
        resident,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::InMemoryStore;

    #[test]
    fn test_resident_dashboard_on_fixture() {
        let store = InMemoryStore::seeded();
        let dashboard = build(&store, "Rajesh Sharma").unwrap();

        assert_eq!(dashboard.resident.flat_number, "A-402");
        assert_eq!(dashboard.active_requests, 2);
        assert_eq!(dashboard.completed_requests, 1);
        assert_eq!(dashboard.pending_payment_amount, 800);
        assert_eq!(dashboard.total_paid, 4500);
        assert_eq!(dashboard.requests.len(), 3);
        assert_eq!(dashboard.unread_notifications, 2);
    }

    #[test]
    fn test_resident_progress_percent() {
        let store = InMemoryStore::seeded();
        let dashboard = build(&store, "Rajesh Sharma").unwrap();

        for progress in &dashboard.requests {
            let expected = match progress.status {
                RequestStatus::Pending => 20,
                RequestStatus::Approved => 40,
                RequestStatus::Assigned => 60,
                RequestStatus::InProgress => 80,
                RequestStatus::Completed => 100,
                RequestStatus::Cancelled => 0,
            };
            assert_eq!(progress.progress_percent, expected);
        }
    }

    #[test]
    fn test_resident_dashboard_unknown_resident() {
        let store = InMemoryStore::seeded();
        assert!(matches!(
            build(&store, "Nobody Here").unwrap_err(),
            DeskError::NotFound(_)
        ));
    }
}
