//! Platform-wide dashboard for admins.

use chrono::{DateTime, Utc};
use serde::Serialize;

use domain::models::{DashboardMetrics, RequestStatus, ServiceRequest, UserRole};
use domain::repository::{
    DirectoryRepository, NotificationRepository, PaymentRepository, RevenueRepository,
    ServiceRequestRepository, StaffRepository,
};
use domain::services::{compute_dashboard, inbox, MetricsInput};

/// Number of requests in the recent-activity list.
pub const RECENT_REQUESTS: usize = 6;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub total_requests: u64,
    pub pending_requests: u64,
    pub in_progress_requests: u64,
    pub completed_requests: u64,
    pub total_revenue: i64,
    pub societies: usize,
    pub available_staff: usize,
    pub total_staff: usize,
    /// Sum of the recorded staff counters, not the live assignment count.
    pub seeded_assignments: u32,
    pub recent_requests: Vec<ServiceRequest>,
    pub unread_notifications: usize,
    pub metrics: DashboardMetrics,
}

pub fn build<S>(store: &S, generated_at: DateTime<Utc>) -> AdminDashboard
where
    S: ServiceRequestRepository
        + StaffRepository
        + PaymentRepository
        + RevenueRepository
        + DirectoryRepository
        + NotificationRepository,
{
    let metrics = compute_dashboard(
        MetricsInput {
            requests: store.requests(),
            payments: store.payments(),
            monthly_revenue: store.monthly_revenue(),
            service_stats: store.service_stats(),
            staff: store.staff(),
        },
        generated_at,
    );

    let mut recent: Vec<&ServiceRequest> = store.requests().iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let by_status = &metrics.requests.by_status;
    AdminDashboard {
        total_requests: metrics.requests.total,
        pending_requests: by_status.get(RequestStatus::Pending),
        in_progress_requests: by_status.get(RequestStatus::InProgress),
        completed_requests: by_status.get(RequestStatus::Completed),
        total_revenue: metrics.revenue.total_revenue,
        societies: store.societies().len(),
        available_staff: store.staff().iter().filter(|s| s.availability).count(),
        total_staff: store.staff().len(),
        seeded_assignments: store.staff().iter().map(|s| s.assigned_requests).sum(),
        recent_requests: recent
            .into_iter()
            .take(RECENT_REQUESTS)
            .cloned()
            .collect(),
        unread_notifications: inbox::for_role(store, UserRole::Admin)
            .iter()
            .filter(|n| !n.read)
            .count(),
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::InMemoryStore;

    #[test]
    fn test_admin_dashboard_on_fixture() {
        let store = InMemoryStore::seeded();
        let dashboard = build(&store, Utc::now());

        assert_eq!(dashboard.total_requests, store.requests().len() as u64);
        assert_eq!(dashboard.societies, 3);
        assert_eq!(dashboard.total_staff, 5);
        assert_eq!(dashboard.available_staff, 4);
        assert_eq!(dashboard.seeded_assignments, 10);
        assert_eq!(dashboard.recent_requests.len(), RECENT_REQUESTS);
        assert!(dashboard
            .recent_requests
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
        assert_eq!(
            dashboard.total_revenue,
            dashboard.metrics.revenue.points.iter().map(|p| p.revenue).sum::<i64>()
        );
    }

    #[test]
    fn test_admin_dashboard_on_empty_store() {
        let dashboard = build(&InMemoryStore::empty(), Utc::now());

        assert_eq!(dashboard.total_requests, 0);
        assert_eq!(dashboard.total_revenue, 0);
        assert!(dashboard.recent_requests.is_empty());
        assert_eq!(dashboard.unread_notifications, 0);
    }
}
