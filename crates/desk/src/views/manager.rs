//! Society-scoped dashboard for managers.

use serde::Serialize;

use domain::models::{Announcement, Priority, RequestStatus, ServiceRequest, Society, UserRole};
use domain::repository::{
    AnnouncementRepository, DirectoryRepository, NotificationRepository, ServiceRequestRepository,
};
use domain::services::{bulletin, inbox};

use crate::error::DeskError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDashboard {
    pub society: Society,
    pub total_residents: usize,
    pub total_requests: usize,
    pub active_requests: usize,
    pub pending_approvals: Vec<ServiceRequest>,
    pub urgent_issues: usize,
    pub residents: Vec<ResidentActivity>,
    pub announcements: Vec<Announcement>,
    pub unread_notifications: usize,
}

/// Open requests per resident of the society.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentActivity {
    pub name: String,
    pub flat_number: String,
    pub active_requests: usize,
}

pub fn build<S>(store: &S, society: &str) -> Result<ManagerDashboard, DeskError>
where
    S: ServiceRequestRepository
        + DirectoryRepository
        + AnnouncementRepository
        + NotificationRepository,
{
    let society_record = store
        .societies()
        .iter()
        .find(|s| s.name == society)
        .cloned()
        .ok_or_else(|| DeskError::NotFound(format!("Society not found: {}", society)))?;

    let requests: Vec<&ServiceRequest> = store
        .requests()
        .iter()
        .filter(|r| r.society == society)
        .collect();

    let residents: Vec<ResidentActivity> = store
        .residents()
        .iter()
        .filter(|r| r.society == society)
        .map(|resident| ResidentActivity {
            name: resident.name.clone(),
            flat_number: resident.flat_number.clone(),
            active_requests: requests
                .iter()
                .filter(|r| r.is_active() && r.resident_name == resident.name)
                .count(),
        })
        .collect();

    Ok(ManagerDashboard {
        society: society_record,
        total_residents: residents.len(),
        total_requests: requests.len(),
        active_requests: requests.iter().filter(|r| r.is_active()).count(),
        pending_approvals: requests
            .iter()
            .filter(|r| r.status == RequestStatus::Pending)
            .map(|r| (*r).clone())
            .collect(),
        urgent_issues: requests
            .iter()
            .filter(|r| r.priority == Priority::Urgent)
            .count(),
        residents,
        announcements: bulletin::for_society(store, society)
            .into_iter()
            .cloned()
            .collect(),
        unread_notifications: inbox::for_role(store, UserRole::Manager)
            .iter()
            .filter(|n| !n.read)
            .count(),
    })
}
