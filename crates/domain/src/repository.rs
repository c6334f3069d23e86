//! Repository traits implemented by the store layer.
//!
//! Collections are ordered; lookups are by id. Implementations own their data
//! outright, so reads hand out slices and writes take `&mut self`.

use uuid::Uuid;

use crate::models::{
    Announcement, MonthlyRevenue, Notification, Payment, Resident, Service, ServiceRequest,
    ServiceStat, Society, Staff,
};

pub trait ServiceRequestRepository {
    fn requests(&self) -> &[ServiceRequest];

    fn request_mut(&mut self, id: Uuid) -> Option<&mut ServiceRequest>;

    fn insert_request(&mut self, request: ServiceRequest);

    fn find_request(&self, id: Uuid) -> Option<&ServiceRequest> {
        self.requests().iter().find(|r| r.id == id)
    }
}

pub trait StaffRepository {
    fn staff(&self) -> &[Staff];

    fn staff_mut(&mut self, id: Uuid) -> Option<&mut Staff>;

    fn insert_staff(&mut self, staff: Staff);

    fn remove_staff(&mut self, id: Uuid) -> Option<Staff>;

    fn find_staff(&self, id: Uuid) -> Option<&Staff> {
        self.staff().iter().find(|s| s.id == id)
    }
}

pub trait PaymentRepository {
    fn payments(&self) -> &[Payment];
}

pub trait CatalogRepository {
    fn services(&self) -> &[Service];

    fn service_mut(&mut self, id: Uuid) -> Option<&mut Service>;

    fn insert_service(&mut self, service: Service);

    fn remove_service(&mut self, id: Uuid) -> Option<Service>;
}

/// Announcements are kept newest first.
pub trait AnnouncementRepository {
    fn announcements(&self) -> &[Announcement];

    fn prepend_announcement(&mut self, announcement: Announcement);

    fn remove_announcement(&mut self, id: Uuid) -> Option<Announcement>;
}

pub trait NotificationRepository {
    fn notifications(&self) -> &[Notification];

    fn notifications_mut(&mut self) -> &mut [Notification];
}

/// Pre-aggregated revenue figures supplied by finance.
pub trait RevenueRepository {
    fn monthly_revenue(&self) -> &[MonthlyRevenue];

    fn service_stats(&self) -> &[ServiceStat];
}

pub trait DirectoryRepository {
    fn societies(&self) -> &[Society];

    fn residents(&self) -> &[Resident];
}
