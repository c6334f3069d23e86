//! In-memory store backing a desk session.

use uuid::Uuid;

use domain::models::{
    Announcement, MonthlyRevenue, Notification, Payment, Resident, Service, ServiceRequest,
    ServiceStat, Society, Staff,
};
use domain::repository::{
    AnnouncementRepository, CatalogRepository, DirectoryRepository, NotificationRepository,
    PaymentRepository, RevenueRepository, ServiceRequestRepository, StaffRepository,
};

use crate::metrics::OperationTimer;
use crate::seed::{self, Fixture};

/// Owns every collection of a session. Nothing outlives the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    requests: Vec<ServiceRequest>,
    staff: Vec<Staff>,
    payments: Vec<Payment>,
    services: Vec<Service>,
    announcements: Vec<Announcement>,
    notifications: Vec<Notification>,
    monthly_revenue: Vec<MonthlyRevenue>,
    service_stats: Vec<ServiceStat>,
    societies: Vec<Society>,
    residents: Vec<Resident>,
}

/// Record counts per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSizes {
    pub requests: usize,
    pub staff: usize,
    pub payments: usize,
    pub services: usize,
    pub announcements: usize,
    pub notifications: usize,
    pub societies: usize,
    pub residents: usize,
}

impl InMemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store loaded with the demo fixture.
    pub fn seeded() -> Self {
        let timer = OperationTimer::new("seed_load");
        let store = Self::from_fixture(seed::fixture());
        timer.record();

        let sizes = store.sizes();
        tracing::info!(
            requests = sizes.requests,
            staff = sizes.staff,
            payments = sizes.payments,
            services = sizes.services,
            societies = sizes.societies,
            "Store seeded"
        );
        store
    }

    pub fn from_fixture(fixture: Fixture) -> Self {
        Self {
            requests: fixture.requests,
            staff: fixture.staff,
            payments: fixture.payments,
            services: fixture.services,
            announcements: fixture.announcements,
            notifications: fixture.notifications,
            monthly_revenue: fixture.monthly_revenue,
            service_stats: fixture.service_stats,
            societies: fixture.societies,
            residents: fixture.residents,
        }
    }

    pub fn sizes(&self) -> CollectionSizes {
        CollectionSizes {
            requests: self.requests.len(),
            staff: self.staff.len(),
            payments: self.payments.len(),
            services: self.services.len(),
            announcements: self.announcements.len(),
            notifications: self.notifications.len(),
            societies: self.societies.len(),
            residents: self.residents.len(),
        }
    }
}

impl ServiceRequestRepository for InMemoryStore {
    fn requests(&self) -> &[ServiceRequest] {
        &self.requests
    }

    fn request_mut(&mut self, id: Uuid) -> Option<&mut ServiceRequest> {
        self.requests.iter_mut().find(|r| r.id == id)
    }

    fn insert_request(&mut self, request: ServiceRequest) {
        self.requests.push(request);
    }
}

impl StaffRepository for InMemoryStore {
    fn staff(&self) -> &[Staff] {
        &self.staff
    }

    fn staff_mut(&mut self, id: Uuid) -> Option<&mut Staff> {
        self.staff.iter_mut().find(|s| s.id == id)
    }

    fn insert_staff(&mut self, staff: Staff) {
        self.staff.push(staff);
    }

    fn remove_staff(&mut self, id: Uuid) -> Option<Staff> {
        let index = self.staff.iter().position(|s| s.id == id)?;
        Some(self.staff.remove(index))
    }
}

impl PaymentRepository for InMemoryStore {
    fn payments(&self) -> &[Payment] {
        &self.payments
    }
}

impl CatalogRepository for InMemoryStore {
    fn services(&self) -> &[Service] {
        &self.services
    }

    fn service_mut(&mut self, id: Uuid) -> Option<&mut Service> {
        self.services.iter_mut().find(|s| s.id == id)
    }

    fn insert_service(&mut self, service: Service) {
        self.services.push(service);
    }

    fn remove_service(&mut self, id: Uuid) -> Option<Service> {
        let index = self.services.iter().position(|s| s.id == id)?;
        Some(self.services.remove(index))
    }
}

impl AnnouncementRepository for InMemoryStore {
    fn announcements(&self) -> &[Announcement] {
        &self.announcements
    }

    fn prepend_announcement(&mut self, announcement: Announcement) {
        self.announcements.insert(0, announcement);
    }

    fn remove_announcement(&mut self, id: Uuid) -> Option<Announcement> {
        let index = self.announcements.iter().position(|a| a.id == id)?;
        Some(self.announcements.remove(index))
    }
}

impl NotificationRepository for InMemoryStore {
    fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    fn notifications_mut(&mut self) -> &mut [Notification] {
        &mut self.notifications
    }
}

impl RevenueRepository for InMemoryStore {
    fn monthly_revenue(&self) -> &[MonthlyRevenue] {
        &self.monthly_revenue
    }

    fn service_stats(&self) -> &[ServiceStat] {
        &self.service_stats
    }
}

impl DirectoryRepository for InMemoryStore {
    fn societies(&self) -> &[Society] {
        &self.societies
    }

    fn residents(&self) -> &[Resident] {
        &self.residents
    }
}
