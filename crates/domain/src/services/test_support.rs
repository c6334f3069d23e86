//! Vec-backed store and record builders for service tests.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::models::{
    Announcement, MonthlyRevenue, Notification, Payment, PaymentStatus, Priority,
    RequestStatus, Service, ServiceRequest, ServiceStat, Staff,
};
use crate::repository::{
    AnnouncementRepository, CatalogRepository, NotificationRepository, PaymentRepository,
    RevenueRepository, ServiceRequestRepository, StaffRepository,
};

#[derive(Debug, Default)]
pub struct VecStore {
    pub requests: Vec<ServiceRequest>,
    pub staff: Vec<Staff>,
    pub payments: Vec<Payment>,
    pub services: Vec<Service>,
    pub announcements: Vec<Announcement>,
    pub notifications: Vec<Notification>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub service_stats: Vec<ServiceStat>,
}

impl ServiceRequestRepository for VecStore {
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

impl StaffRepository for VecStore {
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

impl PaymentRepository for VecStore {
    fn payments(&self) -> &[Payment] {
        &self.payments
    }
}

impl CatalogRepository for VecStore {
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

impl AnnouncementRepository for VecStore {
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

impl NotificationRepository for VecStore {
    fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    fn notifications_mut(&mut self) -> &mut [Notification] {
        &mut self.notifications
    }
}

impl RevenueRepository for VecStore {
    fn monthly_revenue(&self) -> &[MonthlyRevenue] {
        &self.monthly_revenue
    }

    fn service_stats(&self) -> &[ServiceStat] {
        &self.service_stats
    }
}

pub fn request(service_name: &str, status: RequestStatus, priority: Priority) -> ServiceRequest {
    let now = Utc::now();
    ServiceRequest {
        id: Uuid::new_v4(),
        service_id: Uuid::new_v4(),
        service_name: service_name.to_string(),
        resident_name: "Rajesh Sharma".to_string(),
        resident_flat: "A-402".to_string(),
        society: "Sunrise Heights".to_string(),
        description: format!("{} needed", service_name),
        status,
        priority,
        assigned_staff: None,
        created_at: now,
        updated_at: now,
        scheduled_date: None,
        completed_date: None,
    }
}

pub fn staff_member(name: &str) -> Staff {
    Staff {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "+91 98200 11223".to_string(),
        specialty: "Electrician".to_string(),
        availability: true,
        assigned_requests: 0,
        rating: 4.5,
        joined_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
    }
}

pub fn payment(amount: i64, status: PaymentStatus) -> Payment {
    Payment {
        id: Uuid::new_v4(),
        request_id: Uuid::new_v4(),
        service_name: "AC Repair".to_string(),
        amount,
        status,
        date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        invoice_number: "INV-2026-0001".to_string(),
        resident_name: "Rajesh Sharma".to_string(),
        society: "Sunrise Heights".to_string(),
    }
}
