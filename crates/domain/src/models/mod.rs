//! Domain models for the society services desk.

pub mod announcement;
pub mod dashboard;
pub mod notification;
pub mod payment;
pub mod service;
pub mod service_request;
pub mod society;
pub mod staff;

pub use announcement::{Announcement, AnnouncementKind, Audience, CreateAnnouncement};
pub use dashboard::{
    BillingSummary, DashboardMetrics, MonthlyRevenue, PriorityBreakdown, RequestMetrics,
    RevenueTrend, ServiceStat, StatusBreakdown,
};
pub use notification::{Notification, NotificationKind, TargetRole, UserRole};
pub use payment::{Payment, PaymentStatus};
pub use service::{CreateService, Service};
pub use service_request::{CreateServiceRequest, Priority, RequestFilter, RequestStatus, ServiceRequest};
pub use society::{Resident, Society};
pub use staff::{CreateStaff, Staff, StaffWorkload};
