//! Demo fixture loaded into a fresh session.
//!
//! The staff `assigned_requests` counters are recorded figures, independent of
//! the requests below. A fresh session shows workload drift.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use domain::models::{
    Announcement, AnnouncementKind, Audience, MonthlyRevenue, Notification, NotificationKind,
    Payment, PaymentStatus, Priority, RequestStatus, Resident, Service, ServiceRequest,
    ServiceStat, Society, Staff, TargetRole,
};

pub const SUNRISE_HEIGHTS: &str = "Sunrise Heights";
pub const GREEN_VALLEY: &str = "Green Valley Residency";
pub const PALM_GROVE: &str = "Palm Grove Estates";

/// Every collection of a seeded session.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub societies: Vec<Society>,
    pub residents: Vec<Resident>,
    pub staff: Vec<Staff>,
    pub services: Vec<Service>,
    pub requests: Vec<ServiceRequest>,
    pub payments: Vec<Payment>,
    pub announcements: Vec<Announcement>,
    pub notifications: Vec<Notification>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
    pub service_stats: Vec<ServiceStat>,
}

pub fn fixture() -> Fixture {
    let services = services();
    let requests = requests(&services);
    let payments = payments(&requests);

    Fixture {
        societies: societies(),
        residents: residents(),
        staff: staff(),
        services,
        requests,
        payments,
        announcements: announcements(),
        notifications: notifications(),
        monthly_revenue: monthly_revenue(),
        service_stats: service_stats(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .unwrap_or_default()
        .and_utc()
}

fn societies() -> Vec<Society> {
    [
        (SUNRISE_HEIGHTS, "Sector 45, Gurugram", 240, 212, "Meera Iyer"),
        (GREEN_VALLEY, "Baner Road, Pune", 180, 151, "Arjun Nair"),
        (PALM_GROVE, "Whitefield, Bengaluru", 320, 287, "Kavita Joshi"),
    ]
    .into_iter()
    .map(|(name, address, total_flats, active_residents, manager)| Society {
        id: Uuid::new_v4(),
        name: name.to_string(),
        address: address.to_string(),
        total_flats,
        active_residents,
        manager_name: manager.to_string(),
    })
    .collect()
}

fn residents() -> Vec<Resident> {
    [
        ("Rajesh Sharma", SUNRISE_HEIGHTS, "A-402", "+91 98765 43210", date(2024, 6, 12)),
        ("Priya Mehta", SUNRISE_HEIGHTS, "B-105", "+91 98111 22334", date(2024, 9, 3)),
        ("Anita Desai", GREEN_VALLEY, "C-301", "+91 99200 45678", date(2023, 11, 20)),
        ("Vikram Rao", GREEN_VALLEY, "D-210", "+91 97654 32109", date(2025, 1, 8)),
        ("Neha Kapoor", PALM_GROVE, "E-12", "+91 98989 12121", date(2024, 3, 15)),
        ("Sanjay Gupta", PALM_GROVE, "F-701", "+91 96543 21098", date(2025, 5, 27)),
    ]
    .into_iter()
    .map(|(name, society, flat, phone, joined)| Resident {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: phone.to_string(),
        society: society.to_string(),
        flat_number: flat.to_string(),
        joined_date: joined,
    })
    .collect()
}

fn staff() -> Vec<Staff> {
    [
        ("Suresh Kumar", "Plumber", true, 3, 4.6, date(2023, 4, 1)),
        ("Amit Patel", "Electrician", true, 4, 4.8, date(2022, 8, 15)),
        ("Ravi Singh", "Cleaner", true, 2, 4.3, date(2024, 2, 10)),
        ("Deepak Verma", "Painter", true, 1, 4.1, date(2024, 10, 5)),
        ("Manoj Yadav", "Pest Control", false, 0, 0.0, date(2026, 1, 20)),
    ]
    .into_iter()
    .map(|(name, specialty, availability, assigned_requests, rating, joined)| Staff {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@societydesk.example", name.to_lowercase().replace(' ', ".")),
        phone: "+91 90000 00000".to_string(),
        specialty: specialty.to_string(),
        availability,
        assigned_requests,
        rating,
        joined_date: joined,
    })
    .collect()
}

fn services() -> Vec<Service> {
    [
        ("AC Repair", "Gas refill, servicing and repairs", "Appliances", 599, "/visit", true),
        ("Plumbing", "Leaks, blockages and fittings", "Plumbing", 350, "/visit", true),
        ("Electrical", "Wiring, switches and fixtures", "Electrical", 400, "/visit", true),
        ("Deep Cleaning", "Full flat deep cleaning", "Cleaning", 1999, "/flat", true),
        ("Pest Control", "Cockroach and termite treatment", "Cleaning", 1200, "/flat", true),
        ("Carpentry", "Furniture repair and assembly", "Carpentry", 650, "/visit", true),
        ("Painting", "Interior wall painting", "Painting", 4500, "/room", true),
        ("Appliance Repair", "Washing machine and fridge repair", "Appliances", 499, "/visit", false),
    ]
    .into_iter()
    .map(|(name, description, category, base_price, unit, active)| Service {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        base_price,
        price_unit: unit.to_string(),
        active,
    })
    .collect()
}

struct SeedRequest {
    service: &'static str,
    resident: &'static str,
    flat: &'static str,
    society: &'static str,
    description: &'static str,
    status: RequestStatus,
    priority: Priority,
    staff: Option<&'static str>,
    created: DateTime<Utc>,
}

fn requests(services: &[Service]) -> Vec<ServiceRequest> {
    use Priority::*;
    use RequestStatus::*;

    let seeds = [
        SeedRequest {
            service: "AC Repair",
            resident: "Rajesh Sharma",
            flat: "A-402",
            society: SUNRISE_HEIGHTS,
            description: "Bedroom AC not cooling",
            status: Pending,
            priority: High,
            staff: None,
            created: at(2026, 2, 20, 9),
        },
        SeedRequest {
            service: "Plumbing",
            resident: "Priya Mehta",
            flat: "B-105",
            society: SUNRISE_HEIGHTS,
            description: "Kitchen sink leaking",
            status: Assigned,
            priority: Medium,
            staff: Some("Suresh Kumar"),
            created: at(2026, 2, 18, 11),
        },
        SeedRequest {
            service: "Electrical",
            resident: "Rajesh Sharma",
            flat: "A-402",
            society: SUNRISE_HEIGHTS,
            description: "Sparking switchboard in hall",
            status: InProgress,
            priority: Urgent,
            staff: Some("Amit Patel"),
            created: at(2026, 2, 17, 8),
        },
        SeedRequest {
            service: "Deep Cleaning",
            resident: "Anita Desai",
            flat: "C-301",
            society: GREEN_VALLEY,
            description: "Move-in cleaning for 3BHK",
            status: Completed,
            priority: Low,
            staff: Some("Ravi Singh"),
            created: at(2026, 2, 10, 10),
        },
        SeedRequest {
            service: "Pest Control",
            resident: "Vikram Rao",
            flat: "D-210",
            society: GREEN_VALLEY,
            description: "Cockroach treatment for kitchen",
            status: Approved,
            priority: Medium,
            staff: None,
            created: at(2026, 2, 15, 14),
        },
        SeedRequest {
            service: "Carpentry",
            resident: "Neha Kapoor",
            flat: "E-12",
            society: PALM_GROVE,
            description: "Wardrobe hinge replacement",
            status: Cancelled,
            priority: Low,
            staff: None,
            created: at(2026, 2, 5, 16),
        },
        SeedRequest {
            service: "Painting",
            resident: "Rajesh Sharma",
            flat: "A-402",
            society: SUNRISE_HEIGHTS,
            description: "Repaint living room",
            status: Completed,
            priority: Medium,
            staff: Some("Deepak Verma"),
            created: at(2026, 1, 28, 9),
        },
        SeedRequest {
            service: "Appliance Repair",
            resident: "Sanjay Gupta",
            flat: "F-701",
            society: PALM_GROVE,
            description: "Washing machine not draining",
            status: Pending,
            priority: Urgent,
            staff: None,
            created: at(2026, 2, 21, 7),
        },
        SeedRequest {
            service: "AC Repair",
            resident: "Priya Mehta",
            flat: "B-105",
            society: SUNRISE_HEIGHTS,
            description: "AC making noise",
            status: Assigned,
            priority: High,
            staff: Some("Amit Patel"),
            created: at(2026, 2, 19, 13),
        },
        SeedRequest {
            service: "Plumbing",
            resident: "Anita Desai",
            flat: "C-301",
            society: GREEN_VALLEY,
            description: "Low water pressure in bathroom",
            status: Pending,
            priority: Low,
            staff: None,
            created: at(2026, 2, 21, 12),
        },
    ];

    seeds
        .into_iter()
        .map(|seed| {
            let service_id = services
                .iter()
                .find(|s| s.name == seed.service)
                .map(|s| s.id)
                .unwrap_or_else(Uuid::new_v4);
            let completed_date = (seed.status == RequestStatus::Completed)
                .then(|| (seed.created + chrono::Duration::days(2)).date_naive());

            ServiceRequest {
                id: Uuid::new_v4(),
                service_id,
                service_name: seed.service.to_string(),
                resident_name: seed.resident.to_string(),
                resident_flat: seed.flat.to_string(),
                society: seed.society.to_string(),
                description: seed.description.to_string(),
                status: seed.status,
                priority: seed.priority,
                assigned_staff: seed.staff.map(str::to_string),
                created_at: seed.created,
                updated_at: seed.created,
                scheduled_date: None,
                completed_date,
            }
        })
        .collect()
}

fn payments(requests: &[ServiceRequest]) -> Vec<Payment> {
    let billed = [
        ("Deep Cleaning", "Anita Desai", 1999, PaymentStatus::Paid, date(2026, 2, 12)),
        ("Painting", "Rajesh Sharma", 4500, PaymentStatus::Paid, date(2026, 1, 31)),
        ("Electrical", "Rajesh Sharma", 800, PaymentStatus::Pending, date(2026, 2, 18)),
        ("Plumbing", "Priya Mehta", 350, PaymentStatus::Overdue, date(2026, 2, 1)),
        ("AC Repair", "Priya Mehta", 599, PaymentStatus::Pending, date(2026, 2, 20)),
        ("Carpentry", "Neha Kapoor", 650, PaymentStatus::Refunded, date(2026, 2, 6)),
    ];

    billed
        .into_iter()
        .enumerate()
        .filter_map(|(index, (service, resident, amount, status, paid_on))| {
            let request = requests
                .iter()
                .find(|r| r.service_name == service && r.resident_name == resident)?;
            Some(Payment {
                id: Uuid::new_v4(),
                request_id: request.id,
                service_name: service.to_string(),
                amount,
                status,
                date: paid_on,
                invoice_number: format!("INV-2026-{:04}", index + 1),
                resident_name: resident.to_string(),
                society: request.society.clone(),
            })
        })
        .collect()
}

fn announcements() -> Vec<Announcement> {
    [
        (
            "Water supply interruption",
            "Water supply will be off on Saturday from 10 AM to 2 PM for tank cleaning.",
            Audience::Society(SUNRISE_HEIGHTS.to_string()),
            AnnouncementKind::Warning,
            date(2026, 2, 20),
        ),
        (
            "New service: Pest Control",
            "Quarterly pest control packages are now available for all societies.",
            Audience::All,
            AnnouncementKind::Info,
            date(2026, 2, 14),
        ),
        (
            "Lift maintenance",
            "Tower B lift is under emergency maintenance. Please use Tower A.",
            Audience::Society(PALM_GROVE.to_string()),
            AnnouncementKind::Urgent,
            date(2026, 2, 11),
        ),
    ]
    .into_iter()
    .map(|(title, message, audience, kind, created_at)| Announcement {
        id: Uuid::new_v4(),
        title: title.to_string(),
        message: message.to_string(),
        audience,
        kind,
        created_at,
    })
    .collect()
}

fn notifications() -> Vec<Notification> {
    [
        ("Request assigned", "Your plumbing request has been assigned to Suresh Kumar.", NotificationKind::Info, false, TargetRole::Resident, at(2026, 2, 18, 12)),
        ("Payment due", "Invoice INV-2026-0003 for Electrical is pending.", NotificationKind::Warning, false, TargetRole::Resident, at(2026, 2, 18, 15)),
        ("Urgent request", "An urgent appliance repair was raised at Palm Grove Estates.", NotificationKind::Error, false, TargetRole::Manager, at(2026, 2, 21, 7)),
        ("Invoice overdue", "Invoice INV-2026-0004 is overdue.", NotificationKind::Warning, false, TargetRole::Admin, at(2026, 2, 15, 9)),
        ("Cleaning completed", "Deep cleaning at C-301 was completed.", NotificationKind::Success, true, TargetRole::All, at(2026, 2, 12, 18)),
    ]
    .into_iter()
    .map(|(title, message, kind, read, target_role, created_at)| Notification {
        id: Uuid::new_v4(),
        title: title.to_string(),
        message: message.to_string(),
        kind,
        read,
        created_at,
        target_role,
    })
    .collect()
}

fn monthly_revenue() -> Vec<MonthlyRevenue> {
    [
        ("Sep", 98_400, 142),
        ("Oct", 112_750, 158),
        ("Nov", 104_300, 149),
        ("Dec", 126_900, 171),
        ("Jan", 131_200, 176),
        ("Feb", 119_850, 163),
    ]
    .into_iter()
    .map(|(month, revenue, requests)| MonthlyRevenue {
        month: month.to_string(),
        revenue,
        requests,
    })
    .collect()
}

fn service_stats() -> Vec<ServiceStat> {
    [
        ("AC Repair", 212, 126_988),
        ("Plumbing", 186, 65_100),
        ("Electrical", 154, 61_600),
        ("Deep Cleaning", 98, 195_902),
        ("Pest Control", 76, 91_200),
    ]
    .into_iter()
    .map(|(name, requests, revenue)| ServiceStat {
        name: name.to_string(),
        requests,
        revenue,
    })
    .collect()
}
