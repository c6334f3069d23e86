//! Dashboard metrics computation.
//!
//! Every function here is a single pass over its inputs and never mutates
//! them. The same inputs always produce the same output; the only clock
//! reading, `generated_at`, is supplied by the caller.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::models::{
    BillingSummary, DashboardMetrics, MonthlyRevenue, Payment, PaymentStatus, RequestMetrics,
    RevenueTrend, ServiceRequest, ServiceStat, Staff, StaffWorkload,
};

/// Borrowed inputs for [`compute_dashboard`].
#[derive(Debug, Clone, Copy)]
pub struct MetricsInput<'a> {
    pub requests: &'a [ServiceRequest],
    pub payments: &'a [Payment],
    pub monthly_revenue: &'a [MonthlyRevenue],
    pub service_stats: &'a [ServiceStat],
    pub staff: &'a [Staff],
}

/// Counts requests by status and by priority.
pub fn request_metrics(requests: &[ServiceRequest]) -> RequestMetrics {
    requests
        .iter()
        .fold(RequestMetrics::default(), |mut metrics, request| {
            metrics.total += 1;
            if request.is_active() {
                metrics.active += 1;
            }
            metrics.by_status.record(request.status);
            metrics.by_priority.record(request.priority);
            metrics
        })
}

/// Sums invoice amounts per payment status.
pub fn billing_summary(payments: &[Payment]) -> BillingSummary {
    payments
        .iter()
        .fold(BillingSummary::default(), |mut summary, payment| {
            summary.invoice_count += 1;
            match payment.status {
                PaymentStatus::Paid => {
                    summary.total_paid += payment.amount;
                    summary.paid_count += 1;
                }
                PaymentStatus::Pending => summary.total_pending += payment.amount,
                PaymentStatus::Overdue => summary.total_overdue += payment.amount,
                PaymentStatus::Refunded => summary.total_refunded += payment.amount,
            }
            summary
        })
}

/// Passes the monthly buckets through and adds their revenue total.
///
/// Buckets are pre-aggregated; nothing is derived from requests or payments.
pub fn revenue_trend(points: &[MonthlyRevenue]) -> RevenueTrend {
    RevenueTrend {
        total_revenue: points.iter().map(|p| p.revenue).sum(),
        points: points.to_vec(),
    }
}

/// Number of open requests assigned to `staff_name`.
pub fn live_assignment_count(staff_name: &str, requests: &[ServiceRequest]) -> u32 {
    requests
        .iter()
        .filter(|r| r.is_active() && r.assigned_staff.as_deref() == Some(staff_name))
        .count() as u32
}

/// Seeded versus live assignment counts for every staff member.
///
/// Requests are joined to staff by display name.
pub fn staff_workload(staff: &[Staff], requests: &[ServiceRequest]) -> Vec<StaffWorkload> {
    let mut live: HashMap<&str, u32> = HashMap::new();
    for request in requests.iter().filter(|r| r.is_active()) {
        if let Some(name) = request.assigned_staff.as_deref() {
            *live.entry(name).or_default() += 1;
        }
    }

    staff
        .iter()
        .map(|member| {
            let live_count = live.get(member.name.as_str()).copied().unwrap_or(0);
            StaffWorkload {
                staff_id: member.id,
                name: member.name.clone(),
                available: member.availability,
                seeded: member.assigned_requests,
                live: live_count,
                drift: live_count != member.assigned_requests,
            }
        })
        .collect()
}

/// Bundles every metric into one dashboard payload.
pub fn compute_dashboard(input: MetricsInput<'_>, generated_at: DateTime<Utc>) -> DashboardMetrics {
    DashboardMetrics {
        requests: request_metrics(input.requests),
        billing: billing_summary(input.payments),
        revenue: revenue_trend(input.monthly_revenue),
        service_stats: input.service_stats.to_vec(),
        workload: staff_workload(input.staff, input.requests),
        generated_at,
    }
}
