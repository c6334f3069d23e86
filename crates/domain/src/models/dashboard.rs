//! Dashboard metrics domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::service_request::{Priority, RequestStatus};
use super::staff::StaffWorkload;

/// Request counts by lifecycle status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub pending: u64,
    pub approved: u64,
    pub assigned: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
}

impl StatusBreakdown {
    pub fn record(&mut self, status: RequestStatus) {
        *self.slot(status) += 1;
    }

    pub fn get(&self, status: RequestStatus) -> u64 {
        match status {
            RequestStatus::Pending => self.pending,
            RequestStatus::Approved => self.approved,
            RequestStatus::Assigned => self.assigned,
            RequestStatus::InProgress => self.in_progress,
            RequestStatus::Completed => self.completed,
            RequestStatus::Cancelled => self.cancelled,
        }
    }

    /// Completed plus cancelled.
    pub fn terminal(&self) -> u64 {
        self.completed + self.cancelled
    }

    fn slot(&mut self, status: RequestStatus) -> &mut u64 {
        match status {
            RequestStatus::Pending => &mut self.pending,
            RequestStatus::Approved => &mut self.approved,
            RequestStatus::Assigned => &mut self.assigned,
            RequestStatus::InProgress => &mut self.in_progress,
            RequestStatus::Completed => &mut self.completed,
            RequestStatus::Cancelled => &mut self.cancelled,
        }
    }
}

/// Request counts by priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityBreakdown {
    pub low: u64,
    pub medium: u64,
    pub high: u64,
    pub urgent: u64,
}

impl PriorityBreakdown {
    pub fn record(&mut self, priority: Priority) {
        match priority {
            Priority::Low => self.low += 1,
            Priority::Medium => self.medium += 1,
            Priority::High => self.high += 1,
            Priority::Urgent => self.urgent += 1,
        }
    }

    pub fn get(&self, priority: Priority) -> u64 {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
            Priority::Urgent => self.urgent,
        }
    }
}

/// Request totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetrics {
    pub total: u64,
    /// Non-terminal requests.
    pub active: u64,
    pub by_status: StatusBreakdown,
    pub by_priority: PriorityBreakdown,
}

/// Invoice sums partitioned by payment status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummary {
    pub total_paid: i64,
    pub total_pending: i64,
    pub total_overdue: i64,
    pub total_refunded: i64,
    pub paid_count: u64,
    pub invoice_count: u64,
}

/// One month of revenue as recorded by finance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: i64,
    pub requests: u64,
}

/// Revenue and request volume per catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStat {
    pub name: String,
    pub requests: u64,
    pub revenue: i64,
}

/// Monthly revenue buckets and their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTrend {
    pub points: Vec<MonthlyRevenue>,
    pub total_revenue: i64,
}

/// Complete dashboard metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub requests: RequestMetrics,
    pub billing: BillingSummary,
    pub revenue: RevenueTrend,
    pub service_stats: Vec<ServiceStat>,
    pub workload: Vec<StaffWorkload>,
    pub generated_at: DateTime<Utc>,
}
