//! Payment domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
    Refunded,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Overdue => write!(f, "overdue"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

/// An invoice raised against a service request. Amounts are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Uuid,
    /// Logical reference; not enforced against the request collection.
    pub request_id: Uuid,
    pub service_name: String,
    pub amount: i64,
    pub status: PaymentStatus,
    pub date: NaiveDate,
    pub invoice_number: String,
    pub resident_name: String,
    pub society: String,
}
