//! Staff domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A service provider who can be assigned to requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: String,
    pub availability: bool,
    /// Seeded counter. Not recomputed when requests are assigned or closed.
    pub assigned_requests: u32,
    /// Zero means unrated.
    pub rating: f64,
    pub joined_date: NaiveDate,
}

impl Staff {
    pub fn is_rated(&self) -> bool {
        self.rating > 0.0
    }
}

/// Form input for onboarding a staff member.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaff {
    #[validate(length(max = 100, message = "Name too long"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    #[validate(length(max = 100, message = "Specialty too long"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub specialty: String,
}

/// Seeded versus live assignment count for one staff member.
///
/// `live` counts non-terminal requests whose `assigned_staff` equals the
/// staff name. `drift` is set when the two disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffWorkload {
    pub staff_id: Uuid,
    pub name: String,
    pub available: bool,
    pub seeded: u32,
    pub live: u32,
    pub drift: bool,
}
