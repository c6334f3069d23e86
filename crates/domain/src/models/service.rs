//! Service catalog models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A catalog entry residents can request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    pub base_price: i64,
    pub price_unit: String,
    pub active: bool,
}

/// Form input for a new catalog entry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateService {
    #[validate(length(max = 100, message = "Name too long"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: String,

    #[validate(length(max = 50, message = "Category too long"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub category: String,

    #[validate(custom(function = "shared::validation::validate_positive_amount"))]
    pub base_price: i64,

    #[serde(default = "default_price_unit")]
    pub price_unit: String,
}

fn default_price_unit() -> String {
    "/visit".to_string()
}
