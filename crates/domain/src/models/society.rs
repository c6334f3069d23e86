//! Society and resident directory models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A residential complex; the unit of billing and management grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Society {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub total_flats: u32,
    pub active_residents: u32,
    pub manager_name: String,
}

/// A registered resident of a society.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub society: String,
    pub flat_number: String,
    pub joined_date: NaiveDate,
}

impl Resident {
    /// Case-insensitive match on name, flat number or email.
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self.name.to_lowercase().contains(&needle)
            || self.flat_number.to_lowercase().contains(&needle)
            || self.email.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resident_matches_search() {
        let resident = Resident {
            id: Uuid::new_v4(),
            name: "Rajesh Sharma".to_string(),
            email: "rajesh.sharma@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            society: "Sunrise Heights".to_string(),
            flat_number: "A-402".to_string(),
            joined_date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        };

        assert!(resident.matches_search(""));
        assert!(resident.matches_search("rajesh"));
        assert!(resident.matches_search("a-40"));
        assert!(resident.matches_search("EXAMPLE.COM"));
        assert!(!resident.matches_search("priya"));
    }
}
