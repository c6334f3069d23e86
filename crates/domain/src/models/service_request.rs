//! Service request domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;

/// Lifecycle status of a service request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 6] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Assigned,
        RequestStatus::InProgress,
        RequestStatus::Completed,
        RequestStatus::Cancelled,
    ];

    /// Completed and cancelled requests accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Completed | RequestStatus::Cancelled)
    }

    /// Progress shown on the resident's request tracker, in percent.
    ///
    /// Steps are pending, approved, assigned, in-progress, completed.
    /// Cancelled requests show no progress.
    pub fn progress_percent(self) -> u8 {
        match self {
            RequestStatus::Pending => 20,
            RequestStatus::Approved => 40,
            RequestStatus::Assigned => 60,
            RequestStatus::InProgress => 80,
            RequestStatus::Completed => 100,
            RequestStatus::Cancelled => 0,
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Assigned => write!(f, "assigned"),
            RequestStatus::InProgress => write!(f, "in-progress"),
            RequestStatus::Completed => write!(f, "completed"),
            RequestStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestStatus::ALL
            .into_iter()
            .find(|status| status.to_string() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unknown request status: {}", s)))
    }
}

/// Priority chosen at creation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Urgent,
    ];
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Urgent => write!(f, "urgent"),
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|priority| priority.to_string() == s)
            .ok_or_else(|| DomainError::Validation(format!("Unknown priority: {}", s)))
    }
}

/// A resident-initiated request for a facility service.
///
/// Requester identity and the assigned staff member are stored by display
/// name, not by id. Renaming a staff member leaves earlier assignments
/// pointing at the old name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub resident_name: String,
    pub resident_flat: String,
    pub society: String,
    pub description: String,
    pub status: RequestStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_staff: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
}

impl ServiceRequest {
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Open requests are every request that is not terminal.
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

/// Form input for a new service request.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    pub service_id: Uuid,

    #[validate(length(max = 100, message = "Service name too long"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub service_name: String,

    #[validate(length(max = 100, message = "Resident name too long"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub resident_name: String,

    #[validate(length(max = 20, message = "Flat number too long"))]
    pub resident_flat: String,

    #[validate(length(max = 100, message = "Society name too long"))]
    pub society: String,

    #[validate(length(max = 2000, message = "Description too long"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub description: String,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub scheduled_date: Option<NaiveDate>,
}

/// Filters used by the request listings.
///
/// `search` is matched case-insensitively against service name, resident
/// name, society, description and id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub society: Option<String>,
    #[serde(default)]
    pub resident_name: Option<String>,
}

impl RequestFilter {
    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn for_society(mut self, society: impl Into<String>) -> Self {
        self.society = Some(society.into());
        self
    }

    pub fn for_resident(mut self, resident_name: impl Into<String>) -> Self {
        self.resident_name = Some(resident_name.into());
        self
    }

    pub fn matches(&self, request: &ServiceRequest) -> bool {
        if self.status.is_some_and(|s| s != request.status) {
            return false;
        }
        if self.priority.is_some_and(|p| p != request.priority) {
            return false;
        }
        if let Some(society) = &self.society {
            if &request.society != society {
                return false;
            }
        }
        if let Some(resident) = &self.resident_name {
            if &request.resident_name != resident {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                [
                    request.service_name.as_str(),
                    request.resident_name.as_str(),
                    request.society.as_str(),
                    request.description.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
                    || request.id.to_string().contains(&needle)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> ServiceRequest {
        let now = Utc::now();
        ServiceRequest {
            id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            service_name: "AC Repair".to_string(),
            resident_name: "Rajesh Sharma".to_string(),
            resident_flat: "A-402".to_string(),
            society: "Sunrise Heights".to_string(),
            description: "Split AC in bedroom not cooling".to_string(),
            status: RequestStatus::Pending,
            priority: Priority::High,
            assigned_staff: None,
            created_at: now,
            updated_at: now,
            scheduled_date: None,
            completed_date: None,
        }
    }

    #[test]
    fn test_request_status_display() {
        assert_eq!(RequestStatus::Pending.to_string(), "pending");
        assert_eq!(RequestStatus::InProgress.to_string(), "in-progress");
        assert_eq!(RequestStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_request_status_serialization() {
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let status: RequestStatus = serde_json::from_str("\"assigned\"").unwrap();
        assert_eq!(status, RequestStatus::Assigned);
    }

    #[test]
    fn test_request_status_from_str() {
        assert_eq!(
            "in-progress".parse::<RequestStatus>().unwrap(),
            RequestStatus::InProgress
        );
        assert!("in_progress".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        let terminal: Vec<_> = RequestStatus::ALL
            .into_iter()
            .filter(|s| s.is_terminal())
            .collect();
        assert_eq!(
            terminal,
            vec![RequestStatus::Completed, RequestStatus::Cancelled]
        );
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(RequestStatus::Pending.progress_percent(), 20);
        assert_eq!(RequestStatus::InProgress.progress_percent(), 80);
        assert_eq!(RequestStatus::Completed.progress_percent(), 100);
        assert_eq!(RequestStatus::Cancelled.progress_percent(), 0);
    }

    #[test]
    fn test_priority_default_and_parse() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!("urgent".parse::<Priority>().unwrap(), Priority::Urgent);
        assert!("critical".parse::<Priority>().is_err());
    }

    #[test]
    fn test_create_request_validation() {
        let input = CreateServiceRequest {
            service_id: Uuid::new_v4(),
            service_name: "Plumbing".to_string(),
            resident_name: "Anita Desai".to_string(),
            resident_flat: "B-101".to_string(),
            society: "Green Valley Residency".to_string(),
            description: "Kitchen sink leaking".to_string(),
            priority: Priority::Low,
            scheduled_date: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_request_blank_description() {
        let input = CreateServiceRequest {
            service_id: Uuid::new_v4(),
            service_name: "Plumbing".to_string(),
            resident_name: "Anita Desai".to_string(),
            resident_flat: "B-101".to_string(),
            society: "Green Valley Residency".to_string(),
            description: "   ".to_string(),
            priority: Priority::Low,
            scheduled_date: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_request_deserialize_defaults() {
        let json = format!(
            r#"{{"serviceId":"{}","serviceName":"Pest Control","residentName":"Vikram Rao","residentFlat":"C-12","society":"Palm Grove Estates","description":"Cockroaches in kitchen"}}"#,
            Uuid::nil()
        );
        let input: CreateServiceRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(input.priority, Priority::Medium);
        assert!(input.scheduled_date.is_none());
    }

    #[test]
    fn test_filter_matches_search_case_insensitive() {
        let request = sample_request();
        assert!(RequestFilter::default().with_search("ac rep").matches(&request));
        assert!(RequestFilter::default().with_search("SUNRISE").matches(&request));
        assert!(RequestFilter::default().with_search("cooling").matches(&request));
        assert!(!RequestFilter::default().with_search("plumbing").matches(&request));
    }

    #[test]
    fn test_filter_matches_id_prefix() {
        let request = sample_request();
        let prefix = request.id.to_string()[..8].to_string();
        assert!(RequestFilter::default().with_search(prefix).matches(&request));
    }

    #[test]
    fn test_filter_combines_criteria() {
        let request = sample_request();
        let filter = RequestFilter::default()
            .with_status(RequestStatus::Pending)
            .with_priority(Priority::High)
            .for_society("Sunrise Heights")
            .for_resident("Rajesh Sharma");
        assert!(filter.matches(&request));
        assert!(!filter.clone().with_priority(Priority::Low).matches(&request));
        assert!(!filter.for_society("Palm Grove Estates").matches(&request));
    }

    #[test]
    fn test_request_serialization_skips_empty_options() {
        let json = serde_json::to_string(&sample_request()).unwrap();
        assert!(json.contains("\"serviceName\":\"AC Repair\""));
        assert!(json.contains("\"status\":\"pending\""));
        assert!(!json.contains("assignedStaff"));
        assert!(!json.contains("completedDate"));
    }
}
