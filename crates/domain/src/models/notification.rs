//! In-app notification models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

/// Dashboard role of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Resident,
    Manager,
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Resident => write!(f, "resident"),
            UserRole::Manager => write!(f, "manager"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resident" => Ok(UserRole::Resident),
            "manager" => Ok(UserRole::Manager),
            "admin" => Ok(UserRole::Admin),
            other => Err(DomainError::Validation(format!("Unknown role: {}", other))),
        }
    }
}

/// Roles a notification is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetRole {
    Resident,
    Manager,
    Admin,
    All,
}

impl TargetRole {
    pub fn includes(self, role: UserRole) -> bool {
        match self {
            TargetRole::All => true,
            TargetRole::Resident => role == UserRole::Resident,
            TargetRole::Manager => role == UserRole::Manager,
            TargetRole::Admin => role == UserRole::Admin,
        }
    }
}

/// Notification type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub target_role: TargetRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_roundtrip_str() {
        for role in [UserRole::Resident, UserRole::Manager, UserRole::Admin] {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), role);
        }
        assert!("vendor".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_target_role_includes() {
        assert!(TargetRole::All.includes(UserRole::Resident));
        assert!(TargetRole::Manager.includes(UserRole::Manager));
        assert!(!TargetRole::Manager.includes(UserRole::Admin));
    }

    #[test]
    fn test_notification_kind_serialization() {
        let json = serde_json::to_string(&NotificationKind::Success).unwrap();
        assert_eq!(json, "\"success\"");
    }
}
