//! Announcement models for the society bulletin.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Severity of an announcement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementKind {
    #[default]
    Info,
    Warning,
    Urgent,
}

impl std::fmt::Display for AnnouncementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnnouncementKind::Info => write!(f, "info"),
            AnnouncementKind::Warning => write!(f, "warning"),
            AnnouncementKind::Urgent => write!(f, "urgent"),
        }
    }
}

/// Who an announcement is addressed to.
///
/// Serialized as `"all"` or the society name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Audience {
    #[default]
    All,
    Society(String),
}

impl Audience {
    pub fn includes(&self, society: &str) -> bool {
        match self {
            Audience::All => true,
            Audience::Society(name) => name == society,
        }
    }
}

impl From<String> for Audience {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("all") {
            Audience::All
        } else {
            Audience::Society(value)
        }
    }
}

impl From<Audience> for String {
    fn from(value: Audience) -> Self {
        match value {
            Audience::All => "all".to_string(),
            Audience::Society(name) => name,
        }
    }
}

/// A published announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub audience: Audience,
    pub kind: AnnouncementKind,
    pub created_at: NaiveDate,
}

/// Form input for publishing an announcement.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnnouncement {
    #[validate(length(max = 200, message = "Title too long"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Message too long"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub message: String,

    #[serde(default)]
    pub audience: Audience,

    #[serde(default)]
    pub kind: AnnouncementKind,
}
