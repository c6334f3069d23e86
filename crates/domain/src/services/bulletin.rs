//! Society bulletin: announcements published by admins and managers.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::DomainError;
use crate::models::{Announcement, CreateAnnouncement};
use crate::repository::AnnouncementRepository;

/// Publishes an announcement dated today, ahead of older ones.
pub fn publish<R: AnnouncementRepository>(
    repo: &mut R,
    input: CreateAnnouncement,
) -> Result<Announcement, DomainError> {
    input.validate()?;

    let announcement = Announcement {
        id: Uuid::new_v4(),
        title: input.title,
        message: input.message,
        audience: input.audience,
        kind: input.kind,
        created_at: Utc::now().date_naive(),
    };

    tracing::info!(
        announcement_id = %announcement.id,
        kind = %announcement.kind,
        audience = %String::from(announcement.audience.clone()),
        "Announcement published"
    );
    repo.prepend_announcement(announcement.clone());
    Ok(announcement)
}

pub fn delete<R: AnnouncementRepository>(repo: &mut R, id: Uuid) -> Result<Announcement, DomainError> {
    let removed = repo
        .remove_announcement(id)
        .ok_or_else(|| DomainError::not_found("Announcement", id))?;
    tracing::info!(announcement_id = %id, "Announcement deleted");
    Ok(removed)
}

/// Announcements addressed to everyone or to `society`, newest first.
pub fn for_society<'a, R: AnnouncementRepository>(repo: &'a R, society: &str) -> Vec<&'a Announcement> {
    repo.announcements()
        .iter()
        .filter(|a| a.audience.includes(society))
        .collect()
}
