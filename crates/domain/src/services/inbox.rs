//! Notification read state.

use uuid::Uuid;

use crate::error::DomainError;
use crate::models::{Notification, UserRole};
use crate::repository::NotificationRepository;

pub fn mark_read<R: NotificationRepository>(repo: &mut R, id: Uuid) -> Result<(), DomainError> {
    let notification = repo
        .notifications_mut()
        .iter_mut()
        .find(|n| n.id == id)
        .ok_or_else(|| DomainError::not_found("Notification", id))?;
    notification.read = true;
    Ok(())
}

/// Marks every notification read and returns how many changed.
pub fn mark_all_read<R: NotificationRepository>(repo: &mut R) -> usize {
    let mut changed = 0;
    for notification in repo.notifications_mut().iter_mut().filter(|n| !n.read) {
        notification.read = true;
        changed += 1;
    }
    tracing::debug!(changed, "Notifications marked read");
    changed
}

pub fn unread_count<R: NotificationRepository>(repo: &R) -> usize {
    repo.notifications().iter().filter(|n| !n.read).count()
}

/// Notifications targeted at `role` or at everyone.
pub fn for_role<R: NotificationRepository>(repo: &R, role: UserRole) -> Vec<&Notification> {
    repo.notifications()
        .iter()
        .filter(|n| n.target_role.includes(role))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NotificationKind, TargetRole};
    use crate::services::test_support::VecStore;
    use chrono::Utc;

    fn notification(title: &str, target_role: TargetRole, read: bool) -> Notification {
        Notification {
            id: Uuid::new_v4(),
            title: title.to_string(),
            message: format!("{} message", title),
            kind: NotificationKind::Info,
            read,
            created_at: Utc::now(),
            target_role,
        }
    }

    fn store() -> VecStore {
        VecStore {
            notifications: vec![
                notification("Request assigned", TargetRole::Resident, false),
                notification("New request", TargetRole::Manager, false),
                notification("Maintenance window", TargetRole::All, true),
                notification("Payment overdue", TargetRole::Admin, false),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_unread_count_and_mark_read() {
        let mut store = store();
        assert_eq!(unread_count(&store), 3);

        let id = store.notifications[0].id;
        mark_read(&mut store, id).unwrap();
        mark_read(&mut store, id).unwrap();
        assert_eq!(unread_count(&store), 2);

        assert!(mark_read(&mut store, Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_mark_all_read() {
        let mut store = store();
        assert_eq!(mark_all_read(&mut store), 3);
        assert_eq!(unread_count(&store), 0);
        assert_eq!(mark_all_read(&mut store), 0);
    }

    #[test]
    fn test_for_role_includes_broadcasts() {
        let store = store();
        let titles: Vec<&str> = for_role(&store, UserRole::Manager)
            .iter()
            .map(|n| n.title.as_str())
            .collect();
        assert_eq!(titles, vec!["New request", "Maintenance window"]);
    }
}
