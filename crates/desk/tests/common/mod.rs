//! Common test utilities for integration tests.
//!
//! Workspaces here are built from the embedded default configuration, so no
//! file or environment setup is needed.

#![allow(dead_code)]

use chrono::NaiveDate;
use fake::faker::name::en::Name;
use fake::Fake;
use uuid::Uuid;

use domain::models::{CreateServiceRequest, Priority, ServiceRequest, Staff};
use domain::repository::{CatalogRepository, ServiceRequestRepository, StaffRepository};
use society_desk::config::Config;
use society_desk::Workspace;

/// Default test configuration with optional dotted-key overrides.
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    Config::load_for_test(overrides).expect("Failed to load test config")
}

/// A seeded workspace with the permissive policy.
pub fn seeded_workspace() -> Workspace {
    Workspace::bootstrap(&test_config(&[]))
}

/// A seeded workspace with the strict policy.
pub fn strict_workspace() -> Workspace {
    Workspace::bootstrap(&test_config(&[("lifecycle.transition_policy", "strict")]))
}

pub fn empty_workspace() -> Workspace {
    Workspace::bootstrap(&test_config(&[("seed.enabled", "false")]))
}

/// A request form for a catalog service, raised by a generated resident.
pub fn request_form(workspace: &Workspace, service_name: &str, priority: Priority) -> CreateServiceRequest {
    let service_id = workspace
        .store()
        .services()
        .iter()
        .find(|s| s.name == service_name)
        .map(|s| s.id)
        .unwrap_or_else(Uuid::new_v4);

    CreateServiceRequest {
        service_id,
        service_name: service_name.to_string(),
        resident_name: Name().fake(),
        resident_flat: "G-101".to_string(),
        society: "Sunrise Heights".to_string(),
        description: format!("{} needed urgently", service_name),
        priority,
        scheduled_date: NaiveDate::from_ymd_opt(2026, 3, 1),
    }
}

pub fn find_request<'a>(workspace: &'a Workspace, service_name: &str, resident: &str) -> &'a ServiceRequest {
    workspace
        .store()
        .requests()
        .iter()
        .find(|r| r.service_name == service_name && r.resident_name == resident)
        .expect("fixture request missing")
}

pub fn find_staff<'a>(workspace: &'a Workspace, name: &str) -> &'a Staff {
    workspace
        .store()
        .staff()
        .iter()
        .find(|s| s.name == name)
        .expect("fixture staff missing")
}
