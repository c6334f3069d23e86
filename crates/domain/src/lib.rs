//! Domain layer for the society services desk.
//!
//! This crate contains:
//! - Domain models (ServiceRequest, Staff, Payment, Service, Announcement, Notification)
//! - Repository traits the store layer implements
//! - Business logic services (request lifecycle, metrics, catalog, bulletin, inbox)
//! - Domain error types

pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use error::DomainError;
