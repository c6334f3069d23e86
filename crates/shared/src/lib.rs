//! Shared utilities and common types for the society services desk.
//!
//! This crate provides common functionality used across all other crates:
//! - Common validation logic for form input
//! - Cursor-based pagination over in-memory listings

pub mod pagination;
pub mod validation;
