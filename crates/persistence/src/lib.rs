//! Storage layer for the society services desk.
//!
//! This crate contains:
//! - The in-memory store implementing the domain repository traits
//! - The demo fixture a fresh session is seeded from
//! - Store metrics

pub mod memory;
pub mod metrics;
pub mod seed;

pub use memory::{CollectionSizes, InMemoryStore};
