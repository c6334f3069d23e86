//! Society services desk: configuration, logging and role dashboards on top
//! of the request lifecycle engine.

pub mod config;
pub mod error;
pub mod logging;
pub mod views;
pub mod workspace;

pub use error::{DeskError, Notice};
pub use workspace::Workspace;
