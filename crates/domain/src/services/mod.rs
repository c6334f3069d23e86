//! Domain services for the society services desk.
//!
//! Services contain business logic that operates on domain models.

pub mod bulletin;
pub mod catalog;
pub mod inbox;
pub mod lifecycle;
pub mod metrics;
pub mod request_lifecycle;

#[cfg(test)]
pub(crate) mod test_support;

pub use lifecycle::TransitionPolicy;
pub use metrics::{
    billing_summary, compute_dashboard, live_assignment_count, request_metrics, revenue_trend,
    staff_workload, MetricsInput,
};
pub use request_lifecycle::RequestLifecycleEngine;
