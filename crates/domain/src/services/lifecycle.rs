//! Transition rules for the service request lifecycle.
//!
//! Two rule sets are available:
//! 1. `Permissive`: any non-terminal status may move to any target
//! 2. `Strict`: moves follow the table in [`allowed_targets`]
//!
//! Terminal statuses reject every move under both.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DomainError;
use crate::models::RequestStatus;

/// Rule set applied by the lifecycle engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionPolicy {
    #[default]
    Permissive,
    Strict,
}

impl std::fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionPolicy::Permissive => write!(f, "permissive"),
            TransitionPolicy::Strict => write!(f, "strict"),
        }
    }
}

impl FromStr for TransitionPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "permissive" => Ok(TransitionPolicy::Permissive),
            "strict" => Ok(TransitionPolicy::Strict),
            other => Err(DomainError::Validation(format!(
                "Unknown transition policy: {}",
                other
            ))),
        }
    }
}

/// Statuses reachable from `from` under the strict policy.
///
/// `Assigned -> Assigned` is allowed so a request can be handed to another
/// staff member.
pub fn allowed_targets(from: RequestStatus) -> &'static [RequestStatus] {
    use RequestStatus::*;

    match from {
        Pending => &[Approved, Assigned, Cancelled],
        Approved => &[Assigned, InProgress, Cancelled],
        Assigned => &[Assigned, InProgress, Completed, Cancelled],
        InProgress => &[Completed, Cancelled],
        Completed | Cancelled => &[],
    }
}

impl TransitionPolicy {
    /// Checks a move of request `id` from `from` to `to`.
    pub fn check(
        self,
        id: impl ToString,
        from: RequestStatus,
        to: RequestStatus,
    ) -> Result<(), DomainError> {
        if from.is_terminal() {
            return Err(DomainError::TerminalStatus {
                id: id.to_string(),
                status: from,
            });
        }

        match self {
            TransitionPolicy::Permissive => Ok(()),
            TransitionPolicy::Strict if allowed_targets(from).contains(&to) => Ok(()),
            TransitionPolicy::Strict => Err(DomainError::TransitionNotAllowed { from, to }),
        }
    }
}
