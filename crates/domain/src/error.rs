//! Domain error types.

use thiserror::Error;

use crate::models::RequestStatus;

/// Errors raised by domain operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request {id} is {status} and can no longer change")]
    TerminalStatus { id: String, status: RequestStatus },

    #[error("Cannot move a request from {from} to {to}")]
    TransitionNotAllowed {
        from: RequestStatus,
        to: RequestStatus,
    },
}

impl DomainError {
    /// Shorthand for a missing record.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    e.message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();
        messages.sort();

        let message = if messages.len() == 1 {
            messages.remove(0)
        } else {
            format!("{} validation errors", messages.len())
        };

        DomainError::Validation(message)
    }
}

impl From<shared::pagination::CursorError> for DomainError {
    fn from(err: shared::pagination::CursorError) -> Self {
        DomainError::Validation(err.to_string())
    }
}
