use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Transient message shown to the desk user when an operation fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub code: &'static str,
    pub message: String,
}

impl DeskError {
    pub fn notice(&self) -> Notice {
        let (level, code, message) = match self {
            DeskError::NotFound(msg) => (NoticeLevel::Warning, "not_found", msg.clone()),
            DeskError::Validation(msg) => (NoticeLevel::Warning, "validation_error", msg.clone()),
            DeskError::Conflict(msg) => (NoticeLevel::Warning, "conflict", msg.clone()),
            DeskError::Config(msg) => (NoticeLevel::Error, "config_error", msg.clone()),
            DeskError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    NoticeLevel::Error,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
        };

        Notice {
            level,
            code,
            message,
        }
    }
}

impl From<DomainError> for DeskError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => DeskError::NotFound(err.to_string()),
            DomainError::Validation(msg) => DeskError::Validation(msg),
            DomainError::TerminalStatus { .. } | DomainError::TransitionNotAllowed { .. } => {
                DeskError::Conflict(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for DeskError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::from(errors).into()
    }
}

impl From<config::ConfigError> for DeskError {
    fn from(err: config::ConfigError) -> Self {
        DeskError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        DeskError::Internal(format!("Serialization failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::RequestStatus;
    use validator::Validate;

    #[test]
    fn test_notice_codes() {
        let cases = [
            (DeskError::NotFound("x".into()), "not_found", NoticeLevel::Warning),
            (DeskError::Validation("x".into()), "validation_error", NoticeLevel::Warning),
            (DeskError::Conflict("x".into()), "conflict", NoticeLevel::Warning),
            (DeskError::Config("x".into()), "config_error", NoticeLevel::Error),
            (DeskError::Internal("x".into()), "internal_error", NoticeLevel::Error),
        ];

        for (error, code, level) in cases {
            let notice = error.notice();
            assert_eq!(notice.code, code);
            assert_eq!(notice.level, level);
        }
    }

    #[test]
    fn test_internal_notice_hides_details() {
        let notice = DeskError::Internal("store poisoned".into()).notice();
        assert_eq!(notice.message, "An internal error occurred");
    }

    #[test]
    fn test_from_domain_error() {
        let not_found: DeskError = DomainError::not_found("Service request", "r1").into();
        assert!(matches!(not_found, DeskError::NotFound(ref m) if m.contains("r1")));

        let terminal: DeskError = DomainError::TerminalStatus {
            id: "r1".into(),
            status: RequestStatus::Completed,
        }
        .into();
        assert!(matches!(terminal, DeskError::Conflict(_)));

        let transition: DeskError = DomainError::TransitionNotAllowed {
            from: RequestStatus::Pending,
            to: RequestStatus::Completed,
        }
        .into();
        assert_eq!(transition.notice().code, "conflict");

        let validation: DeskError = DomainError::Validation("Title is required".into()).into();
        assert_eq!(validation.notice().message, "Title is required");
    }

    #[test]
    fn test_from_validation_errors() {
        #[derive(Validate)]
        struct Input {
            #[validate(length(min = 1, message = "Name is required"))]
            name: String,
        }

        let errors = Input {
            name: String::new(),
        }
        .validate()
        .unwrap_err();
        let error: DeskError = errors.into();

        assert!(matches!(error, DeskError::Validation(ref m) if m == "Name is required"));
    }

    #[test]
    fn test_from_config_error() {
        let err = crate::config::Config::load_for_test(&[("lifecycle.transition_policy", "lenient")])
            .unwrap_err();
        let error: DeskError = err.into();

        assert!(matches!(error, DeskError::Config(_)));
        assert_eq!(error.notice().code, "config_error");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: DeskError = err.into();

        assert!(matches!(error, DeskError::Internal(ref m) if m.starts_with("Serialization failed")));
        assert_eq!(error.notice().message, "An internal error occurred");
    }

    #[test]
    fn test_notice_serialization() {
        let json = serde_json::to_value(DeskError::Conflict("busy".into()).notice()).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["code"], "conflict");
        assert_eq!(json["message"], "busy");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DeskError::Validation("bad".into()).to_string(),
            "Validation error: bad"
        );
    }
}
