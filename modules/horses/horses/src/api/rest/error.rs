use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use stable_errors::{Problem, ValidationViolation};

use crate::domain::error::DomainError;
use crate::errors::ErrorCode;

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

/// Map domain error to RFC9457 Problem using the error catalog
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let trace_id = current_trace_id();

    match e {
        DomainError::HorseNotFound { .. } => {
            tracing::warn!(error = %e, "Horse not found");
            ErrorCode::horses_horse_not_found_v1().with_context(e.to_string(), instance, trace_id)
        }
        DomainError::OwnerNotFound { .. } => {
            tracing::warn!(error = %e, "Owner not found");
            ErrorCode::horses_owner_not_found_v1().with_context(e.to_string(), instance, trace_id)
        }
        DomainError::Validation {
            message,
            violations,
        } => {
            tracing::warn!(error = %e, "Validation failed");
            ErrorCode::horses_validation_v1()
                .with_context(message.clone(), instance, trace_id)
                .with_errors(
                    violations
                        .iter()
                        .map(|v| ValidationViolation::new(v.field, v.message.clone()))
                        .collect(),
                )
        }
        DomainError::Conflict { message } => {
            tracing::warn!(error = %e, "Conflict");
            ErrorCode::horses_conflict_v1().with_context(message.clone(), instance, trace_id)
        }
        DomainError::Fatal { .. } | DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = %e, "Internal error occurred");
            ErrorCode::horses_internal_v1().with_context(
                "An internal error occurred",
                instance,
                trace_id,
            )
        }
    }
}

/// Turn an extractor rejection into a 400 problem.
pub fn malformed(detail: impl Into<String>, instance: &str) -> Problem {
    let detail = detail.into();
    tracing::warn!(detail = %detail, "Malformed request");
    ErrorCode::horses_malformed_request_v1().with_context(detail, instance, current_trace_id())
}

pub fn json_rejection(r: &JsonRejection, instance: &str) -> Problem {
    malformed(r.body_text(), instance)
}

pub fn query_rejection(r: &QueryRejection, instance: &str) -> Problem {
    malformed(r.body_text(), instance)
}

pub fn path_rejection(r: &PathRejection, instance: &str) -> Problem {
    malformed(r.body_text(), instance)
}

/// Implement From<DomainError> for Problem so `?` works in handlers
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e, "/")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::error::Violation;
    use http::StatusCode;
    use tracing_test::traced_test;

    #[test]
    fn not_found_maps_to_404() {
        let p = domain_error_to_problem(&DomainError::horse_not_found(4), "/horses/4");
        assert_eq!(p.status, StatusCode::NOT_FOUND);
        assert_eq!(p.code, "HORSES_HORSE_NOT_FOUND_V1");
        assert_eq!(p.detail, "No horse with ID 4 found");
        assert_eq!(p.instance, "/horses/4");
    }

    #[test]
    fn validation_carries_field_errors() {
        let e = DomainError::validation(
            "Validation of horse for create failed",
            vec![Violation::new("name", "must not be blank")],
        );
        let p = domain_error_to_problem(&e, "/horses");
        assert_eq!(p.status, StatusCode::BAD_REQUEST);
        let errors = p.errors.unwrap();
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn conflict_maps_to_409() {
        let p = domain_error_to_problem(&DomainError::conflict("in use"), "/owners/1");
        assert_eq!(p.status, StatusCode::CONFLICT);
    }

    #[test]
    #[traced_test]
    fn internal_errors_hide_details() {
        let p = domain_error_to_problem(&DomainError::database("disk I/O error"), "/horses");
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!p.detail.contains("disk"));
        assert!(logs_contain("disk I/O error"));

        let p = domain_error_to_problem(&DomainError::fatal("dangling owner"), "/horses");
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
