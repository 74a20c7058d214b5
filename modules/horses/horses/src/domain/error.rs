use horses_sdk::HorsesError;
use thiserror::Error;

/// A single field-level problem found by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl Violation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No horse with ID {id} found")]
    HorseNotFound { id: i64 },

    #[error("No owner with ID {id} found")]
    OwnerNotFound { id: i64 },

    #[error("{message}")]
    Validation {
        message: String,
        violations: Vec<Violation>,
    },

    #[error("{message}")]
    Conflict { message: String },

    /// Store contents violate an invariant that writes are supposed to uphold.
    #[error("Fatal: {message}")]
    Fatal { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn horse_not_found(id: i64) -> Self {
        Self::HorseNotFound { id }
    }

    pub fn owner_not_found(id: i64) -> Self {
        Self::OwnerNotFound { id }
    }

    pub fn validation(message: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self::Validation {
            message: message.into(),
            violations,
        }
    }

    /// Validation failure caused by exactly one field.
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        let message = message.into();
        Self::Validation {
            violations: vec![Violation::new(field, message.clone())],
            message,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::Fatal {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::HorseNotFound { .. } | Self::OwnerNotFound { .. })
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for HorsesError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::HorseNotFound { id } => HorsesError::not_found("Horse", id),
            DomainError::OwnerNotFound { id } => HorsesError::not_found("Owner", id),
            DomainError::Validation {
                message,
                violations,
            } => HorsesError::validation(
                message,
                violations
                    .into_iter()
                    .map(|v| (v.field.to_owned(), v.message))
                    .collect(),
            ),
            DomainError::Conflict { message } => HorsesError::conflict(message),
            DomainError::Fatal { .. } | DomainError::Database { .. } => HorsesError::internal(),
        }
    }
}
