//! Error types for the horses SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HorsesError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        /// `(field, message)` pairs
        violations: Vec<(String, String)>,
    },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal error")]
    Internal,
}

impl HorsesError {
    #[must_use]
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>, violations: Vec<(String, String)>) -> Self {
        Self::Validation {
            message: message.into(),
            violations,
        }
    }

    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
