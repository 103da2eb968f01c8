//! # Domain Errors
//!
//! Failures raised by domain rules.
//!
//! ```text
//! DomainError
//! ├── FeeRulesNotConfigured  - calculator used without a tier catalog
//! ├── NoMatchingFeeTier      - day difference not covered by any tier
//! └── Validation             - one or more violated invariants
//! ```

use crate::domain::validation::{ValidationError, ValidationErrors};
use thiserror::Error;

/// Error raised by domain logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The fee calculator has no tiers to select from.
    #[error("Fee rules are not configured.")]
    FeeRulesNotConfigured,

    /// No configured tier covers the requested day difference.
    #[error("No fee rule matches the provided dates.")]
    NoMatchingFeeTier {
        /// Whole days between pricing and execution.
        days: i64,
    },

    /// One or more business rules were violated.
    #[error("{0}")]
    Validation(ValidationErrors),
}

impl DomainError {
    /// Creates a validation error carrying a single message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(ValidationErrors::from_message(message))
    }

    /// Returns true for fee-catalog configuration failures.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::FeeRulesNotConfigured)
    }

    /// Returns true when no tier matched.
    #[must_use]
    pub fn is_no_matching_tier(&self) -> bool {
        matches!(self, Self::NoMatchingFeeTier { .. })
    }

    /// Returns true for rule violations.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Renders this error as the ordered `{message}` list.
    ///
    /// Validation errors keep their individual messages; every other
    /// variant becomes a single record holding its display text.
    #[must_use]
    pub fn into_validation_errors(self) -> ValidationErrors {
        match self {
            Self::Validation(errors) => errors,
            other => ValidationErrors::single(ValidationError::new(other.to_string())),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
