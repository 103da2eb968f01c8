//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)          - fee configuration, no matching tier, validation
//! ├── Repository(RepositoryError)  - store read/write failures
//! └── NotFound                     - requested transfer does not exist
//! ```
//!
//! Every variant renders as the ordered `{message}` list returned to callers
//! through [`ApplicationError::errors`].
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::application::error::ApplicationError;
//! use transfer_scheduler::domain::errors::DomainError;
//!
//! let err: ApplicationError = DomainError::FeeRulesNotConfigured.into();
//! assert!(err.is_client_error());
//! assert_eq!(err.errors().messages(), vec!["Fee rules are not configured."]);
//! ```

use crate::domain::errors::DomainError;
use crate::domain::validation::{ValidationError, ValidationErrors};
use crate::infrastructure::persistence::RepositoryError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from business logic.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Store failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Resource not found.
    #[error("{resource_type} not found: {id}")]
    NotFound {
        /// Type of resource.
        resource_type: &'static str,
        /// Resource identifier.
        id: String,
    },
}

impl ApplicationError {
    /// Creates a validation error carrying one message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Domain(DomainError::validation(message))
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Renders this error as the ordered `{message}` list.
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        match self {
            Self::Domain(err) => err.clone().into_validation_errors(),
            other => ValidationErrors::single(ValidationError::new(other.to_string())),
        }
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
            || matches!(self, Self::Repository(e) if e.is_not_found())
    }

    /// Returns true if this is a validation error.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Domain(e) if e.is_validation())
    }

    /// Returns true for failures caused by the request: configuration,
    /// no matching tier, validation and not found.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Domain(_) | Self::NotFound { .. } => true,
            Self::Repository(e) => e.is_not_found(),
        }
    }

    /// Returns true for store failures.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        !self.is_client_error()
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
