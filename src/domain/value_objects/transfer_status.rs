//! # Transfer Status
//!
//! Lifecycle vocabulary of a scheduled transfer.
//!
//! New transfers always start as [`Status::Scheduled`]. The remaining states
//! form a closed vocabulary for settlement steps outside this crate; no
//! transitions are defined here.
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::domain::value_objects::transfer_status::{Status, TransferStatus};
//!
//! let status: TransferStatus = "Completed".parse().unwrap();
//! assert_eq!(status.value(), Status::Completed);
//! assert_eq!(status.to_string(), "completed");
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::validation::{Validate, ValidationHandler};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Status {
    /// Accepted and waiting for its scheduled date.
    #[default]
    Scheduled = 0,
    /// Executed.
    Completed = 1,
    /// Withdrawn before execution.
    Cancelled = 2,
    /// Execution was attempted and did not succeed.
    Failed = 3,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Scheduled,
        Self::Completed,
        Self::Cancelled,
        Self::Failed,
    ];

    /// Returns the wire name of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
        }
    }

    /// Returns true for states that end the transfer's lifecycle.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Failed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::InvalidValue("TransferStatus", s.to_string()))
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(
                    f,
                    "invalid {enum_name} value: '{value}', valid values are: scheduled, completed, cancelled, failed"
                )
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

/// Status value object held by a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferStatus(Status);

impl TransferStatus {
    /// Wraps a status.
    #[must_use]
    pub const fn new(value: Status) -> Self {
        Self(value)
    }

    /// The status every new transfer starts in.
    #[must_use]
    pub const fn scheduled() -> Self {
        Self(Status::Scheduled)
    }

    /// Returns the wrapped status.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Status {
        self.0
    }
}

impl From<Status> for TransferStatus {
    fn from(value: Status) -> Self {
        Self(value)
    }
}

impl FromStr for TransferStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A status always holds one of the [`Status`] variants, so no rule can
/// fail once the value exists; the impl lets [`Transfer`] validation
/// delegate to every member uniformly.
///
/// [`Transfer`]: crate::domain::entities::Transfer
impl Validate for TransferStatus {
    fn validate(&self, _handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::validation::{AccumulatingHandler, FailFastHandler};

    mod parsing {
        use super::*;

        #[test]
        fn parses_case_insensitively() {
            assert_eq!("scheduled".parse::<Status>().unwrap(), Status::Scheduled);
            assert_eq!("COMPLETED".parse::<Status>().unwrap(), Status::Completed);
            assert_eq!(" Cancelled ".parse::<Status>().unwrap(), Status::Cancelled);
            assert_eq!("failed".parse::<Status>().unwrap(), Status::Failed);
        }

        #[test]
        fn rejects_unknown_value() {
            let err = "pending".parse::<Status>().unwrap_err();
            let message = err.to_string();
            assert!(message.contains("pending"));
            assert!(message.contains("scheduled, completed, cancelled, failed"));
        }

        #[test]
        fn display_roundtrips_through_from_str() {
            for status in Status::ALL {
                assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
            }
        }
    }

    mod value_object {
        use super::*;

        #[test]
        fn default_is_scheduled() {
            assert_eq!(TransferStatus::default(), TransferStatus::scheduled());
            assert_eq!(TransferStatus::scheduled().value(), Status::Scheduled);
        }

        #[test]
        fn terminal_states() {
            assert!(!Status::Scheduled.is_terminal());
            assert!(Status::Completed.is_terminal());
            assert!(Status::Cancelled.is_terminal());
            assert!(Status::Failed.is_terminal());
        }

        #[test]
        fn every_status_is_valid() {
            for status in Status::ALL {
                let mut handler = AccumulatingHandler::new();
                TransferStatus::new(status).validate(&mut handler).unwrap();
                assert!(!handler.has_errors());
                TransferStatus::new(status)
                    .validate(&mut FailFastHandler::new())
                    .unwrap();
            }
        }

        #[test]
        fn serializes_lowercase() {
            let json = serde_json::to_string(&TransferStatus::new(Status::Cancelled)).unwrap();
            assert_eq!(json, r#""cancelled""#);
        }
    }
}
