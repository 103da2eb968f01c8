//! # Outcome Accessors
//!
//! Expected failures travel as plain [`Result`] values. This module adds the
//! state queries and the loud accessors that callers use when they inspect
//! an outcome without matching on it:
//!
//! - [`Outcome::is_success`] / [`Outcome::is_error`]
//! - [`Outcome::success`] / [`Outcome::error`]: fail with
//!   [`InvalidStateError`] when called on the other variant
//! - [`Outcome::fold`]: dispatch to one of two closures
//!
//! Mapping uses the standard `Result::map` and `Result::map_err`.
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::domain::outcome::Outcome;
//!
//! let ok: Result<u32, String> = Ok(3);
//! assert!(ok.is_success());
//! assert_eq!(ok.success().copied(), Ok(3));
//! assert!(ok.error().is_err());
//!
//! let rendered = ok.fold(|n| format!("got {n}"), |e| format!("failed: {e}"));
//! assert_eq!(rendered, "got 3");
//! ```

use thiserror::Error;

/// Raised when an outcome is read as the variant it does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidStateError {
    /// The success value was requested from an error outcome.
    #[error("cannot get success value when result is an error")]
    NotSuccess,

    /// The error value was requested from a success outcome.
    #[error("cannot get error value when result is a success")]
    NotError,
}

/// State queries and checked accessors for a success-or-error value.
pub trait Outcome<T, E> {
    /// Returns true if this outcome holds a success value.
    fn is_success(&self) -> bool;

    /// Returns true if this outcome holds an error value.
    fn is_error(&self) -> bool;

    /// Borrows the success value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError::NotSuccess`] on an error outcome.
    fn success(&self) -> Result<&T, InvalidStateError>;

    /// Borrows the error value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError::NotError`] on a success outcome.
    fn error(&self) -> Result<&E, InvalidStateError>;

    /// Consumes the outcome, calling `on_success` or `on_error`.
    fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_error: impl FnOnce(E) -> R) -> R;
}

impl<T, E> Outcome<T, E> for Result<T, E> {
    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn is_error(&self) -> bool {
        self.is_err()
    }

    fn success(&self) -> Result<&T, InvalidStateError> {
        self.as_ref().map_err(|_| InvalidStateError::NotSuccess)
    }

    fn error(&self) -> Result<&E, InvalidStateError> {
        match self {
            Ok(_) => Err(InvalidStateError::NotError),
            Err(e) => Ok(e),
        }
    }

    fn fold<R>(self, on_success: impl FnOnce(T) -> R, on_error: impl FnOnce(E) -> R) -> R {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_error(error),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn success_outcome_queries() {
        let outcome: Result<&str, u8> = Ok("value");
        assert!(outcome.is_success());
        assert!(!outcome.is_error());
        assert_eq!(*outcome.success().unwrap(), "value");
        assert_eq!(outcome.error(), Err(InvalidStateError::NotError));
    }

    #[test]
    fn error_outcome_queries() {
        let outcome: Result<&str, u8> = Err(7);
        assert!(outcome.is_error());
        assert_eq!(*outcome.error().unwrap(), 7);
        assert_eq!(outcome.success(), Err(InvalidStateError::NotSuccess));
    }

    #[test]
    fn map_passes_errors_through_unchanged() {
        let outcome: Result<u32, &str> = Err("boom");
        let mapped = outcome.map(|n| n * 2);
        assert_eq!(mapped, Err("boom"));

        let outcome: Result<u32, &str> = Ok(2);
        let mapped = outcome.map_err(str::len);
        assert_eq!(mapped, Ok(2));
    }

    #[test]
    fn fold_dispatches_on_state() {
        let ok: Result<u32, &str> = Ok(1);
        let err: Result<u32, &str> = Err("no");
        assert_eq!(ok.fold(|n| n + 1, |_| 0), 2);
        assert_eq!(err.fold(|n| n + 1, |e| e.len() as u32), 2);
    }

    #[test]
    fn invalid_state_messages() {
        assert!(InvalidStateError::NotSuccess.to_string().contains("success"));
        assert!(InvalidStateError::NotError.to_string().contains("error value"));
    }
}
