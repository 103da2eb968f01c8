//! # Validation Handlers
//!
//! Strategies deciding what happens when a validator reports a violation.

use super::error::{ValidationError, ValidationErrors};
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Receives rule violations reported by validators.
///
/// `append` returns `Err` when the handler wants the current validation to
/// stop; validators propagate it with `?`.
pub trait ValidationHandler: fmt::Debug {
    /// Records a single violation.
    ///
    /// # Errors
    ///
    /// Fail-fast handlers return `DomainError::Validation` carrying `error`.
    fn append(&mut self, error: ValidationError) -> DomainResult<()>;

    /// Records every violation already held by another handler.
    ///
    /// # Errors
    ///
    /// Fail-fast handlers return `DomainError::Validation` carrying the
    /// other handler's errors when it has any.
    fn append_handler(&mut self, other: &dyn ValidationHandler) -> DomainResult<()>;

    /// Returns the recorded violations, in the order they were appended.
    fn errors(&self) -> &[ValidationError];

    /// Returns true if at least one violation was recorded.
    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    /// Returns the first recorded violation.
    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }

    /// Runs a validation routine through this handler.
    ///
    /// # Errors
    ///
    /// Depends on the strategy: accumulating handlers fold the routine's
    /// errors in and return `Ok`, fail-fast handlers propagate them.
    fn validate<F>(&mut self, validation: F) -> DomainResult<()>
    where
        Self: Sized,
        F: FnOnce() -> DomainResult<()>;
}

/// A type that can check its own business rules.
pub trait Validate {
    /// Reports every violated rule to `handler`.
    ///
    /// # Errors
    ///
    /// Propagates whatever `handler.append` returns.
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()>;

    /// Collects every violation with a fresh [`AccumulatingHandler`].
    fn violations(&self) -> ValidationErrors {
        let mut handler = AccumulatingHandler::new();
        if let Err(error) = self.validate(&mut handler) {
            handler.absorb(error);
        }
        handler.into_errors()
    }
}

/// Collects every violation and never interrupts the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccumulatingHandler {
    errors: ValidationErrors,
}

impl AccumulatingHandler {
    /// Creates an empty handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a handler already holding one error.
    #[must_use]
    pub fn with_error(error: ValidationError) -> Self {
        Self {
            errors: ValidationErrors::single(error),
        }
    }

    /// Creates a handler holding the errors carried by a domain error.
    #[must_use]
    pub fn from_domain_error(error: DomainError) -> Self {
        Self {
            errors: error.into_validation_errors(),
        }
    }

    /// Folds the errors carried by `error` into this handler.
    pub fn absorb(&mut self, error: DomainError) {
        self.errors.extend(error.into_validation_errors());
    }

    /// Returns the collected errors.
    #[must_use]
    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    /// Returns `Ok` when clean, otherwise the collected errors as a domain error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if any violation was recorded.
    pub fn into_result(self) -> DomainResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.errors))
        }
    }
}

impl ValidationHandler for AccumulatingHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        self.errors.push(error);
        Ok(())
    }

    fn append_handler(&mut self, other: &dyn ValidationHandler) -> DomainResult<()> {
        self.errors.extend(other.errors().iter().cloned());
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        self.errors.as_slice()
    }

    fn validate<F>(&mut self, validation: F) -> DomainResult<()>
    where
        F: FnOnce() -> DomainResult<()>,
    {
        if let Err(error) = validation() {
            self.absorb(error);
        }
        Ok(())
    }
}

/// Stops at the first violation.
///
/// Never holds errors itself: every `append` is returned as an `Err`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FailFastHandler;

impl FailFastHandler {
    /// Creates a fail-fast handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ValidationHandler for FailFastHandler {
    fn append(&mut self, error: ValidationError) -> DomainResult<()> {
        Err(DomainError::Validation(ValidationErrors::single(error)))
    }

    fn append_handler(&mut self, other: &dyn ValidationHandler) -> DomainResult<()> {
        if other.has_errors() {
            return Err(DomainError::Validation(
                other.errors().iter().cloned().collect(),
            ));
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }

    fn validate<F>(&mut self, validation: F) -> DomainResult<()>
    where
        F: FnOnce() -> DomainResult<()>,
    {
        validation().map_err(|e| DomainError::Validation(e.into_validation_errors()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TwoRules;

    impl Validate for TwoRules {
        fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
            handler.append(ValidationError::new("first rule"))?;
            handler.append(ValidationError::new("second rule"))?;
            Ok(())
        }
    }

    mod accumulating {
        use super::*;

        #[test]
        fn new_handler_has_no_errors() {
            let handler = AccumulatingHandler::new();
            assert!(!handler.has_errors());
            assert!(handler.first_error().is_none());
            assert!(handler.into_result().is_ok());
        }

        #[test]
        fn keeps_going_after_a_violation() {
            let mut handler = AccumulatingHandler::new();
            TwoRules.validate(&mut handler).unwrap();
            assert_eq!(handler.errors().len(), 2);
            assert_eq!(handler.first_error().unwrap().message(), "first rule");
        }

        #[test]
        fn append_handler_copies_other_errors_in_order() {
            let mut other = AccumulatingHandler::new();
            other.append(ValidationError::new("b")).unwrap();
            other.append(ValidationError::new("c")).unwrap();

            let mut handler = AccumulatingHandler::with_error(ValidationError::new("a"));
            handler.append_handler(&other).unwrap();

            assert_eq!(handler.into_errors().messages(), vec!["a", "b", "c"]);
        }

        #[test]
        fn validate_folds_routine_errors_in() {
            let mut handler = AccumulatingHandler::new();
            let outcome = handler.validate(|| {
                Err(DomainError::Validation(
                    vec![ValidationError::new("x"), ValidationError::new("y")].into(),
                ))
            });
            assert!(outcome.is_ok());
            assert_eq!(handler.errors().len(), 2);
        }

        #[test]
        fn validate_folds_non_validation_domain_errors_as_messages() {
            let mut handler = AccumulatingHandler::new();
            handler
                .validate(|| Err(DomainError::FeeRulesNotConfigured))
                .unwrap();
            assert_eq!(
                handler.first_error().unwrap().message(),
                "Fee rules are not configured."
            );
        }

        #[test]
        fn into_result_returns_collected_errors() {
            let handler = AccumulatingHandler::with_error(ValidationError::new("bad"));
            match handler.into_result() {
                Err(DomainError::Validation(errors)) => {
                    assert_eq!(errors.messages(), vec!["bad"]);
                }
                other => panic!("unexpected: {other:?}"),
            }
        }
    }

    mod fail_fast {
        use super::*;

        #[test]
        fn stops_at_first_violation() {
            let mut handler = FailFastHandler::new();
            let err = TwoRules.validate(&mut handler).unwrap_err();
            assert_eq!(err.into_validation_errors().messages(), vec!["first rule"]);
            assert!(!handler.has_errors());
        }

        #[test]
        fn append_handler_raises_other_errors() {
            let other = AccumulatingHandler::with_error(ValidationError::new("carried"));
            let mut handler = FailFastHandler::new();
            let err = handler.append_handler(&other).unwrap_err();
            assert_eq!(err.into_validation_errors().messages(), vec!["carried"]);
        }

        #[test]
        fn append_handler_with_clean_handler_is_ok() {
            let other = AccumulatingHandler::new();
            let mut handler = FailFastHandler::new();
            assert!(handler.append_handler(&other).is_ok());
        }

        #[test]
        fn validate_propagates_routine_errors() {
            let mut handler = FailFastHandler::new();
            let err = handler
                .validate(|| Err(DomainError::FeeRulesNotConfigured))
                .unwrap_err();
            assert_eq!(
                err.into_validation_errors().messages(),
                vec!["Fee rules are not configured."]
            );
        }
    }

    #[derive(Debug)]
    struct BailsOut;

    impl Validate for BailsOut {
        fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
            handler.append(ValidationError::new("reported rule"))?;
            Err(DomainError::NoMatchingFeeTier { days: 3 })
        }
    }

    #[test]
    fn violations_uses_a_fresh_accumulating_handler() {
        assert_eq!(TwoRules.violations().len(), 2);
        assert_eq!(TwoRules.violations().len(), 2);
    }

    #[test]
    fn violations_keeps_errors_returned_by_the_validator() {
        assert_eq!(
            BailsOut.violations().messages(),
            vec!["reported rule", "No fee rule matches the provided dates."]
        );
    }
}
