//! # Account Value Object
//!
//! Bank account identifier referenced by a transfer.
//!
//! An [`Account`] is identified solely by its account number. Construction
//! never fails; the rules are reported through [`Validate`] so that a
//! transfer can collect every account problem alongside its own.
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::domain::validation::Validate;
//! use transfer_scheduler::domain::value_objects::Account;
//!
//! let account = Account::new("0123456789");
//! assert_eq!(account.value(), "0123456789");
//! assert!(account.violations().is_empty());
//!
//! assert_eq!(Account::new("123").violations().len(), 1);
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::validation::{Validate, ValidationError, ValidationHandler};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Required number of characters in an account number.
pub const ACCOUNT_NUMBER_LENGTH: usize = 10;

/// A bank account, identified by its account number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    /// Creates an account from its number. No rules are checked here.
    #[must_use]
    pub fn new(account_number: impl Into<String>) -> Self {
        Self(account_number.into())
    }

    /// Returns the account number.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Consumes the account, returning its number.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Account {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Account {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Validate for Account {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        AccountValidator::new(self, handler).validate()
    }
}

/// Rules for [`Account`].
///
/// - the number is not empty
/// - the number has exactly [`ACCOUNT_NUMBER_LENGTH`] characters
#[derive(Debug)]
pub struct AccountValidator<'a> {
    account: &'a Account,
    handler: &'a mut dyn ValidationHandler,
}

impl<'a> AccountValidator<'a> {
    /// Creates a validator reporting to `handler`.
    pub fn new(account: &'a Account, handler: &'a mut dyn ValidationHandler) -> Self {
        Self { account, handler }
    }

    /// Runs every rule.
    ///
    /// # Errors
    ///
    /// Propagates the handler's `append` result.
    pub fn validate(self) -> DomainResult<()> {
        let value = self.account.value();

        if value.is_empty() {
            self.handler
                .append(ValidationError::new("Account number cannot be empty"))?;
        }

        if value.chars().count() != ACCOUNT_NUMBER_LENGTH {
            self.handler.append(ValidationError::new(format!(
                "Account number must have {ACCOUNT_NUMBER_LENGTH} digits"
            )))?;
        }

        Ok(())
    }
}
