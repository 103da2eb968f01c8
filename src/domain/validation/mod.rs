//! # Validation
//!
//! Rule-violation collection shared by every validated domain type.
//!
//! A [`ValidationHandler`] receives each violated rule as a
//! [`ValidationError`]. Two strategies implement it:
//!
//! - [`AccumulatingHandler`]: records every violation and keeps going
//! - [`FailFastHandler`]: turns the first violation into an `Err`
//!
//! Types that can check themselves implement [`Validate`]; their validators
//! call `handler.append(..)?` for each broken rule, so the same validator
//! collects all problems or stops at the first one depending on the handler.
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::domain::validation::{
//!     AccumulatingHandler, FailFastHandler, Validate, ValidationHandler,
//! };
//! use transfer_scheduler::domain::value_objects::Account;
//!
//! let account = Account::new("");
//!
//! let mut notification = AccumulatingHandler::new();
//! account.validate(&mut notification).unwrap();
//! assert_eq!(notification.errors().len(), 2);
//!
//! let mut fail_fast = FailFastHandler::new();
//! assert!(account.validate(&mut fail_fast).is_err());
//! ```

pub mod error;
pub mod handler;

pub use error::{ValidationError, ValidationErrors};
pub use handler::{AccumulatingHandler, FailFastHandler, Validate, ValidationHandler};
