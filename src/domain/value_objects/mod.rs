//! # Value Objects
//!
//! Immutable types identified by their values.
//!
//! - [`Account`]: 10-character account number
//! - [`TransferStatus`] / [`Status`]: transfer lifecycle vocabulary
//! - [`TransferId`], [`FeeTierId`]: UUID-based identifiers
//! - [`Timestamp`]: UTC instant with calendar-day helpers
//! - [`CheckedArithmetic`]: overflow-safe decimal operations

pub mod account;
pub mod arithmetic;
pub mod ids;
pub mod timestamp;
pub mod transfer_status;

pub use account::{Account, ACCOUNT_NUMBER_LENGTH};
pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, round_currency};
pub use ids::{FeeTierId, TransferId};
pub use timestamp::{ParseTimestampError, Timestamp};
pub use transfer_status::{ParseEnumError, Status, TransferStatus};
