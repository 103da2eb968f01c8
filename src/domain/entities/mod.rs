//! # Domain Entities
//!
//! - [`Transfer`]: aggregate root for a scheduled funds transfer
//! - [`FeeTier`]: day-range fee rule the transfer is priced against

pub mod fee_tier;
pub mod transfer;

pub use fee_tier::{FeeTier, FeeTierValidator};
pub use transfer::{Transfer, TransferValidator};
