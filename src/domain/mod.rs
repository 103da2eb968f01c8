//! # Domain Layer
//!
//! Business types and rules for scheduled transfers.
//!
//! - [`outcome`]: loud accessors over `Result`
//! - [`validation`]: accumulating and fail-fast validation handlers
//! - [`errors`]: domain error taxonomy
//! - [`value_objects`]: accounts, status, identifiers, timestamps
//! - [`entities`]: the [`Transfer`](entities::Transfer) aggregate and
//!   [`FeeTier`](entities::FeeTier)
//! - [`services`]: the tiered [`FeeCalculator`](services::FeeCalculator)

pub mod entities;
pub mod errors;
pub mod outcome;
pub mod services;
pub mod validation;
pub mod value_objects;
