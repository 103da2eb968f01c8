//! # Domain Services
//!
//! Domain services encapsulating logic that doesn't naturally belong to a
//! single entity.
//!
//! ## Services
//!
//! - [`FeeCalculator`]: selects the fee tier for a scheduling lead time

pub mod fee_calculator;

pub use fee_calculator::FeeCalculator;
