//! # Transfer Scheduler
//!
//! Funds-transfer scheduling core: prices a scheduled transfer against a
//! catalog of day-range fee tiers, validates the resulting aggregate and
//! persists it through a repository port.
//!
//! # Layers
//!
//! - [`domain`]: value objects, entities, validation framework and the fee
//!   calculator
//! - [`application`]: the create-transfer use case and the read side
//! - [`infrastructure`]: persistence adapters, configuration and telemetry
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::domain::services::FeeCalculator;
//! use transfer_scheduler::domain::value_objects::Timestamp;
//! use transfer_scheduler::infrastructure::seed::standard_fee_tiers;
//!
//! let mut calculator = FeeCalculator::new();
//! calculator.configure(standard_fee_tiers()).unwrap();
//!
//! let now = Timestamp::now();
//! let tier = calculator.calculate_fee(now, now.add_days(15)).unwrap();
//! assert_eq!(tier.min_days(), 11);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
