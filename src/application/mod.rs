//! # Application Layer
//!
//! Orchestrates domain logic over the persistence port.
//!
//! - [`use_cases`]: write workflows
//! - [`services`]: read side
//! - [`dto`]: output shapes
//! - [`error`]: application error taxonomy

pub mod dto;
pub mod error;
pub mod services;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
