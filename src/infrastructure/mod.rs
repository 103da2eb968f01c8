//! # Infrastructure Layer
//!
//! Adapters around the domain: persistence, configuration, seed data and
//! tracing setup.

pub mod config;
pub mod persistence;
pub mod seed;
pub mod telemetry;
