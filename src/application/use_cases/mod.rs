//! # Use Cases
//!
//! - [`CreateTransferUseCase`]: prices, validates and stores a new transfer

pub mod create_transfer;

pub use create_transfer::{CreateTransferCommand, CreateTransferUseCase};
