//! # Persistence Layer
//!
//! ## Repository Traits (Ports)
//!
//! - [`TransferRepository`]: transfers and the fee-tier catalog
//!
//! ## Implementations
//!
//! - `in_memory`: thread-safe in-process store

pub mod in_memory;
pub mod traits;

pub use traits::{RepositoryError, RepositoryResult, TransferRepository};
