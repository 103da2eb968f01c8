//! # Application Services
//!
//! - [`TransferQueryService`]: lookups over stored transfers

pub mod transfer_query;

pub use transfer_query::TransferQueryService;
