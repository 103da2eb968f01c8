//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! ## Thread Safety
//!
//! Storage sits behind `Arc<RwLock<..>>`; clones share the same data.

pub mod transfer_repository;

pub use transfer_repository::InMemoryTransferRepository;
