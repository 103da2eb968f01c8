//! # Repository Traits
//!
//! Port definitions for persistence abstraction.
//!
//! The core only relies on the [`TransferRepository`] contract; storage
//! technology is an implementation detail of each backend.
//!
//! # Examples
//!
//! ```ignore
//! use transfer_scheduler::infrastructure::persistence::traits::TransferRepository;
//!
//! async fn pending(repo: &impl TransferRepository) {
//!     let all = repo.list_all().await.unwrap();
//!     println!("{} transfers stored", all.len());
//! }
//! ```

use crate::domain::entities::{FeeTier, Transfer};
use crate::domain::value_objects::TransferId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Entity not found.
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Duplicate entity.
    #[error("Duplicate entity: {entity_type} with id {id} already exists")]
    Duplicate {
        /// Type of entity.
        entity_type: &'static str,
        /// Entity identifier.
        id: String,
    },

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Query error.
    #[error("Query error: {0}")]
    Query(String),
}

impl RepositoryError {
    /// Creates a not found error.
    #[must_use]
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a duplicate error.
    #[must_use]
    pub fn duplicate(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    /// Returns true if this is a not found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this is a duplicate error.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Store for transfers and the fee-tier catalog.
///
/// Each call is atomic on its own; no cross-call transactions are implied.
#[async_trait]
pub trait TransferRepository: Send + Sync + fmt::Debug {
    /// Inserts a new transfer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Duplicate` if the id is already stored.
    async fn save(&self, transfer: &Transfer) -> RepositoryResult<()>;

    /// Replaces a stored transfer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the id is unknown.
    async fn update(&self, transfer: &Transfer) -> RepositoryResult<()>;

    /// Gets a transfer by ID.
    ///
    /// Returns `None` if the transfer does not exist.
    async fn find_by_id(&self, id: &TransferId) -> RepositoryResult<Option<Transfer>>;

    /// Returns every stored transfer, oldest first.
    async fn list_all(&self) -> RepositoryResult<Vec<Transfer>>;

    /// Returns the fee-tier catalog in its configured order.
    async fn list_all_fee_tiers(&self) -> RepositoryResult<Vec<FeeTier>>;

    /// Counts stored transfers.
    async fn count(&self) -> RepositoryResult<u64>;
}
