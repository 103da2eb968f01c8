//! # In-Memory Transfer Repository
//!
//! In-memory implementation of [`TransferRepository`] for testing and the
//! command-line runner.
//!
//! Transfers live in a thread-safe `HashMap`; the fee-tier catalog is a
//! `Vec` so its configured order is preserved.

use crate::domain::entities::{FeeTier, Transfer};
use crate::domain::value_objects::TransferId;
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, TransferRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

const ENTITY: &str = "Transfer";

/// In-memory implementation of [`TransferRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransferRepository {
    transfers: Arc<RwLock<HashMap<TransferId, Transfer>>>,
    fee_tiers: Arc<RwLock<Vec<FeeTier>>>,
}

impl InMemoryTransferRepository {
    /// Creates a repository with no transfers and an empty fee catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with a fee catalog.
    #[must_use]
    pub fn with_fee_tiers(fee_tiers: Vec<FeeTier>) -> Self {
        Self {
            transfers: Arc::default(),
            fee_tiers: Arc::new(RwLock::new(fee_tiers)),
        }
    }

    /// Replaces the fee catalog.
    pub async fn set_fee_tiers(&self, fee_tiers: Vec<FeeTier>) {
        *self.fee_tiers.write().await = fee_tiers;
    }

    /// Returns the number of stored transfers.
    ///
    /// Does not wait for the lock: while a writer holds it this reports `0`
    /// even if transfers are stored. Use [`TransferRepository::count`] when
    /// an exact figure matters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transfers
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if no transfer is stored.
    ///
    /// Shares the caveat of [`len`](Self::len): a held write lock reads as empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every transfer, keeping the fee catalog.
    pub async fn clear(&self) {
        self.transfers.write().await.clear();
    }
}

#[async_trait]
impl TransferRepository for InMemoryTransferRepository {
    async fn save(&self, transfer: &Transfer) -> RepositoryResult<()> {
        let mut storage = self.transfers.write().await;
        if storage.contains_key(&transfer.id()) {
            return Err(RepositoryError::duplicate(ENTITY, transfer.id().to_string()));
        }
        storage.insert(transfer.id(), transfer.clone());
        Ok(())
    }

    async fn update(&self, transfer: &Transfer) -> RepositoryResult<()> {
        let mut storage = self.transfers.write().await;
        match storage.get_mut(&transfer.id()) {
            Some(stored) => {
                *stored = transfer.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found(ENTITY, transfer.id().to_string())),
        }
    }

    async fn find_by_id(&self, id: &TransferId) -> RepositoryResult<Option<Transfer>> {
        let storage = self.transfers.read().await;
        Ok(storage.get(id).cloned())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Transfer>> {
        let storage = self.transfers.read().await;
        let mut transfers: Vec<Transfer> = storage.values().cloned().collect();
        transfers.sort_by_key(|t| (t.created_at(), t.id()));
        Ok(transfers)
    }

    async fn list_all_fee_tiers(&self) -> RepositoryResult<Vec<FeeTier>> {
        Ok(self.fee_tiers.read().await.clone())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.transfers.read().await;
        Ok(storage.len() as u64)
    }
}
