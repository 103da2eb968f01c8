//! # Transfer Queries
//!
//! Read side over the transfer store.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Transfer;
use crate::domain::value_objects::TransferId;
use crate::infrastructure::persistence::TransferRepository;
use std::sync::Arc;
use tracing::debug;

/// Looks up stored transfers.
#[derive(Debug, Clone)]
pub struct TransferQueryService {
    repository: Arc<dyn TransferRepository>,
}

impl TransferQueryService {
    /// Creates the service over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn TransferRepository>) -> Self {
        Self { repository }
    }

    /// Finds a transfer by its textual identifier.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Domain` (validation) if `id` is not a UUID
    /// - `ApplicationError::NotFound` if no transfer has that id
    /// - `ApplicationError::Repository` if the store fails
    pub async fn find_by_id(&self, id: &str) -> ApplicationResult<Transfer> {
        let transfer_id: TransferId = id
            .parse()
            .map_err(|_| ApplicationError::validation(format!("Invalid transfer id: {id}")))?;

        let transfer = self
            .repository
            .find_by_id(&transfer_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Transfer", transfer_id.to_string()))?;

        debug!(transfer_id = %transfer.id(), "transfer found");
        Ok(transfer)
    }

    /// Returns every stored transfer.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Repository` if the store fails.
    pub async fn list_all(&self) -> ApplicationResult<Vec<Transfer>> {
        let transfers = self.repository.list_all().await?;
        debug!(count = transfers.len(), "transfers listed");
        Ok(transfers)
    }
}
