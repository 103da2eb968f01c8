//! # Create Transfer Use Case
//!
//! Prices, validates and stores a new scheduled transfer.
//!
//! # Workflow Steps
//!
//! 1. Load the fee-tier catalog from the store
//! 2. Configure a fresh [`FeeCalculator`] with it
//! 3. Reject a scheduled date on an earlier local day
//! 4. Select the tier for the lead time between now and the scheduled date
//! 5. Build the [`Transfer`] in the `Scheduled` state
//! 6. Validate it, collecting every violation
//! 7. Save it
//!
//! The first failing step ends the workflow. Nothing is written unless
//! validation passes, and at most one write is attempted.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Transfer;
use crate::domain::entities::transfer::SCHEDULED_IN_PAST;
use crate::domain::services::FeeCalculator;
use crate::domain::validation::{AccumulatingHandler, Validate, ValidationHandler};
use crate::domain::value_objects::{Account, Timestamp};
use crate::infrastructure::persistence::TransferRepository;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Input of [`CreateTransferUseCase::execute`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferCommand {
    /// Account to debit.
    pub source_account_id: String,
    /// Account to credit.
    pub destination_account_id: String,
    /// Amount to move.
    pub amount: Decimal,
    /// When the transfer should execute.
    pub scheduled_date: Timestamp,
}

impl CreateTransferCommand {
    /// Creates a command.
    #[must_use]
    pub fn new(
        source_account_id: impl Into<String>,
        destination_account_id: impl Into<String>,
        amount: Decimal,
        scheduled_date: Timestamp,
    ) -> Self {
        Self {
            source_account_id: source_account_id.into(),
            destination_account_id: destination_account_id.into(),
            amount,
            scheduled_date,
        }
    }
}

/// Schedules new transfers.
#[derive(Debug, Clone)]
pub struct CreateTransferUseCase {
    repository: Arc<dyn TransferRepository>,
}

impl CreateTransferUseCase {
    /// Creates the use case over `repository`.
    #[must_use]
    pub fn new(repository: Arc<dyn TransferRepository>) -> Self {
        Self { repository }
    }

    /// Runs the workflow for `command`.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::Repository` if the catalog cannot be read or the
    ///   transfer cannot be saved
    /// - `ApplicationError::Domain` with `FeeRulesNotConfigured` when the
    ///   catalog is empty, `Validation` when the scheduled date is on an
    ///   earlier day, `NoMatchingFeeTier` when no tier covers the lead time,
    ///   or `Validation` carrying every violated rule of the built transfer
    pub async fn execute(&self, command: CreateTransferCommand) -> ApplicationResult<Transfer> {
        let tiers = self.repository.list_all_fee_tiers().await.map_err(|e| {
            error!(error = %e, "failed to load fee tiers");
            e
        })?;
        debug!(count = tiers.len(), "fee tiers loaded");

        let calculator = FeeCalculator::with_tiers(tiers)?;

        if command.scheduled_date.is_before_today() {
            warn!(scheduled_date = %command.scheduled_date, "scheduled date is in the past");
            return Err(ApplicationError::validation(SCHEDULED_IN_PAST));
        }

        let fee = calculator
            .calculate_fee(Timestamp::now(), command.scheduled_date)
            .map_err(|e| {
                warn!(error = %e, scheduled_date = %command.scheduled_date, "fee calculation failed");
                e
            })?;

        let transfer = Transfer::create(
            Account::new(command.source_account_id),
            Account::new(command.destination_account_id),
            command.amount,
            command.scheduled_date,
            fee,
        );

        let mut handler = AccumulatingHandler::new();
        transfer.validate(&mut handler)?;
        if handler.has_errors() {
            warn!(
                transfer_id = %transfer.id(),
                errors = handler.errors().len(),
                "transfer rejected by validation"
            );
            handler.into_result()?;
        }

        self.repository.save(&transfer).await.map_err(|e| {
            error!(transfer_id = %transfer.id(), error = %e, "failed to save transfer");
            e
        })?;

        info!(
            transfer_id = %transfer.id(),
            fee_tier_id = %transfer.fee_tier_id(),
            amount = %transfer.amount(),
            "transfer scheduled"
        );
        Ok(transfer)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::FeeTier;
    use crate::domain::value_objects::Status;
    use crate::infrastructure::persistence::in_memory::InMemoryTransferRepository;
    use crate::infrastructure::seed::standard_fee_tiers;

    fn setup() -> (CreateTransferUseCase, InMemoryTransferRepository) {
        let repo = InMemoryTransferRepository::with_fee_tiers(standard_fee_tiers());
        let use_case = CreateTransferUseCase::new(Arc::new(repo.clone()));
        (use_case, repo)
    }

    fn command(source: &str, destination: &str, amount: i64, days_ahead: i64) -> CreateTransferCommand {
        CreateTransferCommand::new(
            source,
            destination,
            Decimal::new(amount, 0),
            Timestamp::now().add_days(days_ahead),
        )
    }

    mod success {
        use super::*;

        #[tokio::test]
        async fn schedules_and_persists_transfer() {
            let (use_case, repo) = setup();

            let transfer = use_case
                .execute(command("0123456789", "9876543210", 1000, 15))
                .await
                .unwrap();

            assert_eq!(transfer.status().value(), Status::Scheduled);
            assert_eq!(transfer.percentage_fee(), Decimal::new(82, 3));
            assert_eq!(repo.count().await.unwrap(), 1);
            assert_eq!(
                repo.find_by_id(&transfer.id()).await.unwrap(),
                Some(transfer)
            );
        }

        #[tokio::test]
        async fn same_day_uses_same_day_tier() {
            let (use_case, _repo) = setup();
            let cmd = CreateTransferCommand::new(
                "0123456789",
                "9876543210",
                Decimal::new(100, 0),
                Timestamp::now().add_secs(3600),
            );

            let transfer = use_case.execute(cmd).await.unwrap();

            assert_eq!(transfer.fixed_fee(), Decimal::new(300, 2));
            assert_eq!(transfer.percentage_fee(), Decimal::new(25, 3));
        }
    }

    mod failures {
        use super::*;

        #[tokio::test]
        async fn empty_catalog_is_configuration_error() {
            let repo = InMemoryTransferRepository::new();
            let use_case = CreateTransferUseCase::new(Arc::new(repo.clone()));

            let err = use_case
                .execute(command("0123456789", "9876543210", 10, 5))
                .await
                .unwrap_err();

            assert!(err.is_client_error());
            assert_eq!(err.errors().messages(), vec!["Fee rules are not configured."]);
            assert!(repo.is_empty());
        }

        #[tokio::test]
        async fn uncovered_lead_time_is_rejected() {
            let (use_case, repo) = setup();

            let err = use_case
                .execute(command("0123456789", "9876543210", 10, 60))
                .await
                .unwrap_err();

            assert_eq!(
                err.errors().messages(),
                vec!["No fee rule matches the provided dates."]
            );
            assert!(repo.is_empty());
        }

        #[tokio::test]
        async fn validation_errors_are_collected_and_nothing_is_saved() {
            let (use_case, repo) = setup();

            let err = use_case
                .execute(command("0123456789", "0123456789", 0, 5))
                .await
                .unwrap_err();

            assert!(err.is_validation());
            assert_eq!(
                err.errors().messages(),
                vec![
                    "Amount must be greater than zero",
                    "Source and target accounts must be different",
                ]
            );
            assert_eq!(repo.count().await.unwrap(), 0);
        }

        #[tokio::test]
        async fn past_date_is_rejected_before_pricing() {
            let (use_case, repo) = setup();

            let err = use_case
                .execute(command("0123456789", "9876543210", 10, -1))
                .await
                .unwrap_err();

            assert!(err.is_validation());
            assert_eq!(err.errors().messages(), vec![SCHEDULED_IN_PAST]);
            assert!(repo.is_empty());
        }

        #[tokio::test]
        async fn invalid_catalog_is_rejected() {
            let repo = InMemoryTransferRepository::with_fee_tiers(vec![FeeTier::new(
                "broken",
                5,
                Some(1),
                Decimal::ZERO,
                Decimal::ZERO,
            )]);
            let use_case = CreateTransferUseCase::new(Arc::new(repo));

            let err = use_case
                .execute(command("0123456789", "9876543210", 10, 5))
                .await
                .unwrap_err();

            assert_eq!(
                err.errors().messages(),
                vec!["Maximum days cannot be less than minimum days"]
            );
        }
    }
}
