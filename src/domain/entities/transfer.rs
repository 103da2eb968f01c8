//! # Transfer Aggregate
//!
//! A scheduled movement of funds between two accounts.
//!
//! A [`Transfer`] owns its two [`Account`]s and a snapshot of the fee it was
//! priced with. It references the [`FeeTier`] that produced the fee only by
//! identifier; later changes to the tier do not reprice existing transfers.
//!
//! Construction never fails. Business rules are checked through
//! [`Validate`], so callers choose between collecting every violation and
//! stopping at the first one.
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::domain::entities::{FeeTier, Transfer};
//! use transfer_scheduler::domain::validation::Validate;
//! use transfer_scheduler::domain::value_objects::{Account, Status, Timestamp};
//! use rust_decimal::Decimal;
//!
//! let tier = FeeTier::new("De 1 a 10 dias", 1, Some(10), Decimal::new(1200, 2), Decimal::ZERO);
//! let transfer = Transfer::create(
//!     Account::new("0123456789"),
//!     Account::new("9876543210"),
//!     Decimal::new(1000, 0),
//!     Timestamp::now().add_days(5),
//!     &tier,
//! );
//!
//! assert_eq!(transfer.status().value(), Status::Scheduled);
//! assert!(transfer.violations().is_empty());
//! assert_eq!(transfer.total_fee().unwrap(), Decimal::new(1200, 2));
//! ```

use crate::domain::entities::fee_tier::FeeTier;
use crate::domain::errors::DomainResult;
use crate::domain::validation::{Validate, ValidationError, ValidationHandler};
use crate::domain::value_objects::arithmetic::{
    ArithmeticResult, CheckedArithmetic, round_currency,
};
use crate::domain::value_objects::{Account, FeeTierId, Timestamp, TransferId, TransferStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message reported when the scheduled date falls on an earlier local day.
pub const SCHEDULED_IN_PAST: &str = "Scheduled date cannot be in the past";

/// A transfer scheduled for a future date.
///
/// # Invariants
///
/// - `amount > 0`
/// - source and destination accounts differ
/// - the scheduled date is not on a calendar day before today
/// - both accounts are themselves valid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    id: TransferId,
    source_account: Account,
    destination_account: Account,
    amount: Decimal,
    scheduled_date: Timestamp,
    status: TransferStatus,
    /// Tier the fee was selected from.
    fee_tier_id: FeeTierId,
    /// Snapshot of the tier's fixed fee at pricing time.
    fixed_fee: Decimal,
    /// Snapshot of the tier's percentage fee at pricing time.
    percentage_fee: Decimal,
    created_at: Timestamp,
    updated_at: Timestamp,
    deleted_at: Option<Timestamp>,
}

impl Transfer {
    /// Creates a new transfer in the `Scheduled` state, priced with `fee`.
    ///
    /// Stamps `created_at` and `updated_at` with the current time.
    #[must_use]
    pub fn create(
        source_account: Account,
        destination_account: Account,
        amount: Decimal,
        scheduled_date: Timestamp,
        fee: &FeeTier,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: TransferId::new_v4(),
            source_account,
            destination_account,
            amount,
            scheduled_date,
            status: TransferStatus::scheduled(),
            fee_tier_id: fee.id(),
            fixed_fee: fee.fixed_fee(),
            percentage_fee: fee.percentage_fee(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Rebuilds a transfer from stored parts, keeping every timestamp.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn from_parts(
        id: TransferId,
        source_account: Account,
        destination_account: Account,
        amount: Decimal,
        scheduled_date: Timestamp,
        status: TransferStatus,
        fee_tier_id: FeeTierId,
        fixed_fee: Decimal,
        percentage_fee: Decimal,
        created_at: Timestamp,
        updated_at: Timestamp,
        deleted_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            source_account,
            destination_account,
            amount,
            scheduled_date,
            status,
            fee_tier_id,
            fixed_fee,
            percentage_fee,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Changes amount, date and fee, bumping `updated_at`.
    ///
    /// The caller is expected to revalidate afterwards.
    pub fn update(&mut self, amount: Decimal, scheduled_date: Timestamp, fee: &FeeTier) {
        self.amount = amount;
        self.scheduled_date = scheduled_date;
        self.fee_tier_id = fee.id();
        self.fixed_fee = fee.fixed_fee();
        self.percentage_fee = fee.percentage_fee();
        self.touch();
    }

    /// Soft-deletes the transfer.
    pub fn delete(&mut self) {
        let now = Timestamp::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    /// Clears a soft delete.
    pub fn restore(&mut self) {
        self.deleted_at = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    /// Returns the fee owed: fixed part plus `amount * percentage_fee`, in cents.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the amount is too large to price.
    pub fn total_fee(&self) -> ArithmeticResult<Decimal> {
        let proportional = self.amount.safe_mul(self.percentage_fee)?;
        let total = self.fixed_fee.safe_add(proportional)?;
        Ok(round_currency(total))
    }

    /// Returns true when soft-deleted.
    #[inline]
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns the identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> TransferId {
        self.id
    }

    /// Returns the debited account.
    #[inline]
    #[must_use]
    pub fn source_account(&self) -> &Account {
        &self.source_account
    }

    /// Returns the credited account.
    #[inline]
    #[must_use]
    pub fn destination_account(&self) -> &Account {
        &self.destination_account
    }

    /// Returns the transferred amount.
    #[inline]
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns when the transfer should execute.
    #[inline]
    #[must_use]
    pub fn scheduled_date(&self) -> Timestamp {
        self.scheduled_date
    }

    /// Returns the lifecycle status.
    #[inline]
    #[must_use]
    pub fn status(&self) -> TransferStatus {
        self.status
    }

    /// Returns the tier the fee was selected from.
    #[inline]
    #[must_use]
    pub fn fee_tier_id(&self) -> FeeTierId {
        self.fee_tier_id
    }

    /// Returns the snapshotted fixed fee.
    #[inline]
    #[must_use]
    pub fn fixed_fee(&self) -> Decimal {
        self.fixed_fee
    }

    /// Returns the snapshotted percentage fee, as a fraction.
    #[inline]
    #[must_use]
    pub fn percentage_fee(&self) -> Decimal {
        self.percentage_fee
    }

    /// Returns the creation time.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns the last modification time.
    #[inline]
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Returns the soft-delete time, if deleted.
    #[inline]
    #[must_use]
    pub fn deleted_at(&self) -> Option<Timestamp> {
        self.deleted_at
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transfer({} {} -> {} {} on {} [{}])",
            self.id,
            self.source_account,
            self.destination_account,
            self.amount,
            self.scheduled_date,
            self.status
        )
    }
}

impl Validate for Transfer {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        TransferValidator::new(self, handler).validate()
    }
}

/// Rules for [`Transfer`].
///
/// Checked in order: amount, source account, destination account, distinct
/// accounts, scheduled date, status. Member value objects report through the
/// same handler.
#[derive(Debug)]
pub struct TransferValidator<'a> {
    transfer: &'a Transfer,
    handler: &'a mut dyn ValidationHandler,
}

impl<'a> TransferValidator<'a> {
    /// Creates a validator reporting to `handler`.
    pub fn new(transfer: &'a Transfer, handler: &'a mut dyn ValidationHandler) -> Self {
        Self { transfer, handler }
    }

    /// Runs every rule.
    ///
    /// # Errors
    ///
    /// Propagates the handler's `append` result.
    pub fn validate(self) -> DomainResult<()> {
        let transfer = self.transfer;

        if transfer.amount <= Decimal::ZERO {
            self.handler
                .append(ValidationError::new("Amount must be greater than zero"))?;
        }

        transfer.source_account.validate(&mut *self.handler)?;
        transfer.destination_account.validate(&mut *self.handler)?;

        if transfer.source_account == transfer.destination_account {
            self.handler.append(ValidationError::new(
                "Source and target accounts must be different",
            ))?;
        }

        if transfer.scheduled_date.is_before_today() {
            self.handler
                .append(ValidationError::new(SCHEDULED_IN_PAST))?;
        }

        transfer.status.validate(&mut *self.handler)
    }
}
