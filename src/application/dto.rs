//! # Data Transfer Objects
//!
//! Output shapes handed to transports.

use crate::domain::entities::Transfer;
use crate::domain::value_objects::arithmetic::ArithmeticError;
use crate::domain::value_objects::{Timestamp, TransferId, TransferStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fee attached to a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeView {
    /// Fixed part.
    pub fixed_fee: Decimal,
    /// Proportional part, as a fraction of the amount.
    pub percentage_fee: Decimal,
    /// Fixed plus proportional, rounded to cents.
    pub total: Decimal,
}

/// Read model of a [`Transfer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferView {
    /// Transfer identifier.
    pub id: TransferId,
    /// Debited account number.
    pub source_account: String,
    /// Credited account number.
    pub destination_account: String,
    /// Transferred amount.
    pub amount: Decimal,
    /// Execution date.
    pub scheduled_date: Timestamp,
    /// Lifecycle status.
    pub status: TransferStatus,
    /// Snapshotted fee.
    pub fee: FeeView,
    /// Creation time.
    pub created_at: Timestamp,
    /// Last modification time.
    pub updated_at: Timestamp,
    /// Soft-delete time.
    pub deleted_at: Option<Timestamp>,
}

impl TryFrom<&Transfer> for TransferView {
    type Error = ArithmeticError;

    fn try_from(transfer: &Transfer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: transfer.id(),
            source_account: transfer.source_account().value().to_string(),
            destination_account: transfer.destination_account().value().to_string(),
            amount: transfer.amount(),
            scheduled_date: transfer.scheduled_date(),
            status: transfer.status(),
            fee: FeeView {
                fixed_fee: transfer.fixed_fee(),
                percentage_fee: transfer.percentage_fee(),
                total: transfer.total_fee()?,
            },
            created_at: transfer.created_at(),
            updated_at: transfer.updated_at(),
            deleted_at: transfer.deleted_at(),
        })
    }
}
