//! # Fee Calculator
//!
//! Selects the fee tier that applies to a transfer's scheduling lead time.
//!
//! The lead time is the floor of the whole days between pricing and the
//! scheduled date. Tiers are searched in catalog order and the first one
//! whose range covers the lead time wins.
//!
//! A calculator holds its own catalog and is meant to be created per
//! request; it is never reconfigured while a calculation is in flight.
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::domain::entities::FeeTier;
//! use transfer_scheduler::domain::services::FeeCalculator;
//! use transfer_scheduler::domain::value_objects::Timestamp;
//! use rust_decimal::Decimal;
//!
//! let mut calculator = FeeCalculator::new();
//! calculator
//!     .configure(vec![
//!         FeeTier::new("Mesmo Dia", 0, Some(0), Decimal::new(300, 2), Decimal::new(25, 3)),
//!         FeeTier::new("De 1 a 10 dias", 1, Some(10), Decimal::new(1200, 2), Decimal::ZERO),
//!     ])
//!     .unwrap();
//!
//! let now = Timestamp::now();
//! let tier = calculator.calculate_fee(now, now.add_days(9)).unwrap();
//! assert_eq!(tier.fixed_fee(), Decimal::new(1200, 2));
//! ```

use crate::domain::entities::FeeTier;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::{AccumulatingHandler, Validate};
use crate::domain::value_objects::Timestamp;
use tracing::{debug, warn};

/// Tiered fee selection over a configured catalog.
#[derive(Debug, Clone, Default)]
pub struct FeeCalculator {
    tiers: Option<Vec<FeeTier>>,
}

impl FeeCalculator {
    /// Creates an unconfigured calculator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator configured with `tiers`.
    ///
    /// # Errors
    ///
    /// Same as [`configure`](Self::configure).
    pub fn with_tiers(tiers: Vec<FeeTier>) -> DomainResult<Self> {
        let mut calculator = Self::new();
        calculator.configure(tiers)?;
        Ok(calculator)
    }

    /// Replaces the catalog.
    ///
    /// Every tier is validated and all violations are reported together; on
    /// failure the previous catalog is kept. Overlapping ranges are accepted
    /// (the first declared tier wins) but logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if any tier breaks its own rules.
    pub fn configure(&mut self, tiers: Vec<FeeTier>) -> DomainResult<()> {
        let mut handler = AccumulatingHandler::new();
        for tier in &tiers {
            tier.validate(&mut handler)?;
        }
        handler.into_result()?;

        for (first, second) in overlapping_pairs(&tiers) {
            warn!(
                first = %first,
                second = %second,
                "fee tiers overlap, first declared tier takes precedence"
            );
        }

        debug!(count = tiers.len(), "fee tiers configured");
        self.tiers = Some(tiers);
        Ok(())
    }

    /// Returns true once a non-empty catalog has been configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.tiers.as_ref().is_some_and(|tiers| !tiers.is_empty())
    }

    /// Returns the configured tiers, in catalog order.
    #[must_use]
    pub fn tiers(&self) -> &[FeeTier] {
        self.tiers.as_deref().unwrap_or_default()
    }

    /// Selects the tier for a transfer priced at `scheduled_at` and executed
    /// at `scheduled_for`.
    ///
    /// # Errors
    ///
    /// - `DomainError::FeeRulesNotConfigured` if no catalog is set, or it is empty
    /// - `DomainError::NoMatchingFeeTier` if no tier covers the day difference
    pub fn calculate_fee(
        &self,
        scheduled_at: Timestamp,
        scheduled_for: Timestamp,
    ) -> DomainResult<&FeeTier> {
        let tiers = match self.tiers.as_deref() {
            Some(tiers) if !tiers.is_empty() => tiers,
            _ => return Err(DomainError::FeeRulesNotConfigured),
        };

        let days = scheduled_at.whole_days_until(&scheduled_for);

        let tier = tiers
            .iter()
            .find(|tier| tier.covers(days))
            .ok_or(DomainError::NoMatchingFeeTier { days })?;

        debug!(tier_id = %tier.id(), tier = %tier.name(), days, "fee tier selected");
        Ok(tier)
    }
}

/// Returns every pair of tiers whose ranges intersect, in catalog order.
fn overlapping_pairs(tiers: &[FeeTier]) -> Vec<(&FeeTier, &FeeTier)> {
    tiers
        .iter()
        .enumerate()
        .flat_map(|(i, first)| {
            tiers
                .iter()
                .skip(i + 1)
                .filter(move |second| first.overlaps(second))
                .map(move |second| (first, second))
        })
        .collect()
}
