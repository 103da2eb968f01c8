//! # Fee Tier Entity
//!
//! A day-range rule mapping scheduling lead time to a fee.
//!
//! A [`FeeTier`] covers every day difference `d` with
//! `min_days <= d` and, when bounded, `d <= max_days`. Its fee is a fixed
//! amount plus a fraction of the transferred amount.
//!
//! # Examples
//!
//! ```
//! use transfer_scheduler::domain::entities::fee_tier::FeeTier;
//! use rust_decimal::Decimal;
//!
//! let tier = FeeTier::new("De 1 a 10 dias", 1, Some(10), Decimal::new(1200, 2), Decimal::ZERO);
//! assert!(tier.covers(1));
//! assert!(tier.covers(10));
//! assert!(!tier.covers(11));
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::validation::{Validate, ValidationError, ValidationHandler};
use crate::domain::value_objects::FeeTierId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fee rule for a range of scheduling lead times, in whole days.
///
/// # Invariants
///
/// - `name` is not blank
/// - `min_days >= 0`
/// - `max_days`, when present, is `>= min_days`
/// - `fixed_fee >= 0` and `percentage_fee >= 0`
///
/// Invariants are checked by [`Validate`], not by the constructors, so a
/// catalog can report every broken tier at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeTier {
    id: FeeTierId,
    name: String,
    /// Inclusive lower bound.
    min_days: i64,
    /// Inclusive upper bound; `None` means unbounded.
    max_days: Option<i64>,
    fixed_fee: Decimal,
    /// Fraction of the amount, not a percentage (0.025 is 2.5%).
    percentage_fee: Decimal,
}

impl FeeTier {
    /// Creates a tier with a fresh identifier.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        min_days: i64,
        max_days: Option<i64>,
        fixed_fee: Decimal,
        percentage_fee: Decimal,
    ) -> Self {
        Self::from_parts(
            FeeTierId::new_v4(),
            name,
            min_days,
            max_days,
            fixed_fee,
            percentage_fee,
        )
    }

    /// Rebuilds a tier from stored parts.
    #[must_use]
    pub fn from_parts(
        id: FeeTierId,
        name: impl Into<String>,
        min_days: i64,
        max_days: Option<i64>,
        fixed_fee: Decimal,
        percentage_fee: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            min_days,
            max_days,
            fixed_fee,
            percentage_fee,
        }
    }

    /// Returns the identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> FeeTierId {
        self.id
    }

    /// Returns the display name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the inclusive lower bound in days.
    #[inline]
    #[must_use]
    pub fn min_days(&self) -> i64 {
        self.min_days
    }

    /// Returns the inclusive upper bound in days, if bounded.
    #[inline]
    #[must_use]
    pub fn max_days(&self) -> Option<i64> {
        self.max_days
    }

    /// Returns the fixed part of the fee.
    #[inline]
    #[must_use]
    pub fn fixed_fee(&self) -> Decimal {
        self.fixed_fee
    }

    /// Returns the proportional part of the fee, as a fraction.
    #[inline]
    #[must_use]
    pub fn percentage_fee(&self) -> Decimal {
        self.percentage_fee
    }

    /// Returns true if `days` falls inside this tier's range.
    #[must_use]
    pub fn covers(&self, days: i64) -> bool {
        self.min_days <= days && self.max_days.is_none_or(|max| days <= max)
    }

    /// Returns true if the two ranges share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let starts_before_other_ends = other.max_days.is_none_or(|max| self.min_days <= max);
        let other_starts_before_end = self.max_days.is_none_or(|max| other.min_days <= max);
        starts_before_other_ends && other_starts_before_end
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_days {
            Some(max) => write!(f, "{} [{}, {}]", self.name, self.min_days, max),
            None => write!(f, "{} [{}, ..)", self.name, self.min_days),
        }
    }
}

impl Validate for FeeTier {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> DomainResult<()> {
        FeeTierValidator::new(self, handler).validate()
    }
}

/// Rules for [`FeeTier`].
#[derive(Debug)]
pub struct FeeTierValidator<'a> {
    tier: &'a FeeTier,
    handler: &'a mut dyn ValidationHandler,
}

impl<'a> FeeTierValidator<'a> {
    /// Creates a validator reporting to `handler`.
    pub fn new(tier: &'a FeeTier, handler: &'a mut dyn ValidationHandler) -> Self {
        Self { tier, handler }
    }

    /// Runs every rule, in declaration order.
    ///
    /// # Errors
    ///
    /// Propagates the handler's `append` result.
    pub fn validate(self) -> DomainResult<()> {
        let tier = self.tier;

        if tier.name.trim().is_empty() {
            self.handler
                .append(ValidationError::new("Transfer fee name cannot be blank"))?;
        }

        if tier.min_days < 0 {
            self.handler
                .append(ValidationError::new("Minimum days cannot be negative"))?;
        }

        if tier.max_days.is_some_and(|max| max < tier.min_days) {
            self.handler.append(ValidationError::new(
                "Maximum days cannot be less than minimum days",
            ))?;
        }

        if tier.fixed_fee < Decimal::ZERO {
            self.handler
                .append(ValidationError::new("Fixed fee cannot be negative"))?;
        }

        if tier.percentage_fee < Decimal::ZERO {
            self.handler
                .append(ValidationError::new("Percentage fee cannot be negative"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tier(min: i64, max: Option<i64>) -> FeeTier {
        FeeTier::new("tier", min, max, Decimal::ZERO, Decimal::ZERO)
    }

    mod range {
        use super::*;

        #[test]
        fn bounded_range_is_inclusive() {
            let t = tier(11, Some(20));
            assert!(!t.covers(10));
            assert!(t.covers(11));
            assert!(t.covers(20));
            assert!(!t.covers(21));
        }

        #[test]
        fn unbounded_range_covers_everything_above_min() {
            let t = tier(51, None);
            assert!(!t.covers(50));
            assert!(t.covers(51));
            assert!(t.covers(i64::MAX));
        }

        #[test]
        fn negative_days_are_not_covered_from_zero() {
            assert!(!tier(0, Some(0)).covers(-1));
        }

        #[test]
        fn overlap_detection() {
            assert!(tier(0, Some(10)).overlaps(&tier(10, Some(20))));
            assert!(tier(5, None).overlaps(&tier(0, Some(5))));
            assert!(tier(0, None).overlaps(&tier(100, None)));
            assert!(!tier(0, Some(0)).overlaps(&tier(1, Some(10))));
            assert!(!tier(11, None).overlaps(&tier(1, Some(10))));
        }

        #[test]
        fn display_shows_bounds() {
            assert_eq!(tier(1, Some(10)).to_string(), "tier [1, 10]");
            assert_eq!(tier(51, None).to_string(), "tier [51, ..)");
        }
    }

    mod validation {
        use super::*;
        use crate::domain::validation::FailFastHandler;

        #[test]
        fn well_formed_tier_is_valid() {
            let t = FeeTier::new(
                "Mesmo Dia",
                0,
                Some(0),
                Decimal::new(300, 2),
                Decimal::new(25, 3),
            );
            assert!(t.violations().is_empty());
        }

        #[test]
        fn reports_every_broken_rule_in_order() {
            let t = FeeTier::new("  ", -1, Some(-5), Decimal::new(-1, 0), Decimal::new(-1, 2));
            assert_eq!(
                t.violations().messages(),
                vec![
                    "Transfer fee name cannot be blank",
                    "Minimum days cannot be negative",
                    "Maximum days cannot be less than minimum days",
                    "Fixed fee cannot be negative",
                    "Percentage fee cannot be negative",
                ]
            );
        }

        #[test]
        fn equal_bounds_are_allowed() {
            assert!(tier(7, Some(7)).violations().is_empty());
        }

        #[test]
        fn negative_zero_fee_is_not_negative() {
            let t = FeeTier::new("z", 0, None, -Decimal::ZERO, Decimal::ZERO);
            assert!(t.violations().is_empty());
        }

        #[test]
        fn fail_fast_reports_first_rule_only() {
            let err = tier(-1, Some(-5))
                .validate(&mut FailFastHandler::new())
                .unwrap_err();
            assert_eq!(
                err.into_validation_errors().messages(),
                vec!["Minimum days cannot be negative"]
            );
        }
    }

    #[test]
    fn from_parts_keeps_identifier() {
        let id = FeeTierId::new_v4();
        let t = FeeTier::from_parts(id, "x", 0, None, Decimal::ONE, Decimal::ZERO);
        assert_eq!(t.id(), id);
        assert_eq!(t.name(), "x");
        assert_eq!(t.fixed_fee(), Decimal::ONE);
        assert_eq!(t.max_days(), None);
    }
}
