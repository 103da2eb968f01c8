//! # Standard Fee Catalog
//!
//! The six day-range tiers every environment starts with unless the
//! configuration provides its own.
//!
//! | Tier             | Days    | Fixed | Percentage |
//! |------------------|---------|-------|------------|
//! | Mesmo Dia        | 0       | 3.00  | 2.5%       |
//! | De 1 a 10 dias   | 1..=10  | 12.00 | 0%         |
//! | De 11 a 20 dias  | 11..=20 | 0.00  | 8.2%       |
//! | De 21 a 30 dias  | 21..=30 | 0.00  | 6.9%       |
//! | De 31 a 40 dias  | 31..=40 | 0.00  | 4.7%       |
//! | De 41 a 50 dias  | 41..=50 | 0.00  | 1.7%       |
//!
//! Lead times above 50 days have no tier.

use crate::domain::entities::FeeTier;
use crate::domain::value_objects::FeeTierId;
use rust_decimal::Decimal;
use uuid::Uuid;

/// `(id, name, min_days, max_days, fixed cents, percentage in thousandths)`
const STANDARD_TIERS: [(u128, &str, i64, i64, i64, i64); 6] = [
    (0xc7b9_2261_8f3d_4f88_8d10_d8b7_90a6_d001, "Mesmo Dia", 0, 0, 300, 25),
    (0xc7b9_2261_8f3d_4f88_8d10_d8b7_90a6_d002, "De 1 a 10 dias", 1, 10, 1200, 0),
    (0xc7b9_2261_8f3d_4f88_8d10_d8b7_90a6_d003, "De 11 a 20 dias", 11, 20, 0, 82),
    (0xc7b9_2261_8f3d_4f88_8d10_d8b7_90a6_d004, "De 21 a 30 dias", 21, 30, 0, 69),
    (0xc7b9_2261_8f3d_4f88_8d10_d8b7_90a6_d005, "De 31 a 40 dias", 31, 40, 0, 47),
    (0xc7b9_2261_8f3d_4f88_8d10_d8b7_90a6_d006, "De 41 a 50 dias", 41, 50, 0, 17),
];

/// Returns the standard catalog, ordered by lead time.
#[must_use]
pub fn standard_fee_tiers() -> Vec<FeeTier> {
    STANDARD_TIERS
        .iter()
        .map(|&(id, name, min_days, max_days, fixed_cents, pct_thousandths)| {
            FeeTier::from_parts(
                FeeTierId::new(Uuid::from_u128(id)),
                name,
                min_days,
                Some(max_days),
                Decimal::new(fixed_cents, 2),
                Decimal::new(pct_thousandths, 3),
            )
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::services::FeeCalculator;
    use crate::domain::validation::Validate;
    use crate::domain::value_objects::Timestamp;

    #[test]
    fn catalog_has_six_valid_tiers() {
        let tiers = standard_fee_tiers();
        assert_eq!(tiers.len(), 6);
        assert!(tiers.iter().all(|t| t.violations().is_empty()));
    }

    #[test]
    fn identifiers_are_stable() {
        let tiers = standard_fee_tiers();
        assert_eq!(
            tiers[0].id().to_string(),
            "c7b92261-8f3d-4f88-8d10-d8b790a6d001"
        );
        assert_eq!(
            tiers[5].id().to_string(),
            "c7b92261-8f3d-4f88-8d10-d8b790a6d006"
        );
    }

    #[test]
    fn ranges_are_contiguous_and_disjoint() {
        let tiers = standard_fee_tiers();
        for pair in tiers.windows(2) {
            assert_eq!(pair[0].max_days().unwrap() + 1, pair[1].min_days());
            assert!(!pair[0].overlaps(&pair[1]));
        }
    }

    #[test]
    fn fees_match_published_table() {
        let tiers = standard_fee_tiers();
        assert_eq!(tiers[0].fixed_fee(), Decimal::new(3, 0));
        assert_eq!(tiers[0].percentage_fee(), Decimal::new(25, 3));
        assert_eq!(tiers[1].fixed_fee(), Decimal::new(12, 0));
        assert_eq!(tiers[2].percentage_fee(), Decimal::new(82, 3));
        assert_eq!(tiers[3].percentage_fee(), Decimal::new(69, 3));
        assert_eq!(tiers[4].percentage_fee(), Decimal::new(47, 3));
        assert_eq!(tiers[5].percentage_fee(), Decimal::new(17, 3));
    }

    #[test]
    fn beyond_fifty_days_has_no_tier() {
        let calculator = FeeCalculator::with_tiers(standard_fee_tiers()).unwrap();
        let start = Timestamp::from_secs(0).unwrap();
        assert!(calculator.calculate_fee(start, start.add_days(50)).is_ok());
        assert!(
            calculator
                .calculate_fee(start, start.add_days(51))
                .unwrap_err()
                .is_no_matching_tier()
        );
    }
}
