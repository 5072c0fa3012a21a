//! Rate and duration tiering, and collateral-based loan sizing
//!
//! Tier boundaries are strictly greater-than: an adjusted score of
//! exactly 80 (or 60, or 75) falls to the lower tier.

/// Interest rate tier (percent) for an adjusted score.
///
/// `>80 → 2`, `>60 → 5`, otherwise `8`.
pub fn interest_rate_for(adjusted_score: u64) -> u64 {
    if adjusted_score > 80 {
        2
    } else if adjusted_score > 60 {
        5
    } else {
        8
    }
}

/// Loan duration tier in height units for an adjusted score.
///
/// `>75 → 1000`, otherwise `500`.
pub fn duration_for(adjusted_score: u64) -> u64 {
    if adjusted_score > 75 {
        1_000
    } else {
        500
    }
}

/// Maximum principal the score supports: `collateral * adjusted_score / 100`
/// with floor division.
pub fn max_loan(collateral: u64, adjusted_score: u64) -> u64 {
    let sized = u128::from(collateral) * u128::from(adjusted_score) / 100;
    u64::try_from(sized).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_tiers_strict_boundaries() {
        assert_eq!(interest_rate_for(81), 2);
        assert_eq!(interest_rate_for(80), 5); // exactly 80 falls through
        assert_eq!(interest_rate_for(61), 5);
        assert_eq!(interest_rate_for(60), 8); // exactly 60 falls through
        assert_eq!(interest_rate_for(0), 8);
    }

    #[test]
    fn test_duration_tiers() {
        assert_eq!(duration_for(76), 1_000);
        assert_eq!(duration_for(75), 500);
        assert_eq!(duration_for(0), 500);
    }

    #[test]
    fn test_max_loan_sizing() {
        assert_eq!(max_loan(10_000, 67), 6_700);
        assert_eq!(max_loan(10_000, 0), 0);
        // Floor division: 99 * 67 / 100 = 66.33 -> 66
        assert_eq!(max_loan(99, 67), 66);
    }

    #[test]
    fn test_tightened_reference_borrower_terms() {
        // A raw 77 tightened to 67 lands in the middle tier.
        assert_eq!(interest_rate_for(67), 5);
        assert_eq!(duration_for(67), 500);
        assert_eq!(max_loan(10_000, 67), 6_700);
    }

    #[test]
    fn test_max_loan_wide_inputs() {
        // Product exceeds u64 before the division; must not wrap.
        assert_eq!(max_loan(u64::MAX, 100), u64::MAX);
    }
}
