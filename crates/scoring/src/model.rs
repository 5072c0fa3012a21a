//! The weighted scoring model
//!
//! Pipeline: factor normalization → weighted sum → /100 normalization →
//! default penalty (floored at zero). Intermediates are computed in u128
//! so unvalidated weights cannot wrap the arithmetic; the result
//! saturates at u64::MAX in that degenerate case.

use credo_governance::ModelParams;
use serde::{Deserialize, Serialize};

/// Collateral level at which the collateral score caps at 100.
pub const COLLATERAL_CAP_UNITS: u64 = 10_000;

/// Score credit per successful repayment; caps at 10 repayments.
pub const REPAYMENT_CREDIT_STEP: u64 = 10;

/// Score penalty per recorded default.
pub const DEFAULT_PENALTY_STEP: u64 = 20;

/// Points removed from the raw score when the market risk factor is
/// above baseline.
pub const MARKET_ADJUSTMENT: u64 = 10;

/// The inputs the model scores, lifted from a borrower profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditFactors {
    pub collateral: u64,
    pub history_score: u64,
    pub repayment_count: u64,
    pub default_count: u64,
}

/// Compute the raw risk score for a set of factors under the given
/// parameters.
///
/// - `collateral_score = min(100, collateral * 100 / 10_000)`
/// - `repayment_score  = min(100, repayment_count * 10)`
/// - `normalized = (cs*wc + history*wh + rs*wr) / 100`
/// - result is `normalized - default_count * 20`, floored at 0
pub fn score(factors: &CreditFactors, params: &ModelParams) -> u64 {
    let collateral_score =
        (u128::from(factors.collateral) * 100 / u128::from(COLLATERAL_CAP_UNITS)).min(100);
    let repayment_score =
        (u128::from(factors.repayment_count) * u128::from(REPAYMENT_CREDIT_STEP)).min(100);
    let default_penalty = u128::from(factors.default_count) * u128::from(DEFAULT_PENALTY_STEP);

    // Each product fits in u128 (both operands started as u64); only the
    // sum can saturate, and only under nonsense weights.
    let weighted_sum = (collateral_score * u128::from(params.weight_collateral))
        .saturating_add(u128::from(factors.history_score) * u128::from(params.weight_history))
        .saturating_add(repayment_score * u128::from(params.weight_repayment));
    let normalized = weighted_sum / 100;

    let result = normalized.saturating_sub(default_penalty);
    u64::try_from(result).unwrap_or(u64::MAX)
}

/// Apply the global market risk margin to a raw score.
///
/// Above the baseline factor the raw score loses [`MARKET_ADJUSTMENT`]
/// points (floored at 0); at or below baseline it passes through.
pub fn apply_market_adjustment(raw_score: u64, params: &ModelParams) -> u64 {
    if params.market_tightened() {
        raw_score.saturating_sub(MARKET_ADJUSTMENT)
    } else {
        raw_score
    }
}
