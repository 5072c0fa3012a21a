//! Borrower profile data structure

use credo_core::LoanId;
use serde::{Deserialize, Serialize};

/// History score a profile starts with on registration.
pub const INITIAL_HISTORY_SCORE: u64 = 50;

/// History score points lost per liquidation (floored at 0).
pub const LIQUIDATION_HISTORY_PENALTY: u64 = 20;

/// Per-account credit record.
///
/// # Invariant
/// `active_loan` is `Some(id)` iff the referenced loan is Active. The
/// orchestrator maintains this across issuance, repayment, and
/// liquidation; nothing else touches the link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowerProfile {
    /// Posted collateral; owner-increasable, only liquidation logic
    /// outside this core ever reduces it
    pub collateral: u64,

    /// Reputation in [0, 100]; starts at 50, -20 per liquidation
    pub history_score: u64,

    /// Successful repayments, unbounded
    pub repayment_count: u64,

    /// Liquidations suffered, unbounded
    pub default_count: u64,

    /// Link to the single outstanding loan, if any
    pub active_loan: Option<LoanId>,
}

impl BorrowerProfile {
    /// Fresh profile as created by registration.
    pub fn new(initial_collateral: u64) -> Self {
        Self {
            collateral: initial_collateral,
            history_score: INITIAL_HISTORY_SCORE,
            repayment_count: 0,
            default_count: 0,
            active_loan: None,
        }
    }

    pub fn has_active_loan(&self) -> bool {
        self.active_loan.is_some()
    }
}
