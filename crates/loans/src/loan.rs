//! Loan data structures

use credo_core::{AccountId, Height, LoanId};
use serde::{Deserialize, Serialize};

/// Status of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum LoanStatus {
    /// Outstanding; the only status a loan is created with
    Active,
    /// Repaid in full by the borrower
    Repaid,
    /// Force-closed by the operator after the due height passed
    Liquidated,
    /// Declared in the data model but never set: liquidation is the only
    /// past-due path
    Defaulted,
}

impl LoanStatus {
    /// Terminal statuses admit no further transition.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoanStatus::Active)
    }
}

/// A single loan record.
///
/// `borrower`, `amount`, `interest_rate`, and the height bounds are
/// immutable after creation; only `status` ever changes, exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub borrower: AccountId,
    /// Approved principal
    pub amount: u64,
    /// Percent, tiered from the adjusted score: 2, 5, or 8
    pub interest_rate: u64,
    pub start_height: Height,
    /// `start_height + duration`
    pub due_height: Height,
    pub status: LoanStatus,
}

impl Loan {
    /// Past due means strictly beyond the due height.
    pub fn is_past_due(&self, current_height: Height) -> bool {
        current_height > self.due_height
    }
}
