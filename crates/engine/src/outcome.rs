//! Assessment outcomes
//!
//! Rejection and partial approval are results, not errors: the caller
//! asked a question and got an answer. Only precondition failures
//! (pause, unknown borrower, existing loan) surface as `EngineError`.

use credo_core::LoanId;
use serde::{Deserialize, Serialize};

/// Outcome of `assess_and_issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(tag = "status", rename_all = "snake_case")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Assessment {
    /// Full approval: the only branch that mutates state.
    Approved {
        loan_id: LoanId,
        /// Adjusted score the terms were derived from
        risk_score: u64,
        interest_rate: u64,
        approved_amount: u64,
        duration: u64,
    },
    /// The score qualifies but the request exceeds what the collateral
    /// supports; `approved_amount` is the ceiling on offer. No loan is
    /// issued and nothing changes.
    PartialApproval {
        risk_score: u64,
        interest_rate: u64,
        /// `max_loan`: the most the borrower could take right now
        approved_amount: u64,
    },
    /// Raw score below the qualification threshold. Nothing changes.
    Rejected {
        /// Raw score, before market adjustment
        risk_score: u64,
    },
}

impl Assessment {
    pub fn is_approved(&self) -> bool {
        matches!(self, Assessment::Approved { .. })
    }

    pub fn risk_score(&self) -> u64 {
        match self {
            Assessment::Approved { risk_score, .. }
            | Assessment::PartialApproval { risk_score, .. }
            | Assessment::Rejected { risk_score } => *risk_score,
        }
    }
}

/// Read-only dry run of the assessment pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub raw_score: u64,
    pub adjusted_score: u64,
    pub qualifies: bool,
    pub interest_rate: u64,
    pub duration: u64,
    pub max_loan: u64,
}
