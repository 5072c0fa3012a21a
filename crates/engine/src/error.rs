//! Orchestrator errors
//!
//! Component errors pass through verbatim; the two variants defined here
//! are the preconditions only the orchestrator can see.

use credo_core::{AccountId, Height, LoanId};
use credo_governance::GovernanceError;
use credo_loans::LoanError;
use credo_registry::RegistryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Governance(#[from] GovernanceError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Loan(#[from] LoanError),

    #[error("account {account} already has active loan {loan_id}")]
    LoanAlreadyActive { account: AccountId, loan_id: LoanId },

    #[error("no loan on record for account {0}")]
    NoActiveLoan(AccountId),

    #[error("loan {loan_id} is not past due (due {due_height}, current {current_height})")]
    LoanNotDefaulted {
        loan_id: LoanId,
        due_height: Height,
        current_height: Height,
    },
}
