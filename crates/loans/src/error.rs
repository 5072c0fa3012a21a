//! Loan ledger errors

use crate::loan::LoanStatus;
use credo_core::LoanId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoanError {
    #[error("loan {0} not found")]
    LoanNotFound(LoanId),

    #[error("loan {id} is {status}, not active")]
    LoanNotActive { id: LoanId, status: LoanStatus },
}
