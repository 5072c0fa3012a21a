//! Credo Loan Ledger - Loan records and their lifecycle
//!
//! Loans are created Active and take exactly one terminal transition
//! (Repaid or Liquidated). Transitions out of a terminal status are
//! rejected, never overwritten.

pub mod error;
pub mod ledger;
pub mod loan;

pub use error::LoanError;
pub use ledger::{LoanBook, LoanLedger};
pub use loan::{Loan, LoanStatus};
