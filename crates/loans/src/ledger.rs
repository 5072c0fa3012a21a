//! In-memory loan ledger with a monotonic id allocator

use crate::error::LoanError;
use crate::loan::{Loan, LoanStatus};
use credo_core::{AccountId, Height, LoanId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate view of the ledger for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanBook {
    pub active: usize,
    pub repaid: usize,
    pub liquidated: usize,
    /// Sum of Active principals; saturates rather than wraps
    pub outstanding_principal: u64,
}

/// Map of loan id → loan, plus the allocator for the next id.
///
/// Ids are strictly increasing from 1 and never reused. Creation cannot
/// fail: the orchestrator validates every precondition before calling in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanLedger {
    loans: BTreeMap<LoanId, Loan>,
    next_id: LoanId,
}

impl Default for LoanLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanLedger {
    pub fn new() -> Self {
        Self {
            loans: BTreeMap::new(),
            next_id: LoanId::FIRST,
        }
    }

    /// Insert a new Active loan and return its id.
    pub fn create(
        &mut self,
        borrower: AccountId,
        amount: u64,
        interest_rate: u64,
        duration: u64,
        current_height: Height,
    ) -> LoanId {
        let id = self.next_id;
        self.next_id = id.next();

        let loan = Loan {
            id,
            borrower,
            amount,
            interest_rate,
            start_height: current_height,
            due_height: current_height.offset(duration),
            status: LoanStatus::Active,
        };
        tracing::info!(
            loan = %id,
            borrower = %loan.borrower,
            amount,
            interest_rate,
            due = %loan.due_height,
            "loan issued"
        );
        self.loans.insert(id, loan);
        id
    }

    pub fn get(&self, id: LoanId) -> Option<&Loan> {
        self.loans.get(&id)
    }

    /// Transition an Active loan to Repaid.
    pub fn mark_repaid(&mut self, id: LoanId) -> Result<(), LoanError> {
        self.transition(id, LoanStatus::Repaid)
    }

    /// Transition an Active loan to Liquidated.
    pub fn mark_liquidated(&mut self, id: LoanId) -> Result<(), LoanError> {
        self.transition(id, LoanStatus::Liquidated)
    }

    /// The single guarded status transition. Requires the loan to exist
    /// and still be Active; a terminal loan is never overwritten.
    fn transition(&mut self, id: LoanId, to: LoanStatus) -> Result<(), LoanError> {
        let loan = self
            .loans
            .get_mut(&id)
            .ok_or(LoanError::LoanNotFound(id))?;

        if loan.status != LoanStatus::Active {
            return Err(LoanError::LoanNotActive {
                id,
                status: loan.status,
            });
        }

        loan.status = to;
        tracing::info!(loan = %id, status = %to, "loan status transition");
        Ok(())
    }

    /// Aggregate counts and outstanding principal.
    pub fn book(&self) -> LoanBook {
        let mut book = LoanBook::default();
        for loan in self.loans.values() {
            match loan.status {
                LoanStatus::Active => {
                    book.active += 1;
                    book.outstanding_principal =
                        book.outstanding_principal.saturating_add(loan.amount);
                }
                LoanStatus::Repaid => book.repaid += 1,
                LoanStatus::Liquidated | LoanStatus::Defaulted => book.liquidated += 1,
            }
        }
        book
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::new("ALICE")
    }

    #[test]
    fn test_ids_are_monotonic_from_one() {
        let mut ledger = LoanLedger::new();

        let first = ledger.create(alice(), 100, 5, 500, Height::new(1));
        let second = ledger.create(alice(), 200, 8, 500, Height::new(2));

        assert_eq!(first, LoanId::new(1));
        assert_eq!(second, LoanId::new(2));
    }

    #[test]
    fn test_create_sets_due_height_and_active_status() {
        let mut ledger = LoanLedger::new();
        let id = ledger.create(alice(), 5_000, 5, 500, Height::new(100));

        let loan = ledger.get(id).unwrap();
        assert_eq!(loan.start_height, Height::new(100));
        assert_eq!(loan.due_height, Height::new(600));
        assert_eq!(loan.status, LoanStatus::Active);
        assert_eq!(loan.amount, 5_000);
    }

    #[test]
    fn test_transitions_require_existing_loan() {
        let mut ledger = LoanLedger::new();
        assert_eq!(
            ledger.mark_repaid(LoanId::new(9)),
            Err(LoanError::LoanNotFound(LoanId::new(9)))
        );
    }

    #[test]
    fn test_terminal_loans_are_never_overwritten() {
        let mut ledger = LoanLedger::new();
        let id = ledger.create(alice(), 100, 5, 500, Height::new(1));

        ledger.mark_repaid(id).unwrap();

        // Repaying again, or liquidating a repaid loan, both fail.
        assert_eq!(
            ledger.mark_repaid(id),
            Err(LoanError::LoanNotActive {
                id,
                status: LoanStatus::Repaid
            })
        );
        assert_eq!(
            ledger.mark_liquidated(id),
            Err(LoanError::LoanNotActive {
                id,
                status: LoanStatus::Repaid
            })
        );
        assert_eq!(ledger.get(id).unwrap().status, LoanStatus::Repaid);
    }

    #[test]
    fn test_book_summary() {
        let mut ledger = LoanLedger::new();
        let a = ledger.create(alice(), 100, 5, 500, Height::new(1));
        let _b = ledger.create(alice(), 250, 8, 500, Height::new(1));
        let c = ledger.create(alice(), 50, 2, 1_000, Height::new(1));

        ledger.mark_repaid(a).unwrap();
        ledger.mark_liquidated(c).unwrap();

        let book = ledger.book();
        assert_eq!(book.active, 1);
        assert_eq!(book.repaid, 1);
        assert_eq!(book.liquidated, 1);
        assert_eq!(book.outstanding_principal, 250);
    }
}
