//! The credit engine - validate-then-mutate orchestration
//!
//! Flow for issuance: pause check → profile lookup → active-loan check →
//! score → threshold → market adjustment → tiering → sizing → (only on
//! full approval) create loan + link profile.

use crate::error::EngineError;
use crate::outcome::{Assessment, Preview};
use credo_core::{AccountId, Height, LoanId};
use credo_governance::{Governance, ModelParams};
use credo_loans::{Loan, LoanBook, LoanLedger};
use credo_registry::{BorrowerProfile, BorrowerRegistry};
use credo_scoring::{
    apply_market_adjustment, duration_for, interest_rate_for, max_loan, score, CreditFactors,
};
use serde::{Deserialize, Serialize};

/// Owns all mutable state and serializes every mutation through
/// `&mut self`. Each public operation validates its preconditions before
/// touching anything, so a failed call leaves no partial effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditEngine {
    governance: Governance,
    registry: BorrowerRegistry,
    loans: LoanLedger,
}

impl CreditEngine {
    /// Engine with default model parameters.
    pub fn new(operator: AccountId) -> Self {
        Self::with_params(operator, ModelParams::default())
    }

    /// Engine with explicit launch parameters.
    pub fn with_params(operator: AccountId, params: ModelParams) -> Self {
        Self {
            governance: Governance::with_params(operator, params),
            registry: BorrowerRegistry::new(),
            loans: LoanLedger::new(),
        }
    }

    // === Borrower operations ===

    /// Self-registration. Overwrites any prior profile for the caller.
    pub fn register(
        &mut self,
        caller: &AccountId,
        initial_collateral: u64,
    ) -> Result<(), EngineError> {
        self.governance.ensure_operational(caller)?;
        self.registry.register(caller.clone(), initial_collateral);
        Ok(())
    }

    /// Collateral top-up. Returns the new total.
    pub fn add_collateral(
        &mut self,
        caller: &AccountId,
        amount: u64,
    ) -> Result<u64, EngineError> {
        self.governance.ensure_operational(caller)?;
        Ok(self.registry.add_collateral(caller, amount)?)
    }

    /// Assess the caller and, on full approval, issue a loan.
    ///
    /// All three outcomes (approved / partial / rejected) come back as an
    /// [`Assessment`]; only precondition failures are errors.
    pub fn assess_and_issue(
        &mut self,
        caller: &AccountId,
        requested_amount: u64,
        current_height: Height,
    ) -> Result<Assessment, EngineError> {
        self.governance.ensure_operational(caller)?;
        let profile = self.registry.require(caller)?;
        if let Some(loan_id) = profile.active_loan {
            return Err(EngineError::LoanAlreadyActive {
                account: caller.clone(),
                loan_id,
            });
        }

        let params = self.governance.params();
        let raw_score = score(&factors_of(profile), params);
        if raw_score < params.risk_threshold {
            tracing::debug!(%caller, raw_score, threshold = params.risk_threshold, "assessment rejected");
            return Ok(Assessment::Rejected {
                risk_score: raw_score,
            });
        }

        let adjusted_score = apply_market_adjustment(raw_score, params);
        let interest_rate = interest_rate_for(adjusted_score);
        let duration = duration_for(adjusted_score);
        let ceiling = max_loan(profile.collateral, adjusted_score);

        if requested_amount > ceiling {
            tracing::debug!(%caller, requested_amount, ceiling, "partial approval");
            return Ok(Assessment::PartialApproval {
                risk_score: adjusted_score,
                interest_rate,
                approved_amount: ceiling,
            });
        }

        // The only mutating branch.
        let loan_id = self.loans.create(
            caller.clone(),
            requested_amount,
            interest_rate,
            duration,
            current_height,
        );
        self.registry.link_loan(caller, loan_id)?;

        Ok(Assessment::Approved {
            loan_id,
            risk_score: adjusted_score,
            interest_rate,
            approved_amount: requested_amount,
            duration,
        })
    }

    /// Dry run of the assessment pipeline. Mutates nothing, so the pause
    /// guard does not apply; still requires a profile.
    pub fn preview(&self, caller: &AccountId) -> Result<Preview, EngineError> {
        let profile = self.registry.require(caller)?;
        let params = self.governance.params();

        let raw_score = score(&factors_of(profile), params);
        let adjusted_score = apply_market_adjustment(raw_score, params);

        Ok(Preview {
            raw_score,
            adjusted_score,
            qualifies: raw_score >= params.risk_threshold,
            interest_rate: interest_rate_for(adjusted_score),
            duration: duration_for(adjusted_score),
            max_loan: max_loan(profile.collateral, adjusted_score),
        })
    }

    /// Repay the caller's active loan in full.
    ///
    /// A second call after the link is cleared fails cleanly with
    /// `NoActiveLoan`; the ledger's own transition guard backstops any
    /// path that reaches a terminal loan directly.
    pub fn repay(&mut self, caller: &AccountId) -> Result<LoanId, EngineError> {
        self.governance.ensure_operational(caller)?;
        let profile = self.registry.require(caller)?;
        let loan_id = profile
            .active_loan
            .ok_or_else(|| EngineError::NoActiveLoan(caller.clone()))?;

        self.loans.mark_repaid(loan_id)?;
        self.registry.clear_loan(caller)?;
        self.registry.record_repayment(caller)?;

        tracing::info!(%caller, loan = %loan_id, "loan repaid");
        Ok(loan_id)
    }

    /// Force-close a past-due loan. Operator only.
    ///
    /// Fails with `LoanNotDefaulted` while `current_height <= due_height`.
    pub fn liquidate(
        &mut self,
        caller: &AccountId,
        borrower: &AccountId,
        current_height: Height,
    ) -> Result<LoanId, EngineError> {
        self.governance.ensure_operator(caller)?;
        let profile = self.registry.require(borrower)?;
        let loan_id = profile
            .active_loan
            .ok_or_else(|| EngineError::NoActiveLoan(borrower.clone()))?;
        let loan = self
            .loans
            .get(loan_id)
            .ok_or(credo_loans::LoanError::LoanNotFound(loan_id))?;

        if !loan.is_past_due(current_height) {
            return Err(EngineError::LoanNotDefaulted {
                loan_id,
                due_height: loan.due_height,
                current_height,
            });
        }

        self.loans.mark_liquidated(loan_id)?;
        self.registry.clear_loan(borrower)?;
        self.registry.record_default(borrower)?;

        tracing::info!(%borrower, loan = %loan_id, "loan liquidated");
        Ok(loan_id)
    }

    // === Governance passthroughs ===

    pub fn set_paused(&mut self, caller: &AccountId, paused: bool) -> Result<(), EngineError> {
        Ok(self.governance.set_paused(caller, paused)?)
    }

    pub fn set_model_weights(
        &mut self,
        caller: &AccountId,
        weight_collateral: u64,
        weight_history: u64,
        weight_repayment: u64,
        risk_threshold: u64,
    ) -> Result<(), EngineError> {
        Ok(self.governance.set_model_weights(
            caller,
            weight_collateral,
            weight_history,
            weight_repayment,
            risk_threshold,
        )?)
    }

    pub fn update_market_risk(
        &mut self,
        caller: &AccountId,
        factor: u64,
    ) -> Result<(), EngineError> {
        Ok(self.governance.update_market_risk(caller, factor)?)
    }

    // === Reads ===

    pub fn profile(&self, account: &AccountId) -> Option<&BorrowerProfile> {
        self.registry.get(account)
    }

    pub fn loan(&self, id: LoanId) -> Option<&Loan> {
        self.loans.get(id)
    }

    pub fn loan_book(&self) -> LoanBook {
        self.loans.book()
    }

    pub fn params(&self) -> &ModelParams {
        self.governance.params()
    }

    pub fn is_paused(&self) -> bool {
        self.governance.is_paused()
    }

    pub fn operator(&self) -> &AccountId {
        self.governance.operator()
    }
}

fn factors_of(profile: &BorrowerProfile) -> CreditFactors {
    CreditFactors {
        collateral: profile.collateral,
        history_score: profile.history_score,
        repayment_count: profile.repayment_count,
        default_count: profile.default_count,
    }
}
