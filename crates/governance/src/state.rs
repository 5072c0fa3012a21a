//! Governance state - operator identity, pause flag, gated setters

use crate::config::ModelParams;
use crate::error::GovernanceError;
use credo_core::AccountId;
use serde::{Deserialize, Serialize};

/// Process-wide governance record.
///
/// Created once at initialization with the operator identity and the
/// launch [`ModelParams`]; every field mutation afterwards is gated on
/// the caller being that operator. Setters are pure overwrites with no
/// range validation (tuning flexibility is deliberate).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Governance {
    operator: AccountId,
    params: ModelParams,
    paused: bool,
}

impl Governance {
    /// Create governance state with default parameters
    pub fn new(operator: AccountId) -> Self {
        Self::with_params(operator, ModelParams::default())
    }

    /// Create governance state with explicit parameters
    pub fn with_params(operator: AccountId, params: ModelParams) -> Self {
        Self {
            operator,
            params,
            paused: false,
        }
    }

    pub fn operator(&self) -> &AccountId {
        &self.operator
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Circuit-breaker check: true unless paused, with an operator bypass
    /// so the operator can still act on a paused system.
    pub fn is_operational(&self, caller: &AccountId) -> bool {
        !self.paused || caller == &self.operator
    }

    /// Fail with `Paused` unless [`is_operational`](Self::is_operational).
    /// Every state-mutating operation calls this first.
    pub fn ensure_operational(&self, caller: &AccountId) -> Result<(), GovernanceError> {
        if self.is_operational(caller) {
            Ok(())
        } else {
            Err(GovernanceError::Paused)
        }
    }

    /// Fail with `Unauthorized` unless the caller is the operator.
    pub fn ensure_operator(&self, caller: &AccountId) -> Result<(), GovernanceError> {
        if caller == &self.operator {
            Ok(())
        } else {
            Err(GovernanceError::Unauthorized(caller.clone()))
        }
    }

    /// Flip the circuit breaker. Operator only.
    pub fn set_paused(&mut self, caller: &AccountId, paused: bool) -> Result<(), GovernanceError> {
        self.ensure_operator(caller)?;
        self.paused = paused;
        tracing::info!(paused, "governance pause flag updated");
        Ok(())
    }

    /// Overwrite the scoring weights and qualification threshold. Operator only.
    pub fn set_model_weights(
        &mut self,
        caller: &AccountId,
        weight_collateral: u64,
        weight_history: u64,
        weight_repayment: u64,
        risk_threshold: u64,
    ) -> Result<(), GovernanceError> {
        self.ensure_operator(caller)?;
        self.params.weight_collateral = weight_collateral;
        self.params.weight_history = weight_history;
        self.params.weight_repayment = weight_repayment;
        self.params.risk_threshold = risk_threshold;
        tracing::info!(
            weight_collateral,
            weight_history,
            weight_repayment,
            risk_threshold,
            "model weights updated"
        );
        Ok(())
    }

    /// Overwrite the market risk factor. Operator only.
    pub fn update_market_risk(
        &mut self,
        caller: &AccountId,
        factor: u64,
    ) -> Result<(), GovernanceError> {
        self.ensure_operator(caller)?;
        self.params.market_risk_factor = factor;
        tracing::info!(factor, "market risk factor updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> AccountId {
        AccountId::new("OPERATOR")
    }

    #[test]
    fn test_setters_require_operator() {
        let mut gov = Governance::new(operator());
        let mallory = AccountId::new("MALLORY");

        assert_eq!(
            gov.set_paused(&mallory, true),
            Err(GovernanceError::Unauthorized(mallory.clone()))
        );
        assert_eq!(
            gov.set_model_weights(&mallory, 1, 1, 1, 1),
            Err(GovernanceError::Unauthorized(mallory.clone()))
        );
        assert_eq!(
            gov.update_market_risk(&mallory, 99),
            Err(GovernanceError::Unauthorized(mallory))
        );

        // Nothing changed
        assert!(!gov.is_paused());
        assert_eq!(gov.params(), &ModelParams::default());
    }

    #[test]
    fn test_operator_bypasses_pause() {
        let mut gov = Governance::new(operator());
        gov.set_paused(&operator(), true).unwrap();

        let alice = AccountId::new("ALICE");
        assert!(!gov.is_operational(&alice));
        assert_eq!(gov.ensure_operational(&alice), Err(GovernanceError::Paused));

        // Operator stays operational while paused
        assert!(gov.is_operational(&operator()));
        assert!(gov.ensure_operational(&operator()).is_ok());
    }

    #[test]
    fn test_weight_overwrite_is_unvalidated() {
        let mut gov = Governance::new(operator());

        // Weights do not need to sum to 100 and zero is allowed.
        gov.set_model_weights(&operator(), 0, 0, 1000, 0).unwrap();

        assert_eq!(gov.params().weight_collateral, 0);
        assert_eq!(gov.params().weight_repayment, 1000);
        assert_eq!(gov.params().risk_threshold, 0);
    }

    #[test]
    fn test_resume_after_pause() {
        let mut gov = Governance::new(operator());
        let alice = AccountId::new("ALICE");

        gov.set_paused(&operator(), true).unwrap();
        assert!(!gov.is_operational(&alice));

        gov.set_paused(&operator(), false).unwrap();
        assert!(gov.is_operational(&alice));
    }
}
