//! In-memory borrower registry

use crate::error::RegistryError;
use crate::profile::{BorrowerProfile, LIQUIDATION_HISTORY_PENALTY};
use credo_core::{AccountId, LoanId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Map of account → borrower profile with targeted mutators.
///
/// Every mutator except [`register`](Self::register) requires the profile
/// to exist and fails with [`RegistryError::UnknownBorrower`] otherwise.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BorrowerRegistry {
    profiles: HashMap<AccountId, BorrowerProfile>,
}

impl BorrowerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or overwrite) the profile for an account.
    ///
    /// Re-registration resets history and counters. That is documented
    /// behavior, not blocked: a returning borrower starts over.
    pub fn register(&mut self, account: AccountId, initial_collateral: u64) {
        let replaced = self
            .profiles
            .insert(account.clone(), BorrowerProfile::new(initial_collateral))
            .is_some();
        tracing::info!(%account, initial_collateral, replaced, "borrower registered");
    }

    pub fn get(&self, account: &AccountId) -> Option<&BorrowerProfile> {
        self.profiles.get(account)
    }

    /// Fetch a profile or fail with `UnknownBorrower`.
    pub fn require(&self, account: &AccountId) -> Result<&BorrowerProfile, RegistryError> {
        self.profiles
            .get(account)
            .ok_or_else(|| RegistryError::UnknownBorrower(account.clone()))
    }

    fn require_mut(&mut self, account: &AccountId) -> Result<&mut BorrowerProfile, RegistryError> {
        self.profiles
            .get_mut(account)
            .ok_or_else(|| RegistryError::UnknownBorrower(account.clone()))
    }

    /// Top up collateral. Overflow is rejected, never wrapped.
    ///
    /// Returns the new collateral total.
    pub fn add_collateral(
        &mut self,
        account: &AccountId,
        amount: u64,
    ) -> Result<u64, RegistryError> {
        let profile = self.require_mut(account)?;
        let updated = profile.collateral.checked_add(amount).ok_or_else(|| {
            RegistryError::ArithmeticOverflow {
                account: account.clone(),
                current: profile.collateral,
                added: amount,
            }
        })?;
        profile.collateral = updated;
        tracing::debug!(%account, amount, total = updated, "collateral added");
        Ok(updated)
    }

    /// Point the profile at its newly issued loan.
    pub fn link_loan(&mut self, account: &AccountId, loan_id: LoanId) -> Result<(), RegistryError> {
        self.require_mut(account)?.active_loan = Some(loan_id);
        Ok(())
    }

    /// Drop the active-loan link after a terminal transition.
    pub fn clear_loan(&mut self, account: &AccountId) -> Result<(), RegistryError> {
        self.require_mut(account)?.active_loan = None;
        Ok(())
    }

    /// Count a successful repayment.
    pub fn record_repayment(&mut self, account: &AccountId) -> Result<(), RegistryError> {
        let profile = self.require_mut(account)?;
        profile.repayment_count = profile.repayment_count.saturating_add(1);
        Ok(())
    }

    /// Count a liquidation: one more default, 20 history points gone
    /// (floored at 0).
    pub fn record_default(&mut self, account: &AccountId) -> Result<(), RegistryError> {
        let profile = self.require_mut(account)?;
        profile.default_count = profile.default_count.saturating_add(1);
        profile.history_score = profile.history_score.saturating_sub(LIQUIDATION_HISTORY_PENALTY);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::INITIAL_HISTORY_SCORE;

    fn alice() -> AccountId {
        AccountId::new("ALICE")
    }

    #[test]
    fn test_register_then_read_round_trip() {
        let mut registry = BorrowerRegistry::new();
        registry.register(alice(), 1_000);

        let profile = registry.get(&alice()).unwrap();
        assert_eq!(profile.collateral, 1_000);
        assert_eq!(profile.history_score, INITIAL_HISTORY_SCORE);
        assert_eq!(profile.repayment_count, 0);
        assert_eq!(profile.default_count, 0);
        assert_eq!(profile.active_loan, None);
    }

    #[test]
    fn test_reregistration_resets_history() {
        let mut registry = BorrowerRegistry::new();
        registry.register(alice(), 1_000);
        registry.record_repayment(&alice()).unwrap();
        registry.record_default(&alice()).unwrap();

        registry.register(alice(), 50);

        let profile = registry.get(&alice()).unwrap();
        assert_eq!(profile.collateral, 50);
        assert_eq!(profile.history_score, INITIAL_HISTORY_SCORE);
        assert_eq!(profile.repayment_count, 0);
        assert_eq!(profile.default_count, 0);
    }

    #[test]
    fn test_mutators_require_profile() {
        let mut registry = BorrowerRegistry::new();
        let missing = AccountId::new("NOBODY");

        assert!(matches!(
            registry.add_collateral(&missing, 1),
            Err(RegistryError::UnknownBorrower(_))
        ));
        assert!(matches!(
            registry.link_loan(&missing, LoanId::FIRST),
            Err(RegistryError::UnknownBorrower(_))
        ));
        assert!(matches!(
            registry.record_repayment(&missing),
            Err(RegistryError::UnknownBorrower(_))
        ));
    }

    #[test]
    fn test_add_collateral_rejects_overflow() {
        let mut registry = BorrowerRegistry::new();
        registry.register(alice(), u64::MAX - 10);

        let result = registry.add_collateral(&alice(), 11);
        assert!(matches!(
            result,
            Err(RegistryError::ArithmeticOverflow { .. })
        ));

        // Value untouched after the rejected top-up
        assert_eq!(registry.get(&alice()).unwrap().collateral, u64::MAX - 10);

        assert_eq!(registry.add_collateral(&alice(), 10), Ok(u64::MAX));
    }

    #[test]
    fn test_record_default_floors_history_at_zero() {
        let mut registry = BorrowerRegistry::new();
        registry.register(alice(), 0);

        // 50 -> 30 -> 10 -> 0 -> 0
        for _ in 0..4 {
            registry.record_default(&alice()).unwrap();
        }

        let profile = registry.get(&alice()).unwrap();
        assert_eq!(profile.history_score, 0);
        assert_eq!(profile.default_count, 4);
    }

    #[test]
    fn test_loan_link_lifecycle() {
        let mut registry = BorrowerRegistry::new();
        registry.register(alice(), 100);

        registry.link_loan(&alice(), LoanId::new(7)).unwrap();
        assert_eq!(registry.get(&alice()).unwrap().active_loan, Some(LoanId::new(7)));

        registry.clear_loan(&alice()).unwrap();
        assert_eq!(registry.get(&alice()).unwrap().active_loan, None);
    }
}
