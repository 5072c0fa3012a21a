//! Registry errors

use credo_core::AccountId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no profile registered for account {0}")]
    UnknownBorrower(AccountId),

    #[error("collateral for {account} would overflow: {current} + {added}")]
    ArithmeticOverflow {
        account: AccountId,
        current: u64,
        added: u64,
    },
}
