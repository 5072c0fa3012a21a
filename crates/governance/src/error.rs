//! Governance errors

use credo_core::AccountId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("caller {0} is not the operator")]
    Unauthorized(AccountId),

    #[error("system is paused")]
    Paused,
}
