//! Credo Governance - Model parameters and circuit breaker
//!
//! A single operator-gated record holds everything that tunes the credit
//! model at runtime: scoring weights, the qualification threshold, the
//! market risk margin, and the pause flag.
//!
//! ## Key Components
//!
//! - [`config::ModelParams`] - Configurable scoring parameters (not hardcoded)
//! - [`state::Governance`] - Operator identity, pause flag, setter gating
//! - [`error::GovernanceError`] - `Unauthorized` / `Paused`

pub mod config;
pub mod error;
pub mod state;

pub use config::{ModelParams, MARKET_RISK_BASELINE};
pub use error::GovernanceError;
pub use state::Governance;
