//! Credo Scoring Engine - Pure credit-risk model
//!
//! Everything in this crate is a pure function of its inputs: same factors
//! and parameters in, same score out, no state, no failure modes. All
//! divisions are integer floor divisions; that truncation is part of the
//! model, not an accident.

pub mod model;
pub mod tiers;

pub use model::{apply_market_adjustment, score, CreditFactors};
pub use tiers::{duration_for, interest_rate_for, max_loan};
