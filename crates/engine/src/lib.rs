//! Credo Engine - Assessment orchestrator
//!
//! The top-level use case: read the borrower profile, run the scoring
//! model, apply the market adjustment and tiering, and decide whether to
//! issue a loan. Repayment and liquidation transitions live here too,
//! because they are the only other writers of the profile↔loan link.
//!
//! ## Execution model
//!
//! One [`CreditEngine`] value owns all mutable state (governance,
//! registry, loan ledger). Every public operation takes `&mut self`,
//! validates its preconditions up front, and only then mutates - so each
//! call is atomic and the caller's sequencing (one call at a time) is the
//! only concurrency discipline needed.

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::CreditEngine;
pub use error::EngineError;
pub use outcome::{Assessment, Preview};
