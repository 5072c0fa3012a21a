//! Credo Core - Domain types
//!
//! This crate contains the fundamental types used across Credo:
//! - `AccountId`: Opaque caller/borrower identity
//! - `Height`: Ledger-height timestamp from the external monotonic counter
//! - `LoanId`: Opaque, strictly increasing loan identifier

pub mod account;
pub mod units;

pub use account::AccountId;
pub use units::{Height, LoanId};
