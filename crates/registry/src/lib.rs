//! Credo Borrower Registry - Per-account credit profiles
//!
//! In-memory map of account → profile. Profiles are created by
//! self-registration, mutated by collateral top-ups and by the
//! orchestrator's loan bookkeeping, and never deleted. Pause and
//! authorization checks live with the orchestrator; this crate is a pure
//! state container.

pub mod error;
pub mod profile;
pub mod registry;

pub use error::RegistryError;
pub use profile::{BorrowerProfile, INITIAL_HISTORY_SCORE, LIQUIDATION_HISTORY_PENALTY};
pub use registry::BorrowerRegistry;
