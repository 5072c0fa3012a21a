//! Credo RPC - API/CLI orchestrator
//!
//! This crate provides the CLI binary and command orchestration. The
//! pieces the core treats as external services - the persistence surface
//! and the monotonic height counter - are realized here as a JSON
//! snapshot file and a persisted height that every command may advance.

pub mod commands;
pub mod context;

pub use context::AppContext;
