//! Application context - wires everything together
//!
//! The engine itself is storage-agnostic; this context gives it a home
//! on disk (a single JSON snapshot) and owns the ledger height, standing
//! in for the external monotonic counter.

use chrono::{DateTime, Utc};
use credo_core::{AccountId, Height};
use credo_engine::CreditEngine;
use credo_governance::ModelParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SNAPSHOT_FILE: &str = "snapshot.json";

/// On-disk image of the full system state.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    saved_at: DateTime<Utc>,
    height: Height,
    engine: CreditEngine,
}

/// Application context - engine + height counter + snapshot location.
pub struct AppContext {
    pub engine: CreditEngine,
    height: Height,
    snapshot_path: PathBuf,
}

impl AppContext {
    /// Initialize a fresh system in `data_path`. Fails if one exists.
    pub fn init(
        data_path: impl AsRef<Path>,
        operator: AccountId,
        params: ModelParams,
    ) -> anyhow::Result<Self> {
        let snapshot_path = Self::snapshot_path(data_path.as_ref())?;
        if snapshot_path.exists() {
            anyhow::bail!("system already initialized at {}", snapshot_path.display());
        }

        let ctx = Self {
            engine: CreditEngine::with_params(operator, params),
            height: Height::ZERO,
            snapshot_path,
        };
        ctx.save()?;
        Ok(ctx)
    }

    /// Open an initialized system from its snapshot.
    pub fn open(data_path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let snapshot_path = Self::snapshot_path(data_path.as_ref())?;
        let content = std::fs::read_to_string(&snapshot_path).map_err(|e| {
            anyhow::anyhow!(
                "system not initialized at {} ({e}); run `credo init` first",
                snapshot_path.display()
            )
        })?;
        let snapshot: Snapshot = serde_json::from_str(&content)?;

        Ok(Self {
            engine: snapshot.engine,
            height: snapshot.height,
            snapshot_path,
        })
    }

    fn snapshot_path(data_path: &Path) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(data_path)?;
        Ok(data_path.join(SNAPSHOT_FILE))
    }

    /// Persist the current state.
    pub fn save(&self) -> anyhow::Result<()> {
        let snapshot = Snapshot {
            saved_at: Utc::now(),
            height: self.height,
            engine: self.engine.clone(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(&self.snapshot_path, json)?;
        tracing::debug!(path = %self.snapshot_path.display(), "snapshot saved");
        Ok(())
    }

    pub fn height(&self) -> Height {
        self.height
    }

    /// Move the height counter forward. The counter is monotonic;
    /// rewinding is rejected.
    pub fn advance_height(&mut self, height: Height) -> anyhow::Result<()> {
        if height < self.height {
            anyhow::bail!(
                "height counter is monotonic: cannot rewind {} to {}",
                self.height,
                height
            );
        }
        self.height = height;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_open_round_trip() {
        let dir = TempDir::new().unwrap();
        let operator = AccountId::new("OPERATOR");

        {
            let mut ctx =
                AppContext::init(dir.path(), operator.clone(), ModelParams::default()).unwrap();
            ctx.engine.register(&AccountId::new("ALICE"), 1_000).unwrap();
            ctx.advance_height(Height::new(42)).unwrap();
            ctx.save().unwrap();
        }

        let ctx = AppContext::open(dir.path()).unwrap();
        assert_eq!(ctx.height(), Height::new(42));
        assert_eq!(ctx.engine.operator(), &operator);
        assert_eq!(
            ctx.engine
                .profile(&AccountId::new("ALICE"))
                .unwrap()
                .collateral,
            1_000
        );
    }

    #[test]
    fn test_double_init_rejected() {
        let dir = TempDir::new().unwrap();
        let operator = AccountId::new("OPERATOR");

        AppContext::init(dir.path(), operator.clone(), ModelParams::default()).unwrap();
        assert!(AppContext::init(dir.path(), operator, ModelParams::default()).is_err());
    }

    #[test]
    fn test_open_uninitialized_fails() {
        let dir = TempDir::new().unwrap();
        assert!(AppContext::open(dir.path()).is_err());
    }

    #[test]
    fn test_height_cannot_rewind() {
        let dir = TempDir::new().unwrap();
        let mut ctx = AppContext::init(
            dir.path(),
            AccountId::new("OPERATOR"),
            ModelParams::default(),
        )
        .unwrap();

        ctx.advance_height(Height::new(10)).unwrap();
        assert!(ctx.advance_height(Height::new(9)).is_err());
        assert!(ctx.advance_height(Height::new(10)).is_ok()); // same is fine
        assert_eq!(ctx.height(), Height::new(10));
    }
}
