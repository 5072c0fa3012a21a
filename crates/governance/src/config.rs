//! Model parameters with configurable defaults
//!
//! All tunables are configurable via file/env, not hardcoded.
//! Values are deliberately unvalidated: weights are relative and are NOT
//! required to sum to 100, so the operator can re-balance the model
//! without a redeploy.

use serde::{Deserialize, Serialize};

/// Market risk factor at which no adjustment is applied.
/// Values above the baseline tighten the adjusted score.
pub const MARKET_RISK_BASELINE: u64 = 10;

/// Tunable parameters of the credit model.
///
/// All fields can be overridden via a JSON config file; defaults are the
/// launch calibration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelParams {
    /// Weight of the collateral score in the weighted sum
    #[serde(default = "default_weight_collateral")]
    pub weight_collateral: u64,

    /// Weight of the history score in the weighted sum
    #[serde(default = "default_weight_history")]
    pub weight_history: u64,

    /// Weight of the repayment score in the weighted sum
    #[serde(default = "default_weight_repayment")]
    pub weight_repayment: u64,

    /// Minimum raw score to qualify for a loan
    #[serde(default = "default_risk_threshold")]
    pub risk_threshold: u64,

    /// Scaled safety margin; above [`MARKET_RISK_BASELINE`] the adjusted
    /// score is tightened by 10 points
    #[serde(default = "default_market_risk_factor")]
    pub market_risk_factor: u64,
}

// Default value functions for serde
fn default_weight_collateral() -> u64 {
    30
}

fn default_weight_history() -> u64 {
    40
}

fn default_weight_repayment() -> u64 {
    30
}

fn default_risk_threshold() -> u64 {
    50
}

fn default_market_risk_factor() -> u64 {
    MARKET_RISK_BASELINE
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            weight_collateral: default_weight_collateral(),
            weight_history: default_weight_history(),
            weight_repayment: default_weight_repayment(),
            risk_threshold: default_risk_threshold(),
            market_risk_factor: default_market_risk_factor(),
        }
    }
}

impl ModelParams {
    /// Load parameters from a JSON file
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Whether the current market risk factor tightens the adjusted score
    pub fn market_tightened(&self) -> bool {
        self.market_risk_factor > MARKET_RISK_BASELINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = ModelParams::default();

        assert_eq!(params.weight_collateral, 30);
        assert_eq!(params.weight_history, 40);
        assert_eq!(params.weight_repayment, 30);
        assert_eq!(params.risk_threshold, 50);
        assert_eq!(params.market_risk_factor, MARKET_RISK_BASELINE);
        assert!(!params.market_tightened());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "risk_threshold": 70 }"#;
        let params: ModelParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.risk_threshold, 70);
        assert_eq!(params.weight_history, 40); // default
    }

    #[test]
    fn test_weights_need_not_sum_to_100() {
        // Relative weights are unconstrained by design.
        let json = r#"{ "weight_collateral": 500, "weight_history": 1, "weight_repayment": 0 }"#;
        let params: ModelParams = serde_json::from_str(json).unwrap();

        assert_eq!(params.weight_collateral, 500);
        assert_eq!(params.weight_repayment, 0);
    }

    #[test]
    fn test_market_tightened_boundary() {
        let mut params = ModelParams::default();
        params.market_risk_factor = 10;
        assert!(!params.market_tightened());

        params.market_risk_factor = 11;
        assert!(params.market_tightened());
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("params.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "market_risk_factor": 15 }}"#).unwrap();

        let params = ModelParams::from_file(&path).unwrap();
        assert_eq!(params.market_risk_factor, 15);
        assert!(params.market_tightened());
    }
}
