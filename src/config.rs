//! Deployment configuration: artifact locations and risk thresholds.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChurnConfig {
    /// Path to the serialized trained classifier
    pub model_path: PathBuf,
    /// Path to the serialized ordered feature-column list
    pub features_path: PathBuf,
    /// Risk tier thresholds
    pub risk: RiskConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Probability at or above this is high risk (0.0–1.0)
    pub high_threshold: f32,
    /// Probability at or above this is medium risk
    pub medium_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for ChurnConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/churn_model.json"),
            features_path: PathBuf::from("models/feature_columns.json"),
            risk: RiskConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_threshold: 0.6,
            medium_threshold: 0.3,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl ChurnConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<ChurnConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
