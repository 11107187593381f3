//! Scores an aligned vector through the model and maps the churn
//! probability to a tier via configurable thresholds.

use crate::artifacts::Artifacts;
use crate::config::RiskConfig;
use crate::error::PredictionError;
use crate::features::{prepare_input, FeatureVector, RawProfile};
use crate::model::LogisticModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Half-open threshold ladder, highest first.
    pub fn from_probability(probability: f32, config: &RiskConfig) -> Self {
        if probability >= config.high_threshold {
            RiskLevel::High
        } else if probability >= config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Retention action suggested for this tier.
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskLevel::High => "proactive outreach, personalized offers",
            RiskLevel::Medium => "loyalty incentives, usage nudges",
            RiskLevel::Low => "maintain service quality",
        }
    }
}

/// Assessment for a single customer profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub probability: f32,
    pub level: RiskLevel,
    pub recommendation: String,
}

pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Pure function of (vector, model): identical inputs always yield the
    /// identical assessment. Failures are scoped to this one request.
    pub fn assess(
        &self,
        vector: &FeatureVector,
        model: &LogisticModel,
    ) -> Result<RiskAssessment, PredictionError> {
        let probability = model.predict_proba(vector)?;
        let level = RiskLevel::from_probability(probability, &self.config);
        Ok(RiskAssessment {
            probability,
            level,
            recommendation: level.recommendation().to_string(),
        })
    }

    /// The inference entry point callers use: align the profile onto the
    /// loaded schema, then score it.
    pub fn assess_profile(
        &self,
        profile: &RawProfile,
        artifacts: &Artifacts,
    ) -> Result<RiskAssessment, PredictionError> {
        let vector = prepare_input(profile, &artifacts.schema);
        self.assess(&vector, &artifacts.model)
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}
