//! Fitted logistic classifier loaded from a JSON artifact. Input: a
//! schema-aligned f32 vector; output: churn (positive-class) probability.

use crate::error::PredictionError;
use crate::features::FeatureVector;
use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Weights and intercept of the offline-trained decision function, one
/// weight per feature-schema column. Never mutated in-process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f32>,
    pub intercept: f32,
}

impl LogisticModel {
    /// Number of features the model expects.
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Churn probability in [0, 1] for one aligned vector.
    pub fn predict_proba(&self, vector: &FeatureVector) -> Result<f32, PredictionError> {
        if vector.len() != self.weights.len() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.weights.len(),
                got: vector.len(),
            });
        }

        let w = ArrayView1::from(self.weights.as_slice());
        let x = ArrayView1::from(vector.as_slice());
        let logit = self.intercept + w.dot(&x);

        let proba = 1.0 / (1.0 + (-logit).exp());
        if !proba.is_finite() {
            return Err(PredictionError::NonFiniteProbability);
        }
        Ok(proba.clamp(0.0, 1.0))
    }
}
