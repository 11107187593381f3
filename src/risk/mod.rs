//! Probability → risk tier mapping with recommended retention actions.

mod engine;

pub use engine::{RiskAssessment, RiskEngine, RiskLevel};
