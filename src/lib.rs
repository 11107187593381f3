//! Churn risk inference core — pretrained-classifier scoring of customer profiles.
//!
//! Modular structure:
//! - [`artifacts`] — One-time load of the trained model and its feature schema
//! - [`features`] — Raw profile → one-hot expansion → schema-aligned vector
//! - [`model`] — Logistic classifier inference (churn probability)
//! - [`risk`] — Threshold-based risk tiers with recommended actions
//! - [`logging`] — Structured JSON logging
//!
//! Training happens offline; this crate only loads its outputs and serves
//! single-record inference.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod risk;

pub use artifacts::Artifacts;
pub use config::ChurnConfig;
pub use error::{ArtifactError, PredictionError};
pub use features::{prepare_input, FeatureSchema, FeatureVector, RawProfile};
pub use logging::StructuredLogger;
pub use model::LogisticModel;
pub use risk::{RiskAssessment, RiskEngine, RiskLevel};
