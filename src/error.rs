//! Error types, split by blast radius: artifact failures are fatal to
//! startup, prediction failures are scoped to one request.

use std::path::PathBuf;
use thiserror::Error;

/// Startup failures while loading the model or feature-schema artifact.
/// None of these are retried in-process; the operator fixes the artifacts
/// and the loader is re-invoked.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact missing or unreadable at {path}: {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact at {path} failed to deserialize: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Model and schema were produced by different training runs.
    #[error("model expects {model_dim} features but schema lists {schema_dim} columns")]
    SchemaMismatch { model_dim: usize, schema_dim: usize },
}

/// Per-request inference failure. The shared model/schema state is
/// unaffected; subsequent requests proceed normally.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("feature vector has {got} columns, model expects {expected}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("model produced a non-finite probability")]
    NonFiniteProbability,
}
