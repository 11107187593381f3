//! One-time loading of the trained model and its feature schema.
//!
//! [`Artifacts::load`] is the explicit, injectable form (tests point it at
//! fixture files); [`load_shared`] wraps it in process-wide memoization for
//! hosts that serve many requests. Both artifacts are read-only after load,
//! so no teardown exists.

use crate::config::ChurnConfig;
use crate::error::ArtifactError;
use crate::features::FeatureSchema;
use crate::model::LogisticModel;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// The loaded model/schema pair, safe for concurrent read-only use.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub model: LogisticModel,
    pub schema: FeatureSchema,
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let data = std::fs::read_to_string(path).map_err(|source| ArtifactError::Missing {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ArtifactError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

impl Artifacts {
    /// Read and deserialize both artifact files. Any failure here is fatal:
    /// the caller must not serve inference requests until the artifacts are
    /// fixed and the loader re-invoked.
    pub fn load(config: &ChurnConfig) -> Result<Self, ArtifactError> {
        let model: LogisticModel = read_artifact(&config.model_path)?;
        let schema: FeatureSchema = read_artifact(&config.features_path)?;

        if model.dim() != schema.len() {
            return Err(ArtifactError::SchemaMismatch {
                model_dim: model.dim(),
                schema_dim: schema.len(),
            });
        }

        info!(
            model = %config.model_path.display(),
            features = %config.features_path.display(),
            dim = schema.len(),
            "artifacts loaded"
        );
        Ok(Self { model, schema })
    }
}

static SHARED: Mutex<Option<Arc<Artifacts>>> = Mutex::new(None);

/// Memoized [`Artifacts::load`]: the first caller reads disk, every later
/// call returns the same in-memory instance. The mutex keeps concurrent
/// first-callers from deserializing redundantly; a failed load leaves the
/// slot empty so the loader can be re-invoked after the artifacts are fixed.
pub fn load_shared(config: &ChurnConfig) -> Result<Arc<Artifacts>, ArtifactError> {
    let mut slot = SHARED.lock().expect("artifact slot poisoned");
    if let Some(artifacts) = slot.as_ref() {
        return Ok(Arc::clone(artifacts));
    }
    let artifacts = Arc::new(Artifacts::load(config)?);
    *slot = Some(Arc::clone(&artifacts));
    Ok(artifacts)
}
