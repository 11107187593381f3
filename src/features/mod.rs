//! Raw profile attributes → schema-aligned numeric feature vector.

mod align;
mod profile;

pub use align::prepare_input;
pub use profile::{CategoricalField, RawProfile, CONTRACT, INTERNET_SERVICE};

use serde::{Deserialize, Serialize};

/// Ordered feature-column layout the classifier was trained on. Loaded once
/// from an artifact file (a bare JSON array of column names) and shared
/// read-only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    pub fn from_columns(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Numeric row aligned to a [`FeatureSchema`]: same length, same column
/// order. Only [`prepare_input`] constructs one, so alignment holds by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    pub(crate) fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
