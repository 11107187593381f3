//! Schema alignment: reindex an expanded record onto the training layout.

use super::{FeatureSchema, FeatureVector, RawProfile};

/// Convert a raw profile into the exact vector the classifier expects.
///
/// Schema columns the expansion did not produce are filled with 0 (the
/// record's categorical value lives in a sibling indicator column, or the
/// category never occurred in training). Expanded columns the schema does
/// not list are dropped silently. The output always has exactly the
/// schema's columns in the schema's order.
pub fn prepare_input(profile: &RawProfile, schema: &FeatureSchema) -> FeatureVector {
    let expanded = profile.expand();
    let values = schema
        .columns()
        .iter()
        .map(|col| expanded.get(col.as_str()).copied().unwrap_or(0.0))
        .collect();
    FeatureVector::new(values)
}
