//! Customer profile input and its one-hot expansion.
//!
//! Categorical fields carry raw strings rather than closed enums: a value
//! outside the known category list must flow through scoring as all-zero
//! indicators, not fail deserialization.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A categorical field with its category list fixed at schema-build time.
/// Expansion iterates this list, so the produced indicator columns never
/// depend on what happens to appear in a given record.
pub struct CategoricalField {
    pub name: &'static str,
    pub categories: &'static [&'static str],
}

pub const CONTRACT: CategoricalField = CategoricalField {
    name: "Contract",
    categories: &["Month-to-month", "One year", "Two year"],
};

pub const INTERNET_SERVICE: CategoricalField = CategoricalField {
    name: "InternetService",
    categories: &["DSL", "Fiber optic", "No"],
};

impl CategoricalField {
    /// Indicator column name for one category: `"Contract_One year"`.
    pub fn indicator_column(&self, category: &str) -> String {
        format!("{}_{}", self.name, category)
    }

    /// Emit one 0/1 indicator per known category. An unrecognized `value`
    /// leaves every indicator at 0.
    fn expand_into(&self, value: &str, out: &mut HashMap<String, f32>) {
        let mut matched = false;
        for cat in self.categories {
            let hit = *cat == value;
            matched |= hit;
            out.insert(self.indicator_column(cat), if hit { 1.0 } else { 0.0 });
        }
        if !matched {
            tracing::debug!(field = self.name, value, "unknown category, indicators zeroed");
        }
    }
}

/// Attributes for one customer, named as the training data names them.
/// Created per inference request and discarded after use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProfile {
    /// Months of tenure
    pub tenure: u32,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: f32,
    #[serde(rename = "TotalCharges")]
    pub total_charges: f32,
    #[serde(rename = "Contract")]
    pub contract: String,
    #[serde(rename = "InternetService")]
    pub internet_service: String,
}

impl RawProfile {
    /// One-hot expansion: numerics pass through under their column names,
    /// categoricals become indicator columns.
    pub(crate) fn expand(&self) -> HashMap<String, f32> {
        let mut out = HashMap::new();
        out.insert("tenure".to_string(), self.tenure as f32);
        out.insert("MonthlyCharges".to_string(), self.monthly_charges);
        out.insert("TotalCharges".to_string(), self.total_charges);
        CONTRACT.expand_into(&self.contract, &mut out);
        INTERNET_SERVICE.expand_into(&self.internet_service, &mut out);
        out
    }
}
