//! Treatment record value type produced by the selector.

use serde::{Deserialize, Serialize};

/// One candidate treatment with its model scores. Value type: adjustments
/// construct a new record, base catalog entries are never written through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecord {
    pub name: String,
    /// Predicted efficacy in [0, 1].
    pub efficacy_score: f64,
    /// Model confidence in [0, 1].
    pub confidence_score: f64,
    pub description: String,
    pub mechanism_of_action: String,
    pub side_effects: Vec<String>,
}

impl TreatmentRecord {
    /// A copy of this record with the efficacy score shifted by `delta`,
    /// capped at 1.0. All other fields are carried over unchanged.
    pub fn with_efficacy_delta(&self, delta: f64) -> TreatmentRecord {
        TreatmentRecord {
            efficacy_score: (self.efficacy_score + delta).min(1.0),
            ..self.clone()
        }
    }
}
