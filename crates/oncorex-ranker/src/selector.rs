//! Treatment selection and ranking.
//!
//! Resolves the base list for the patient's cancer type, applies the
//! mutation-conditioned efficacy adjustments in rule order, then stable-sorts
//! descending by efficacy score. Total over any input; never fails.

use std::cmp::Ordering;

use oncorex_common::{CancerType, PatientAttributes, TreatmentRecord};

use crate::catalog;

/// "If mutation M is present and the cancer type matches, shift the named
/// treatment's efficacy by delta." Each rule targets a distinct record, so
/// rule order does not change the outcome.
struct EfficacyRule {
    mutation: &'static str,
    cancer: CancerType,
    treatment: &'static str,
    delta: f64,
}

const EFFICACY_RULES: [EfficacyRule; 3] = [
    EfficacyRule {
        mutation: "EGFR",
        cancer: CancerType::Lung,
        treatment: "Osimertinib",
        delta: 0.10,
    },
    EfficacyRule {
        mutation: "HER2/neu",
        cancer: CancerType::Breast,
        treatment: "Trastuzumab (Herceptin)",
        delta: 0.15,
    },
    EfficacyRule {
        mutation: "ALK",
        cancer: CancerType::Lung,
        treatment: "Crizotinib",
        delta: 0.12,
    },
];

/// Rank candidate treatments for a patient.
///
/// Returns the full list sorted by descending efficacy score (stable: ties
/// keep their pre-sort order). Always at least 3 records; callers truncate
/// to their own display count.
pub fn select_treatments(patient: &PatientAttributes) -> Vec<TreatmentRecord> {
    let mut ranked = catalog::base_for(&patient.cancer_type);

    for rule in &EFFICACY_RULES {
        if patient.cancer_type == rule.cancer && patient.has_mutation(rule.mutation) {
            for slot in ranked.iter_mut() {
                if slot.name == rule.treatment {
                    *slot = slot.with_efficacy_delta(rule.delta);
                }
            }
        }
    }

    // Additive rule: BRCA carriers get a PARP inhibitor candidate appended
    // whatever the cancer type.
    if patient.has_mutation("BRCA1") || patient.has_mutation("BRCA2") {
        ranked.push(catalog::parp_inhibitor());
    }

    ranked.sort_by(|a, b| {
        b.efficacy_score
            .partial_cmp(&a.efficacy_score)
            .unwrap_or(Ordering::Equal)
    });

    tracing::debug!(
        cancer = patient.cancer_type.as_key(),
        candidates = ranked.len(),
        "ranked treatment candidates"
    );

    ranked
}
