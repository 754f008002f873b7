//! Patient-specific insight sentences.
//!
//! An ordered table of predicate → sentence rules evaluated top to bottom;
//! every matching rule appends its sentence. When fewer than two rules
//! match, a fixed fallback pair keeps the result at two sentences minimum.

use oncorex_common::{CancerType, PatientAttributes, TreatmentRecord, TreatmentResponse};

struct InsightRule {
    applies: fn(&PatientAttributes) -> bool,
    text: &'static str,
}

fn has_brca(p: &PatientAttributes) -> bool {
    p.has_mutation("BRCA1") || p.has_mutation("BRCA2")
}

fn has_prior_treatment(p: &PatientAttributes) -> bool {
    !p.previous_treatments.is_empty() && p.treatment_response.is_some()
}

const INSIGHT_RULES: [InsightRule; 13] = [
    InsightRule {
        applies: |p| p.cancer_type == CancerType::Breast,
        text: "Hormone receptor status is a key factor in treatment selection for breast cancer.",
    },
    InsightRule {
        applies: |p| p.cancer_type == CancerType::Breast && has_brca(p),
        text: "BRCA mutations indicate potential benefit from PARP inhibitors and platinum-based chemotherapy.",
    },
    InsightRule {
        applies: |p| p.cancer_type == CancerType::Breast && p.has_mutation("HER2/neu"),
        text: "HER2-positive status suggests strong benefit from HER2-targeted therapies like Trastuzumab.",
    },
    InsightRule {
        applies: |p| p.cancer_type == CancerType::Lung && p.has_mutation("EGFR"),
        text: "EGFR mutation positive tumors typically respond well to EGFR tyrosine kinase inhibitors like Osimertinib.",
    },
    InsightRule {
        applies: |p| p.cancer_type == CancerType::Lung && p.has_mutation("ALK"),
        text: "ALK rearrangements indicate potential significant benefit from ALK inhibitors like Crizotinib or Alectinib.",
    },
    InsightRule {
        applies: |p| {
            p.cancer_type == CancerType::Lung
                && !p.has_mutation("EGFR")
                && !p.has_mutation("ALK")
        },
        text: "Without actionable mutations, immunotherapy or chemotherapy may be appropriate first-line options.",
    },
    InsightRule {
        applies: |p| p.cancer_type == CancerType::Colorectal && p.has_mutation("KRAS"),
        text: "KRAS mutations typically indicate resistance to EGFR inhibitors like Cetuximab.",
    },
    InsightRule {
        applies: |p| p.cancer_type == CancerType::Colorectal && !p.has_mutation("KRAS"),
        text: "KRAS wild-type status suggests potential benefit from EGFR inhibitors.",
    },
    InsightRule {
        applies: |p| p.cancer_type == CancerType::Melanoma && p.has_mutation("BRAF"),
        text: "BRAF V600 mutations indicate potential benefit from targeted therapy with BRAF/MEK inhibitor combinations.",
    },
    InsightRule {
        applies: |p| p.cancer_type == CancerType::Melanoma && !p.has_mutation("BRAF"),
        text: "BRAF wild-type melanoma typically responds better to immunotherapy than targeted therapy.",
    },
    InsightRule {
        applies: |p| p.has_mutation("TP53"),
        text: "TP53 mutations may indicate more aggressive disease and potential resistance to certain therapies.",
    },
    InsightRule {
        applies: |p| {
            has_prior_treatment(p)
                && p.treatment_response == Some(TreatmentResponse::Progressive)
        },
        text: "Disease progression on previous therapy suggests need for alternative treatment approach.",
    },
    InsightRule {
        applies: |p| {
            has_prior_treatment(p)
                && matches!(
                    p.treatment_response,
                    Some(TreatmentResponse::Complete) | Some(TreatmentResponse::Partial)
                )
        },
        text: "Previous positive response may indicate benefit from similar treatment mechanisms.",
    },
];

const FALLBACK_INSIGHTS: [&str; 2] = [
    "Molecular profiling can identify additional therapeutic targets beyond standard of care.",
    "Consider clinical trials that match this molecular profile for additional treatment options.",
];

/// Produce insight sentences for a patient, in rule-declaration order.
/// Always returns at least two sentences. The ranked treatments are part of
/// the call contract but no current rule reads them.
pub fn generate_insights(
    patient: &PatientAttributes,
    _treatments: &[TreatmentRecord],
) -> Vec<String> {
    let mut insights: Vec<String> = INSIGHT_RULES
        .iter()
        .filter(|rule| (rule.applies)(patient))
        .map(|rule| rule.text.to_string())
        .collect();

    if insights.len() < 2 {
        insights.extend(FALLBACK_INSIGHTS.iter().map(|s| s.to_string()));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn patient(cancer: &str, mutations: &[&str]) -> PatientAttributes {
        PatientAttributes {
            patient_id: "PT-1".to_string(),
            age: None,
            gender: None,
            cancer_type: CancerType::from_key(cancer),
            cancer_stage: None,
            mutations: mutations.iter().map(|m| m.to_string()).collect::<BTreeSet<_>>(),
            other_mutations: String::new(),
            expression_levels: Default::default(),
            previous_treatments: String::new(),
            treatment_response: None,
        }
    }

    #[test]
    fn test_colorectal_wild_type_gets_benefit_sentence_only() {
        let insights = generate_insights(&patient("colorectal-cancer", &[]), &[]);
        assert!(insights
            .iter()
            .any(|s| s.contains("KRAS wild-type status suggests potential benefit")));
        assert!(!insights.iter().any(|s| s.contains("resistance to EGFR inhibitors")));
    }

    #[test]
    fn test_colorectal_kras_gets_resistance_sentence_only() {
        let insights = generate_insights(&patient("colorectal-cancer", &["KRAS"]), &[]);
        assert!(insights
            .iter()
            .any(|s| s.contains("resistance to EGFR inhibitors like Cetuximab")));
        assert!(!insights.iter().any(|s| s.contains("wild-type status")));
    }

    #[test]
    fn test_no_matches_yields_exactly_the_fallback_pair() {
        let insights = generate_insights(&patient("leukemia", &[]), &[]);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0], FALLBACK_INSIGHTS[0]);
        assert_eq!(insights[1], FALLBACK_INSIGHTS[1]);
    }

    #[test]
    fn test_single_match_still_gains_fallback_pair() {
        let insights = generate_insights(&patient("leukemia", &["TP53"]), &[]);
        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("TP53 mutations"));
        assert_eq!(insights[1], FALLBACK_INSIGHTS[0]);
    }

    #[test]
    fn test_breast_brca_her2_sentences_in_rule_order() {
        let insights =
            generate_insights(&patient("breast-cancer", &["BRCA2", "HER2/neu"]), &[]);
        assert_eq!(insights.len(), 3);
        assert!(insights[0].contains("Hormone receptor status"));
        assert!(insights[1].contains("BRCA mutations"));
        assert!(insights[2].contains("HER2-positive status"));
    }

    #[test]
    fn test_lung_without_actionable_mutations() {
        let insights = generate_insights(&patient("lung-cancer", &["KRAS"]), &[]);
        assert!(insights
            .iter()
            .any(|s| s.contains("Without actionable mutations")));
        // EGFR suppresses the no-actionable-mutation sentence.
        let insights = generate_insights(&patient("lung-cancer", &["EGFR"]), &[]);
        assert!(insights
            .iter()
            .any(|s| s.contains("EGFR tyrosine kinase inhibitors")));
        assert!(!insights
            .iter()
            .any(|s| s.contains("Without actionable mutations")));
    }

    #[test]
    fn test_melanoma_braf_branches() {
        let braf = generate_insights(&patient("melanoma", &["BRAF"]), &[]);
        assert!(braf.iter().any(|s| s.contains("BRAF V600 mutations")));
        let wild = generate_insights(&patient("melanoma", &[]), &[]);
        assert!(wild.iter().any(|s| s.contains("BRAF wild-type melanoma")));
    }

    #[test]
    fn test_prior_treatment_response_sentences() {
        let mut progressive = patient("prostate-cancer", &[]);
        progressive.previous_treatments = "docetaxel".to_string();
        progressive.treatment_response = Some(TreatmentResponse::Progressive);
        let insights = generate_insights(&progressive, &[]);
        assert!(insights
            .iter()
            .any(|s| s.contains("alternative treatment approach")));

        let mut partial = progressive.clone();
        partial.treatment_response = Some(TreatmentResponse::Partial);
        let insights = generate_insights(&partial, &[]);
        assert!(insights
            .iter()
            .any(|s| s.contains("similar treatment mechanisms")));

        // A recorded response without any named prior treatment matches nothing.
        let mut response_only = patient("prostate-cancer", &[]);
        response_only.treatment_response = Some(TreatmentResponse::Progressive);
        let insights = generate_insights(&response_only, &[]);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0], FALLBACK_INSIGHTS[0]);
    }

    #[test]
    fn test_stable_response_matches_neither_prior_rule() {
        let mut stable = patient("lung-cancer", &["EGFR"]);
        stable.previous_treatments = "carboplatin".to_string();
        stable.treatment_response = Some(TreatmentResponse::Stable);
        let insights = generate_insights(&stable, &[]);
        assert!(!insights.iter().any(|s| s.contains("alternative treatment")));
        assert!(!insights.iter().any(|s| s.contains("similar treatment mechanisms")));
    }
}
