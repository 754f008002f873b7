//! Base treatment catalog.
//!
//! Static configuration data, frozen after first access. Accessors hand out
//! owned clones so adjustment logic can never write back into the catalog.

use lazy_static::lazy_static;
use oncorex_common::{CancerType, TreatmentRecord};

fn record(
    name: &str,
    efficacy_score: f64,
    confidence_score: f64,
    description: &str,
    mechanism_of_action: &str,
    side_effects: &[&str],
) -> TreatmentRecord {
    TreatmentRecord {
        name: name.to_string(),
        efficacy_score,
        confidence_score,
        description: description.to_string(),
        mechanism_of_action: mechanism_of_action.to_string(),
        side_effects: side_effects.iter().map(|s| s.to_string()).collect(),
    }
}

lazy_static! {
    static ref BREAST_CANCER: Vec<TreatmentRecord> = vec![
        record(
            "Tamoxifen",
            0.82,
            0.75,
            "Selective estrogen receptor modulator (SERM)",
            "Blocks estrogen receptors in breast cancer cells",
            &["Hot flashes", "Fatigue", "Mood changes", "Blood clots"],
        ),
        record(
            "Trastuzumab (Herceptin)",
            0.79,
            0.89,
            "Monoclonal antibody targeting HER2",
            "Targets HER2 protein on cancer cells",
            &["Heart problems", "Fever", "Chills", "Headache"],
        ),
        record(
            "Palbociclib",
            0.76,
            0.65,
            "CDK4/6 inhibitor",
            "Blocks cell division by inhibiting CDK4/6",
            &["Low white blood cell count", "Fatigue", "Nausea"],
        ),
    ];

    static ref LUNG_CANCER: Vec<TreatmentRecord> = vec![
        record(
            "Osimertinib",
            0.85,
            0.72,
            "EGFR tyrosine kinase inhibitor",
            "Targets EGFR mutations, especially T790M",
            &["Rash", "Diarrhea", "Dry skin", "Reduced appetite"],
        ),
        record(
            "Pembrolizumab",
            0.75,
            0.78,
            "PD-1 inhibitor immunotherapy",
            "Blocks PD-1 to activate T-cells against cancer",
            &["Fatigue", "Rash", "Immune-related adverse events"],
        ),
        record(
            "Crizotinib",
            0.82,
            0.81,
            "ALK inhibitor",
            "Targets ALK gene rearrangements",
            &["Vision problems", "Nausea", "Diarrhea", "Liver problems"],
        ),
    ];

    static ref COLORECTAL_CANCER: Vec<TreatmentRecord> = vec![
        record(
            "FOLFOX",
            0.80,
            0.85,
            "Combination chemotherapy (5-FU, leucovorin, oxaliplatin)",
            "Multiple mechanisms to disrupt cell division",
            &["Neuropathy", "Nausea", "Low blood counts", "Fatigue"],
        ),
        record(
            "Cetuximab",
            0.73,
            0.79,
            "EGFR inhibitor (monoclonal antibody)",
            "Blocks EGFR signaling (effective in KRAS wild-type)",
            &["Skin rash", "Diarrhea", "Fatigue", "Magnesium deficiency"],
        ),
        record(
            "Bevacizumab",
            0.75,
            0.67,
            "VEGF inhibitor (angiogenesis inhibitor)",
            "Blocks blood vessel formation to tumors",
            &["High blood pressure", "Bleeding", "Wound healing problems"],
        ),
    ];

    static ref PROSTATE_CANCER: Vec<TreatmentRecord> = vec![
        record(
            "Enzalutamide",
            0.87,
            0.82,
            "Androgen receptor inhibitor",
            "Blocks androgen receptor signaling",
            &["Fatigue", "Hot flashes", "Hypertension", "Seizures (rare)"],
        ),
        record(
            "Abiraterone",
            0.79,
            0.75,
            "CYP17A1 inhibitor",
            "Blocks androgen production pathways",
            &["Fluid retention", "Joint swelling", "Low potassium"],
        ),
        record(
            "Docetaxel",
            0.72,
            0.70,
            "Taxane chemotherapy",
            "Prevents cell division by affecting microtubules",
            &["Hair loss", "Numbness", "Nail changes", "Low blood counts"],
        ),
    ];

    static ref MELANOMA: Vec<TreatmentRecord> = vec![
        record(
            "Pembrolizumab",
            0.88,
            0.82,
            "PD-1 inhibitor immunotherapy",
            "Activates T-cells to attack melanoma cells",
            &["Fatigue", "Rash", "Colitis", "Endocrine disorders"],
        ),
        record(
            "Dabrafenib + Trametinib",
            0.84,
            0.85,
            "BRAF + MEK inhibitor combination",
            "Targets the MAPK pathway in BRAF-mutated melanoma",
            &["Fever", "Rash", "Joint pain", "Heart problems"],
        ),
        record(
            "Ipilimumab",
            0.75,
            0.70,
            "CTLA-4 inhibitor immunotherapy",
            "Enhances T-cell activation against melanoma",
            &["Serious immune-related adverse events", "Rash", "Diarrhea"],
        ),
    ];

    /// Fallback set for cancer types without a dedicated entry.
    static ref DEFAULT_TREATMENTS: Vec<TreatmentRecord> = vec![
        record(
            "Cisplatin",
            0.70,
            0.65,
            "Platinum-based chemotherapy",
            "Cross-links DNA, preventing cancer cell division",
            &["Kidney damage", "Hearing loss", "Nerve damage", "Nausea"],
        ),
        record(
            "Doxorubicin",
            0.65,
            0.60,
            "Anthracycline chemotherapy",
            "Intercalates DNA and inhibits topoisomerase II",
            &["Heart damage", "Hair loss", "Nausea", "Low blood counts"],
        ),
        record(
            "Immunotherapy (Nivolumab)",
            0.68,
            0.58,
            "PD-1 inhibitor",
            "Enhances T-cell immune response against cancer cells",
            &["Fatigue", "Rash", "Autoimmune reactions"],
        ),
    ];
}

/// Base treatment list for a cancer type, as an owned copy. Exact-match
/// lookup; every other key resolves to the default set.
pub fn base_for(cancer: &CancerType) -> Vec<TreatmentRecord> {
    match cancer {
        CancerType::Breast     => BREAST_CANCER.clone(),
        CancerType::Lung       => LUNG_CANCER.clone(),
        CancerType::Colorectal => COLORECTAL_CANCER.clone(),
        CancerType::Prostate   => PROSTATE_CANCER.clone(),
        CancerType::Melanoma   => MELANOMA.clone(),
        _                      => DEFAULT_TREATMENTS.clone(),
    }
}

/// The record appended for BRCA1/BRCA2 carriers, regardless of cancer type.
pub fn parp_inhibitor() -> TreatmentRecord {
    record(
        "PARP Inhibitor (Olaparib)",
        0.86,
        0.80,
        "PARP enzyme inhibitor",
        "Exploits synthetic lethality in BRCA-mutated cancers",
        &["Anemia", "Fatigue", "Nausea", "Neutropenia"],
    )
}
