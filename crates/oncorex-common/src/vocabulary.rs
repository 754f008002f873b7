//! Fixed intake vocabularies shared by the rule engine and the API surface.

/// Mutation panel offered by the intake form. Rule predicates key off these
/// symbols, but patients may carry any string.
pub const MUTATION_PANEL: [&str; 10] = [
    "BRCA1",
    "BRCA2",
    "EGFR",
    "ALK",
    "KRAS",
    "TP53",
    "PTEN",
    "HER2/neu",
    "PIK3CA",
    "RB1",
];

/// Genes the expression panel reports on.
pub const EXPRESSION_PANEL: [&str; 5] = ["TP53", "MYC", "VEGF", "EGFR", "PTEN"];
