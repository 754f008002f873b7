//! oncorex-common — Shared types, errors, and vocabularies used across all Oncorex crates.

pub mod error;
pub mod patient;
pub mod treatment;
pub mod vocabulary;

// Re-export commonly used types
pub use error::{ApiError, OncorexError, Result};
pub use patient::{
    CancerStage, CancerType, ExpressionLevel, Gender, PatientAttributes, TreatmentResponse,
};
pub use treatment::TreatmentRecord;
