//! Assessment-to-risk derivation pipeline.
//!
//! Pipeline: Form fields → Normalization → Scoring → Classification
//!
//! Every stage is a pure function; the whole pipeline is recomputed from the
//! latest stored assessment on each dashboard load.

pub mod classifier;
pub mod normalizer;
pub mod scorer;

pub use classifier::classify;
pub use normalizer::normalize;
pub use scorer::score;

use crate::models::{AssessmentRecord, HealthInput, RiskCategory, RiskProfile, RiskScore};

/// Derive the full risk profile from a normalized input.
pub fn evaluate(input: &HealthInput) -> RiskProfile {
    let raw = scorer::score(input);

    RiskProfile {
        diabetes: make_score(RiskCategory::Diabetes, raw.diabetes),
        hypertension: make_score(RiskCategory::Hypertension, raw.hypertension),
        heart_disease: make_score(RiskCategory::HeartDisease, raw.heart_disease),
    }
}

/// Derive the full risk profile straight from a stored assessment.
pub fn evaluate_record(record: &AssessmentRecord) -> RiskProfile {
    evaluate(&normalizer::normalize(record))
}

fn make_score(category: RiskCategory, percentage: u8) -> RiskScore {
    RiskScore {
        category,
        percentage,
        level: classifier::classify(percentage),
    }
}
