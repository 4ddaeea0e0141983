//! Property tests for the risk scorer.

use healthlens_core::models::{HealthInput, RiskCategory};
use healthlens_core::risk;
use proptest::prelude::*;

fn arb_health_input() -> impl Strategy<Value = HealthInput> {
    (
        proptest::option::of(-150i64..200),
        proptest::option::of(-10.0f64..80.0),
        proptest::option::of(-50.0f64..500.0),
        proptest::option::of(0i64..300),
        proptest::option::of(0i64..200),
    )
        .prop_map(|(age, bmi, glucose, systolic, diastolic)| HealthInput {
            age,
            bmi,
            glucose,
            systolic,
            diastolic,
        })
}

proptest! {
    /// Every percentage stays within [base rate, category clamp], for any
    /// input, including out-of-range values the normalizer lets through.
    #[test]
    fn percentages_stay_in_bounds(input in arb_health_input()) {
        let profile = risk::evaluate(&input);

        for score in profile.scores() {
            prop_assert!(score.percentage >= score.category.base_percentage());
            prop_assert!(score.percentage <= score.category.max_percentage());
        }
    }

    /// Scoring is a pure function: same input, same output.
    #[test]
    fn scoring_is_idempotent(input in arb_health_input()) {
        prop_assert_eq!(risk::evaluate(&input), risk::evaluate(&input));
    }

    /// The level always matches the percentage cutoffs.
    #[test]
    fn level_tracks_percentage(input in arb_health_input()) {
        let profile = risk::evaluate(&input);

        for score in profile.scores() {
            prop_assert_eq!(score.level, risk::classify(score.percentage));
        }
    }

    /// Dropping a field never raises any score (bonuses are additive).
    #[test]
    fn missing_fields_never_raise_scores(input in arb_health_input()) {
        let full = risk::evaluate(&input);
        let without_glucose = risk::evaluate(&HealthInput { glucose: None, ..input.clone() });

        prop_assert!(without_glucose.diabetes.percentage <= full.diabetes.percentage);
        prop_assert!(without_glucose.hypertension.percentage <= full.hypertension.percentage);
        prop_assert!(without_glucose.heart_disease.percentage <= full.heart_disease.percentage);
    }
}

#[test]
fn test_category_clamps_are_the_documented_ones() {
    assert_eq!(RiskCategory::Diabetes.max_percentage(), 85);
    assert_eq!(RiskCategory::Hypertension.max_percentage(), 75);
    assert_eq!(RiskCategory::HeartDisease.max_percentage(), 65);
}
