//! Golden tests for the risk derivation pipeline.
//!
//! These tests verify scoring and classification against known cases.

use healthlens_core::models::{HealthInput, RiskLevel};
use healthlens_core::risk;

/// Test case from golden file.
struct GoldenCase {
    id: &'static str,
    age: Option<i64>,
    bmi: Option<f64>,
    glucose: Option<f64>,
    expected_diabetes: u8,
    expected_hypertension: u8,
    expected_heart_disease: u8,
    expected_levels: [RiskLevel; 3],
}

fn get_golden_cases() -> Vec<GoldenCase> {
    use RiskLevel::{High, Low, Moderate};

    vec![
        GoldenCase {
            id: "empty-form-base-rates",
            age: None,
            bmi: None,
            glucose: None,
            expected_diabetes: 30,
            expected_hypertension: 25,
            expected_heart_disease: 20,
            expected_levels: [Low, Low, Low],
        },
        GoldenCase {
            id: "young-and-lean",
            age: Some(30),
            bmi: Some(22.0),
            glucose: Some(90.0),
            expected_diabetes: 30,
            expected_hypertension: 25,
            expected_heart_disease: 20,
            expected_levels: [Low, Low, Low],
        },
        GoldenCase {
            id: "age-only",
            age: Some(50),
            bmi: None,
            glucose: None,
            expected_diabetes: 45,
            expected_hypertension: 45,
            expected_heart_disease: 30,
            expected_levels: [Moderate, Moderate, Low],
        },
        GoldenCase {
            id: "overweight-band",
            age: None,
            bmi: Some(27.0),
            glucose: None,
            expected_diabetes: 40,
            expected_hypertension: 33,
            expected_heart_disease: 25,
            expected_levels: [Moderate, Low, Low],
        },
        GoldenCase {
            id: "obese-band",
            age: None,
            bmi: Some(32.0),
            glucose: None,
            expected_diabetes: 50,
            expected_hypertension: 40,
            expected_heart_disease: 35,
            expected_levels: [Moderate, Moderate, Low],
        },
        GoldenCase {
            id: "elevated-glucose",
            age: None,
            bmi: None,
            glucose: Some(110.0),
            expected_diabetes: 45,
            expected_hypertension: 25,
            expected_heart_disease: 20,
            expected_levels: [Moderate, Low, Low],
        },
        GoldenCase {
            id: "diabetic-range-glucose",
            age: None,
            bmi: None,
            glucose: Some(130.0),
            expected_diabetes: 60,
            expected_hypertension: 25,
            expected_heart_disease: 20,
            expected_levels: [High, Low, Low],
        },
        GoldenCase {
            id: "all-factors-clamped",
            age: Some(50),
            bmi: Some(32.0),
            glucose: Some(130.0),
            expected_diabetes: 85,
            expected_hypertension: 60,
            expected_heart_disease: 45,
            expected_levels: [High, High, Moderate],
        },
        GoldenCase {
            id: "age-and-overweight",
            age: Some(60),
            bmi: Some(26.5),
            glucose: Some(95.0),
            expected_diabetes: 55,
            expected_hypertension: 53,
            expected_heart_disease: 35,
            expected_levels: [Moderate, Moderate, Low],
        },
        GoldenCase {
            id: "age-and-obese",
            age: Some(50),
            bmi: Some(31.0),
            glucose: None,
            expected_diabetes: 65,
            expected_hypertension: 60,
            expected_heart_disease: 45,
            expected_levels: [High, High, Moderate],
        },
    ]
}

#[test]
fn test_golden_cases() {
    for case in get_golden_cases() {
        let input = HealthInput {
            age: case.age,
            bmi: case.bmi,
            glucose: case.glucose,
            ..Default::default()
        };
        let profile = risk::evaluate(&input);

        assert_eq!(
            profile.diabetes.percentage, case.expected_diabetes,
            "case {}: diabetes percentage",
            case.id
        );
        assert_eq!(
            profile.hypertension.percentage, case.expected_hypertension,
            "case {}: hypertension percentage",
            case.id
        );
        assert_eq!(
            profile.heart_disease.percentage, case.expected_heart_disease,
            "case {}: heart disease percentage",
            case.id
        );

        let levels = [
            profile.diabetes.level,
            profile.hypertension.level,
            profile.heart_disease.level,
        ];
        assert_eq!(levels, case.expected_levels, "case {}: levels", case.id);
    }
}

#[test]
fn test_blood_pressure_never_moves_scores() {
    // Blood pressure is collected and displayed but carries no score bonus.
    let without = risk::evaluate(&HealthInput::default());
    let with = risk::evaluate(&HealthInput {
        systolic: Some(180),
        diastolic: Some(120),
        ..Default::default()
    });

    assert_eq!(without, with);
}

#[test]
fn test_heart_disease_high_band_is_narrow() {
    // Heart disease clamps at 65 with a High cutoff of 60: only the very top
    // of its range classifies High.
    let maxed = risk::evaluate(&HealthInput {
        age: Some(50),
        bmi: Some(31.0),
        glucose: Some(130.0),
        ..Default::default()
    });

    assert_eq!(maxed.heart_disease.percentage, 45);
    assert_eq!(maxed.heart_disease.level, RiskLevel::Moderate);
}
