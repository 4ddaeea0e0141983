//! Input normalizer for submitted assessment fields.
//!
//! Numeric coercion only: absent or unparsable fields become `None`, never an
//! error. Out-of-range values (negative age, zero glucose) are accepted as-is
//! and flow downstream uncorrected.

use std::collections::HashMap;

use crate::models::{AssessmentRecord, HealthInput};

/// Form field keys the normalizer reads.
pub const FIELD_AGE: &str = "age";
pub const FIELD_BMI: &str = "bmi";
pub const FIELD_WEIGHT: &str = "weight";
pub const FIELD_HEIGHT: &str = "height";
pub const FIELD_GLUCOSE: &str = "glucose";
pub const FIELD_BLOOD_PRESSURE: &str = "bloodPressure";

/// Extract a numeric health profile from a stored assessment.
///
/// BMI resolution order: the value derived at submission time, then a `bmi`
/// form field, then a fresh derivation from `weight`/`height`.
pub fn normalize(record: &AssessmentRecord) -> HealthInput {
    let (systolic, diastolic) = record
        .field(FIELD_BLOOD_PRESSURE)
        .map(parse_blood_pressure)
        .unwrap_or((None, None));

    HealthInput {
        age: record.field(FIELD_AGE).and_then(parse_int),
        bmi: record
            .bmi
            .or_else(|| record.field(FIELD_BMI).and_then(parse_float))
            .or_else(|| derive_bmi(&record.fields)),
        glucose: record.field(FIELD_GLUCOSE).and_then(parse_float),
        systolic,
        diastolic,
    }
}

/// Derive BMI from `weight` (kg) and `height` (cm) fields, rounded to one
/// decimal. Returns `None` unless both parse and are positive.
pub fn derive_bmi(fields: &HashMap<String, String>) -> Option<f64> {
    let weight = fields.get(FIELD_WEIGHT).and_then(|v| parse_float(v))?;
    let height = fields.get(FIELD_HEIGHT).and_then(|v| parse_float(v))?;
    bmi_from_measurements(weight, height)
}

/// BMI for a weight in kg and a height in cm, rounded to one decimal.
/// Returns `None` unless both are positive.
pub fn bmi_from_measurements(weight_kg: f64, height_cm: f64) -> Option<f64> {
    let height_m = height_cm / 100.0;
    if weight_kg > 0.0 && height_m > 0.0 {
        Some(round1(weight_kg / (height_m * height_m)))
    } else {
        None
    }
}

/// Parse a combined `systolic/diastolic` reading such as `129/84`.
pub fn parse_blood_pressure(value: &str) -> (Option<i64>, Option<i64>) {
    let mut parts = value.splitn(2, '/');
    let systolic = parts.next().and_then(parse_int);
    let diastolic = parts.next().and_then(parse_int);
    (systolic, diastolic)
}

fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse().ok().filter(|v: &f64| v.is_finite())
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
