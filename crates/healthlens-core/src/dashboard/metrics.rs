//! Progress metrics with hard-coded fallbacks.

use crate::models::AssessmentRecord;
use crate::risk::normalizer::{FIELD_BLOOD_PRESSURE, FIELD_GLUCOSE, FIELD_WEIGHT};

/// Latest progress metrics shown on the dashboard.
///
/// Values come from the stored assessment where present; each falls back to
/// the product's fixed demo baseline otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressMetrics {
    /// Latest glucose in mg/dL (fallback 125)
    pub glucose_mg_dl: f64,
    /// Latest blood pressure reading as entered (fallback "129/84")
    pub blood_pressure: String,
    /// Current weight in kg (fallback 73.9)
    pub weight_kg: f64,
    /// Weekly average steps per day (always the demo baseline)
    pub weekly_avg_steps: u32,
}

impl ProgressMetrics {
    pub const FALLBACK_GLUCOSE: f64 = 125.0;
    pub const FALLBACK_BLOOD_PRESSURE: &'static str = "129/84";
    pub const FALLBACK_WEIGHT: f64 = 73.9;
    pub const WEEKLY_AVG_STEPS: u32 = 5200;

    /// Derive metrics from the latest assessment, if any.
    pub fn from_assessment(record: Option<&AssessmentRecord>) -> Self {
        let numeric_field = |key: &str| {
            record
                .and_then(|r| r.field(key))
                .and_then(|v| v.trim().parse::<f64>().ok())
        };

        Self {
            glucose_mg_dl: numeric_field(FIELD_GLUCOSE).unwrap_or(Self::FALLBACK_GLUCOSE),
            blood_pressure: record
                .and_then(|r| r.field(FIELD_BLOOD_PRESSURE))
                .filter(|v| !v.is_empty())
                .unwrap_or(Self::FALLBACK_BLOOD_PRESSURE)
                .to_string(),
            weight_kg: numeric_field(FIELD_WEIGHT).unwrap_or(Self::FALLBACK_WEIGHT),
            weekly_avg_steps: Self::WEEKLY_AVG_STEPS,
        }
    }

    /// The four metric info lines, formatted the way the dashboard shows them.
    pub fn info_lines(&self) -> [String; 4] {
        [
            format!("Latest glucose: {} mg/dL", self.glucose_mg_dl),
            format!("Latest BP: {} mmHg", self.blood_pressure),
            format!("Current weight: {} kg", self.weight_kg),
            format!("Weekly avg steps: {} steps/day", self.weekly_avg_steps),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_fallbacks_without_assessment() {
        let metrics = ProgressMetrics::from_assessment(None);

        assert_eq!(metrics.glucose_mg_dl, 125.0);
        assert_eq!(metrics.blood_pressure, "129/84");
        assert_eq!(metrics.weight_kg, 73.9);
        assert_eq!(metrics.weekly_avg_steps, 5200);
    }

    #[test]
    fn test_values_from_assessment() {
        let mut fields = HashMap::new();
        fields.insert("glucose".to_string(), "118".to_string());
        fields.insert("bloodPressure".to_string(), "122/80".to_string());
        fields.insert("weight".to_string(), "70.5".to_string());
        let record = AssessmentRecord::new(fields, None, None);

        let metrics = ProgressMetrics::from_assessment(Some(&record));

        assert_eq!(metrics.glucose_mg_dl, 118.0);
        assert_eq!(metrics.blood_pressure, "122/80");
        assert_eq!(metrics.weight_kg, 70.5);
    }

    #[test]
    fn test_unparsable_fields_fall_back() {
        let mut fields = HashMap::new();
        fields.insert("glucose".to_string(), "n/a".to_string());
        fields.insert("bloodPressure".to_string(), String::new());
        let record = AssessmentRecord::new(fields, None, None);

        let metrics = ProgressMetrics::from_assessment(Some(&record));

        assert_eq!(metrics.glucose_mg_dl, 125.0);
        assert_eq!(metrics.blood_pressure, "129/84");
    }

    #[test]
    fn test_info_lines() {
        let metrics = ProgressMetrics::from_assessment(None);
        let lines = metrics.info_lines();

        assert_eq!(lines[0], "Latest glucose: 125 mg/dL");
        assert_eq!(lines[1], "Latest BP: 129/84 mmHg");
        assert_eq!(lines[3], "Weekly avg steps: 5200 steps/day");
    }
}
