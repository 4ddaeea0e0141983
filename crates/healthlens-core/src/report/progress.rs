//! Progress report.

use serde::{Deserialize, Serialize};

/// Progress summary over the trailing three months.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressReport {
    #[serde(rename = "type")]
    pub report_type: String,
    pub period: String,
    pub improvements: Vec<String>,
    pub goals: Vec<String>,
}

impl ProgressReport {
    /// Build the fixed progress report.
    pub fn new() -> Self {
        Self {
            report_type: "Progress Report".to_string(),
            period: "Last 3 Months".to_string(),
            improvements: vec![
                "Weight decreased by 2.3 kg".to_string(),
                "Average glucose improved by 8 mg/dL".to_string(),
                "Exercise consistency increased by 40%".to_string(),
            ],
            goals: vec![
                "Maintain current weight loss trend".to_string(),
                "Achieve target glucose levels".to_string(),
                "Build strength training routine".to_string(),
            ],
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for ProgressReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_shape() {
        let report = ProgressReport::new();
        assert_eq!(report.period, "Last 3 Months");
        assert_eq!(report.improvements.len(), 3);
        assert_eq!(report.goals.len(), 3);
    }

    #[test]
    fn test_round_trip() {
        let report = ProgressReport::new();
        let back: ProgressReport = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(back, report);
    }
}
