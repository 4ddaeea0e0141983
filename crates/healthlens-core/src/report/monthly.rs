//! Monthly health summary report.

use serde::{Deserialize, Serialize};

/// Monthly summary over the trailing 30 days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    #[serde(rename = "type")]
    pub report_type: String,
    pub period: String,
    pub metrics: MonthlyMetrics,
    pub recommendations: Vec<String>,
}

/// Averaged metrics block of the monthly report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetrics {
    pub avg_glucose: f64,
    #[serde(rename = "avgBP")]
    pub avg_bp: String,
    pub avg_weight: f64,
    pub avg_steps: u32,
    pub medication_adherence: u8,
}

impl MonthlyReport {
    /// Build the fixed monthly summary.
    pub fn new() -> Self {
        Self {
            report_type: "Monthly Health Summary".to_string(),
            period: "Last 30 Days".to_string(),
            metrics: MonthlyMetrics {
                avg_glucose: 125.0,
                avg_bp: "128/82".to_string(),
                avg_weight: 74.2,
                avg_steps: 5400,
                medication_adherence: 94,
            },
            recommendations: vec![
                "Continue current exercise routine".to_string(),
                "Reduce sodium intake by 20%".to_string(),
                "Schedule quarterly check-up".to_string(),
            ],
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for MonthlyReport {
    fn default() -> Self {
        Self::new()
    }
}
