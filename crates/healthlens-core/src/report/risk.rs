//! Risk assessment report.

use serde::{Deserialize, Serialize};

/// Risk report with per-category percentages and contributing factors.
///
/// The numbers here are fixed product copy; they are not recomputed from the
/// stored assessment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    #[serde(rename = "type")]
    pub report_type: String,
    pub risk_factors: RiskFactors,
    pub recommendations: Vec<String>,
}

/// Per-category risk blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub diabetes: CategoryRisk,
    pub hypertension: CategoryRisk,
    pub heart_disease: CategoryRisk,
}

/// One category's risk percentage and named factors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRisk {
    pub risk: u8,
    pub factors: Vec<String>,
}

impl RiskReport {
    /// Build the fixed risk report.
    pub fn new() -> Self {
        Self {
            report_type: "Risk Assessment Report".to_string(),
            risk_factors: RiskFactors {
                diabetes: CategoryRisk {
                    risk: 65,
                    factors: vec![
                        "Elevated glucose".to_string(),
                        "BMI > 25".to_string(),
                        "Age > 45".to_string(),
                    ],
                },
                hypertension: CategoryRisk {
                    risk: 45,
                    factors: vec![
                        "Blood pressure trending up".to_string(),
                        "Salt intake".to_string(),
                    ],
                },
                heart_disease: CategoryRisk {
                    risk: 30,
                    factors: vec!["Family history".to_string(), "Stress levels".to_string()],
                },
            },
            recommendations: vec![
                "Implement stricter glucose monitoring".to_string(),
                "Increase cardio exercise to 150 min/week".to_string(),
                "Consider medication review with doctor".to_string(),
            ],
        }
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for RiskReport {
    fn default() -> Self {
        Self::new()
    }
}
