//! Risk derivation types.

use serde::{Deserialize, Serialize};

/// Numeric health profile extracted from a submitted assessment.
///
/// Constructed fresh for every scoring call and never persisted; fields that
/// were absent or unparsable in the form stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthInput {
    /// Age in whole years
    pub age: Option<i64>,
    /// Body mass index, stored or derived from weight/height
    pub bmi: Option<f64>,
    /// Glucose in mg/dL
    pub glucose: Option<f64>,
    /// Systolic blood pressure in mmHg
    pub systolic: Option<i64>,
    /// Diastolic blood pressure in mmHg
    pub diastolic: Option<i64>,
}

impl HealthInput {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.bmi.is_none()
            && self.glucose.is_none()
            && self.systolic.is_none()
            && self.diastolic.is_none()
    }
}

/// Independently scored risk categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Diabetes,
    Hypertension,
    HeartDisease,
}

impl RiskCategory {
    /// All categories in display order.
    pub const ALL: [RiskCategory; 3] = [
        RiskCategory::Diabetes,
        RiskCategory::Hypertension,
        RiskCategory::HeartDisease,
    ];

    /// Upper clamp applied to this category's percentage.
    pub fn max_percentage(&self) -> u8 {
        match self {
            RiskCategory::Diabetes => 85,
            RiskCategory::Hypertension => 75,
            RiskCategory::HeartDisease => 65,
        }
    }

    /// Base rate before any input-driven additions.
    pub fn base_percentage(&self) -> u8 {
        match self {
            RiskCategory::Diabetes => 30,
            RiskCategory::Hypertension => 25,
            RiskCategory::HeartDisease => 20,
        }
    }

    /// Dashboard slot label.
    pub fn display_name(&self) -> &'static str {
        match self {
            RiskCategory::Diabetes => "Diabetes Risk",
            RiskCategory::Hypertension => "Hypertension Risk",
            RiskCategory::HeartDisease => "Heart Disease Risk",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// BMI bands shown by the live indicator on the assessment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Band for a BMI value.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Indicator background color.
    pub fn hex_color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight | BmiCategory::Obese => "#FF7043",
            BmiCategory::NormalWeight => "#81C784",
            BmiCategory::Overweight => "#FFEE58",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::NormalWeight => write!(f, "Normal weight"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}

/// Categorical label derived from a risk percentage via fixed cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Style class the view layer attaches to the slot.
    pub fn css_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Moderate => "risk-moderate",
            RiskLevel::High => "risk-high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// A scored and classified risk for one category.
///
/// Invariant: `percentage` is within `[0, category.max_percentage()]` and
/// `level` is derived from `percentage` alone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    pub category: RiskCategory,
    pub percentage: u8,
    pub level: RiskLevel,
}

impl RiskScore {
    /// Dashboard slot text, e.g. `High (85%)`.
    pub fn slot_text(&self) -> String {
        format!("{} ({}%)", self.level, self.percentage)
    }
}

/// The three risk scores derived from one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub diabetes: RiskScore,
    pub hypertension: RiskScore,
    pub heart_disease: RiskScore,
}

impl RiskProfile {
    /// Scores in display order.
    pub fn scores(&self) -> [RiskScore; 3] {
        [self.diabetes, self.hypertension, self.heart_disease]
    }
}
