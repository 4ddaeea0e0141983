//! Assessment record models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// User id recorded when nobody is signed in at submission time.
pub const ANONYMOUS_USER_ID: &str = "anonymous";

/// The latest submitted health-questionnaire snapshot.
///
/// Holds the full form as submitted plus the derived BMI and a submission
/// timestamp. Persisted as a single record that fully replaces any prior
/// submission; there is no history and no merge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentRecord {
    /// Raw form fields, string keys to string values
    pub fields: HashMap<String, String>,
    /// BMI derived at submission time (1-decimal rounding), if computable
    pub bmi: Option<f64>,
    /// Id of the submitting user, or [`ANONYMOUS_USER_ID`]
    pub user_id: String,
    /// Submission timestamp
    pub submitted_at: String,
}

impl AssessmentRecord {
    /// Create a record from submitted fields.
    ///
    /// `bmi` is computed by the caller (see `risk::normalizer::derive_bmi`)
    /// so that the record stores exactly what the dashboard will read back.
    pub fn new(fields: HashMap<String, String>, bmi: Option<f64>, user_id: Option<String>) -> Self {
        Self {
            fields,
            bmi,
            user_id: user_id.unwrap_or_else(|| ANONYMOUS_USER_ID.to_string()),
            submitted_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Look up a raw form field.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}
