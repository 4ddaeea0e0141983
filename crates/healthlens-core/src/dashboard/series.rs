//! Mock chart series generation.
//!
//! Series are random walks around fixed baselines, regenerated on every
//! dashboard load. The RNG is passed in so tests can seed it.

use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Static doughnut data for the risk overview chart:
/// diabetes, hypertension, heart disease, healthy remainder.
pub const RISK_OVERVIEW: [u8; 4] = [65, 45, 30, 60];

/// Weekday labels for the activity bar chart.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// All mock series the dashboard charts draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartBundle {
    pub risk_overview: [u8; 4],
    /// Glucose, 7 daily points around 125 mg/dL
    pub glucose: Vec<f64>,
    /// Systolic pressure, 7 daily points around 129 mmHg
    pub systolic: Vec<f64>,
    /// Diastolic pressure, 7 daily points around 84 mmHg
    pub diastolic: Vec<f64>,
    /// Weight, 30 daily points around 73.9 kg
    pub weight: Vec<f64>,
    /// Steps, 7 daily points around 5200
    pub activity: Vec<f64>,
    /// Short date labels for the last 7 days, oldest first
    pub week_labels: Vec<String>,
    /// Short date labels for the last 30 days, oldest first
    pub month_labels: Vec<String>,
}

impl ChartBundle {
    /// Generate the full bundle for the given day.
    pub fn generate<R: Rng>(rng: &mut R, today: NaiveDate) -> Self {
        Self {
            risk_overview: RISK_OVERVIEW,
            glucose: mock_series(125.0, 10.0, 7, rng),
            systolic: mock_series(129.0, 8.0, 7, rng),
            diastolic: mock_series(84.0, 5.0, 7, rng),
            weight: mock_series(73.9, 2.0, 30, rng),
            activity: mock_series(5200.0, 1500.0, 7, rng),
            week_labels: date_labels(7, today),
            month_labels: date_labels(30, today),
        }
    }
}

/// Generate `points` values uniformly spread within `base ± variance`,
/// rounded to one decimal.
pub fn mock_series<R: Rng>(base: f64, variance: f64, points: usize, rng: &mut R) -> Vec<f64> {
    (0..points)
        .map(|_| {
            let offset = (rng.gen::<f64>() - 0.5) * variance * 2.0;
            ((base + offset) * 10.0).round() / 10.0
        })
        .collect()
}

/// Short labels ("Jan 5") for the last `days` days ending today, oldest first.
pub fn date_labels(days: usize, today: NaiveDate) -> Vec<String> {
    (0..days)
        .rev()
        .map(|i| {
            let date = today - Duration::days(i as i64);
            date.format("%b %-d").to_string()
        })
        .collect()
}
