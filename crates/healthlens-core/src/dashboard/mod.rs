//! Dashboard assembly.
//!
//! Everything the dashboard shows is recomputed from the latest stored
//! assessment on each load; the chart series are mock data around fixed
//! baselines.

mod display;
mod metrics;
mod series;

pub use display::*;
pub use metrics::*;
pub use series::*;

use rand::Rng;

use crate::db::{Database, DbResult};
use crate::models::RiskProfile;
use crate::risk;

/// Fully-prepared dashboard state for the view layer.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Risk profile from the latest assessment (base rates when none exists)
    pub risk: RiskProfile,
    /// The three risk display slots, in order
    pub slots: [RiskSlotUpdate; 3],
    /// Progress metric lines with hard-coded fallbacks
    pub metrics: ProgressMetrics,
    /// Mock chart series
    pub charts: ChartBundle,
}

/// Build the dashboard from the latest stored assessment.
///
/// A missing (or discarded-as-corrupt) assessment yields the base-rate risk
/// profile and fallback metrics rather than an error.
pub fn load_dashboard<R: Rng>(db: &Database, rng: &mut R) -> DbResult<DashboardData> {
    let record = db.load_assessment()?;

    let profile = match &record {
        Some(record) => risk::evaluate_record(record),
        None => risk::evaluate(&Default::default()),
    };

    Ok(DashboardData {
        risk: profile,
        slots: slot_updates(&profile),
        metrics: ProgressMetrics::from_assessment(record.as_ref()),
        charts: ChartBundle::generate(rng, chrono::Utc::now().date_naive()),
    })
}
