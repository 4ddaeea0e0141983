//! Report generation.
//!
//! The three report shapes are fixed product copy, not derived from the risk
//! scorer. Each serializes to pretty JSON and downloads under
//! `healthlens-<type>-report-<date>.json`.

mod monthly;
mod progress;
mod risk;

pub use monthly::*;
pub use progress::*;
pub use risk::*;

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

/// The report types the product offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportKind {
    Monthly,
    Risk,
    Progress,
}

impl ReportKind {
    /// Slug used in the download file name.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::Monthly => "monthly",
            ReportKind::Risk => "risk",
            ReportKind::Progress => "progress",
        }
    }

    /// Parse a slug, e.g. from the FFI boundary.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "monthly" => Some(ReportKind::Monthly),
            "risk" => Some(ReportKind::Risk),
            "progress" => Some(ReportKind::Progress),
            _ => None,
        }
    }
}

/// A generated report ready for download.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    pub kind: ReportKind,
    /// `healthlens-<type>-report-<date>.json`
    pub file_name: String,
    /// Pretty-printed JSON body
    pub json: String,
}

impl GeneratedReport {
    /// Write the report into `dir` under its download file name.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> io::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.json)?;
        Ok(path)
    }
}

/// Download file name for a report generated on `date`.
pub fn file_name(kind: ReportKind, date: NaiveDate) -> String {
    format!("healthlens-{}-report-{}.json", kind.slug(), date.format("%Y-%m-%d"))
}

/// Generate a report of the given kind, dated `date`.
pub fn generate(kind: ReportKind, date: NaiveDate) -> Result<GeneratedReport, serde_json::Error> {
    let json = match kind {
        ReportKind::Monthly => MonthlyReport::new().to_json()?,
        ReportKind::Risk => RiskReport::new().to_json()?,
        ReportKind::Progress => ProgressReport::new().to_json()?,
    };

    Ok(GeneratedReport {
        kind,
        file_name: file_name(kind, date),
        json,
    })
}
