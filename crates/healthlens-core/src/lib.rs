//! HealthLens Core Library
//!
//! Local-first core of the HealthLens health-tracking client.
//!
//! # Architecture
//!
//! ```text
//! Form fields → Normalization → Scoring → Classification
//!                                              │
//!                                   ┌──────────▼──────────┐
//!                                   │     RiskProfile     │
//!                                   └──────────┬──────────┘
//!                                              │
//!                      ┌───────────────────────┼───────────────────────┐
//!                      │                       │                       │
//!                      ▼                       ▼                       ▼
//!                Display slots            Dashboard               Local store
//!              "<Level> (<pct>%)"      (metrics, charts)      (overwrite blobs)
//! ```
//!
//! # Core Principle
//!
//! **Everything is recomputed from the latest stored snapshot.** No entity has
//! a multi-step lifecycle; the derivation pipeline is pure and stateless.
//!
//! # Modules
//!
//! - [`db`]: SQLite store with per-record JSON blobs and overwrite semantics
//! - [`models`]: Domain types (UserAccount, AssessmentRecord, RiskScore, etc.)
//! - [`risk`]: The derivation pipeline (normalizer → scorer → classifier)
//! - [`auth`]: Mock authentication and the password strength meter
//! - [`dashboard`]: Dashboard assembly and the display synchronizer boundary
//! - [`report`]: Downloadable report generation
//! - [`testimonials`]: Carousel rotation state
//! - [`latency`]: Simulated network delay table

pub mod auth;
pub mod dashboard;
pub mod db;
pub mod latency;
pub mod models;
pub mod report;
pub mod risk;
pub mod testimonials;

// Re-export commonly used types
pub use auth::{password_strength, Authenticator, PasswordStrength, StrengthLabel};
pub use dashboard::{DashboardData, ProgressMetrics, RiskDisplay, RiskSlotUpdate};
pub use db::Database;
pub use latency::SimulatedCall;
pub use models::{
    AssessmentRecord, BmiCategory, HealthInput, RiskCategory, RiskLevel, RiskProfile, RiskScore,
    UserAccount,
};
pub use report::{GeneratedReport, ReportKind};
pub use testimonials::TestimonialCarousel;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HealthLensError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<db::DbError> for HealthLensError {
    fn from(e: db::DbError) -> Self {
        HealthLensError::DatabaseError(e.to_string())
    }
}

impl From<auth::AuthError> for HealthLensError {
    fn from(e: auth::AuthError) -> Self {
        HealthLensError::AuthenticationError(e.user_message().to_string())
    }
}

impl From<serde_json::Error> for HealthLensError {
    fn from(e: serde_json::Error) -> Self {
        HealthLensError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for HealthLensError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        HealthLensError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create the local store at the given path.
#[uniffi::export]
pub fn open_store(path: String) -> Result<Arc<HealthLens>, HealthLensError> {
    let db = Database::open(&path)?;
    Ok(Arc::new(HealthLens::with_database(db)))
}

/// Create an in-memory store (for testing).
#[uniffi::export]
pub fn open_store_in_memory() -> Result<Arc<HealthLens>, HealthLensError> {
    let db = Database::open_in_memory()?;
    Ok(Arc::new(HealthLens::with_database(db)))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Application state owned by the controller.
///
/// Every handler reads and writes this one value; no module-scope state
/// exists anywhere in the crate.
struct AppState {
    current_user: Option<UserAccount>,
    testimonials: TestimonialCarousel,
}

/// Thread-safe top-level controller for the host UI.
#[derive(uniffi::Object)]
pub struct HealthLens {
    db: Arc<Mutex<Database>>,
    state: Arc<Mutex<AppState>>,
}

impl HealthLens {
    fn with_database(db: Database) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            state: Arc::new(Mutex::new(AppState {
                current_user: None,
                testimonials: TestimonialCarousel::new(0),
            })),
        }
    }
}

#[uniffi::export]
impl HealthLens {
    // =========================================================================
    // Authentication Operations
    // =========================================================================

    /// Sign in with email and password. Persists the session iff `remember`.
    pub fn sign_in(
        &self,
        email: String,
        password: String,
        remember: bool,
    ) -> Result<FfiUserAccount, HealthLensError> {
        let db = self.db.lock()?;
        let account = Authenticator::new(&db).sign_in(&email, &password, remember)?;

        self.state.lock()?.current_user = Some(account.clone());
        Ok(account.into())
    }

    /// Create an account and sign in.
    pub fn sign_up(
        &self,
        name: String,
        email: String,
        password: String,
        confirm_password: String,
        accepted_terms: bool,
    ) -> Result<FfiUserAccount, HealthLensError> {
        let db = self.db.lock()?;
        let account = Authenticator::new(&db).sign_up(
            &name,
            &email,
            &password,
            &confirm_password,
            accepted_terms,
        )?;

        self.state.lock()?.current_user = Some(account.clone());
        Ok(account.into())
    }

    /// Sign in through a social provider.
    pub fn sign_in_with(&self, provider: String) -> Result<FfiUserAccount, HealthLensError> {
        let db = self.db.lock()?;
        let account = Authenticator::new(&db).sign_in_with(&provider)?;

        self.state.lock()?.current_user = Some(account.clone());
        Ok(account.into())
    }

    /// Sign out and clear the persisted session.
    pub fn sign_out(&self) -> Result<(), HealthLensError> {
        let db = self.db.lock()?;
        Authenticator::new(&db).sign_out()?;

        self.state.lock()?.current_user = None;
        Ok(())
    }

    /// Restore a remembered session from the store, if any.
    pub fn restore_session(&self) -> Result<Option<FfiUserAccount>, HealthLensError> {
        let db = self.db.lock()?;
        let account = Authenticator::new(&db).restore_session()?;

        self.state.lock()?.current_user = account.clone();
        Ok(account.map(|a| a.into()))
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Result<Option<FfiUserAccount>, HealthLensError> {
        let state = self.state.lock()?;
        Ok(state.current_user.clone().map(|a| a.into()))
    }

    /// Score a candidate password for the sign-up strength meter.
    pub fn password_strength(&self, password: String) -> FfiPasswordStrength {
        auth::password_strength(&password).into()
    }

    // =========================================================================
    // Assessment Operations
    // =========================================================================

    /// Live BMI indicator for the assessment form. `None` until both weight
    /// (kg) and height (cm) are positive.
    pub fn bmi_indicator(&self, weight_kg: f64, height_cm: f64) -> Option<FfiBmiIndicator> {
        let bmi = risk::normalizer::bmi_from_measurements(weight_kg, height_cm)?;
        let category = models::BmiCategory::from_bmi(bmi);

        Some(FfiBmiIndicator {
            bmi,
            text: format!("BMI: {:.1} ({})", bmi, category),
            category: category.to_string(),
            color: category.hex_color().to_string(),
        })
    }

    /// Store a submitted assessment, replacing any prior submission.
    pub fn submit_assessment(
        &self,
        fields: HashMap<String, String>,
    ) -> Result<FfiAssessmentSummary, HealthLensError> {
        let bmi = risk::normalizer::derive_bmi(&fields);
        let user_id = {
            let state = self.state.lock()?;
            state.current_user.as_ref().map(|u| u.id.clone())
        };

        let record = AssessmentRecord::new(fields, bmi, user_id);
        let db = self.db.lock()?;
        db.save_assessment(&record)?;

        tracing::info!("assessment stored for {}", record.user_id);
        Ok(record.into())
    }

    /// Build the dashboard from the latest stored assessment.
    pub fn dashboard(&self) -> Result<FfiDashboard, HealthLensError> {
        let db = self.db.lock()?;
        let data = dashboard::load_dashboard(&db, &mut rand::thread_rng())?;
        Ok(data.into())
    }

    // =========================================================================
    // Report Operations
    // =========================================================================

    /// Generate a report ("monthly", "risk", or "progress") for download.
    pub fn generate_report(&self, kind: String) -> Result<FfiGeneratedReport, HealthLensError> {
        let kind = ReportKind::from_slug(&kind)
            .ok_or_else(|| HealthLensError::InvalidInput(format!("unknown report type: {}", kind)))?;

        let report = report::generate(kind, chrono::Utc::now().date_naive())?;
        Ok(report.into())
    }

    // =========================================================================
    // Testimonial Operations
    // =========================================================================

    /// Set the number of testimonial slides, resetting to the first.
    pub fn set_testimonial_count(&self, count: u32) -> Result<(), HealthLensError> {
        self.state.lock()?.testimonials = TestimonialCarousel::new(count as usize);
        Ok(())
    }

    /// Advance the carousel; returns the new slide index.
    pub fn next_testimonial(&self) -> Result<u32, HealthLensError> {
        Ok(self.state.lock()?.testimonials.next() as u32)
    }

    /// Step the carousel back; returns the new slide index.
    pub fn previous_testimonial(&self) -> Result<u32, HealthLensError> {
        Ok(self.state.lock()?.testimonials.prev() as u32)
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Delete the account: clears every stored record and the session.
    pub fn delete_account(&self) -> Result<(), HealthLensError> {
        let db = self.db.lock()?;
        db.clear_records()?;

        self.state.lock()?.current_user = None;
        tracing::info!("account data cleared");
        Ok(())
    }

    // =========================================================================
    // UX Support
    // =========================================================================

    /// Simulated delay in milliseconds for a named flow (e.g. "sign_in").
    pub fn simulated_delay_ms(&self, operation: String) -> Result<u64, HealthLensError> {
        let call = SimulatedCall::from_slug(&operation).ok_or_else(|| {
            HealthLensError::InvalidInput(format!("unknown operation: {}", operation))
        })?;
        Ok(call.delay().as_millis() as u64)
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe user account.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    pub joined_at: String,
    pub provider: Option<String>,
    pub avatar_initial: Option<String>,
}

impl From<UserAccount> for FfiUserAccount {
    fn from(account: UserAccount) -> Self {
        Self {
            avatar_initial: account.avatar_initial().map(String::from),
            id: account.id,
            name: account.name,
            email: account.email,
            joined_at: account.joined_at,
            provider: account.provider,
        }
    }
}

/// FFI-safe password strength.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPasswordStrength {
    pub score: u8,
    pub label: String,
    pub color: String,
}

impl From<PasswordStrength> for FfiPasswordStrength {
    fn from(strength: PasswordStrength) -> Self {
        Self {
            score: strength.score,
            label: strength.label.to_string(),
            color: strength.label.hex_color().to_string(),
        }
    }
}

/// FFI-safe live BMI indicator.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiBmiIndicator {
    pub bmi: f64,
    /// Indicator copy, e.g. `BMI: 27.7 (Overweight)`
    pub text: String,
    pub category: String,
    pub color: String,
}

/// FFI-safe assessment submission summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAssessmentSummary {
    pub user_id: String,
    pub submitted_at: String,
    pub bmi: Option<f64>,
}

impl From<AssessmentRecord> for FfiAssessmentSummary {
    fn from(record: AssessmentRecord) -> Self {
        Self {
            user_id: record.user_id,
            submitted_at: record.submitted_at,
            bmi: record.bmi,
        }
    }
}

/// FFI-safe risk score for one display slot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiRiskScore {
    pub category: String,
    pub label: String,
    pub percentage: u8,
    pub level: String,
    pub slot_text: String,
    pub css_class: String,
}

impl From<RiskScore> for FfiRiskScore {
    fn from(score: RiskScore) -> Self {
        Self {
            category: format!("{:?}", score.category),
            label: score.category.display_name().to_string(),
            percentage: score.percentage,
            level: score.level.to_string(),
            slot_text: score.slot_text(),
            css_class: score.level.css_class().to_string(),
        }
    }
}

/// FFI-safe progress metrics.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProgressMetrics {
    pub glucose_mg_dl: f64,
    pub blood_pressure: String,
    pub weight_kg: f64,
    pub weekly_avg_steps: u32,
    pub info_lines: Vec<String>,
}

impl From<ProgressMetrics> for FfiProgressMetrics {
    fn from(metrics: ProgressMetrics) -> Self {
        Self {
            info_lines: metrics.info_lines().to_vec(),
            glucose_mg_dl: metrics.glucose_mg_dl,
            blood_pressure: metrics.blood_pressure,
            weight_kg: metrics.weight_kg,
            weekly_avg_steps: metrics.weekly_avg_steps,
        }
    }
}

/// FFI-safe chart series bundle.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiChartBundle {
    pub risk_overview: Vec<u8>,
    pub glucose: Vec<f64>,
    pub systolic: Vec<f64>,
    pub diastolic: Vec<f64>,
    pub weight: Vec<f64>,
    pub activity: Vec<f64>,
    pub week_labels: Vec<String>,
    pub month_labels: Vec<String>,
    pub weekday_labels: Vec<String>,
}

impl From<dashboard::ChartBundle> for FfiChartBundle {
    fn from(charts: dashboard::ChartBundle) -> Self {
        Self {
            risk_overview: charts.risk_overview.to_vec(),
            glucose: charts.glucose,
            systolic: charts.systolic,
            diastolic: charts.diastolic,
            weight: charts.weight,
            activity: charts.activity,
            week_labels: charts.week_labels,
            month_labels: charts.month_labels,
            weekday_labels: dashboard::WEEKDAY_LABELS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// FFI-safe dashboard state.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDashboard {
    pub risk_scores: Vec<FfiRiskScore>,
    pub metrics: FfiProgressMetrics,
    pub charts: FfiChartBundle,
}

impl From<DashboardData> for FfiDashboard {
    fn from(data: DashboardData) -> Self {
        Self {
            risk_scores: data.risk.scores().into_iter().map(|s| s.into()).collect(),
            metrics: data.metrics.into(),
            charts: data.charts.into(),
        }
    }
}

/// FFI-safe generated report.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiGeneratedReport {
    pub kind: String,
    pub file_name: String,
    pub json: String,
}

impl From<GeneratedReport> for FfiGeneratedReport {
    fn from(report: GeneratedReport) -> Self {
        Self {
            kind: report.kind.slug().to_string(),
            file_name: report.file_name,
            json: report.json,
        }
    }
}
