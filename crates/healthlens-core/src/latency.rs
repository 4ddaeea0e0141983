//! Simulated network latency table.
//!
//! There is no real I/O anywhere in the system; the product still shows a
//! spinner for a fixed interval per flow. The core only reports durations,
//! the host decides whether to honor them. Fixed timers, no cancellation,
//! no retry.

use std::time::Duration;

/// Flows that present a simulated network delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulatedCall {
    SignIn,
    SignUp,
    SocialSignIn,
    AssessmentSubmit,
    ReportGeneration,
    AccountDeletion,
}

impl SimulatedCall {
    /// Slug used at the FFI boundary.
    pub fn slug(&self) -> &'static str {
        match self {
            SimulatedCall::SignIn => "sign_in",
            SimulatedCall::SignUp => "sign_up",
            SimulatedCall::SocialSignIn => "social_sign_in",
            SimulatedCall::AssessmentSubmit => "assessment_submit",
            SimulatedCall::ReportGeneration => "report_generation",
            SimulatedCall::AccountDeletion => "account_deletion",
        }
    }

    /// Parse a slug, e.g. from the FFI boundary.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "sign_in" => Some(SimulatedCall::SignIn),
            "sign_up" => Some(SimulatedCall::SignUp),
            "social_sign_in" => Some(SimulatedCall::SocialSignIn),
            "assessment_submit" => Some(SimulatedCall::AssessmentSubmit),
            "report_generation" => Some(SimulatedCall::ReportGeneration),
            "account_deletion" => Some(SimulatedCall::AccountDeletion),
            _ => None,
        }
    }

    /// Fixed delay for this flow.
    pub fn delay(&self) -> Duration {
        let ms = match self {
            SimulatedCall::SignIn => 1500,
            SimulatedCall::SignUp => 2000,
            SimulatedCall::SocialSignIn => 1500,
            SimulatedCall::AssessmentSubmit => 2500,
            SimulatedCall::ReportGeneration => 2000,
            SimulatedCall::AccountDeletion => 1500,
        };
        Duration::from_millis(ms)
    }
}
