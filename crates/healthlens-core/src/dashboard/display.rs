//! Display synchronizer boundary.
//!
//! The core prepares exactly three slot updates; how they are rendered is the
//! view layer's business, reached through [`RiskDisplay`].

use crate::models::{RiskCategory, RiskProfile};

/// One prepared update for a risk display slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskSlotUpdate {
    pub category: RiskCategory,
    /// Slot heading, e.g. `Diabetes Risk`
    pub label: String,
    /// Slot value, e.g. `High (85%)`
    pub text: String,
    /// Style class for the value, e.g. `risk-high`
    pub css_class: String,
}

/// Sink the view layer implements to receive slot updates.
pub trait RiskDisplay {
    fn update_slot(&mut self, slot: &RiskSlotUpdate);
}

/// Prepare the three slot updates for a risk profile, in display order.
pub fn slot_updates(profile: &RiskProfile) -> [RiskSlotUpdate; 3] {
    profile.scores().map(|score| RiskSlotUpdate {
        category: score.category,
        label: score.category.display_name().to_string(),
        text: score.slot_text(),
        css_class: score.level.css_class().to_string(),
    })
}

/// Push a risk profile into a display.
pub fn sync_display<D: RiskDisplay>(profile: &RiskProfile, display: &mut D) {
    for slot in &slot_updates(profile) {
        display.update_slot(slot);
    }
}
