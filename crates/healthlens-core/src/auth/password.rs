//! Password strength meter.
//!
//! Five criteria worth 20 points each: length of at least 8, a lowercase
//! letter, an uppercase letter, a digit, and a symbol.

use serde::{Deserialize, Serialize};

/// Strength label at fixed score cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Meter fill color used by the sign-up form.
    pub fn hex_color(&self) -> &'static str {
        match self {
            StrengthLabel::Strong => "#81C784",
            StrengthLabel::Good => "#FFEE58",
            StrengthLabel::Fair => "#FFB74D",
            StrengthLabel::Weak | StrengthLabel::VeryWeak => "#FF7043",
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::VeryWeak => write!(f, "Very Weak"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Fair => write!(f, "Fair"),
            StrengthLabel::Good => write!(f, "Good"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Scored password strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// 0..=100 in steps of 20
    pub score: u8,
    pub label: StrengthLabel,
}

/// Score a candidate password.
pub fn password_strength(password: &str) -> PasswordStrength {
    let mut score = 0u8;

    if password.chars().count() >= 8 {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 20;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 20;
    }

    let label = if score >= 80 {
        StrengthLabel::Strong
    } else if score >= 60 {
        StrengthLabel::Good
    } else if score >= 40 {
        StrengthLabel::Fair
    } else if score >= 20 {
        StrengthLabel::Weak
    } else {
        StrengthLabel::VeryWeak
    };

    PasswordStrength { score, label }
}
