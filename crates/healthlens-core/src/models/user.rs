//! User account models.

use serde::{Deserialize, Serialize};

/// A locally-constructed user account.
///
/// There is no credential verification anywhere in the system; accounts are
/// built by the mock authentication flows and persisted as a single record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserAccount {
    /// Local UUID, generated at construction
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address as entered
    pub email: String,
    /// Join timestamp
    pub joined_at: String,
    /// Social provider, if the account came from a social sign-in
    pub provider: Option<String>,
}

impl UserAccount {
    /// Create a new account with the given name and email.
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            joined_at: chrono::Utc::now().to_rfc3339(),
            provider: None,
        }
    }

    /// Create an account from a social provider sign-in.
    pub fn from_provider(provider: &str) -> Self {
        let mut account = Self::new(
            format!("User from {}", provider),
            format!("user@{}.com", provider),
        );
        account.provider = Some(provider.to_string());
        account
    }

    /// First letter of the display name, uppercased, for the avatar badge.
    pub fn avatar_initial(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_uppercase())
    }
}
