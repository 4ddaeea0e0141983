//! Mock authentication flows.
//!
//! No credential verification takes place anywhere: sign-in fabricates a
//! fixed account for the given email, sign-up accepts anything that passes
//! the two form checks, and social sign-in derives an account from the
//! provider name. What persistence there is goes through the `user` record.

mod password;

pub use password::*;

use thiserror::Error;

use crate::db::{Database, DbError};
use crate::models::UserAccount;

/// Display name attached to every plain sign-in.
const SIGN_IN_DISPLAY_NAME: &str = "John Doe";

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("terms of service not accepted")]
    TermsNotAccepted,

    #[error("storage error: {0}")]
    Storage(#[from] DbError),
}

impl AuthError {
    /// Message shown to the user. Storage failures are never differentiated
    /// by cause; they all degrade to a generic retry message.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::PasswordMismatch => "Passwords do not match.",
            AuthError::TermsNotAccepted => {
                "Please accept the Terms of Service and Privacy Policy."
            }
            AuthError::Storage(_) => "Registration failed. Please try again.",
        }
    }
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Mock authenticator over the local store.
pub struct Authenticator<'a> {
    db: &'a Database,
}

impl<'a> Authenticator<'a> {
    /// Create a new authenticator.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Sign in with email and password.
    ///
    /// The password is accepted unchecked. The account is persisted only when
    /// `remember` is set.
    pub fn sign_in(&self, email: &str, _password: &str, remember: bool) -> AuthResult<UserAccount> {
        let account = UserAccount::new(SIGN_IN_DISPLAY_NAME.to_string(), email.to_string());

        if remember {
            self.db.save_user(&account)?;
        }

        tracing::info!("signed in as {}", account.email);
        Ok(account)
    }

    /// Create an account. Fails when the passwords differ or the terms were
    /// not accepted; always persists on success.
    pub fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        accepted_terms: bool,
    ) -> AuthResult<UserAccount> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if !accepted_terms {
            return Err(AuthError::TermsNotAccepted);
        }

        let account = UserAccount::new(name.to_string(), email.to_string());
        self.db.save_user(&account)?;

        tracing::info!("registered {}", account.email);
        Ok(account)
    }

    /// Sign in through a social provider. Always persists.
    pub fn sign_in_with(&self, provider: &str) -> AuthResult<UserAccount> {
        let account = UserAccount::from_provider(provider);
        self.db.save_user(&account)?;

        tracing::info!("signed in via {}", provider);
        Ok(account)
    }

    /// Sign out: remove the persisted user record.
    pub fn sign_out(&self) -> AuthResult<()> {
        self.db.clear_user()?;
        Ok(())
    }

    /// Restore a remembered session from storage.
    ///
    /// A corrupt user record has already been discarded by the store layer by
    /// the time this returns; it reads as signed-out.
    pub fn restore_session(&self) -> AuthResult<Option<UserAccount>> {
        Ok(self.db.load_user()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    #[test]
    fn test_sign_in_without_remember() {
        let db = setup_db();
        let auth = Authenticator::new(&db);

        let account = auth.sign_in("jane@example.com", "hunter2", false).unwrap();
        assert_eq!(account.name, "John Doe");
        assert_eq!(account.email, "jane@example.com");

        // Nothing persisted
        assert!(auth.restore_session().unwrap().is_none());
    }

    #[test]
    fn test_sign_in_with_remember() {
        let db = setup_db();
        let auth = Authenticator::new(&db);

        let account = auth.sign_in("jane@example.com", "hunter2", true).unwrap();
        let restored = auth.restore_session().unwrap().unwrap();
        assert_eq!(restored, account);
    }

    #[test]
    fn test_sign_up_password_mismatch() {
        let db = setup_db();
        let auth = Authenticator::new(&db);

        let err = auth
            .sign_up("Jane", "jane@example.com", "abc", "abd", true)
            .unwrap_err();
        assert!(matches!(err, AuthError::PasswordMismatch));
        assert_eq!(err.user_message(), "Passwords do not match.");
    }

    #[test]
    fn test_sign_up_requires_terms() {
        let db = setup_db();
        let auth = Authenticator::new(&db);

        let err = auth
            .sign_up("Jane", "jane@example.com", "abc", "abc", false)
            .unwrap_err();
        assert!(matches!(err, AuthError::TermsNotAccepted));
    }

    #[test]
    fn test_sign_up_persists() {
        let db = setup_db();
        let auth = Authenticator::new(&db);

        let account = auth
            .sign_up("Jane", "jane@example.com", "abc", "abc", true)
            .unwrap();
        assert_eq!(account.name, "Jane");

        let restored = auth.restore_session().unwrap().unwrap();
        assert_eq!(restored.email, "jane@example.com");
    }

    #[test]
    fn test_social_sign_in() {
        let db = setup_db();
        let auth = Authenticator::new(&db);

        let account = auth.sign_in_with("google").unwrap();
        assert_eq!(account.provider, Some("google".into()));
        assert!(auth.restore_session().unwrap().is_some());
    }

    #[test]
    fn test_sign_out_clears_session() {
        let db = setup_db();
        let auth = Authenticator::new(&db);

        auth.sign_in("jane@example.com", "pw", true).unwrap();
        auth.sign_out().unwrap();
        assert!(auth.restore_session().unwrap().is_none());
    }
}
