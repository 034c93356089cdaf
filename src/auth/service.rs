use std::collections::HashMap;

use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::auth::validation::{validate_email, validate_password};
use crate::error::{AuthError, ValidationError};
use crate::user::User;
use crate::Result;

/// Registration, login, and session bookkeeping over two in-memory maps.
///
/// The service is the sole owner of every [`User`]; sessions reference users
/// by email key rather than holding them. All methods are synchronous and
/// mutate through `&mut self`; callers that need shared access must supply
/// their own locking.
#[derive(Debug, Default)]
pub struct AuthService {
    users: HashMap<String, User>,
    sessions: HashMap<String, String>,
}

impl AuthService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new user and returns a borrow of the stored record, so the
    /// caller can activate it in place.
    ///
    /// Checks run in a fixed order: email format, then password strength,
    /// then uniqueness. New users start inactive.
    pub fn register(
        &mut self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<&mut User> {
        if !validate_email(email) {
            warn!(email, "registration rejected: bad email format");
            return Err(ValidationError::InvalidEmail.into());
        }

        if !validate_password(password) {
            warn!(email, "registration rejected: weak password");
            return Err(ValidationError::WeakPassword.into());
        }

        if self.users.contains_key(email) {
            warn!(email, "registration rejected: email taken");
            return Err(ValidationError::EmailAlreadyRegistered.into());
        }

        info!(email, "user registered");
        let user = User::new(email.to_string(), password.to_string(), name.map(String::from));
        Ok(self.users.entry(email.to_string()).or_insert(user))
    }

    /// Validates credentials and mints a session token.
    ///
    /// Unknown email and wrong password produce the same error; only the
    /// inactive-account case is distinguished. Logging in again with the same
    /// credentials overwrites the same session entry.
    pub fn login(&mut self, email: &str, password: &str) -> Result<String> {
        let user = match self.users.get(email) {
            Some(user) => user,
            None => {
                warn!(email, "login failed: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if user.password != password {
            warn!(email, "login failed: wrong password");
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            warn!(email, "login failed: account not activated");
            return Err(AuthError::AccountNotActivated.into());
        }

        // Deterministic token, no expiry. A production system would mint a
        // random token instead.
        let token = session_token(email, password);
        self.sessions.insert(token.clone(), email.to_string());
        info!(email, "login successful");
        Ok(token)
    }

    /// Removes the session if present. Unknown tokens are a silent no-op.
    pub fn logout(&mut self, token: &str) {
        if self.sessions.remove(token).is_some() {
            info!("session logged out");
        }
    }

    /// Resolves a session token to its user. Returns `None` for unknown or
    /// logged-out tokens.
    pub fn get_user_by_token(&self, token: &str) -> Option<&User> {
        self.sessions
            .get(token)
            .and_then(|email| self.users.get(email))
    }

    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    /// Mutable access to a stored user, for activation and role changes after
    /// the `register` borrow has ended.
    pub fn user_mut(&mut self, email: &str) -> Option<&mut User> {
        self.users.get_mut(email)
    }
}

fn session_token(email: &str, password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    format!("session_{}_{}", email, hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_register_stores_inactive_user() {
        let mut svc = AuthService::new();
        let user = svc.register("alice@example.com", "Password123", None).unwrap();
        assert!(!user.is_active);
        assert_eq!(user.name, "alice");
        assert!(svc.user("alice@example.com").is_some());
    }

    #[test]
    fn test_register_error_order() {
        let mut svc = AuthService::new();
        // Both fields invalid: the email check fires first.
        assert!(matches!(
            svc.register("bad-email", "short", None).unwrap_err(),
            Error::Validation(ValidationError::InvalidEmail)
        ));

        // Valid email, weak password: password check fires next.
        assert!(matches!(
            svc.register("a@b.com", "short", None).unwrap_err(),
            Error::Validation(ValidationError::WeakPassword)
        ));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let mut svc = AuthService::new();
        svc.register("a@b.com", "Password123", None).unwrap();
        assert!(matches!(
            svc.register("a@b.com", "Different9X", None).unwrap_err(),
            Error::Validation(ValidationError::EmailAlreadyRegistered)
        ));
    }

    #[test]
    fn test_login_requires_activation() {
        let mut svc = AuthService::new();
        svc.register("a@b.com", "Password123", None).unwrap();
        assert!(matches!(
            svc.login("a@b.com", "Password123").unwrap_err(),
            Error::Auth(AuthError::AccountNotActivated)
        ));

        svc.user_mut("a@b.com").unwrap().activate();
        let token = svc.login("a@b.com", "Password123").unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_login_bad_credentials_indistinguishable() {
        let mut svc = AuthService::new();
        svc.register("a@b.com", "Password123", None).unwrap();
        svc.user_mut("a@b.com").unwrap().activate();

        let wrong_password = svc.login("a@b.com", "WrongPass9").unwrap_err();
        let unknown_email = svc.login("nobody@b.com", "Password123").unwrap_err();
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(
            wrong_password,
            Error::Auth(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_relogin_is_deterministic() {
        let mut svc = AuthService::new();
        svc.register("a@b.com", "Password123", None).unwrap();
        svc.user_mut("a@b.com").unwrap().activate();

        let first = svc.login("a@b.com", "Password123").unwrap();
        let second = svc.login("a@b.com", "Password123").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_logout_unknown_token_is_noop() {
        let mut svc = AuthService::new();
        svc.logout("no-such-token");
        assert!(svc.get_user_by_token("no-such-token").is_none());
    }
}
