//! # Session State
//!
//! Tracks who is signed in to this storefront instance.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Session Lifecycle                                 │
//! │                                                                         │
//! │   (none) ──login(credentials)──────► Session { role from account }     │
//! │   (none) ──register(form)──────────► Session { role: Customer }        │
//! │   Session ──login / register───────► replaced; SignIn.previous holds   │
//! │                                        the old one so callers can reset │
//! │                                        per-user state (the cart)        │
//! │   Session ──logout()───────────────► (none)                            │
//! │                                                                         │
//! │  A failed login or registration leaves the current session as it was. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Registered accounts are not persisted; registration only validates the
//! form and signs the customer in for the current run.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use breadstore_core::auth::RegistrationForm;
use breadstore_core::validation::validate_registration;
use breadstore_core::{Authenticator, CoreResult, Credentials, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub started_at: DateTime<Utc>,
}

impl Session {
    fn start(email: &str, role: Role) -> Self {
        Session {
            id: Uuid::new_v4(),
            email: email.trim().to_string(),
            role,
            started_at: Utc::now(),
        }
    }
}

/// Outcome of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignIn {
    pub session: Session,
    /// The session this one replaced, if any.
    pub previous: Option<Session>,
}

impl SignIn {
    /// True unless the same account was already signed in.
    pub fn is_new_user(&self) -> bool {
        !matches!(&self.previous, Some(previous) if previous.email == self.session.email)
    }
}

/// Current session plus the authenticator used to open one.
#[derive(Clone)]
pub struct SessionState {
    authenticator: Arc<dyn Authenticator>,
    current: Arc<Mutex<Option<Session>>>,
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("current", &*self.lock())
            .finish_non_exhaustive()
    }
}

impl SessionState {
    pub fn new(authenticator: Arc<dyn Authenticator>) -> Self {
        SessionState {
            authenticator,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Signs in with email and password.
    ///
    /// ## Errors
    /// - `Validation(Required)` when a field is blank
    /// - `InvalidCredentials` when no account matches
    pub fn login(&self, credentials: &Credentials) -> CoreResult<SignIn> {
        let role = match self.authenticator.authenticate(credentials) {
            Ok(role) => role,
            Err(err) => {
                warn!(email = %credentials.email, error = %err, "Login rejected");
                return Err(err);
            }
        };

        let session = Session::start(&credentials.email, role);
        info!(email = %session.email, role = %session.role, "Signed in");
        Ok(self.replace(session))
    }

    /// Validates a registration form and signs the new customer in.
    pub fn register(&self, form: &RegistrationForm) -> CoreResult<SignIn> {
        validate_registration(form)?;

        let session = Session::start(&form.email, Role::Customer);
        info!(email = %session.email, "Registered new customer");
        Ok(self.replace(session))
    }

    /// Ends the current session, returning it if there was one.
    pub fn logout(&self) -> Option<Session> {
        let ended = self.lock().take();
        if let Some(session) = &ended {
            info!(email = %session.email, "Signed out");
        }
        ended
    }

    pub fn current(&self) -> Option<Session> {
        self.lock().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock().is_some()
    }

    fn replace(&self, session: Session) -> SignIn {
        let previous = self.lock().replace(session.clone());
        SignIn { session, previous }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breadstore_core::{CoreError, StaticAuthenticator, ValidationError};

    fn session_state() -> SessionState {
        SessionState::new(Arc::new(StaticAuthenticator::default()))
    }

    fn form(password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            full_name: "Siti Rahma".to_string(),
            email: "siti@example.com".to_string(),
            phone: "0812-3456-7890".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_login_admin_and_customer() {
        let state = session_state();

        let admin = state
            .login(&Credentials::new("admin@breadstore.id", "admin123"))
            .unwrap();
        assert_eq!(admin.session.role, Role::Admin);
        assert!(admin.previous.is_none());
        assert!(admin.is_new_user());

        let customer = state
            .login(&Credentials::new("user@breadstore.id", "user123"))
            .unwrap();
        assert_eq!(customer.session.role, Role::Customer);
        assert_eq!(customer.previous, Some(admin.session));
        assert!(customer.is_new_user());
        assert_eq!(state.current(), Some(customer.session));
    }

    #[test]
    fn test_same_account_login_is_not_new_user() {
        let state = session_state();
        let credentials = Credentials::new("user@breadstore.id", "user123");

        state.login(&credentials).unwrap();
        let again = state.login(&credentials).unwrap();
        assert!(!again.is_new_user());
    }

    #[test]
    fn test_failed_login_keeps_session() {
        let state = session_state();
        let before = state
            .login(&Credentials::new("user@breadstore.id", "user123"))
            .unwrap()
            .session;

        let err = state
            .login(&Credentials::new("user@breadstore.id", "wrong"))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidCredentials));
        assert_eq!(state.current(), Some(before));
    }

    #[test]
    fn test_blank_login_is_validation_error() {
        let state = session_state();
        let err = state.login(&Credentials::new("", "user123")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Required { .. })
        ));
        assert!(!state.is_signed_in());
    }

    #[test]
    fn test_register_signs_in_customer() {
        let state = session_state();
        let session = state.register(&form("rahasia", "rahasia")).unwrap().session;
        assert_eq!(session.role, Role::Customer);
        assert_eq!(session.email, "siti@example.com");
        assert!(state.is_signed_in());
    }

    #[test]
    fn test_register_password_mismatch() {
        let state = session_state();
        let err = state.register(&form("rahasia", "rahasia2")).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::Mismatch { .. })
        ));
        assert!(!state.is_signed_in());
    }

    #[test]
    fn test_logout() {
        let state = session_state();
        assert!(state.logout().is_none());

        state
            .login(&Credentials::new("user@breadstore.id", "user123"))
            .unwrap();
        assert!(state.logout().is_some());
        assert!(state.current().is_none());
    }
}
