//! # Authentication
//!
//! Decides which role a pair of credentials belongs to.
//!
//! ## Capability, Not Inline Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Login form ──► SessionState::login ──► dyn Authenticator ──► Role      │
//! │                                              │                          │
//! │                                  ┌───────────┴───────────┐              │
//! │                                  ▼                       ▼              │
//! │                        StaticAuthenticator        (future: remote)      │
//! │                        configured accounts                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The storefront only ever sees a [`Role`]. Swapping the fixed account list
//! for a real identity service means providing another `Authenticator`.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_credentials;

// =============================================================================
// Role
// =============================================================================

/// Access level of an authenticated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    /// Store staff; lands on the admin dashboard.
    Admin,

    /// Shopper; lands on the product list.
    Customer,
}

impl Role {
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Customer => write!(f, "customer"),
        }
    }
}

// =============================================================================
// Credentials & Forms
// =============================================================================

/// Email/password pair submitted from the login screen.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keeps passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fields of the registration screen.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Authenticator
// =============================================================================

/// Maps credentials to a role.
///
/// ## Contract
/// - Blank fields fail with `CoreError::Validation(Required)`
/// - Unknown or mismatched pairs fail with `CoreError::InvalidCredentials`
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> CoreResult<Role>;
}

/// A configured login account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Account {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Account {
            email: email.into(),
            password: password.into(),
            role,
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("email", &self.email)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Authenticator backed by a fixed, in-memory account list.
///
/// Emails and passwords are compared exactly.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    accounts: Vec<Account>,
}

impl StaticAuthenticator {
    pub fn new(accounts: Vec<Account>) -> Self {
        StaticAuthenticator { accounts }
    }

    /// The two built-in accounts: one admin, one customer.
    pub fn default_accounts() -> Vec<Account> {
        vec![
            Account::new("admin@breadstore.id", "admin123", Role::Admin),
            Account::new("user@breadstore.id", "user123", Role::Customer),
        ]
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

impl Default for StaticAuthenticator {
    fn default() -> Self {
        StaticAuthenticator::new(Self::default_accounts())
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> CoreResult<Role> {
        validate_credentials(credentials)?;

        self.accounts
            .iter()
            .find(|a| a.email == credentials.email && a.password == credentials.password)
            .map(|a| a.role)
            .ok_or(CoreError::InvalidCredentials)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_default_accounts_map_to_roles() {
        let auth = StaticAuthenticator::default();

        let admin = auth
            .authenticate(&Credentials::new("admin@breadstore.id", "admin123"))
            .unwrap();
        assert_eq!(admin, Role::Admin);
        assert!(admin.is_admin());

        let customer = auth
            .authenticate(&Credentials::new("user@breadstore.id", "user123"))
            .unwrap();
        assert_eq!(customer, Role::Customer);
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let auth = StaticAuthenticator::default();
        let result = auth.authenticate(&Credentials::new("admin@breadstore.id", "user123"));
        assert!(matches!(result, Err(CoreError::InvalidCredentials)));
    }

    #[test]
    fn test_comparison_is_exact() {
        let auth = StaticAuthenticator::default();
        let result = auth.authenticate(&Credentials::new("Admin@breadstore.id", "admin123"));
        assert!(matches!(result, Err(CoreError::InvalidCredentials)));
    }

    #[test]
    fn test_blank_fields_are_validation_errors() {
        let auth = StaticAuthenticator::default();
        let result = auth.authenticate(&Credentials::new("", "admin123"));
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Required { ref field })) if field == "email"
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let creds = Credentials::new("user@breadstore.id", "user123");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("user123"));

        let account = Account::new("user@breadstore.id", "user123", Role::Customer);
        assert!(!format!("{account:?}").contains("user123"));
    }

    #[test]
    fn test_custom_accounts() {
        let auth = StaticAuthenticator::new(vec![Account::new(
            "kasir@breadstore.id",
            "kasir-01",
            Role::Admin,
        )]);
        assert_eq!(auth.accounts().len(), 1);
        assert!(auth
            .authenticate(&Credentials::new("user@breadstore.id", "user123"))
            .is_err());
    }
}
