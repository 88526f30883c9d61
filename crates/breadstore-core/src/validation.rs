//! # Validation Module
//!
//! Input validation utilities for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  └── Immediate feedback ("Email wajib diisi")                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command (Rust)                                    │
//! │  └── THIS MODULE: field and business rule validation                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart / Authenticator                                         │
//! │  └── Invariants (one line per product, quantity caps)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use breadstore_core::validation::validate_email;
//!
//! assert!(validate_email("pembeli@breadstore.id").is_ok());
//! assert!(validate_email("pembeli@").is_err());
//! ```

use crate::auth::{Credentials, RegistrationForm};
use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// String Validators
// =============================================================================

/// Rejects blank (empty or whitespace-only) values.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be blank
/// - Exactly one `@` with text on both sides, no whitespace
/// - The domain part contains a dot
///
/// ## Example
/// ```rust
/// use breadstore_core::validation::validate_email;
///
/// assert!(validate_email("admin@breadstore.id").is_ok());
/// assert!(validate_email("admin@").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    validate_required("email", email)?;
    let email = email.trim();

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain spaces"));
    }

    let (local, domain) = email
        .split_once('@')
        .ok_or_else(|| invalid("must contain '@'"))?;

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid("must look like name@domain"));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("domain must contain a dot"));
    }

    Ok(())
}

/// Validates a new password.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    validate_required("password", password)?;

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::TooShort {
            field: "password".to_string(),
            min: MIN_PASSWORD_LEN,
        });
    }

    Ok(())
}

/// Validates a phone number: digits, optionally a leading `+`, and the
/// separators people type (spaces, dashes).
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_required("phone", phone)?;

    let phone = phone.trim();
    let body = phone.strip_prefix('+').unwrap_or(phone);
    let digits = body.chars().filter(char::is_ascii_digit).count();

    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    if !(8..=15).contains(&digits) {
        return Err(ValidationError::OutOfRange {
            field: "phone digits".to_string(),
            min: 8,
            max: 15,
        });
    }

    Ok(())
}

// =============================================================================
// Form Validators
// =============================================================================

/// Checks that both login fields are filled in.
///
/// Whether they match an account is the authenticator's decision.
pub fn validate_credentials(credentials: &Credentials) -> ValidationResult<()> {
    validate_required("email", &credentials.email)?;
    validate_required("password", &credentials.password)?;
    Ok(())
}

/// Validates the registration form, field by field in display order.
///
/// ## Example
/// ```rust
/// use breadstore_core::auth::RegistrationForm;
/// use breadstore_core::validation::validate_registration;
///
/// let form = RegistrationForm {
///     full_name: "Sari Wulandari".to_string(),
///     email: "sari@example.com".to_string(),
///     phone: "0812-3456-7890".to_string(),
///     password: "rahasia123".to_string(),
///     confirm_password: "rahasia123".to_string(),
/// };
/// assert!(validate_registration(&form).is_ok());
/// ```
pub fn validate_registration(form: &RegistrationForm) -> ValidationResult<()> {
    validate_required("full_name", &form.full_name)?;
    if form.full_name.trim().chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "full_name".to_string(),
            max: 100,
        });
    }

    validate_email(&form.email)?;
    validate_phone(&form.phone)?;
    validate_password(&form.password)?;

    if form.password != form.confirm_password {
        return Err(ValidationError::Mismatch {
            field: "confirm_password".to_string(),
            other: "password".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
