//! # Session Commands
//!
//! Login, registration and logout.
//!
//! Where the front end goes next depends on the returned role: admins land
//! on the dashboard, customers on the product list.
//!
//! The cart belongs to whoever is signed in: it is emptied when a different
//! account signs in and on logout.

use breadstore_core::auth::RegistrationForm;
use breadstore_core::Credentials;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, Session, SessionState, SignIn};

/// Signs in with email and password.
///
/// ## Errors
/// - `VALIDATION_ERROR` when a field is blank
/// - `INVALID_CREDENTIALS` when no account matches
pub fn login(
    session: &SessionState,
    cart: &CartState,
    credentials: &Credentials,
) -> Result<Session, ApiError> {
    debug!(email = %credentials.email, "login command");
    Ok(start_session(cart, session.login(credentials)?))
}

/// Validates the registration form and signs the new customer in.
pub fn register(
    session: &SessionState,
    cart: &CartState,
    form: &RegistrationForm,
) -> Result<Session, ApiError> {
    debug!(email = %form.email, "register command");
    Ok(start_session(cart, session.register(form)?))
}

fn start_session(cart: &CartState, sign_in: SignIn) -> Session {
    if sign_in.is_new_user() {
        cart.clear();
    }
    sign_in.session
}

/// Ends the session and empties the cart.
///
/// Returns the ended session, or `None` if nobody was signed in.
pub fn logout(session: &SessionState, cart: &CartState) -> Option<Session> {
    debug!("logout command");
    let ended = session.logout();
    cart.clear();
    ended
}

/// The signed-in session, if any.
pub fn current_session(session: &SessionState) -> Option<Session> {
    debug!("current_session command");
    session.current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::CatalogState;
    use breadstore_core::{Role, StaticAuthenticator};
    use std::sync::Arc;

    fn states() -> (SessionState, CartState) {
        (
            SessionState::new(Arc::new(StaticAuthenticator::default())),
            CartState::new(CatalogState::default().shared()),
        )
    }

    #[test]
    fn test_login_error_codes() {
        let (session, cart) = states();

        let err = login(&session, &cart, &Credentials::new("user@breadstore.id", "nope"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);

        let err = login(&session, &cart, &Credentials::new("user@breadstore.id", "  "))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_register_from_json() {
        let (session, cart) = states();
        let form: RegistrationForm = serde_json::from_value(serde_json::json!({
            "fullName": "Budi Santoso",
            "email": "budi@example.com",
            "phone": "081234567890",
            "password": "roti123",
            "confirmPassword": "roti123"
        }))
        .unwrap();

        let created = register(&session, &cart, &form).unwrap();
        assert_eq!(created.role, Role::Customer);
        assert_eq!(current_session(&session), Some(created));
    }

    #[test]
    fn test_register_invalid_email() {
        let (session, cart) = states();
        let form: RegistrationForm = serde_json::from_value(serde_json::json!({
            "fullName": "Budi Santoso",
            "email": "budi.example.com",
            "phone": "081234567890",
            "password": "roti123",
            "confirmPassword": "roti123"
        }))
        .unwrap();

        let err = register(&session, &cart, &form).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(current_session(&session).is_none());
    }

    #[test]
    fn test_logout_resets_cart() {
        let (session, cart) = states();
        login(&session, &cart, &Credentials::new("user@breadstore.id", "user123")).unwrap();
        cart.add("1", 2).unwrap();

        let ended = logout(&session, &cart).unwrap();
        assert_eq!(ended.email, "user@breadstore.id");
        assert!(current_session(&session).is_none());
        assert!(cart.snapshot().items.is_empty());
    }

    #[test]
    fn test_switching_user_starts_with_empty_cart() {
        let (session, cart) = states();
        login(&session, &cart, &Credentials::new("admin@breadstore.id", "admin123")).unwrap();
        cart.add("1", 3).unwrap();

        let next = login(&session, &cart, &Credentials::new("user@breadstore.id", "user123"))
            .unwrap();
        assert_eq!(next.role, Role::Customer);
        assert_eq!(cart.snapshot().totals.item_count, 0);
    }

    #[test]
    fn test_same_user_login_keeps_cart() {
        let (session, cart) = states();
        let credentials = Credentials::new("user@breadstore.id", "user123");
        login(&session, &cart, &credentials).unwrap();
        cart.add("2", 1).unwrap();

        login(&session, &cart, &credentials).unwrap();
        assert_eq!(cart.snapshot().totals.item_count, 1);
    }

    #[test]
    fn test_failed_login_keeps_cart() {
        let (session, cart) = states();
        login(&session, &cart, &Credentials::new("user@breadstore.id", "user123")).unwrap();
        cart.add("2", 1).unwrap();

        assert!(login(&session, &cart, &Credentials::new("admin@breadstore.id", "x")).is_err());
        assert_eq!(cart.snapshot().totals.item_count, 1);
    }
}
