//! Login identity plumbing and extractors.
//!
//! The authenticated identity is the customer's email, stored in the session
//! under [`session_keys::LOGGED_IN_CUSTOMER_EMAIL`]. Absent means anonymous.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use ubermelon_core::Email;

use crate::models::session_keys;

/// Extractor that optionally gets the logged-in customer's email.
///
/// Never rejects the request; anonymous visitors yield `None`. Used by page
/// handlers so the navigation can show who is logged in.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(OptionalAuth(email): OptionalAuth) -> impl IntoResponse {
///     match email {
///         Some(email) => format!("Hello, {email}!"),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
pub struct OptionalAuth(pub Option<Email>);

impl<S> FromRequestParts<S> for OptionalAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The session is put in extensions by SessionManagerLayer.
        let email = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<Email>(session_keys::LOGGED_IN_CUSTOMER_EMAIL)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(email))
    }
}

/// Record the customer's email as the session's authenticated identity.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_current_customer(
    session: &Session,
    email: &Email,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::LOGGED_IN_CUSTOMER_EMAIL, email)
        .await
}

/// Read the authenticated identity, `None` for anonymous visitors.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn current_customer_email(
    session: &Session,
) -> Result<Option<Email>, tower_sessions::session::Error> {
    session
        .get::<Email>(session_keys::LOGGED_IN_CUSTOMER_EMAIL)
        .await
}

/// Remove the authenticated identity, returning who was logged in.
///
/// `Ok(None)` means nobody was logged in; the logout route turns that into a
/// not-found response rather than silently succeeding.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_current_customer(
    session: &Session,
) -> Result<Option<Email>, tower_sessions::session::Error> {
    session
        .remove::<Email>(session_keys::LOGGED_IN_CUSTOMER_EMAIL)
        .await
}
