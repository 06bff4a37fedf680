//! Authentication route handlers.
//!
//! Login checks the submitted credentials against the customer store and
//! records the customer's email in the session. Failures redirect back to the
//! login page with a code naming which check failed; the unknown-email and
//! wrong-password cases are deliberately distinguishable.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::{OptionalAuth, clear_current_customer, set_current_customer};
use crate::routes::MessageQuery;
use crate::services::auth::{AuthError, authenticate};
use crate::state::AppState;

/// Login form data.
#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub current_email: Option<String>,
    pub error: Option<String>,
}

/// Resolve a login error code from a redirect into display text.
fn error_message(code: &str) -> String {
    match code {
        "unknown_email" => "No customer with that email found.",
        "bad_password" => "Incorrect password.",
        _ => "Log-in failed.",
    }
    .to_string()
}

/// Display the login page.
#[instrument(skip_all)]
pub async fn login_page(
    OptionalAuth(email): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    LoginTemplate {
        current_email: email.map(|e| e.to_string()),
        error: query.error.as_deref().map(error_message),
    }
}

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    match authenticate(state.customers(), &form.email, &form.password) {
        Ok(customer) => {
            set_current_customer(&session, &customer.email).await?;
            tracing::info!(customer = %customer.email, "customer logged in");
            Ok(Redirect::to("/melons?success=logged_in"))
        }
        Err(AuthError::UnknownEmail(_)) => {
            tracing::warn!("login failed: unknown email");
            Ok(Redirect::to("/login?error=unknown_email"))
        }
        Err(AuthError::BadPassword(_)) => {
            tracing::warn!("login failed: wrong password");
            Ok(Redirect::to("/login?error=bad_password"))
        }
    }
}

/// Handle logout.
///
/// Responds 404 when nobody is logged in; an anonymous visitor has no login
/// to end.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    match clear_current_customer(&session).await? {
        Some(email) => {
            tracing::info!(customer = %email, "customer logged out");
            Ok(Redirect::to("/melons?success=logged_out"))
        }
        None => Err(AppError::NotFound("nobody is logged in".to_string())),
    }
}
