//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::middleware::OptionalAuth;
use crate::state::AppState;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Logged-in customer's email for the navigation bar.
    pub current_email: Option<String>,
    /// Number of melon varieties in the catalog.
    pub melon_count: usize,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(email): OptionalAuth,
) -> impl IntoResponse {
    HomeTemplate {
        current_email: email.map(|e| e.to_string()),
        melon_count: state.catalog().len(),
    }
}
