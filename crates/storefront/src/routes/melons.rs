//! Melon catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use ubermelon_core::Melon;

use crate::error::Result;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::routes::MessageQuery;
use crate::state::AppState;

/// Melon listing template.
#[derive(Template, WebTemplate)]
#[template(path = "melons/index.html")]
pub struct MelonsIndexTemplate {
    pub current_email: Option<String>,
    pub melons: Vec<Melon>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Melon detail template.
#[derive(Template, WebTemplate)]
#[template(path = "melons/show.html")]
pub struct MelonShowTemplate {
    pub current_email: Option<String>,
    pub melon: Melon,
}

/// Resolve an error code from a redirect into display text.
fn error_message(code: &str) -> String {
    match code {
        "empty_cart" => "No items in cart!",
        "checkout_unimplemented" => "Sorry! Checkout will be implemented in a future version.",
        _ => "Something went wrong.",
    }
    .to_string()
}

/// Resolve a success code from a redirect into display text.
fn success_message(code: &str) -> String {
    match code {
        "logged_in" => "Log-in successful!",
        "logged_out" => "Logged out.",
        _ => "Done.",
    }
    .to_string()
}

/// Display all melons in catalog file order.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(email): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    MelonsIndexTemplate {
        current_email: email.map(|e| e.to_string()),
        melons: state.catalog().get_all().cloned().collect(),
        error: query.error.as_deref().map(error_message),
        success: query.success.as_deref().map(success_message),
    }
}

/// Display a single melon's detail page.
///
/// Responds 404 for ids that are unknown or not numeric at all.
#[instrument(skip(state, email))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(email): OptionalAuth,
    Path(id): Path<String>,
) -> Result<MelonShowTemplate> {
    let melon = state.catalog().get_by_param(&id)?.clone();

    Ok(MelonShowTemplate {
        current_email: email.map(|e| e.to_string()),
        melon,
    })
}
