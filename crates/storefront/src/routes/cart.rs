//! Cart route handlers.
//!
//! The cart itself lives in the session; handlers delegate to
//! [`crate::services::cart`] and only decide how outcomes render. An empty
//! cart is not an error page, it redirects to the melon listing with a
//! warning.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use ubermelon_core::{MelonId, Price};

use crate::error::AppError;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::routes::MessageQuery;
use crate::services::cart::{CartError, CartLine, add_to_cart, view_cart};
use crate::state::AppState;
use crate::store::NotFoundError;

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub current_email: Option<String>,
    pub lines: Vec<CartLine>,
    pub order_total: Price,
    pub success: Option<String>,
}

/// Resolve a success code from a redirect into display text.
fn success_message(code: &str) -> String {
    match code {
        "added" => "Melon successfully added to cart.",
        _ => "Done.",
    }
    .to_string()
}

/// Map cart service failures onto HTTP error responses.
fn cart_error(err: CartError) -> AppError {
    match err {
        CartError::UnknownMelon(err) => AppError::from(err),
        CartError::Session(err) => AppError::Session(err),
        CartError::Empty => AppError::Internal("empty cart reached error path".to_string()),
    }
}

/// Display the cart page with line totals and the order total.
///
/// Redirects to the melon listing when the session has no cart yet. A cart
/// entry whose melon has vanished from the catalog fails the whole page with
/// a 404 rather than rendering a partial cart.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(email): OptionalAuth,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    match view_cart(&session, state.catalog()).await {
        Ok(view) => Ok(CartShowTemplate {
            current_email: email.map(|e| e.to_string()),
            lines: view.lines,
            order_total: view.order_total,
            success: query.success.as_deref().map(success_message),
        }
        .into_response()),
        Err(CartError::Empty) => Ok(Redirect::to("/melons?error=empty_cart").into_response()),
        Err(err) => Err(cart_error(err)),
    }
}

/// Add one unit of a melon to the session cart, then bounce to the cart page.
///
/// The id is not checked against the catalog here; a stale entry surfaces
/// when the cart page prices it.
#[instrument(skip(session))]
pub async fn add(session: Session, Path(id): Path<String>) -> Result<Redirect, AppError> {
    let id: MelonId = id
        .parse()
        .map_err(|_| NotFoundError::InvalidMelonId(id.clone()))?;

    add_to_cart(&session, id).await.map_err(cart_error)?;

    Ok(Redirect::to("/cart?success=added"))
}

/// Checkout is not implemented; send the shopper back with a warning.
#[instrument]
pub async fn checkout() -> Redirect {
    Redirect::to("/melons?error=checkout_unimplemented")
}
