//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Home page
//! GET  /health          - Health check
//!
//! # Melons
//! GET  /melons          - Melon listing
//! GET  /melons/{id}     - Melon detail
//!
//! # Cart
//! GET  /cart            - Cart page (redirects to /melons when empty)
//! POST /cart/add/{id}   - Add one melon, then redirect to /cart
//!
//! # Checkout
//! GET  /checkout        - Not implemented yet; redirects with a warning
//!
//! # Auth
//! GET  /login           - Login page
//! POST /login           - Login action
//! POST /logout          - Logout action (404 when nobody is logged in)
//! ```
//!
//! Flash-style messages travel as `?error=` / `?success=` codes on redirects;
//! the receiving page resolves the code to display text.

pub mod auth;
pub mod cart;
pub mod home;
pub mod melons;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::state::AppState;

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Create the melon catalog routes router.
pub fn melon_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(melons::index))
        .route("/{id}", get(melons::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add/{id}", post(cart::add))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Health check
        .route("/health", get(health))
        // Melon catalog
        .nest("/melons", melon_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout stub
        .route("/checkout", get(cart::checkout))
        // Auth routes
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Assemble the full application from pre-loaded state.
///
/// Used by `main` and by integration tests so both serve the exact same
/// router, session layer included.
pub fn app(state: AppState) -> Router {
    routes()
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::create_session_layer())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
