//! Integration tests for Ubermelon.
//!
//! Each test spawns the real storefront router on an ephemeral port, with the
//! shipped `data/` flat files loaded, and drives it over HTTP with a
//! cookie-holding client so sessions behave as they do in a browser.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ubermelon-integration-tests
//! ```

#![allow(clippy::unwrap_used)]

use ubermelon_storefront::config::StorefrontConfig;
use ubermelon_storefront::routes;
use ubermelon_storefront::state::AppState;
use ubermelon_storefront::store::{CatalogStore, CustomerStore};

/// Path of the shipped melon catalog, independent of the test run's CWD.
pub const MELONS_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/melons.txt");

/// Path of the shipped customer file.
pub const CUSTOMERS_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/customers.txt");

/// A storefront instance listening on an ephemeral localhost port.
pub struct TestServer {
    base_url: String,
}

impl TestServer {
    /// Spawn the storefront with the shipped data files.
    ///
    /// # Panics
    ///
    /// Panics if the data files fail to load or the listener cannot bind.
    pub async fn spawn() -> Self {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            melons_path: MELONS_FILE.into(),
            customers_path: CUSTOMERS_FILE.into(),
            sentry_dsn: None,
            sentry_environment: None,
        };

        let catalog = CatalogStore::load(&config.melons_path).unwrap();
        let customers = CustomerStore::load(&config.customers_path).unwrap();
        let state = AppState::new(config, catalog, customers);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        let app = routes::app(state);
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// A fresh client with its own cookie jar, i.e. its own session.
    ///
    /// # Panics
    ///
    /// Panics if the client cannot be built.
    #[must_use]
    pub fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap()
    }
}
