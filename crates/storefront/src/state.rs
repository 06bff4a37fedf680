//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::store::{CatalogStore, CustomerStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The stores are loaded once at startup and
/// read-only afterwards, so handlers on any number of worker threads can read
/// them without locking. Handlers receive the state by injection instead of
/// reaching for globals.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogStore,
    customers: CustomerStore,
}

impl AppState {
    /// Create a new application state from pre-loaded stores.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: CatalogStore, customers: CustomerStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                customers,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the melon catalog.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }

    /// Get a reference to the customer store.
    #[must_use]
    pub fn customers(&self) -> &CustomerStore {
        &self.inner.customers
    }
}
