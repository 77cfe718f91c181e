//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::session::Session;
use crate::woo::{WooClient, WooError};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    woo: WooClient,
    session: Session,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the WooCommerce HTTP client fails to build.
    pub fn new(config: ServerConfig) -> Result<Self, WooError> {
        let woo = WooClient::new(&config.woo)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                woo,
                session: Session::new(),
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the WooCommerce client.
    #[must_use]
    pub fn woo(&self) -> &WooClient {
        &self.inner.woo
    }

    /// Get a reference to the session state.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.inner.session
    }
}
