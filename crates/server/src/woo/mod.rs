//! WooCommerce REST API client for order retrieval.
//!
//! Read-only against the store: the only call is `GET {base_url}/orders`,
//! filtered to a calendar-day range and paginated 100 orders at a time.
//! Results for an identical date range are cached in-memory via `moka`
//! (TTL from `WC_CACHE_TTL_SECS`, 5 minutes by default) so repeated fetches
//! during one interactive session do not re-walk the whole range.
//!
//! # API Reference
//!
//! - Endpoint: `GET {base_url}/orders`
//! - Query: `after`, `before` (ISO-8601 local timestamps), `per_page` (<=100),
//!   `page` (1-based), `status=any`, `order=asc`, `orderby=id`
//! - Authentication: HTTP basic auth with consumer key/secret
//! - An empty JSON array signals the end of pagination

use std::sync::Arc;

use chrono::NaiveDate;
use moka::future::Cache;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{debug, instrument};

use orderdesk_core::RawOrder;

use crate::config::WooConfig;

/// Page size for order requests. The API caps `per_page` at 100.
const PER_PAGE: u32 = 100;

/// Errors that can occur when fetching orders from WooCommerce.
#[derive(Debug, Error)]
pub enum WooError {
    /// Network-level failure (connect, timeout, TLS). Not retried; the
    /// operator re-triggers the fetch manually.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// A successful response body was not a valid order array.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The pagination safety cap was hit before an empty page appeared.
    /// Without the cap a very large range would loop unboundedly.
    #[error("page limit of {limit} exceeded fetching {start}..={end}")]
    PageLimitExceeded {
        limit: u32,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// WooCommerce REST API client.
///
/// Cheaply cloneable; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct WooClient {
    inner: Arc<WooClientInner>,
}

struct WooClientInner {
    client: reqwest::Client,
    base_url: String,
    consumer_key: String,
    consumer_secret: SecretString,
    max_pages: u32,
    /// Per-range fetch cache. Write-once per key within the TTL, safe for
    /// concurrent readers.
    cache: Cache<(NaiveDate, NaiveDate), Arc<Vec<RawOrder>>>,
}

impl WooClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WooError::Transport`] if the HTTP client fails to build.
    pub fn new(config: &WooConfig) -> Result<Self, WooError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        let cache = Cache::builder()
            .max_capacity(64)
            .time_to_live(config.cache_ttl)
            .build();

        Ok(Self {
            inner: Arc::new(WooClientInner {
                client,
                base_url: config.base_url.clone(),
                consumer_key: config.consumer_key.clone(),
                consumer_secret: config.consumer_secret.clone(),
                max_pages: config.max_pages,
                cache,
            }),
        })
    }

    /// Fetch every order created in `[start, end]` (inclusive calendar days,
    /// in the store's own timezone interpretation).
    ///
    /// Pages are requested sequentially until one comes back empty and are
    /// concatenated in page order. `status=any` keeps cancelled, refunded and
    /// draft orders in the result.
    ///
    /// # Errors
    ///
    /// [`WooError::Transport`] on network failure, [`WooError::Upstream`] on a
    /// non-2xx response, [`WooError::PageLimitExceeded`] if the configured cap
    /// is hit. On any error nothing is cached and no partial result escapes.
    #[instrument(skip(self))]
    pub async fn fetch_orders(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawOrder>, WooError> {
        if let Some(hit) = self.inner.cache.get(&(start, end)).await {
            debug!(orders = hit.len(), "order fetch served from cache");
            return Ok(hit.as_ref().clone());
        }

        let mut orders: Vec<RawOrder> = Vec::new();
        let mut page = 1u32;
        loop {
            if page > self.inner.max_pages {
                return Err(WooError::PageLimitExceeded {
                    limit: self.inner.max_pages,
                    start,
                    end,
                });
            }

            let batch = self.fetch_page(start, end, page).await?;
            debug!(page, orders = batch.len(), "fetched order page");
            if batch.is_empty() {
                break;
            }
            orders.extend(batch);
            page += 1;
        }

        self.inner
            .cache
            .insert((start, end), Arc::new(orders.clone()))
            .await;
        Ok(orders)
    }

    async fn fetch_page(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        page: u32,
    ) -> Result<Vec<RawOrder>, WooError> {
        let url = format!("{}/orders", self.inner.base_url);
        let response = self
            .inner
            .client
            .get(&url)
            .basic_auth(
                &self.inner.consumer_key,
                Some(self.inner.consumer_secret.expose_secret()),
            )
            .query(&[
                ("after", format!("{start}T00:00:00")),
                ("before", format!("{end}T23:59:59")),
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
                ("status", "any".to_string()),
                ("order", "asc".to_string()),
                ("orderby", "id".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WooError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Vec<RawOrder>>()
            .await
            .map_err(|e| WooError::Parse(e.to_string()))
    }
}
