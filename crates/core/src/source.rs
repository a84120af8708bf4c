//! Data source adapter: reads the user collection from the remote endpoint.
//!
//! Provides a `UserSource` trait with two implementations: `HttpUserSource`
//! (one GET against the configured endpoint) and `StaticUserSource` (a fixed
//! in-memory list, used by tests and offline runs).

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::FetchError;
use crate::types::{RolodexConfig, UserRecord};

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait UserSource: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
    /// Where the records come from, for logs.
    fn describe(&self) -> String;
}

/// Parse a response body into the source collection.
///
/// The body must be a JSON array of objects; anything else is `Malformed`.
pub fn parse_users(body: &str) -> Result<Vec<UserRecord>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

pub struct HttpUserSource {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpUserSource {
    pub fn new(endpoint: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, endpoint: endpoint.to_string(), timeout })
    }

    pub fn from_config(config: &RolodexConfig) -> Result<Self, FetchError> {
        Self::new(&config.endpoint, config.timeout_secs.map(Duration::from_secs))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        debug!(endpoint = %self.endpoint, "Fetching user collection");

        // Per-request timeout: the wasm client builder has none.
        let mut request = self.client.get(&self.endpoint).header("Accept", "application/json");
        if let Some(t) = self.timeout {
            request = request.timeout(t);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let users = parse_users(&body)?;
        info!(endpoint = %self.endpoint, users = users.len(), "User collection fetched");
        Ok(users)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

// ---------------------------------------------------------------------------
// Static
// ---------------------------------------------------------------------------

/// Serves a fixed result. Counts how often it was asked.
pub struct StaticUserSource {
    result: Result<Vec<UserRecord>, FetchError>,
    calls: AtomicUsize,
}

impl StaticUserSource {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { result: Ok(users), calls: AtomicUsize::new(0) }
    }

    pub fn failing(err: FetchError) -> Self {
        Self { result: Err(err), calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl UserSource for StaticUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}
