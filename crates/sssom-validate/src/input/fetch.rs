//! Remote retrieval of SSSOM files.

use std::sync::Mutex;
use std::time::Duration;

use indexmap::IndexMap;
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{Result, ValidateError};

/// Budget for a single URL fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Retrieves the raw text behind a URL.
pub trait Fetcher: Send + Sync {
    /// Fetch the body of `url` as text. Any content type is accepted.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetcher backed by a blocking HTTP client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the fixed 60-second timeout.
    ///
    /// Must be called outside of an async runtime; the blocking client owns
    /// its own runtime.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| ValidateError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching SSSOM file");

        let response = self.client.get(url).send().map_err(|source| ValidateError::Fetch {
            url: url.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ValidateError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| ValidateError::Fetch {
            url: url.to_string(),
            source,
        })
    }
}

/// Fetcher serving canned bodies, for tests and offline use.
///
/// Unknown URLs answer with HTTP 404.
#[derive(Default)]
pub struct MockFetcher {
    responses: IndexMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Create a fetcher with no registered URLs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the body returned for `url`.
    pub fn with_response(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), body.into());
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ValidateError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}
