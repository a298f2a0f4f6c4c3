//! Outbound HTTP fetch for Play Store detail pages.
//!
//! Not a browser — one GET per lookup with a mobile Chrome user-agent,
//! a bounded timeout, and status classification. No retries, no cache.

use crate::error::LookupError;
use std::time::Duration;

/// Play Store details page base; the package id is appended verbatim.
pub const PLAY_BASE_URL: &str = "https://play.google.com/store/apps/details?id=";

/// Mobile Chrome user-agent. The Play Store serves the scrape-friendly
/// mobile layout for this UA.
const USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 5.0; SM-G900P Build/LRX21T) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/67.0.3396.87 Mobile Safari/537.36";

/// Total request timeout.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for Play Store detail pages.
#[derive(Clone)]
pub struct PlayFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl PlayFetcher {
    /// Create a fetcher against the real Play Store.
    pub fn new() -> Self {
        Self::with_base_url(PLAY_BASE_URL)
    }

    /// Create a fetcher against a non-default base URL (tests point
    /// this at a mock server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the details page for a package id and classify the outcome.
    ///
    /// 404 is the upstream's way of saying the package does not exist.
    /// 5xx and transport failures mean the document could not be
    /// obtained. Every other status passes the body through; the
    /// extraction chain decides whether it is usable.
    pub async fn fetch(&self, package_id: &str) -> Result<String, LookupError> {
        let url = format!("{}{}", self.base_url, package_id);
        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound);
        }
        if status.is_server_error() {
            return Err(LookupError::Fetch(resp.error_for_status_ref().err()));
        }

        let body = resp.text().await?;
        Ok(body)
    }
}

impl Default for PlayFetcher {
    fn default() -> Self {
        Self::new()
    }
}
