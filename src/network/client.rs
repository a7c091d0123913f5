use crate::config::constants::REQUEST_TIMEOUT_SECS;
use crate::network::errors::NetworkError;
use crate::network::identity::IdentityProfile;
use crate::network::{DocumentSource, FetchedPage};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

// * The HTTP client that retrieves the ranking page.
// * One blocking-style request per run: no retries, no backoff.
pub struct TrendingClient {
    inner: Client,
}

impl TrendingClient {
    // * Initializes the client with the default desktop identity.
    pub fn new() -> Result<Self, NetworkError> {
        Self::with_identity(&IdentityProfile::desktop_chrome())
    }

    // * Initializes the client with a custom identity.
    pub fn with_identity(identity: &IdentityProfile) -> Result<Self, NetworkError> {
        let inner = Client::builder()
            .default_headers(identity.headers()?)
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { inner })
    }
}

impl DocumentSource for TrendingClient {
    // * Returns status and body as-is; the caller decides what counts as success.
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, NetworkError> {
        debug!(url = %url, "Requesting page");
        let resp = self.inner.get(url.clone()).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        info!(url = %url, status, bytes = body.len(), "Page retrieved");
        Ok(FetchedPage { status, body })
    }
}
