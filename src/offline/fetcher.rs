//! Where installable assets come from

use std::error::Error;

use async_trait::async_trait;
use url::Url;

/// A source of static assets, keyed by origin-absolute request path
/// (`/styles/globals.css`).
///
/// The cache manager only ever reads through this trait, so tests can swap the network
/// out for canned responses or injected failures.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, Box<dyn Error>>;
}

/// Fetches assets over HTTP from the origin that serves the application
pub struct HttpFetcher {
    base: Url,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl AssetFetcher for HttpFetcher {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        // Manifest paths are origin-absolute, so joining keeps the base's origin
        let url = self.base.join(path)?;
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
