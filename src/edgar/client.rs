//! Page fetching for EDGAR

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::edgar::{FilingError, Result};

/// Source of EDGAR pages. Every lookup in the resolver and locator goes through this.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Root URL that search and archive paths are resolved against
    fn base_url(&self) -> &Url;

    /// Fetch the body of `url` as text
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// `PageSource` backed by a reqwest client talking to the live EDGAR host
pub struct HttpPageSource {
    client: Client,
    base_url: Url,
}

impl HttpPageSource {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base()?,
        })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch(&self, url: &Url) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "text/html,text/plain,*/*")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FilingError::HttpStatus {
                status_code: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
