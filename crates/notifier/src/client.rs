//! HTTP delivery of encoded alerts.

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client};
use url::Url;

use crate::Result;

/// Delivers a serialized alert payload and returns the raw response body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertTransport: Send + Sync {
    async fn post_alerts(&self, url: &Url, body: String) -> Result<String>;
}

/// Single-shot POST over reqwest. Redirects and timeouts use the client defaults.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AlertTransport for HttpTransport {
    async fn post_alerts(&self, url: &Url, body: String) -> Result<String> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}
