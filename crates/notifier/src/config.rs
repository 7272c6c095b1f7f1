use url::Url;

use crate::{Error, Result};

pub const DEFAULT_ALERT_API_URL: &str = "http://localhost:9093/api/v1/alerts";

#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub alert_api_url: Url,
    pub debug: bool,
}

impl NotifierConfig {
    pub fn new(alert_api_url: &str, debug: bool) -> Result<Self> {
        let alert_api_url = Url::parse(alert_api_url)?;

        match alert_api_url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::Config(format!(
                    "unsupported URL scheme '{}' in alert API URL {}",
                    other, alert_api_url
                )));
            }
        }

        Ok(Self {
            alert_api_url,
            debug,
        })
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            alert_api_url: Url::parse(DEFAULT_ALERT_API_URL)
                .expect("default alert API URL is valid"),
            debug: false,
        }
    }
}
