use tracing::debug;

use crate::alert::{self, CheckState};
use crate::client::AlertTransport;
use crate::config::NotifierConfig;
use crate::{Error, Result};

/// A monitoring check result as handed over by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub hostname: String,
    pub service: String,
    pub state: CheckState,
    /// Plugin output. Accepted for caller compatibility; not part of the alert.
    pub output: String,
}

impl CheckResult {
    pub fn new(
        hostname: impl Into<String>,
        service: impl Into<String>,
        state: CheckState,
        output: impl Into<String>,
    ) -> Result<Self> {
        let check = Self {
            hostname: hostname.into(),
            service: service.into(),
            state,
            output: output.into(),
        };

        if check.hostname.is_empty() {
            return Err(Error::Validation("hostname must not be empty".into()));
        }
        if check.service.is_empty() {
            return Err(Error::Validation("service must not be empty".into()));
        }

        Ok(check)
    }
}

pub struct Notifier {
    config: NotifierConfig,
    transport: Box<dyn AlertTransport>,
}

impl Notifier {
    pub fn new(config: NotifierConfig, transport: Box<dyn AlertTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Classify, build, encode and deliver one alert. The POST is attempted once.
    pub async fn run(&self, check: &CheckResult) -> Result<()> {
        let verbose = self.config.debug;

        if verbose {
            debug!("Generating alert");
        }
        let payload = alert::build_payload(&check.hostname, &check.service, check.state);
        let body = alert::encode_payload(&payload)?;

        if verbose {
            debug!("Alert to be posted");
            debug!("{}", body);
            debug!("Posting alert to {}", self.config.alert_api_url);
        }

        let response = self
            .transport
            .post_alerts(&self.config.alert_api_url, body)
            .await?;

        if verbose {
            debug!("Server return:");
            debug!("{}", response);
        }

        Ok(())
    }
}
