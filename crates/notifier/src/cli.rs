//! Command-line surface of `notify-alertmanager`.
//!
//! The flag set is fixed by the monitoring wrappers that invoke the notifier,
//! so `--service` stays mandatory and `--output` is accepted but unused.

use clap::builder::NonEmptyStringValueParser;
use clap::{CommandFactory, FromArgMatches, Parser};

use crate::alert::CheckState;
use crate::config::{NotifierConfig, DEFAULT_ALERT_API_URL};
use crate::notifier::CheckResult;
use crate::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "notify-alertmanager")]
#[command(about = "Send notifications to the Prometheus Alertmanager")]
#[command(version)]
pub struct Cli {
    /// Host the check result belongs to
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub hostname: String,

    /// Checked service; `hostalive` reports host state (Up/Down)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    pub service: String,

    /// Plugin output of the check (accepted, not sent)
    #[arg(long, default_value = "")]
    pub output: String,

    /// Check state: 0 = OK, 1 = Warning, 2 = Critical, 3 = Unknown
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub state: u8,

    /// Alertmanager alert ingestion endpoint
    #[arg(long, default_value = DEFAULT_ALERT_API_URL)]
    pub alert_api_url: String,

    /// Print diagnostics to stdout
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Parse process arguments, exiting with clap's usage code on failure.
    pub fn parse_with_build_info() -> Self {
        let matches = Self::command().long_version(build_version()).get_matches();
        match Self::from_arg_matches(&matches) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }

    pub fn check_result(&self) -> Result<CheckResult> {
        let state = CheckState::try_from(self.state)?;
        CheckResult::new(&self.hostname, &self.service, state, &self.output)
    }

    pub fn notifier_config(&self) -> Result<NotifierConfig> {
        NotifierConfig::new(&self.alert_api_url, self.debug)
    }
}

/// Package version, plus commit and build date when they were set at compile time.
pub fn build_version() -> String {
    let mut result = env!("CARGO_PKG_VERSION").to_string();

    if let Some(commit) = option_env!("NOTIFIER_BUILD_COMMIT").filter(|c| !c.is_empty()) {
        result = format!("{}\ncommit: {}", result, commit);
    }

    if let Some(date) = option_env!("NOTIFIER_BUILD_DATE").filter(|d| !d.is_empty()) {
        result = format!("{}\ndate: {}", result, date);
    }

    result
}
