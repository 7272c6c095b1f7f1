pub mod alert;
pub mod cli;
pub mod client;
pub mod config;
pub mod notifier;

use thiserror::Error;

pub use alert::{AlertPhase, AlertRecord, CheckState, ServiceKind};
pub use client::{AlertTransport, HttpTransport};
pub use config::NotifierConfig;
pub use notifier::{CheckResult, Notifier};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// One-line failure text: the outermost context and the root cause.
///
/// reqwest already folds its sources into its own message, so printing the
/// whole chain would repeat the cause once per level.
pub fn failure_message(err: &anyhow::Error) -> String {
    if err.chain().count() > 1 {
        format!("{}: {}", err, err.root_cause())
    } else {
        err.to_string()
    }
}
