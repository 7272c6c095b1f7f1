//! Alert construction for the Alertmanager v1 ingestion API.
//!
//! A check result is classified through fixed lookup tables into a status
//! text and an alert phase, then packed into a single [`AlertRecord`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Service name that selects host-style status text.
pub const HOSTALIVE_SERVICE: &str = "hostalive";

/// Placeholder sent as `generatorURL`; no real source URL is produced.
pub const GENERATOR_URL: &str = "foo";

const HOST_STATUS_TEXT: [&str; 4] = ["Up", "Up", "Down", "Down"];
const SERVICE_STATUS_TEXT: [&str; 4] = ["OK", "Warning", "Critical", "Unknown"];
const ALERT_PHASE: [AlertPhase; 4] = [
    AlertPhase::Resolved,
    AlertPhase::Firing,
    AlertPhase::Firing,
    AlertPhase::Firing,
];

/// Result code reported by a monitoring check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CheckState {
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl CheckState {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn status_text(self, kind: ServiceKind) -> &'static str {
        match kind {
            ServiceKind::HostAlive => HOST_STATUS_TEXT[self as usize],
            ServiceKind::Service => SERVICE_STATUS_TEXT[self as usize],
        }
    }

    pub fn phase(self) -> AlertPhase {
        ALERT_PHASE[self as usize]
    }
}

impl TryFrom<u8> for CheckState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(CheckState::Ok),
            1 => Ok(CheckState::Warning),
            2 => Ok(CheckState::Critical),
            3 => Ok(CheckState::Unknown),
            other => Err(Error::Validation(format!(
                "invalid state {}, expected one of 0, 1, 2, 3",
                other
            ))),
        }
    }
}

/// Which status-text table applies to a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    HostAlive,
    Service,
}

impl ServiceKind {
    pub fn of(service: &str) -> Self {
        if service == HOSTALIVE_SERVICE {
            ServiceKind::HostAlive
        } else {
            ServiceKind::Service
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertPhase {
    Resolved,
    Firing,
}

impl fmt::Display for AlertPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertPhase::Resolved => write!(f, "resolved"),
            AlertPhase::Firing => write!(f, "firing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertLabels {
    pub alertname: String,
    pub instance: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertAnnotations {
    pub summary: String,
}

/// One alert as accepted by `POST /api/v1/alerts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub status: AlertPhase,
    #[serde(rename = "generatorURL")]
    pub generator_url: String,
    pub labels: AlertLabels,
    pub annotations: AlertAnnotations,
}

impl AlertRecord {
    pub fn new(hostname: &str, service: &str, state: CheckState) -> Self {
        let status = state.status_text(ServiceKind::of(service));

        Self {
            status: state.phase(),
            generator_url: GENERATOR_URL.to_string(),
            labels: AlertLabels {
                alertname: format!("{}_{}", service, hostname),
                instance: hostname.to_string(),
                service: service.to_string(),
            },
            annotations: AlertAnnotations {
                summary: format!("Service {} on {} is {}", service, hostname, status),
            },
        }
    }
}

/// The request body always carries exactly one alert.
pub fn build_payload(hostname: &str, service: &str, state: CheckState) -> Vec<AlertRecord> {
    vec![AlertRecord::new(hostname, service, state)]
}

pub fn encode_payload(alerts: &[AlertRecord]) -> Result<String> {
    Ok(serde_json::to_string(alerts)?)
}
