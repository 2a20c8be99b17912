//! Health endpoint payload.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceHealth {
    Healthy,
    Degraded,
}

/// Per-component probe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    Ok,
    Error,
}

/// `{"status":"healthy","version":"0.1.0","checks":{"storage":{...}}}`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceHealth,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub storage: Probe,
}

/// Result of probing one dependency.
#[derive(Debug, Serialize)]
pub struct Probe {
    pub status: ProbeStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Probe {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Ok,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ProbeStatus::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ProbeStatus::Ok
    }
}

impl HealthResponse {
    /// Aggregates component probes; any failed probe degrades the service.
    pub fn from_checks(checks: HealthChecks) -> Self {
        let status = if checks.storage.is_ok() {
            ServiceHealth::Healthy
        } else {
            ServiceHealth::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }
}
