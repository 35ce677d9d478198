//! Payload of `GET /health`.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// Health check response with per-dependency probes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

/// The listing API depends on the database only.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: ProbeResult,
}

impl HealthChecks {
    pub fn status(&self) -> ServiceStatus {
        if self.database.is_ok() {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        }
    }
}

/// Outcome of a single dependency probe: `"ok"` or `"error"` plus a message.
#[derive(Debug, Serialize)]
pub struct ProbeResult {
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProbeResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_probe_degrades_service() {
        let checks = HealthChecks {
            database: ProbeResult::error("Database error: connection refused"),
        };
        assert_eq!(checks.status(), ServiceStatus::Degraded);

        let json = serde_json::to_value(HealthResponse {
            status: checks.status(),
            version: "0.1.0",
            checks,
        })
        .unwrap();

        assert_eq!(json["status"], "degraded");
        assert_eq!(json["checks"]["database"]["status"], "error");
    }
}
