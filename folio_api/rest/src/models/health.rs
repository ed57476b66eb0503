use chrono::{DateTime, SecondsFormat, Utc};
use folio_core_health_contracts::HealthStatus;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiHealthStatus {
    pub status: &'static str,
    /// ISO-8601 with millisecond precision, e.g. `2026-10-16T08:30:00.000Z`
    pub timestamp: String,
}

impl From<HealthStatus> for ApiHealthStatus {
    fn from(value: HealthStatus) -> Self {
        Self {
            status: "OK",
            timestamp: format_timestamp(value.timestamp),
        }
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}
