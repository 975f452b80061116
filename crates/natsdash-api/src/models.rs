// Backend response and request types
//
// Typed views of the JSON the backend speaks. Request helpers never parse
// into these on their own -- they return raw `ApiResult` data, and callers
// opt in via `ApiResult::decode`. Fields default liberally because the
// backend builds most of these from untyped maps.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ── Events ───────────────────────────────────────────────────────────

/// Body of `POST /api/events`.
///
/// ```json
/// { "type": "button_click", "data": { "button": "refresh" } }
/// ```
#[derive(Debug, Serialize)]
pub struct EventEnvelope<'a, T: ?Sized> {
    #[serde(rename = "type")]
    pub event_type: &'a str,
    pub data: &'a T,
}

/// Success body of `POST /api/events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ── NATS statistics ──────────────────────────────────────────────────

/// Snapshot returned by `GET /api/nats/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatsStats {
    #[serde(default)]
    pub connections: u64,
    #[serde(default)]
    pub subscriptions: u64,
    #[serde(default)]
    pub messages: Counters,
    #[serde(default)]
    pub bytes: Counters,
    /// Server uptime as the server renders it (Go duration text, e.g. `"1h2m3.5s"`).
    #[serde(default)]
    pub uptime: String,
}

/// An inbound/outbound counter pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    #[serde(rename = "in", default)]
    pub inbound: u64,
    #[serde(rename = "out", default)]
    pub outbound: u64,
}

// ── Health ───────────────────────────────────────────────────────────

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub nats: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_uses_type_key() {
        let data = json!({"x": 1});
        let body = serde_json::to_value(EventEnvelope {
            event_type: "click",
            data: &data,
        })
        .unwrap();
        assert_eq!(body, json!({"type": "click", "data": {"x": 1}}));
    }

    #[test]
    fn stats_from_backend_shape() {
        let stats: NatsStats = serde_json::from_value(json!({
            "connections": 3,
            "subscriptions": 12,
            "messages": { "in": 1500, "out": 1490 },
            "bytes": { "in": 204_800, "out": 198_000 },
            "uptime": "26h3m7.25s"
        }))
        .unwrap();

        assert_eq!(stats.connections, 3);
        assert_eq!(stats.messages, Counters { inbound: 1500, outbound: 1490 });
        assert_eq!(stats.bytes.inbound, 204_800);
        assert_eq!(stats.uptime, "26h3m7.25s");
    }

    #[test]
    fn health_parses_go_timestamp() {
        let health: HealthStatus = serde_json::from_value(json!({
            "status": "healthy",
            "database": "connected",
            "nats": "running",
            "timestamp": "2024-05-01T09:30:00.123456789-04:00"
        }))
        .unwrap();

        assert!(health.is_healthy());
        assert_eq!(health.timestamp.unwrap().offset().local_minus_utc(), -4 * 3600);
    }
}
