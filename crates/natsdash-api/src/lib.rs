// natsdash-api: Async Rust client for the natsdash backend API

pub mod client;
pub mod error;
pub mod events;
pub mod health;
pub mod models;
pub mod result;
pub mod stats;
pub mod transport;

pub use client::{ApiClient, Method, RequestOptions};
pub use error::Error;
pub use events::EVENTS_ENDPOINT;
pub use health::HEALTH_ENDPOINT;
pub use models::{Counters, EventEnvelope, HealthStatus, NatsStats, PublishAck};
pub use result::{ApiResult, FALLBACK_ERROR};
pub use stats::NATS_STATS_ENDPOINT;
pub use transport::{TlsMode, TransportConfig};
