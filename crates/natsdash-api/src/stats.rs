// NATS statistics endpoint

use tracing::debug;

use crate::client::{ApiClient, RequestOptions};
use crate::result::ApiResult;

/// Path of the NATS statistics endpoint.
pub const NATS_STATS_ENDPOINT: &str = "/api/nats/stats";

impl ApiClient {
    /// Fetch NATS server statistics.
    ///
    /// `GET /api/nats/stats`
    ///
    /// The body is forwarded verbatim; decode it with
    /// `result.decode::<NatsStats>()` when a typed view is wanted.
    pub async fn nats_stats(&self) -> ApiResult {
        debug!("fetching NATS stats");
        self.request(NATS_STATS_ENDPOINT, RequestOptions::get()).await
    }
}
