// Backend health endpoint

use tracing::debug;

use crate::client::{ApiClient, RequestOptions};
use crate::result::ApiResult;

/// Path of the health check endpoint.
pub const HEALTH_ENDPOINT: &str = "/api/health";

impl ApiClient {
    /// Query backend health.
    ///
    /// `GET /api/health` -- the backend also emits a `health_check` event
    /// on NATS for each call.
    pub async fn health(&self) -> ApiResult {
        debug!("checking backend health");
        self.request(HEALTH_ENDPOINT, RequestOptions::get()).await
    }
}
