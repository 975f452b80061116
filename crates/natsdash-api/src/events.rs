// Event publishing endpoint
//
// `POST /api/events` with a `{ type, data }` envelope. The backend
// republishes it on the `user.action.<type>` NATS subject.

use serde::Serialize;
use tracing::debug;

use crate::client::{ApiClient, Method, RequestOptions};
use crate::models::EventEnvelope;
use crate::result::ApiResult;

/// Path of the event publishing endpoint.
pub const EVENTS_ENDPOINT: &str = "/api/events";

impl ApiClient {
    /// Publish an event to the backend event system.
    ///
    /// `POST /api/events` with `{"type": event_type, "data": data}`
    ///
    /// A `data` value that fails to serialize is reported as a failure
    /// without sending anything.
    pub async fn publish_event<T: Serialize + ?Sized>(
        &self,
        event_type: &str,
        data: &T,
    ) -> ApiResult {
        debug!(event_type, "publishing event");
        let body = match serde_json::to_value(EventEnvelope { event_type, data }) {
            Ok(body) => body,
            Err(e) => return ApiResult::failure(e.to_string()),
        };
        self.request(
            EVENTS_ENDPOINT,
            RequestOptions::new(Method::Post).with_body(body),
        )
        .await
    }
}
