use super::record_source::Reading;
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::reading_submit_post::ReadingSubmitRequest;
use crate::http_handler::http_request::request_common::HTTPRequestType;
use crate::http_handler::http_response::response_common::ResponseError;
use async_trait::async_trait;

/// Seam between the emitter and the network. The emitter only ever hands a
/// finished payload across; delivery outcome is the implementor's to report.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(&self, reading: Reading) -> Result<(), ResponseError>;
}

/// Production transport: POSTs each reading to the collection server.
#[derive(Debug)]
pub struct CollectionPoint {
    client: HTTPClient,
}

impl CollectionPoint {
    pub fn new(client: HTTPClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for CollectionPoint {
    async fn submit(&self, reading: Reading) -> Result<(), ResponseError> {
        ReadingSubmitRequest::new(reading).send_request(&self.client).await
    }
}
