use super::reading_submit::ReadingSubmitResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};

/// POST of one tagged sensor reading to the collection point. The body is
/// the reading itself, a flat JSON object.
#[derive(Debug)]
pub struct ReadingSubmitRequest {
    reading: serde_json::Map<String, serde_json::Value>,
}

impl ReadingSubmitRequest {
    pub fn new(reading: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { reading }
    }
}

impl HTTPRequestType for ReadingSubmitRequest {
    type Response = ReadingSubmitResponse;
    type Body = serde_json::Map<String, serde_json::Value>;

    fn endpoint(&self) -> &'static str { "/data-collection-point" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
    fn body(&self) -> &Self::Body { &self.reading }
}
