use super::response_common::{HTTPResponseType, ResponseError};

/// Acknowledgment of a reading submission. The collection server answers
/// with a bare status; whatever body it sends is dropped unread.
#[derive(Debug)]
pub struct ReadingSubmitResponse {}

impl HTTPResponseType for ReadingSubmitResponse {
    type ParsedResponseType = ();

    async fn read_response(response: reqwest::Response) -> Result<(), ResponseError> {
        Self::unwrap_return_code(response)?;
        Ok(())
    }
}
