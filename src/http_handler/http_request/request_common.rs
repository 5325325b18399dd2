use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_response::response_common::{HTTPResponseType, ResponseError};

#[derive(Debug, Copy, Clone)]
pub(crate) enum HTTPRequestMethod {
    Get,
    Post,
}

/// One typed endpoint of the collection server. Implementors name the path,
/// the method and the body; sending and response decoding are shared.
pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;
    type Body: serde::Serialize + Sync;

    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn body(&self) -> &Self::Body;
    fn header_params(&self) -> reqwest::header::HeaderMap {
        reqwest::header::HeaderMap::default()
    }

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, ResponseError> {
        let url = format!("{}{}", client.url(), self.endpoint());
        let request = match self.request_method() {
            HTTPRequestMethod::Get => client.client().get(url),
            HTTPRequestMethod::Post => client.client().post(url).json(self.body()),
        };
        let response = request.headers(self.header_params()).send().await?;
        <Self::Response as HTTPResponseType>::read_response(response).await
    }
}
