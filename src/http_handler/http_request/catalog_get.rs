use super::debris_catalog::DebrisCatalogResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};

/// GET of the debris catalog when it is served over HTTP instead of read
/// from disk.
#[derive(Debug)]
pub struct CatalogRequest {
    endpoint: String,
}

impl CatalogRequest {
    pub fn new(endpoint: &str) -> Self {
        Self { endpoint: String::from(endpoint) }
    }
}

impl HTTPRequestType for CatalogRequest {
    type Response = DebrisCatalogResponse;
    type Body = ();

    fn endpoint(&self) -> &str { &self.endpoint }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn body(&self) -> &Self::Body { &() }
}
