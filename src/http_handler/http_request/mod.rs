use super::http_response::{debris_catalog, reading_submit};

pub mod catalog_get;
pub mod reading_submit_post;
pub mod request_common;
