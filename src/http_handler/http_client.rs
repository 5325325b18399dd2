/// A thin wrapper around `reqwest::Client` carrying the base URL every
/// request endpoint is appended to.
///
/// One instance is built per target server and shared between submissions;
/// the underlying client pools connections across requests.
#[derive(Debug)]
pub struct HTTPClient {
    /// The underlying `reqwest::Client` performing the requests.
    client: reqwest::Client,
    /// Base URL prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Default per-request timeout. Submissions past this are reported as
    /// failed; nothing is retried.
    const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

    /// Constructs a new `HTTPClient` for the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – root URL for all requests, e.g. `"http://localhost:3030"`.
    pub fn new(base_url: &str) -> HTTPClient {
        HTTPClient {
            client: reqwest::Client::builder()
                .timeout(Self::REQUEST_TIMEOUT)
                .build()
                .unwrap(),
            base_url: String::from(base_url),
        }
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(super) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
}
