use crate::ClientResult;
use crate::wire::parse_error_body;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};

/// HTTP client for the hosted backend
#[derive(Clone)]
pub struct BackendClient {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
}

impl BackendClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://abc.supabase.co")
    /// * `api_key` - Public API key sent as `apikey` on every request
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: ReqwestClient::new(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a request authorized with the API key
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_as(method, path, &self.api_key)
    }

    /// Build a request for a fully formed URL (query string included)
    pub(crate) fn request_url(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Build a request authorized as the holder of `bearer`
    pub(crate) fn request_as(&self, method: Method, path: &str, bearer: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }

    /// Execute request and return the raw body of a successful response
    pub(crate) async fn execute(&self, req: RequestBuilder) -> ClientResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("Backend responded {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(parse_error_body(status.as_u16(), &body));
        }

        Ok(body)
    }
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
