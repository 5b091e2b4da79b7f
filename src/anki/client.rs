use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::anki::types::{ActionRequest, ActionResponse};
use crate::config::Config;
use crate::error::Result;

const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Seam between the dispatcher and the AnkiConnect endpoint, so tests can
/// substitute a recording double for the HTTP client.
#[async_trait]
pub trait AnkiTransport: Send + Sync {
    /// Perform exactly one round trip and hand back the decoded reply
    /// envelope as received. Transport failures (refused connection, timeout,
    /// non-2xx status, unparsable body) propagate unchanged; there is no
    /// retry and no error translation.
    async fn invoke(&self, request: &ActionRequest) -> Result<ActionResponse>;
}

pub struct AnkiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnkiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnkiTransport for AnkiClient {
    async fn invoke(&self, request: &ActionRequest) -> Result<ActionResponse> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
