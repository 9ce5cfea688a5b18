//! PostHog annotations client.
//!
//! Endpoint used:
//!   * POST /api/projects/:project_id/annotations/
//!
//! The response status is not inspected: whatever JSON PostHog answers with
//! is returned to the caller as-is.

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::config::ActionInputs;
use crate::errors::Result;
use crate::types::AnnotationRequest;

const USER_AGENT: &str = concat!("annotation-submitter/", env!("CARGO_PKG_VERSION"));

/// PostHog HTTP client wrapper.
#[derive(Debug, Clone)]
pub struct PostHogClient {
    http: Client,
    api_host: String, // e.g. "https://app.posthog.com", used verbatim
    token: String,    // personal API key, sent as bearer
}

impl PostHogClient {
    /// Constructs a client with a shared HTTP instance and bearer token.
    pub fn new(http: Client, api_host: impl Into<String>, token: impl Into<String>) -> Self {
        let api_host = api_host.into();
        debug!("Creating PostHogClient with api_host={}", api_host);
        Self {
            http,
            api_host,
            token: token.into(),
        }
    }

    /// Builds the HTTP client and wraps it for the host/token in `inputs`.
    pub fn from_inputs(inputs: &ActionInputs) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::new(http, &inputs.api_host, &inputs.token))
    }

    /// `{api_host}/api/projects/{project_id}/annotations/`.
    pub fn annotations_url(&self, project_id: &str) -> String {
        format!("{}/api/projects/{}/annotations/", self.api_host, project_id)
    }

    /// Posts one annotation and returns the parsed response body.
    ///
    /// # Errors
    /// - [`crate::AnnotationError::HttpTransport`] when the request cannot be
    ///   encoded, the exchange fails or the body cannot be read
    /// - [`crate::AnnotationError::InvalidResponse`] when the body is not JSON
    pub async fn create_annotation(
        &self,
        project_id: &str,
        request: &AnnotationRequest,
    ) -> Result<Value> {
        let url = self.annotations_url(project_id);
        debug!(
            "PostHog create_annotation: url={}, scope={:?}",
            url,
            request.scope()
        );

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await?;
        debug!(%status, len = bytes.len(), "PostHog responded");

        let data: Value = serde_json::from_slice(&bytes)?;
        Ok(data)
    }
}
