//! HTTP client for the analysis backend.
//!
//! Every analysis is a JSON `POST` to `{base_url}{path}`. The HTTP status is
//! not used to decide success: any body that parses as JSON is handed to
//! [`AnalysisResult::from_value`]. Non-2xx statuses are only logged.

use std::fmt;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use super::types::{AnalysisRequest, AnalysisResult};

/// Errors that can occur while talking to the backend.
#[derive(Debug)]
pub enum BackendError {
    /// Request could not complete (connection refused, DNS, body read failure).
    Network(String),
    /// The response body was not valid JSON.
    Parse(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Base URL requests are sent to (shown in the title bar).
    fn base_url(&self) -> &str;

    /// Runs one analysis. `Ok(None)` means the backend answered `null`.
    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Option<AnalysisResult>, BackendError>;
}

/// Talks to the backend over HTTP with reqwest.
pub struct HttpAnalyzer {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAnalyzer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Analyzer for HttpAnalyzer {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Option<AnalysisResult>, BackendError> {
        let url = format!("{}{}", self.base_url, request.path());
        info!("POST {} ({})", url, request.mode().label());

        // `.json()` also sets `Content-Type: application/json`
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Backend answered HTTP {} for {}; reading body anyway", status, url);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        debug!("Response body ({} bytes): {}", body.len(), body);

        let value: Value =
            serde_json::from_str(&body).map_err(|e| BackendError::Parse(e.to_string()))?;

        Ok(AnalysisResult::from_value(request.mode(), value))
    }
}
