//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;
use std::sync::Arc;

use crate::backend::{AnalysisRequest, AnalysisResult, Analyzer, BackendError};
use crate::core::state::App;

/// An analyzer that never touches the network and answers with nothing.
pub struct StubAnalyzer;

#[async_trait]
impl Analyzer for StubAnalyzer {
    fn base_url(&self) -> &str {
        "http://stub"
    }

    async fn analyze(
        &self,
        _request: &AnalysisRequest,
    ) -> Result<Option<AnalysisResult>, BackendError> {
        Ok(None)
    }
}

/// Creates a test App with a StubAnalyzer.
pub fn test_app() -> App {
    App::new(Arc::new(StubAnalyzer))
}
