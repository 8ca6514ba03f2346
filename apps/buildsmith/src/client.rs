//! # Optimizer HTTP Client
//!
//! Wrapper around the optimizer's REST API.
//!
//! ## Endpoints
//!
//! - `GET  <catalog_path>`  → `[{ "name": ..., "max_level": ... }]`
//! - `POST <optimize_path>` → `BuildResult` on success, `{ "error": ... }` on failure
//!
//! ## Outcome Classification
//!
//! | Situation | Result |
//! |-----------|--------|
//! | empty selection | `NoSkillsSelected`, no request sent |
//! | 2xx + well-formed build | `Ok(BuildResult)` |
//! | non-2xx + JSON body | `OptimizationFailed(body.error)` or `"HTTP error, status <code>"` |
//! | unreachable / body that is not JSON / malformed 2xx body | `Transport(..)` |

use crate::config::ClientConfig;
use buildsmith_core::{BuildResult, BuildsmithError, OptimizationRequest, SelectionState, SkillDef};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

// =============================================================================
// OPTIMIZER SEAM
// =============================================================================

/// Anything that can serve the skill catalog and optimize a selection.
///
/// Implemented by [`OptimizerClient`] over HTTP; tests substitute in-process fakes.
pub trait Optimizer {
    /// Retrieve the list of known skills.
    fn fetch_skills(&self) -> impl Future<Output = Result<Vec<SkillDef>, BuildsmithError>> + Send;

    /// Send one optimization request and await its single response.
    fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> impl Future<Output = Result<BuildResult, BuildsmithError>> + Send;

    /// Submit a selection. Empty selections fail before any I/O.
    fn submit(
        &self,
        selection: &SelectionState,
    ) -> impl Future<Output = Result<BuildResult, BuildsmithError>> + Send
    where
        Self: Sync,
    {
        async move {
            let request = OptimizationRequest::from_selection(selection)?;
            self.optimize(&request).await
        }
    }
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// HTTP client for the optimizer service.
#[derive(Debug, Clone)]
pub struct OptimizerClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl OptimizerClient {
    /// Create a client for the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, BuildsmithError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| BuildsmithError::Config(format!("Cannot build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Optimizer for OptimizerClient {
    async fn fetch_skills(&self) -> Result<Vec<SkillDef>, BuildsmithError> {
        let url = self.config.catalog_url();
        tracing::debug!(url = %url, "fetching skill catalog");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| BuildsmithError::CatalogLoad(format!("{url}: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "catalog request failed");
            return Err(BuildsmithError::CatalogLoad(http_status_message(
                status.as_u16(),
            )));
        }

        let defs = resp
            .json::<Vec<SkillDef>>()
            .await
            .map_err(|e| BuildsmithError::CatalogLoad(format!("Malformed catalog: {e}")))?;

        tracing::info!(skills = defs.len(), "skill catalog loaded");
        Ok(defs)
    }

    async fn optimize(&self, request: &OptimizationRequest) -> Result<BuildResult, BuildsmithError> {
        let url = self.config.optimize_url();
        tracing::debug!(url = %url, skills = request.skills.len(), "submitting optimization request");

        let resp = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| BuildsmithError::Transport(format!("{url}: {e}")))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| BuildsmithError::Transport(format!("Reading response: {e}")))?;

        classify_response(status, &body)
    }
}

// =============================================================================
// RESPONSE CLASSIFICATION
// =============================================================================

/// Generic message for a failure status without a usable error body.
#[must_use]
pub fn http_status_message(status: u16) -> String {
    format!("HTTP error, status {status}")
}

/// Turn an optimizer response into a build or a classified error.
pub fn classify_response(status: u16, body: &[u8]) -> Result<BuildResult, BuildsmithError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice::<BuildResult>(body).map_err(|e| {
            tracing::warn!(error = %e, "malformed build result");
            BuildsmithError::Transport(format!("Malformed build result: {e}"))
        });
    }

    let value = serde_json::from_slice::<Value>(body).map_err(|e| {
        tracing::warn!(status, error = %e, "malformed error response");
        BuildsmithError::Transport(format!("Malformed error response: {e}"))
    })?;

    let message = value
        .get("error")
        .and_then(Value::as_str)
        .map_or_else(|| http_status_message(status), str::to_string);

    tracing::warn!(status, message = %message, "optimizer rejected request");
    Err(BuildsmithError::OptimizationFailed(message))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_BUILD: &str = r#"{
        "defense": 310,
        "armor": [],
        "talisman": null,
        "decorations": [],
        "skills": {},
        "target_skills": {},
        "remaining_weighted_slots": 4
    }"#;

    #[test]
    fn success_status_parses_build() {
        let build = classify_response(200, MINIMAL_BUILD.as_bytes()).expect("build");
        assert_eq!(build.defense.to_string(), "310");
    }

    #[test]
    fn error_field_is_surfaced_verbatim() {
        let result = classify_response(404, br#"{"error":"infeasible target"}"#);
        assert_eq!(
            result,
            Err(BuildsmithError::OptimizationFailed(
                "infeasible target".to_string()
            ))
        );
    }

    #[test]
    fn failure_without_error_field_uses_status() {
        let result = classify_response(500, br#"{"detail":"boom"}"#);
        assert_eq!(
            result,
            Err(BuildsmithError::OptimizationFailed(
                "HTTP error, status 500".to_string()
            ))
        );
    }

    #[test]
    fn failure_with_non_json_body_is_transport_error() {
        let result = classify_response(500, b"{not json");
        assert!(matches!(result, Err(BuildsmithError::Transport(_))));

        let html = classify_response(502, b"<html>Bad Gateway</html>");
        assert!(matches!(html, Err(BuildsmithError::Transport(_))));
    }

    #[test]
    fn non_string_error_field_uses_status() {
        let result = classify_response(400, br#"{"error":{"code":7}}"#);
        assert_eq!(
            result,
            Err(BuildsmithError::OptimizationFailed(
                "HTTP error, status 400".to_string()
            ))
        );
    }

    #[test]
    fn malformed_success_body_is_transport_error() {
        let result = classify_response(200, b"{not json");
        assert!(matches!(result, Err(BuildsmithError::Transport(_))));

        let wrong_shape = classify_response(200, br#"{"defense":1}"#);
        assert!(matches!(wrong_shape, Err(BuildsmithError::Transport(_))));
    }
}
