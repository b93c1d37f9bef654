//! HTTP client for the external root-finder service.
//!
//! The service exposes a single endpoint:
//!
//! ```text
//! POST /calculate_rhs_roots
//! {"coefficients": [1.0, -3.0, 2.0, -5.0]}
//!
//! 200 {"rhs_roots": ["(3.1+0j)", ...]}
//! 400 {"error": "..."}
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RouthError};

use super::{RootFinder, DEFAULT_ROOT_TIMEOUT};

/// Base URL of a locally running root service.
pub const DEFAULT_ROOT_SERVICE_URL: &str = "http://localhost:5000";

const ROOTS_ENDPOINT: &str = "calculate_rhs_roots";

/// Configuration for the HTTP root finder.
#[derive(Debug, Clone)]
pub struct RootServiceConfig {
    /// Base URL of the service, without the endpoint path.
    pub base_url: String,
    /// Transport-level request timeout.
    pub timeout: Duration,
}

impl Default for RootServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ROOT_SERVICE_URL.to_string(),
            timeout: DEFAULT_ROOT_TIMEOUT,
        }
    }
}

impl RootServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the roots endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), ROOTS_ENDPOINT)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RootRequest<'a> {
    pub coefficients: &'a [f64],
}

#[derive(Debug, Deserialize)]
pub(crate) struct RootResponse {
    #[serde(default)]
    pub rhs_roots: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RootResponse {
    pub(crate) fn into_roots(self) -> Result<Vec<String>> {
        if let Some(error) = self.error {
            return Err(RouthError::root_service(format!("service error: {}", error)));
        }
        Ok(self.rhs_roots.unwrap_or_default())
    }
}

/// Root finder backed by the HTTP service.
#[derive(Debug, Clone)]
pub struct HttpRootFinder {
    client: reqwest::Client,
    config: RootServiceConfig,
}

impl HttpRootFinder {
    pub fn new(config: RootServiceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RouthError::root_service(format!("client setup failed: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &RootServiceConfig {
        &self.config
    }

    async fn request(&self, coefficients: Vec<f64>) -> Result<Vec<String>> {
        let url = self.config.endpoint();
        debug!(%url, "posting coefficients to root service");

        let response = self
            .client
            .post(&url)
            .json(&RootRequest {
                coefficients: &coefficients,
            })
            .send()
            .await
            .map_err(|e| RouthError::root_service(format!("HTTP error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RouthError::root_service(format!("failed to read response: {}", e)))?;

        // Error responses still carry a JSON body with the reason.
        match serde_json::from_str::<RootResponse>(&body) {
            Ok(parsed) if status.is_success() || parsed.error.is_some() => parsed.into_roots(),
            Ok(_) => Err(RouthError::root_service(format!("service returned {}", status))),
            Err(e) => Err(RouthError::root_service(format!(
                "malformed response ({}): {}",
                status, e
            ))),
        }
    }
}

impl RootFinder for HttpRootFinder {
    fn rhs_roots(&self, coefficients: Vec<f64>) -> impl std::future::Future<Output = Result<Vec<String>>> + Send {
        self.request(coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            RootServiceConfig::default().endpoint(),
            "http://localhost:5000/calculate_rhs_roots"
        );
        assert_eq!(
            RootServiceConfig::new("http://roots.internal:8080/").endpoint(),
            "http://roots.internal:8080/calculate_rhs_roots"
        );
    }

    #[test]
    fn test_request_shape() {
        let coefficients = [1.0, -3.0, 2.0, -5.0];
        let json = serde_json::to_string(&RootRequest {
            coefficients: &coefficients,
        })
        .unwrap();
        assert_eq!(json, r#"{"coefficients":[1.0,-3.0,2.0,-5.0]}"#);
    }

    #[test]
    fn test_response_with_roots() {
        let response: RootResponse =
            serde_json::from_str(r#"{"rhs_roots": ["(3.1+0j)", "(0.2+1.1j)"]}"#).unwrap();
        assert_eq!(response.into_roots().unwrap(), vec!["(3.1+0j)", "(0.2+1.1j)"]);
    }

    #[test]
    fn test_response_with_error() {
        let response: RootResponse = serde_json::from_str(r#"{"error": "bad input"}"#).unwrap();
        let err = response.into_roots().unwrap_err();
        assert!(err.to_string().contains("bad input"));
    }

    #[test]
    fn test_response_without_roots_is_empty() {
        let response: RootResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_roots().unwrap().is_empty());
    }
}
