//! HTTP client for the cloud provider detection endpoint.

use super::response::{DetectRequest, DetectResponse};
use super::traits::CloudDetector;
use crate::error::{CloudDepsError, DetectionErrorKind, ErrorContext, Result};
use crate::model::ProviderId;
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

/// Default endpoint used when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/detect-cloud";

/// Detection client configuration.
#[derive(Debug, Clone)]
pub struct DetectClientConfig {
    /// Full URL of the detection endpoint
    pub endpoint: String,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
}

impl Default for DetectClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

/// Blocking HTTP client for the detection endpoint.
///
/// Sends a single POST per call. There is no retry: a failed detection is
/// reported to the user, who can submit again.
pub struct DetectClient {
    client: Client,
    config: DetectClientConfig,
}

/// Helper to convert reqwest errors to detection errors
fn network_error(msg: &str, err: reqwest::Error) -> CloudDepsError {
    CloudDepsError::detection(msg, DetectionErrorKind::NetworkError(err.to_string()))
}

/// Helper to create API errors
fn api_error(msg: impl Into<String>) -> CloudDepsError {
    CloudDepsError::detection("API request", DetectionErrorKind::ApiError(msg.into()))
}

pub(crate) fn build_http_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| network_error("Failed to create HTTP client", e))
}

impl DetectClient {
    /// Create a new detection client.
    ///
    /// The endpoint must be an absolute `http` or `https` URL.
    pub fn new(config: DetectClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| {
            CloudDepsError::config(format!(
                "invalid detection endpoint '{}': {e}",
                config.endpoint
            ))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(CloudDepsError::validation(format!(
                "detection endpoint must use http or https, got '{}'",
                endpoint.scheme()
            )));
        }

        let client = build_http_client(config.timeout).context("creating detection client")?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// POST `{ "url": url }` and parse `{ "provider": ... }`.
    pub fn detect_provider(&self, url: &str) -> Result<ProviderId> {
        let body = DetectRequest {
            url: url.to_string(),
        };

        tracing::debug!(endpoint = %self.config.endpoint, url, "requesting provider detection");

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .map_err(|e| network_error("Failed to send detection request", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(api_error(format!(
                "detection endpoint returned error status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let parsed: DetectResponse = response.json().map_err(|e| {
            CloudDepsError::detection(
                "parsing response",
                DetectionErrorKind::InvalidResponse(e.to_string()),
            )
        })?;

        tracing::debug!(url, provider = %parsed.provider, "provider detected");
        Ok(parsed.provider)
    }
}

impl CloudDetector for DetectClient {
    fn detect(&self, url: &str) -> Result<ProviderId> {
        self.detect_provider(url)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = DetectClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_client_builds_with_timeout() {
        let client = DetectClient::new(DetectClientConfig {
            endpoint: "http://127.0.0.1:9/api/detect-cloud".to_string(),
            timeout: Some(Duration::from_secs(2)),
        })
        .unwrap();
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/api/detect-cloud");
        assert_eq!(client.name(), "http");
    }

    #[test]
    fn test_client_rejects_bad_endpoint() {
        let relative = DetectClient::new(DetectClientConfig {
            endpoint: "/api/detect-cloud".to_string(),
            timeout: None,
        });
        assert!(matches!(relative, Err(CloudDepsError::Config(_))));

        let ftp = DetectClient::new(DetectClientConfig {
            endpoint: "ftp://example.com/detect".to_string(),
            timeout: None,
        });
        assert!(matches!(ftp, Err(CloudDepsError::Validation(_))));
    }
}
