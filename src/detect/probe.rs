//! HTTP probe for logo image URLs.

use super::client::build_http_client;
use crate::error::Result;
use crate::model::{LogoChain, LogoTier};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// Checks whether a logo URL serves an image.
pub struct LogoProbe {
    client: Client,
}

impl LogoProbe {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_http_client(Some(timeout))?,
        })
    }

    /// A URL loads when it answers 2xx with an `image/*` content type.
    #[must_use]
    pub fn loads(&self, url: &str) -> bool {
        match self.client.get(url).send() {
            Ok(response) => {
                let is_image = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v.starts_with("image/"));
                response.status().is_success() && is_image
            }
            Err(e) => {
                tracing::debug!(url, error = %e, "logo probe failed");
                false
            }
        }
    }

    /// Walk the fallback chain and return the first tier that loads.
    #[must_use]
    pub fn resolve(&self, chain: LogoChain) -> (LogoTier, String) {
        chain.resolve(|url| self.loads(url))
    }
}
