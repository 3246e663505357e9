//! Wire types for the detection endpoint.

use crate::model::ProviderId;
use serde::{Deserialize, Serialize};

/// Request body: the URL exactly as the user entered it (trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectRequest {
    pub url: String,
}

/// Success response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectResponse {
    pub provider: ProviderId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(DetectRequest {
            url: "https://www.stripe.com".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "url": "https://www.stripe.com" }));
    }

    #[test]
    fn test_response_ignores_extra_fields() {
        let response: DetectResponse =
            serde_json::from_str(r#"{"provider":"GCP","confidence":0.8}"#).unwrap();
        assert_eq!(response.provider, ProviderId::Gcp);
    }

    #[test]
    fn test_response_requires_provider() {
        assert!(serde_json::from_str::<DetectResponse>(r#"{"vendor":"AWS"}"#).is_err());
    }
}
