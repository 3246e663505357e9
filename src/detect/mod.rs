//! Cloud provider detection.
//!
//! The detection endpoint is an external service: it receives the URL the
//! user typed and answers with a best-guess [`ProviderId`](crate::model::ProviderId).
//!
//! ```no_run
//! use cloud_deps::detect::{CloudDetector, DetectClient, DetectClientConfig};
//!
//! let client = DetectClient::new(DetectClientConfig::default()).unwrap();
//! let provider = client.detect("https://www.stripe.com").unwrap();
//! println!("{provider}");
//! ```

mod client;
mod probe;
mod response;
mod traits;

pub use client::{DetectClient, DetectClientConfig, DEFAULT_ENDPOINT};
pub use probe::LogoProbe;
pub use response::{DetectRequest, DetectResponse};
pub use traits::CloudDetector;
