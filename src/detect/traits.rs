//! Detector trait for pluggable provider classification.

use crate::error::Result;
use crate::model::ProviderId;

/// Classifies the cloud provider behind a URL.
///
/// The HTTP implementation is [`super::DetectClient`]. Tests and offline
/// tooling can supply their own implementation.
///
/// ```ignore
/// use cloud_deps::detect::{CloudDetector, DetectClient, DetectClientConfig};
///
/// let detector: Box<dyn CloudDetector> = Box::new(DetectClient::new(config)?);
/// let provider = detector.detect("https://www.stripe.com")?;
/// ```
pub trait CloudDetector: Send + Sync {
    /// Classify `url`, which is passed through exactly as the user entered it.
    fn detect(&self, url: &str) -> Result<ProviderId>;

    /// Name of the detector, for logs and status lines.
    fn name(&self) -> &'static str;
}

impl<D: CloudDetector + ?Sized> CloudDetector for std::sync::Arc<D> {
    fn detect(&self, url: &str) -> Result<ProviderId> {
        (**self).detect(url)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<D: CloudDetector + ?Sized> CloudDetector for Box<D> {
    fn detect(&self, url: &str) -> Result<ProviderId> {
        (**self).detect(url)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
