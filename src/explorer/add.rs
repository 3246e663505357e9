//! The add-company workflow.
//!
//! Adding is split in two halves so the network call can run off the UI
//! thread: [`DependencyExplorer::begin_add`] validates the input and flips
//! the `detecting` flag, the caller runs the detector, and
//! [`DependencyExplorer::complete_add`] applies the result.
//! [`DependencyExplorer::submit_with`] runs both halves inline.

use super::domain::{display_name_from_domain, normalize_domain};
use super::DependencyExplorer;
use crate::detect::CloudDetector;
use crate::error::Result;
use crate::model::{Company, ProviderId};

/// Shown when the normalized domain is already in the list.
pub const DUPLICATE_MESSAGE: &str = "Company already exists";

/// Shown for every other failure: bad input, transport error, bad response.
pub const DETECT_FAILED_MESSAGE: &str = "Failed to detect cloud provider. Please try again.";

/// A detection that has been started and awaits its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionRequest {
    /// Trimmed input, sent to the endpoint unchanged
    pub url: String,
    /// Normalized hostname the new company will be keyed by
    pub domain: String,
    generation: u64,
}

/// Result of a step of the add-company workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Input was empty; nothing happened
    Ignored,
    /// A detection is already in flight
    Busy,
    /// Domain already present; no request was made
    Duplicate,
    /// Input could not be normalized or the detection failed
    Failed,
    /// Detection started; run it and pass the result to `complete_add`
    Pending(DetectionRequest),
    /// Company detected and appended
    Added(Company),
    /// The result belonged to a detection that was discarded
    Stale,
}

impl DependencyExplorer {
    /// Validate the add-url field and start a detection.
    pub fn begin_add(&mut self) -> AddOutcome {
        if self.detecting {
            tracing::debug!("ignoring submit while a detection is in flight");
            return AddOutcome::Busy;
        }

        let url = self.pending_url.trim().to_string();
        if url.is_empty() {
            return AddOutcome::Ignored;
        }
        self.error = None;

        let domain = match normalize_domain(&url) {
            Ok(domain) => domain,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "rejected unparsable url");
                self.error = Some(DETECT_FAILED_MESSAGE.to_string());
                return AddOutcome::Failed;
            }
        };

        if self.contains_domain(&domain) {
            tracing::debug!(domain = %domain, "domain already listed");
            self.error = Some(DUPLICATE_MESSAGE.to_string());
            return AddOutcome::Duplicate;
        }

        self.detecting = true;
        tracing::debug!(url = %url, domain = %domain, "detection started");
        AddOutcome::Pending(DetectionRequest {
            url,
            domain,
            generation: self.generation,
        })
    }

    /// Copy the search text into the add-url field and submit it.
    pub fn begin_add_from_search(&mut self) -> AddOutcome {
        if self.detecting {
            return AddOutcome::Busy;
        }
        self.pending_url = self.search.trim().to_string();
        self.begin_add()
    }

    /// Apply the result of a detection started by [`Self::begin_add`].
    pub fn complete_add(
        &mut self,
        request: &DetectionRequest,
        result: Result<ProviderId>,
    ) -> AddOutcome {
        if request.generation != self.generation || !self.detecting {
            tracing::debug!(domain = %request.domain, "dropping stale detection result");
            return AddOutcome::Stale;
        }
        self.detecting = false;

        match result {
            Ok(provider) => {
                // Another add may have landed the same domain meanwhile
                if self.contains_domain(&request.domain) {
                    self.error = Some(DUPLICATE_MESSAGE.to_string());
                    return AddOutcome::Duplicate;
                }
                let company = Company::custom(
                    display_name_from_domain(&request.domain),
                    request.domain.clone(),
                    provider,
                );
                tracing::info!(
                    name = %company.name,
                    domain = %company.domain,
                    provider = %provider,
                    "added company"
                );
                self.added.push(company.clone());
                self.pending_url.clear();
                self.error = None;
                AddOutcome::Added(company)
            }
            Err(e) => {
                tracing::warn!(url = %request.url, error = %e, "cloud provider detection failed");
                self.error = Some(DETECT_FAILED_MESSAGE.to_string());
                AddOutcome::Failed
            }
        }
    }

    /// Run the whole workflow inline against `detector`.
    pub fn submit_with(&mut self, detector: &dyn CloudDetector) -> AddOutcome {
        match self.begin_add() {
            AddOutcome::Pending(request) => {
                let result = detector.detect(&request.url);
                self.complete_add(&request, result)
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CloudDepsError, DetectionErrorKind};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedDetector {
        answer: Option<ProviderId>,
        calls: AtomicUsize,
    }

    impl FixedDetector {
        fn new(answer: Option<ProviderId>) -> Self {
            Self {
                answer,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl CloudDetector for FixedDetector {
        fn detect(&self, _url: &str) -> Result<ProviderId> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.ok_or_else(|| {
                CloudDepsError::detection(
                    "test",
                    DetectionErrorKind::ApiError("status 500".to_string()),
                )
            })
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn explorer() -> DependencyExplorer {
        DependencyExplorer::new(vec![Company::new(
            "Netflix",
            "NFLX",
            "netflix.com",
            ProviderId::Aws,
        )])
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut explorer = explorer();
        explorer.set_pending_url("   ");
        let detector = FixedDetector::new(Some(ProviderId::Aws));
        assert_eq!(explorer.submit_with(&detector), AddOutcome::Ignored);
        assert_eq!(detector.calls.load(Ordering::SeqCst), 0);
        assert!(explorer.error().is_none());
    }

    #[test]
    fn test_duplicate_makes_no_call() {
        let mut explorer = explorer();
        explorer.set_pending_url("https://www.netflix.com");
        let detector = FixedDetector::new(Some(ProviderId::Gcp));
        assert_eq!(explorer.submit_with(&detector), AddOutcome::Duplicate);
        assert_eq!(detector.calls.load(Ordering::SeqCst), 0);
        assert_eq!(explorer.error(), Some(DUPLICATE_MESSAGE));
        assert_eq!(explorer.company_count(), 1);
    }

    #[test]
    fn test_success_appends_custom_company() {
        let mut explorer = explorer();
        explorer.set_pending_url("  https://www.stripe.com ");
        let detector = FixedDetector::new(Some(ProviderId::Aws));

        let outcome = explorer.submit_with(&detector);
        let expected = Company::custom("Stripe", "stripe.com", ProviderId::Aws);
        assert_eq!(outcome, AddOutcome::Added(expected.clone()));
        assert_eq!(explorer.added_companies(), &[expected]);
        assert_eq!(explorer.pending_url(), "");
        assert!(!explorer.is_detecting());
    }

    #[test]
    fn test_failure_sets_generic_message() {
        let mut explorer = explorer();
        explorer.set_pending_url("badsite.com");
        let detector = FixedDetector::new(None);

        assert_eq!(explorer.submit_with(&detector), AddOutcome::Failed);
        assert_eq!(explorer.error(), Some(DETECT_FAILED_MESSAGE));
        assert_eq!(explorer.pending_url(), "badsite.com");
        assert_eq!(explorer.company_count(), 1);
        assert!(!explorer.is_detecting());
    }

    #[test]
    fn test_unparsable_url_fails_without_call() {
        let mut explorer = explorer();
        explorer.set_pending_url("https://");
        let detector = FixedDetector::new(Some(ProviderId::Aws));
        assert_eq!(explorer.submit_with(&detector), AddOutcome::Failed);
        assert_eq!(detector.calls.load(Ordering::SeqCst), 0);
        assert!(!explorer.is_detecting());
    }

    #[test]
    fn test_double_submit_is_busy() {
        let mut explorer = explorer();
        explorer.set_pending_url("stripe.com");
        let AddOutcome::Pending(request) = explorer.begin_add() else {
            panic!("expected pending detection");
        };
        assert!(explorer.is_detecting());
        assert_eq!(explorer.begin_add(), AddOutcome::Busy);

        let outcome = explorer.complete_add(&request, Ok(ProviderId::Gcp));
        assert!(matches!(outcome, AddOutcome::Added(_)));
    }

    #[test]
    fn test_discarded_detection_is_stale() {
        let mut explorer = explorer();
        explorer.set_pending_url("stripe.com");
        let AddOutcome::Pending(request) = explorer.begin_add() else {
            panic!("expected pending detection");
        };
        explorer.discard_in_flight();
        assert!(!explorer.is_detecting());
        assert_eq!(
            explorer.complete_add(&request, Ok(ProviderId::Aws)),
            AddOutcome::Stale
        );
        assert!(explorer.added_companies().is_empty());
    }

    #[test]
    fn test_enter_in_search_submits_search_text() {
        let mut explorer = explorer();
        explorer.set_search("shopify.com", std::time::Instant::now());
        let AddOutcome::Pending(request) = explorer.begin_add_from_search() else {
            panic!("expected pending detection");
        };
        assert_eq!(request.url, "shopify.com");
        assert_eq!(request.domain, "shopify.com");
        assert_eq!(explorer.pending_url(), "shopify.com");
    }

    #[test]
    fn test_new_submit_clears_previous_error() {
        let mut explorer = explorer();
        explorer.set_pending_url("netflix.com");
        let detector = FixedDetector::new(Some(ProviderId::Aws));
        explorer.submit_with(&detector);
        assert!(explorer.error().is_some());

        explorer.set_pending_url("stripe.com");
        explorer.submit_with(&detector);
        assert!(explorer.error().is_none());
    }
}
