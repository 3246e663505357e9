//! `detect` and `logo` command handlers.

use super::output::OutputFormat;
use super::{EXIT_OK, EXIT_REJECTED};
use crate::detect::{CloudDetector, LogoProbe};
use crate::explorer::{display_name_from_domain, normalize_domain, AddOutcome, DependencyExplorer};
use crate::model::{Company, LogoChain, LogoTier};
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum DetectReport {
    Added { company: Company },
    Duplicate { message: String },
    Failed { message: String },
}

impl DetectReport {
    fn from_outcome(outcome: AddOutcome, explorer: &DependencyExplorer) -> Self {
        let message = explorer.error().unwrap_or_default().to_string();
        match outcome {
            AddOutcome::Added(company) => Self::Added { company },
            AddOutcome::Duplicate => Self::Duplicate { message },
            AddOutcome::Ignored => Self::Failed {
                message: "No URL given".to_string(),
            },
            _ => Self::Failed { message },
        }
    }

    const fn exit_code(&self) -> i32 {
        match self {
            Self::Added { .. } => EXIT_OK,
            Self::Duplicate { .. } | Self::Failed { .. } => EXIT_REJECTED,
        }
    }
}

/// Run the add-company workflow once against `companies`.
///
/// Exits with 1 when the domain is a duplicate or detection fails.
pub fn run_detect(
    url: &str,
    companies: Vec<Company>,
    detector: &dyn CloudDetector,
    format: OutputFormat,
) -> Result<i32> {
    let mut explorer = DependencyExplorer::new(companies);
    explorer.set_pending_url(url);
    tracing::debug!(url, detector = detector.name(), "running detection");

    let outcome = explorer.submit_with(detector);
    let report = DetectReport::from_outcome(outcome, &explorer);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => match &report {
            DetectReport::Added { company } => println!(
                "Added {} ({}) on {}",
                company.name,
                company.domain,
                company.provider.display_name()
            ),
            DetectReport::Duplicate { message } | DetectReport::Failed { message } => {
                eprintln!("{message}");
            }
        },
    }

    Ok(report.exit_code())
}

// ============================================================================
// Logo
// ============================================================================

#[derive(Debug, Serialize)]
struct LogoSource {
    tier: LogoTier,
    url: String,
}

#[derive(Debug, Serialize)]
struct LogoReport {
    domain: String,
    name: String,
    /// Tier that loaded; absent when probing was skipped
    resolved: Option<LogoSource>,
    chain: Vec<LogoSource>,
}

fn chain_sources(chain: &LogoChain) -> Vec<LogoSource> {
    let mut sources = Vec::new();
    let mut tier = Some(chain.tier());
    while let Some(current) = tier {
        sources.push(LogoSource {
            tier: current,
            url: chain.url_for(current),
        });
        tier = current.fallback();
    }
    sources
}

/// Print the logo fallback chain for `domain`, probing it unless `probe` is
/// `None`.
pub fn run_logo(
    domain: &str,
    companies: &[Company],
    probe: Option<&LogoProbe>,
    format: OutputFormat,
) -> Result<i32> {
    let domain = normalize_domain(domain)?;
    let name = companies
        .iter()
        .find(|c| c.domain == domain)
        .map_or_else(|| display_name_from_domain(&domain), |c| c.name.clone());

    let chain = LogoChain::new(&domain, &name);
    let sources = chain_sources(&chain);
    let resolved = probe.map(|probe| {
        let (tier, url) = probe.resolve(chain);
        LogoSource { tier, url }
    });

    let report = LogoReport {
        domain,
        name,
        resolved,
        chain: sources,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            println!("{} ({})", report.name, report.domain);
            for source in &report.chain {
                let marker = match &report.resolved {
                    Some(resolved) if resolved.tier == source.tier => "*",
                    _ => " ",
                };
                println!("{marker} {:<8} {}", source.tier.label(), source.url);
            }
        }
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CloudDepsError, DetectionErrorKind, Result as CrateResult};
    use crate::explorer::{DETECT_FAILED_MESSAGE, DUPLICATE_MESSAGE};
    use crate::model::ProviderId;

    struct Answer(Option<ProviderId>);

    impl CloudDetector for Answer {
        fn detect(&self, _url: &str) -> CrateResult<ProviderId> {
            self.0.ok_or_else(|| {
                CloudDepsError::detection(
                    "test",
                    DetectionErrorKind::ApiError("HTTP 500".to_string()),
                )
            })
        }

        fn name(&self) -> &'static str {
            "answer"
        }
    }

    fn companies() -> Vec<Company> {
        vec![Company::new("Netflix", "NFLX", "netflix.com", ProviderId::Aws)]
    }

    fn report_for(url: &str, answer: Option<ProviderId>) -> DetectReport {
        let mut explorer = DependencyExplorer::new(companies());
        explorer.set_pending_url(url);
        let outcome = explorer.submit_with(&Answer(answer));
        DetectReport::from_outcome(outcome, &explorer)
    }

    #[test]
    fn test_detect_added() {
        let report = report_for("https://www.stripe.com", Some(ProviderId::Aws));
        assert_eq!(report.exit_code(), 0);
        match report {
            DetectReport::Added { company } => {
                assert_eq!(company.name, "Stripe");
                assert_eq!(company.domain, "stripe.com");
            }
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_detect_duplicate_and_failure_exit_one() {
        let duplicate = report_for("netflix.com", Some(ProviderId::Gcp));
        assert_eq!(duplicate.exit_code(), 1);
        assert!(matches!(
            duplicate,
            DetectReport::Duplicate { ref message } if message == DUPLICATE_MESSAGE
        ));

        let failed = report_for("badsite.com", None);
        assert_eq!(failed.exit_code(), 1);
        assert!(matches!(
            failed,
            DetectReport::Failed { ref message } if message == DETECT_FAILED_MESSAGE
        ));
    }

    #[test]
    fn test_report_json_is_tagged() {
        let json = serde_json::to_value(report_for("stripe.com", Some(ProviderId::Azure))).unwrap();
        assert_eq!(json["status"], "added");
        assert_eq!(json["company"]["provider"], "Azure");
    }

    #[test]
    fn test_chain_sources_lists_every_tier() {
        let chain = LogoChain::new("stripe.com", "Stripe");
        let tiers: Vec<LogoTier> = chain_sources(&chain).iter().map(|s| s.tier).collect();
        assert_eq!(tiers, vec![LogoTier::Clearbit, LogoTier::Favicon, LogoTier::Avatar]);
    }
}
