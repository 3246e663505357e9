//! Company records.

use super::logo::LogoChain;
use super::provider::ProviderId;
use serde::{Deserialize, Serialize};

/// Placeholder ticker assigned to companies added during a session.
///
/// Ticker symbols are display-only; `domain` is the uniqueness key.
pub const CUSTOM_SYMBOL: &str = "CUSTOM";

/// A company and the cloud provider it depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub symbol: String,
    /// Normalized hostname, unique within a session
    pub domain: String,
    pub provider: ProviderId,
}

impl Company {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        domain: impl Into<String>,
        provider: ProviderId,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            domain: domain.into(),
            provider,
        }
    }

    /// A company added by the user during the current session.
    pub fn custom(name: impl Into<String>, domain: impl Into<String>, provider: ProviderId) -> Self {
        Self::new(name, CUSTOM_SYMBOL, domain, provider)
    }

    /// Whether this record was added during the session.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.symbol == CUSTOM_SYMBOL
    }

    /// Case-insensitive substring match on the name.
    #[must_use]
    pub fn name_matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }

    /// Up to two initials, used for the generated avatar badge.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();
        if initials.is_empty() {
            initials.push('?');
        }
        initials
    }

    /// Logo sources for this company, primary tier first.
    #[must_use]
    pub fn logo_chain(&self) -> LogoChain {
        LogoChain::new(&self.domain, &self.name)
    }
}
