//! Company logo sources with a cascading fallback chain.
//!
//! The primary logo service is tried first, then a favicon service, and
//! finally a generated initials avatar. A load failure advances the chain;
//! the avatar tier is terminal and never fails from the chain's point of view.

use serde::Serialize;

/// One tier of the logo fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoTier {
    /// Primary logo service
    Clearbit,
    /// Favicon service
    Favicon,
    /// Generated initials avatar
    Avatar,
}

impl LogoTier {
    /// The tier used after this one fails to load.
    #[must_use]
    pub const fn fallback(self) -> Option<Self> {
        match self {
            Self::Clearbit => Some(Self::Favicon),
            Self::Favicon => Some(Self::Avatar),
            Self::Avatar => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clearbit => "logo",
            Self::Favicon => "favicon",
            Self::Avatar => "avatar",
        }
    }
}

/// Logo URL resolution state for a single company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoChain {
    domain: String,
    name: String,
    tier: LogoTier,
}

impl LogoChain {
    #[must_use]
    pub fn new(domain: &str, name: &str) -> Self {
        Self {
            domain: domain.to_string(),
            name: name.to_string(),
            tier: LogoTier::Clearbit,
        }
    }

    /// The tier currently in use.
    #[must_use]
    pub const fn tier(&self) -> LogoTier {
        self.tier
    }

    /// URL for the current tier.
    #[must_use]
    pub fn current_url(&self) -> String {
        self.url_for(self.tier)
    }

    /// URL for a specific tier.
    #[must_use]
    pub fn url_for(&self, tier: LogoTier) -> String {
        match tier {
            LogoTier::Clearbit => format!("https://logo.clearbit.com/{}", self.domain),
            LogoTier::Favicon => format!(
                "https://www.google.com/s2/favicons?domain={}&sz=128",
                self.domain
            ),
            LogoTier::Avatar => {
                let name: String =
                    url::form_urlencoded::byte_serialize(self.name.as_bytes()).collect();
                format!("https://ui-avatars.com/api/?name={name}&background=random&size=128")
            }
        }
    }

    /// Record a load failure for the current tier.
    ///
    /// Returns the next URL to try, or `None` once the avatar tier is reached.
    pub fn on_load_error(&mut self) -> Option<String> {
        let next = self.tier.fallback()?;
        self.tier = next;
        Some(self.current_url())
    }

    /// Walk the chain with `loads`, returning the first tier that succeeds.
    ///
    /// The avatar tier is returned without probing.
    pub fn resolve(mut self, mut loads: impl FnMut(&str) -> bool) -> (LogoTier, String) {
        loop {
            let url = self.current_url();
            if self.tier == LogoTier::Avatar || loads(&url) {
                return (self.tier, url);
            }
            tracing::debug!(url = %url, tier = self.tier.label(), "logo failed to load");
            if self.on_load_error().is_none() {
                return (self.tier, self.current_url());
            }
        }
    }
}
