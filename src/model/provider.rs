//! Cloud provider identifiers and their static lookup tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of providers a company can be classified under.
///
/// Serialized with the exact labels used by the detection endpoint
/// (`"AWS"`, `"Azure"`, `"GCP"`, `"Oracle"`, `"Alibaba"`, `"Other"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProviderId {
    #[serde(rename = "AWS")]
    Aws,
    Azure,
    #[serde(rename = "GCP")]
    Gcp,
    Oracle,
    Alibaba,
    Other,
}

impl ProviderId {
    /// All providers in their canonical order.
    pub const ALL: [Self; 6] = [
        Self::Aws,
        Self::Azure,
        Self::Gcp,
        Self::Oracle,
        Self::Alibaba,
        Self::Other,
    ];

    /// Providers counted towards the "big three" share.
    pub const BIG_THREE: [Self; 3] = [Self::Aws, Self::Azure, Self::Gcp];

    /// Wire label, as sent and received by the detection endpoint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::Gcp => "GCP",
            Self::Oracle => "Oracle",
            Self::Alibaba => "Alibaba",
            Self::Other => "Other",
        }
    }

    /// Human-facing name used on pills, chart labels and titles.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Azure => "Azure",
            Self::Gcp => "Google Cloud",
            Self::Oracle => "Oracle",
            Self::Alibaba => "Alibaba Cloud",
            Self::Other => "Other",
        }
    }

    /// Brand color as a `#rrggbb` hex string.
    #[must_use]
    pub const fn color_hex(self) -> &'static str {
        match self {
            Self::Aws => "#ff9900",
            Self::Azure => "#0089d6",
            Self::Gcp => "#4285f4",
            Self::Oracle => "#f80000",
            Self::Alibaba => "#ff6a00",
            Self::Other => "#6b7280",
        }
    }

    /// Brand color as an RGB triple.
    #[must_use]
    pub fn color_rgb(self) -> (u8, u8, u8) {
        parse_hex_color(self.color_hex()).unwrap_or((0x6b, 0x72, 0x80))
    }

    /// Vendor logo. `Other` has no logo and the pill shows text only.
    #[must_use]
    pub const fn logo_url(self) -> Option<&'static str> {
        match self {
            Self::Aws => Some(
                "https://upload.wikimedia.org/wikipedia/commons/9/93/Amazon_Web_Services_Logo.svg",
            ),
            Self::Azure => {
                Some("https://upload.wikimedia.org/wikipedia/commons/a/a8/Microsoft_Azure_Logo.svg")
            }
            Self::Gcp => {
                Some("https://upload.wikimedia.org/wikipedia/commons/5/51/Google_Cloud_logo.svg")
            }
            Self::Oracle => {
                Some("https://upload.wikimedia.org/wikipedia/commons/5/50/Oracle_logo.svg")
            }
            Self::Alibaba => {
                Some("https://upload.wikimedia.org/wikipedia/commons/0/0e/Alibaba_Cloud_logo.png")
            }
            Self::Other => None,
        }
    }

    /// Color for an arbitrary wire label, falling back to `Other`.
    #[must_use]
    pub fn color_for_label(label: &str) -> &'static str {
        label
            .parse::<Self>()
            .unwrap_or(Self::Other)
            .color_hex()
    }

    /// Display name for an arbitrary wire label, falling back to `Other`.
    #[must_use]
    pub fn display_name_for_label(label: &str) -> &'static str {
        label
            .parse::<Self>()
            .unwrap_or(Self::Other)
            .display_name()
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label is not one of the known providers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cloud provider '{0}' (expected AWS, Azure, GCP, Oracle, Alibaba or Other)")]
pub struct UnknownProvider(pub String);

impl FromStr for ProviderId {
    type Err = UnknownProvider;

    /// Accepts wire labels and display names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aws" | "amazon" => Ok(Self::Aws),
            "azure" => Ok(Self::Azure),
            "gcp" | "google cloud" | "google" => Ok(Self::Gcp),
            "oracle" => Ok(Self::Oracle),
            "alibaba" | "alibaba cloud" => Ok(Self::Alibaba),
            "other" => Ok(Self::Other),
            _ => Err(UnknownProvider(s.to_string())),
        }
    }
}

/// Parse a `#rrggbb` string.
fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_labels_roundtrip_through_serde() {
        for provider in ProviderId::ALL {
            let json = serde_json::to_string(&provider).unwrap();
            assert_eq!(json, format!("\"{}\"", provider.as_str()));
            let back: ProviderId = serde_json::from_str(&json).unwrap();
            assert_eq!(back, provider);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected_by_serde() {
        let result: Result<ProviderId, _> = serde_json::from_str("\"DigitalOcean\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ProviderId::Gcp.display_name(), "Google Cloud");
        assert_eq!(ProviderId::Alibaba.display_name(), "Alibaba Cloud");
        assert_eq!(ProviderId::Aws.display_name(), "AWS");
    }

    #[test]
    fn test_label_fallbacks() {
        assert_eq!(ProviderId::color_for_label("Hetzner"), "#6b7280");
        assert_eq!(ProviderId::display_name_for_label("Hetzner"), "Other");
        assert_eq!(ProviderId::color_for_label("AWS"), "#ff9900");
    }

    #[test]
    fn test_other_has_no_logo() {
        assert!(ProviderId::Other.logo_url().is_none());
        assert!(ProviderId::ALL
            .iter()
            .filter(|p| **p != ProviderId::Other)
            .all(|p| p.logo_url().is_some()));
    }

    #[test]
    fn test_color_rgb() {
        assert_eq!(ProviderId::Aws.color_rgb(), (0xff, 0x99, 0x00));
        assert_eq!(ProviderId::Gcp.color_rgb(), (0x42, 0x85, 0xf4));
    }

    #[test]
    fn test_from_str_accepts_display_names() {
        assert_eq!("google cloud".parse::<ProviderId>(), Ok(ProviderId::Gcp));
        assert_eq!("AWS".parse::<ProviderId>(), Ok(ProviderId::Aws));
        assert!("nope".parse::<ProviderId>().is_err());
    }
}
