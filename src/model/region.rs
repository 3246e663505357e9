//! AWS region records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad geography an AWS region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Geography {
    NorthAmerica,
    SouthAmerica,
    Europe,
    AsiaPacific,
    MiddleEast,
    Africa,
    China,
    GovCloud,
}

impl Geography {
    pub const ALL: [Self; 8] = [
        Self::NorthAmerica,
        Self::SouthAmerica,
        Self::Europe,
        Self::AsiaPacific,
        Self::MiddleEast,
        Self::Africa,
        Self::China,
        Self::GovCloud,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NorthAmerica => "North America",
            Self::SouthAmerica => "South America",
            Self::Europe => "Europe",
            Self::AsiaPacific => "Asia Pacific",
            Self::MiddleEast => "Middle East",
            Self::Africa => "Africa",
            Self::China => "China",
            Self::GovCloud => "GovCloud",
        }
    }
}

impl fmt::Display for Geography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Geography {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "northamerica" | "na" => Ok(Self::NorthAmerica),
            "southamerica" | "sa" => Ok(Self::SouthAmerica),
            "europe" | "eu" => Ok(Self::Europe),
            "asiapacific" | "apac" | "ap" => Ok(Self::AsiaPacific),
            "middleeast" | "me" => Ok(Self::MiddleEast),
            "africa" | "af" => Ok(Self::Africa),
            "china" | "cn" => Ok(Self::China),
            "govcloud" | "gov" => Ok(Self::GovCloud),
            _ => Err(format!("unknown geography '{s}'")),
        }
    }
}

/// A single AWS region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region code, e.g. `us-east-1`
    pub code: String,
    /// Marketing name, e.g. `US East (N. Virginia)`
    pub name: String,
    /// City or area hosting the region
    pub location: String,
    pub geography: Geography,
    pub launch_year: u16,
    pub availability_zones: u8,
    /// Region must be enabled explicitly on an account
    pub opt_in_required: bool,
}

impl Region {
    /// Case-insensitive match on code, name or location.
    #[must_use]
    pub fn matches(&self, query_lower: &str) -> bool {
        query_lower.is_empty()
            || self.code.to_lowercase().contains(query_lower)
            || self.name.to_lowercase().contains(query_lower)
            || self.location.to_lowercase().contains(query_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geography_from_str() {
        assert_eq!("asia-pacific".parse::<Geography>(), Ok(Geography::AsiaPacific));
        assert_eq!("North America".parse::<Geography>(), Ok(Geography::NorthAmerica));
        assert_eq!("GOV".parse::<Geography>(), Ok(Geography::GovCloud));
        assert!("atlantis".parse::<Geography>().is_err());
    }

    #[test]
    fn test_region_matches() {
        let region = Region {
            code: "eu-west-1".to_string(),
            name: "Europe (Ireland)".to_string(),
            location: "Dublin".to_string(),
            geography: Geography::Europe,
            launch_year: 2007,
            availability_zones: 3,
            opt_in_required: false,
        };
        assert!(region.matches("eu-west"));
        assert!(region.matches("ireland"));
        assert!(region.matches("dublin"));
        assert!(region.matches(""));
        assert!(!region.matches("tokyo"));
    }
}
