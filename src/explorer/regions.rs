//! Regions Explorer state.

use crate::model::{Geography, Region};
use serde::Serialize;

/// Number of regions in one geography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeographyCount {
    pub geography: Geography,
    pub count: usize,
}

/// Search and geography filter over a static region list.
#[derive(Debug, Clone)]
pub struct RegionsExplorer {
    regions: Vec<Region>,
    search: String,
    geography: Option<Geography>,
}

impl RegionsExplorer {
    #[must_use]
    pub fn new(regions: Vec<Region>) -> Self {
        Self {
            regions,
            search: String::new(),
            geography: None,
        }
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    #[must_use]
    pub const fn geography(&self) -> Option<Geography> {
        self.geography
    }

    pub fn set_geography(&mut self, geography: Option<Geography>) {
        self.geography = geography;
    }

    /// Regions matching the search text and geography filter.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Region> {
        let query = self.search.to_lowercase();
        self.regions
            .iter()
            .filter(|r| r.matches(&query))
            .filter(|r| self.geography.map_or(true, |g| r.geography == g))
            .collect()
    }

    /// Region count per geography, in canonical order, skipping empty ones.
    #[must_use]
    pub fn geography_counts(&self) -> Vec<GeographyCount> {
        Geography::ALL
            .iter()
            .map(|&geography| GeographyCount {
                geography,
                count: self
                    .regions
                    .iter()
                    .filter(|r| r.geography == geography)
                    .count(),
            })
            .filter(|gc| gc.count > 0)
            .collect()
    }

    /// Availability zones across all regions.
    #[must_use]
    pub fn total_availability_zones(&self) -> usize {
        self.regions
            .iter()
            .map(|r| usize::from(r.availability_zones))
            .sum()
    }

    #[must_use]
    pub fn opt_in_count(&self) -> usize {
        self.regions.iter().filter(|r| r.opt_in_required).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(code: &str, name: &str, location: &str, geography: Geography, azs: u8) -> Region {
        Region {
            code: code.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            geography,
            launch_year: 2010,
            availability_zones: azs,
            opt_in_required: false,
        }
    }

    fn sample() -> RegionsExplorer {
        RegionsExplorer::new(vec![
            region("us-east-1", "US East (N. Virginia)", "Virginia", Geography::NorthAmerica, 6),
            region("eu-west-1", "Europe (Ireland)", "Dublin", Geography::Europe, 3),
            region("eu-central-1", "Europe (Frankfurt)", "Frankfurt", Geography::Europe, 3),
            region("ap-south-1", "Asia Pacific (Mumbai)", "Mumbai", Geography::AsiaPacific, 3),
        ])
    }

    #[test]
    fn test_search_matches_code_name_location() {
        let mut explorer = sample();
        explorer.set_search("EU-");
        assert_eq!(explorer.filtered().len(), 2);
        explorer.set_search("mumbai");
        assert_eq!(explorer.filtered()[0].code, "ap-south-1");
        explorer.set_search("virginia");
        assert_eq!(explorer.filtered()[0].code, "us-east-1");
    }

    #[test]
    fn test_geography_filter() {
        let mut explorer = sample();
        explorer.set_geography(Some(Geography::Europe));
        let codes: Vec<_> = explorer.filtered().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["eu-west-1", "eu-central-1"]);

        explorer.set_search("frank");
        assert_eq!(explorer.filtered().len(), 1);
    }

    #[test]
    fn test_counts_and_totals() {
        let explorer = sample();
        let counts = explorer.geography_counts();
        assert_eq!(counts.len(), 3);
        assert_eq!(
            counts[1],
            GeographyCount {
                geography: Geography::Europe,
                count: 2
            }
        );
        assert_eq!(explorer.total_availability_zones(), 15);
        assert_eq!(explorer.opt_in_count(), 0);
    }
}
