//! Built-in AWS region dataset.

use crate::model::{Geography, Region};

use Geography::{Africa, AsiaPacific, China, Europe, GovCloud, MiddleEast, NorthAmerica, SouthAmerica};

/// (code, name, location, geography, launch year, AZs, opt-in)
const REGIONS: &[(&str, &str, &str, Geography, u16, u8, bool)] = &[
    ("us-east-1", "US East (N. Virginia)", "Northern Virginia", NorthAmerica, 2006, 6, false),
    ("us-east-2", "US East (Ohio)", "Columbus", NorthAmerica, 2016, 3, false),
    ("us-west-1", "US West (N. California)", "San Francisco Bay Area", NorthAmerica, 2009, 3, false),
    ("us-west-2", "US West (Oregon)", "Boardman", NorthAmerica, 2011, 4, false),
    ("ca-central-1", "Canada (Central)", "Montreal", NorthAmerica, 2016, 3, false),
    ("ca-west-1", "Canada West (Calgary)", "Calgary", NorthAmerica, 2023, 3, true),
    ("mx-central-1", "Mexico (Central)", "Querétaro", NorthAmerica, 2025, 3, true),
    ("sa-east-1", "South America (São Paulo)", "São Paulo", SouthAmerica, 2011, 3, false),
    ("eu-west-1", "Europe (Ireland)", "Dublin", Europe, 2007, 3, false),
    ("eu-west-2", "Europe (London)", "London", Europe, 2016, 3, false),
    ("eu-west-3", "Europe (Paris)", "Paris", Europe, 2017, 3, false),
    ("eu-central-1", "Europe (Frankfurt)", "Frankfurt", Europe, 2014, 3, false),
    ("eu-central-2", "Europe (Zurich)", "Zurich", Europe, 2022, 3, true),
    ("eu-north-1", "Europe (Stockholm)", "Stockholm", Europe, 2018, 3, false),
    ("eu-south-1", "Europe (Milan)", "Milan", Europe, 2020, 3, true),
    ("eu-south-2", "Europe (Spain)", "Aragón", Europe, 2022, 3, true),
    ("ap-northeast-1", "Asia Pacific (Tokyo)", "Tokyo", AsiaPacific, 2011, 4, false),
    ("ap-northeast-2", "Asia Pacific (Seoul)", "Seoul", AsiaPacific, 2016, 4, false),
    ("ap-northeast-3", "Asia Pacific (Osaka)", "Osaka", AsiaPacific, 2021, 3, false),
    ("ap-southeast-1", "Asia Pacific (Singapore)", "Singapore", AsiaPacific, 2010, 3, false),
    ("ap-southeast-2", "Asia Pacific (Sydney)", "Sydney", AsiaPacific, 2012, 3, false),
    ("ap-southeast-3", "Asia Pacific (Jakarta)", "Jakarta", AsiaPacific, 2021, 3, true),
    ("ap-southeast-4", "Asia Pacific (Melbourne)", "Melbourne", AsiaPacific, 2023, 3, true),
    ("ap-southeast-5", "Asia Pacific (Malaysia)", "Kuala Lumpur", AsiaPacific, 2024, 3, true),
    ("ap-southeast-7", "Asia Pacific (Thailand)", "Bangkok", AsiaPacific, 2025, 3, true),
    ("ap-south-1", "Asia Pacific (Mumbai)", "Mumbai", AsiaPacific, 2016, 3, false),
    ("ap-south-2", "Asia Pacific (Hyderabad)", "Hyderabad", AsiaPacific, 2022, 3, true),
    ("ap-east-1", "Asia Pacific (Hong Kong)", "Hong Kong", AsiaPacific, 2019, 3, true),
    ("me-south-1", "Middle East (Bahrain)", "Bahrain", MiddleEast, 2019, 3, true),
    ("me-central-1", "Middle East (UAE)", "United Arab Emirates", MiddleEast, 2022, 3, true),
    ("il-central-1", "Israel (Tel Aviv)", "Tel Aviv", MiddleEast, 2023, 3, true),
    ("af-south-1", "Africa (Cape Town)", "Cape Town", Africa, 2020, 3, true),
    ("cn-north-1", "China (Beijing)", "Beijing", China, 2014, 3, false),
    ("cn-northwest-1", "China (Ningxia)", "Ningxia", China, 2017, 3, false),
    ("us-gov-west-1", "AWS GovCloud (US-West)", "Oregon", GovCloud, 2011, 3, false),
    ("us-gov-east-1", "AWS GovCloud (US-East)", "Ohio", GovCloud, 2018, 3, false),
];

/// The immutable built-in AWS region list.
#[must_use]
pub fn builtin_regions() -> Vec<Region> {
    REGIONS
        .iter()
        .map(
            |(code, name, location, geography, launch_year, azs, opt_in)| Region {
                code: (*code).to_string(),
                name: (*name).to_string(),
                location: (*location).to_string(),
                geography: *geography,
                launch_year: *launch_year,
                availability_zones: *azs,
                opt_in_required: *opt_in,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_region_codes_are_unique() {
        let regions = builtin_regions();
        let codes: HashSet<&str> = regions.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes.len(), regions.len());
    }

    #[test]
    fn test_every_geography_is_represented() {
        let regions = builtin_regions();
        for geography in Geography::ALL {
            assert!(
                regions.iter().any(|r| r.geography == geography),
                "no region for {geography}"
            );
        }
    }
}
