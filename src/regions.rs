//! AWS region metadata
//!
//! Static tables used to group regions by continent in the release notes.
//! Regions not listed here land in the "Other" group under their own code.

/// Continent label for regions missing from [`REGIONS`]
pub const OTHER_CONTINENT: &str = "Other";

/// Region used for the CloudFormation example when it has a layer
pub const PREFERRED_REGION: &str = "us-east-1";

/// AWS region information
#[derive(Debug, Clone, Copy)]
pub struct RegionInfo {
    pub code: &'static str,
    pub continent: &'static str,
    pub name: &'static str,
}

pub const REGIONS: &[RegionInfo] = &[
    // North America
    RegionInfo {
        code: "ca-central-1",
        continent: "North America",
        name: "Canada (Central)",
    },
    RegionInfo {
        code: "ca-west-1",
        continent: "North America",
        name: "Canada (West)",
    },
    RegionInfo {
        code: "us-east-1",
        continent: "North America",
        name: "US East (N. Virginia)",
    },
    RegionInfo {
        code: "us-east-2",
        continent: "North America",
        name: "US East (Ohio)",
    },
    RegionInfo {
        code: "us-west-2",
        continent: "North America",
        name: "US West (Oregon)",
    },
    // Europe
    RegionInfo {
        code: "eu-central-1",
        continent: "Europe",
        name: "Europe (Frankfurt)",
    },
    RegionInfo {
        code: "eu-central-2",
        continent: "Europe",
        name: "Europe (Zurich)",
    },
    RegionInfo {
        code: "eu-north-1",
        continent: "Europe",
        name: "Europe (Stockholm)",
    },
    RegionInfo {
        code: "eu-south-1",
        continent: "Europe",
        name: "Europe (Milan)",
    },
    RegionInfo {
        code: "eu-south-2",
        continent: "Europe",
        name: "Europe (Spain)",
    },
    RegionInfo {
        code: "eu-west-1",
        continent: "Europe",
        name: "Europe (Ireland)",
    },
    RegionInfo {
        code: "eu-west-2",
        continent: "Europe",
        name: "Europe (London)",
    },
    RegionInfo {
        code: "eu-west-3",
        continent: "Europe",
        name: "Europe (Paris)",
    },
];

/// Look up a known region by code
pub fn lookup(code: &str) -> Option<&'static RegionInfo> {
    REGIONS.iter().find(|r| r.code == code)
}

/// Continent a region is grouped under
pub fn continent_for(code: &str) -> &'static str {
    lookup(code).map_or(OTHER_CONTINENT, |r| r.continent)
}

/// Human readable region name, falling back to the code itself
pub fn display_name_for(code: &str) -> String {
    lookup(code).map_or_else(|| code.to_string(), |r| r.name.to_string())
}
