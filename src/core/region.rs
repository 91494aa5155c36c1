//! Region codes accepted for the `region` setting
//!
//! The list mirrors the AWS region identifiers a mobile chat SDK can be
//! pointed at. Parsing is case-insensitive so `US-EAST-1` and `us-east-1`
//! resolve to the same value; anything else is rejected at load time.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    UsEast1,
    UsEast2,
    UsWest1,
    UsWest2,
    CaCentral1,
    SaEast1,
    EuWest1,
    EuWest2,
    EuWest3,
    EuCentral1,
    EuNorth1,
    EuSouth1,
    ApEast1,
    ApSouth1,
    ApNortheast1,
    ApNortheast2,
    ApNortheast3,
    ApSoutheast1,
    ApSoutheast2,
    MeSouth1,
    AfSouth1,
    CnNorth1,
    CnNorthwest1,
    UsGovWest1,
    UsGovEast1,
}

/// Returned when a string is not one of the known region codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegion(pub String);

impl fmt::Display for UnknownRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown region code '{}'", self.0)
    }
}

impl std::error::Error for UnknownRegion {}

impl Region {
    pub const ALL: [Region; 25] = [
        Region::UsEast1,
        Region::UsEast2,
        Region::UsWest1,
        Region::UsWest2,
        Region::CaCentral1,
        Region::SaEast1,
        Region::EuWest1,
        Region::EuWest2,
        Region::EuWest3,
        Region::EuCentral1,
        Region::EuNorth1,
        Region::EuSouth1,
        Region::ApEast1,
        Region::ApSouth1,
        Region::ApNortheast1,
        Region::ApNortheast2,
        Region::ApNortheast3,
        Region::ApSoutheast1,
        Region::ApSoutheast2,
        Region::MeSouth1,
        Region::AfSouth1,
        Region::CnNorth1,
        Region::CnNorthwest1,
        Region::UsGovWest1,
        Region::UsGovEast1,
    ];

    /// The region code, e.g. `us-east-1`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsEast2 => "us-east-2",
            Region::UsWest1 => "us-west-1",
            Region::UsWest2 => "us-west-2",
            Region::CaCentral1 => "ca-central-1",
            Region::SaEast1 => "sa-east-1",
            Region::EuWest1 => "eu-west-1",
            Region::EuWest2 => "eu-west-2",
            Region::EuWest3 => "eu-west-3",
            Region::EuCentral1 => "eu-central-1",
            Region::EuNorth1 => "eu-north-1",
            Region::EuSouth1 => "eu-south-1",
            Region::ApEast1 => "ap-east-1",
            Region::ApSouth1 => "ap-south-1",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::ApNortheast2 => "ap-northeast-2",
            Region::ApNortheast3 => "ap-northeast-3",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::ApSoutheast2 => "ap-southeast-2",
            Region::MeSouth1 => "me-south-1",
            Region::AfSouth1 => "af-south-1",
            Region::CnNorth1 => "cn-north-1",
            Region::CnNorthwest1 => "cn-northwest-1",
            Region::UsGovWest1 => "us-gov-west-1",
            Region::UsGovEast1 => "us-gov-east-1",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Region::UsEast1 => "US East (N. Virginia)",
            Region::UsEast2 => "US East (Ohio)",
            Region::UsWest1 => "US West (N. California)",
            Region::UsWest2 => "US West (Oregon)",
            Region::CaCentral1 => "Canada (Central)",
            Region::SaEast1 => "South America (São Paulo)",
            Region::EuWest1 => "Europe (Ireland)",
            Region::EuWest2 => "Europe (London)",
            Region::EuWest3 => "Europe (Paris)",
            Region::EuCentral1 => "Europe (Frankfurt)",
            Region::EuNorth1 => "Europe (Stockholm)",
            Region::EuSouth1 => "Europe (Milan)",
            Region::ApEast1 => "Asia Pacific (Hong Kong)",
            Region::ApSouth1 => "Asia Pacific (Mumbai)",
            Region::ApNortheast1 => "Asia Pacific (Tokyo)",
            Region::ApNortheast2 => "Asia Pacific (Seoul)",
            Region::ApNortheast3 => "Asia Pacific (Osaka)",
            Region::ApSoutheast1 => "Asia Pacific (Singapore)",
            Region::ApSoutheast2 => "Asia Pacific (Sydney)",
            Region::MeSouth1 => "Middle East (Bahrain)",
            Region::AfSouth1 => "Africa (Cape Town)",
            Region::CnNorth1 => "China (Beijing)",
            Region::CnNorthwest1 => "China (Ningxia)",
            Region::UsGovWest1 => "AWS GovCloud (US-West)",
            Region::UsGovEast1 => "AWS GovCloud (US-East)",
        }
    }

    /// Partition the region belongs to (`aws`, `aws-cn` or `aws-us-gov`).
    pub fn partition(&self) -> &'static str {
        match self {
            Region::CnNorth1 | Region::CnNorthwest1 => "aws-cn",
            Region::UsGovWest1 | Region::UsGovEast1 => "aws-us-gov",
            _ => "aws",
        }
    }

    /// Whether the contact-center service offers chat in this region.
    ///
    /// Informational only: the value is still accepted when this is false,
    /// since availability changes faster than this list.
    pub fn supports_connect_chat(&self) -> bool {
        matches!(
            self,
            Region::UsEast1
                | Region::UsWest2
                | Region::CaCentral1
                | Region::EuWest2
                | Region::EuCentral1
                | Region::ApNortheast1
                | Region::ApNortheast2
                | Region::ApSoutheast1
                | Region::ApSoutheast2
                | Region::AfSouth1
                | Region::UsGovWest1
        )
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("us-east-1".parse::<Region>(), Ok(Region::UsEast1));
        assert_eq!("US-WEST-2".parse::<Region>(), Ok(Region::UsWest2));
        assert_eq!("  eu-central-1 ".parse::<Region>(), Ok(Region::EuCentral1));
    }

    #[test]
    fn rejects_unknown_codes() {
        let err = "mars-west-1".parse::<Region>().unwrap_err();
        assert_eq!(err, UnknownRegion("mars-west-1".to_string()));
        assert!("".parse::<Region>().is_err());
        assert!("useast1".parse::<Region>().is_err());
    }

    #[test]
    fn every_code_parses_back_to_itself() {
        for region in Region::ALL {
            assert_eq!(region.as_str().parse::<Region>(), Ok(region));
            assert_eq!(region.to_string(), region.as_str());
        }
    }

    #[test]
    fn partitions_follow_code_prefix() {
        assert_eq!(Region::CnNorthwest1.partition(), "aws-cn");
        assert_eq!(Region::UsGovEast1.partition(), "aws-us-gov");
        assert_eq!(Region::ApSouth1.partition(), "aws");
    }

    #[test]
    fn serde_uses_region_code() {
        let json = serde_json::to_string(&Region::ApSoutheast2).expect("serialize region");
        assert_eq!(json, "\"ap-southeast-2\"");

        let parsed: Region = serde_json::from_str("\"AF-SOUTH-1\"").expect("deserialize region");
        assert_eq!(parsed, Region::AfSouth1);

        assert!(serde_json::from_str::<Region>("\"mars-west-1\"").is_err());
    }
}
