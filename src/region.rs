//! Storyblok regions and base URL resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::McpError;

/// A Storyblok API deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Europe (default)
    Eu,
    /// United States
    Us,
    /// Asia-Pacific
    Ap,
    /// Canada
    Ca,
    /// China
    Cn,
}

impl Region {
    /// Every region, in the order advertised by the `set-region` schema.
    pub const ALL: [Region; 5] = [Region::Eu, Region::Us, Region::Ap, Region::Ca, Region::Cn];

    /// Management API base URL for this region.
    pub fn base_url(self) -> &'static str {
        match self {
            Region::Eu => "https://mapi.storyblok.com/v1",
            Region::Us => "https://api-us.storyblok.com/v1",
            Region::Ap => "https://api-ap.storyblok.com/v2",
            Region::Ca => "https://api-ca.storyblok.com/v2",
            Region::Cn => "https://app.storyblokchina.cn",
        }
    }

    /// Lowercase identifier (`eu`, `us`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Eu => "eu",
            Region::Us => "us",
            Region::Ap => "ap",
            Region::Ca => "ca",
            Region::Cn => "cn",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = McpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| McpError::InvalidArg {
                name: "region".to_string(),
                reason: format!("expected one of eu, us, ap, ca, cn; got '{}'", s),
            })
    }
}

/// Guess the region of a space from its id.
///
/// Only US spaces are recognisable (ids starting with `10` followed by more
/// digits); everything else falls back to EU. The prefix rule has not been
/// confirmed against Storyblok's actual id allocation.
pub fn detect_region(space_id: &str) -> Region {
    match space_id.strip_prefix("10") {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => Region::Us,
        _ => Region::Eu,
    }
}

/// Region in effect for the given session fields.
pub fn effective_region(forced: Option<Region>, space_id: Option<&str>) -> Region {
    match (forced, space_id) {
        (Some(region), _) => region,
        (None, Some(id)) => detect_region(id),
        (None, None) => Region::Eu,
    }
}

/// Base URL for the given session fields. Forced region wins over detection.
pub fn resolve_base_url(forced: Option<Region>, space_id: Option<&str>) -> &'static str {
    effective_region(forced, space_id).base_url()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_us_prefix() {
        assert_eq!(detect_region("1001"), Region::Us);
        assert_eq!(detect_region("1099999"), Region::Us);
    }

    #[test]
    fn test_detect_defaults_to_eu() {
        assert_eq!(detect_region("10"), Region::Eu);
        assert_eq!(detect_region("287312"), Region::Eu);
        assert_eq!(detect_region("01001"), Region::Eu);
        assert_eq!(detect_region("10abc"), Region::Eu);
        assert_eq!(detect_region(""), Region::Eu);
    }

    #[test]
    fn test_forced_region_wins() {
        assert_eq!(
            resolve_base_url(Some(Region::Cn), Some("1001")),
            "https://app.storyblokchina.cn"
        );
        assert_eq!(
            resolve_base_url(Some(Region::Eu), Some("1001")),
            "https://mapi.storyblok.com/v1"
        );
    }

    #[test]
    fn test_no_space_defaults_to_eu() {
        assert_eq!(resolve_base_url(None, None), "https://mapi.storyblok.com/v1");
    }

    #[test]
    fn test_parse_region() {
        assert_eq!("ap".parse::<Region>().unwrap(), Region::Ap);
        assert_eq!("ca".parse::<Region>().unwrap(), Region::Ca);
        assert!("EU".parse::<Region>().is_err());
        assert!("mars".parse::<Region>().is_err());
    }
}
