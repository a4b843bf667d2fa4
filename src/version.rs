//! Oracle server version as reported by the driver (`"19.3.0.0.0"`).

use crate::constants::{
    ORA_IDENTIFIER_MAX_LEN_12_2, ORA_IDENTIFIER_MAX_LEN_LEGACY, ORA_LONG_IDENTIFIER_MAJOR,
    ORA_LONG_IDENTIFIER_MINOR,
};
use crate::error::{Error, Result};
use std::str::FromStr;

/// Parsed Oracle version.
///
/// Only `major` and `minor` matter to the dialect. A part that is missing or
/// does not start with a number is `None` and never satisfies a version
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleVersion {
    raw: String,
    pub major: Option<i64>,
    pub minor: Option<i64>,
}

impl OracleVersion {
    /// Parse leniently. Never fails.
    pub fn parse(version: impl Into<String>) -> Self {
        let raw = version.into();
        let mut parts = raw.split('.').map(parse_leading_int);
        let major = parts.next().flatten();
        let minor = parts.next().flatten();
        Self { raw, major, minor }
    }

    /// Parse, rejecting anything without numeric major and minor parts.
    pub fn parse_strict(version: &str) -> Result<Self> {
        let parsed = Self::parse(version);
        if parsed.major.is_none() || parsed.minor.is_none() {
            return Err(Error::InvalidVersion {
                version: version.to_string(),
            });
        }
        Ok(parsed)
    }

    /// The version string as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True for 12.2 and later, which allow 128 character identifiers.
    pub fn supports_long_identifiers(&self) -> bool {
        match (self.major, self.minor) {
            (Some(major), _) if major > ORA_LONG_IDENTIFIER_MAJOR => true,
            (Some(major), Some(minor)) => {
                major == ORA_LONG_IDENTIFIER_MAJOR && minor >= ORA_LONG_IDENTIFIER_MINOR
            }
            _ => false,
        }
    }

    /// Maximum identifier length for this version.
    pub fn identifier_limit(&self) -> usize {
        if self.supports_long_identifiers() {
            ORA_IDENTIFIER_MAX_LEN_12_2
        } else {
            ORA_IDENTIFIER_MAX_LEN_LEGACY
        }
    }
}

impl FromStr for OracleVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_strict(s)
    }
}

impl std::fmt::Display for OracleVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Leading-integer parse: skips leading whitespace, accepts a sign, then
/// takes the longest run of ASCII digits. `"2abc"` is 2, `"abc"` is `None`.
/// Runs of digits too large for `i64` saturate.
fn parse_leading_int(part: &str) -> Option<i64> {
    let part = part.trim_start();
    let (negative, digits) = match part.as_bytes().first() {
        Some(b'-') => (true, &part[1..]),
        Some(b'+') => (false, &part[1..]),
        _ => (false, part),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Only overflow can fail here.
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let v = OracleVersion::parse("19.3.0.0.0");
        assert_eq!(v.major, Some(19));
        assert_eq!(v.minor, Some(3));
        assert_eq!(v.as_str(), "19.3.0.0.0");
        assert_eq!(v.to_string(), "19.3.0.0.0");
    }

    #[test]
    fn test_identifier_limit() {
        assert_eq!(OracleVersion::parse("11.2.0.4").identifier_limit(), 30);
        assert_eq!(OracleVersion::parse("12.1.0.2").identifier_limit(), 30);
        assert_eq!(OracleVersion::parse("12.2").identifier_limit(), 128);
        assert_eq!(OracleVersion::parse("12.2.0.1").identifier_limit(), 128);
        assert_eq!(OracleVersion::parse("18.0").identifier_limit(), 128);
        assert_eq!(OracleVersion::parse("23.4.0.24.5").identifier_limit(), 128);
    }

    #[test]
    fn test_major_only() {
        // Minor is absent, but a major above 12 decides on its own.
        assert_eq!(OracleVersion::parse("19").identifier_limit(), 128);
        assert_eq!(OracleVersion::parse("12").identifier_limit(), 30);
    }

    #[test]
    fn test_malformed_falls_back_to_legacy() {
        assert_eq!(OracleVersion::parse("").identifier_limit(), 30);
        assert_eq!(OracleVersion::parse("abc").identifier_limit(), 30);
        assert_eq!(OracleVersion::parse("x.19").identifier_limit(), 30);
        assert_eq!(OracleVersion::parse("12.x").identifier_limit(), 30);
    }

    #[test]
    fn test_leading_int() {
        assert_eq!(parse_leading_int("2abc"), Some(2));
        assert_eq!(parse_leading_int(" 12"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn test_huge_major_gets_long_identifiers() {
        let v = OracleVersion::parse("99999999999999999999.1");
        assert_eq!(v.major, Some(i64::MAX));
        assert_eq!(v.identifier_limit(), 128);
        assert_eq!(OracleVersion::parse("-99999999999999999999.1").identifier_limit(), 30);
    }

    #[test]
    fn test_parse_strict() {
        assert!(OracleVersion::parse_strict("12.2.0.1").is_ok());
        match "nope".parse::<OracleVersion>() {
            Err(Error::InvalidVersion { version }) => assert_eq!(version, "nope"),
            other => panic!("Expected InvalidVersion, got {:?}", other),
        }
        assert!(OracleVersion::parse_strict("19").is_err());
    }
}
