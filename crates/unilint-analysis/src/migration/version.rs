//! Editor version triples.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `major.minor.patch`, ordered lexicographically.
///
/// Parsing never fails: missing or malformed components become 0, so garbage
/// input orders as the lowest version.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UnityVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl UnityVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Parse `6000.0.0`, `2022.3`, `6000`, `2022.3.1f1`, `2021.3.5-beta`.
    /// Release suffixes on the patch component are dropped.
    pub fn parse(version: &str) -> Self {
        let mut parts = version.trim().split(['.', '-']);
        let major = parts.next().map(parse_component).unwrap_or(0);
        let minor = parts.next().map(parse_component).unwrap_or(0);
        let patch = parts
            .next()
            .map(|raw| {
                let end = raw
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(raw.len());
                parse_component(&raw[..end])
            })
            .unwrap_or(0);
        Self { major, minor, patch }
    }
}

fn parse_component(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

impl From<&str> for UnityVersion {
    fn from(version: &str) -> Self {
        Self::parse(version)
    }
}

impl fmt::Display for UnityVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_forms() {
        assert_eq!(UnityVersion::parse("6000.0.0"), UnityVersion::new(6000, 0, 0));
        assert_eq!(UnityVersion::parse("2022.3"), UnityVersion::new(2022, 3, 0));
        assert_eq!(UnityVersion::parse("6000"), UnityVersion::new(6000, 0, 0));
        assert_eq!(UnityVersion::parse("2022.3.1f1"), UnityVersion::new(2022, 3, 1));
        assert_eq!(UnityVersion::parse("2021.3.5-beta"), UnityVersion::new(2021, 3, 5));
    }

    #[test]
    fn garbage_degrades_to_zero() {
        assert_eq!(UnityVersion::parse(""), UnityVersion::default());
        assert_eq!(UnityVersion::parse("latest"), UnityVersion::default());
        assert_eq!(UnityVersion::parse("x.3.y"), UnityVersion::new(0, 3, 0));
        assert_eq!(UnityVersion::parse("2022.3.f1"), UnityVersion::new(2022, 3, 0));
    }

    #[test]
    fn orders_lexicographically() {
        assert!(UnityVersion::parse("2019.4") < UnityVersion::parse("2022.3"));
        assert!(UnityVersion::parse("2022.3.10") > UnityVersion::parse("2022.3.9"));
        assert!(UnityVersion::parse("6000.0") > UnityVersion::parse("2023.2"));
    }

    #[test]
    fn displays_full_triple() {
        assert_eq!(UnityVersion::parse("2022.3").to_string(), "2022.3.0");
    }
}
