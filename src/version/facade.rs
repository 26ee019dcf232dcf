//! Comparable version value bundling a scheme with one parsed version

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::version::error::ParseError;
use crate::version::scheme::{Semver200, VersionScheme};
use crate::version::types::VersionData;

/// A parsed version ordered by its scheme
///
/// `==`, `<` and friends delegate to [`VersionScheme::compare`], so for
/// [`Semver200`] two versions that differ only in build metadata are equal.
pub struct Version<S: VersionScheme = Semver200> {
    scheme: S,
    data: S::Data,
}

impl<S: VersionScheme> Version<S> {
    /// Parse `input` with an explicit scheme instance
    pub fn with_scheme(input: &str, scheme: S) -> Result<Self, S::Error> {
        let data = scheme.parse(input)?;
        Ok(Self { scheme, data })
    }

    pub fn data(&self) -> &S::Data {
        &self.data
    }

    pub fn scheme(&self) -> &S {
        &self.scheme
    }

    pub fn into_data(self) -> S::Data {
        self.data
    }
}

impl Version {
    /// Parse a SemVer 2.0.0 string
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::with_scheme(input, Semver200)
    }

    pub fn major(&self) -> u64 {
        self.data.major()
    }

    pub fn minor(&self) -> u64 {
        self.data.minor()
    }

    pub fn patch(&self) -> u64 {
        self.data.patch()
    }

    /// Dot-joined prerelease identifiers, empty for a release
    pub fn prerelease(&self) -> String {
        self.data
            .prerelease()
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Dot-joined build metadata, empty when absent
    pub fn build(&self) -> String {
        self.data.build().join(".")
    }
}

impl From<VersionData> for Version {
    fn from(data: VersionData) -> Self {
        Self {
            scheme: Semver200,
            data,
        }
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<S> Clone for Version<S>
where
    S: VersionScheme + Clone,
    S::Data: Clone,
{
    fn clone(&self) -> Self {
        Self {
            scheme: self.scheme.clone(),
            data: self.data.clone(),
        }
    }
}

impl<S> fmt::Debug for Version<S>
where
    S: VersionScheme + fmt::Debug,
    S::Data: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Version")
            .field("scheme", &self.scheme)
            .field("data", &self.data)
            .finish()
    }
}

impl<S> fmt::Display for Version<S>
where
    S: VersionScheme,
    S::Data: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.data, f)
    }
}

impl<S: VersionScheme> PartialEq for Version<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl<S: VersionScheme> Eq for Version<S> {}

impl<S: VersionScheme> PartialOrd for Version<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: VersionScheme> Ord for Version<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scheme.compare(&self.data, &other.data)
    }
}

impl Serialize for Version {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[rstest]
    #[case("1.0.0")]
    #[case("1.0.0-alpha")]
    #[case("1.0.0+build")]
    #[case("1.0.0-pre-rel.123.test.deadbeef.31415+build.1.2.3")]
    fn display_renders_input_unchanged(#[case] input: &str) {
        assert_eq!(v(input).to_string(), input);
    }

    #[test]
    fn accessors_expose_fields() {
        let version = v("3.2.1-rc.1+linux.x86-64");

        assert_eq!(version.major(), 3);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 1);
        assert_eq!(version.prerelease(), "rc.1");
        assert_eq!(version.build(), "linux.x86-64");
    }

    #[test]
    fn accessors_return_empty_strings_when_absent() {
        let version = v("3.2.1");

        assert_eq!(version.prerelease(), "");
        assert_eq!(version.build(), "");
    }

    #[test]
    fn operators_follow_precedence() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
        assert!(v("1.0.0") > v("1.0.0-rc.1"));
        assert!(v("1.0.0") >= v("1.0.0+build"));
        assert!(v("1.0.0") <= v("1.0.0+build"));
        assert!(v("1.0.1") != v("1.0.0"));
        assert!(v("1.0.0+a") == v("1.0.0+b"));
    }

    #[test]
    fn from_str_reports_parse_error() {
        let err = "1.0.0-01".parse::<Version>().unwrap_err();

        assert!(matches!(err, ParseError::LeadingZero { .. }));
    }

    #[test]
    fn serde_uses_canonical_string() {
        let version = v("1.2.3-beta.2+exp");

        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(json, "\"1.2.3-beta.2+exp\"");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), "1.2.3-beta.2+exp");
    }

    #[test]
    fn deserialize_rejects_invalid_version() {
        let err = serde_json::from_str::<Version>("\"1.0\"").unwrap_err();

        assert!(err.to_string().contains("invalid patch version number"));
    }
}
