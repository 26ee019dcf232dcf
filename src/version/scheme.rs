//! Versioning scheme abstraction

use std::cmp::Ordering;

use crate::version::comparator;
use crate::version::error::ParseError;
use crate::version::parser;
use crate::version::types::VersionData;

/// A versioning scheme: how to read a version string and how to order two
/// parsed versions
///
/// Implementations are stateless, so one instance can be shared freely
/// between threads.
pub trait VersionScheme: Send + Sync {
    /// Parsed representation produced by [`VersionScheme::parse`]
    type Data;
    type Error;

    fn parse(&self, input: &str) -> Result<Self::Data, Self::Error>;

    /// Total order over parsed values
    fn compare(&self, a: &Self::Data, b: &Self::Data) -> Ordering;
}

/// Semantic Versioning 2.0.0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Semver200;

impl VersionScheme for Semver200 {
    type Data = VersionData;
    type Error = ParseError;

    fn parse(&self, input: &str) -> Result<VersionData, ParseError> {
        parser::parse(input)
    }

    fn compare(&self, a: &VersionData, b: &VersionData) -> Ordering {
        comparator::compare(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_with<S: VersionScheme>(scheme: &S, inputs: &[&str]) -> Vec<S::Data>
    where
        S::Error: std::fmt::Debug,
    {
        let mut parsed: Vec<S::Data> = inputs.iter().map(|s| scheme.parse(s).unwrap()).collect();
        parsed.sort_by(|a, b| scheme.compare(a, b));
        parsed
    }

    #[test]
    fn semver200_orders_through_trait() {
        let sorted = sort_with(&Semver200, &["1.0.0", "1.0.0-rc.1", "0.9.9", "1.0.0-beta"]);

        let rendered: Vec<String> = sorted.iter().map(|d| d.to_string()).collect();
        assert_eq!(rendered, ["0.9.9", "1.0.0-beta", "1.0.0-rc.1", "1.0.0"]);
    }

    #[test]
    fn semver200_is_usable_as_trait_object() {
        let scheme: Box<dyn VersionScheme<Data = VersionData, Error = ParseError>> =
            Box::new(Semver200);

        let a = scheme.parse("2.0.0").unwrap();
        let b = scheme.parse("2.0.0-alpha").unwrap();

        assert_eq!(scheme.compare(&a, &b), Ordering::Greater);
        assert!(scheme.parse("2.0").is_err());
    }
}
