//! SemVer 2.0.0 precedence
//!
//! Build metadata never takes part in any step.

use std::cmp::Ordering;

use crate::version::types::{PrereleaseIdentifier, VersionData};

/// Compare two parsed versions by precedence
///
/// 1. major, minor, patch numerically
/// 2. a release ranks above any prerelease of the same triple
/// 3. prerelease identifiers pairwise, left to right
/// 4. with an equal common prefix, more identifiers rank higher
pub fn compare(a: &VersionData, b: &VersionData) -> Ordering {
    a.major()
        .cmp(&b.major())
        .then(a.minor().cmp(&b.minor()))
        .then(a.patch().cmp(&b.patch()))
        .then_with(|| compare_prerelease(a.prerelease(), b.prerelease()))
}

fn compare_prerelease(a: &[PrereleaseIdentifier], b: &[PrereleaseIdentifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    a.iter()
        .zip(b)
        .map(|(l, r)| compare_identifiers(l, r))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Compare two prerelease identifiers
///
/// Numeric identifiers compare as integers, alphanumeric ones byte-wise in
/// ASCII order, and an alphanumeric identifier always ranks above a numeric one.
pub fn compare_identifiers(a: &PrereleaseIdentifier, b: &PrereleaseIdentifier) -> Ordering {
    match (a.is_numeric(), b.is_numeric()) {
        (true, true) => compare_numeric(a.as_str(), b.as_str()),
        (false, false) => a.as_str().cmp(b.as_str()),
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
    }
}

/// Digit strings without leading zeros: the longer one is the larger number,
/// equal lengths compare digit by digit. Works past `u64::MAX`.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
