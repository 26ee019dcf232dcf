//! Parsed version data shared by the parser and the comparator

use std::fmt;

use serde::Serialize;

/// Classification of a prerelease identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Only ASCII digits (`123`)
    Numeric,
    /// Contains at least one letter or hyphen (`rc1`, `pre-release`)
    Alphanumeric,
}

impl IdentifierKind {
    /// Classify an identifier by its characters
    pub fn of(value: &str) -> Self {
        if value.bytes().all(|b| b.is_ascii_digit()) {
            IdentifierKind::Numeric
        } else {
            IdentifierKind::Alphanumeric
        }
    }
}

/// A single dot-separated prerelease token
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PrereleaseIdentifier {
    value: String,
    kind: IdentifierKind,
}

impl PrereleaseIdentifier {
    pub(crate) fn new(value: &str) -> Self {
        Self {
            kind: IdentifierKind::of(value),
            value: value.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == IdentifierKind::Numeric
    }
}

impl fmt::Display for PrereleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Structured result of parsing a SemVer 2.0.0 string
///
/// Instances only come out of [`crate::version::parser::parse`], so every
/// value upholds the grammar: no leading zeros in numeric fields, no empty
/// identifiers, and identifiers restricted to `[0-9A-Za-z-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VersionData {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<PrereleaseIdentifier>,
    build: Vec<String>,
}

impl VersionData {
    pub(crate) fn new(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Vec<PrereleaseIdentifier>,
        build: Vec<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers in source order; empty for a release
    pub fn prerelease(&self) -> &[PrereleaseIdentifier] {
        &self.prerelease
    }

    /// Build metadata identifiers in source order
    pub fn build(&self) -> &[String] {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

/// Renders `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`
impl fmt::Display for VersionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some((first, rest)) = self.prerelease.split_first() {
            write!(f, "-{first}")?;
            for id in rest {
                write!(f, ".{id}")?;
            }
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}
