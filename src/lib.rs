pub mod config;
pub mod logging;
pub mod version;

pub use version::{
    Field, IdentifierKind, ParseError, PrereleaseIdentifier, Semver200, Version, VersionData,
    VersionScheme, compare, parse,
};
