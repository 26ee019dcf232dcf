//! SemVer 2.0.0 parsing and precedence
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Parser    │────▶│ VersionData │◀────│ Comparator  │
//! │  (&str in)  │     │  (types)    │     │ (Ordering)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        └──────────────┐       ┌────────────────┘
//!                       ▼       ▼
//!                 ┌─────────────────────┐
//!                 │ VersionScheme trait │
//!                 │   (Semver200)       │
//!                 └─────────────────────┘
//!                           │
//!                           ▼
//!                 ┌─────────────────────┐
//!                 │  Version<S> facade  │
//!                 └─────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`parser`]: character-level state machine producing [`VersionData`]
//! - [`comparator`]: precedence between two [`VersionData`] values
//! - [`scheme`]: `VersionScheme` trait and the `Semver200` scheme
//! - [`facade`]: `Version<S>`, an ordered, displayable version value
//! - [`types`]: `VersionData` and prerelease identifiers
//! - [`error`]: `ParseError`

pub mod comparator;
pub mod error;
pub mod facade;
pub mod parser;
pub mod scheme;
pub mod types;

pub use comparator::compare;
pub use error::{Field, ParseError};
pub use facade::Version;
pub use parser::parse;
pub use scheme::{Semver200, VersionScheme};
pub use types::{IdentifierKind, PrereleaseIdentifier, VersionData};
