use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Section of a version string an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
            Field::Prerelease => "prerelease",
            Field::Build => "build",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid character encountered in {field}: {character:?}")]
    InvalidCharacter { field: Field, character: char },

    #[error("leading 0 not allowed in {field}")]
    LeadingZero { field: Field },

    #[error("{field} identifier cannot be empty")]
    EmptyIdentifier { field: Field },

    #[error("invalid {field} version number: {source}")]
    InvalidNumber {
        field: Field,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    /// Field in which the violation was found
    pub fn field(&self) -> Field {
        match self {
            ParseError::InvalidCharacter { field, .. }
            | ParseError::LeadingZero { field }
            | ParseError::EmptyIdentifier { field }
            | ParseError::InvalidNumber { field, .. } => *field,
        }
    }
}
