//! SemVer 2.0.0 string parser
//!
//! A single left-to-right pass over the input, driven by a five-state machine:
//!
//! ```text
//! Major --'.'--> Minor --'.'--> Patch --'-'--> Prerelease --'+'--> Build
//!                                 |              |   ^               |  ^
//!                                 |              '.' |              '.' |
//!                                 |              '---'               '--'
//!                                 '------------------'+'-----------> Build
//! ```
//!
//! Separators close the pending token. The last token has no separator after
//! it, so it is closed explicitly once the input is exhausted.

use tracing::debug;

use crate::version::error::{Field, ParseError};
use crate::version::types::{IdentifierKind, PrereleaseIdentifier, VersionData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Major,
    Minor,
    Patch,
    Prerelease,
    Build,
}

impl Phase {
    fn field(self) -> Field {
        match self {
            Phase::Major => Field::Major,
            Phase::Minor => Field::Minor,
            Phase::Patch => Field::Patch,
            Phase::Prerelease => Field::Prerelease,
            Phase::Build => Field::Build,
        }
    }
}

/// Parse a version string into [`VersionData`]
///
/// Fails on the first grammar violation; nothing is returned on error.
///
/// Examples:
/// - "1.0.0" -> 1.0.0 with no prerelease or build
/// - "1.0.0-rc.1+sha.5114f85" -> prerelease ["rc", "1"], build ["sha", "5114f85"]
/// - "01.0.0", "1.0", "1.0.0-" -> error
pub fn parse(input: &str) -> Result<VersionData, ParseError> {
    let result = scan(input);
    if let Err(err) = &result {
        debug!(input, error = %err, "rejected version string");
    }
    result
}

fn scan(input: &str) -> Result<VersionData, ParseError> {
    let mut scanner = Scanner::new(input);
    for (offset, c) in input.char_indices() {
        scanner.step(offset, c)?;
    }
    scanner.finish()
}

/// Scratch state for one parse. Tokens are tracked as byte offsets into the
/// input so nothing is copied until an identifier is accepted.
struct Scanner<'a> {
    input: &'a str,
    phase: Phase,
    /// Byte offset where the pending token starts
    start: usize,
    major: &'a str,
    minor: &'a str,
    patch: &'a str,
    prerelease: Vec<PrereleaseIdentifier>,
    build: Vec<String>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            phase: Phase::Major,
            start: 0,
            major: "",
            minor: "",
            patch: "",
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    fn step(&mut self, offset: usize, c: char) -> Result<(), ParseError> {
        match (self.phase, c) {
            (Phase::Major, '.') => self.close_normal(offset, Phase::Minor),
            (Phase::Minor, '.') => self.close_normal(offset, Phase::Patch),
            (Phase::Patch, '-') => self.close_normal(offset, Phase::Prerelease),
            (Phase::Patch, '+') => self.close_normal(offset, Phase::Build),
            (Phase::Major | Phase::Minor | Phase::Patch, c) => self.push_digit(offset, c)?,
            (Phase::Prerelease, '.') => self.close_identifier(offset, Phase::Prerelease)?,
            (Phase::Prerelease, '+') => self.close_identifier(offset, Phase::Build)?,
            (Phase::Build, '.') => self.close_identifier(offset, Phase::Build)?,
            (Phase::Prerelease | Phase::Build, c) => self.push_identifier_char(c)?,
        }
        Ok(())
    }

    fn finish(mut self) -> Result<VersionData, ParseError> {
        let end = self.input.len();
        match self.phase {
            Phase::Major | Phase::Minor | Phase::Patch => self.store_normal(end),
            Phase::Prerelease | Phase::Build => {
                self.finalize_identifier(end)?;
            }
        }

        Ok(VersionData::new(
            to_number(self.major, Field::Major)?,
            to_number(self.minor, Field::Minor)?,
            to_number(self.patch, Field::Patch)?,
            self.prerelease,
            self.build,
        ))
    }

    fn pending(&self, end: usize) -> &'a str {
        &self.input[self.start..end]
    }

    /// Rejects anything but a digit, and a digit following a lone "0"
    fn push_digit(&self, offset: usize, c: char) -> Result<(), ParseError> {
        let field = self.phase.field();
        if !c.is_ascii_digit() {
            return Err(ParseError::InvalidCharacter {
                field,
                character: c,
            });
        }
        if self.pending(offset) == "0" {
            return Err(ParseError::LeadingZero { field });
        }
        Ok(())
    }

    fn push_identifier_char(&self, c: char) -> Result<(), ParseError> {
        if c.is_ascii_alphanumeric() || c == '-' {
            Ok(())
        } else {
            Err(ParseError::InvalidCharacter {
                field: self.phase.field(),
                character: c,
            })
        }
    }

    fn store_normal(&mut self, end: usize) {
        let text = self.pending(end);
        match self.phase {
            Phase::Major => self.major = text,
            Phase::Minor => self.minor = text,
            Phase::Patch => self.patch = text,
            Phase::Prerelease | Phase::Build => {}
        }
    }

    fn close_normal(&mut self, offset: usize, next: Phase) {
        self.store_normal(offset);
        self.advance(offset, next);
    }

    fn close_identifier(&mut self, offset: usize, next: Phase) -> Result<(), ParseError> {
        self.finalize_identifier(offset)?;
        self.advance(offset, next);
        Ok(())
    }

    fn finalize_identifier(&mut self, end: usize) -> Result<(), ParseError> {
        let id = self.pending(end);
        let field = self.phase.field();
        if id.is_empty() {
            return Err(ParseError::EmptyIdentifier { field });
        }
        match self.phase {
            Phase::Prerelease => {
                if IdentifierKind::of(id) == IdentifierKind::Numeric
                    && id.len() > 1
                    && id.starts_with('0')
                {
                    return Err(ParseError::LeadingZero { field });
                }
                self.prerelease.push(PrereleaseIdentifier::new(id));
            }
            Phase::Build => self.build.push(id.to_string()),
            Phase::Major | Phase::Minor | Phase::Patch => {}
        }
        Ok(())
    }

    /// Separators are ASCII, so the next token starts one byte later
    fn advance(&mut self, separator_offset: usize, next: Phase) {
        self.start = separator_offset + 1;
        self.phase = next;
    }
}

fn to_number(text: &str, field: Field) -> Result<u64, ParseError> {
    text.parse::<u64>()
        .map_err(|source| ParseError::InvalidNumber { field, source })
}
