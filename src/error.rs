//! Crate-level error types.

use std::fmt;

/// Errors produced by the helika crate.
#[derive(Debug)]
pub enum HelikaError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Failed to load or parse the section content list.
    SectionLoad(String),
    /// Configuration violates a structural invariant (markers out of
    /// order, anchor index past the unit count, overlapping hotspots).
    InvalidConfig(String),
}

impl fmt::Display for HelikaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SectionLoad(msg) => {
                write!(f, "section load error: {msg}")
            }
            Self::InvalidConfig(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
        }
    }
}

impl std::error::Error for HelikaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HelikaError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
