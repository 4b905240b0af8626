//! Crate-level error types.

use std::fmt;

/// Errors produced by the cubenav crate.
///
/// The interaction controller itself never fails; these cover the edges
/// around it (option presets on disk and the browser bindings).
#[derive(Debug)]
pub enum CubeNavError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A DOM call (listener registration, navigation) was rejected.
    Web(String),
}

impl fmt::Display for CubeNavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Web(msg) => write!(f, "web error: {msg}"),
        }
    }
}

impl std::error::Error for CubeNavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CubeNavError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
