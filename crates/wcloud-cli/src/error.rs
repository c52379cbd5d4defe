#![forbid(unsafe_code)]

//! CLI error types.

use std::fmt;
use std::io;

/// Everything that can stop the `wcloud` binary.
#[derive(Debug)]
pub enum CliError {
    /// An argument that is not a known flag.
    UnknownArgument(String),
    /// A known flag with a value that does not parse.
    InvalidValue { flag: &'static str, value: String },
    /// Reading input or writing output failed.
    Io(io::Error),
    /// Serializing the layout failed.
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            Self::InvalidValue { flag, value } => write!(f, "invalid {flag} value: {value}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "json: {err}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// An unrecognized `--footprint` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFootprintError(pub String);

impl fmt::Display for ParseFootprintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown footprint '{}' (expected heuristic or measured)", self.0)
    }
}

impl std::error::Error for ParseFootprintError {}

/// An unrecognized `--format` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFormatError(pub String);

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown format '{}' (expected svg or json)", self.0)
    }
}

impl std::error::Error for ParseFormatError {}
