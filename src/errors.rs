//! Error types for the input and configuration glue around the classifier.
//!
//! Classification itself cannot fail. Everything here describes a problem
//! with what the user handed to the `ftn` binary.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Problems turning input text into integers.
#[derive(Debug, Error)]
pub enum InputError {
    /// Nothing to classify
    #[error("no input: expected an integer")]
    Empty,

    /// Text that does not parse as a 64-bit integer
    #[error("line {line}: '{text}' is not a valid integer")]
    NotAnInteger {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Problems loading or validating search bounds.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {rule} bound {value}: bounds must be positive")]
    InvalidBound { rule: &'static str, value: i64 },
}
