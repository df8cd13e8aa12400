//! Error types for ssop-footprint.
//!
//! Every error here is fatal: the run stops before any part of the footprint
//! document is written.

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading footprint parameters.
#[derive(Error, Debug)]
pub enum ParamError {
    /// Parameter file could not be read.
    #[error("failed to read parameter file: {path}")]
    Read {
        /// Path to the parameter file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A numeric parameter's value is not a number.
    #[error("line {line}: invalid number '{value}' for {key}")]
    InvalidNumber {
        /// 1-based line number in the parameter source.
        line: usize,
        /// Parameter key.
        key: &'static str,
        /// The offending value token.
        value: String,
        /// The underlying parse error.
        #[source]
        source: ParseFloatError,
    },

    /// A recognised key has no value token.
    #[error("line {line}: missing value for {key}")]
    MissingValue {
        /// 1-based line number in the parameter source.
        line: usize,
        /// Parameter key.
        key: &'static str,
    },

    /// `NUM_PINS` parsed as a number but is infinite or NaN.
    #[error("line {line}: NUM_PINS must be finite, got '{value}'")]
    InvalidPinCount {
        /// 1-based line number in the parameter source.
        line: usize,
        /// The offending value token.
        value: String,
    },
}

/// Errors that can occur while writing the generated document.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output file or stream could not be written.
    #[error("failed to write output: {path}")]
    Write {
        /// Output destination (`-` for stdout).
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The footprint model could not be serialised.
    #[error("failed to serialise footprint as JSON")]
    Json(#[from] serde_json::Error),
}
