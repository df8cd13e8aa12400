//! Footprint parameter loading.
//!
//! A run starts from the SSOP14 defaults in [`FootprintParameters::default`]
//! and optionally overlays values from a parameter file.
//!
//! # Parameter File Format
//!
//! One `KEY VALUE` pair per line, separated by whitespace. Lines starting with
//! `#` are comments; blank lines are ignored. Keys left out keep their default.
//!
//! ```text
//! # 20-pin SSOP
//! NAME SSOP20
//! NUM_PINS 20
//! ```
//!
//! Unknown keys are reported with a warning and skipped. A value that does not
//! parse aborts the load.

mod key;
mod settings;

pub use key::{NumericKey, ParamKey};
pub use settings::FootprintParameters;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::ParamError;

/// Parameters produced by a load, plus the keys that were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedParameters {
    /// The complete parameter set.
    pub parameters: FootprintParameters,

    /// Unrecognised keys, in file order.
    pub unrecognized: Vec<String>,
}

/// Loads parameters, overlaying the file at `path` if one is given.
///
/// # Errors
///
/// Returns an error if:
/// - The parameter file cannot be read
/// - A recognised key has no value
/// - A numeric value does not parse
pub fn load_parameters(path: Option<&Path>) -> Result<LoadedParameters, ParamError> {
    let Some(path) = path else {
        info!("No parameter file given, using defaults");
        return Ok(LoadedParameters {
            parameters: FootprintParameters::default(),
            unrecognized: Vec::new(),
        });
    };

    let contents = std::fs::read_to_string(path).map_err(|e| ParamError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(path = %path.display(), "Loaded parameter file");
    parse_parameters(&contents)
}

/// Parses parameter file text on top of the defaults.
///
/// # Errors
///
/// Returns an error if a recognised key has no value, or a numeric value
/// does not parse.
pub fn parse_parameters(source: &str) -> Result<LoadedParameters, ParamError> {
    let mut parameters = FootprintParameters::default();
    let mut unrecognized = Vec::new();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = text.trim_start();
        if trimmed.starts_with('#') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let Some(token) = tokens.next() else {
            continue;
        };

        match ParamKey::parse(token) {
            ParamKey::Name => {
                let value = tokens.next().ok_or(ParamError::MissingValue {
                    line,
                    key: ParamKey::NAME,
                })?;
                parameters.name = value.to_string();
            }
            ParamKey::Numeric(key) => {
                let value = tokens.next().ok_or(ParamError::MissingValue {
                    line,
                    key: key.as_str(),
                })?;
                set_numeric(&mut parameters, key, value, line)?;
            }
            ParamKey::Unrecognized(key) => {
                warn!(line, key, "Unrecognised parameter");
                unrecognized.push(key.to_string());
                continue;
            }
        }

        if let Some(extra) = tokens.next() {
            debug!(line, extra, "Ignoring trailing tokens");
        }
    }

    Ok(LoadedParameters {
        parameters,
        unrecognized,
    })
}

fn set_numeric(
    parameters: &mut FootprintParameters,
    key: NumericKey,
    value: &str,
    line: usize,
) -> Result<(), ParamError> {
    let number: f64 = value.parse().map_err(|e| ParamError::InvalidNumber {
        line,
        key: key.as_str(),
        value: value.to_string(),
        source: e,
    })?;

    match key {
        NumericKey::Spacing => parameters.spacing = number,
        NumericKey::PadWidth => parameters.pad_width = number,
        NumericKey::PadHeight => parameters.pad_height = number,
        NumericKey::TotalLength => parameters.total_length = number,
        NumericKey::SpaceBetweenPads => parameters.space_between_pads = number,
        NumericKey::NumPins => {
            if !number.is_finite() {
                return Err(ParamError::InvalidPinCount {
                    line,
                    value: value.to_string(),
                });
            }
            if number < 0.0 || number % 2.0 != 0.0 {
                warn!(
                    line,
                    num_pins = number,
                    "NUM_PINS is not an even count, pads will not pair up"
                );
            }
            parameters.num_pins = number;
        }
    }

    debug!(line, key = key.as_str(), number, "Set parameter");
    Ok(())
}
