//! The footprint parameter set.

use std::fmt::Write as _;

use serde::Serialize;

use super::key::{NumericKey, ParamKey};

/// Dimensions and naming for a dual-row SMD footprint.
///
/// All lengths are in millimetres. Defaults describe an SSOP14.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintParameters {
    /// Module name, also used as the reference designator text.
    pub name: String,

    /// Pitch between adjacent pin centres along a row.
    pub spacing: f64,

    /// Pad size along the row axis.
    pub pad_width: f64,

    /// Pad size across the row axis.
    pub pad_height: f64,

    /// Outline length along the row axis.
    pub total_length: f64,

    /// Centre-to-centre distance between the two pad rows.
    pub space_between_pads: f64,

    /// Total pin count. Expected to be a whole even number; other values are
    /// laid out as described in [`crate::footprint::dual_row`].
    pub num_pins: f64,
}

impl Default for FootprintParameters {
    fn default() -> Self {
        Self {
            name: default_name(),
            spacing: 0.65,
            pad_width: 0.40,
            pad_height: 1.20,
            total_length: 6.50,
            space_between_pads: 5.70,
            num_pins: 14.0,
        }
    }
}

fn default_name() -> String {
    "SSOP14".to_string()
}

impl FootprintParameters {
    /// Returns the value of a numeric key.
    #[must_use]
    pub fn numeric(&self, key: NumericKey) -> f64 {
        match key {
            NumericKey::Spacing => self.spacing,
            NumericKey::PadWidth => self.pad_width,
            NumericKey::PadHeight => self.pad_height,
            NumericKey::TotalLength => self.total_length,
            NumericKey::SpaceBetweenPads => self.space_between_pads,
            NumericKey::NumPins => self.num_pins,
        }
    }

    /// Renders the parameters in parameter file syntax.
    ///
    /// The result loads back into an identical parameter set.
    #[must_use]
    pub fn to_parameter_file(&self) -> String {
        let mut out = String::from("# ssop-footprint parameters (mm)\n");
        let _ = writeln!(out, "{} {}", ParamKey::NAME, self.name);
        for key in NumericKey::ALL {
            let _ = writeln!(out, "{} {}", key.as_str(), self.numeric(key));
        }
        out
    }
}
