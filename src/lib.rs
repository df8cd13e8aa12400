//! ssop-footprint: KiCad footprints for dual-row SMD packages
//!
//! Generates a `.kicad_mod` footprint for SSOP, TSSOP, SOIC and similar
//! two-row packages from a handful of dimensions.
//!
//! # Pipeline
//!
//! 1. [`params`] — SSOP14 defaults, optionally overlaid from a `KEY VALUE` file
//! 2. [`footprint`] — outline, pin-1 marker and pad coordinates
//! 3. [`kicad`] — `(module ...)` document text
//!
//! # Example
//!
//! ```
//! use ssop_footprint::{footprint::dual_row, kicad, params};
//!
//! let loaded = params::parse_parameters("NAME SSOP20\nNUM_PINS 20\n").unwrap();
//! let footprint = dual_row::build(&loaded.parameters);
//! let document = kicad::render(&footprint);
//!
//! assert!(document.contains("(module SSOP20 (layer F.Cu)"));
//! assert_eq!(footprint.pads.len(), 20);
//! ```
//!
//! # Modules
//!
//! - [`error`] — Error types
//! - [`params`] — Parameter loading
//! - [`footprint`] — Geometry model and dual-row layout
//! - [`kicad`] — KiCad document output

pub mod error;
pub mod footprint;
pub mod kicad;
pub mod params;
