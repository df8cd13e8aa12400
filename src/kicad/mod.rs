//! KiCad footprint output.
//!
//! Renders a [`Footprint`](crate::footprint::Footprint) as a KiCad
//! `(module ...)` S-expression, the format of `.kicad_mod` files.
//!
//! # Layers
//!
//! | Element            | Layer(s)                  |
//! |--------------------|---------------------------|
//! | Module             | F.Cu                      |
//! | Text, outline, dot | F.SilkS                   |
//! | Pads               | F.Cu, F.Paste, F.Mask     |

pub mod writer;

pub use writer::render;
