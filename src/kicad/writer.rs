//! `(module ...)` document writer.
//!
//! Coordinates and sizes are written with six decimal places.

use std::fmt::Write as _;

use crate::footprint::{Circle, Footprint, Line, Pad, SILKSCREEN_WIDTH};

/// Reference and value text font: size and stroke thickness (mm).
const TEXT_EFFECTS: &str = "(effects (font (size 0.762 0.762) (thickness 0.127)))";

/// Renders the complete document.
#[must_use]
pub fn render(footprint: &Footprint) -> String {
    let mut out = String::new();
    write_header(&mut out, &footprint.name);
    write_outline(&mut out, &footprint.outline, &footprint.marker);
    write_pads(&mut out, &footprint.pads);
    write_tail(&mut out);
    out
}

/// Module declaration plus reference and value text fields.
fn write_header(out: &mut String, name: &str) {
    // Writes to a String cannot fail.
    let _ = write!(
        out,
        "
(module {name} (layer F.Cu)
  (at 0 0)
  (tags \"CMS SSOP SMD\")
  (attr smd)
  (fp_text reference {name} (at 0 -0.635) (layer F.SilkS)
    {TEXT_EFFECTS}
  )
  (fp_text value Val** (at 0 0.635) (layer F.SilkS)
    {TEXT_EFFECTS}
  )

"
    );
}

fn write_outline(out: &mut String, outline: &[Line], marker: &Circle) {
    for line in outline {
        let _ = writeln!(
            out,
            "  (fp_line (start {:.6} {:.6}) (end {:.6} {:.6}) (layer F.SilkS) (width {SILKSCREEN_WIDTH}))",
            line.start.x, line.start.y, line.end.x, line.end.y
        );
    }
    let _ = writeln!(
        out,
        "  (fp_circle (center {:.6} {:.6}) (end {:.6} {:.6}) (layer F.SilkS) (width {SILKSCREEN_WIDTH}))",
        marker.center.x, marker.center.y, marker.end.x, marker.end.y
    );
}

fn write_pads(out: &mut String, pads: &[Pad]) {
    for pad in pads {
        let _ = writeln!(
            out,
            "  (pad {} smd rect (at {:.6} {:.6}) (size {:.6} {:.6}) (layers F.Cu F.Paste F.Mask))",
            pad.number, pad.at.x, pad.at.y, pad.width, pad.height
        );
    }
}

fn write_tail(out: &mut String) {
    out.push_str(")\n");
}
