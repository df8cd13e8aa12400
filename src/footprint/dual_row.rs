//! Dual-row (SSOP/TSSOP/SOIC style) footprint layout.
//!
//! Pads sit in two rows along X. Pins `1..=n/2` run left to right along the
//! +Y row; pins `n/2+1..=n` run right to left along the -Y row.
//!
//! `n/2` is kept fractional. An odd `num_pins` is not corrected: the half-row
//! count takes the odd start offset, each row gets `n/2` rounded down, and the
//! second row's pin numbers are `i + n/2` truncated. For `n = 13` that is
//! pins 1-6 and 7-12.

use tracing::debug;

use crate::footprint::{Circle, Footprint, Line, Pad, Point};
use crate::params::FootprintParameters;

/// Marker centre inset from the left outline edge, as a fraction of half-height.
const MARKER_INSET: f64 = 0.3;
/// Marker centre Y, as a fraction of half-height.
const MARKER_OFFSET: f64 = 0.7;
/// Marker radius, as a fraction of half-height.
const MARKER_RADIUS: f64 = 0.2;

/// Builds the full footprint for a parameter set.
#[must_use]
pub fn build(params: &FootprintParameters) -> Footprint {
    let footprint = Footprint {
        name: params.name.clone(),
        outline: outline(params),
        marker: orientation_marker(params),
        pads: pads(params),
    };

    debug!(
        name = %footprint.name,
        pads = footprint.pads.len(),
        "Built dual-row footprint"
    );
    footprint
}

/// Body outline rectangle spanning `±total_length/2` by `±space_between_pads/2`.
///
/// Edges are returned bottom, right, top, left.
#[must_use]
pub fn outline(params: &FootprintParameters) -> [Line; 4] {
    let half_length = params.total_length * 0.5;
    let half_height = params.space_between_pads * 0.5;

    [
        Line::new(-half_length, -half_height, half_length, -half_height),
        Line::new(half_length, -half_height, half_length, half_height),
        Line::new(half_length, half_height, -half_length, half_height),
        Line::new(-half_length, half_height, -half_length, -half_height),
    ]
}

/// Pin-1 marker circle near the left end of the +Y row.
#[must_use]
pub fn orientation_marker(params: &FootprintParameters) -> Circle {
    let half_length = params.total_length * 0.5;
    let half_height = params.space_between_pads * 0.5;

    let center = Point::new(
        MARKER_INSET.mul_add(half_height, -half_length),
        half_height * MARKER_OFFSET,
    );
    Circle::new(center, half_height * MARKER_RADIUS)
}

/// Pads in emission order: pin `i` followed by its partner `i + n/2`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // saturating casts, NaN maps to 0
pub fn pads(params: &FootprintParameters) -> Vec<Pad> {
    let half_pins = params.num_pins / 2.0;
    let dist_to_pad_center = (params.pad_height + params.space_between_pads) / 2.0;
    let (mut pos, mut pos2) = row_starts(half_pins, params.spacing);

    let mut pads = Vec::new();
    for i in 1..=half_pins as u32 {
        pads.push(Pad::rectangular(
            i,
            pos,
            dist_to_pad_center,
            params.pad_width,
            params.pad_height,
        ));
        pads.push(Pad::rectangular(
            (f64::from(i) + half_pins) as u32,
            pos2,
            -dist_to_pad_center,
            params.pad_width,
            params.pad_height,
        ));
        pos += params.spacing;
        pos2 -= params.spacing;
    }

    pads
}

/// X of the first pad in each row.
fn row_starts(half_pins: f64, spacing: f64) -> (f64, f64) {
    let offset = if half_pins.rem_euclid(2.0) == 0.0 {
        (half_pins - 1.0) * spacing / 2.0
    } else {
        (half_pins / 2.0).floor() * spacing
    };
    (-offset, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn with_pins(num_pins: u32) -> FootprintParameters {
        with_pin_count(f64::from(num_pins))
    }

    fn with_pin_count(num_pins: f64) -> FootprintParameters {
        FootprintParameters {
            num_pins,
            ..FootprintParameters::default()
        }
    }

    #[test]
    fn outline_follows_body_dimensions() {
        let lines = outline(&FootprintParameters::default());

        // Bottom edge runs left to right at -half_height.
        assert!(approx_eq(lines[0].start.x, -3.25));
        assert!(approx_eq(lines[0].start.y, -2.85));
        assert!(approx_eq(lines[0].end.x, 3.25));
        assert!(approx_eq(lines[0].end.y, -2.85));

        // Each edge starts where the previous one ended.
        for pair in lines.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(lines[3].end, lines[0].start);
    }

    #[test]
    fn outline_ignores_pin_count() {
        assert_eq!(outline(&with_pins(8)), outline(&with_pins(48)));
    }

    #[test]
    fn marker_proportions() {
        let marker = orientation_marker(&FootprintParameters::default());
        assert!(approx_eq(marker.center.x, -3.25 + 0.3 * 2.85));
        assert!(approx_eq(marker.center.y, 0.7 * 2.85));
        assert!(approx_eq(marker.radius(), 0.2 * 2.85));
        assert!(approx_eq(marker.end.x, marker.center.x));
    }

    #[test]
    fn ssop14_odd_half_row() {
        let pads = pads(&FootprintParameters::default());
        assert_eq!(pads.len(), 14);

        // half_pins = 7 is odd: rows start at ±3 pitches.
        assert_eq!(pads[0].number, 1);
        assert!(approx_eq(pads[0].at.x, -1.95));
        assert!(approx_eq(pads[0].at.y, 3.45));
        assert_eq!(pads[1].number, 8);
        assert!(approx_eq(pads[1].at.x, 1.95));
        assert!(approx_eq(pads[1].at.y, -3.45));
    }

    #[test]
    fn ssop20_even_half_row() {
        let pads = pads(&with_pins(20));
        assert_eq!(pads.len(), 20);

        // half_pins = 10 is even: rows start at ±4.5 pitches.
        assert!(approx_eq(pads[0].at.x, -9.0 * 0.65 / 2.0));
        assert!(approx_eq(pads[1].at.x, 9.0 * 0.65 / 2.0));
        assert_eq!(pads[1].number, 11);
    }

    #[test]
    fn pads_numbered_without_gaps() {
        for n in [2, 4, 8, 14, 16, 20, 28, 48] {
            let mut numbers: Vec<u32> = pads(&with_pins(n)).iter().map(|p| p.number).collect();
            numbers.sort_unstable();
            assert_eq!(numbers, (1..=n).collect::<Vec<_>>(), "NUM_PINS {n}");
        }
    }

    #[test]
    fn rows_mirror_each_other() {
        for n in [8, 14, 20] {
            let params = with_pins(n);
            let half = n / 2;
            let pads = pads(&params);
            for pair in pads.chunks(2) {
                let (top, bottom) = (pair[0], pair[1]);
                assert_eq!(bottom.number, top.number + half);
                assert!(approx_eq(top.at.y, -bottom.at.y));
                assert!(approx_eq(top.at.x, -bottom.at.x));
                assert!(approx_eq(top.width, bottom.width));
                assert!(approx_eq(top.height, bottom.height));
            }
        }
    }

    #[test]
    fn pads_advance_by_pitch() {
        let pads = pads(&with_pins(16));
        let top: Vec<f64> = pads.iter().step_by(2).map(|p| p.at.x).collect();
        for pair in top.windows(2) {
            assert!(approx_eq(pair[1] - pair[0], 0.65));
        }
    }

    #[test]
    fn row_distance_uses_pad_height() {
        let params = FootprintParameters {
            pad_height: 1.5,
            space_between_pads: 6.0,
            ..FootprintParameters::default()
        };
        let pads = pads(&params);
        assert!(approx_eq(pads[0].at.y, 3.75));
        assert!(approx_eq(pads[1].at.y, -3.75));
    }

    #[test]
    fn odd_pin_count_drops_last_pin() {
        let pads = pads(&with_pins(15));
        assert_eq!(pads.len(), 14);
        assert_eq!(pads.iter().map(|p| p.number).max(), Some(14));
    }

    #[test]
    fn thirteen_pins_take_odd_half_row_offset() {
        // n/2 = 6.5 is not even: rows start at ±floor(3.25) pitches.
        let pads = pads(&with_pins(13));
        assert_eq!(pads.len(), 12);
        assert!(approx_eq(pads[0].at.x, -1.95));
        assert!(approx_eq(pads[1].at.x, 1.95));

        let numbers: Vec<u32> = pads.iter().map(|p| p.number).collect();
        assert_eq!(numbers, [1, 7, 2, 8, 3, 9, 4, 10, 5, 11, 6, 12]);
    }

    #[test]
    fn fractional_pin_count() {
        // n/2 = 7.25: seven pads per row, partners numbered 8..=14.
        let pads = pads(&with_pin_count(14.5));
        assert_eq!(pads.len(), 14);
        assert!(approx_eq(pads[0].at.x, -1.95));
        assert_eq!(pads[1].number, 8);
        assert_eq!(pads[13].number, 14);
    }

    #[test]
    fn negative_pin_count_places_no_pads() {
        assert!(pads(&with_pin_count(-4.0)).is_empty());
    }

    #[test]
    fn zero_pins_builds_outline_only() {
        let footprint = build(&with_pins(0));
        assert!(footprint.pads.is_empty());
        assert_eq!(footprint.name, "SSOP14");
    }
}
