//! Two-threshold isoband extraction per cell triangle.
//!
//! In-band corners keep their original slot in the emitted triangles, and a
//! crossing always carries the color of the crossed threshold (`color1` at
//! `iso1`, `color2` at `iso2`), so gradient fills stay continuous across cell
//! borders.
use glam::DVec2;

use crate::color::Color;
use crate::contour::cell::{interpolate_to_value, BandCase, BandSide, CellTriangle, Corner};
use crate::contour::primitives::ColoredTriangle;

/// Appends the triangle's band geometry to `out`: nothing, one triangle, or
/// two triangles forming a quadrilateral.
///
/// Requires `iso1 <= iso2`; the public entry points normalize the order
/// before calling in.
pub fn triangles_for_triangle(
    tri: &CellTriangle,
    iso1: f64,
    iso2: f64,
    color1: Color,
    color2: Color,
    out: &mut Vec<ColoredTriangle>,
) {
    let band_color = |v: f64| color1.lerp(color2, interpolate_to_value(iso1, iso2, v));
    let boundary = |side: BandSide| match side {
        BandSide::Below => (iso1, color1),
        BandSide::Above => (iso2, color2),
    };

    match BandCase::classify(tri.values, iso1, iso2) {
        BandCase::Outside => {}
        BandCase::Inside => {
            out.push(ColoredTriangle {
                positions: tri.corners,
                colors: tri.values.map(band_color),
            });
        }
        BandCase::Corner { apex, side } => {
            let (iso, edge_color) = boundary(side);
            let (a, b) = apex.others();
            let mut positions = [DVec2::ZERO; 3];
            let mut colors = [edge_color; 3];
            positions[apex.index()] = tri.corner(apex);
            colors[apex.index()] = band_color(tri.value(apex));
            positions[a.index()] = tri.crossing(apex, a, iso);
            positions[b.index()] = tri.crossing(apex, b, iso);
            out.push(ColoredTriangle { positions, colors });
        }
        BandCase::Quad { lone, side } => {
            let (iso, edge_color) = boundary(side);
            let (a, b) = lone.others();
            let pa = tri.crossing(lone, a, iso);
            let pb = tri.crossing(lone, b, iso);
            let color_a = band_color(tri.value(a));
            let color_b = band_color(tri.value(b));
            out.push(ColoredTriangle {
                positions: [tri.corner(a), tri.corner(b), pa],
                colors: [color_a, color_b, edge_color],
            });
            out.push(ColoredTriangle {
                positions: [pb, tri.corner(b), pa],
                colors: [edge_color, color_b, edge_color],
            });
        }
        BandCase::Span { lone, side: _ } => {
            let (a, b) = lone.others();
            let strip = [
                tri.crossing(lone, a, iso1),
                tri.crossing(lone, b, iso1),
                tri.crossing(lone, a, iso2),
                tri.crossing(lone, b, iso2),
            ];
            push_strip(out, strip, color1, color2);
        }
        BandCase::Split { low, high } => {
            let mid = Corner::remaining(low, high);
            let strip = [
                tri.crossing(low, mid, iso1),
                tri.crossing(low, high, iso1),
                tri.crossing(mid, high, iso2),
                tri.crossing(low, high, iso2),
            ];
            push_strip(out, strip, color1, color2);
        }
    }
}

/// Band strip between the `iso1` crossings `(la, lb)` and the `iso2`
/// crossings `(ua, ub)`, split along the `lb`-`ua` diagonal.
fn push_strip(
    out: &mut Vec<ColoredTriangle>,
    [la, lb, ua, ub]: [DVec2; 4],
    color1: Color,
    color2: Color,
) {
    out.push(ColoredTriangle {
        positions: [la, lb, ua],
        colors: [color1, color1, color2],
    });
    out.push(ColoredTriangle {
        positions: [ub, lb, ua],
        colors: [color2, color1, color2],
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ScalarGrid;

    const C1: Color = Color(0xff000000);
    const C2: Color = Color(0xffffffff);
    const ISO1: f64 = 1.0;
    const ISO2: f64 = 2.0;

    fn upper(values: [f64; 4]) -> CellTriangle {
        let grid = ScalarGrid::from_raw(2, 2, values.to_vec()).unwrap();
        CellTriangle::upper(&grid, 0, 0)
    }

    fn extract(values: [f64; 4]) -> Vec<ColoredTriangle> {
        let mut out = Vec::new();
        triangles_for_triangle(&upper(values), ISO1, ISO2, C1, C2, &mut out);
        out
    }

    fn mid_gray(v: f64) -> Color {
        C1.lerp(C2, (v - ISO1) / (ISO2 - ISO1))
    }

    #[test]
    fn outside_emits_nothing() {
        assert!(extract([0.0, 0.5, 0.0, 0.0]).is_empty());
        assert!(extract([3.0, 4.0, 5.0, 0.0]).is_empty());
    }

    #[test]
    fn inside_emits_the_full_triangle_with_gradient() {
        let tris = extract([1.25, 1.5, 1.75, 0.0]);
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].positions[0], DVec2::new(0.0, 0.0));
        assert_eq!(tris[0].positions[1], DVec2::new(1.0, 0.0));
        assert_eq!(tris[0].positions[2], DVec2::new(0.0, 1.0));
        assert_eq!(tris[0].colors[0], mid_gray(1.25));
        assert_eq!(tris[0].colors[1], mid_gray(1.5));
        assert_eq!(tris[0].colors[2], mid_gray(1.75));
    }

    #[test]
    fn corner_case_keeps_the_apex_slot() {
        // apex in band at V0, others below: one shrunken triangle
        let tris = extract([1.5, 0.0, 0.0, 0.0]);
        assert_eq!(tris.len(), 1);
        let tri = &tris[0];
        assert_eq!(tri.positions[0], DVec2::new(0.0, 0.0));
        let third = 1.0 / 3.0;
        assert!((tri.positions[1].x - third).abs() < 1e-12);
        assert_eq!(tri.positions[1].y, 0.0);
        assert_eq!(tri.positions[2].x, 0.0);
        assert!((tri.positions[2].y - third).abs() < 1e-12);
        assert_eq!(tri.colors[0], mid_gray(1.5));
        assert_eq!(tri.colors[1], C1);
        assert_eq!(tri.colors[2], C1);
    }

    #[test]
    fn corner_case_above_uses_the_upper_boundary_color() {
        let tris = extract([1.5, 3.0, 3.0, 0.0]);
        assert_eq!(tris.len(), 1);
        assert_eq!(tris[0].colors[0], mid_gray(1.5));
        assert_eq!(tris[0].colors[1], C2);
        assert_eq!(tris[0].colors[2], C2);
    }

    #[test]
    fn quad_case_emits_two_triangles_in_reference_order() {
        // lone corner below at V0, in-band corners keep their slots first
        let tris = extract([0.0, 1.5, 1.5, 0.0]);
        assert_eq!(tris.len(), 2);
        let two_thirds = 2.0 / 3.0;

        assert_eq!(tris[0].positions[0], DVec2::new(1.0, 0.0));
        assert_eq!(tris[0].positions[1], DVec2::new(0.0, 1.0));
        assert!((tris[0].positions[2].x - two_thirds).abs() < 1e-12);
        assert_eq!(tris[0].positions[2].y, 0.0);
        assert_eq!(tris[0].colors, [mid_gray(1.5), mid_gray(1.5), C1]);

        assert_eq!(tris[1].positions[0].x, 0.0);
        assert!((tris[1].positions[0].y - two_thirds).abs() < 1e-12);
        assert_eq!(tris[1].positions[1], DVec2::new(0.0, 1.0));
        assert_eq!(tris[1].positions[2], tris[0].positions[2]);
        assert_eq!(tris[1].colors, [C1, mid_gray(1.5), C1]);
    }

    #[test]
    fn span_case_covers_the_band_strip() {
        // V0 below the band, V1 and V2 above it: both thresholds cross
        let tris = extract([0.0, 3.0, 3.0, 0.0]);
        assert_eq!(tris.len(), 2);
        let third = 1.0 / 3.0;
        let la = DVec2::new(third, 0.0);
        let lb = DVec2::new(0.0, third);
        let ua = DVec2::new(2.0 * third, 0.0);
        let ub = DVec2::new(0.0, 2.0 * third);
        assert!((tris[0].positions[0] - la).length() < 1e-12);
        assert!((tris[0].positions[1] - lb).length() < 1e-12);
        assert!((tris[0].positions[2] - ua).length() < 1e-12);
        assert_eq!(tris[0].colors, [C1, C1, C2]);
        assert!((tris[1].positions[0] - ub).length() < 1e-12);
        assert_eq!(tris[1].colors, [C2, C1, C2]);
    }

    #[test]
    fn split_case_bounds_the_band_between_both_thresholds() {
        // V0 below, V1 in band, V2 above
        let tris = extract([0.0, 1.5, 3.0, 0.0]);
        assert_eq!(tris.len(), 2);
        let la = DVec2::new(2.0 / 3.0, 0.0); // iso1 on V0->V1
        let lb = DVec2::new(0.0, 1.0 / 3.0); // iso1 on V0->V2
        let ua = DVec2::new(2.0 / 3.0, 1.0 / 3.0); // iso2 on V1->V2
        let ub = DVec2::new(0.0, 2.0 / 3.0); // iso2 on V0->V2
        assert!((tris[0].positions[0] - la).length() < 1e-12);
        assert!((tris[0].positions[1] - lb).length() < 1e-12);
        assert!((tris[0].positions[2] - ua).length() < 1e-12);
        assert_eq!(tris[0].colors, [C1, C1, C2]);
        assert!((tris[1].positions[0] - ub).length() < 1e-12);
        assert!((tris[1].positions[1] - lb).length() < 1e-12);
        assert!((tris[1].positions[2] - ua).length() < 1e-12);
        assert_eq!(tris[1].colors, [C2, C1, C2]);
    }

    #[test]
    fn boundary_crossings_land_between_corners() {
        // every emitted vertex is either a corner or strictly between two
        for values in [
            [1.5, 0.0, 0.0, 0.0],
            [0.0, 1.5, 1.5, 0.0],
            [0.0, 3.0, 3.0, 0.0],
            [0.0, 1.5, 3.0, 0.0],
        ] {
            for tri in extract(values) {
                for p in tri.positions {
                    assert!(p.x >= 0.0 && p.x <= 1.0);
                    assert!(p.y >= 0.0 && p.y <= 1.0);
                }
            }
        }
    }
}
