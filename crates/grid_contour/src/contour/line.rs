//! Single-threshold isoline extraction per cell triangle.
use crate::color::Color;
use crate::contour::cell::{CellTriangle, LineCase};
use crate::contour::primitives::Segment;

/// Computes the triangle's iso-crossing segment, if any.
///
/// With lone corner `L` and the other two corners `(a, b)` in slot order, the
/// endpoints are the crossings on the edges `L->a` and `L->b`, in that order.
/// The fixed per-case endpoint order is part of the output contract;
/// consumers may rely on it for fill-side determination. Degenerate segments
/// (a corner value equal to the threshold puts a crossing exactly on a
/// corner) are emitted as computed, never filtered.
pub fn segment_for_triangle(tri: &CellTriangle, iso: f64, color: Color) -> Option<Segment> {
    let lone = match LineCase::classify(tri.values, iso) {
        LineCase::None => return None,
        LineCase::Above(corner) | LineCase::Below(corner) => corner,
    };
    let (a, b) = lone.others();
    Some(Segment {
        p0: tri.crossing(lone, a, iso),
        p1: tri.crossing(lone, b, iso),
        color,
    })
}
