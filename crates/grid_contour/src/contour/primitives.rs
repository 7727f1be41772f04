//! Output primitives handed to the renderer.
//!
//! Both types are plain data, freshly allocated per extraction call and owned
//! by the caller. Stroke thickness, fill alpha, and draw order across calls
//! are renderer concerns.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A contour line segment in output space, one solid color for both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub p0: DVec2,
    pub p1: DVec2,
    pub color: Color,
}

/// A triangle with one color per vertex, enabling gradient band fills.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColoredTriangle {
    pub positions: [DVec2; 3],
    pub colors: [Color; 3],
}
