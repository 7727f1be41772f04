//! Packed ARGB colors and channel-wise blending.
//!
//! Colors travel through extraction as plain `0xAARRGGBB` words; the only
//! operation the extractor itself needs is a per-channel linear blend.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A packed 32-bit ARGB color (`0xAARRGGBB`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// Packs the four channels into `0xAARRGGBB`.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Blends `self` toward `other` channel by channel.
    ///
    /// Each channel is the linear blend `ch1*(1-m) + ch2*m`, rounded to the
    /// nearest integer. `m` is clamped to `[0, 1]`; extraction never passes
    /// out-of-range fractions, the clamp covers callers that do.
    pub fn lerp(self, other: Color, m: f64) -> Color {
        let m = m.clamp(0.0, 1.0);
        let blend = |c1: u8, c2: u8| -> u8 {
            let v = f64::from(c1) * (1.0 - m) + f64::from(c2) * m;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color::from_argb(
            blend(self.a(), other.a()),
            blend(self.r(), other.r()),
            blend(self.g(), other.g()),
            blend(self.b(), other.b()),
        )
    }
}
