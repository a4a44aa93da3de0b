// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed pixels and integer color arithmetic.
//!
//! Palette entries arrive as [`peniko::Color`] and are converted once into
//! [`Pixel`], a packed `0xAARRGGBB` word. All derived colors (contour,
//! highlight, shadow, blended transitions) are computed here with the same
//! integer arithmetic every time, so synthesized tiles are bit-for-bit
//! reproducible.

use core::fmt;

use bytemuck::{Pod, Zeroable};
use peniko::Color;

/// A packed `0xAARRGGBB` pixel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    /// `#808080`, the inactive contour in light mode.
    pub const DARK_GRAY: Self = Self::from_rgb(128, 128, 128);
    /// `#c0c0c0`, the inactive contour in dark mode.
    pub const LIGHT_GRAY: Self = Self::from_rgb(192, 192, 192);

    /// Creates an opaque pixel from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }

    /// Creates a pixel from 8-bit channels, alpha first.
    #[inline]
    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Alpha channel.
    #[inline]
    #[must_use]
    pub const fn a(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    /// Red channel.
    #[inline]
    #[must_use]
    pub const fn r(self) -> u8 {
        self.0.to_be_bytes()[1]
    }

    /// Green channel.
    #[inline]
    #[must_use]
    pub const fn g(self) -> u8 {
        self.0.to_be_bytes()[2]
    }

    /// Blue channel.
    #[inline]
    #[must_use]
    pub const fn b(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pixel(#{:08x})", self.0)
    }
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::from_argb(rgba.a, rgba.r, rgba.g, rgba.b)
    }
}

/// Mixes `fg` over `bg`, where `alpha` is the weight of `bg` (0..=255).
///
/// Each channel is `fg * (255 - alpha) / 255 + bg * alpha / 255`, computed
/// with truncating integer division per term. The result is opaque.
#[must_use]
pub fn blend(bg: Pixel, fg: Pixel, alpha: i32) -> Pixel {
    let alpha = alpha.clamp(0, 255);
    let inv = 255 - alpha;
    let mix = |b: u8, f: u8| channel(i32::from(f) * inv / 255 + i32::from(b) * alpha / 255);
    Pixel::from_rgb(mix(bg.r(), fg.r()), mix(bg.g(), fg.g()), mix(bg.b(), fg.b()))
}

/// Hue (0..=359, or -1 for achromatic), saturation and value (0..=255).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hsv {
    /// Hue in degrees, `-1` when the color has no hue.
    pub h: i32,
    /// Saturation.
    pub s: i32,
    /// Value.
    pub v: i32,
}

impl Hsv {
    /// Converts an RGB pixel to integer HSV.
    #[must_use]
    pub fn from_pixel(p: Pixel) -> Self {
        let (r, g, b) = (i32::from(p.r()), i32::from(p.g()), i32::from(p.b()));
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let v = max;
        let s = if max == 0 {
            0
        } else {
            (510 * delta + max) / (2 * max)
        };
        if s == 0 {
            return Self { h: -1, s, v };
        }
        let h = if max == r {
            if g >= b {
                (120 * (g - b) + delta) / (2 * delta)
            } else {
                (120 * (g - b + delta) + delta) / (2 * delta) + 300
            }
        } else if max == g {
            if b > r {
                120 + (120 * (b - r) + delta) / (2 * delta)
            } else {
                60 + (120 * (b - r + delta) + delta) / (2 * delta)
            }
        } else if r > g {
            240 + (120 * (r - g) + delta) / (2 * delta)
        } else {
            180 + (120 * (r - g + delta) + delta) / (2 * delta)
        };
        Self { h, s, v }
    }

    /// Converts back to an opaque pixel.
    #[must_use]
    pub fn to_pixel(self) -> Pixel {
        let s = self.s.clamp(0, 255);
        let v = self.v.clamp(0, 255);
        if s == 0 || self.h < 0 {
            let v = channel(v);
            return Pixel::from_rgb(v, v, v);
        }
        let h = self.h % 360;
        let f = h % 60;
        let sector = h / 60;
        let p = (2 * v * (255 - s) + 255) / 510;
        let (r, g, b) = if sector & 1 == 1 {
            let q = (2 * v * (15300 - s * f) + 15300) / 30600;
            match sector {
                1 => (q, v, p),
                3 => (p, q, v),
                _ => (v, p, q),
            }
        } else {
            let t = (2 * v * (15300 - s * (60 - f)) + 15300) / 30600;
            match sector {
                0 => (v, t, p),
                2 => (p, v, t),
                _ => (t, p, v),
            }
        };
        Pixel::from_rgb(channel(r), channel(g), channel(b))
    }
}

/// Shifts hue, saturation and value by the given amounts, clamping each to
/// its valid range.
#[must_use]
pub fn hsv_relative(base: Pixel, dh: i32, ds: i32, dv: i32) -> Pixel {
    let hsv = Hsv::from_pixel(base);
    Hsv {
        h: (hsv.h + dh).clamp(0, 359),
        s: (hsv.s + ds).clamp(0, 255),
        v: (hsv.v + dv).clamp(0, 255),
    }
    .to_pixel()
}

fn channel(v: i32) -> u8 {
    u8::try_from(v.clamp(0, 255)).unwrap_or(u8::MAX)
}
