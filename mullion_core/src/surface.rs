// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Owned full-color pixel buffers.
//!
//! A [`Surface`] is what a tile cache slot holds. Surfaces are built by the
//! tile synthesizer with the clipped drawing helpers below and are only ever
//! handed out as `&Surface` afterwards.

use alloc::vec;
use alloc::vec::Vec;

use crate::pixel::Pixel;

/// Direction along which a strip repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Repeats left to right (top and bottom strips).
    Horizontal,
    /// Repeats top to bottom (side strips).
    Vertical,
}

/// A rectangular buffer of packed ARGB pixels, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    width: i32,
    height: i32,
    pixels: Vec<Pixel>,
}

impl core::fmt::Debug for Surface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Creates a transparent surface. Dimensions below one are clamped to one.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![Pixel::TRANSPARENT; area(width, height)],
        }
    }

    /// Creates a surface filled with one color.
    #[must_use]
    pub fn filled(width: i32, height: i32, color: Pixel) -> Self {
        let mut s = Self::new(width, height);
        s.pixels.fill(color);
        s
    }

    /// Width in pixels (at least 1).
    #[inline]
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels (at least 1).
    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// All pixels, row-major.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// The pixel data as native-endian bytes, for hosts that upload it as-is.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Sets one pixel. Coordinates outside the surface are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Draws a horizontal line with inclusive, order-independent endpoints.
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Pixel) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.set(x, y, color);
        }
    }

    /// Draws a vertical line with inclusive, order-independent endpoints.
    pub fn vline(&mut self, x: i32, y1: i32, y2: i32, color: Pixel) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.set(x, y, color);
        }
    }

    /// Fills `src` periodically into the rows `y0..y0 + h` of this surface,
    /// anchored at `(0, y0)`.
    pub fn tile_rows(&mut self, src: &Self, y0: i32, h: i32) {
        for y in y0.max(0)..(y0 + h).min(self.height) {
            let sy = (y - y0).rem_euclid(src.height);
            for x in 0..self.width {
                let sx = x.rem_euclid(src.width);
                if let Some(p) = src.pixel(sx, sy) {
                    self.set(x, y, p);
                }
            }
        }
    }

    /// Expands a minimal-period strip to `len` pixels along `axis` by
    /// periodic replication.
    ///
    /// The result satisfies `out[i] == self[i mod period]` along the axis.
    #[must_use]
    pub fn pretiled(&self, len: i32, axis: Axis) -> Self {
        let (w, h) = match axis {
            Axis::Horizontal => (len.max(self.width), self.height),
            Axis::Vertical => (self.width, len.max(self.height)),
        };
        let mut out = Self::new(w, h);
        for y in 0..h {
            for x in 0..w {
                let p = self.pixels[self.offset(x % self.width, y % self.height)];
                let i = out.offset(x, y);
                out.pixels[i] = p;
            }
        }
        out
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && x < self.width && y < self.height).then(|| self.offset(x, y))
    }

    // Caller guarantees the coordinates are in bounds, hence non-negative.
    fn offset(&self, x: i32, y: i32) -> usize {
        to_usize(y) * to_usize(self.width) + to_usize(x)
    }
}

fn area(width: i32, height: i32) -> usize {
    to_usize(width) * to_usize(height)
}

fn to_usize(v: i32) -> usize {
    usize::try_from(v).unwrap_or(0)
}
