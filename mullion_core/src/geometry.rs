// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel rectangles.
//!
//! Chrome layout happens on the device pixel grid, so placements are carried
//! as integer rectangles. A rectangle with a non-positive width or height is
//! representable (layout arithmetic produces them for very small windows) but
//! [invalid](PixelRect::is_valid) and never painted.

use kurbo::Rect;

/// An integer rectangle: origin plus extent, in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width (may be non-positive for degenerate layouts).
    pub width: i32,
    /// Height (may be non-positive for degenerate layouts).
    pub height: i32,
}

impl PixelRect {
    /// Creates a rectangle from origin and extent.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from inclusive corner coordinates.
    #[inline]
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self::new(x1, y1, x2 - x1 + 1, y2 - y1 + 1)
    }

    /// Returns `true` if the rectangle covers at least one pixel.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Inclusive right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Inclusive bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }

    /// Returns `true` if `(x, y)` lies inside the rectangle.
    #[inline]
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// The overlap of two rectangles, or `None` if they are disjoint.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        let r = Self::from_coords(x1, y1, x2, y2);
        r.is_valid().then_some(r)
    }

    /// Converts to a `kurbo` rectangle covering the same pixel area.
    #[must_use]
    pub fn to_kurbo(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x) + f64::from(self.width.max(0)),
            f64::from(self.y) + f64::from(self.height.max(0)),
        )
    }
}
