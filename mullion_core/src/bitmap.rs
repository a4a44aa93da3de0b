// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-bit square glyph masks.

use alloc::vec;
use alloc::vec::Vec;

/// A square monochrome mask, one bit per pixel, rows padded to whole bytes.
///
/// Set bits are opaque glyph pixels; the caller picks the color when
/// drawing (see `Canvas::draw_mask` in `mullion_render`).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    size: i32,
    stride: usize,
    bits: Vec<u8>,
}

impl core::fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Bitmap")
            .field("size", &self.size)
            .field("set", &self.count_set())
            .finish_non_exhaustive()
    }
}

impl Bitmap {
    /// Creates an empty `size`×`size` mask. Sizes below one are clamped to one.
    #[must_use]
    pub fn new(size: i32) -> Self {
        let size = size.max(1);
        let n = usize::try_from(size).unwrap_or(1);
        let stride = n.div_ceil(8);
        Self {
            size,
            stride,
            bits: vec![0; stride * n],
        }
    }

    /// Edge length in pixels.
    #[inline]
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns `true` if the pixel at `(x, y)` is set. Out of range is unset.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.locate(x, y)
            .is_some_and(|(byte, mask)| self.bits[byte] & mask != 0)
    }

    /// Sets one pixel. Coordinates outside the mask are ignored.
    pub fn set(&mut self, x: i32, y: i32) {
        if let Some((byte, mask)) = self.locate(x, y) {
            self.bits[byte] |= mask;
        }
    }

    /// Sets an axis-aligned line with inclusive, order-independent endpoints.
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        debug_assert!(
            x1 == x2 || y1 == y2,
            "only axis-aligned lines are drawn as lines"
        );
        for y in y1.min(y2)..=y1.max(y2) {
            for x in x1.min(x2)..=x1.max(x2) {
                self.set(x, y);
            }
        }
    }

    /// Number of set pixels.
    #[must_use]
    pub fn count_set(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Iterates the coordinates of set pixels in row-major order.
    pub fn iter_set(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |y| (0..n).filter(move |&x| self.get(x, y)).map(move |x| (x, y)))
    }

    /// Returns a copy mirrored across the vertical axis.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let mut out = Self::new(self.size);
        for (x, y) in self.iter_set() {
            out.set(self.size - 1 - x, y);
        }
        out
    }

    /// Returns a copy flipped across the horizontal axis.
    #[must_use]
    pub fn flipped(&self) -> Self {
        let mut out = Self::new(self.size);
        for (x, y) in self.iter_set() {
            out.set(x, self.size - 1 - y);
        }
        out
    }

    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= self.size || y >= self.size {
            return None;
        }
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        Some((y * self.stride + x / 8, 0x80 >> (x % 8)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_are_clipped() {
        let mut bm = Bitmap::new(9);
        bm.set(8, 8);
        bm.set(9, 0);
        bm.set(-1, 3);
        assert!(bm.get(8, 8), "last pixel of a 9-wide row crosses a byte");
        assert!(!bm.get(9, 0), "outside is never set");
        assert_eq!(bm.count_set(), 1);
    }

    #[test]
    fn zero_size_clamps() {
        let bm = Bitmap::new(0);
        assert_eq!(bm.size(), 1);
    }

    #[test]
    fn line_endpoints_are_inclusive() {
        let mut bm = Bitmap::new(5);
        bm.line(3, 2, 1, 2);
        assert_eq!(bm.iter_set().collect::<Vec<_>>(), [(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn mirror_and_flip() {
        let mut bm = Bitmap::new(3);
        bm.set(0, 0);
        assert!(bm.mirrored().get(2, 0), "mirror moves left to right");
        assert!(bm.flipped().get(0, 2), "flip moves top to bottom");
    }
}
