// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CPU blit target.

use alloc::vec;
use alloc::vec::Vec;

use mullion_core::bitmap::Bitmap;
use mullion_core::geometry::PixelRect;
use mullion_core::pixel::Pixel;
use mullion_core::surface::Surface;

/// A window-sized buffer of packed ARGB pixels that chrome is painted into.
///
/// All operations clip to the canvas; pixels are copied, not blended.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    pixels: Vec<Pixel>,
}

impl core::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    /// Creates a canvas filled with `clear`. Dimensions are clamped to one.
    #[must_use]
    pub fn new(width: i32, height: i32, clear: Pixel) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![clear; to_usize(width) * to_usize(height)],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The full canvas as a rectangle.
    #[must_use]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(0, 0, self.width, self.height)
    }

    /// All pixels, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Fills `rect` with one color.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Pixel) {
        let Some(r) = rect.intersect(&self.bounds()) else {
            return;
        };
        for y in r.y..=r.bottom() {
            for x in r.x..=r.right() {
                self.put(x, y, color);
            }
        }
    }

    /// Covers `rect` by repeating `src`, anchored at the rectangle's top-left.
    ///
    /// Destination pixel `(x, y)` takes source pixel
    /// `((x - rect.x) mod w, (y - rect.y) mod h)`; requests shorter than the
    /// source use only its prefix.
    pub fn blit_tiled(&mut self, rect: PixelRect, src: &Surface) {
        let Some(r) = rect.intersect(&self.bounds()) else {
            return;
        };
        let (sw, sh) = (src.width(), src.height());
        for y in r.y..=r.bottom() {
            let sy = (y - rect.y).rem_euclid(sh);
            for x in r.x..=r.right() {
                let sx = (x - rect.x).rem_euclid(sw);
                if let Some(p) = src.pixel(sx, sy) {
                    self.put(x, y, p);
                }
            }
        }
    }

    /// Paints the set pixels of `mask` in `color`, with the mask's top-left
    /// at `(x, y)`.
    pub fn draw_mask(&mut self, x: i32, y: i32, mask: &Bitmap, color: Pixel) {
        for (mx, my) in mask.iter_set() {
            self.put(x + mx, y + my, color);
        }
    }

    fn put(&mut self, x: i32, y: i32, color: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && x < self.width && y < self.height)
            .then(|| to_usize(y) * to_usize(self.width) + to_usize(x))
    }
}

fn to_usize(v: i32) -> usize {
    usize::try_from(v).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Pixel = Pixel::from_rgb(255, 0, 0);
    const BLUE: Pixel = Pixel::from_rgb(0, 0, 255);

    #[test]
    fn fill_is_clipped() {
        let mut c = Canvas::new(4, 4, Pixel::TRANSPARENT);
        c.fill_rect(PixelRect::new(2, 2, 10, 10), RED);
        assert_eq!(c.pixel(3, 3), Some(RED));
        assert_eq!(c.pixel(1, 3), Some(Pixel::TRANSPARENT));
        assert_eq!(c.pixels().iter().filter(|p| **p == RED).count(), 4);
    }

    #[test]
    fn tiling_is_anchored_at_rect_origin() {
        let mut src = Surface::new(2, 1);
        src.set(0, 0, RED);
        src.set(1, 0, BLUE);
        let mut c = Canvas::new(8, 2, Pixel::TRANSPARENT);
        c.blit_tiled(PixelRect::new(3, 1, 5, 1), &src);
        assert_eq!(c.pixel(3, 1), Some(RED));
        assert_eq!(c.pixel(4, 1), Some(BLUE));
        assert_eq!(c.pixel(7, 1), Some(RED));
        assert_eq!(c.pixel(2, 1), Some(Pixel::TRANSPARENT));
        assert_eq!(c.pixel(3, 0), Some(Pixel::TRANSPARENT));
    }

    #[test]
    fn tiling_clipped_on_the_left_keeps_phase() {
        let mut src = Surface::new(3, 1);
        src.set(0, 0, RED);
        let mut c = Canvas::new(4, 1, Pixel::TRANSPARENT);
        c.blit_tiled(PixelRect::new(-2, 0, 6, 1), &src);
        // x = 1 is source column 0 again.
        assert_eq!(c.pixel(1, 0), Some(RED));
        assert_eq!(c.pixel(0, 0), Some(Pixel::TRANSPARENT));
    }

    #[test]
    fn mask_is_colorized() {
        let mut bm = Bitmap::new(3);
        bm.set(1, 1);
        let mut c = Canvas::new(5, 5, Pixel::WHITE);
        c.draw_mask(2, 2, &bm, Pixel::BLACK);
        assert_eq!(c.pixel(3, 3), Some(Pixel::BLACK));
        assert_eq!(c.pixels().iter().filter(|p| **p == Pixel::BLACK).count(), 1);
    }

    #[test]
    fn short_rect_copies_strip_prefix() {
        let mut strip = Surface::new(64, 1);
        for x in 0..64 {
            strip.set(x, 0, if x % 2 == 0 { RED } else { BLUE });
        }
        let mut c = Canvas::new(20, 1, Pixel::TRANSPARENT);
        c.blit_tiled(PixelRect::new(2, 0, 5, 1), &strip);
        for x in 2..7 {
            let expected = if (x - 2) % 2 == 0 { RED } else { BLUE };
            assert_eq!(c.pixel(x, 0), Some(expected), "column {x}");
        }
        assert_eq!(c.pixel(1, 0), Some(Pixel::TRANSPARENT));
        assert_eq!(c.pixel(7, 0), Some(Pixel::TRANSPARENT));
        let written = c.pixels().iter().filter(|p| **p != Pixel::TRANSPARENT).count();
        assert_eq!(written, 5, "nothing written past the rect");
    }
}
