// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four stroke primitives glyphs are built from.

use crate::bitmap::Bitmap;

/// Direction of a stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrokeKind {
    /// Left to right, thickened downwards.
    Horizontal,
    /// Top to bottom, thickened rightwards.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Bottom-left to top-right (↗).
    CrossDiagonal,
}

/// One stroke: a run of `length` steps starting at `(x, y)`, `width` pixels
/// thick.
///
/// Horizontal and vertical runs are `width` parallel lines from `start` to
/// `start + length - 1` inclusive (so a zero length still covers two pixels
/// per line). Diagonal runs are only defined for widths 1 to 3; wider values
/// draw as width 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Stroke {
    /// Direction.
    pub kind: StrokeKind,
    /// Start column.
    pub x: i32,
    /// Start row.
    pub y: i32,
    /// Run length in steps.
    pub length: i32,
    /// Thickness in pixels.
    pub width: i32,
}

impl Stroke {
    /// Creates a stroke.
    #[inline]
    #[must_use]
    pub const fn new(kind: StrokeKind, x: i32, y: i32, length: i32, width: i32) -> Self {
        Self {
            kind,
            x,
            y,
            length,
            width,
        }
    }

    /// Rasterizes the stroke into `bm`. Pixels outside the mask are clipped.
    pub fn draw(&self, bm: &mut Bitmap) {
        let Self {
            kind,
            x,
            y,
            length,
            width,
        } = *self;
        match kind {
            StrokeKind::Horizontal => {
                for i in 0..width {
                    bm.line(x, y + i, x + length - 1, y + i);
                }
            }
            StrokeKind::Vertical => {
                for i in 0..width {
                    bm.line(x + i, y, x + i, y + length - 1);
                }
            }
            StrokeKind::Diagonal => diagonal(bm, x, y, length, width, 1),
            StrokeKind::CrossDiagonal => diagonal(bm, x, y, length, width, -1),
        }
    }
}

/// Shared diagonal rasterizer; `dir` is `1` for ↘ and `-1` for ↗.
///
/// Width 2 overlays the centre line with copies shifted one pixel to each
/// perpendicular side. Width 3 adds copies shifted by two and trims the
/// centre line by one step at each end.
fn diagonal(bm: &mut Bitmap, x: i32, y: i32, length: i32, width: i32, dir: i32) {
    let center = if width <= 2 { 0..length } else { 1..length - 1 };
    for i in center {
        bm.set(x + i, y + dir * i);
    }
    if width <= 1 {
        return;
    }
    for i in 0..length - 1 {
        bm.set(x + 1 + i, y + dir * i);
        bm.set(x + i, y + dir * (1 + i));
    }
    if width <= 2 {
        return;
    }
    for i in 0..length - 2 {
        bm.set(x + 2 + i, y + dir * i);
        bm.set(x + i, y + dir * (2 + i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn draw(kind: StrokeKind, x: i32, y: i32, length: i32, width: i32, size: i32) -> Bitmap {
        let mut bm = Bitmap::new(size);
        Stroke::new(kind, x, y, length, width).draw(&mut bm);
        bm
    }

    #[test]
    fn horizontal_width_is_exact() {
        let bm = draw(StrokeKind::Horizontal, 1, 2, 4, 2, 9);
        assert_eq!(bm.count_set(), 8);
        assert!(bm.get(1, 2) && bm.get(4, 3), "both rows span x=1..=4");
        assert!(!bm.get(5, 2), "run ends at start + length - 1");
    }

    #[test]
    fn zero_length_run_is_a_nub() {
        let bm = draw(StrokeKind::Horizontal, 4, 0, 0, 1, 9);
        assert_eq!(bm.iter_set().collect::<Vec<_>>(), [(3, 0), (4, 0)]);
    }

    #[test]
    fn vertical_is_clipped() {
        let bm = draw(StrokeKind::Vertical, 8, 0, 20, 2, 9);
        assert_eq!(bm.count_set(), 9);
    }

    #[test]
    fn width_one_diagonal_is_single_pixels() {
        let bm = draw(StrokeKind::Diagonal, 0, 0, 5, 1, 5);
        assert_eq!(
            bm.iter_set().collect::<Vec<_>>(),
            [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]
        );
        let bm = draw(StrokeKind::CrossDiagonal, 0, 4, 5, 1, 5);
        assert!((0..5).all(|i| bm.get(i, 4 - i)), "↗ mirrors ↘");
    }

    #[test]
    fn width_two_diagonal_adds_both_neighbours() {
        let bm = draw(StrokeKind::Diagonal, 0, 0, 4, 2, 9);
        // 4 centre pixels plus 3 on each side.
        assert_eq!(bm.count_set(), 10);
        assert!(bm.get(1, 0) && bm.get(0, 1), "first step has both neighbours");
        assert!(!bm.get(4, 3), "neighbours stop one step short");
    }

    #[test]
    fn width_three_diagonal_trims_centre_ends() {
        let bm = draw(StrokeKind::Diagonal, 0, 0, 5, 3, 9);
        assert!(!bm.get(0, 0), "centre line starts one step in");
        assert!(!bm.get(4, 4), "centre line ends one step early");
        assert!(bm.get(1, 1) && bm.get(3, 3), "centre interior drawn");
        assert!(bm.get(2, 0) && bm.get(0, 2), "outer offsets drawn");
        // 3 centre + 2*4 inner + 2*3 outer.
        assert_eq!(bm.count_set(), 17);
    }

    #[test]
    fn wide_diagonals_have_no_gaps() {
        for width in [2, 3] {
            for kind in [StrokeKind::Diagonal, StrokeKind::CrossDiagonal] {
                let y0 = if kind == StrokeKind::Diagonal { 0 } else { 14 };
                let bm = draw(kind, 0, y0, 13, width, 15);
                // Every row the stroke spans has at least one set pixel, and
                // so does every column.
                let rows: Vec<i32> = bm.iter_set().map(|(_, y)| y).collect();
                let (lo, hi) = (
                    rows.iter().copied().min().unwrap_or(0),
                    rows.iter().copied().max().unwrap_or(0),
                );
                for y in lo..=hi {
                    assert!(
                        (0..15).any(|x| bm.get(x, y)),
                        "{kind:?} width {width} has a gap in row {y}"
                    );
                }
                for x in 0..13 {
                    assert!(
                        (0..15).any(|y| bm.get(x, y)),
                        "{kind:?} width {width} has a gap in column {x}"
                    );
                }
            }
        }
    }
}
