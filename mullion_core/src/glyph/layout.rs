// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-shape stroke layouts.
//!
//! Each shape picks its own stroke widths and constants from size tiers.
//! The tier thresholds differ between shapes (`> 16`, `> 9`, `> 8`, `> 7`,
//! `< 8`) and must stay per shape: merging them changes the output at the
//! boundary sizes.

use alloc::vec::Vec;

use super::Shape;
use super::stroke::{Stroke, StrokeKind};

use StrokeKind::{CrossDiagonal, Diagonal, Horizontal, Vertical};

/// Collects strokes for one glyph.
#[derive(Debug, Default)]
pub(super) struct Strokes(pub(super) Vec<Stroke>);

impl Strokes {
    fn push(&mut self, kind: StrokeKind, x: i32, y: i32, length: i32, width: i32) {
        self.0.push(Stroke::new(kind, x, y, length, width));
    }
}

/// Width of title-bar-like bars (maximize top, minimize, shade).
const fn title_bar_width(size: i32) -> i32 {
    if size > 16 { 2 } else { 1 }
}

/// Width of the keep-above/below arrows.
const fn arrow_width(size: i32) -> i32 {
    if size > 16 { 2 } else { 1 }
}

/// Width of window frames and the close cross.
const fn frame_width(size: i32) -> i32 {
    if size > 16 { 2 } else { 1 }
}

/// Strokes that are always drawn for `shape` at the (odd) `size`.
pub(super) fn base(shape: Shape, size: i32, out: &mut Strokes) {
    let right = size - 1;
    let bottom = size - 1;
    let lw_tb = title_bar_width(size);
    match shape {
        Shape::Close => {
            let lw = frame_width(size);
            out.push(Diagonal, 0, 0, size, lw);
            out.push(CrossDiagonal, 0, bottom, size, lw);
        }
        Shape::Maximize => {
            let lw = frame_width(size);
            out.push(Horizontal, 0, 0, size, lw_tb);
            out.push(Horizontal, 0, bottom - (lw - 1), size, lw);
            out.push(Vertical, 0, 0, size, lw);
            out.push(Vertical, right - (lw - 1), 0, size, lw);
        }
        Shape::Restore => {
            let lw = frame_width(size);
            let m2 = lw * 2;
            let m1 = if size < 8 { 1 } else { m2 };
            // Window behind.
            out.push(Horizontal, m1, 0, size - m1, lw);
            out.push(Horizontal, right - m2, bottom - (lw - 1) - m1, m2, lw);
            out.push(Vertical, m1, 0, m2, lw);
            out.push(Vertical, right - (lw - 1), 0, size - m1, lw);
            // Window in front.
            out.push(Horizontal, 0, m2, size - m2, lw_tb);
            out.push(Horizontal, 0, bottom - (lw - 1), size - m2, lw);
            out.push(Vertical, 0, m2, size, lw);
            out.push(Vertical, right - (lw - 1) - m2, m2, size, lw);
        }
        Shape::Minimize => out.push(Horizontal, 0, size / 2, size, lw_tb),
        Shape::Help => help(size, out),
        Shape::AllDesktops => {
            let inner = size - 2 * lw_tb;
            out.push(Horizontal, lw_tb, 0, inner, lw_tb);
            out.push(Horizontal, lw_tb, bottom - (lw_tb - 1), inner, lw_tb);
            out.push(Vertical, 0, lw_tb, inner, lw_tb);
            out.push(Vertical, right - (lw_tb - 1), lw_tb, inner, lw_tb);
        }
        Shape::KeepAbove => keep_above(size, 0, out),
        Shape::KeepBelow => keep_below(size, 0, out),
        Shape::Shade => out.push(Horizontal, 0, 0, size, lw_tb),
        Shape::Unshade => {
            let (lw1, lw2) = if size > 16 {
                (4, 2)
            } else if size > 7 {
                (2, 1)
            } else {
                (1, 1)
            };
            let h = (size / 2).max(lw1 + 2 * lw2);
            out.push(Horizontal, 0, 0, size, lw1);
            out.push(Horizontal, 0, h - (lw2 - 1), size, lw2);
            out.push(Vertical, 0, 0, h, lw2);
            out.push(Vertical, right - (lw2 - 1), 0, h, lw2);
        }
    }
}

/// Strokes drawn on top of the base when the toggled variant is requested.
pub(super) fn overlay(shape: Shape, size: i32, out: &mut Strokes) {
    match shape {
        Shape::AllDesktops => {
            let mut mark = size - title_bar_width(size) * 2 - 2;
            if mark < 1 {
                mark = 3;
            }
            let at = (size - mark) / 2;
            out.push(Horizontal, at, at, mark, mark);
        }
        Shape::KeepAbove => keep_above(size, 2 * arrow_width(size), out),
        Shape::KeepBelow => keep_below(size, -2 * arrow_width(size), out),
        Shape::Close
        | Shape::Maximize
        | Shape::Restore
        | Shape::Minimize
        | Shape::Help
        | Shape::Shade
        | Shape::Unshade => {}
    }
}

/// Upward arrow, shifted down by `dy`.
fn keep_above(size: i32, dy: i32, out: &mut Strokes) {
    let lw = arrow_width(size);
    let c = size / 2;
    out.push(CrossDiagonal, 0, c + dy, c, lw);
    out.push(Diagonal, c, 1 + dy, c, lw);
    if lw > 1 {
        out.push(Horizontal, c - (lw - 2), dy, (lw - 2) * 2, lw);
    }
}

/// Downward arrow, shifted down by `dy`.
fn keep_below(size: i32, dy: i32, out: &mut Strokes) {
    let lw = arrow_width(size);
    let c = size / 2;
    let bottom = size - 1;
    out.push(Diagonal, 0, c + dy, c, lw);
    out.push(CrossDiagonal, c, bottom - 1 + dy, c, lw);
    if lw > 1 {
        out.push(Horizontal, c - (lw - 2), bottom - (lw - 1) + dy, (lw - 2) * 2, lw);
    }
}

/// Question mark, in three hand-tuned tiers.
fn help(size: i32, out: &mut Strokes) {
    let c = size / 2 - 1;
    let s = size / 4;
    let bottom = size - 1;
    if size > 16 {
        let lw = 3;
        out.push(Horizontal, c - s + 3, 0, 2 * s - 4, lw);
        out.push(CrossDiagonal, c - s - 1, 5, 6, lw);
        out.push(Diagonal, c + s - 3, 0, 5, lw);
        out.push(Vertical, c + s + 2 - lw, 3, size - (2 * lw + s + 3), lw);
        out.push(CrossDiagonal, c, bottom - 2 * lw, s + 2, lw);
        out.push(Horizontal, c, bottom - 3 * lw + 2, lw, lw);
        out.push(Horizontal, c, bottom - (lw - 1), lw, lw);
    } else if size > 8 {
        let lw = 1;
        let hook_y = if size > 9 { 3 } else { 2 };
        out.push(Horizontal, c - (s - 1), 0, 2 * s - 1, lw);
        out.push(CrossDiagonal, c - s - 1, hook_y, 3, lw);
        out.push(Diagonal, c + s - 1, 0, 3, lw);
        out.push(Vertical, c + s + 2 - lw, 2, size - (2 * lw + s + 1), lw);
        out.push(CrossDiagonal, c, bottom - 2 * lw + 1, s + 2, lw);
        out.push(Horizontal, c, bottom - (lw - 1), lw, lw);
    } else {
        out.push(Horizontal, c - (s - 1), 0, 2 * s, 1);
        out.push(CrossDiagonal, c - s - 1, 1, 2, 1);
        out.push(Vertical, c + s + 1, 0, size - (s + 3), 1);
        out.push(CrossDiagonal, c, bottom - 2, s + 2, 1);
        out.push(Horizontal, c, bottom, 1, 1);
    }
}
