// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedural button glyphs.
//!
//! [`render`] turns a [`GlyphId`] and a requested size into a monochrome
//! [`Bitmap`]. It is a pure function: the same inputs always give the same
//! bits. Glyphs are not drawn from artwork but assembled from [`Stroke`]s,
//! which keeps them crisp at every size the title bar can take.
//!
//! The requested size is forced odd (even sizes lose one pixel) so every
//! glyph has a centre row and column.
//!
//! Toggled glyphs (unpin, remove keep-above, remove keep-below) are their
//! base glyph with an overlay drawn on top; see [`GlyphId::parts`].

mod layout;
mod stroke;

use alloc::vec::Vec;

pub use stroke::{Stroke, StrokeKind};

use crate::bitmap::Bitmap;

/// A button icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum GlyphId {
    /// Close (×).
    Close = 0,
    /// Maximize (single window frame).
    Maximize = 1,
    /// Restore (two overlapping frames).
    Restore = 2,
    /// Minimize (centred bar).
    Minimize = 3,
    /// Context help (?).
    Help = 4,
    /// Pin to all desktops.
    OnAllDesktops = 5,
    /// Unpin from all desktops.
    NotOnAllDesktops = 6,
    /// Keep above others.
    KeepAbove = 7,
    /// Stop keeping above others.
    NoKeepAbove = 8,
    /// Keep below others.
    KeepBelow = 9,
    /// Stop keeping below others.
    NoKeepBelow = 10,
    /// Shade (roll up).
    Shade = 11,
    /// Unshade (roll down).
    Unshade = 12,
}

/// The drawable base of a glyph, shared by a glyph and its toggled variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Diagonal cross.
    Close,
    /// Frame.
    Maximize,
    /// Two frames.
    Restore,
    /// Bar.
    Minimize,
    /// Question mark.
    Help,
    /// Hollow square.
    AllDesktops,
    /// Up arrow.
    KeepAbove,
    /// Down arrow.
    KeepBelow,
    /// Top bar.
    Shade,
    /// Half-height frame.
    Unshade,
}

impl GlyphId {
    /// Number of glyphs.
    pub const COUNT: usize = 13;

    /// All glyphs in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Close,
        Self::Maximize,
        Self::Restore,
        Self::Minimize,
        Self::Help,
        Self::OnAllDesktops,
        Self::NotOnAllDesktops,
        Self::KeepAbove,
        Self::NoKeepAbove,
        Self::KeepBelow,
        Self::NoKeepBelow,
        Self::Shade,
        Self::Unshade,
    ];

    /// Converts a raw discriminant, e.g. from a host enum.
    #[must_use]
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.get(usize::from(raw)).copied()
    }

    /// Index usable for fixed-size tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Base shape and whether the toggled overlay is drawn on top.
    #[must_use]
    pub const fn parts(self) -> (Shape, bool) {
        match self {
            Self::Close => (Shape::Close, false),
            Self::Maximize => (Shape::Maximize, false),
            Self::Restore => (Shape::Restore, false),
            Self::Minimize => (Shape::Minimize, false),
            Self::Help => (Shape::Help, false),
            Self::OnAllDesktops => (Shape::AllDesktops, false),
            Self::NotOnAllDesktops => (Shape::AllDesktops, true),
            Self::KeepAbove => (Shape::KeepAbove, false),
            Self::NoKeepAbove => (Shape::KeepAbove, true),
            Self::KeepBelow => (Shape::KeepBelow, false),
            Self::NoKeepBelow => (Shape::KeepBelow, true),
            Self::Shade => (Shape::Shade, false),
            Self::Unshade => (Shape::Unshade, false),
        }
    }
}

/// Clamps a requested size to at least one pixel and forces it odd.
#[inline]
#[must_use]
pub const fn normalize_size(size: i32) -> i32 {
    let size = if size < 1 { 1 } else { size };
    if size % 2 == 0 { size - 1 } else { size }
}

/// The strokes that make up `id` at the normalized `size`, base first.
#[must_use]
pub fn strokes(id: GlyphId, size: i32) -> Vec<Stroke> {
    let size = normalize_size(size);
    let (shape, toggled) = id.parts();
    let mut out = layout::Strokes::default();
    layout::base(shape, size, &mut out);
    if toggled {
        layout::overlay(shape, size, &mut out);
    }
    out.0
}

/// Renders `id` into a fresh `size`×`size` mask (after normalization).
#[must_use]
pub fn render(id: GlyphId, size: i32) -> Bitmap {
    let mut bm = Bitmap::new(normalize_size(size));
    for stroke in strokes(id, size) {
        stroke.draw(&mut bm);
    }
    bm
}
