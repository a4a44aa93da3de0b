// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Border and title strips.
//!
//! Every strip is drawn once at its minimal period (one pixel wide or tall
//! along the axis it repeats on) and then replicated to [`PRETILE_LENGTH`]
//! so the compositor can cover long edges with few blits.
//!
//! ```text
//!   ┌──────────── TitleTop ─────────────┐
//!   TitleLeft      TitleTile     TitleRight
//!   BorderLeft                  BorderRight
//!   BorderBottomLeft  BorderBottom  BorderBottomRight
//! ```

use crate::pixel::blend;
use crate::surface::{Axis, Surface};
use crate::theme::Theme;

/// Length strips are replicated to along their tiling axis.
pub const PRETILE_LENGTH: i32 = 64;

/// A category of border or title strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TileKind {
    /// Top edge of the title bar: contour, highlight, two rows of fill.
    TitleTop = 0,
    /// Title bar body (also used behind buttons).
    TitleTile = 1,
    /// Left end of the title bar, full title height.
    TitleLeft = 2,
    /// Right end of the title bar, full title height.
    TitleRight = 3,
    /// Left border below the title.
    BorderLeft = 4,
    /// Right border below the title.
    BorderRight = 5,
    /// Bottom border between the corners.
    BorderBottom = 6,
    /// Bottom-left corner.
    BorderBottomLeft = 7,
    /// Bottom-right corner.
    BorderBottomRight = 8,
}

impl TileKind {
    /// Number of tile kinds.
    pub const COUNT: usize = 9;

    /// All kinds in discriminant order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::TitleTop,
        Self::TitleTile,
        Self::TitleLeft,
        Self::TitleRight,
        Self::BorderLeft,
        Self::BorderRight,
        Self::BorderBottom,
        Self::BorderBottomLeft,
        Self::BorderBottomRight,
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

    /// The axis the strip is pre-replicated along, if any.
    #[must_use]
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::TitleTop | Self::TitleTile | Self::BorderBottom => Some(Axis::Horizontal),
            Self::BorderLeft | Self::BorderRight => Some(Axis::Vertical),
            Self::TitleLeft | Self::TitleRight | Self::BorderBottomLeft | Self::BorderBottomRight => {
                None
            }
        }
    }
}

/// Identifies one cached strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileKey {
    /// Strip category.
    pub kind: TileKind,
    /// Focused window colors.
    pub active: bool,
    /// Tool-window title height.
    pub tool_window: bool,
}

impl TileKey {
    /// Number of distinct keys.
    pub const COUNT: usize = TileKind::COUNT * 4;

    /// Creates a key.
    #[inline]
    #[must_use]
    pub const fn new(kind: TileKind, active: bool, tool_window: bool) -> Self {
        Self {
            kind,
            active,
            tool_window,
        }
    }

    /// The same state with a different kind.
    #[inline]
    #[must_use]
    pub const fn with_kind(self, kind: TileKind) -> Self {
        Self { kind, ..self }
    }

    /// Dense slot index in `0..COUNT`.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> usize {
        self.kind.index() * 4 + (self.active as usize) * 2 + self.tool_window as usize
    }
}

/// Draws the strip for `key` from scratch.
///
/// Title edges are composed from freshly drawn top and body strips; caches
/// should call [`title_edge`] with their stored copies instead.
#[must_use]
pub fn synthesize(theme: &Theme, key: TileKey) -> Surface {
    match key.kind {
        TileKind::TitleLeft | TileKind::TitleRight => {
            let top = synthesize(theme, key.with_kind(TileKind::TitleTop));
            let body = synthesize(theme, key.with_kind(TileKind::TitleTile));
            title_edge(theme, key, &top, &body)
        }
        kind => {
            let strip = minimal(theme, key);
            match kind.axis() {
                Some(axis) => strip.pretiled(PRETILE_LENGTH, axis),
                None => strip,
            }
        }
    }
}

/// Composes a left or right title edge from the top and body strips.
///
/// `key.kind` must be [`TileKind::TitleLeft`] or [`TileKind::TitleRight`];
/// anything else is treated as the right edge.
#[must_use]
pub fn title_edge(theme: &Theme, key: TileKey, top: &Surface, body: &Surface) -> Surface {
    let TileKey { kind, active, .. } = key;
    let w = theme.border();
    let h = 4 + theme.title_height_for(key.tool_window) + 2;
    let mut s = Surface::new(w, h);
    s.tile_rows(top, 0, 4);
    s.tile_rows(body, 4, h - 4);

    let contour = theme.contour(active);
    if kind == TileKind::TitleLeft {
        s.vline(0, 0, h, contour);
        s.set(1, 1, contour);
        s.vline(1, 2, h, theme.shade_light(active));
    } else {
        s.vline(w - 1, 0, h, contour);
        s.set(w - 2, 1, contour);
        s.vline(w - 2, 2, h, theme.shade_dark(active));
    }
    s
}

/// The strip at its minimal period, before replication.
fn minimal(theme: &Theme, key: TileKey) -> Surface {
    let TileKey {
        kind,
        active,
        tool_window,
    } = key;
    let b = theme.border();
    match kind {
        TileKind::TitleTop => {
            let mut s = Surface::filled(1, 4, theme.title_flat());
            s.set(0, 0, theme.contour(active));
            s.set(0, 1, theme.shade_light(active));
            s
        }
        TileKind::TitleTile => {
            Surface::filled(1, theme.title_height_for(tool_window) + 2, theme.title_flat())
        }
        TileKind::BorderLeft => {
            let c = theme.body_border(active);
            let mut s = Surface::new(b, 1);
            s.set(0, 0, c);
            if b > 1 {
                s.hline(1, b - 1, 0, c);
            }
            s
        }
        TileKind::BorderRight => {
            let c = theme.body_border(active);
            let mut s = Surface::new(b, 1);
            s.set(b - 1, 0, c);
            if b > 1 {
                s.hline(0, b - 2, 0, c);
            }
            s
        }
        TileKind::BorderBottomLeft => {
            let c = theme.body_border(active);
            let mut s = Surface::new(b, b);
            s.vline(0, 0, b - 1, c);
            s.hline(0, b - 1, b - 1, c);
            s
        }
        TileKind::BorderBottomRight => {
            let c = theme.body_border(active);
            let mut s = Surface::new(b, b);
            s.vline(b - 1, 0, b - 1, c);
            s.hline(0, b - 1, b - 1, c);
            s
        }
        // Title edges are composed in `title_edge`; the bottom edge is the
        // fallback for anything else.
        TileKind::BorderBottom | TileKind::TitleLeft | TileKind::TitleRight => {
            let border = theme.frame(active);
            let mut s = Surface::new(1, b);
            s.vline(0, 0, b - 3, border);
            s.set(0, b - 2, blend(border, theme.shade_dark(active), 130));
            s.set(0, b - 1, theme.contour(active));
            s
        }
    }
}
