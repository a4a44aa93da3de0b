// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome plan: the ordered placements that cover one window frame.

use alloc::vec::Vec;

use mullion_core::geometry::PixelRect;
use mullion_core::pixel::Pixel;
use mullion_core::tile::TileKey;

/// Which part of the frame an item covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChromeRegion {
    /// Strip above the title, between the title edges.
    TitleTop,
    /// Left end of the title bar.
    TitleLeft,
    /// Right end of the title bar.
    TitleRight,
    /// Caption text area.
    Caption,
    /// Title fill between the left end and the caption.
    TitleBeforeCaption,
    /// Title fill between the caption and the right end.
    TitleAfterCaption,
    /// Left border below the title.
    SideLeft,
    /// Right border below the title.
    SideRight,
    /// Flat section of the left border next to a secondary region.
    SplitLeft,
    /// Flat section of the right border next to a secondary region.
    SplitRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom border between the corners.
    Bottom,
}

/// What fills an item's rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemSource {
    /// A cached strip, tiled from the rectangle's top-left corner.
    Tile(TileKey),
    /// A solid color.
    Fill(Pixel),
    /// Left to the host's text renderer.
    Caption,
}

/// A single placement in the chrome plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChromeItem {
    /// Frame part.
    pub region: ChromeRegion,
    /// Target rectangle in window pixels (always valid).
    pub rect: PixelRect,
    /// Content.
    pub source: ItemSource,
}

/// Ordered placements for one paint request, back to front.
#[derive(Clone, Debug, Default)]
pub struct ChromePlan {
    /// Items in paint order.
    pub items: Vec<ChromeItem>,
    /// Where the caption goes, if the title has room for it.
    pub caption: Option<PixelRect>,
    /// Width taken by the left title end.
    pub title_margin_left: i32,
    /// Width taken by the right title end.
    pub title_margin_right: i32,
}

impl ChromePlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the plan for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
        self.caption = None;
        self.title_margin_left = 0;
        self.title_margin_right = 0;
    }

    /// Appends an item if its rectangle covers at least one pixel.
    ///
    /// Returns whether the item was added.
    pub fn push(&mut self, region: ChromeRegion, rect: PixelRect, source: ItemSource) -> bool {
        if !rect.is_valid() {
            return false;
        }
        self.items.push(ChromeItem {
            region,
            rect,
            source,
        });
        true
    }

    /// Items covering `region`, in paint order.
    pub fn region(&self, region: ChromeRegion) -> impl Iterator<Item = &ChromeItem> + '_ {
        self.items.iter().filter(move |i| i.region == region)
    }
}
