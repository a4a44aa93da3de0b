// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owner of one rendering generation.

use crate::bitmap::Bitmap;
use crate::glyph::GlyphId;
use crate::icon_cache::ButtonIconCache;
use crate::surface::Surface;
use crate::theme::Theme;
use crate::tile::TileKey;
use crate::tile_cache::TileCache;
use crate::trace::{InvalidateEvent, Tracer};

/// A theme snapshot together with every tile and glyph derived from it.
///
/// Replacing the theme goes through [`set_theme`](Self::set_theme), which
/// empties both caches in the same call. Lookups always use the owned theme,
/// so a returned surface or bitmap can never mix two snapshots.
///
/// ```
/// use mullion_core::chrome::ChromeCache;
/// use mullion_core::theme::Theme;
/// use mullion_core::tile::{TileKey, TileKind};
///
/// let mut chrome = ChromeCache::new(Theme::default());
/// let key = TileKey::new(TileKind::TitleTile, true, false);
/// let height = chrome.tile(key).height();
/// assert_eq!(height, chrome.theme().title_height + 2);
/// ```
#[derive(Debug)]
pub struct ChromeCache {
    theme: Theme,
    tiles: TileCache,
    icons: ButtonIconCache,
    generation: u64,
}

impl ChromeCache {
    /// Starts generation zero with `theme` and empty caches.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            tiles: TileCache::new(),
            icons: ButtonIconCache::new(),
            generation: 0,
        }
    }

    /// The current snapshot.
    #[inline]
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Incremented by every invalidation.
    #[inline]
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the snapshot and invalidates both caches.
    pub fn set_theme(&mut self, theme: Theme) -> InvalidateEvent {
        self.set_theme_traced(theme, &mut Tracer::none())
    }

    /// Like [`set_theme`](Self::set_theme), reporting to `tracer`.
    pub fn set_theme_traced(&mut self, theme: Theme, tracer: &mut Tracer<'_>) -> InvalidateEvent {
        self.theme = theme;
        self.invalidate_traced(tracer)
    }

    /// Invalidates both caches without changing the snapshot.
    pub fn invalidate(&mut self) -> InvalidateEvent {
        self.invalidate_traced(&mut Tracer::none())
    }

    /// Like [`invalidate`](Self::invalidate), reporting to `tracer`.
    pub fn invalidate_traced(&mut self, tracer: &mut Tracer<'_>) -> InvalidateEvent {
        let tiles = self.tiles.invalidate_all();
        let icons = self.icons.invalidate_all();
        self.generation += 1;
        let e = InvalidateEvent {
            generation: self.generation,
            tiles_dropped: u32::try_from(tiles).unwrap_or(u32::MAX),
            icons_dropped: u32::try_from(icons).unwrap_or(u32::MAX),
        };
        tracer.invalidate(&e);
        e
    }

    /// Returns the tile for `key` under the current snapshot.
    pub fn tile(&mut self, key: TileKey) -> &Surface {
        self.tiles.get(&self.theme, key)
    }

    /// Like [`tile`](Self::tile), reporting to `tracer`.
    pub fn tile_traced(&mut self, key: TileKey, tracer: &mut Tracer<'_>) -> &Surface {
        self.tiles.get_traced(&self.theme, key, tracer)
    }

    /// Returns the glyph for a button box under the current snapshot.
    pub fn icon(
        &mut self,
        glyph: GlyphId,
        tool_window: bool,
        box_width: i32,
        box_height: i32,
    ) -> &Bitmap {
        self.icons.get(glyph, tool_window, box_width, box_height)
    }

    /// Like [`icon`](Self::icon), reporting to `tracer`.
    pub fn icon_traced(
        &mut self,
        glyph: GlyphId,
        tool_window: bool,
        box_width: i32,
        box_height: i32,
        tracer: &mut Tracer<'_>,
    ) -> &Bitmap {
        self.icons
            .get_traced(glyph, tool_window, box_width, box_height, tracer)
    }

    /// Read access to the tile cache.
    #[must_use]
    pub fn tiles(&self) -> &TileCache {
        &self.tiles
    }

    /// Read access to the icon cache.
    #[must_use]
    pub fn icons(&self) -> &ButtonIconCache {
        &self.icons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;
    use crate::tile::TileKind;

    #[test]
    fn set_theme_empties_both_caches() {
        let mut chrome = ChromeCache::new(Theme::default());
        let _ = chrome.tile(TileKey::new(TileKind::BorderLeft, false, false));
        let _ = chrome.icon(GlyphId::Close, false, 24, 24);
        let e = chrome.set_theme(Theme {
            dark_mode: true,
            ..Theme::default()
        });
        assert_eq!(e.generation, 1);
        assert_eq!(e.tiles_dropped, 1);
        assert_eq!(e.icons_dropped, 1);
        assert!(chrome.tiles().is_empty(), "tiles dropped");
        assert!(chrome.icons().is_empty(), "icons dropped");
    }

    #[test]
    fn lookups_follow_the_new_snapshot() {
        let mut chrome = ChromeCache::new(Theme::default());
        let key = TileKey::new(TileKind::BorderLeft, false, false);
        assert_eq!(chrome.tile(key).pixel(0, 0), Some(Pixel::DARK_GRAY));
        chrome.set_theme(Theme {
            dark_mode: true,
            ..Theme::default()
        });
        assert_eq!(chrome.tile(key).pixel(0, 0), Some(Pixel::LIGHT_GRAY));
    }

    #[test]
    fn invalidate_keeps_theme_and_reproduces_pixels() {
        let mut chrome = ChromeCache::new(Theme::default());
        let key = TileKey::new(TileKind::BorderBottom, true, true);
        let before = chrome.tile(key).clone();
        chrome.invalidate();
        assert_eq!(chrome.generation(), 1);
        assert_eq!(*chrome.tile(key), before);
    }

    #[test]
    fn set_theme_drops_icons_for_both_window_kinds() {
        let mut chrome = ChromeCache::new(Theme::default());
        let size = crate::icon_cache::resolve_glyph_size(24, 24);
        let before = chrome.icon(GlyphId::Close, false, 24, 24).clone();
        let _ = chrome.icon(GlyphId::Close, true, 24, 24);
        assert!(chrome.icons().contains(GlyphId::Close, false, size));
        assert!(chrome.icons().contains(GlyphId::Close, true, size));

        let e = chrome.set_theme(Theme::default());
        assert_eq!(e.icons_dropped, 2);
        assert!(!chrome.icons().contains(GlyphId::Close, false, size));
        assert!(!chrome.icons().contains(GlyphId::Close, true, size));

        // Regenerated on demand, pixel-identical to the dropped mask.
        assert_eq!(*chrome.icon(GlyphId::Close, false, 24, 24), before);
        assert_eq!(chrome.icons().len(), 1);
    }
}
