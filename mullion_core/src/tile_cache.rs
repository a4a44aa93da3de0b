// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized border and title strips.

use crate::surface::Surface;
use crate::theme::Theme;
use crate::tile::{self, TileKey, TileKind};
use crate::trace::{LookupOutcome, TileLookupEvent, Tracer};

/// One slot per [`TileKey`], each either empty or owning its surface.
///
/// Surfaces are synthesized on first lookup and returned unchanged until
/// [`invalidate_all`](Self::invalidate_all). The theme passed to lookups
/// must stay the same between invalidations; [`ChromeCache`] enforces that.
///
/// [`ChromeCache`]: crate::chrome::ChromeCache
pub struct TileCache {
    slots: [Option<Surface>; TileKey::COUNT],
}

impl core::fmt::Debug for TileCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TileCache")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for TileCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TileCache {
    /// Creates a cache with every slot empty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Returns the surface for `key`, synthesizing it on first use.
    pub fn get(&mut self, theme: &Theme, key: TileKey) -> &Surface {
        self.get_traced(theme, key, &mut Tracer::none())
    }

    /// Like [`get`](Self::get), reporting each lookup to `tracer`.
    ///
    /// Title edges look up their top and body strips first, so a miss on a
    /// title edge may emit up to three events.
    pub fn get_traced(&mut self, theme: &Theme, key: TileKey, tracer: &mut Tracer<'_>) -> &Surface {
        let slot = key.slot();
        let (surface, outcome) = match self.slots[slot].take() {
            Some(stored) => (stored, LookupOutcome::Hit),
            None => (self.build(theme, key, tracer), LookupOutcome::Miss),
        };
        let surface = self.slots[slot].insert(surface);
        tracer.tile_lookup(&TileLookupEvent {
            key,
            outcome,
            width: surface.width(),
            height: surface.height(),
        });
        surface
    }

    /// Looks up a tile by raw kind discriminant.
    ///
    /// Unknown discriminants are a caller bug: they assert in debug builds
    /// and fall back to [`TileKind::BorderBottom`] in release builds.
    pub fn get_raw(
        &mut self,
        theme: &Theme,
        raw_kind: u8,
        active: bool,
        tool_window: bool,
    ) -> &Surface {
        let kind = TileKind::from_raw(raw_kind);
        debug_assert!(kind.is_some(), "unknown tile kind {raw_kind}");
        let kind = kind.unwrap_or(TileKind::BorderBottom);
        self.get(theme, TileKey::new(kind, active, tool_window))
    }

    /// Returns `true` if a surface is stored for `key`.
    #[must_use]
    pub fn contains(&self, key: TileKey) -> bool {
        self.slots[key.slot()].is_some()
    }

    /// Number of stored surfaces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Frees every stored surface and returns how many there were.
    pub fn invalidate_all(&mut self) -> usize {
        let mut dropped = 0;
        for slot in &mut self.slots {
            if slot.take().is_some() {
                dropped += 1;
            }
        }
        dropped
    }

    fn build(&mut self, theme: &Theme, key: TileKey, tracer: &mut Tracer<'_>) -> Surface {
        if !matches!(key.kind, TileKind::TitleLeft | TileKind::TitleRight) {
            return tile::synthesize(theme, key);
        }
        let top = self
            .get_traced(theme, key.with_kind(TileKind::TitleTop), tracer)
            .clone();
        let body = self.get_traced(theme, key.with_kind(TileKind::TitleTile), tracer);
        tile::title_edge(theme, key, &top, body)
    }
}
