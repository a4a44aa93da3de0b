// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoized button glyphs.
//!
//! Buttons ask for a glyph by the size of their box; the glyph itself is
//! smaller. [`resolve_glyph_size`] performs that reduction, and the cache
//! stores one bitmap per `(glyph, tool_window, resolved size)`. Lookups at
//! different sizes live side by side until the next invalidation.

use alloc::collections::BTreeMap;

use crate::bitmap::Bitmap;
use crate::glyph::{self, GlyphId};
use crate::trace::{IconLookupEvent, LookupOutcome, Tracer};

/// Reduces a button box to the edge length of its glyph.
///
/// Boxes wider than 14px lose `2 * (d / 3.5)` (so keep `3d / 7`, truncated);
/// smaller boxes lose a flat 6px. The smaller of the two axes wins, clamped
/// to one pixel and forced odd. Never overflows.
#[must_use]
pub fn resolve_glyph_size(box_width: i32, box_height: i32) -> i32 {
    let reduce = |d: i32| {
        if d > 14 {
            d / 7 * 3 + d % 7 * 3 / 7
        } else {
            d.saturating_sub(6)
        }
    };
    glyph::normalize_size(reduce(box_width).min(reduce(box_height)))
}

/// `None` is the blank mask handed out for unknown raw glyph values.
type IconKey = (Option<GlyphId>, bool, i32);

/// Button glyph cache keyed by `(glyph, tool_window, resolved size)`.
#[derive(Default)]
pub struct ButtonIconCache {
    entries: BTreeMap<IconKey, Bitmap>,
}

impl core::fmt::Debug for ButtonIconCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ButtonIconCache")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

impl ButtonIconCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the glyph for a button box of the given size.
    pub fn get(
        &mut self,
        glyph: GlyphId,
        tool_window: bool,
        box_width: i32,
        box_height: i32,
    ) -> &Bitmap {
        self.get_traced(glyph, tool_window, box_width, box_height, &mut Tracer::none())
    }

    /// Like [`get`](Self::get), reporting the lookup to `tracer`.
    pub fn get_traced(
        &mut self,
        glyph: GlyphId,
        tool_window: bool,
        box_width: i32,
        box_height: i32,
        tracer: &mut Tracer<'_>,
    ) -> &Bitmap {
        let size = resolve_glyph_size(box_width, box_height);
        let outcome = if self.entries.contains_key(&(Some(glyph), tool_window, size)) {
            LookupOutcome::Hit
        } else {
            LookupOutcome::Miss
        };
        tracer.icon_lookup(&IconLookupEvent {
            glyph,
            tool_window,
            resolved_size: size,
            outcome,
        });
        self.entries
            .entry((Some(glyph), tool_window, size))
            .or_insert_with(|| glyph::render(glyph, size))
    }

    /// Looks up a glyph by raw discriminant.
    ///
    /// Unknown values are a caller bug: they assert in debug builds and
    /// yield a blank mask of the resolved size in release builds.
    pub fn get_raw(
        &mut self,
        raw_glyph: u8,
        tool_window: bool,
        box_width: i32,
        box_height: i32,
    ) -> &Bitmap {
        let glyph = GlyphId::from_raw(raw_glyph);
        debug_assert!(glyph.is_some(), "unknown glyph {raw_glyph}");
        match glyph {
            Some(glyph) => self.get(glyph, tool_window, box_width, box_height),
            None => {
                let size = resolve_glyph_size(box_width, box_height);
                self.entries
                    .entry((None, tool_window, size))
                    .or_insert_with(|| Bitmap::new(size))
            }
        }
    }

    /// Returns `true` if `glyph` is stored at exactly `size`.
    #[must_use]
    pub fn contains(&self, glyph: GlyphId, tool_window: bool, size: i32) -> bool {
        self.entries.contains_key(&(Some(glyph), tool_window, size))
    }

    /// Number of stored bitmaps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Frees every stored bitmap and returns how many there were.
    pub fn invalidate_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_reduction() {
        // 24 - 2 * 6.857 = 10.28, truncated to 10, forced odd.
        assert_eq!(resolve_glyph_size(24, 24), 9);
        assert_eq!(resolve_glyph_size(21, 21), 9);
        assert_eq!(resolve_glyph_size(35, 35), 15);
        // Small boxes lose a flat 6px.
        assert_eq!(resolve_glyph_size(14, 14), 7);
        assert_eq!(resolve_glyph_size(13, 13), 7);
        // The smaller axis wins.
        assert_eq!(resolve_glyph_size(35, 14), 7);
        // Degenerate boxes still give a 1px glyph.
        assert_eq!(resolve_glyph_size(3, 0), 1);
    }

    #[test]
    fn reduction_switches_above_fourteen() {
        // 14 keeps the flat rule: 14 - 6 = 8, forced odd.
        assert_eq!(resolve_glyph_size(14, 14), 7);
        // 15 switches to 3 * 15 / 7 = 6, forced odd.
        assert_eq!(resolve_glyph_size(15, 15), 5);
    }

    #[test]
    fn shorter_height_wins() {
        // Width 40 gives 17, height 24 gives 10.
        assert_eq!(resolve_glyph_size(40, 24), 9);
        // Height below the threshold: 12 - 6 = 6.
        assert_eq!(resolve_glyph_size(60, 12), 5);
    }

    #[test]
    fn huge_boxes_do_not_overflow() {
        let size = resolve_glyph_size(i32::MAX, i32::MAX);
        assert_eq!(size % 2, 1);
        assert_eq!(size, 920_350_133);
        assert_eq!(resolve_glyph_size(i32::MIN, 24), 1);
    }

    #[test]
    fn close_in_a_24px_box() {
        let mut cache = ButtonIconCache::new();
        let bm = cache.get(GlyphId::Close, false, 24, 24);
        assert_eq!(bm.size(), 9);
        for i in 0..9 {
            assert!(bm.get(i, i) && bm.get(i, 8 - i), "cross arm at {i}");
        }
        assert_eq!(bm.count_set(), 17);
    }

    #[test]
    fn same_size_hits() {
        let mut cache = ButtonIconCache::new();
        let a = core::ptr::from_ref(cache.get(GlyphId::Help, true, 20, 20));
        let b = core::ptr::from_ref(cache.get(GlyphId::Help, true, 20, 21));
        assert!(core::ptr::eq(a, b), "equal resolved size must hit");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn sizes_are_cached_side_by_side() {
        let mut cache = ButtonIconCache::new();
        assert_eq!(cache.get(GlyphId::Close, false, 24, 24).size(), 9);
        assert_eq!(cache.get(GlyphId::Close, false, 40, 40).size(), 17);
        assert_eq!(cache.len(), 2, "one entry per resolved size");
        assert!(cache.contains(GlyphId::Close, false, resolve_glyph_size(24, 24)));
        assert!(cache.contains(GlyphId::Close, false, resolve_glyph_size(40, 40)));
        let small = core::ptr::from_ref(cache.get(GlyphId::Close, false, 24, 24));
        let again = core::ptr::from_ref(cache.get(GlyphId::Close, false, 24, 24));
        assert!(core::ptr::eq(small, again), "small size still a hit");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn tool_windows_have_their_own_entry() {
        let mut cache = ButtonIconCache::new();
        let _ = cache.get(GlyphId::Minimize, false, 24, 24);
        let _ = cache.get(GlyphId::Minimize, true, 24, 24);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.invalidate_all(), 2);
        assert!(cache.is_empty(), "invalidation frees everything");
        assert!(!cache.contains(GlyphId::Minimize, false, 9));
        assert!(!cache.contains(GlyphId::Minimize, true, 9));
    }

    #[test]
    fn cached_glyph_matches_engine() {
        let mut cache = ButtonIconCache::new();
        for id in GlyphId::ALL {
            let expected = glyph::render(id, resolve_glyph_size(30, 30));
            assert_eq!(*cache.get(id, false, 30, 30), expected, "{id:?}");
        }
    }

    #[test]
    fn known_raw_glyph_uses_regular_entry() {
        let mut cache = ButtonIconCache::new();
        let raw = u8::try_from(GlyphId::Close.index()).unwrap();
        let bm = cache.get_raw(raw, false, 24, 24).clone();
        assert_eq!(bm, glyph::render(GlyphId::Close, 9));
        assert!(cache.contains(GlyphId::Close, false, 9));
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn unknown_raw_glyph_is_blank() {
        let mut cache = ButtonIconCache::new();
        let bm = cache.get_raw(200, false, 24, 24);
        assert_eq!(bm.size(), 9);
        assert_eq!(bm.count_set(), 0);
        let _ = cache.get_raw(201, false, 24, 24);
        assert_eq!(cache.len(), 1, "one blank mask per size");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "unknown glyph 200")]
    fn unknown_raw_glyph_asserts_in_debug() {
        let mut cache = ButtonIconCache::new();
        let _ = cache.get_raw(200, false, 24, 24);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn traced_outcomes() {
        use crate::trace::TraceSink;
        use alloc::vec::Vec;

        #[derive(Default)]
        struct Outcomes(Vec<(i32, LookupOutcome)>);
        impl TraceSink for Outcomes {
            fn on_icon_lookup(&mut self, e: &IconLookupEvent) {
                self.0.push((e.resolved_size, e.outcome));
            }
        }

        let mut cache = ButtonIconCache::new();
        let mut sink = Outcomes::default();
        let mut tracer = Tracer::new(&mut sink);
        cache.get_traced(GlyphId::Shade, false, 24, 24, &mut tracer);
        cache.get_traced(GlyphId::Shade, false, 24, 24, &mut tracer);
        cache.get_traced(GlyphId::Shade, false, 30, 30, &mut tracer);
        cache.get_traced(GlyphId::Shade, false, 24, 24, &mut tracer);
        drop(tracer);
        assert_eq!(
            sink.0,
            [
                (9, LookupOutcome::Miss),
                (9, LookupOutcome::Hit),
                (11, LookupOutcome::Miss),
                (9, LookupOutcome::Hit),
            ]
        );
    }
}
