// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the chrome caches.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! caches and the compositor call as they work. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::glyph::GlyphId;
use crate::tile::TileKey;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How a cache lookup was answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LookupOutcome {
    /// The stored value was returned.
    Hit,
    /// Nothing was stored; a value was synthesized and stored.
    Miss,
}

impl LookupOutcome {
    /// Stable numeric code, used by binary recorders.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Hit => 0,
            Self::Miss => 1,
        }
    }

    /// Inverse of [`code`](Self::code).
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Hit),
            1 => Some(Self::Miss),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted for every tile cache lookup.
#[derive(Clone, Copy, Debug)]
pub struct TileLookupEvent {
    /// The key that was looked up.
    pub key: TileKey,
    /// Whether the surface was already stored.
    pub outcome: LookupOutcome,
    /// Width of the returned surface.
    pub width: i32,
    /// Height of the returned surface.
    pub height: i32,
}

/// Emitted for every button icon cache lookup.
#[derive(Clone, Copy, Debug)]
pub struct IconLookupEvent {
    /// Requested glyph.
    pub glyph: GlyphId,
    /// Tool-window variant.
    pub tool_window: bool,
    /// Glyph size after box reduction and odd normalization.
    pub resolved_size: i32,
    /// How the lookup was answered.
    pub outcome: LookupOutcome,
}

/// Emitted when both caches are dropped for a new rendering generation.
#[derive(Clone, Copy, Debug)]
pub struct InvalidateEvent {
    /// Generation number after the invalidation.
    pub generation: u64,
    /// Stored surfaces that were freed.
    pub tiles_dropped: u32,
    /// Stored bitmaps that were freed.
    pub icons_dropped: u32,
}

/// Emitted once per composed paint request.
#[derive(Clone, Copy, Debug)]
pub struct ComposeEvent {
    /// Generation the paint was served from.
    pub generation: u64,
    /// Items in the chrome plan.
    pub planned: u32,
    /// Items that were drawn.
    pub painted: u32,
    /// Items skipped because they missed the damage region.
    pub culled: u32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the caches and the compositor.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a tile lookup.
    fn on_tile_lookup(&mut self, e: &TileLookupEvent) {
        _ = e;
    }

    /// Called after an icon lookup.
    fn on_icon_lookup(&mut self, e: &IconLookupEvent) {
        _ = e;
    }

    /// Called after both caches were invalidated.
    fn on_invalidate(&mut self, e: &InvalidateEvent) {
        _ = e;
    }

    /// Called after a paint request was composed.
    fn on_compose(&mut self, e: &ComposeEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`TileLookupEvent`].
    #[inline]
    pub fn tile_lookup(&mut self, e: &TileLookupEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tile_lookup(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`IconLookupEvent`].
    #[inline]
    pub fn icon_lookup(&mut self, e: &IconLookupEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_icon_lookup(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`InvalidateEvent`].
    #[inline]
    pub fn invalidate(&mut self, e: &InvalidateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_invalidate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ComposeEvent`].
    #[inline]
    pub fn compose(&mut self, e: &ComposeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_compose(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileKind;

    fn sample_lookup() -> TileLookupEvent {
        TileLookupEvent {
            key: TileKey::new(TileKind::TitleTile, true, false),
            outcome: LookupOutcome::Miss,
            width: 64,
            height: 19,
        }
    }

    #[test]
    fn outcome_codes_round_trip() {
        for o in [LookupOutcome::Hit, LookupOutcome::Miss] {
            assert_eq!(LookupOutcome::from_code(o.code()), Some(o));
        }
        assert_eq!(LookupOutcome::from_code(9), None);
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_tile_lookup(&sample_lookup());
        sink.on_invalidate(&InvalidateEvent {
            generation: 1,
            tiles_dropped: 0,
            icons_dropped: 0,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.tile_lookup(&sample_lookup());
        tracer.compose(&ComposeEvent {
            generation: 0,
            planned: 3,
            painted: 3,
            culled: 0,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            heights: Vec<i32>,
        }
        impl TraceSink for RecordingSink {
            fn on_tile_lookup(&mut self, e: &TileLookupEvent) {
                self.heights.push(e.height);
            }
        }

        let mut sink = RecordingSink {
            heights: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.tile_lookup(&sample_lookup());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.heights, &[19]);
    }
}
