// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Tile keys are stored as a kind byte plus a flag byte (bit 0 active,
//! bit 1 tool window).

use mullion_core::glyph::GlyphId;
use mullion_core::tile::{TileKey, TileKind};
use mullion_core::trace::{
    ComposeEvent, IconLookupEvent, InvalidateEvent, LookupOutcome, TileLookupEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_TILE_LOOKUP: u8 = 1;
const TAG_ICON_LOOKUP: u8 = 2;
const TAG_INVALIDATE: u8 = 3;
const TAG_COMPOSE: u8 = 4;

const FLAG_ACTIVE: u8 = 1;
const FLAG_TOOL: u8 = 2;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_key(&mut self, key: TileKey) {
        self.write_u8(key.kind as u8);
        let mut flags = 0;
        if key.active {
            flags |= FLAG_ACTIVE;
        }
        if key.tool_window {
            flags |= FLAG_TOOL;
        }
        self.write_u8(flags);
    }
}

impl TraceSink for RecorderSink {
    fn on_tile_lookup(&mut self, e: &TileLookupEvent) {
        self.write_u8(TAG_TILE_LOOKUP);
        self.write_key(e.key);
        self.write_u8(e.outcome.code());
        self.write_i32(e.width);
        self.write_i32(e.height);
    }

    fn on_icon_lookup(&mut self, e: &IconLookupEvent) {
        self.write_u8(TAG_ICON_LOOKUP);
        self.write_u8(e.glyph as u8);
        self.write_u8(u8::from(e.tool_window));
        self.write_i32(e.resolved_size);
        self.write_u8(e.outcome.code());
    }

    fn on_invalidate(&mut self, e: &InvalidateEvent) {
        self.write_u8(TAG_INVALIDATE);
        self.write_u64(e.generation);
        self.write_u32(e.tiles_dropped);
        self.write_u32(e.icons_dropped);
    }

    fn on_compose(&mut self, e: &ComposeEvent) {
        self.write_u8(TAG_COMPOSE);
        self.write_u64(e.generation);
        self.write_u32(e.planned);
        self.write_u32(e.painted);
        self.write_u32(e.culled);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`TileLookupEvent`].
    TileLookup(TileLookupEvent),
    /// An [`IconLookupEvent`].
    IconLookup(IconLookupEvent),
    /// An [`InvalidateEvent`].
    Invalidate(InvalidateEvent),
    /// A [`ComposeEvent`].
    Compose(ComposeEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first truncated or unrecognized record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?.try_into().ok()?;
        self.pos += N;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_i32(&mut self) -> Option<i32> {
        self.take().map(i32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_outcome(&mut self) -> Option<LookupOutcome> {
        LookupOutcome::from_code(self.read_u8()?)
    }

    fn read_key(&mut self) -> Option<TileKey> {
        let kind = TileKind::from_raw(self.read_u8()?)?;
        let flags = self.read_u8()?;
        Some(TileKey::new(
            kind,
            flags & FLAG_ACTIVE != 0,
            flags & FLAG_TOOL != 0,
        ))
    }

    fn decode_tile_lookup(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::TileLookup(TileLookupEvent {
            key: self.read_key()?,
            outcome: self.read_outcome()?,
            width: self.read_i32()?,
            height: self.read_i32()?,
        }))
    }

    fn decode_icon_lookup(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::IconLookup(IconLookupEvent {
            glyph: GlyphId::from_raw(self.read_u8()?)?,
            tool_window: self.read_u8()? != 0,
            resolved_size: self.read_i32()?,
            outcome: self.read_outcome()?,
        }))
    }

    fn decode_invalidate(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Invalidate(InvalidateEvent {
            generation: self.read_u64()?,
            tiles_dropped: self.read_u32()?,
            icons_dropped: self.read_u32()?,
        }))
    }

    fn decode_compose(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Compose(ComposeEvent {
            generation: self.read_u64()?,
            planned: self.read_u32()?,
            painted: self.read_u32()?,
            culled: self.read_u32()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_TILE_LOOKUP => self.decode_tile_lookup(),
            TAG_ICON_LOOKUP => self.decode_icon_lookup(),
            TAG_INVALIDATE => self.decode_invalidate(),
            TAG_COMPOSE => self.decode_compose(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
