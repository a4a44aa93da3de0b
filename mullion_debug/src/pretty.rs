// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.

use std::io::Write;

use mullion_core::trace::{
    ComposeEvent, IconLookupEvent, InvalidateEvent, TileLookupEvent, TraceSink,
};

/// A [`TraceSink`] that writes one line per event.
///
/// Write errors are ignored; a diagnostics sink must never disturb painting.
#[derive(Debug)]
pub struct PrettyPrintSink<W: Write> {
    writer: W,
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_tile_lookup(&mut self, e: &TileLookupEvent) {
        _ = writeln!(
            self.writer,
            "[tile] {:?} active={} tool={} -> {:?} ({}x{})",
            e.key.kind, e.key.active, e.key.tool_window, e.outcome, e.width, e.height,
        );
    }

    fn on_icon_lookup(&mut self, e: &IconLookupEvent) {
        _ = writeln!(
            self.writer,
            "[icon] {:?} tool={} size={} -> {:?}",
            e.glyph, e.tool_window, e.resolved_size, e.outcome,
        );
    }

    fn on_invalidate(&mut self, e: &InvalidateEvent) {
        _ = writeln!(
            self.writer,
            "[invalidate] gen={} tiles={} icons={}",
            e.generation, e.tiles_dropped, e.icons_dropped,
        );
    }

    fn on_compose(&mut self, e: &ComposeEvent) {
        _ = writeln!(
            self.writer,
            "[compose] gen={} planned={} painted={} culled={}",
            e.generation, e.planned, e.painted, e.culled,
        );
    }
}
