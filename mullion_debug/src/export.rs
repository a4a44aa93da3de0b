// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trace Event Format exporter.
//!
//! [`export_json`] reads recorded bytes from a
//! [`RecorderSink`](super::recorder::RecorderSink) and writes
//! [Trace Event Format][format] JSON to the given writer.
//!
//! Cache events carry no clock, so the timestamp is the record's position in
//! the recording. Lookups land on one track per cache and paints on a third.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

const TID_TILES: u32 = 0;
const TID_ICONS: u32 = 1;
const TID_FRAME: u32 = 2;

/// Exports recorded events as a JSON array of trace event objects, suitable
/// for loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export_json(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for (seq, recorded) in decode(bytes).enumerate() {
        match recorded {
            RecordedEvent::TileLookup(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("{:?}", e.key.kind),
                    "cat": "TileCache",
                    "ts": seq,
                    "pid": 0,
                    "tid": TID_TILES,
                    "s": "t",
                    "args": {
                        "active": e.key.active,
                        "tool_window": e.key.tool_window,
                        "outcome": format!("{:?}", e.outcome),
                        "width": e.width,
                        "height": e.height,
                    }
                }));
            }
            RecordedEvent::IconLookup(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("{:?}", e.glyph),
                    "cat": "IconCache",
                    "ts": seq,
                    "pid": 0,
                    "tid": TID_ICONS,
                    "s": "t",
                    "args": {
                        "tool_window": e.tool_window,
                        "resolved_size": e.resolved_size,
                        "outcome": format!("{:?}", e.outcome),
                    }
                }));
            }
            RecordedEvent::Invalidate(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Invalidate",
                    "cat": "Generation",
                    "ts": seq,
                    "pid": 0,
                    "tid": TID_FRAME,
                    "s": "g",
                    "args": {
                        "generation": e.generation,
                        "tiles_dropped": e.tiles_dropped,
                        "icons_dropped": e.icons_dropped,
                    }
                }));
            }
            RecordedEvent::Compose(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Compose",
                    "cat": "Frame",
                    "ts": seq,
                    "pid": 0,
                    "tid": TID_FRAME,
                    "s": "t",
                    "args": {
                        "generation": e.generation,
                        "planned": e.planned,
                        "painted": e.painted,
                        "culled": e.culled,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use mullion_core::tile::{TileKey, TileKind};
    use mullion_core::trace::{
        ComposeEvent, InvalidateEvent, LookupOutcome, TileLookupEvent, TraceSink,
    };

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_tile_lookup(&TileLookupEvent {
            key: TileKey::new(TileKind::TitleTop, true, false),
            outcome: LookupOutcome::Hit,
            width: 64,
            height: 4,
        });
        rec.on_invalidate(&InvalidateEvent {
            generation: 1,
            tiles_dropped: 1,
            icons_dropped: 0,
        });
        rec.on_compose(&ComposeEvent {
            generation: 1,
            planned: 13,
            painted: 12,
            culled: 0,
        });

        let mut out = Vec::new();
        export_json(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 3);

        assert_eq!(parsed[0]["name"], "TitleTop");
        assert_eq!(parsed[0]["cat"], "TileCache");
        assert_eq!(parsed[0]["args"]["outcome"], "Hit");

        assert_eq!(parsed[1]["name"], "Invalidate");
        assert_eq!(parsed[1]["ts"], 1);

        assert_eq!(parsed[2]["name"], "Compose");
        assert_eq!(parsed[2]["args"]["painted"], 12);
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export_json(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty(), "nothing recorded, nothing exported");
    }
}
