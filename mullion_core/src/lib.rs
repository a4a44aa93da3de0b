// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tile and glyph caches for flat window-decoration chrome.
//!
//! `mullion_core` answers the two questions a window-decoration paint handler
//! asks on every repaint: "what does this strip of border pixels look like"
//! and "what does this button glyph look like at this size". Both answers are
//! synthesized procedurally, memoized, and handed out as immutable views. The
//! crate is `no_std` compatible (with `alloc`).
//!
//! # Architecture
//!
//! ```text
//!   Theme snapshot ──► ChromeCache::set_theme() ──► (invalidate both caches)
//!                           │
//!          ┌────────────────┴─────────────────┐
//!          ▼                                  ▼
//!   TileCache::get(key) ──► Surface    ButtonIconCache::get(key) ──► Bitmap
//!          │ miss                             │ miss
//!          ▼                                  ▼
//!   tile::synthesize(kind)             glyph::render(id, size)
//! ```
//!
//! **[`theme`]** — Immutable palette and sizing snapshot, plus folding of the
//! persisted [`DecorationConfig`](theme::DecorationConfig) into it.
//!
//! **[`pixel`]** — Packed ARGB pixels and the integer color arithmetic used
//! to derive contour, highlight and shadow colors.
//!
//! **[`surface`]** / **[`bitmap`]** — Owned pixel buffers: full-color tiles
//! and one-bit glyph masks.
//!
//! **[`tile`]** — The closed set of border/title strips and the routine that
//! synthesizes each of them at its minimal period.
//!
//! **[`glyph`]** — Procedural button glyphs built from four stroke primitives.
//!
//! **[`tile_cache`]** / **[`icon_cache`]** — Memoization of the above: a
//! fixed slot array for tiles and an ordered map keyed by glyph, window kind
//! and resolved size for icons.
//!
//! **[`chrome`]** — [`ChromeCache`](chrome::ChromeCache), the owner of one
//! rendering generation: a theme snapshot and both caches, invalidated
//! together.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! cache instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod bitmap;
pub mod chrome;
pub mod geometry;
pub mod glyph;
pub mod icon_cache;
pub mod pixel;
pub mod surface;
pub mod theme;
pub mod tile;
pub mod tile_cache;
pub mod trace;
