// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, JSON export, and pixel dumps for mullion
//! diagnostics.
//!
//! This crate provides [`TraceSink`](mullion_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`export::export_json`] — writes trace-viewer JSON from recorded bytes.
//!
//! [`dump`] renders glyph masks as ASCII art and pixel buffers as JSON or PPM.

pub mod dump;
pub mod export;
pub mod pretty;
pub mod recorder;
