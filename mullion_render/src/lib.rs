// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome compositing for mullion.
//!
//! This crate sits between [`mullion_core`]'s caches and the host's paint
//! handler. It defines:
//!
//! - [`ChromeGeometry`] — the layout metrics of one paint request
//! - [`ChromePlan`] — the ordered placements that cover the window frame
//! - [`Compositor`] — builds plans and tiles cached strips into a [`Canvas`]
//! - [`DamageRegion`] — spatial damage tracking for partial repaints
//! - [`ButtonPainter`] — title bar buttons with hover and press feedback
//!
//! ```
//! use mullion_core::chrome::ChromeCache;
//! use mullion_core::geometry::PixelRect;
//! use mullion_core::pixel::Pixel;
//! use mullion_core::theme::Theme;
//! use mullion_core::trace::Tracer;
//! use mullion_render::{Canvas, ChromeGeometry, Compositor, DamageRegion};
//!
//! let mut chrome = ChromeCache::new(Theme::default());
//! let window = PixelRect::new(0, 0, 320, 240);
//! let geometry = ChromeGeometry::for_window(chrome.theme(), window, false, false);
//! let mut canvas = Canvas::new(320, 240, Pixel::TRANSPARENT);
//! let event = Compositor::new().compose(
//!     &mut chrome,
//!     &geometry,
//!     &DamageRegion::Full,
//!     &mut canvas,
//!     &mut Tracer::none(),
//! );
//! assert_eq!(event.culled, 0);
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Forwards compose and lookup events to the
//!   caller's [`TraceSink`](mullion_core::trace::TraceSink).

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod button;
mod canvas;
mod compositor;
mod damage;
mod plan;

pub use button::{ButtonPainter, ButtonState, CLOSE_HOVER};
pub use canvas::Canvas;
pub use compositor::{
    ChromeGeometry, Compositor, TITLE_EDGE_BOTTOM, TITLE_EDGE_SIDE, TITLE_EDGE_TOP, TITLE_MARGIN,
};
pub use damage::DamageRegion;
pub use plan::{ChromeItem, ChromePlan, ChromeRegion, ItemSource};
