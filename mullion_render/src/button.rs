// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Title bar buttons.

use peniko::Color;

use mullion_core::chrome::ChromeCache;
use mullion_core::geometry::PixelRect;
use mullion_core::glyph::GlyphId;
use mullion_core::pixel::{Pixel, blend};
use mullion_core::theme::Theme;
use mullion_core::tile::{TileKey, TileKind};
use mullion_core::trace::Tracer;

use crate::canvas::Canvas;

/// Hover background of the close button.
pub const CLOSE_HOVER: Color = Color::from_rgb8(0xe8, 0x11, 0x23);

/// Pointer interaction with a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonState {
    /// Pointer is over the button.
    pub hovered: bool,
    /// Button is held down.
    pub pressed: bool,
}

/// Paints one title bar button: title fill, optional hover background, and
/// the cached glyph centered in the box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonPainter {
    /// Glyph to draw.
    pub glyph: GlyphId,
    /// Button sits in a tool-window title.
    pub tool_window: bool,
}

impl ButtonPainter {
    /// Creates a painter.
    #[must_use]
    pub const fn new(glyph: GlyphId, tool_window: bool) -> Self {
        Self { glyph, tool_window }
    }

    /// Background shown while hovered.
    #[must_use]
    pub fn hover_background(&self, theme: &Theme) -> Pixel {
        if self.glyph == GlyphId::Close {
            CLOSE_HOVER.into()
        } else {
            let alpha = if theme.dark_mode { 190 } else { 210 };
            blend(theme.title_dim(), Pixel::WHITE, alpha)
        }
    }

    /// Glyph color for the given state.
    #[must_use]
    pub fn icon_color(&self, theme: &Theme, active: bool, state: ButtonState) -> Pixel {
        if self.glyph == GlyphId::Close && (state.hovered || state.pressed) {
            return Pixel::WHITE;
        }
        match (theme.dark_mode, active) {
            (true, true) => Pixel::WHITE,
            (true, false) => Pixel::LIGHT_GRAY,
            (false, true) => Pixel::BLACK,
            (false, false) => Pixel::DARK_GRAY,
        }
    }

    /// Paints the button into `rect`.
    ///
    /// The glyph is sized from the box and shifted one pixel down while
    /// pressed.
    pub fn paint(
        &self,
        chrome: &mut ChromeCache,
        canvas: &mut Canvas,
        rect: PixelRect,
        active: bool,
        state: ButtonState,
        tracer: &mut Tracer<'_>,
    ) {
        if !rect.is_valid() {
            return;
        }
        let key = TileKey::new(TileKind::TitleTile, active, self.tool_window);
        canvas.blit_tiled(rect, chrome.tile_traced(key, tracer));

        let theme = *chrome.theme();
        if state.hovered {
            canvas.fill_rect(rect, self.hover_background(&theme));
        }

        let color = self.icon_color(&theme, active, state);
        let icon = chrome.icon_traced(
            self.glyph,
            self.tool_window,
            rect.width,
            rect.height,
            tracer,
        );
        let x = rect.x + (rect.width - icon.size()) / 2;
        let y = rect.y + (rect.height - icon.size()) / 2 + i32::from(state.pressed);
        canvas.draw_mask(x, y, icon, color);
    }
}
