// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme snapshots.
//!
//! A [`Theme`] is an immutable bundle of colors and sizes that is valid for
//! one rendering generation. It is built by the host from its persisted
//! [`DecorationConfig`], the desktop [`Palette`] and the caption font metrics
//! via [`Theme::from_config`], and replaced wholesale when any of those
//! change (see [`ChromeCache::set_theme`](crate::chrome::ChromeCache::set_theme)).
//!
//! Every color a tile or button needs is derived here, so the drawing code
//! never looks anything up on its own.

use peniko::Color;

use crate::pixel::{Pixel, blend, hsv_relative};

/// Colors for one activation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleColors {
    /// Title bar (accent) color.
    pub title_bar: Pixel,
    /// Window frame color.
    pub frame: Pixel,
    /// Caption font color.
    pub font: Pixel,
}

impl RoleColors {
    /// Creates a role set from `peniko` colors.
    #[must_use]
    pub fn new(title_bar: Color, frame: Color, font: Color) -> Self {
        Self {
            title_bar: title_bar.into(),
            frame: frame.into(),
            font: font.into(),
        }
    }
}

/// Desktop color scheme as seen by the decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Colors used while the window has focus.
    pub active: RoleColors,
    /// Colors used while the window is unfocused.
    pub inactive: RoleColors,
    /// Base background of window content, used by the split-border section.
    pub content_base: Pixel,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active: RoleColors::new(
                Color::from_rgb8(0, 120, 215),
                Color::from_rgb8(0, 120, 215),
                Color::from_rgb8(255, 255, 255),
            ),
            inactive: RoleColors::new(
                Color::from_rgb8(255, 255, 255),
                Color::from_rgb8(170, 170, 170),
                Color::from_rgb8(153, 153, 153),
            ),
            content_base: Pixel::WHITE,
        }
    }
}

/// Horizontal placement of the caption inside the title bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TitleAlign {
    /// Flush left.
    #[default]
    Left,
    /// Centered in the free title space.
    Center,
    /// Flush right.
    Right,
}

/// Persisted decoration settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecorationConfig {
    /// Use the dark-mode neutral grays.
    pub dark_mode: bool,
    /// Lower bound for the normal title height.
    pub min_title_height: i32,
    /// Lower bound for the tool-window title height.
    pub min_title_height_tool: i32,
    /// Caption alignment.
    pub title_align: TitleAlign,
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            min_title_height: 16,
            min_title_height_tool: 13,
            title_align: TitleAlign::Left,
        }
    }
}

/// Metrics of a caption font, as reported by the host's text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FontMetrics {
    /// Line height in pixels.
    pub height: i32,
}

/// An immutable palette and sizing snapshot for one rendering generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Desktop colors.
    pub palette: Palette,
    /// Selects the neutral grays used for inactive borders and icons.
    pub dark_mode: bool,
    /// Width of the side and bottom borders.
    pub border_thickness: i32,
    /// Title height for normal windows (odd).
    pub title_height: i32,
    /// Title height for tool windows (odd).
    pub title_height_tool: i32,
    /// Caption alignment.
    pub title_align: TitleAlign,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(
            &DecorationConfig::default(),
            Palette::default(),
            FontMetrics::default(),
            FontMetrics::default(),
        )
    }
}

impl Theme {
    /// Folds persisted settings and font metrics into a snapshot.
    ///
    /// The normal title is at least four pixels taller than its font, the
    /// tool title at least as tall as its font. Both are bumped to the next
    /// odd height so button glyphs have a center row.
    #[must_use]
    pub fn from_config(
        config: &DecorationConfig,
        palette: Palette,
        font: FontMetrics,
        font_tool: FontMetrics,
    ) -> Self {
        Self {
            palette,
            dark_mode: config.dark_mode,
            border_thickness: 1,
            title_height: force_odd_up(config.min_title_height.max(font.height + 4)),
            title_height_tool: force_odd_up(config.min_title_height_tool.max(font_tool.height)),
            title_align: config.title_align,
        }
    }

    /// Border thickness clamped to at least one pixel.
    #[inline]
    #[must_use]
    pub fn border(&self) -> i32 {
        self.border_thickness.max(1)
    }

    /// Title height for the given window kind, clamped to at least one pixel.
    #[inline]
    #[must_use]
    pub fn title_height_for(&self, tool_window: bool) -> i32 {
        if tool_window {
            self.title_height_tool.max(1)
        } else {
            self.title_height.max(1)
        }
    }

    /// Palette roles for the given activation state.
    #[inline]
    #[must_use]
    pub fn roles(&self, active: bool) -> &RoleColors {
        if active {
            &self.palette.active
        } else {
            &self.palette.inactive
        }
    }

    /// The neutral gray used for unfocused borders.
    #[inline]
    #[must_use]
    pub fn inactive_gray(&self) -> Pixel {
        if self.dark_mode {
            Pixel::LIGHT_GRAY
        } else {
            Pixel::DARK_GRAY
        }
    }

    /// Outermost 1px line of the window.
    #[must_use]
    pub fn contour(&self, active: bool) -> Pixel {
        if active {
            self.palette.active.title_bar
        } else {
            self.inactive_gray()
        }
    }

    /// Flat title fill. Always the focused accent.
    #[inline]
    #[must_use]
    pub fn title_flat(&self) -> Pixel {
        self.palette.active.title_bar
    }

    /// Dimmed accent, the base of button hover backgrounds.
    #[must_use]
    pub fn title_dim(&self) -> Pixel {
        hsv_relative(self.palette.active.title_bar, 0, 0, -25)
    }

    /// Highlight on the top and left title edges.
    #[must_use]
    pub fn shade_light(&self, active: bool) -> Pixel {
        blend(self.roles(active).title_bar, Pixel::WHITE, shade_alpha(active))
    }

    /// Shadow on the right title edge and bottom border.
    #[must_use]
    pub fn shade_dark(&self, active: bool) -> Pixel {
        blend(self.roles(active).title_bar, Pixel::BLACK, shade_alpha(active))
    }

    /// Frame color.
    #[inline]
    #[must_use]
    pub fn frame(&self, active: bool) -> Pixel {
        self.roles(active).frame
    }

    /// Caption font color.
    #[inline]
    #[must_use]
    pub fn font(&self, active: bool) -> Pixel {
        self.roles(active).font
    }

    /// Side and bottom-corner border color.
    ///
    /// Focused windows blend the border into the title bar; unfocused ones
    /// show the neutral gray regardless of accent.
    #[must_use]
    pub fn body_border(&self, active: bool) -> Pixel {
        if active {
            self.title_flat()
        } else {
            self.inactive_gray()
        }
    }

    /// Outer-column contour of the flat split-border section.
    #[must_use]
    pub fn split_contour(&self) -> Pixel {
        if self.dark_mode {
            Pixel::from_rgb(0x5a, 0x5a, 0x5a)
        } else {
            Pixel::from_rgb(0xaa, 0xaa, 0xaa)
        }
    }
}

const fn shade_alpha(active: bool) -> i32 {
    if active { 205 } else { 215 }
}

const fn force_odd_up(v: i32) -> i32 {
    if v % 2 == 0 { v + 1 } else { v }
}
