// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of cached strips around a window.
//!
//! [`Compositor::layout`] turns a [`ChromeGeometry`] into a [`ChromePlan`]:
//! one rectangle per visible frame part, each naming the strip (or solid
//! color) that fills it. [`Compositor::compose`] then resolves the strips
//! through a [`ChromeCache`] and tiles them into a [`Canvas`], skipping
//! whatever misses the [`DamageRegion`].
//!
//! Coordinates use inclusive right/bottom edges, matching the window
//! manager's rectangle conventions.

use mullion_core::chrome::ChromeCache;
use mullion_core::geometry::PixelRect;
use mullion_core::theme::{Theme, TitleAlign};
use mullion_core::tile::{TileKey, TileKind};
use mullion_core::trace::{ComposeEvent, Tracer};

use crate::canvas::Canvas;
use crate::damage::DamageRegion;
use crate::plan::{ChromePlan, ChromeRegion, ItemSource};

/// Title edge above the title text.
pub const TITLE_EDGE_TOP: i32 = 4;
/// Title edge below the title text.
pub const TITLE_EDGE_BOTTOM: i32 = 2;
/// Title edge left and right of the buttons.
pub const TITLE_EDGE_SIDE: i32 = 1;
/// Gap between the buttons and the caption.
pub const TITLE_MARGIN: i32 = 5;

/// Layout metrics for one paint request, as negotiated with the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChromeGeometry {
    /// Full window rectangle, frame included.
    pub window: PixelRect,
    /// Left border width.
    pub border_left: i32,
    /// Right border width.
    pub border_right: i32,
    /// Bottom border height.
    pub border_bottom: i32,
    /// Title text height.
    pub title_height: i32,
    /// Title edge above the text.
    pub title_edge_top: i32,
    /// Title edge below the text.
    pub title_edge_bottom: i32,
    /// Title edge left of the left buttons.
    pub title_edge_left: i32,
    /// Title edge right of the right buttons.
    pub title_edge_right: i32,
    /// Gap between the left buttons and the caption.
    pub title_margin_left: i32,
    /// Gap between the caption and the right buttons.
    pub title_margin_right: i32,
    /// Total width of the left button group.
    pub buttons_left_width: i32,
    /// Total width of the right button group.
    pub buttons_right_width: i32,
    /// Width of the rendered caption text.
    pub caption_width: i32,
    /// Focused window.
    pub active: bool,
    /// Tool window (short title).
    pub tool_window: bool,
    /// Height of a sub-region (e.g. an embedded menu bar) whose border
    /// section should blend with the window content.
    pub secondary_height: Option<i32>,
}

impl ChromeGeometry {
    /// Standard metrics for a window of the given kind.
    ///
    /// Maximized windows lose their borders and outer title edges. Button
    /// widths, caption width and the secondary region start empty.
    #[must_use]
    pub fn for_window(theme: &Theme, window: PixelRect, tool_window: bool, maximized: bool) -> Self {
        let border = if maximized { 0 } else { theme.border() };
        let edge = |v: i32| if maximized { 0 } else { v };
        Self {
            window,
            border_left: border,
            border_right: border,
            border_bottom: border,
            title_height: theme.title_height_for(tool_window),
            title_edge_top: edge(TITLE_EDGE_TOP),
            title_edge_bottom: TITLE_EDGE_BOTTOM,
            title_edge_left: edge(TITLE_EDGE_SIDE),
            title_edge_right: edge(TITLE_EDGE_SIDE),
            title_margin_left: TITLE_MARGIN,
            title_margin_right: TITLE_MARGIN,
            buttons_left_width: 0,
            buttons_right_width: 0,
            caption_width: 0,
            active: false,
            tool_window,
            secondary_height: None,
        }
    }

    /// Box size of one title bar button: 9:5 wide, and stretched three
    /// pixels into the top edge unless maximized.
    #[must_use]
    pub fn button_size(theme: &Theme, tool_window: bool, maximized: bool) -> (i32, i32) {
        let h = theme.title_height_for(tool_window);
        (h * 9 / 5, if maximized { h } else { h + 3 })
    }

    /// Where the caption text goes.
    ///
    /// The caption is clipped to the free title width and aligned inside
    /// it; a caption that does not fit is always left aligned.
    #[must_use]
    pub fn caption_rect(&self, align: TitleAlign) -> PixelRect {
        let r = self.window;
        let title_left =
            r.x + self.title_edge_left + self.buttons_left_width + self.title_margin_left;
        let title_width = r.width
            - self.title_edge_left
            - self.title_edge_right
            - self.buttons_left_width
            - self.buttons_right_width
            - self.title_margin_left
            - self.title_margin_right;
        let cw = self.caption_width;
        let x = if align == TitleAlign::Left || cw > title_width {
            title_left
        } else if align == TitleAlign::Center {
            title_left + (title_width - cw) / 2
        } else {
            title_left + title_width - cw
        };
        PixelRect::new(
            x,
            r.y + self.title_edge_top,
            cw.min(title_width),
            self.title_height + self.title_edge_bottom,
        )
    }

    fn key(&self, kind: TileKind) -> TileKey {
        TileKey::new(kind, self.active, self.tool_window)
    }
}

/// Builds chrome plans and paints them.
///
/// The plan buffer is reused between paint requests.
#[derive(Debug, Default)]
pub struct Compositor {
    plan: ChromePlan,
}

impl Compositor {
    /// Creates a compositor with an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently built plan.
    #[must_use]
    pub fn plan(&self) -> &ChromePlan {
        &self.plan
    }

    /// Computes placements for every frame part of `g`.
    pub fn layout(&mut self, g: &ChromeGeometry, theme: &Theme) -> &ChromePlan {
        let plan = &mut self.plan;
        plan.clear();

        let r = g.window;
        let (r_x, r_y, r_x2, r_y2) = (r.x, r.y, r.right(), r.bottom());
        let title_total = g.title_edge_top + g.title_height + g.title_edge_bottom;
        let bottom_top = r_y2 - g.border_bottom + 1;
        let left_right = r_x + g.border_left - 1;
        let right_left = r_x2 - g.border_right + 1;
        let title_bottom = r_y + title_total - 1;
        let side_height = bottom_top - title_bottom - 1;

        if g.title_edge_top > 0 {
            plan.push(
                ChromeRegion::TitleTop,
                PixelRect::new(r_x + 2, r_y, r.width - 4, g.title_edge_top),
                ItemSource::Tile(g.key(TileKind::TitleTop)),
            );
        }
        if g.title_edge_left > 0
            && plan.push(
                ChromeRegion::TitleLeft,
                PixelRect::new(r_x, r_y, g.border_left, title_total),
                ItemSource::Tile(g.key(TileKind::TitleLeft)),
            )
        {
            plan.title_margin_left = g.border_left;
        }
        if g.title_edge_right > 0
            && plan.push(
                ChromeRegion::TitleRight,
                PixelRect::new(right_left, r_y, g.border_right, title_total),
                ItemSource::Tile(g.key(TileKind::TitleRight)),
            )
        {
            plan.title_margin_right = g.border_right;
        }

        let title_width = r_x2 - g.title_edge_right - g.buttons_right_width
            - (r_x + g.title_edge_left + g.buttons_left_width);
        if title_width > 0 {
            let cap = g.caption_rect(theme.title_align);
            if plan.push(ChromeRegion::Caption, cap, ItemSource::Caption) {
                plan.caption = Some(cap);
            }
            let start = r_x + plan.title_margin_left;
            let end = r_x2 - plan.title_margin_right;
            let body = ItemSource::Tile(g.key(TileKind::TitleTile));
            plan.push(
                ChromeRegion::TitleBeforeCaption,
                PixelRect::new(start, cap.y, cap.x - start, cap.height),
                body,
            );
            plan.push(
                ChromeRegion::TitleAfterCaption,
                PixelRect::new(cap.right() + 1, cap.y, end - cap.right(), cap.height),
                body,
            );
        }

        let side = Side {
            title_bottom,
            bottom_top,
            side_height,
            secondary: g.secondary_height,
            active: g.active,
        };
        if g.border_left > 0 && side_height > 0 {
            side.place(
                plan,
                theme,
                (r_x, left_right),
                (ChromeRegion::SplitLeft, ChromeRegion::SideLeft),
                g.key(TileKind::BorderLeft),
                true,
            );
        }
        if g.border_right > 0 && side_height > 0 {
            side.place(
                plan,
                theme,
                (right_left, r_x2),
                (ChromeRegion::SplitRight, ChromeRegion::SideRight),
                g.key(TileKind::BorderRight),
                false,
            );
        }

        if g.border_bottom > 0 {
            let mut l = r_x;
            let mut rr = r_x2;
            let corner = PixelRect::new(r_x, bottom_top, g.border_left, g.border_bottom);
            if plan.push(
                ChromeRegion::BottomLeft,
                corner,
                ItemSource::Tile(g.key(TileKind::BorderBottomLeft)),
            ) {
                l = corner.right() + 1;
            }
            let corner = PixelRect::new(right_left, bottom_top, g.border_right, g.border_bottom);
            if plan.push(
                ChromeRegion::BottomRight,
                corner,
                ItemSource::Tile(g.key(TileKind::BorderBottomRight)),
            ) {
                rr = corner.x - 1;
            }
            plan.push(
                ChromeRegion::Bottom,
                PixelRect::from_coords(l, bottom_top, rr, r_y2),
                ItemSource::Tile(g.key(TileKind::BorderBottom)),
            );
        }

        &self.plan
    }

    /// Lays out `g` and paints every item that overlaps `damage`.
    ///
    /// Caption items are left for the host's text renderer and count as
    /// neither painted nor culled.
    pub fn compose(
        &mut self,
        chrome: &mut ChromeCache,
        g: &ChromeGeometry,
        damage: &DamageRegion,
        canvas: &mut Canvas,
        tracer: &mut Tracer<'_>,
    ) -> ComposeEvent {
        self.layout(g, chrome.theme());
        let mut painted = 0_u32;
        let mut culled = 0_u32;
        for item in &self.plan.items {
            if !damage.intersects(&item.rect) {
                culled += 1;
                continue;
            }
            match item.source {
                ItemSource::Tile(key) => {
                    canvas.blit_tiled(item.rect, chrome.tile_traced(key, tracer));
                }
                ItemSource::Fill(color) => canvas.fill_rect(item.rect, color),
                ItemSource::Caption => continue,
            }
            painted += 1;
        }
        let e = ComposeEvent {
            generation: chrome.generation(),
            planned: u32::try_from(self.plan.items.len()).unwrap_or(u32::MAX),
            painted,
            culled,
        };
        tracer.compose(&e);
        e
    }
}

/// Vertical extent shared by the left and right borders.
struct Side {
    title_bottom: i32,
    bottom_top: i32,
    side_height: i32,
    secondary: Option<i32>,
    active: bool,
}

impl Side {
    /// Places one side border between columns `x1..=x2`.
    ///
    /// With a secondary region shorter than the side, the top of the border
    /// is filled flat with the content base color (plus a contour on the
    /// outer column when unfocused) and the strip tiles below it.
    fn place(
        &self,
        plan: &mut ChromePlan,
        theme: &Theme,
        (x1, x2): (i32, i32),
        (split, tiled): (ChromeRegion, ChromeRegion),
        key: TileKey,
        outer_is_left: bool,
    ) {
        let top = self.title_bottom + 1;
        let bottom = self.bottom_top - 1;
        match self.secondary {
            Some(h) if h > 0 && h < self.side_height => {
                let flat = PixelRect::from_coords(x1, top, x2, self.title_bottom + h - 2);
                if plan.push(split, flat, ItemSource::Fill(theme.palette.content_base))
                    && !self.active
                {
                    let cx = if outer_is_left { flat.x } else { flat.right() };
                    plan.push(
                        split,
                        PixelRect::from_coords(cx, flat.y, cx, flat.bottom()),
                        ItemSource::Fill(theme.split_contour()),
                    );
                }
                plan.push(
                    tiled,
                    PixelRect::from_coords(x1, self.title_bottom + h - 1, x2, bottom),
                    ItemSource::Tile(key),
                );
            }
            _ => {
                plan.push(
                    tiled,
                    PixelRect::from_coords(x1, top, x2, bottom),
                    ItemSource::Tile(key),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use mullion_core::pixel::Pixel;

    fn theme() -> Theme {
        Theme {
            title_height: 17,
            border_thickness: 1,
            ..Theme::default()
        }
    }

    fn geometry(active: bool) -> ChromeGeometry {
        let theme = theme();
        ChromeGeometry {
            active,
            buttons_left_width: 30,
            buttons_right_width: 90,
            caption_width: 40,
            ..ChromeGeometry::for_window(&theme, PixelRect::new(0, 0, 300, 200), false, false)
        }
    }

    fn rect_of(plan: &ChromePlan, region: ChromeRegion) -> Option<PixelRect> {
        plan.region(region).next().map(|i| i.rect)
    }

    #[test]
    fn standard_frame_layout() {
        let mut c = Compositor::new();
        let theme = theme();
        let plan = c.layout(&geometry(true), &theme);
        // Title spans 4 + 17 + 2 = 23 rows.
        assert_eq!(rect_of(plan, ChromeRegion::TitleTop), Some(PixelRect::new(2, 0, 296, 4)));
        assert_eq!(rect_of(plan, ChromeRegion::TitleLeft), Some(PixelRect::new(0, 0, 1, 23)));
        assert_eq!(rect_of(plan, ChromeRegion::TitleRight), Some(PixelRect::new(299, 0, 1, 23)));
        assert_eq!(rect_of(plan, ChromeRegion::SideLeft), Some(PixelRect::new(0, 23, 1, 176)));
        assert_eq!(rect_of(plan, ChromeRegion::SideRight), Some(PixelRect::new(299, 23, 1, 176)));
        assert_eq!(rect_of(plan, ChromeRegion::BottomLeft), Some(PixelRect::new(0, 199, 1, 1)));
        assert_eq!(rect_of(plan, ChromeRegion::BottomRight), Some(PixelRect::new(299, 199, 1, 1)));
        assert_eq!(rect_of(plan, ChromeRegion::Bottom), Some(PixelRect::new(1, 199, 298, 1)));
        assert_eq!((plan.title_margin_left, plan.title_margin_right), (1, 1));
    }

    #[test]
    fn caption_is_bracketed_by_title_fill() {
        let mut c = Compositor::new();
        let theme = theme();
        let plan = c.layout(&geometry(true), &theme);
        // 0 + 1 + 30 + 5.
        let cap = PixelRect::new(36, 4, 40, 19);
        assert_eq!(plan.caption, Some(cap));
        assert_eq!(
            rect_of(plan, ChromeRegion::TitleBeforeCaption),
            Some(PixelRect::new(1, 4, 35, 19))
        );
        assert_eq!(
            rect_of(plan, ChromeRegion::TitleAfterCaption),
            Some(PixelRect::new(76, 4, 223, 19))
        );
    }

    #[test]
    fn caption_alignment() {
        let g = geometry(true);
        // Free title width: 300 - 1 - 1 - 30 - 90 - 5 - 5 = 168.
        assert_eq!(g.caption_rect(TitleAlign::Left).x, 36);
        assert_eq!(g.caption_rect(TitleAlign::Center).x, 36 + 64);
        assert_eq!(g.caption_rect(TitleAlign::Right).x, 36 + 128);
        let long = ChromeGeometry {
            caption_width: 500,
            ..g
        };
        let cap = long.caption_rect(TitleAlign::Right);
        assert_eq!((cap.x, cap.width), (36, 168), "overflow is left aligned and clipped");
    }

    #[test]
    fn split_border_for_inactive_window() {
        let mut c = Compositor::new();
        let theme = theme();
        let g = ChromeGeometry {
            secondary_height: Some(20),
            ..geometry(false)
        };
        let plan = c.layout(&g, &theme);
        let split: Vec<_> = plan.region(ChromeRegion::SplitLeft).collect();
        assert_eq!(split.len(), 2, "flat fill plus outer contour");
        assert_eq!(split[0].rect, PixelRect::from_coords(0, 23, 0, 40));
        assert_eq!(split[0].source, ItemSource::Fill(Pixel::WHITE));
        assert_eq!(
            split[1].source,
            ItemSource::Fill(Pixel::from_rgb(0xaa, 0xaa, 0xaa))
        );
        assert_eq!(
            rect_of(plan, ChromeRegion::SideLeft),
            Some(PixelRect::from_coords(0, 41, 0, 198))
        );
    }

    #[test]
    fn split_border_for_active_window_has_no_contour() {
        let mut c = Compositor::new();
        let theme = theme();
        let g = ChromeGeometry {
            secondary_height: Some(20),
            ..geometry(true)
        };
        let plan = c.layout(&g, &theme);
        assert_eq!(plan.region(ChromeRegion::SplitRight).count(), 1);
    }

    #[test]
    fn oversized_secondary_region_is_ignored() {
        let mut c = Compositor::new();
        let theme = theme();
        let g = ChromeGeometry {
            secondary_height: Some(500),
            ..geometry(false)
        };
        let plan = c.layout(&g, &theme);
        assert_eq!(plan.region(ChromeRegion::SplitLeft).count(), 0);
        assert_eq!(
            rect_of(plan, ChromeRegion::SideLeft),
            Some(PixelRect::new(0, 23, 1, 176))
        );
    }

    #[test]
    fn maximized_window_has_only_title() {
        let mut c = Compositor::new();
        let theme = theme();
        let g = ChromeGeometry::for_window(&theme, PixelRect::new(0, 0, 300, 200), false, true);
        let plan = c.layout(&g, &theme);
        assert!(
            plan.items.iter().all(|i| matches!(
                i.region,
                ChromeRegion::TitleBeforeCaption | ChromeRegion::TitleAfterCaption
            )),
            "no borders or edges when maximized"
        );
    }

    #[test]
    fn tiny_window_produces_only_valid_items() {
        let mut c = Compositor::new();
        let theme = theme();
        let g = ChromeGeometry::for_window(&theme, PixelRect::new(0, 0, 3, 5), false, false);
        let plan = c.layout(&g, &theme);
        assert!(plan.items.iter().all(|i| i.rect.is_valid()), "degenerate rects skipped");
        assert_eq!(plan.region(ChromeRegion::SideLeft).count(), 0);
    }

    #[test]
    fn compose_paints_frame_pixels() {
        let mut chrome = ChromeCache::new(theme());
        let mut c = Compositor::new();
        let g = geometry(false);
        let mut canvas = Canvas::new(300, 200, Pixel::TRANSPARENT);
        let e = c.compose(
            &mut chrome,
            &g,
            &DamageRegion::Full,
            &mut canvas,
            &mut Tracer::none(),
        );
        assert_eq!(e.culled, 0);
        assert_eq!(e.painted + 1, e.planned, "all but the caption painted");
        // Inactive light-mode border is dark gray.
        assert_eq!(canvas.pixel(0, 100), Some(Pixel::DARK_GRAY));
        assert_eq!(canvas.pixel(299, 100), Some(Pixel::DARK_GRAY));
        // Title fill uses the accent.
        assert_eq!(canvas.pixel(150, 10), Some(chrome.theme().title_flat()));
        // Window content is untouched.
        assert_eq!(canvas.pixel(150, 100), Some(Pixel::TRANSPARENT));
    }

    #[test]
    fn compose_culls_outside_damage() {
        let mut chrome = ChromeCache::new(theme());
        let mut c = Compositor::new();
        let g = geometry(true);
        let mut canvas = Canvas::new(300, 200, Pixel::TRANSPARENT);
        let damage = DamageRegion::from_rect(PixelRect::new(100, 190, 50, 10));
        let e = c.compose(&mut chrome, &g, &damage, &mut canvas, &mut Tracer::none());
        assert_eq!(e.painted, 1, "only the bottom edge overlaps");
        assert_eq!(canvas.pixel(0, 100), Some(Pixel::TRANSPARENT));
        assert_eq!(chrome.tiles().len(), 1, "culled items never touch the cache");
    }
}
