// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paints a decorated window on the CPU and exercises the diagnostics
//! pipeline.
//!
//! Three paint requests go through one [`ChromeCache`]: a full paint, a
//! partial repaint of the maximize and close buttons as the pointer moves
//! from one to the other, and a full paint after switching to dark mode.
//! Events go to both a [`PrettyPrintSink`] on stdout and a [`RecorderSink`],
//! which is then exported as trace JSON. The final canvas is written as a PPM image.

use std::fs::File;
use std::io::{BufWriter, Write};

use peniko::Color;

use mullion_core::chrome::ChromeCache;
use mullion_core::geometry::PixelRect;
use mullion_core::glyph::GlyphId;
use mullion_core::theme::{DecorationConfig, FontMetrics, Palette, RoleColors, Theme, TitleAlign};
use mullion_core::trace::{
    ComposeEvent, IconLookupEvent, InvalidateEvent, TileLookupEvent, TraceSink, Tracer,
};
use mullion_render::{
    ButtonPainter, ButtonState, Canvas, ChromeGeometry, Compositor, DamageRegion, TITLE_EDGE_TOP,
};

use mullion_debug::dump;
use mullion_debug::pretty::PrettyPrintSink;
use mullion_debug::recorder::RecorderSink;

const WINDOW: PixelRect = PixelRect::new(0, 0, 320, 200);
const CAPTION_WIDTH: i32 = 96;

/// Forwards every event to two sinks.
struct Tee<'a> {
    a: &'a mut dyn TraceSink,
    b: &'a mut dyn TraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_tile_lookup(&mut self, e: &TileLookupEvent) {
        self.a.on_tile_lookup(e);
        self.b.on_tile_lookup(e);
    }

    fn on_icon_lookup(&mut self, e: &IconLookupEvent) {
        self.a.on_icon_lookup(e);
        self.b.on_icon_lookup(e);
    }

    fn on_invalidate(&mut self, e: &InvalidateEvent) {
        self.a.on_invalidate(e);
        self.b.on_invalidate(e);
    }

    fn on_compose(&mut self, e: &ComposeEvent) {
        self.a.on_compose(e);
        self.b.on_compose(e);
    }
}

/// One title bar button and where it sits.
struct Button {
    painter: ButtonPainter,
    rect: PixelRect,
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(std::io::stdout());
    let mut recorder = RecorderSink::new();

    // -- theme -------------------------------------------------------------
    let config = DecorationConfig {
        title_align: TitleAlign::Center,
        ..DecorationConfig::default()
    };
    let palette = Palette {
        active: RoleColors::new(
            Color::from_rgb8(0x2d, 0x7d, 0x9a),
            Color::from_rgb8(0x2d, 0x7d, 0x9a),
            Color::WHITE,
        ),
        ..Palette::default()
    };
    let theme = Theme::from_config(
        &config,
        palette,
        FontMetrics { height: 13 },
        FontMetrics { height: 11 },
    );
    let mut chrome = ChromeCache::new(theme);
    let mut compositor = Compositor::new();

    // -- layout ------------------------------------------------------------
    let (bw, bh) = ChromeGeometry::button_size(&theme, false, false);
    let right = [GlyphId::Minimize, GlyphId::Maximize, GlyphId::Close];
    let left = [GlyphId::OnAllDesktops];
    let base = ChromeGeometry::for_window(&theme, WINDOW, false, false);
    let geometry = ChromeGeometry {
        active: true,
        buttons_left_width: bw,
        buttons_right_width: bw * 3,
        caption_width: CAPTION_WIDTH,
        ..base
    };
    let button_y = WINDOW.y + TITLE_EDGE_TOP - 3;
    let mut buttons = Vec::new();
    for (i, glyph) in (0..).zip(left) {
        let x = WINDOW.x + geometry.title_edge_left + i * bw;
        buttons.push(Button {
            painter: ButtonPainter::new(glyph, false),
            rect: PixelRect::new(x, button_y, bw, bh),
        });
    }
    let right_start = WINDOW.right() - geometry.title_edge_right - geometry.buttons_right_width + 1;
    for (i, glyph) in (0..).zip(right) {
        buttons.push(Button {
            painter: ButtonPainter::new(glyph, false),
            rect: PixelRect::new(right_start + i * bw, button_y, bw, bh),
        });
    }

    let mut canvas = Canvas::new(
        WINDOW.width,
        WINDOW.height,
        chrome.theme().palette.content_base,
    );

    {
        let mut tee = Tee {
            a: &mut pretty,
            b: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);

        // -- 1. full paint -------------------------------------------------
        println!("-- full paint");
        compositor.compose(
            &mut chrome,
            &geometry,
            &DamageRegion::Full,
            &mut canvas,
            &mut tracer,
        );
        paint_buttons(&mut chrome, &mut canvas, &buttons, &geometry, None, &mut tracer);

        // -- 2. pointer moves from maximize to close -----------------------
        println!("-- hover repaint");
        let mut damage = DamageRegion::None;
        for button in &buttons {
            if matches!(button.painter.glyph, GlyphId::Maximize | GlyphId::Close) {
                damage.merge(&DamageRegion::from_rect(button.rect));
            }
        }
        compositor.compose(&mut chrome, &geometry, &damage, &mut canvas, &mut tracer);
        paint_buttons(
            &mut chrome,
            &mut canvas,
            &buttons,
            &geometry,
            Some(GlyphId::Close),
            &mut tracer,
        );

        // -- 3. dark mode ------------------------------------------------------
        println!("-- dark mode");
        chrome.set_theme_traced(
            Theme {
                dark_mode: true,
                ..theme
            },
            &mut tracer,
        );
        compositor.compose(
            &mut chrome,
            &geometry,
            &DamageRegion::Full,
            &mut canvas,
            &mut tracer,
        );
        paint_buttons(&mut chrome, &mut canvas, &buttons, &geometry, None, &mut tracer);
    }

    if let Some(caption) = compositor.plan().caption {
        println!("caption goes to {caption:?}");
    }

    // -- glyph preview ---------------------------------------------------
    let close = chrome.icon(GlyphId::Close, false, bw, bh);
    let mut stdout = std::io::stdout();
    dump::write_bitmap_ascii(close, &mut stdout).expect("failed to write glyph preview");
    stdout.flush().expect("failed to flush stdout");

    // -- export ------------------------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    mullion_debug::export::export_json(recorder.as_bytes(), &mut writer)
        .expect("failed to write trace");
    println!("Wrote {path}");

    let path = "window.ppm";
    let file = File::create(path).expect("failed to create window.ppm");
    let mut writer = BufWriter::new(file);
    dump::write_ppm(canvas.width(), canvas.height(), canvas.pixels(), &mut writer)
        .expect("failed to write image");
    println!("Wrote {path} ({}x{})", canvas.width(), canvas.height());
}

fn paint_buttons(
    chrome: &mut ChromeCache,
    canvas: &mut Canvas,
    buttons: &[Button],
    geometry: &ChromeGeometry,
    hovered: Option<GlyphId>,
    tracer: &mut Tracer<'_>,
) {
    for button in buttons {
        let state = ButtonState {
            hovered: hovered == Some(button.painter.glyph),
            pressed: false,
        };
        button
            .painter
            .paint(chrome, canvas, button.rect, geometry.active, state, tracer);
    }
}
