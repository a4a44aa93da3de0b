// Copyright 2026 the Mullion Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text and image dumps of glyph masks and pixel buffers.

use std::io::{self, Write};

use serde_json::{Value, json};

use mullion_core::bitmap::Bitmap;
use mullion_core::pixel::Pixel;
use mullion_core::surface::Surface;

/// Renders a glyph mask as ASCII art, `#` for set bits and `.` otherwise,
/// one line per row.
#[must_use]
pub fn bitmap_ascii(bitmap: &Bitmap) -> String {
    let n = bitmap.size();
    let mut out = String::new();
    for y in 0..n {
        out.extend((0..n).map(|x| if bitmap.get(x, y) { '#' } else { '.' }));
        out.push('\n');
    }
    out
}

/// Writes [`bitmap_ascii`] to `writer`.
pub fn write_bitmap_ascii(bitmap: &Bitmap, writer: &mut dyn Write) -> io::Result<()> {
    writer.write_all(bitmap_ascii(bitmap).as_bytes())
}

/// Describes a row-major pixel buffer as JSON: its size and one array of
/// `#aarrggbb` strings per row.
#[must_use]
pub fn pixels_json(width: i32, height: i32, pixels: &[Pixel]) -> Value {
    let w = usize::try_from(width).unwrap_or(0).max(1);
    let rows: Vec<Value> = pixels
        .chunks(w)
        .map(|row| row.iter().map(|p| Value::from(hex(*p))).collect())
        .collect();
    json!({
        "width": width,
        "height": height,
        "rows": rows,
    })
}

/// [`pixels_json`] for a cached surface.
#[must_use]
pub fn surface_json(surface: &Surface) -> Value {
    pixels_json(surface.width(), surface.height(), surface.pixels())
}

/// Writes a binary PPM (P6) image of a pixel buffer. Alpha is dropped.
pub fn write_ppm(
    width: i32,
    height: i32,
    pixels: &[Pixel],
    writer: &mut dyn Write,
) -> io::Result<()> {
    write!(writer, "P6\n{width} {height}\n255\n")?;
    let rgb: Vec<u8> = pixels.iter().flat_map(|p| [p.r(), p.g(), p.b()]).collect();
    writer.write_all(&rgb)
}

fn hex(p: Pixel) -> String {
    format!("#{:08x}", p.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mullion_core::glyph::{GlyphId, render};

    #[test]
    fn ascii_art_of_close_glyph() {
        let art = bitmap_ascii(&render(GlyphId::Close, 5));
        let lines: Vec<_> = art.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.len() == 5), "square output");
        assert_eq!(
            art.matches('#').count(),
            render(GlyphId::Close, 5).count_set() as usize
        );
    }

    #[test]
    fn write_ascii_matches_string() {
        let bm = render(GlyphId::Minimize, 7);
        let mut out = Vec::new();
        write_bitmap_ascii(&bm, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), bitmap_ascii(&bm));
    }

    #[test]
    fn surface_json_lists_rows() {
        let mut s = Surface::new(2, 2);
        s.set(1, 0, Pixel::WHITE);
        let v = surface_json(&s);
        assert_eq!(v["width"], 2);
        assert_eq!(v["rows"].as_array().map(Vec::len), Some(2));
        assert_eq!(v["rows"][0][1], "#ffffffff");
        assert_eq!(v["rows"][1][0], "#00000000");
    }

    #[test]
    fn ppm_header_and_payload() {
        let pixels = [Pixel::from_rgb(1, 2, 3), Pixel::WHITE];
        let mut out = Vec::new();
        write_ppm(2, 1, &pixels, &mut out).unwrap();
        let header = b"P6\n2 1\n255\n";
        assert!(out.starts_with(header), "P6 header");
        assert_eq!(&out[header.len()..], &[1, 2, 3, 255, 255, 255]);
    }
}
