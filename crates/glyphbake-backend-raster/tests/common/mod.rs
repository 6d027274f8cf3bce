//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use glyphbake_backend_raster::{GlyphFace, RasterGlyph};

/// Deterministic face whose glyphs are derived from the character code.
///
/// Glyph size, offset, and coverage vary per character so packing sees
/// partial coverage and descenders. Glyphs stay inside a 15x30 cell.
pub struct PatternFace;

impl GlyphFace for PatternFace {
    fn ascent(&self, px: f32) -> f32 {
        px * 0.8
    }

    fn rasterize(&self, ch: char, _px: f32) -> RasterGlyph {
        if ch == ' ' {
            return RasterGlyph::empty();
        }
        let c = ch as usize;
        let width = 1 + c % 7;
        let height = 4 + c % 11;
        let coverage = (0..width * height)
            .map(|i| ((i * 37 + c * 13) % 256) as u8)
            .collect();
        RasterGlyph {
            xmin: (c % 3) as i32,
            ymin: -((c % 4) as i32),
            width,
            height,
            coverage,
        }
    }
}

/// Face whose glyphs are much wider than any cell.
pub struct WideFace;

impl GlyphFace for WideFace {
    fn ascent(&self, _px: f32) -> f32 {
        4.0
    }

    fn rasterize(&self, _ch: char, _px: f32) -> RasterGlyph {
        RasterGlyph {
            xmin: 0,
            ymin: 0,
            width: 40,
            height: 2,
            coverage: vec![255; 80],
        }
    }
}

/// A TrueType font available on this machine, if any.
///
/// `GLYPHBAKE_TEST_FONT` takes precedence over the well-known system paths.
pub fn system_font() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("GLYPHBAKE_TEST_FONT") {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
    }
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        "/System/Library/Fonts/Supplemental/Courier New.ttf",
        "C:\\Windows\\Fonts\\consola.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|p| p.is_file())
}
