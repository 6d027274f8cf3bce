//! Font faces that can rasterize single glyphs.
//!
//! The rasterizer only needs two things from a face: where the ascender line
//! sits and a coverage bitmap per character. [`TrueTypeFace`] provides them
//! from a TrueType/OpenType file via `fontdue`.

use std::fmt;
use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::error::RasterError;

/// A rasterized glyph with its placement relative to the pen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterGlyph {
    /// Left edge offset from the pen position.
    pub xmin: i32,
    /// Bottom edge offset from the baseline, positive upward.
    pub ymin: i32,
    /// Bitmap width.
    pub width: usize,
    /// Bitmap height.
    pub height: usize,
    /// Row-major 8-bit coverage, top row first.
    pub coverage: Vec<u8>,
}

impl RasterGlyph {
    /// A glyph with no ink.
    pub fn empty() -> Self {
        Self {
            xmin: 0,
            ymin: 0,
            width: 0,
            height: 0,
            coverage: Vec::new(),
        }
    }

    /// Coverage at `(x, y)` inside the glyph bitmap.
    #[inline]
    pub fn coverage_at(&self, x: usize, y: usize) -> u8 {
        self.coverage[y * self.width + x]
    }

    /// Top edge offset from the baseline, positive upward.
    pub fn ymax(&self) -> i32 {
        self.ymin + self.height as i32
    }
}

/// A source of glyph bitmaps at a given pixel size.
pub trait GlyphFace {
    /// Distance from the top of the line box to the baseline.
    fn ascent(&self, px: f32) -> f32;

    /// Rasterize one character.
    fn rasterize(&self, ch: char, px: f32) -> RasterGlyph;
}

/// A TrueType/OpenType face loaded from disk or memory.
pub struct TrueTypeFace {
    font: Font,
}

impl fmt::Debug for TrueTypeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrueTypeFace")
            .field("name", &self.font.name())
            .field("glyph_count", &self.font.glyph_count())
            .finish()
    }
}

impl TrueTypeFace {
    /// Load a face from a font file.
    pub fn load(path: &Path) -> Result<Self, RasterError> {
        let bytes = std::fs::read(path).map_err(|e| RasterError::AssetLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_bytes(&bytes, &path.display().to_string())
    }

    /// Parse a face from font file bytes. `label` names the source in errors.
    pub fn from_bytes(bytes: &[u8], label: &str) -> Result<Self, RasterError> {
        let font =
            Font::from_bytes(bytes, FontSettings::default()).map_err(|e| RasterError::AssetLoad {
                path: label.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { font })
    }
}

impl GlyphFace for TrueTypeFace {
    fn ascent(&self, px: f32) -> f32 {
        self.font
            .horizontal_line_metrics(px)
            .map(|m| m.ascent)
            .unwrap_or(px)
    }

    fn rasterize(&self, ch: char, px: f32) -> RasterGlyph {
        let (metrics, coverage) = self.font.rasterize(ch, px);
        RasterGlyph {
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            width: metrics.width,
            height: metrics.height,
            coverage,
        }
    }
}
