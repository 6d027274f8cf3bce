//! Metadata sidecar describing a generated atlas.
//!
//! The `.raw` atlas has no header. The sidecar records the geometry a decoder
//! must be built with, plus a content hash, next to the preview image.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::grid::{GlyphGrid, FALLBACK_INDEX, GRID_COLUMNS, GRID_ROWS};
use crate::variant::{FontVariantConfig, Preset};

/// Geometry and provenance of one packed atlas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasMetadata {
    /// Variant name (output file stem).
    pub name: String,
    /// Preset the variant came from.
    pub preset: Option<Preset>,
    /// Source font face.
    pub font_file: PathBuf,
    /// Rasterization size in pixels.
    pub pixel_size: f32,
    /// Glyph cell size `[width, height]`.
    pub cell_size: [u32; 2],
    /// Draw offset inside each cell `[x, y]`.
    pub padding: [u32; 2],
    /// Baseline row inside each cell, counted from the cell top.
    pub baseline: i32,
    /// Canvas size `[width, height]`.
    pub canvas_size: [u32; 2],
    /// Grid shape `[columns, rows]`.
    pub grid: [usize; 2],
    /// Red-channel sampling threshold.
    pub threshold: u8,
    /// Bytes per packed row.
    pub row_bytes: usize,
    /// Total atlas length in bytes.
    pub byte_len: usize,
    /// Characters in slot order.
    pub glyph_table: String,
    /// Slot used for unmapped codes.
    pub fallback_index: usize,
    /// BLAKE3 hash of the atlas bytes.
    pub blake3: String,
}

impl AtlasMetadata {
    /// Describe an atlas built from `cfg` whose bytes hash to `hash`.
    pub fn new(
        cfg: &FontVariantConfig,
        grid: &GlyphGrid,
        baseline: i32,
        hash: impl Into<String>,
    ) -> Self {
        Self {
            name: cfg.name.clone(),
            preset: cfg.preset,
            font_file: cfg.font_file.clone(),
            pixel_size: cfg.pixel_size,
            cell_size: [cfg.cell_width, cfg.cell_height],
            padding: [cfg.padding_x, cfg.padding_y],
            baseline,
            canvas_size: [cfg.canvas_width(), cfg.canvas_height()],
            grid: [GRID_COLUMNS, GRID_ROWS],
            threshold: cfg.threshold,
            row_bytes: cfg.packed_row_bytes(),
            byte_len: cfg.packed_len(),
            glyph_table: grid.as_string(),
            fallback_index: FALLBACK_INDEX,
            blake3: hash.into(),
        }
    }
}
