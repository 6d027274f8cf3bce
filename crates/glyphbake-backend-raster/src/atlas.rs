//! Reads glyphs back out of a packed atlas.
//!
//! This is the same arithmetic the kernel console uses: find the glyph's grid
//! slot, then read `cell_height` packed rows starting at `row * cell_height`,
//! taking `cell_width` bits from bit offset `col * cell_width` in each row.

use glyphbake_spec::{
    packed_len, packed_row_bytes, FontVariantConfig, GlyphGrid, GridCell, GRID_COLUMNS, GRID_ROWS,
};

use crate::error::RasterError;

/// A borrowed view over a packed atlas.
#[derive(Debug, Clone)]
pub struct AtlasView<'a> {
    bytes: &'a [u8],
    grid: GlyphGrid,
    cell_width: u32,
    cell_height: u32,
    stride: usize,
}

impl<'a> AtlasView<'a> {
    /// Wrap packed bytes, checking their length against the variant geometry.
    pub fn new(bytes: &'a [u8], cfg: &FontVariantConfig) -> Result<Self, RasterError> {
        let (width, height) = (cfg.canvas_width(), cfg.canvas_height());
        let expected = packed_len(width, height);
        if bytes.len() != expected {
            return Err(RasterError::PackedLength {
                expected,
                actual: bytes.len(),
                width,
                height,
            });
        }
        Ok(Self {
            bytes,
            grid: GlyphGrid::ascii()?,
            cell_width: cfg.cell_width,
            cell_height: cfg.cell_height,
            stride: packed_row_bytes(width),
        })
    }

    /// Pixel at canvas coordinates.
    #[inline]
    fn bit(&self, x: u32, y: u32) -> bool {
        let byte = self.bytes[y as usize * self.stride + x as usize / 8];
        (byte >> (7 - x % 8)) & 1 == 1
    }

    /// Extract the glyph for a character code. Unmapped codes yield the fallback.
    pub fn glyph(&self, code: u32) -> GlyphBitmap {
        self.read_cell(self.grid.cell_of(code))
    }

    /// Extract the glyph in a grid cell, or `None` if the cell is off the grid.
    pub fn glyph_at(&self, cell: GridCell) -> Option<GlyphBitmap> {
        if cell.col >= GRID_COLUMNS || cell.row >= GRID_ROWS {
            return None;
        }
        Some(self.read_cell(cell))
    }

    fn read_cell(&self, cell: GridCell) -> GlyphBitmap {
        let x0 = cell.col as u32 * self.cell_width;
        let y0 = cell.row as u32 * self.cell_height;
        let mut rows = Vec::with_capacity(self.cell_height as usize);
        for dy in 0..self.cell_height {
            let row = (0..self.cell_width)
                .map(|dx| self.bit(x0 + dx, y0 + dy))
                .collect();
            rows.push(row);
        }
        GlyphBitmap {
            cell,
            width: self.cell_width,
            height: self.cell_height,
            rows,
        }
    }
}

/// One glyph cell decoded from an atlas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    /// Grid cell the glyph came from.
    pub cell: GridCell,
    /// Cell width.
    pub width: u32,
    /// Cell height.
    pub height: u32,
    /// Pixel states, top row first.
    pub rows: Vec<Vec<bool>>,
}

impl GlyphBitmap {
    /// Whether the glyph has any ink.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|r| r.iter().all(|&b| !b))
    }

    /// Render as text, `#` for ink and `.` for background.
    pub fn to_ascii_art(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for row in &self.rows {
            out.extend(row.iter().map(|&b| if b { '#' } else { '.' }));
            out.push('\n');
        }
        out
    }
}
