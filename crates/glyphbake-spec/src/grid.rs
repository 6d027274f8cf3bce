//! The fixed 16x6 character grid.
//!
//! Slots are filled row-major with the printable ASCII characters in
//! ascending code order, followed by one fallback glyph. Any code without a
//! printable slot is drawn with the fallback.

use serde::Serialize;

use crate::error::SpecError;

/// Cells per grid row.
pub const GRID_COLUMNS: usize = 16;
/// Grid rows.
pub const GRID_ROWS: usize = 6;
/// Total grid cells.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Glyph drawn for codes with no printable slot.
pub const FALLBACK_GLYPH: char = '?';
/// Slot holding the fallback glyph.
pub const FALLBACK_INDEX: usize = GRID_CELLS - 1;

/// Position of a glyph on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    pub col: usize,
    pub row: usize,
}

impl GridCell {
    /// Cell for a slot index.
    pub fn from_index(index: usize) -> Self {
        Self {
            col: index % GRID_COLUMNS,
            row: index / GRID_COLUMNS,
        }
    }

    /// Slot index for this cell.
    pub fn index(&self) -> usize {
        self.row * GRID_COLUMNS + self.col
    }
}

/// Printable in the 7-bit range: space through tilde.
fn is_printable_ascii(code: u32) -> bool {
    (0x20..0x7f).contains(&code)
}

/// The ordered 96-slot character table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphGrid {
    chars: Vec<char>,
}

impl GlyphGrid {
    /// Build the table from ASCII 0..128.
    ///
    /// Fails if the printable set plus the fallback does not fill the grid.
    pub fn ascii() -> Result<Self, SpecError> {
        let chars: Vec<char> = (0u32..128)
            .filter(|&c| is_printable_ascii(c))
            .filter_map(char::from_u32)
            .chain(std::iter::once(FALLBACK_GLYPH))
            .collect();
        Self::from_chars(chars)
    }

    fn from_chars(chars: Vec<char>) -> Result<Self, SpecError> {
        if chars.len() != GRID_CELLS {
            return Err(SpecError::GridMismatch {
                expected: GRID_CELLS,
                actual: chars.len(),
            });
        }
        Ok(Self { chars })
    }

    /// Characters in slot order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character drawn in a slot.
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Iterate `(cell, char)` pairs in slot order.
    pub fn cells(&self) -> impl Iterator<Item = (GridCell, char)> + '_ {
        self.chars
            .iter()
            .enumerate()
            .map(|(i, &c)| (GridCell::from_index(i), c))
    }

    /// Slot index for a character code. Total over `u32`.
    pub fn index_of(&self, code: u32) -> usize {
        if is_printable_ascii(code) {
            (code - 0x20) as usize
        } else {
            FALLBACK_INDEX
        }
    }

    /// Grid cell for a character code.
    pub fn cell_of(&self, code: u32) -> GridCell {
        GridCell::from_index(self.index_of(code))
    }

    /// The table as one string, in slot order.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}
