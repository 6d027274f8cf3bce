//! glyphbake variant geometry and glyph grid
//!
//! This crate holds the plain data shared by the atlas generator and anything
//! that decodes its output: the named geometry presets, the 96-slot character
//! grid, the generator config file, and the error codes.
//!
//! # Example
//!
//! ```
//! use glyphbake_spec::{resolve_preset, GlyphGrid};
//!
//! let body = resolve_preset("body").unwrap();
//! assert_eq!((body.cell_width, body.cell_height), (15, 30));
//! assert_eq!(body.packed_len(), 180 * 30);
//!
//! let grid = GlyphGrid::ascii().unwrap();
//! let cell = grid.cell_of('A' as u32);
//! assert_eq!((cell.col, cell.row), (1, 2));
//! ```
//!
//! # Modules
//!
//! - [`variant`]: presets and [`FontVariantConfig`]
//! - [`grid`]: character ordering and cell lookup
//! - [`config`]: JSON generator configuration
//! - [`metadata`]: atlas sidecar description
//! - [`error`]: error type and codes

pub mod config;
pub mod error;
pub mod grid;
pub mod metadata;
pub mod variant;

pub use config::{GeneratorConfig, VariantOverride};
pub use error::{BackendError, SpecError};
pub use grid::{
    GlyphGrid, GridCell, FALLBACK_GLYPH, FALLBACK_INDEX, GRID_CELLS, GRID_COLUMNS, GRID_ROWS,
};
pub use metadata::AtlasMetadata;
pub use variant::{
    cell_height_for, cell_width_for, packed_len, packed_row_bytes, resolve_preset, FontVariantConfig,
    Preset, PresetParams, DEFAULT_FONT_FILE, MAX_PIXEL_SIZE_PER_CELL_HEIGHT,
};
