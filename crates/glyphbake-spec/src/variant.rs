//! Font variant geometry and the built-in preset table.
//!
//! A variant fixes everything the generator and the kernel decoder must agree
//! on: the cell size, the canvas size derived from it, and the sampling
//! threshold. The `.raw` atlas carries no header, so these numbers are the
//! only description of its layout.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::grid::{GRID_COLUMNS, GRID_ROWS};

/// Source font shared by the built-in presets.
pub const DEFAULT_FONT_FILE: &str = "JetBrainsMono.ttf";

/// Named geometry presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Console body text.
    Body,
    /// Large title text.
    Title,
}

impl Preset {
    /// Every preset, in generation order.
    pub const ALL: [Preset; 2] = [Preset::Body, Preset::Title];

    /// Lowercase preset identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Body => "body",
            Preset::Title => "title",
        }
    }

    /// Fixed parameters for this preset.
    pub fn params(&self) -> PresetParams {
        match self {
            Preset::Body => PresetParams {
                name: "JBMONO",
                block_size: 26,
                pixel_size: 25.0,
                width_compensation: 1,
                threshold: 35,
            },
            Preset::Title => PresetParams {
                name: "JBMONO_TITLE",
                block_size: 52,
                pixel_size: 46.0,
                width_compensation: 0,
                threshold: 32,
            },
        }
    }

    /// Resolve this preset into a full variant config.
    pub fn resolve(&self) -> FontVariantConfig {
        let p = self.params();
        FontVariantConfig {
            name: p.name.to_string(),
            preset: Some(*self),
            font_file: PathBuf::from(DEFAULT_FONT_FILE),
            pixel_size: p.pixel_size,
            block_size: p.block_size,
            cell_width: cell_width_for(p.block_size, p.width_compensation),
            cell_height: cell_height_for(p.block_size),
            padding_x: 0,
            padding_y: 0,
            threshold: p.threshold,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "body" => Ok(Preset::Body),
            "title" => Ok(Preset::Title),
            other => Err(SpecError::UnknownPreset(other.to_string())),
        }
    }
}

/// Constants that define one preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetParams {
    /// Output file stem.
    pub name: &'static str,
    /// Nominal block size the cell geometry is derived from.
    pub block_size: u32,
    /// Point size handed to the font rasterizer.
    pub pixel_size: f32,
    /// Extra pixels added to the cell width.
    pub width_compensation: u32,
    /// Red-channel value above which a pixel is "on".
    pub threshold: u8,
}

/// `floor(block * 9 / 16) + compensation`.
pub fn cell_width_for(block_size: u32, width_compensation: u32) -> u32 {
    block_size * 9 / 16 + width_compensation
}

/// `block + 4`.
pub fn cell_height_for(block_size: u32) -> u32 {
    block_size + 4
}

/// Largest rasterization size accepted, as a multiple of the cell height.
///
/// Anything bigger cannot fit a cell and stalls or aborts the rasterizer.
pub const MAX_PIXEL_SIZE_PER_CELL_HEIGHT: f32 = 4.0;

/// Bytes per packed row of a `width`-pixel image: `ceil(width / 8)`.
#[inline]
pub fn packed_row_bytes(width: u32) -> usize {
    (width as usize).div_ceil(8)
}

/// Packed length of a `width x height` image. Rows never share a byte.
#[inline]
pub fn packed_len(width: u32, height: u32) -> usize {
    height as usize * packed_row_bytes(width)
}

/// Resolve a preset by name.
pub fn resolve_preset(name: &str) -> Result<FontVariantConfig, SpecError> {
    Ok(name.parse::<Preset>()?.resolve())
}

/// Fully resolved geometry for one font variant.
///
/// Fields are public for reading. Variants are built by [`Preset::resolve`]
/// and adjusted only through the `with_*` builders, which return a new value,
/// followed by [`FontVariantConfig::validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontVariantConfig {
    /// Identifier used for output file names.
    pub name: String,
    /// Preset this variant was resolved from, if any.
    pub preset: Option<Preset>,
    /// Font face file, relative to the font directory unless absolute.
    pub font_file: PathBuf,
    /// Rasterization size in pixels.
    pub pixel_size: f32,
    /// Block size the cell geometry was derived from.
    pub block_size: u32,
    /// Width of one glyph cell in pixels.
    pub cell_width: u32,
    /// Height of one glyph cell in pixels.
    pub cell_height: u32,
    /// Horizontal draw offset inside the cell.
    pub padding_x: u32,
    /// Vertical draw offset inside the cell.
    pub padding_y: u32,
    /// Sampling threshold for the red channel.
    pub threshold: u8,
}

impl FontVariantConfig {
    /// Canvas width: 16 cells.
    pub fn canvas_width(&self) -> u32 {
        self.cell_width * GRID_COLUMNS as u32
    }

    /// Canvas height: 6 cells.
    pub fn canvas_height(&self) -> u32 {
        self.cell_height * GRID_ROWS as u32
    }

    /// Bytes per packed canvas row.
    pub fn packed_row_bytes(&self) -> usize {
        packed_row_bytes(self.canvas_width())
    }

    /// Total length of the packed atlas in bytes.
    pub fn packed_len(&self) -> usize {
        packed_len(self.canvas_width(), self.canvas_height())
    }

    /// Sets the output file stem.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the sampling threshold.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the rasterization size.
    pub fn with_pixel_size(mut self, pixel_size: f32) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    /// Sets the draw offset inside each cell.
    pub fn with_padding(mut self, padding_x: u32, padding_y: u32) -> Self {
        self.padding_x = padding_x;
        self.padding_y = padding_y;
        self
    }

    /// Sets the font face file.
    pub fn with_font_file(mut self, font_file: impl Into<PathBuf>) -> Self {
        self.font_file = font_file.into();
        self
    }

    /// Check that the geometry can be rendered and decoded.
    pub fn validate(&self) -> Result<(), SpecError> {
        let invalid = |reason: String| SpecError::InvalidVariant {
            name: self.name.clone(),
            reason,
        };

        if self.name.is_empty() {
            return Err(invalid("name must not be empty".into()));
        }
        if self
            .name
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        {
            return Err(invalid(format!(
                "name '{}' may only contain ASCII letters, digits, '_' and '-'",
                self.name
            )));
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(invalid(format!(
                "cell size {}x{} must be non-zero",
                self.cell_width, self.cell_height
            )));
        }
        if self.padding_x >= self.cell_width || self.padding_y >= self.cell_height {
            return Err(invalid(format!(
                "padding ({}, {}) falls outside the {}x{} cell",
                self.padding_x, self.padding_y, self.cell_width, self.cell_height
            )));
        }
        if !(self.pixel_size.is_finite() && self.pixel_size > 0.0) {
            return Err(invalid(format!(
                "pixel size {} must be positive",
                self.pixel_size
            )));
        }
        let max_pixel_size = self.cell_height as f32 * MAX_PIXEL_SIZE_PER_CELL_HEIGHT;
        if self.pixel_size > max_pixel_size {
            return Err(invalid(format!(
                "pixel size {} exceeds {} for a {}px tall cell",
                self.pixel_size, max_pixel_size, self.cell_height
            )));
        }
        Ok(())
    }
}

impl fmt::Display for FontVariantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}, {}) ({},{})",
            self.name,
            self.canvas_width(),
            self.canvas_height(),
            self.cell_width,
            self.cell_height
        )
    }
}
