//! JSON output types for the `--json` flag.

use serde::{Deserialize, Serialize};

use glyphbake_spec::{BackendError, FontVariantConfig};

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "GLYPH_010")
    pub code: String,
    /// Error category ("config", "asset", "io")
    pub category: String,
    /// Human-readable error message
    pub message: String,
    /// Variant being generated when the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl JsonError {
    pub fn from_backend(err: &dyn BackendError, variant: Option<&str>) -> Self {
        Self {
            code: err.code().to_string(),
            category: err.category().to_string(),
            message: err.message(),
            variant: variant.map(str::to_string),
        }
    }
}

/// Geometry row shared by `generate` and `presets` output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantGeometry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    pub pixel_size: f32,
    pub cell_size: [u32; 2],
    pub canvas_size: [u32; 2],
    pub threshold: u8,
    pub byte_len: usize,
}

impl From<&FontVariantConfig> for VariantGeometry {
    fn from(cfg: &FontVariantConfig) -> Self {
        Self {
            name: cfg.name.clone(),
            preset: cfg.preset.map(|p| p.to_string()),
            pixel_size: cfg.pixel_size,
            cell_size: [cfg.cell_width, cfg.cell_height],
            canvas_size: [cfg.canvas_width(), cfg.canvas_height()],
            threshold: cfg.threshold,
            byte_len: cfg.packed_len(),
        }
    }
}

/// One generated variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedVariant {
    #[serde(flatten)]
    pub geometry: VariantGeometry,
    /// Packed atlas path
    pub atlas: String,
    /// Preview image path
    pub preview: String,
    /// Metadata sidecar path
    pub metadata: String,
    /// BLAKE3 hash of the atlas bytes
    pub blake3: String,
    pub duration_ms: u64,
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    pub success: bool,
    pub variants: Vec<GeneratedVariant>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<JsonError>,
}

/// Output of `presets --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetsOutput {
    pub presets: Vec<VariantGeometry>,
}
