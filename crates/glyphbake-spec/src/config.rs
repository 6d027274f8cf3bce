//! Generator configuration file.
//!
//! The built-in preset table is enough to reproduce the kernel fonts; a JSON
//! config only relocates the font and output directories or tunes individual
//! variants. Unknown fields are rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::variant::{FontVariantConfig, Preset};

/// Top-level generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory holding the source font faces.
    #[serde(default = "default_font_dir")]
    pub font_dir: PathBuf,

    /// Kernel embedded-asset directory. Must already exist.
    #[serde(default = "default_kernel_assets")]
    pub kernel_assets: PathBuf,

    /// Developer preview directory. Created on demand.
    #[serde(default = "default_preview_dir")]
    pub preview_dir: PathBuf,

    /// Variants to generate, in order.
    #[serde(default = "default_variants")]
    pub variants: Vec<VariantOverride>,
}

fn default_font_dir() -> PathBuf {
    PathBuf::from("assets/font")
}

fn default_kernel_assets() -> PathBuf {
    PathBuf::from("pkg/kernel/assets")
}

fn default_preview_dir() -> PathBuf {
    PathBuf::from("assets/img")
}

fn default_variants() -> Vec<VariantOverride> {
    Preset::ALL.iter().map(|p| VariantOverride::new(*p)).collect()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            font_dir: default_font_dir(),
            kernel_assets: default_kernel_assets(),
            preview_dir: default_preview_dir(),
            variants: default_variants(),
        }
    }
}

/// Per-variant tuning on top of a preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantOverride {
    /// Preset the variant starts from.
    pub preset: Preset,

    /// Replacement sampling threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u8>,

    /// Replacement rasterization size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_size: Option<f32>,

    /// Replacement draw offset `[x, y]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<[u32; 2]>,

    /// Replacement font face file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_file: Option<PathBuf>,
}

impl VariantOverride {
    /// An override that changes nothing.
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            threshold: None,
            pixel_size: None,
            padding: None,
            font_file: None,
        }
    }

    /// Apply this override to its preset and validate the result.
    pub fn resolve(&self) -> Result<FontVariantConfig, SpecError> {
        let mut cfg = self.preset.resolve();
        if let Some(threshold) = self.threshold {
            cfg = cfg.with_threshold(threshold);
        }
        if let Some(pixel_size) = self.pixel_size {
            cfg = cfg.with_pixel_size(pixel_size);
        }
        if let Some([x, y]) = self.padding {
            cfg = cfg.with_padding(x, y);
        }
        if let Some(font_file) = &self.font_file {
            cfg = cfg.with_font_file(font_file.clone());
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

impl GeneratorConfig {
    /// Load a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SpecError> {
        let text = std::fs::read_to_string(path).map_err(|source| SpecError::ConfigIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| SpecError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Keep only the variants built from the given presets, in config order.
    ///
    /// Presets missing from the config are appended with no overrides.
    pub fn select(&mut self, presets: &[Preset]) {
        if presets.is_empty() {
            return;
        }
        let mut selected: Vec<VariantOverride> = self
            .variants
            .iter()
            .filter(|v| presets.contains(&v.preset))
            .cloned()
            .collect();
        for preset in presets {
            if !selected.iter().any(|v| v.preset == *preset) {
                selected.push(VariantOverride::new(*preset));
            }
        }
        self.variants = selected;
    }

    /// Resolve every variant, failing on the first invalid one.
    pub fn resolve_variants(&self) -> Result<Vec<FontVariantConfig>, SpecError> {
        let resolved = self
            .variants
            .iter()
            .map(VariantOverride::resolve)
            .collect::<Result<Vec<_>, _>>()?;

        for (i, a) in resolved.iter().enumerate() {
            if resolved[..i].iter().any(|b| b.name == a.name) {
                return Err(SpecError::InvalidVariant {
                    name: a.name.clone(),
                    reason: "listed more than once; output paths would collide".into(),
                });
            }
        }
        Ok(resolved)
    }

    /// Font face path for a variant.
    pub fn font_path(&self, variant: &FontVariantConfig) -> PathBuf {
        self.font_dir.join(&variant.font_file)
    }
}
