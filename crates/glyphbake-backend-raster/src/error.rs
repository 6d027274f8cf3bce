//! Errors from rasterizing, packing, and writing an atlas.

use std::path::Path;

use glyphbake_spec::{BackendError, SpecError};
use thiserror::Error;

use crate::png::PngError;

/// Errors from atlas generation.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The variant or grid is misconfigured.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// The font face is missing or could not be parsed.
    #[error("Failed to load font {path}: {reason}")]
    AssetLoad { path: String, reason: String },

    /// A packed buffer does not match the canvas geometry.
    #[error("Packed atlas is {actual} bytes, expected {expected} for a {width}x{height} canvas")]
    PackedLength {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },

    /// The kernel asset directory does not exist.
    #[error("Kernel asset directory {0} does not exist")]
    MissingAssetRoot(String),

    /// A file could not be written.
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The preview image could not be encoded.
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    /// The metadata sidecar could not be serialized.
    #[error("Metadata serialization error: {0}")]
    Metadata(#[from] serde_json::Error),
}

impl RasterError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        RasterError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

impl BackendError for RasterError {
    fn code(&self) -> &'static str {
        match self {
            RasterError::Spec(e) => e.code(),
            RasterError::AssetLoad { .. } => "GLYPH_010",
            RasterError::PackedLength { .. } => "GLYPH_011",
            RasterError::MissingAssetRoot(_) => "GLYPH_020",
            RasterError::Io { .. } => "GLYPH_021",
            RasterError::Png(_) => "GLYPH_022",
            RasterError::Metadata(_) => "GLYPH_023",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            RasterError::Spec(e) => e.category(),
            RasterError::AssetLoad { .. } => "asset",
            RasterError::PackedLength { .. } => "asset",
            RasterError::MissingAssetRoot(_)
            | RasterError::Io { .. }
            | RasterError::Png(_)
            | RasterError::Metadata(_) => "io",
        }
    }
}
