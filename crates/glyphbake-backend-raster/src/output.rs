//! Writes a variant's atlas, preview image, and metadata sidecar.
//!
//! The atlas goes into the kernel's embedded-asset directory, which must
//! already exist: a missing directory means the kernel tree is misconfigured
//! and is reported instead of created. The preview tree is created on demand.
//! Files are written in place; a failure part way leaves earlier files as they
//! are.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RasterError;
use crate::generate::VariantArtifacts;
use crate::png::{write_rgb_to_vec, PngConfig};

/// Extension of the packed atlas file.
pub const ATLAS_EXTENSION: &str = "raw";
/// Extension of the preview image.
pub const PREVIEW_EXTENSION: &str = "png";
/// Extension of the metadata sidecar.
pub const METADATA_EXTENSION: &str = "json";

/// Where generated files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRoots {
    /// Kernel embedded-asset directory.
    pub kernel_assets: PathBuf,
    /// Developer preview directory.
    pub preview: PathBuf,
}

impl OutputRoots {
    pub fn new(kernel_assets: impl Into<PathBuf>, preview: impl Into<PathBuf>) -> Self {
        Self {
            kernel_assets: kernel_assets.into(),
            preview: preview.into(),
        }
    }

    /// Atlas path for a variant name.
    pub fn atlas_path(&self, name: &str) -> PathBuf {
        self.kernel_assets
            .join(format!("{}.{}", name, ATLAS_EXTENSION))
    }

    /// Preview image path for a variant name.
    pub fn preview_path(&self, name: &str) -> PathBuf {
        self.preview.join(format!("{}.{}", name, PREVIEW_EXTENSION))
    }

    /// Metadata sidecar path for a variant name.
    pub fn metadata_path(&self, name: &str) -> PathBuf {
        self.preview.join(format!("{}.{}", name, METADATA_EXTENSION))
    }
}

/// Paths written for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPaths {
    pub atlas: PathBuf,
    pub preview: PathBuf,
    pub metadata: PathBuf,
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), RasterError> {
    fs::write(path, data).map_err(|e| RasterError::io(path, e))
}

/// Write all files for a variant.
pub fn write_variant(
    artifacts: &VariantArtifacts,
    roots: &OutputRoots,
) -> Result<WrittenPaths, RasterError> {
    if !roots.kernel_assets.is_dir() {
        return Err(RasterError::MissingAssetRoot(
            roots.kernel_assets.display().to_string(),
        ));
    }

    let name = &artifacts.variant.name;

    let atlas = roots.atlas_path(name);
    write_file(&atlas, &artifacts.packed)?;

    fs::create_dir_all(&roots.preview).map_err(|e| RasterError::io(&roots.preview, e))?;

    let preview = roots.preview_path(name);
    let png_data = write_rgb_to_vec(&artifacts.preview, &PngConfig::default())?;
    write_file(&preview, &png_data)?;

    let metadata = roots.metadata_path(name);
    let json = serde_json::to_vec_pretty(&artifacts.metadata)?;
    write_file(&metadata, &json)?;

    Ok(WrittenPaths {
        atlas,
        preview,
        metadata,
    })
}
