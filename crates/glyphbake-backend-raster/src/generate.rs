//! One-variant atlas pipeline: rasterize, pack, annotate.

use glyphbake_spec::{AtlasMetadata, FontVariantConfig, GlyphGrid};

use crate::canvas::Canvas;
use crate::error::RasterError;
use crate::face::GlyphFace;
use crate::pack::pack_canvas;
use crate::png::hash_bytes;
use crate::preview::annotate_grid;
use crate::rasterize::{baseline, render_grid};

/// Everything produced for one variant, before anything touches disk.
#[derive(Debug, Clone)]
pub struct VariantArtifacts {
    /// Variant the artifacts were built from.
    pub variant: FontVariantConfig,
    /// Rendered glyph grid.
    pub canvas: Canvas,
    /// Packed 1bpp atlas.
    pub packed: Vec<u8>,
    /// Canvas with cell borders drawn in.
    pub preview: Canvas,
    /// Sidecar description of the atlas.
    pub metadata: AtlasMetadata,
}

impl VariantArtifacts {
    /// BLAKE3 hash of the packed atlas.
    pub fn hash(&self) -> &str {
        &self.metadata.blake3
    }
}

/// Build the atlas for one variant.
///
/// Fails if the variant geometry is invalid or the grid does not hold exactly
/// the printable table plus the fallback glyph.
pub fn generate_variant(
    cfg: &FontVariantConfig,
    face: &dyn GlyphFace,
) -> Result<VariantArtifacts, RasterError> {
    cfg.validate()?;
    let grid = GlyphGrid::ascii()?;

    let canvas = render_grid(cfg, &grid, face);
    let packed = pack_canvas(&canvas, cfg.threshold);
    if packed.len() != cfg.packed_len() {
        return Err(RasterError::PackedLength {
            expected: cfg.packed_len(),
            actual: packed.len(),
            width: canvas.width,
            height: canvas.height,
        });
    }

    let preview = annotate_grid(&canvas, cfg.cell_width, cfg.cell_height);
    let metadata = AtlasMetadata::new(cfg, &grid, baseline(cfg, face), hash_bytes(&packed));

    Ok(VariantArtifacts {
        variant: cfg.clone(),
        canvas,
        packed,
        preview,
        metadata,
    })
}
