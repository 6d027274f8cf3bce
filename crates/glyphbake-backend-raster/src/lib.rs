//! glyphbake Atlas Generation Backend
//!
//! This crate turns a vector font into the fixed-layout 1-bit atlas the kernel
//! console embeds at build time. All output is byte-identical given the same
//! font face and variant.
//!
//! # Pipeline
//!
//! - **Rasterize**: draw the 16x6 glyph grid white on black ([`rasterize`])
//! - **Pack**: threshold the red channel and pack rows MSB first ([`pack`])
//! - **Preview**: copy the canvas with red cell borders ([`preview`])
//! - **Write**: `.raw` into the kernel asset tree, `.png` and `.json` into the
//!   preview tree ([`output`])
//!
//! # Example
//!
//! ```no_run
//! use glyphbake_backend_raster::{generate_variant, write_variant, OutputRoots, TrueTypeFace};
//! use glyphbake_spec::Preset;
//! use std::path::Path;
//!
//! let body = Preset::Body.resolve();
//! let face = TrueTypeFace::load(Path::new("assets/font/JetBrainsMono.ttf")).unwrap();
//! let artifacts = generate_variant(&body, &face).unwrap();
//! assert_eq!(artifacts.packed.len(), body.packed_len());
//!
//! let roots = OutputRoots::new("pkg/kernel/assets", "assets/img");
//! write_variant(&artifacts, &roots).unwrap();
//! ```

pub mod atlas;
pub mod canvas;
pub mod error;
pub mod face;
pub mod generate;
pub mod output;
pub mod pack;
pub mod png;
pub mod preview;
pub mod rasterize;

// Re-export main types for convenience
pub use atlas::{AtlasView, GlyphBitmap};
pub use canvas::{Canvas, Rgb};
pub use error::RasterError;
pub use face::{GlyphFace, RasterGlyph, TrueTypeFace};
pub use generate::{generate_variant, VariantArtifacts};
pub use output::{write_variant, OutputRoots, WrittenPaths};
pub use pack::{pack_bitmap, pack_canvas, packed_len, threshold_bitmap, unpack, Bitmap};
pub use png::{PngConfig, PngError};
pub use preview::annotate_grid;
pub use rasterize::{baseline, render_grid};
