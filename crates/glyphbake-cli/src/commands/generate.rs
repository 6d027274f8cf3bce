//! Generate command implementation
//!
//! Builds the packed atlas, preview image, and metadata sidecar for each
//! requested variant, one variant at a time. The first failure stops the run.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use glyphbake_backend_raster::{
    generate_variant, write_variant, GlyphFace, OutputRoots, RasterError, TrueTypeFace,
};
use glyphbake_spec::{FontVariantConfig, GeneratorConfig, Preset};

use super::json_output::{GenerateOutput, GeneratedVariant, JsonError, VariantGeometry};

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Preset names to generate (empty = every variant in the config)
    pub presets: Vec<String>,
    /// Path to a JSON config file
    pub config: Option<String>,
    /// Font directory override
    pub font_dir: Option<String>,
    /// Kernel asset directory override
    pub kernel_assets: Option<String>,
    /// Preview directory override
    pub preview_dir: Option<String>,
    /// Output machine-readable JSON
    pub json: bool,
}

/// Opens the font face a variant is rasterized from.
pub type FaceLoader = dyn Fn(&Path) -> Result<Box<dyn GlyphFace>, RasterError>;

/// Load a TrueType/OpenType face from disk.
pub fn load_truetype(path: &Path) -> Result<Box<dyn GlyphFace>, RasterError> {
    Ok(Box::new(TrueTypeFace::load(path)?))
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 if every variant was written, 1 otherwise
pub fn run(opts: &GenerateOptions) -> Result<ExitCode> {
    run_with_loader(opts, &load_truetype)
}

/// Run the generate command, opening font faces with `loader`.
pub fn run_with_loader(opts: &GenerateOptions, loader: &FaceLoader) -> Result<ExitCode> {
    if opts.json {
        run_json(opts, loader)
    } else {
        run_human(opts, loader)
    }
}

/// Resolve the effective config: file (or built-in defaults), then flags.
pub fn build_config(opts: &GenerateOptions) -> Result<GeneratorConfig, RasterError> {
    let mut config = match &opts.config {
        Some(path) => GeneratorConfig::load(Path::new(path))?,
        None => GeneratorConfig::default(),
    };

    if let Some(dir) = &opts.font_dir {
        config.font_dir = PathBuf::from(dir);
    }
    if let Some(dir) = &opts.kernel_assets {
        config.kernel_assets = PathBuf::from(dir);
    }
    if let Some(dir) = &opts.preview_dir {
        config.preview_dir = PathBuf::from(dir);
    }

    let presets = opts
        .presets
        .iter()
        .map(|p| p.parse::<Preset>())
        .collect::<Result<Vec<_>, _>>()?;
    config.select(&presets);

    Ok(config)
}

/// Generate and write a single variant.
pub fn generate_one(
    config: &GeneratorConfig,
    variant: &FontVariantConfig,
    loader: &FaceLoader,
) -> Result<GeneratedVariant, RasterError> {
    let start = Instant::now();

    let face = loader(&config.font_path(variant))?;
    let artifacts = generate_variant(variant, face.as_ref())?;

    let roots = OutputRoots::new(&config.kernel_assets, &config.preview_dir);
    let written = write_variant(&artifacts, &roots)?;

    Ok(GeneratedVariant {
        geometry: VariantGeometry::from(variant),
        atlas: written.atlas.display().to_string(),
        preview: written.preview.display().to_string(),
        metadata: written.metadata.display().to_string(),
        blake3: artifacts.hash().to_string(),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

fn run_human(opts: &GenerateOptions, loader: &FaceLoader) -> Result<ExitCode> {
    let start = Instant::now();

    let config = build_config(opts).context("Failed to resolve generator config")?;
    let variants = config
        .resolve_variants()
        .context("Failed to resolve font variants")?;

    println!("{}", "Generating font atlases".cyan().bold());
    println!("  {} {}", "fonts:".dimmed(), config.font_dir.display());
    println!("  {} {}", "kernel:".dimmed(), config.kernel_assets.display());
    println!("  {} {}", "preview:".dimmed(), config.preview_dir.display());
    println!();

    for variant in &variants {
        let generated = generate_one(&config, variant, loader)
            .with_context(|| format!("Failed to generate variant {}", variant.name))?;

        println!(
            "  {} {} {} bytes",
            "->".green(),
            variant,
            generated.geometry.byte_len
        );
        println!("     {} {}", "atlas".dimmed(), generated.atlas);
        println!("     {} {}", "preview".dimmed(), generated.preview);
        println!("     {} {}", "blake3".dimmed(), generated.blake3);
    }

    println!();
    println!(
        "{} {} variant(s) in {}ms",
        "ok".green().bold(),
        variants.len(),
        start.elapsed().as_millis()
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(opts: &GenerateOptions, loader: &FaceLoader) -> Result<ExitCode> {
    let mut output = GenerateOutput {
        success: true,
        variants: Vec::new(),
        errors: Vec::new(),
    };

    let resolved = build_config(opts).and_then(|config| {
        let variants = config.resolve_variants()?;
        Ok((config, variants))
    });

    match resolved {
        Ok((config, variants)) => {
            for variant in &variants {
                match generate_one(&config, variant, loader) {
                    Ok(generated) => output.variants.push(generated),
                    Err(e) => {
                        output.success = false;
                        output
                            .errors
                            .push(JsonError::from_backend(&e, Some(&variant.name)));
                        break;
                    }
                }
            }
        }
        Err(e) => {
            output.success = false;
            output.errors.push(JsonError::from_backend(&e, None));
        }
    }

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
