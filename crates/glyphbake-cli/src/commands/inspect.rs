//! Inspect command implementation
//!
//! Decodes glyphs from a packed atlas and prints them as text, using the same
//! lookup the kernel console does.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use glyphbake_backend_raster::AtlasView;
use glyphbake_spec::resolve_preset;

/// Run the inspect command
///
/// # Arguments
/// * `preset` - Preset whose geometry the atlas was built with
/// * `atlas_path` - Path to the `.raw` atlas
/// * `chars` - Characters to print
pub fn run(preset: &str, atlas_path: &str, chars: &str) -> Result<ExitCode> {
    let variant = resolve_preset(preset)?;
    let bytes = std::fs::read(Path::new(atlas_path))
        .with_context(|| format!("Failed to read atlas: {}", atlas_path))?;
    let view = AtlasView::new(&bytes, &variant)
        .with_context(|| format!("{} does not match preset {}", atlas_path, preset))?;

    println!("{} {}", "Inspecting:".cyan().bold(), atlas_path);
    println!("{} {}", "Variant:".dimmed(), variant);

    for ch in chars.chars() {
        let glyph = view.glyph(ch as u32);
        println!();
        println!(
            "{} {:?} (U+{:04X}) -> col {}, row {}",
            "glyph".bold(),
            ch,
            ch as u32,
            glyph.cell.col,
            glyph.cell.row
        );
        print!("{}", glyph.to_ascii_art());
    }

    Ok(ExitCode::SUCCESS)
}
