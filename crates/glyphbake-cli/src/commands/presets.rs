//! Presets command implementation
//!
//! Prints the geometry each built-in preset resolves to.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;

use glyphbake_spec::Preset;

use super::json_output::{PresetsOutput, VariantGeometry};

/// Run the presets command
pub fn run(json: bool) -> Result<ExitCode> {
    let presets: Vec<VariantGeometry> = Preset::ALL
        .iter()
        .map(|p| VariantGeometry::from(&p.resolve()))
        .collect();

    if json {
        let output = PresetsOutput { presets };
        let text = serde_json::to_string_pretty(&output).context("Failed to serialize output")?;
        println!("{}", text);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Font presets".cyan().bold());
    println!();
    for g in &presets {
        println!(
            "  {} {} ({})",
            "->".green(),
            g.name.bold(),
            g.preset.as_deref().unwrap_or("-")
        );
        println!(
            "     cell {}x{}  canvas {}x{}  size {}px  threshold {}  {} bytes",
            g.cell_size[0],
            g.cell_size[1],
            g.canvas_size[0],
            g.canvas_size[1],
            g.pixel_size,
            g.threshold,
            g.byte_len
        );
    }

    Ok(ExitCode::SUCCESS)
}
