//! glyphbake CLI - packed bitmap font atlases for the kernel console
//!
//! Rasterizes a vector font into the 1-bit atlases the kernel embeds, writes
//! a bordered preview image per variant, and decodes atlases for inspection.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use glyphbake_cli::commands;
use glyphbake_cli::commands::generate::GenerateOptions;

/// glyphbake - kernel console font atlas generator
#[derive(Parser)]
#[command(name = "glyphbake")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate packed atlases and preview images
    Generate {
        /// Preset to generate (repeatable; default: every configured variant)
        #[arg(short, long = "preset")]
        presets: Vec<String>,

        /// Path to a JSON generator config
        #[arg(short, long)]
        config: Option<String>,

        /// Directory holding the source font faces
        #[arg(long)]
        font_dir: Option<String>,

        /// Kernel embedded-asset directory (must exist)
        #[arg(long)]
        kernel_assets: Option<String>,

        /// Preview image directory (created if missing)
        #[arg(long)]
        preview_dir: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in presets and their geometry
    Presets {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print glyphs decoded from a packed atlas
    Inspect {
        /// Preset the atlas was generated with
        #[arg(short, long)]
        preset: String,

        /// Path to the packed .raw atlas
        #[arg(short, long)]
        atlas: String,

        /// Characters to print
        #[arg(long, default_value = "A")]
        chars: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            presets,
            config,
            font_dir,
            kernel_assets,
            preview_dir,
            json,
        } => commands::generate::run(&GenerateOptions {
            presets,
            config,
            font_dir,
            kernel_assets,
            preview_dir,
            json,
        }),
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Inspect {
            preset,
            atlas,
            chars,
        } => commands::inspect::run(&preset, &atlas, &chars),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
