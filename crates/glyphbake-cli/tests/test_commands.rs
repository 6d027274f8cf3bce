//! Command-level tests that do not need a font on disk.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use glyphbake_backend_raster::{generate_variant, GlyphFace, RasterError, RasterGlyph};
use glyphbake_cli::commands::generate::{self, GenerateOptions};
use glyphbake_cli::commands::{inspect, presets};
use glyphbake_spec::Preset;

/// Every glyph is a solid 4x6 block.
struct BlockFace;

impl GlyphFace for BlockFace {
    fn ascent(&self, _px: f32) -> f32 {
        12.0
    }

    fn rasterize(&self, ch: char, _px: f32) -> RasterGlyph {
        if ch == ' ' {
            return RasterGlyph::empty();
        }
        RasterGlyph {
            xmin: 2,
            ymin: 0,
            width: 4,
            height: 6,
            coverage: vec![255; 24],
        }
    }
}

fn block_loader(_path: &Path) -> Result<Box<dyn GlyphFace>, RasterError> {
    Ok(Box::new(BlockFace))
}

fn options_in(dir: &Path, json: bool) -> GenerateOptions {
    GenerateOptions {
        font_dir: Some(dir.join("fonts").display().to_string()),
        kernel_assets: Some(dir.join("kernel").display().to_string()),
        preview_dir: Some(dir.join("img").display().to_string()),
        json,
        ..Default::default()
    }
}

fn read_outputs(dir: &Path) -> Vec<(String, Vec<u8>)> {
    ["kernel/JBMONO.raw", "kernel/JBMONO_TITLE.raw"]
        .into_iter()
        .map(String::from)
        .chain(["JBMONO", "JBMONO_TITLE"].into_iter().flat_map(|name| {
            ["png", "json"]
                .into_iter()
                .map(move |ext| format!("img/{}.{}", name, ext))
        }))
        .map(|rel| {
            let bytes = fs::read(dir.join(&rel)).unwrap();
            (rel, bytes)
        })
        .collect()
}

#[test]
fn test_generate_writes_every_preset_and_reruns_identically() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("kernel")).unwrap();
    let opts = options_in(dir.path(), false);

    let code = generate::run_with_loader(&opts, &block_loader).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    let first = read_outputs(dir.path());
    assert_eq!(first[0].1.len(), 5400);
    assert_eq!(first[1].1.len(), 336 * 58);
    assert!(first[0].1.iter().any(|&b| b != 0));

    let code = generate::run_with_loader(&opts, &block_loader).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert_eq!(read_outputs(dir.path()), first);
}

#[test]
fn test_generate_json_success_matches_backend_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("kernel")).unwrap();
    let opts = GenerateOptions {
        presets: vec!["body".into()],
        ..options_in(dir.path(), true)
    };

    let code = generate::run_with_loader(&opts, &block_loader).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let expected = generate_variant(&Preset::Body.resolve(), &BlockFace).unwrap();
    let raw = fs::read(dir.path().join("kernel/JBMONO.raw")).unwrap();
    assert_eq!(raw, expected.packed);
    assert!(!dir.path().join("kernel/JBMONO_TITLE.raw").exists());

    let meta: serde_json::Value =
        serde_json::from_slice(&fs::read(dir.path().join("img/JBMONO.json")).unwrap()).unwrap();
    assert_eq!(meta["blake3"], expected.hash());
    assert_eq!(meta["baseline"], 12);
}

#[test]
fn test_generate_loader_sees_font_dir_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("kernel")).unwrap();
    let opts = GenerateOptions {
        presets: vec!["title".into()],
        ..options_in(dir.path(), true)
    };
    let font_dir = dir.path().join("fonts");
    let loader = move |path: &Path| -> Result<Box<dyn GlyphFace>, RasterError> {
        assert_eq!(path, font_dir.join("JetBrainsMono.ttf"));
        Ok(Box::new(BlockFace))
    };

    let code = generate::run_with_loader(&opts, &loader).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}

#[test]
fn test_presets_command_succeeds() {
    assert_eq!(presets::run(false).unwrap(), ExitCode::SUCCESS);
    assert_eq!(presets::run(true).unwrap(), ExitCode::SUCCESS);
}

#[test]
fn test_inspect_reads_generated_atlas() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Preset::Body.resolve();
    let artifacts = generate_variant(&cfg, &BlockFace).unwrap();
    let path = dir.path().join("JBMONO.raw");
    fs::write(&path, &artifacts.packed).unwrap();

    let code = inspect::run("body", path.to_str().unwrap(), "A?\u{7}").unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
}

#[test]
fn test_inspect_rejects_mismatched_preset() {
    let dir = tempfile::tempdir().unwrap();
    let artifacts = generate_variant(&Preset::Body.resolve(), &BlockFace).unwrap();
    let path = dir.path().join("JBMONO.raw");
    fs::write(&path, &artifacts.packed).unwrap();

    let err = inspect::run("title", path.to_str().unwrap(), "A").unwrap_err();
    assert!(format!("{:#}", err).contains("does not match preset title"));
}

#[test]
fn test_inspect_unknown_preset() {
    let err = inspect::run("caption", "missing.raw", "A").unwrap_err();
    assert!(err.to_string().contains("caption"));
}

#[test]
fn test_generate_json_reports_missing_font() {
    let dir = tempfile::tempdir().unwrap();
    let kernel = dir.path().join("kernel");
    fs::create_dir_all(&kernel).unwrap();

    let opts = GenerateOptions {
        presets: vec!["body".into()],
        font_dir: Some(dir.path().join("no-fonts").display().to_string()),
        kernel_assets: Some(kernel.display().to_string()),
        preview_dir: Some(dir.path().join("img").display().to_string()),
        json: true,
        ..Default::default()
    };
    assert_eq!(generate::run(&opts).unwrap(), ExitCode::from(1));
    assert!(fs::read_dir(&kernel).unwrap().next().is_none());
}

#[test]
fn test_generate_human_fails_on_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("glyphbake.json");
    fs::write(&config, r#"{ "variants": [ { "preset": "body", "bogus": 1 } ] }"#).unwrap();

    let opts = GenerateOptions {
        config: Some(config.display().to_string()),
        ..Default::default()
    };
    let err = generate::run(&opts).unwrap_err();
    assert!(format!("{:#}", err).contains("glyphbake.json"));
}
