//! Asset writer tests: placement, directory rules, and determinism on disk.

mod common;

use std::fs;

use common::PatternFace;
use glyphbake_backend_raster::{generate_variant, write_variant, OutputRoots, RasterError};
use glyphbake_spec::{AtlasMetadata, BackendError, Preset};

fn roots_in(dir: &std::path::Path) -> OutputRoots {
    OutputRoots::new(dir.join("pkg/kernel/assets"), dir.join("assets/img"))
}

#[test]
fn test_writes_atlas_preview_and_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let roots = roots_in(dir.path());
    fs::create_dir_all(&roots.kernel_assets).unwrap();

    let cfg = Preset::Body.resolve();
    let artifacts = generate_variant(&cfg, &PatternFace).unwrap();
    let written = write_variant(&artifacts, &roots).unwrap();

    assert_eq!(written.atlas, roots.kernel_assets.join("JBMONO.raw"));
    assert_eq!(written.preview, roots.preview.join("JBMONO.png"));
    assert_eq!(written.metadata, roots.preview.join("JBMONO.json"));

    let raw = fs::read(&written.atlas).unwrap();
    assert_eq!(raw, artifacts.packed);
    assert_eq!(raw.len(), cfg.packed_len());

    let png = fs::read(&written.preview).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let meta: AtlasMetadata =
        serde_json::from_slice(&fs::read(&written.metadata).unwrap()).unwrap();
    assert_eq!(meta, artifacts.metadata);
    assert_eq!(meta.blake3, blake3::hash(&raw).to_hex().to_string());
    // round(25 * 0.8) with no vertical padding.
    assert_eq!(meta.baseline, 20);
}

#[test]
fn test_metadata_baseline_tracks_ascent_and_padding() {
    let dir = tempfile::tempdir().unwrap();
    let roots = roots_in(dir.path());
    fs::create_dir_all(&roots.kernel_assets).unwrap();

    let cfg = Preset::Title.resolve().with_padding(0, 3);
    let artifacts = generate_variant(&cfg, &PatternFace).unwrap();
    let written = write_variant(&artifacts, &roots).unwrap();

    let json: serde_json::Value =
        serde_json::from_slice(&fs::read(&written.metadata).unwrap()).unwrap();
    // round(46 * 0.8) = 37, plus 3 rows of padding.
    assert_eq!(json["baseline"], 40);
    assert_eq!(json["cell_size"], serde_json::json!([29, 56]));
}

#[test]
fn test_missing_kernel_asset_root_is_hard_failure() {
    let dir = tempfile::tempdir().unwrap();
    let roots = roots_in(dir.path());

    let artifacts = generate_variant(&Preset::Title.resolve(), &PatternFace).unwrap();
    let err = write_variant(&artifacts, &roots).unwrap_err();

    assert!(matches!(err, RasterError::MissingAssetRoot(_)));
    assert_eq!(err.category(), "io");
    assert!(!roots.kernel_assets.exists(), "kernel asset root must not be created");
    assert!(!roots.preview.exists(), "nothing is written after the failure");
}

#[test]
fn test_preview_root_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let roots = roots_in(dir.path());
    fs::create_dir_all(&roots.kernel_assets).unwrap();
    assert!(!roots.preview.exists());

    let artifacts = generate_variant(&Preset::Body.resolve(), &PatternFace).unwrap();
    write_variant(&artifacts, &roots).unwrap();
    assert!(roots.preview.is_dir());
}

#[test]
fn test_rerun_produces_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let roots = roots_in(dir.path());
    fs::create_dir_all(&roots.kernel_assets).unwrap();
    let cfg = Preset::Body.resolve();

    let first = write_variant(&generate_variant(&cfg, &PatternFace).unwrap(), &roots).unwrap();
    let raw1 = fs::read(&first.atlas).unwrap();
    let png1 = fs::read(&first.preview).unwrap();

    let second = write_variant(&generate_variant(&cfg, &PatternFace).unwrap(), &roots).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read(&second.atlas).unwrap(), raw1);
    assert_eq!(fs::read(&second.preview).unwrap(), png1);
}

#[test]
fn test_variants_do_not_share_paths() {
    let dir = tempfile::tempdir().unwrap();
    let roots = roots_in(dir.path());
    fs::create_dir_all(&roots.kernel_assets).unwrap();

    let mut atlases = Vec::new();
    for preset in Preset::ALL {
        let artifacts = generate_variant(&preset.resolve(), &PatternFace).unwrap();
        atlases.push(write_variant(&artifacts, &roots).unwrap().atlas);
    }
    assert_ne!(atlases[0], atlases[1]);
    assert_eq!(fs::read(&atlases[0]).unwrap().len(), 5400);
    assert_eq!(fs::read(&atlases[1]).unwrap().len(), 336 * 58);
}

#[test]
fn test_kernel_root_that_is_a_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let roots = roots_in(dir.path());
    fs::create_dir_all(roots.kernel_assets.parent().unwrap()).unwrap();
    fs::write(&roots.kernel_assets, b"not a dir").unwrap();

    let artifacts = generate_variant(&Preset::Body.resolve(), &PatternFace).unwrap();
    assert!(matches!(
        write_variant(&artifacts, &roots),
        Err(RasterError::MissingAssetRoot(_))
    ));
}
