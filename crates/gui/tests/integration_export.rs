//! Integration tests for asset resolution and export.

use std::path::Path;

use physica_gui_lib::export::{
    export_asset, resolve_asset, ALEMBIC_EXPORT_NAME, VIDEO_EXPORT_NAME,
};
use physica_gui_lib::responder::FLOOD_SIMULATION_VIDEO;

#[test]
fn test_fixed_export_names() {
    assert_eq!(VIDEO_EXPORT_NAME, "simulation.mp4");
    assert_eq!(ALEMBIC_EXPORT_NAME, "simulation.abc");
}

#[test]
fn test_flood_video_resolves_under_asset_root() {
    let p = resolve_asset(Path::new("assets"), FLOOD_SIMULATION_VIDEO);
    assert_eq!(p, Path::new("assets/videos/flood-simulation.mp4"));
}

#[test]
fn test_export_is_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("assets");
    std::fs::create_dir_all(root.join("videos")).unwrap();

    let src = resolve_asset(&root, FLOOD_SIMULATION_VIDEO);
    let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    std::fs::write(&src, &payload).unwrap();

    let dest = dir.path().join(VIDEO_EXPORT_NAME);
    let written = export_asset(&src, &dest).unwrap();

    assert_eq!(written as usize, payload.len());
    assert_eq!(std::fs::read(&dest).unwrap(), payload);
    // the source is untouched
    assert_eq!(std::fs::read(&src).unwrap(), payload);
}

#[test]
fn test_export_overwrites_existing_destination() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("a.mp4");
    let dest = dir.path().join(VIDEO_EXPORT_NAME);
    std::fs::write(&src, b"new bytes").unwrap();
    std::fs::write(&dest, b"old").unwrap();

    export_asset(&src, &dest).unwrap();
    assert_eq!(std::fs::read(&dest).unwrap(), b"new bytes");
}

#[test]
fn test_export_missing_source_reports_paths() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("gone.mp4");
    let dest = dir.path().join(VIDEO_EXPORT_NAME);

    let err = export_asset(&src, &dest).unwrap_err();
    assert!(err.contains("gone.mp4"));
    assert!(err.contains(VIDEO_EXPORT_NAME));
}
