//! Asset export: a direct byte-for-byte copy of an already-present asset
//! under a fixed target filename. No content transformation occurs.

use std::path::{Path, PathBuf};

/// Fixed target filename for the primary video export.
pub const VIDEO_EXPORT_NAME: &str = "simulation.mp4";
/// Fixed target filename for the Alembic export.
pub const ALEMBIC_EXPORT_NAME: &str = "simulation.abc";

/// Map an asset URL onto the configured asset root.
///
/// Message asset references use absolute-style URLs (`/videos/...`); the
/// leading slash anchors them at `asset_root`. The resulting path is not
/// checked for existence.
pub fn resolve_asset(asset_root: &Path, url: &str) -> PathBuf {
    asset_root.join(url.trim_start_matches('/'))
}

/// Copy an asset to the chosen destination. Returns the number of bytes
/// written.
pub fn export_asset(src: &Path, dest: &Path) -> Result<u64, String> {
    std::fs::copy(src, dest)
        .map_err(|e| format!("Failed to export {} to {}: {e}", src.display(), dest.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_asset_strips_leading_slash() {
        let p = resolve_asset(Path::new("assets"), "/videos/flood-simulation.mp4");
        assert_eq!(p, PathBuf::from("assets/videos/flood-simulation.mp4"));
    }

    #[test]
    fn test_resolve_asset_relative_url() {
        let p = resolve_asset(Path::new("/opt/physica"), "videos/x.mp4");
        assert_eq!(p, PathBuf::from("/opt/physica/videos/x.mp4"));
    }

    #[test]
    fn test_export_asset_copies_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("flood-simulation.mp4");
        let dest = dir.path().join(VIDEO_EXPORT_NAME);
        std::fs::write(&src, b"not really a video").unwrap();

        let written = export_asset(&src, &dest).unwrap();
        assert_eq!(written, 18);
        assert_eq!(std::fs::read(&dest).unwrap(), b"not really a video");
    }

    #[test]
    fn test_export_missing_asset_fails() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("missing.mp4");
        let dest = dir.path().join(VIDEO_EXPORT_NAME);

        let err = export_asset(&src, &dest).unwrap_err();
        assert!(err.contains("missing.mp4"));
    }
}
