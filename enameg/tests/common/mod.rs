//! Shared helpers for the `enameg` integration tests.

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// Directory holding the Go fixture packages.
pub fn fixtures_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path of a fixture relative to [`fixtures_dir`].
pub fn fixture_path(relative: &str) -> Utf8PathBuf {
    fixtures_dir().join(relative)
}

/// Copies fixtures into a fresh temporary directory.
///
/// Each entry is a path relative to [`fixtures_dir`]; it keeps its file name
/// and lands directly in the returned directory.
pub fn stage(relative_paths: &[&str]) -> (TempDir, Utf8PathBuf) {
    let tempdir = tempfile::tempdir().expect("create temp dir");
    let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
        .expect("tempdir path is UTF-8");
    for relative in relative_paths {
        let source = fixture_path(relative);
        let name = source.file_name().expect("fixture has a file name");
        std::fs::copy(&source, root.join(name)).expect("copy fixture");
    }
    (tempdir, root)
}

