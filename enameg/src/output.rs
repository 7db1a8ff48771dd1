//! Output path selection and writing for `enameg`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::OpenOptions;
use std::io::Write;
use tracing::info;

use crate::error::EnamegError;
use crate::files::FileSet;
use crate::fs_helpers::open_parent;

/// Suffix inserted before the extension of generated files.
pub const OUTPUT_SUFFIX: &str = "_ename";

/// Chooses where generated code goes when no output path was given.
///
/// A single input `dir/name.go` yields `dir/name_ename.go`; several inputs
/// yield `<dir of first file>/<package>_ename.go`.
#[must_use]
pub fn default_output_path(files: &FileSet, package_name: &str) -> Utf8PathBuf {
    match (files.len(), files.first()) {
        (1, Some(single)) => sibling_path(single),
        (_, first) => {
            let dir = first.and_then(Utf8Path::parent).unwrap_or_else(|| Utf8Path::new(""));
            dir.join(format!("{package_name}{OUTPUT_SUFFIX}.go"))
        }
    }
}

fn sibling_path(path: &Utf8Path) -> Utf8PathBuf {
    let file_name = match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => format!("{stem}{OUTPUT_SUFFIX}.{ext}"),
        (Some(stem), None) => format!("{stem}{OUTPUT_SUFFIX}.go"),
        (None, _) => format!("{OUTPUT_SUFFIX}.go"),
    };
    path.with_file_name(file_name)
}

/// Writes the generated source, replacing any previous contents.
///
/// # Errors
///
/// Returns `EnamegError::Io` if the directory cannot be opened or the file
/// cannot be written.
pub fn write_generated(path: &Utf8Path, source: &str) -> Result<(), EnamegError> {
    let (dir, name) = open_parent(path)?;
    let mut file = dir
        .open_with(
            name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| EnamegError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;

    file.write_all(source.as_bytes())
        .map_err(|io_err| EnamegError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;

    info!(path = %path, "wrote generated source");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn file_set(paths: &[&str]) -> FileSet {
        FileSet::from_paths(paths.iter().map(|p| Utf8PathBuf::from(*p)).collect())
    }

    #[rstest]
    #[case(&["./testdata/simple.go"], "pkg", "./testdata/simple_ename.go")]
    #[case(&["enum.go"], "pkg", "enum_ename.go")]
    #[case(&["dir/enum.v2.go"], "pkg", "dir/enum.v2_ename.go")]
    #[case(&["dir/noext"], "pkg", "dir/noext_ename.go")]
    #[case(&["b/x.go", "a/y.go"], "pkg", "a/pkg_ename.go")]
    #[case(&["x.go", "y.go"], "pkg", "pkg_ename.go")]
    fn derives_output_paths(
        #[case] inputs: &[&str],
        #[case] package_name: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(
            default_output_path(&file_set(inputs), package_name),
            Utf8PathBuf::from(expected)
        );
    }

    #[rstest]
    fn overwrites_existing_output() {
        let tempdir = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .expect("tempdir path is UTF-8");
        let path = root.join("out_ename.go");

        write_generated(&path, "package first\n// long previous contents\n").expect("first write");
        write_generated(&path, "package second\n").expect("second write");

        let written = std::fs::read_to_string(&path).expect("read output");
        assert_eq!(written, "package second\n");
    }
}
