//! Filesystem helpers shared across `enameg` modules.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::error::EnamegError;

/// Opens `path` as a directory, returning `None` when it is missing or is
/// not a directory.
///
/// # Errors
///
/// Returns `EnamegError::Io` for any other failure to open `path`.
pub fn open_optional_dir(path: &Utf8Path) -> Result<Option<Dir>, EnamegError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(Some(dir)),
        Err(err)
            if matches!(
                err.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
            ) =>
        {
            Ok(None)
        }
        Err(err) => Err(EnamegError::Io {
            path: path.to_path_buf(),
            source: err,
        }),
    }
}

/// Opens the directory containing `path` and returns it with the file name.
///
/// # Errors
///
/// Returns `EnamegError::Io` when the parent directory cannot be opened or
/// `path` has no file name.
pub fn open_parent(path: &Utf8Path) -> Result<(Dir, &str), EnamegError> {
    let Some(name) = path.file_name() else {
        return Err(EnamegError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        });
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| EnamegError::Io {
        path: parent.to_path_buf(),
        source: err,
    })?;
    Ok((dir, name))
}

/// Reads a source file as UTF-8 text.
///
/// # Errors
///
/// Returns `EnamegError::Io` when the file cannot be opened or read.
pub fn read_source(path: &Utf8Path) -> Result<String, EnamegError> {
    let (dir, name) = open_parent(path)?;
    dir.read_to_string(name).map_err(|err| EnamegError::Io {
        path: path.to_path_buf(),
        source: err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::rstest;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let tempdir = tempfile::tempdir().expect("create temp dir");
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .expect("tempdir path is UTF-8");
        (tempdir, root)
    }

    #[rstest]
    fn reads_files_relative_to_their_parent() {
        let (_tempdir, root) = temp_root();
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).expect("open temp dir");
        dir.write("a.go", "package a\n").expect("write source");

        let source = read_source(&root.join("a.go")).expect("read source");
        assert_eq!(source, "package a\n");
    }

    #[rstest]
    fn missing_file_reports_its_path() {
        let (_tempdir, root) = temp_root();
        let missing = root.join("missing.go");
        let err = read_source(&missing).expect_err("read should fail");
        assert!(
            matches!(&err, EnamegError::Io { path, .. } if *path == missing),
            "unexpected error: {err:?}"
        );
    }

    #[rstest]
    fn regular_files_are_not_directories() {
        let (_tempdir, root) = temp_root();
        let dir = Dir::open_ambient_dir(&root, ambient_authority()).expect("open temp dir");
        dir.write("a.go", "package a\n").expect("write source");

        assert!(open_optional_dir(&root).expect("open root").is_some());
        assert!(open_optional_dir(&root.join("a.go")).expect("open file").is_none());
        assert!(open_optional_dir(&root.join("nope")).expect("open missing").is_none());
        assert!(
            open_optional_dir(&root.join("a.go/inner"))
                .expect("open below file")
                .is_none()
        );
    }

    #[rstest]
    fn unexpected_open_failures_are_reported() {
        let bad = Utf8PathBuf::from("bad\0dir");
        let err = open_optional_dir(&bad).expect_err("open should fail");
        assert!(
            matches!(&err, EnamegError::Io { path, .. } if *path == bad),
            "unexpected error: {err:?}"
        );
    }
}
