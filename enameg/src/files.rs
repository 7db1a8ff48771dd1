//! Input file set resolution.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::error::EnamegError;
use crate::fs_helpers::open_optional_dir;

const SOURCE_SUFFIX: &str = ".go";
const TEST_SUFFIX: &str = "_test.go";

/// The Go source files of one package, in sorted path order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    paths: Vec<Utf8PathBuf>,
}

impl FileSet {
    /// Resolves command-line arguments into a file set.
    ///
    /// A single argument naming a directory expands to the Go sources it
    /// directly contains, excluding tests. Anything else is taken as an
    /// explicit list of files belonging to one package.
    ///
    /// # Errors
    ///
    /// Returns `EnamegError::Io` when a single path argument cannot be
    /// opened or the directory cannot be listed.
    pub fn resolve(args: &[Utf8PathBuf]) -> Result<Self, EnamegError> {
        if let [single] = args {
            if let Some(dir) = open_optional_dir(single)? {
                let paths = list_go_files(&dir, single)?;
                debug!(dir = %single, count = paths.len(), "listed package sources");
                return Ok(Self::from_paths(paths));
            }
        }
        Ok(Self::from_paths(args.to_vec()))
    }

    /// Builds a file set from explicit paths.
    #[must_use]
    pub fn from_paths(mut paths: Vec<Utf8PathBuf>) -> Self {
        paths.sort();
        Self { paths }
    }

    /// Iterates over the paths in processing order.
    pub fn iter(&self) -> impl Iterator<Item = &Utf8Path> {
        self.paths.iter().map(Utf8PathBuf::as_path)
    }

    /// First path in processing order.
    #[must_use]
    pub fn first(&self) -> Option<&Utf8Path> {
        self.paths.first().map(Utf8PathBuf::as_path)
    }

    /// Number of files.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.paths.len()
    }

    /// Reports whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn list_go_files(dir: &Dir, base: &Utf8Path) -> Result<Vec<Utf8PathBuf>, EnamegError> {
    let io_err = |err| EnamegError::Io {
        path: base.to_path_buf(),
        source: err,
    };

    let mut paths = Vec::new();
    for entry_result in dir.entries().map_err(io_err)? {
        let entry = entry_result.map_err(io_err)?;
        let name = entry.file_name().map_err(io_err)?;
        let file_type = entry.file_type().map_err(io_err)?;
        if file_type.is_file() && is_package_source(&name) {
            paths.push(base.join(name));
        }
    }
    Ok(paths)
}

fn is_package_source(name: &str) -> bool {
    name.ends_with(SOURCE_SUFFIX) && !name.ends_with(TEST_SUFFIX)
}
