//! Error types for `enameg`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced by the `enameg` pipeline.
#[derive(Debug, Error)]
pub enum EnamegError {
    /// Reading, listing, or writing a path failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// A Go source file could not be scanned.
    #[error("{path}:{line}: {message}")]
    Syntax {
        /// Offending file.
        path: Utf8PathBuf,
        /// One-based line of the failure.
        line: u32,
        /// Description of the failure.
        message: String,
    },

    /// Input files declare different packages.
    #[error("multiple packages: {path} declares '{found}', expected '{expected}'")]
    MultiplePackages {
        /// Package declared by the first file.
        expected: String,
        /// Package declared by `path`.
        found: String,
        /// File declaring the second package.
        path: Utf8PathBuf,
    },

    /// The formatter process could not be started or fed.
    #[error("failed to run formatter '{command}': {source}")]
    FormatterIo {
        /// Formatter command.
        command: String,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The formatter exited unsuccessfully.
    #[error("formatter '{command}' failed (status {status}): {message}")]
    FormatterFailure {
        /// Formatter command.
        command: String,
        /// Exit status, or -1 when terminated by a signal.
        status: i32,
        /// Captured standard error.
        message: String,
    },

    /// The Go grammar could not be loaded into the parser.
    #[error("failed to load the Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// Writing the generated source into memory failed.
    #[error("failed to render generated source")]
    Render(#[from] std::fmt::Error),
}
