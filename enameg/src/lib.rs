//! Library interface for `enameg`.
//!
//! `enameg` reads the Go source files of one package, finds type
//! declarations marked with a `// +enameg` comment, and generates a
//! `Name() string` method for each of them. Every constant of a marked type
//! becomes a `case` returning the first word of the constant's trailing
//! comment.

pub mod annotate;
pub mod cli;
pub mod collect;
pub mod error;
pub mod escape;
pub mod files;
pub mod format;
pub mod fs_helpers;
pub mod generate;
pub mod model;
pub mod output;
pub mod render;
pub mod scan;

pub use error::EnamegError;
pub use files::FileSet;
pub use generate::{GenerateOptions, GeneratedFile, generate};
