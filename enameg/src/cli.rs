//! Command-line interface definitions for `enameg`.

use camino::Utf8PathBuf;
use clap::Parser;

use crate::format::DEFAULT_FORMATTER;
use crate::generate::GenerateOptions;

/// Parsed CLI arguments for `enameg`.
#[derive(Debug, Parser)]
#[command(name = "enameg")]
#[command(about = "Generate Name() methods for Go constant types marked with +enameg")]
#[command(version)]
#[command(override_usage = "enameg [OPTIONS] [DIRECTORY]\n       \
                            enameg [OPTIONS] <FILES>...   # must be a single package")]
pub struct Args {
    /// Package directory, or the Go files of a single package.
    #[arg(value_name = "PATH")]
    pub paths: Vec<Utf8PathBuf>,
    /// Output file name; defaults to `<dir>/<file>_ename.go`.
    #[arg(short, long, value_name = "path")]
    pub output: Option<Utf8PathBuf>,
    /// Write the generated source without running the formatter.
    #[arg(long = "nofmt")]
    pub should_skip_format: bool,
    /// Return "" for constants without a comment instead of omitting them.
    #[arg(long = "default-empty")]
    pub is_default_empty: bool,
    /// Formatter command applied to the generated source.
    #[arg(
        long = "gofmt",
        env = "ENAMEG_GOFMT",
        value_name = "command",
        default_value = DEFAULT_FORMATTER
    )]
    pub formatter: String,
}

impl Args {
    /// Returns the generation options selected on the command line.
    #[must_use]
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            should_format: !self.should_skip_format,
            is_default_empty: self.is_default_empty,
            formatter: self.formatter.clone(),
        }
    }
}
