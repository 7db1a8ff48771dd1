//! The generation pipeline: scan, collect, annotate, build, render.

use camino::Utf8Path;
use tracing::{debug, info};

use crate::annotate::annotated_types;
use crate::collect::ConstantIndex;
use crate::error::EnamegError;
use crate::files::FileSet;
use crate::format::{DEFAULT_FORMATTER, run_formatter};
use crate::fs_helpers::read_source;
use crate::model::{GeneratedUnit, build_cases};
use crate::render::render;
use crate::scan::GoParser;

/// Options controlling one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Pipe the rendered source through the formatter.
    pub should_format: bool,
    /// Emit `""` for constants without a trailing comment instead of
    /// omitting them.
    pub is_default_empty: bool,
    /// Formatter command used when `should_format` is set.
    pub formatter: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            should_format: true,
            is_default_empty: false,
            formatter: DEFAULT_FORMATTER.to_owned(),
        }
    }
}

/// Generated source for one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Package shared by the input files.
    pub package_name: String,
    /// Complete Go source of the generated file.
    pub source: String,
}

/// Generates `Name` methods for the annotated types in `files`.
///
/// Returns `Ok(None)` when there is nothing to write: no input files, no
/// annotated types, or no constants for any annotated type.
///
/// # Errors
///
/// Fails when the Go grammar cannot be loaded, on unreadable or malformed
/// files, on files from different packages, and on formatter failures.
pub fn generate(
    files: &FileSet,
    options: &GenerateOptions,
) -> Result<Option<GeneratedFile>, EnamegError> {
    let mut declared_package: Option<String> = None;
    let mut constants = ConstantIndex::default();
    let mut annotated = Vec::new();
    let mut parser = GoParser::new()?;

    for path in files.iter() {
        let source = read_source(path)?;
        let file = parser.parse(&source).map_err(|err| err.at(path))?;
        check_package(&mut declared_package, file.package, path)?;
        constants.collect_file(&file);
        annotated.extend(annotated_types(&file));
    }

    let Some(package_name) = declared_package else {
        debug!("no input files");
        return Ok(None);
    };
    debug!(
        package = %package_name,
        constants = constants.len(),
        annotated = annotated.len(),
        "scanned package"
    );

    let unit = GeneratedUnit {
        package_name,
        types: build_cases(&annotated, &constants, options.is_default_empty),
    };
    if unit.case_count() == 0 {
        info!(package = %unit.package_name, "nothing to generate");
        return Ok(None);
    }

    let rendered = render(&unit)?;
    let source = if options.should_format {
        run_formatter(&options.formatter, &rendered)?
    } else {
        rendered
    };

    Ok(Some(GeneratedFile {
        package_name: unit.package_name,
        source,
    }))
}

fn check_package(
    expected: &mut Option<String>,
    found: &str,
    path: &Utf8Path,
) -> Result<(), EnamegError> {
    match expected {
        None => {
            *expected = Some(found.to_owned());
            Ok(())
        }
        Some(name) if name == found => Ok(()),
        Some(name) => Err(EnamegError::MultiplePackages {
            expected: name.clone(),
            found: found.to_owned(),
            path: path.to_path_buf(),
        }),
    }
}
