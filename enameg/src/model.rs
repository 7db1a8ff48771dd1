//! Generation model: collected constants, annotated types, and the cases
//! each generated method switches over.

use tracing::debug;

use crate::collect::ConstantIndex;
use crate::escape::escape_string;

/// Delimiters that end a display string.
const DELIMITERS: [char; 2] = ['.', '。'];

/// A typed constant found in the input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDeclaration {
    /// Declared type of the constant.
    pub type_name: String,
    /// Constant identifier.
    pub name: String,
    /// Raw trailing line comment, markers included.
    pub trailing_comment: Option<String>,
    /// Source line, for diagnostics.
    pub line: u32,
}

/// A type declaration carrying the generation marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedType {
    /// Declared type name.
    pub name: String,
}

/// One `case` of a generated switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseEntry {
    /// Constant matched by the case.
    pub constant_name: String,
    /// Escaped text returned by the case.
    pub display_string: String,
}

/// Cases generated for one annotated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCases {
    /// Annotated type name.
    pub type_name: String,
    /// Cases in constant encounter order.
    pub cases: Vec<CaseEntry>,
}

/// Everything rendered into one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Package shared by every input file.
    pub package_name: String,
    /// Annotated types in encounter order.
    pub types: Vec<TypeCases>,
}

impl GeneratedUnit {
    /// Total number of cases across all types.
    #[must_use]
    pub fn case_count(&self) -> usize {
        self.types.iter().map(|t| t.cases.len()).sum()
    }
}

/// Joins annotated types with their constants.
///
/// Constants without a trailing comment are dropped unless
/// `is_default_empty` is set, in which case they map to an empty string.
#[must_use]
pub fn build_cases(
    annotated: &[AnnotatedType],
    constants: &ConstantIndex,
    is_default_empty: bool,
) -> Vec<TypeCases> {
    annotated
        .iter()
        .map(|annotated_type| {
            let cases: Vec<_> = constants
                .constants_of(&annotated_type.name)
                .iter()
                .filter_map(|constant| case_for(constant, is_default_empty))
                .collect();
            debug!(
                type_name = %annotated_type.name,
                cases = cases.len(),
                "built cases"
            );
            TypeCases {
                type_name: annotated_type.name.clone(),
                cases,
            }
        })
        .collect()
}

fn case_for(constant: &ConstantDeclaration, is_default_empty: bool) -> Option<CaseEntry> {
    let display_string = match constant.trailing_comment.as_deref() {
        Some(comment) => display_string(comment),
        None if is_default_empty => String::new(),
        None => return None,
    };
    Some(CaseEntry {
        constant_name: constant.name.clone(),
        display_string,
    })
}

/// Derives the escaped display string from a raw trailing comment.
///
/// Takes the first word of the comment text, cuts it at the first `.` or
/// `。`, and escapes it for a Go string literal.
///
/// # Examples
///
/// ```
/// use enameg::model::display_string;
///
/// assert_eq!(display_string("// A. more text"), "A");
/// assert_eq!(display_string("//Ready to go"), "Ready");
/// assert_eq!(display_string("// 有効。説明"), "有効");
/// ```
#[must_use]
pub fn display_string(comment: &str) -> String {
    let text = comment.trim_start_matches('/').trim();
    let word = text.split_whitespace().next().unwrap_or_default();
    let label = word.split(DELIMITERS).next().unwrap_or_default();
    escape_string(label)
}
