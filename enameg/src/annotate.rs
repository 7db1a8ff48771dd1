//! Marker comment detection on type declarations.

use tracing::debug;

use crate::model::AnnotatedType;
use crate::scan::{CommentGroup, DeclKind, SourceFile, TypeForm, attached_groups};

/// Comment text flagging a type for generation.
pub const MARKER: &str = "+enameg";

/// Returns the annotated types of `file` in declaration order.
///
/// A declaration counts once however many marker comments it carries. Type
/// groups whose first spec is not a plain named-type definition are skipped.
#[must_use]
pub fn annotated_types(file: &SourceFile<'_>) -> Vec<AnnotatedType> {
    file.decls
        .iter()
        .zip(attached_groups(file))
        .filter(|(_, groups)| groups.iter().any(|group| has_marker(group)))
        .filter_map(|(decl, _)| {
            let DeclKind::Type(specs) = &decl.kind else {
                return None;
            };
            let spec = specs.first()?;
            match spec.form {
                TypeForm::Named(_) => {
                    debug!(type_name = spec.name, line = decl.span.line, "found annotated type");
                    Some(AnnotatedType {
                        name: spec.name.to_owned(),
                    })
                }
                TypeForm::Alias | TypeForm::Composite => None,
            }
        })
        .collect()
}

/// Reports whether any comment of `group` starts with the marker.
#[must_use]
pub fn has_marker(group: &CommentGroup<'_>) -> bool {
    group
        .comments
        .iter()
        .any(|comment| comment.text.trim_start_matches('/').trim().starts_with(MARKER))
}
