//! Typed constant collection.

use std::collections::HashMap;

use tracing::trace;

use crate::model::ConstantDeclaration;
use crate::scan::{DeclKind, SourceFile, TypeRef};

/// Constants grouped by their declared type name, in encounter order.
#[derive(Debug, Default)]
pub struct ConstantIndex {
    by_type: HashMap<String, Vec<ConstantDeclaration>>,
}

impl ConstantIndex {
    /// Records every explicitly typed constant spec of `file`.
    ///
    /// Only specs whose type is a single unqualified identifier qualify;
    /// untyped specs and implicit `iota` repetitions are skipped, as are
    /// blank (`_`) constants.
    pub fn collect_file(&mut self, file: &SourceFile<'_>) {
        let specs = file.decls.iter().filter_map(|decl| match &decl.kind {
            DeclKind::Const(specs) => Some(specs),
            _ => None,
        });
        for spec in specs.flatten() {
            let Some(TypeRef::Ident(type_name)) = spec.ty else {
                continue;
            };
            let Some(name) = spec.names.first().filter(|name| **name != "_") else {
                continue;
            };
            trace!(constant = name, type_name, line = spec.line, "collected constant");
            self.by_type
                .entry(type_name.to_owned())
                .or_default()
                .push(ConstantDeclaration {
                    type_name: type_name.to_owned(),
                    name: (*name).to_owned(),
                    trailing_comment: spec.comment.map(str::to_owned),
                    line: spec.line,
                });
        }
    }

    /// Constants declared with type `type_name`, in encounter order.
    #[must_use]
    pub fn constants_of(&self, type_name: &str) -> &[ConstantDeclaration] {
        self.by_type
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of collected constants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    /// Reports whether no constants were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}
