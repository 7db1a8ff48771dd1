//! Extraction of top-level declarations from a `tree-sitter-go` syntax tree.

use tree_sitter::Node;

use super::comments::top_level_groups;
use super::{
    Comment, Decl, DeclKind, SourceFile, Span, SyntaxError, TypeForm, TypeRef, TypeSpec,
    ValueSpec,
};

/// Builds a [`SourceFile`] from the root node of a parsed file.
pub(super) fn source_file<'src>(
    root: Node<'_>,
    src: &'src str,
) -> Result<SourceFile<'src>, SyntaxError> {
    if root.has_error() {
        return Err(first_error(root, src)
            .unwrap_or_else(|| SyntaxError::new(line(root), "syntax error")));
    }

    let mut comments = Vec::new();
    collect_comments(root, src, &mut comments);

    let mut package = None;
    let mut decls = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        let kind = match child.kind() {
            "comment" => continue,
            "package_clause" if package.is_none() => {
                package = Some(package_clause(child, src)?);
                continue;
            }
            _ if package.is_none() => {
                return Err(SyntaxError::new(
                    line(child),
                    format!("expected 'package', found {}", first_word(child, src)),
                ));
            }
            "const_declaration" => DeclKind::Const(const_specs(child, src, &comments)),
            "type_declaration" => DeclKind::Type(type_specs(child, src)),
            "import_declaration" => DeclKind::Import,
            "var_declaration" => DeclKind::Var,
            "function_declaration" | "method_declaration" => DeclKind::Func,
            _ => {
                return Err(SyntaxError::new(
                    line(child),
                    format!(
                        "non-declaration statement outside function body: {}",
                        first_word(child, src)
                    ),
                ));
            }
        };
        decls.push(Decl {
            kind,
            span: span(child),
        });
    }

    let Some((name, package_span)) = package else {
        return Err(SyntaxError::new(
            end_line(root),
            "expected 'package', found end of file",
        ));
    };
    let groups = top_level_groups(&comments, package_span, &decls);
    Ok(SourceFile {
        package: name,
        package_span,
        decls,
        groups,
    })
}

fn package_clause<'src>(
    node: Node<'_>,
    src: &'src str,
) -> Result<(&'src str, Span), SyntaxError> {
    let mut cursor = node.walk();
    let name = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_identifier")
        .map(|child| text(child, src))
        .ok_or_else(|| SyntaxError::new(line(node), "expected package name"))?;
    Ok((name, span(node)))
}

fn const_specs<'src>(
    decl: Node<'_>,
    src: &'src str,
    comments: &[Comment<'src>],
) -> Vec<ValueSpec<'src>> {
    let mut cursor = decl.walk();
    decl.named_children(&mut cursor)
        .filter(|child| child.kind() == "const_spec")
        .map(|spec| value_spec(spec, src, comments))
        .collect()
}

fn value_spec<'src>(
    spec: Node<'_>,
    src: &'src str,
    comments: &[Comment<'src>],
) -> ValueSpec<'src> {
    let mut cursor = spec.walk();
    let names = spec
        .children_by_field_name("name", &mut cursor)
        .filter(|name| name.kind() == "identifier")
        .map(|name| text(name, src))
        .collect();
    let ty = spec.child_by_field_name("type").map(|ty| {
        if ty.kind() == "type_identifier" {
            TypeRef::Ident(text(ty, src))
        } else {
            TypeRef::Other
        }
    });
    ValueSpec {
        names,
        ty,
        comment: line_comment(span(spec), src, comments),
        line: line(spec),
    }
}

fn type_specs<'src>(decl: Node<'_>, src: &'src str) -> Vec<TypeSpec<'src>> {
    let mut cursor = decl.walk();
    decl.named_children(&mut cursor)
        .filter(|child| matches!(child.kind(), "type_spec" | "type_alias"))
        .filter_map(|spec| {
            let name = text(spec.child_by_field_name("name")?, src);
            let form = if spec.kind() == "type_alias" {
                TypeForm::Alias
            } else if spec.child_by_field_name("type_parameters").is_some() {
                TypeForm::Composite
            } else {
                type_form(spec.child_by_field_name("type")?, src)
            };
            Some(TypeSpec { name, form })
        })
        .collect()
}

fn type_form<'src>(ty: Node<'_>, src: &'src str) -> TypeForm<'src> {
    match ty.kind() {
        "type_identifier" => TypeForm::Named(text(ty, src)),
        "qualified_type" => ty
            .child_by_field_name("name")
            .map_or(TypeForm::Composite, |name| TypeForm::Named(text(name, src))),
        _ => TypeForm::Composite,
    }
}

/// Returns the first comment of the line comment group trailing `owner`: a
/// run of comments starting on the line `owner` ends on, separated from it
/// only by blanks or a `;`, with nothing but blanks after the run.
fn line_comment<'src>(
    owner: Span,
    src: &'src str,
    comments: &[Comment<'src>],
) -> Option<&'src str> {
    let index = comments.partition_point(|c| c.span.start_byte < owner.end_byte);
    let first = comments.get(index)?;
    let lead = src.get(owner.end_byte..first.span.start_byte)?;
    if first.span.line != owner.end_line || !lead.chars().all(|c| c == ';' || is_blank(c)) {
        return None;
    }

    let mut last = first;
    for next in comments.iter().skip(index + 1) {
        let gap = src.get(last.span.end_byte..next.span.start_byte).unwrap_or_default();
        if next.span.line != last.span.end_line || !gap.chars().all(is_blank) {
            break;
        }
        last = next;
    }
    let rest = src.get(last.span.end_byte..).unwrap_or_default();
    let tail = rest.split('\n').next().unwrap_or_default();
    tail.trim().is_empty().then_some(first.text)
}

fn collect_comments<'src>(node: Node<'_>, src: &'src str, out: &mut Vec<Comment<'src>>) {
    if node.kind() == "comment" {
        out.push(Comment {
            text: text(node, src).trim_end_matches('\r'),
            span: span(node),
        });
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_comments(child, src, out);
    }
}

fn first_error(node: Node<'_>, src: &str) -> Option<SyntaxError> {
    if node.is_missing() {
        return Some(SyntaxError::new(line(node), format!("missing {}", node.kind())));
    }
    if node.is_error() {
        return Some(SyntaxError::new(
            line(node),
            format!("unexpected {}", first_word(node, src)),
        ));
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find_map(|child| first_error(child, src))
}

const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r')
}

fn text<'src>(node: Node<'_>, src: &'src str) -> &'src str {
    src.get(node.byte_range()).unwrap_or_default()
}

fn first_word<'src>(node: Node<'_>, src: &'src str) -> &'src str {
    text(node, src)
        .split_whitespace()
        .next()
        .unwrap_or("end of file")
}

fn line(node: Node<'_>) -> u32 {
    to_line(node.start_position().row)
}

fn end_line(node: Node<'_>) -> u32 {
    to_line(node.end_position().row)
}

fn to_line(row: usize) -> u32 {
    u32::try_from(row.saturating_add(1)).unwrap_or(u32::MAX)
}

fn span(node: Node<'_>) -> Span {
    Span {
        start_byte: node.start_byte(),
        end_byte: node.end_byte(),
        line: line(node),
        end_line: end_line(node),
    }
}
