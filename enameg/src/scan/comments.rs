//! Grouping of top-level comments and their association with declarations.
//!
//! A group lying between the previous top-level node `P` (the package
//! clause or a declaration) and the next declaration `N` is attached to:
//!
//! 1. `P` when it starts on the line `P` ends on;
//! 2. `P` when it starts on the line after `P` ends and a blank line
//!    separates it from `N` (or nothing follows);
//! 3. `N` otherwise.
//!
//! Comments inside a declaration and comments before the end of the package
//! clause never form top-level groups.

use super::{Comment, CommentGroup, Decl, SourceFile, Span};

/// Splits the top-level `comments` (in source order) into groups of
/// adjacent comments.
///
/// A group started on the line its preceding node ends on only takes
/// further comments from that line. Other groups run until a blank line.
/// Groups never span a declaration.
pub(super) fn top_level_groups<'src>(
    comments: &[Comment<'src>],
    package: Span,
    decls: &[Decl<'_>],
) -> Vec<CommentGroup<'src>> {
    let mut groups: Vec<CommentGroup<'src>> = Vec::new();
    let mut is_line_group = false;
    for comment in comments {
        let next = decls.partition_point(|d| d.span.start_byte <= comment.span.start_byte);
        let Some(prev) = previous_span(package, decls, next) else {
            continue;
        };
        if comment.span.start_byte < prev.end_byte {
            continue;
        }

        if let Some(group) = groups.last_mut().filter(|g| g.next_decl == next) {
            let limit = if is_line_group {
                group.end_line()
            } else {
                group.end_line().saturating_add(1)
            };
            if comment.span.line <= limit {
                group.comments.push(*comment);
                continue;
            }
        }
        is_line_group = comment.span.line == prev.end_line;
        groups.push(CommentGroup {
            comments: vec![*comment],
            next_decl: next,
        });
    }
    groups
}

fn previous_span(package: Span, decls: &[Decl<'_>], next: usize) -> Option<Span> {
    next.checked_sub(1)
        .map_or(Some(package), |index| decls.get(index).map(|d| d.span))
}

/// Returns, for each declaration of `file` (by index), the comment groups
/// attached to it in source order.
#[must_use]
pub fn attached_groups<'f, 'src>(
    file: &'f SourceFile<'src>,
) -> Vec<Vec<&'f CommentGroup<'src>>> {
    let mut attached = vec![Vec::new(); file.decls.len()];
    for group in &file.groups {
        let next = group.next_decl;
        let Some(prev_span) = previous_span(file.package_span, &file.decls, next) else {
            continue;
        };
        let prev_index = next.checked_sub(1);
        let next_span = file.decls.get(next).map(|d| d.span);
        let target = if trails(group, prev_span, next_span) {
            prev_index
        } else {
            next_span.map(|_| next)
        };
        if let Some(slot) = target.and_then(|index| attached.get_mut(index)) {
            slot.push(group);
        }
    }
    attached
}

fn trails(group: &CommentGroup<'_>, prev: Span, next: Option<Span>) -> bool {
    let start = group.start_line();
    if prev.end_line == start {
        return true;
    }
    prev.end_line.saturating_add(1) == start
        && next.is_none_or(|n| group.end_line().saturating_add(1) < n.line)
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;
    use rstest::rstest;

    fn attached_texts(src: &str) -> Vec<Vec<String>> {
        let file = parse(src).expect("parse");
        attached_groups(&file)
            .into_iter()
            .map(|groups| {
                groups
                    .iter()
                    .flat_map(|g| g.comments.iter().map(|c| c.text.to_owned()))
                    .collect()
            })
            .collect()
    }

    fn group_texts(src: &str) -> Vec<Vec<String>> {
        let file = parse(src).expect("parse");
        file.groups
            .iter()
            .map(|g| g.comments.iter().map(|c| c.text.to_owned()).collect())
            .collect()
    }

    #[rstest]
    fn doc_comment_attaches_to_following_declaration() {
        let src = "package p\n\n// T doc.\n// +enameg\ntype T int\n";
        assert_eq!(attached_texts(src), vec![vec!["// T doc.", "// +enameg"]]);
    }

    #[rstest]
    fn trailing_comment_attaches_to_its_declaration() {
        let src = "package p\n\ntype T int // +enameg\n\ntype U int\n";
        assert_eq!(
            attached_texts(src),
            vec![vec!["// +enameg".to_owned()], vec![]]
        );
    }

    #[rstest]
    fn comment_followed_by_blank_line_attaches_to_previous() {
        let src = "package p\n\ntype T int\n// +enameg\n\ntype U int\n";
        assert_eq!(
            attached_texts(src),
            vec![vec!["// +enameg".to_owned()], vec![]]
        );
    }

    #[rstest]
    fn comment_between_adjacent_declarations_attaches_to_next() {
        let src = "package p\n\ntype T int\n// +enameg\ntype U int\n";
        assert_eq!(
            attached_texts(src),
            vec![vec![], vec!["// +enameg".to_owned()]]
        );
    }

    #[rstest]
    fn comments_inside_declarations_are_not_attached() {
        let src = "package p\n\nconst (\n\t// +enameg\n\tA T = 1 // A\n)\n";
        assert_eq!(attached_texts(src), vec![Vec::<String>::new()]);
    }

    #[rstest]
    fn file_header_comments_are_not_attached() {
        let src = "//go:generate enameg $GOFILE\n\npackage p\n\ntype T int\n";
        assert_eq!(attached_texts(src), vec![Vec::<String>::new()]);
    }

    #[rstest]
    fn comment_under_package_clause_with_gap_stays_with_package() {
        let src = "package p\n// +enameg\n\ntype T int\n";
        assert_eq!(attached_texts(src), vec![Vec::<String>::new()]);
    }

    #[rstest]
    fn final_comment_on_next_line_attaches_to_last_declaration() {
        let src = "package p\n\ntype T int\n// +enameg\n";
        assert_eq!(attached_texts(src), vec![vec!["// +enameg".to_owned()]]);
    }

    #[rstest]
    fn trailing_comment_after_multiline_declaration_attaches_to_it() {
        let src = "package p\n\ntype T struct {\n\tA int\n} // +enameg\ntype U int\n";
        assert_eq!(
            attached_texts(src),
            vec![vec!["// +enameg".to_owned()], vec![]]
        );
    }

    #[rstest]
    fn blank_lines_and_same_line_comments_split_groups() {
        let src = concat!(
            "package p\n\n",
            "type T int // a\n",
            "// b\n",
            "// c\n\n",
            "// d\n",
            "type U int\n",
        );
        assert_eq!(
            group_texts(src),
            vec![
                vec!["// a".to_owned()],
                vec!["// b".to_owned(), "// c".to_owned()],
                vec!["// d".to_owned()],
            ]
        );
    }
}
