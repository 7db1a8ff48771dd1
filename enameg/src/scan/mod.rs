//! Go source scanning.
//!
//! Files are parsed with the `tree-sitter-go` grammar. Only the package
//! clause and the top-level declarations are kept, with just enough detail
//! about `const` and `type` declarations for name generation, plus the
//! comment groups lying between top-level nodes.

mod comments;
mod tree;

use camino::Utf8Path;
use tree_sitter::Parser;

use crate::error::EnamegError;

pub use comments::attached_groups;

/// A reusable Go parser.
pub struct GoParser {
    parser: Parser,
}

impl std::fmt::Debug for GoParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoParser").finish_non_exhaustive()
    }
}

impl GoParser {
    /// Creates a parser loaded with the Go grammar.
    ///
    /// # Errors
    ///
    /// Returns `EnamegError::Grammar` when the grammar is incompatible with
    /// the linked tree-sitter runtime.
    pub fn new() -> Result<Self, EnamegError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parses a Go source file into its package name and top-level
    /// declarations. A leading byte-order mark is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`SyntaxError`] for malformed source, a missing package
    /// clause, or statements outside declarations.
    pub fn parse<'src>(&mut self, src: &'src str) -> Result<SourceFile<'src>, SyntaxError> {
        let body = src.strip_prefix('\u{feff}').unwrap_or(src);
        let syntax_tree = self
            .parser
            .parse(body, None)
            .ok_or_else(|| SyntaxError::new(1, "parser produced no syntax tree"))?;
        tree::source_file(syntax_tree.root_node(), body)
    }
}

#[cfg(test)]
pub(crate) fn parse(src: &str) -> Result<SourceFile<'_>, SyntaxError> {
    GoParser::new().expect("load Go grammar").parse(src)
}

/// A scanned Go source file.
#[derive(Debug)]
pub struct SourceFile<'src> {
    /// Name from the package clause.
    pub package: &'src str,
    /// Span of the package clause.
    pub package_span: Span,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl<'src>>,
    /// Comment groups between top-level nodes, in source order.
    pub groups: Vec<CommentGroup<'src>>,
}

/// Byte range and line range covered by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Offset of the first byte.
    pub start_byte: usize,
    /// Offset one past the last byte.
    pub end_byte: usize,
    /// One-based line of the first byte.
    pub line: u32,
    /// One-based line of the last byte.
    pub end_line: u32,
}

/// A top-level declaration.
#[derive(Debug)]
pub struct Decl<'src> {
    /// What was declared.
    pub kind: DeclKind<'src>,
    /// Where it was declared.
    pub span: Span,
}

/// The kinds of top-level declaration.
#[derive(Debug)]
pub enum DeclKind<'src> {
    /// `import` declaration.
    Import,
    /// `var` declaration.
    Var,
    /// Function or method declaration.
    Func,
    /// `const` declaration with its specs.
    Const(Vec<ValueSpec<'src>>),
    /// `type` declaration with its specs.
    Type(Vec<TypeSpec<'src>>),
}

/// One spec of a `const` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec<'src> {
    /// Declared names, left to right.
    pub names: Vec<&'src str>,
    /// Explicit type, if any.
    pub ty: Option<TypeRef<'src>>,
    /// First comment of the line comment group trailing the spec.
    pub comment: Option<&'src str>,
    /// Line of the first name.
    pub line: u32,
}

/// The explicit type of a value spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRef<'src> {
    /// A single unqualified identifier.
    Ident(&'src str),
    /// Anything else: qualified, pointer, or composite types.
    Other,
}

/// One spec of a `type` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSpec<'src> {
    /// Declared type name.
    pub name: &'src str,
    /// Shape of the type expression.
    pub form: TypeForm<'src>,
}

/// Shape of a type spec's right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeForm<'src> {
    /// `type T U` or `type T pkg.U`; carries the name `U`.
    Named(&'src str),
    /// `type T = U`.
    Alias,
    /// Struct, interface, generic, and other composite definitions.
    Composite,
}

/// A single `//` or `/* */` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment<'src> {
    /// Raw comment text including its markers.
    pub text: &'src str,
    /// Where the comment lies.
    pub span: Span,
}

/// Adjacent top-level comments with no blank line between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup<'src> {
    /// Member comments, in order.
    pub comments: Vec<Comment<'src>>,
    /// Index of the first declaration after the group.
    pub next_decl: usize,
}

impl CommentGroup<'_> {
    /// Line of the first comment.
    #[must_use]
    pub fn start_line(&self) -> u32 {
        self.comments.first().map_or(0, |c| c.span.line)
    }

    /// Line on which the last comment ends.
    #[must_use]
    pub fn end_line(&self) -> u32 {
        self.comments.last().map_or(0, |c| c.span.end_line)
    }
}

/// A scan failure at a known line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// One-based line number.
    pub line: u32,
    /// Human-readable description.
    pub message: String,
}

impl SyntaxError {
    /// Creates a syntax error.
    pub fn new(line: u32, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// Attaches the file path, producing a pipeline error.
    #[must_use]
    pub fn at(self, path: &Utf8Path) -> EnamegError {
        EnamegError::Syntax {
            path: path.to_path_buf(),
            line: self.line,
            message: self.message,
        }
    }
}
