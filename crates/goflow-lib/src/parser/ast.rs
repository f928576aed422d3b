//! Syntax tree for Go type declarations.
//!
//! The tree is deliberately closed: [`TypeExpr`] has exactly five variants
//! and no fallback. Shapes the tree cannot represent (function, interface,
//! and channel types) are rejected at the parsing boundary, so every
//! consumer can match exhaustively.

use serde::Serialize;

use super::span::Span;

/// A parsed Go source file, reduced to its type declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Package name from the `package` clause, if present.
    pub package: Option<String>,
    /// Type declarations in source order.
    pub decls: Vec<TypeDecl>,
}

/// A single `type Name Underlying` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDecl {
    pub name: String,
    /// Span of the declared name.
    pub span: Span,
    pub ty: TypeExpr,
}

impl TypeDecl {
    /// Go exportedness: the name starts with an uppercase letter.
    pub fn exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }
}

/// A type expression: the closed set of shapes the translator understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeExpr {
    /// A plain or package-qualified name: `User`, `time.Time`.
    Ident {
        qualifier: Option<String>,
        name: String,
    },
    /// `*T`
    Pointer { inner: Box<TypeExpr> },
    /// `[]T` or `[N]T` (the length is not modeled).
    Array { element: Box<TypeExpr> },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `struct { ... }`
    Struct { fields: Vec<Field> },
}

/// One field declaration inside a struct body.
///
/// A field with several names (`X, Y int`) is still one declaration and
/// translates as one unit. Empty `names` marks an embedded field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
    /// Raw tag contents with the quotes removed, e.g. `json:"id"`.
    pub tag: Option<String>,
    /// Span of the whole field declaration, for diagnostics.
    pub span: Span,
}

impl Field {
    /// Whether this is an anonymous (embedded) field.
    pub fn is_anonymous(&self) -> bool {
        self.names.is_empty()
    }
}
