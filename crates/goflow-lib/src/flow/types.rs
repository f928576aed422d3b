//! Type resolution: Go type shapes to Flow type text.

use crate::parser::TypeExpr;

/// True iff the field's declared type is directly a pointer. Pointers
/// nested inside arrays or maps affect element text, not field
/// nullability.
pub(crate) fn is_nullable(ty: &TypeExpr) -> bool {
    matches!(ty, TypeExpr::Pointer { .. })
}

/// Map a type expression to its Flow text, recursively.
///
/// Returns `None` for a struct literal anywhere in the shape: it has no
/// nominal name and its expansion is never inlined, so callers must
/// surface the omission instead.
pub(crate) fn flow_type(ty: &TypeExpr) -> Option<String> {
    match ty {
        TypeExpr::Ident { name, .. } => Some(primitive(name).unwrap_or(name).to_string()),
        TypeExpr::Pointer { inner } => flow_type(inner),
        TypeExpr::Array { element } => Some(format!("Array<{}>", flow_type(element)?)),
        TypeExpr::Map { key, value } => {
            Some(format!("{{[{}]: {}}}", flow_type(key)?, flow_type(value)?))
        }
        TypeExpr::Struct { .. } => None,
    }
}

/// The nominal name an embedded field contributes to its owner's
/// intersection: a plain or qualified identifier, through at most one
/// level of pointer wrapping.
pub(crate) fn embedded_name(ty: &TypeExpr) -> Option<&str> {
    match ty {
        TypeExpr::Ident { name, .. } => Some(name),
        TypeExpr::Pointer { inner } => match inner.as_ref() {
            TypeExpr::Ident { name, .. } => Some(name),
            _ => None,
        },
        _ => None,
    }
}

// The Go predeclared scalar types. Any other name, qualified or not, is
// a nominal reference and passes through verbatim.
fn primitive(name: &str) -> Option<&'static str> {
    match name {
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16"
        | "uint32" | "uint64" | "uintptr" | "float32" | "float64" | "byte" | "rune" => {
            Some("number")
        }
        "bool" => Some("boolean"),
        "string" => Some("string"),
        _ => None,
    }
}
