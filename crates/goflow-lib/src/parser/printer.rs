//! Debug dump of the parsed declaration tree.
//!
//! Used by the `ast` command and by parser tests, which snapshot this
//! format instead of poking at tree structure field by field.

use std::fmt::Write;

use super::ast::{Field, SourceFile, TypeDecl, TypeExpr};

impl SourceFile {
    /// Render the tree as an indented dump, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        format_file(&mut out, self).expect("String write never fails");
        out
    }
}

fn format_file(w: &mut impl Write, file: &SourceFile) -> std::fmt::Result {
    writeln!(w, "SourceFile")?;
    if let Some(package) = &file.package {
        writeln!(w, "  Package {:?}", package)?;
    }
    for decl in &file.decls {
        format_decl(w, decl, 1)?;
    }
    Ok(())
}

fn format_decl(w: &mut impl Write, decl: &TypeDecl, indent: usize) -> std::fmt::Result {
    let pad = indent * 2;
    writeln!(w, "{:pad$}TypeDecl {:?}", "", decl.name)?;
    format_type(w, &decl.ty, indent + 1)
}

fn format_type(w: &mut impl Write, ty: &TypeExpr, indent: usize) -> std::fmt::Result {
    let pad = indent * 2;
    match ty {
        TypeExpr::Ident {
            qualifier: Some(qualifier),
            name,
        } => writeln!(w, "{:pad$}Ident {:?}", "", format!("{qualifier}.{name}")),
        TypeExpr::Ident {
            qualifier: None,
            name,
        } => writeln!(w, "{:pad$}Ident {:?}", "", name),
        TypeExpr::Pointer { inner } => {
            writeln!(w, "{:pad$}Pointer", "")?;
            format_type(w, inner, indent + 1)
        }
        TypeExpr::Array { element } => {
            writeln!(w, "{:pad$}Array", "")?;
            format_type(w, element, indent + 1)
        }
        TypeExpr::Map { key, value } => {
            writeln!(w, "{:pad$}Map", "")?;
            format_type(w, key, indent + 1)?;
            format_type(w, value, indent + 1)
        }
        TypeExpr::Struct { fields } => {
            writeln!(w, "{:pad$}Struct", "")?;
            for field in fields {
                format_field(w, field, indent + 1)?;
            }
            Ok(())
        }
    }
}

fn format_field(w: &mut impl Write, field: &Field, indent: usize) -> std::fmt::Result {
    let pad = indent * 2;
    write!(w, "{:pad$}Field", "")?;
    for name in &field.names {
        write!(w, " {:?}", name)?;
    }
    writeln!(w)?;
    if let Some(tag) = &field.tag {
        let tag_pad = (indent + 1) * 2;
        writeln!(w, "{:tag_pad$}Tag {:?}", "", tag)?;
    }
    format_type(w, &field.ty, indent + 1)
}
