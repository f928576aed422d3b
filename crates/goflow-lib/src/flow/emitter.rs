//! Flow emission from parsed declarations.
//!
//! Each declaration is classified once against its underlying type shape
//! and lowered to at most one output fragment. Fragments are built in a
//! local buffer and appended atomically, so output never contains a
//! partial declaration. No state flows between declarations.

use super::config::Config;
use super::tags::TagInfo;
use super::types::{embedded_name, flow_type, is_nullable};
use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::parser::{Field, SourceFile, TypeDecl, TypeExpr};

/// Flow emitter over a parsed source file.
pub struct Emitter {
    config: Config,
    output: String,
    diagnostics: Diagnostics,
}

impl Emitter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            output: String::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Emit Flow text for every exported declaration, in source order.
    pub fn emit(mut self, file: &SourceFile) -> (String, Diagnostics) {
        if self.config.pragma {
            self.output.push_str("// @flow\n\n");
        }
        for decl in &file.decls {
            self.emit_decl(decl);
        }
        (self.output, self.diagnostics)
    }

    fn emit_decl(&mut self, decl: &TypeDecl) {
        if !decl.exported() {
            return;
        }
        match &decl.ty {
            TypeExpr::Struct { fields } => self.emit_struct(&decl.name, fields),
            TypeExpr::Ident { .. } | TypeExpr::Array { .. } | TypeExpr::Map { .. } => {
                self.emit_alias(decl);
            }
            // A bare pointer declaration has no Flow rendering.
            TypeExpr::Pointer { .. } => {}
        }
    }

    /// `export type Name = <resolved>;` plus the terminating blank line.
    fn emit_alias(&mut self, decl: &TypeDecl) {
        let Some(ty) = flow_type(&decl.ty) else {
            // Array or map over a struct literal; nothing nominal to say.
            return;
        };
        let mut fragment = String::new();
        self.push_header(&mut fragment, &decl.name);
        fragment.push_str(" = ");
        fragment.push_str(&ty);
        fragment.push_str(";\n\n");
        self.output.push_str(&fragment);
    }

    /// `export type Name = A & B & { fields }` plus the terminating blank
    /// line. Embedded fields contribute the intersection prefix, named
    /// fields the body lines, each in declaration order.
    fn emit_struct(&mut self, name: &str, fields: &[Field]) {
        let mut fragment = String::new();
        self.push_header(&mut fragment, name);
        fragment.push_str(" = ");

        for field in fields.iter().filter(|f| f.is_anonymous()) {
            match embedded_name(&field.ty) {
                Some(embedded) => {
                    fragment.push_str(embedded);
                    fragment.push_str(" & ");
                }
                None => {
                    self.diagnostics
                        .report(DiagnosticKind::UnsupportedEmbedding, field.span)
                        .emit();
                }
            }
        }

        fragment.push_str("{\n");
        for field in fields.iter().filter(|f| !f.is_anonymous()) {
            self.push_field(&mut fragment, field);
        }
        fragment.push_str("}\n\n");
        self.output.push_str(&fragment);
    }

    /// One body line per named field that survives tag interpretation.
    /// Marker precedence: `name?:` when the tag says optional, `: ?` when
    /// the type is a pointer, plain `:` otherwise. Optional-and-nullable
    /// collapses to optional-only.
    fn push_field(&mut self, fragment: &mut String, field: &Field) {
        let tag = TagInfo::from_field(field.tag.as_deref());
        if tag.skipped() {
            return;
        }
        let Some(ty) = flow_type(&field.ty) else {
            self.diagnostics
                .report(DiagnosticKind::UnsupportedFieldType, field.span)
                .message(format!("`{}`", field.names.join(", ")))
                .emit();
            return;
        };
        if tag.optional {
            fragment.push_str(&format!("  {}?: {},\n", tag.name, ty));
        } else if is_nullable(&field.ty) {
            fragment.push_str(&format!("  {}: ?{},\n", tag.name, ty));
        } else {
            fragment.push_str(&format!("  {}: {},\n", tag.name, ty));
        }
    }

    fn push_header(&self, fragment: &mut String, name: &str) {
        if self.config.export {
            fragment.push_str("export ");
        }
        fragment.push_str("type ");
        fragment.push_str(name);
    }
}

/// Emit with default configuration.
pub fn emit(file: &SourceFile) -> (String, Diagnostics) {
    Emitter::new(Config::default()).emit(file)
}

/// Emit with custom configuration.
pub fn emit_with_config(file: &SourceFile, config: Config) -> (String, Diagnostics) {
    Emitter::new(config).emit(file)
}
