//! Grammar productions for Go type declarations.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Only type declarations are modeled; import, const, var, and func
//! declarations are recognized and skipped without building anything.

use super::ast::{Field, SourceFile, TypeDecl, TypeExpr};
use super::core::Parser;
use super::lexer::TokenKind;
use super::span::Span;
use crate::diagnostics::DiagnosticKind;

impl Parser<'_> {
    pub(super) fn parse_source_file(&mut self) -> SourceFile {
        let mut package = None;
        let mut decls = Vec::new();

        while !self.should_stop() {
            match self.current() {
                TokenKind::Semi => self.bump(),
                TokenKind::Package => {
                    self.bump();
                    if package.is_none() && self.currently_is(TokenKind::Ident) {
                        package = Some(self.current_text().to_string());
                    }
                    self.skip_to_decl_end();
                }
                TokenKind::Import | TokenKind::Const | TokenKind::Var | TokenKind::Func => {
                    self.bump();
                    self.skip_to_decl_end();
                }
                TokenKind::Type => {
                    self.bump();
                    self.parse_type_decl(&mut decls);
                }
                _ => {
                    self.error(DiagnosticKind::UnexpectedToken);
                    self.skip_to_decl_end();
                }
            }
        }

        SourceFile { package, decls }
    }

    /// `type Name ...` or the grouped form `type ( ... )`.
    fn parse_type_decl(&mut self, decls: &mut Vec<TypeDecl>) {
        if !self.currently_is(TokenKind::LParen) {
            if let Some(decl) = self.parse_type_spec() {
                decls.push(decl);
            }
            return;
        }

        let open_span = self.current_span();
        self.bump(); // consume '('
        loop {
            while self.eat_token(TokenKind::Semi) {}
            if self.eat_token(TokenKind::RParen) {
                return;
            }
            if self.should_stop() {
                self.error_unclosed(DiagnosticKind::UnclosedGroup, "group opened here", open_span);
                return;
            }
            if let Some(decl) = self.parse_type_spec() {
                decls.push(decl);
            }
        }
    }

    /// A single spec: `Name Type`, or the alias form `Name = Type`.
    fn parse_type_spec(&mut self) -> Option<TypeDecl> {
        if !self.currently_is(TokenKind::Ident) {
            self.error(DiagnosticKind::ExpectedTypeName);
            self.skip_to_spec_end();
            return None;
        }

        let name = self.current_text().to_string();
        let span = self.current_span();
        self.bump();

        // Alias and definition forms translate identically.
        self.eat_token(TokenKind::Eq);

        let Some(ty) = self.parse_type_expr() else {
            self.skip_to_spec_end();
            return None;
        };

        Some(TypeDecl { name, span, ty })
    }

    /// Recursive descent over the type grammar.
    ///
    /// Returns `None` for malformed input (with a diagnostic) and for
    /// well-formed types this tool does not model, like function, interface,
    /// and channel types (silently). Either way the caller resynchronizes.
    fn parse_type_expr(&mut self) -> Option<TypeExpr> {
        if !self.enter_recursion() {
            return None;
        }
        let result = self.parse_type_expr_inner();
        self.exit_recursion();
        result
    }

    fn parse_type_expr_inner(&mut self) -> Option<TypeExpr> {
        match self.current() {
            TokenKind::Star => {
                self.bump();
                let inner = Box::new(self.parse_type_expr()?);
                Some(TypeExpr::Pointer { inner })
            }
            TokenKind::LBracket => {
                self.bump();
                // Fixed-size arrays lower the same as slices, so a length
                // expression is consumed without being kept.
                if self.currently_is(TokenKind::Int) || self.currently_is(TokenKind::Ident) {
                    self.bump();
                }
                if !self.expect(TokenKind::RBracket, "`]`") {
                    return None;
                }
                let element = Box::new(self.parse_type_expr()?);
                Some(TypeExpr::Array { element })
            }
            TokenKind::Map => {
                self.bump();
                if !self.expect(TokenKind::LBracket, "`[` after `map`") {
                    return None;
                }
                let key = Box::new(self.parse_type_expr()?);
                if !self.expect(TokenKind::RBracket, "`]`") {
                    return None;
                }
                let value = Box::new(self.parse_type_expr()?);
                Some(TypeExpr::Map { key, value })
            }
            TokenKind::Struct => self.parse_struct_type(),
            TokenKind::Ident => {
                let first = self.current_text().to_string();
                self.bump();
                if !self.eat_token(TokenKind::Dot) {
                    return Some(TypeExpr::Ident {
                        qualifier: None,
                        name: first,
                    });
                }
                if !self.currently_is(TokenKind::Ident) {
                    self.error(DiagnosticKind::ExpectedTypeName);
                    return None;
                }
                let name = self.current_text().to_string();
                self.bump();
                Some(TypeExpr::Ident {
                    qualifier: Some(first),
                    name,
                })
            }
            // Types with no Flow counterpart; the surrounding declaration or
            // field gets dropped without a parse error.
            TokenKind::Func
            | TokenKind::Interface
            | TokenKind::Chan
            | TokenKind::Arrow
            | TokenKind::LParen => None,
            _ => {
                self.error(DiagnosticKind::ExpectedType);
                None
            }
        }
    }

    /// `struct { field; field; ... }`
    fn parse_struct_type(&mut self) -> Option<TypeExpr> {
        self.bump(); // consume 'struct'
        let open_span = self.current_span();
        if !self.expect(TokenKind::LBrace, "`{` after `struct`") {
            return None;
        }

        let mut fields = Vec::new();
        loop {
            while self.eat_token(TokenKind::Semi) {}
            if self.eat_token(TokenKind::RBrace) {
                break;
            }
            if self.should_stop() {
                self.error_unclosed(
                    DiagnosticKind::UnclosedStruct,
                    "struct opened here",
                    open_span,
                );
                break;
            }
            if let Some(field) = self.parse_field() {
                fields.push(field);
            }
        }

        Some(TypeExpr::Struct { fields })
    }

    /// One field: `Name Type tag?`, `A, B Type tag?`, or an embedded type
    /// `Name`, `pkg.Name`, `*Name`.
    fn parse_field(&mut self) -> Option<Field> {
        let start = self.current_span();
        match self.current() {
            TokenKind::Ident if !embedded_lookahead(self.nth(1)) => self.parse_named_field(start),
            TokenKind::Ident | TokenKind::Star => self.parse_embedded_field(start),
            _ => {
                self.error_msg(DiagnosticKind::UnexpectedToken, "expected a field");
                self.skip_to_field_end();
                None
            }
        }
    }

    fn parse_named_field(&mut self, start: Span) -> Option<Field> {
        let mut names = vec![self.current_text().to_string()];
        self.bump();
        while self.eat_token(TokenKind::Comma) {
            if !self.currently_is(TokenKind::Ident) {
                self.error_msg(DiagnosticKind::UnexpectedToken, "expected a field name");
                self.skip_to_field_end();
                return None;
            }
            names.push(self.current_text().to_string());
            self.bump();
        }

        let Some(ty) = self.parse_type_expr() else {
            self.skip_to_field_end();
            return None;
        };
        let tag = self.parse_field_tag();
        Some(Field {
            names,
            ty,
            tag,
            span: self.finish_field(start),
        })
    }

    fn parse_embedded_field(&mut self, start: Span) -> Option<Field> {
        let Some(ty) = self.parse_type_expr() else {
            self.skip_to_field_end();
            return None;
        };
        let tag = self.parse_field_tag();
        Some(Field {
            names: Vec::new(),
            ty,
            tag,
            span: self.finish_field(start),
        })
    }

    /// Optional tag literal after the type. The stored value is the
    /// literal's content: backticks stripped for raw strings, quotes
    /// stripped and escapes resolved for interpreted strings.
    fn parse_field_tag(&mut self) -> Option<String> {
        match self.current() {
            TokenKind::RawString => {
                let tag = self.current_text().trim_matches('`').to_string();
                self.bump();
                Some(tag)
            }
            TokenKind::String => {
                let tag = unescape(self.current_text());
                self.bump();
                Some(tag)
            }
            _ => None,
        }
    }

    // Anything left on the line after a complete field is junk; report it
    // once and resynchronize, keeping the field itself.
    fn finish_field(&mut self, start: Span) -> Span {
        let span = Span {
            start: start.start,
            end: self.prev_token_end().max(start.start),
        };
        if !self.currently_is(TokenKind::Semi)
            && !self.currently_is(TokenKind::RBrace)
            && !self.should_stop()
        {
            self.error(DiagnosticKind::UnexpectedToken);
            self.skip_to_field_end();
        }
        span
    }
}

/// After a leading identifier, these continuations mean the field is an
/// embedded type rather than `name Type`.
fn embedded_lookahead(next: TokenKind) -> bool {
    matches!(
        next,
        TokenKind::Dot
            | TokenKind::String
            | TokenKind::RawString
            | TokenKind::Semi
            | TokenKind::RBrace
            | TokenKind::Eof
    )
}

/// Strip the quotes of an interpreted string literal and resolve its escape
/// sequences. Unknown escapes keep the escaped character.
fn unescape(literal: &str) -> String {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
