//! Parser state machine and low-level operations.

use super::lexer::{Token, TokenKind, token_text};
use super::span::Span;
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Nesting limit for type expressions. Deeper input aborts the parse with
/// [`Error::RecursionLimitExceeded`] rather than overflowing the stack.
const MAX_DEPTH: u32 = 128;

pub(super) struct Parser<'src> {
    pub(super) source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
    pub(super) diagnostics: Diagnostics,
    depth: u32,
    last_diagnostic_pos: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub(super) fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            fatal_error: None,
        }
    }

    pub(super) fn finish(self) -> Result<Diagnostics, Error> {
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        Ok(self.diagnostics)
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(super) fn current(&self) -> TokenKind {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> TokenKind {
        self.tokens
            .get(self.pos + lookahead)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    pub(super) fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or_else(|| Span::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof_offset(&self) -> usize {
        self.source.len()
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    pub(super) fn next_is(&self, kind: TokenKind) -> bool {
        self.nth(1) == kind
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: TokenKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: TokenKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_msg(DiagnosticKind::UnexpectedToken, format!("expected {}", what));
        false
    }

    // One diagnostic per position. Recovery loops revisit the same token and
    // would otherwise report it several times.
    fn should_report(&mut self, pos: u32) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let span = self.current_span();
        if !self.should_report(span.start) {
            return;
        }
        self.diagnostics.report(kind, span).emit();
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let span = self.current_span();
        if !self.should_report(span.start) {
            return;
        }
        self.diagnostics.report(kind, span).message(message).emit();
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        if !self.eof() {
            self.bump();
        }
    }

    /// Report an unclosed delimiter spanning from its opener to the last
    /// consumed token, with the opener marked as related context.
    pub(super) fn error_unclosed(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_span: Span,
    ) {
        // Dedup on the recovery position, not the opener: when several
        // delimiters are left unclosed at the same spot, only the innermost
        // one gets reported.
        if !self.should_report(self.current_span().start) {
            return;
        }
        let full_span = Span {
            start: open_span.start,
            end: self.prev_token_end().max(open_span.end),
        };
        self.diagnostics
            .report(kind, full_span)
            .related_to(related_msg, open_span)
            .emit();
    }

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= MAX_DEPTH {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// End position of the most recently consumed token.
    pub(super) fn prev_token_end(&self) -> u32 {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(0, |t| t.span.end)
    }

    /// Skip forward to the end of the current declaration: past the next
    /// terminator at bracket depth zero, up to the next declaration keyword,
    /// or to EOF. Stopping at keywords matters when the skipped-over text has
    /// no terminator at all, as with stray garbage between declarations.
    pub(super) fn skip_to_decl_end(&mut self) {
        self.skip_until(&[
            TokenKind::Package,
            TokenKind::Import,
            TokenKind::Type,
            TokenKind::Const,
            TokenKind::Var,
            TokenKind::Func,
        ]);
    }

    /// Skip to the end of a spec inside a `type (...)` group. Stops before
    /// the group's closing `)` so the caller can consume it.
    pub(super) fn skip_to_spec_end(&mut self) {
        self.skip_until(&[TokenKind::RParen]);
    }

    /// Skip to the end of a struct field. Stops before the struct's closing
    /// `}` so the caller can consume it.
    pub(super) fn skip_to_field_end(&mut self) {
        self.skip_until(&[TokenKind::RBrace]);
    }

    // Consumes up to and including the next terminator at bracket depth
    // zero, or up to (excluding) a stop token at depth zero, or to EOF.
    // Nested braces, brackets, and parens are skipped as a unit so
    // terminators inside them don't end the skip early.
    fn skip_until(&mut self, stop_at: &[TokenKind]) {
        let mut depth = 0u32;
        while !self.should_stop() {
            let kind = self.current();
            if depth == 0 && stop_at.contains(&kind) {
                return;
            }
            match kind {
                TokenKind::LBrace | TokenKind::LBracket | TokenKind::LParen => depth += 1,
                TokenKind::RBrace | TokenKind::RBracket | TokenKind::RParen => {
                    depth = depth.saturating_sub(1);
                }
                TokenKind::Semi if depth == 0 => {
                    self.bump();
                    return;
                }
                _ => {}
            }
            self.bump();
        }
    }
}
