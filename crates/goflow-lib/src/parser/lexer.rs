//! Lexer for the Go declaration subset.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Semicolon insertion
//!
//! Go terminates statements at newlines. The post-pass in [`lex`] applies the
//! scanner rule: a newline following an identifier, a literal, or one of `)`,
//! `]`, `}` becomes a `;` token; any other newline is dropped. Block comments
//! are tokens (not skips) because a comment containing a newline counts as a
//! newline for this rule.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. This keeps the token stream manageable for malformed input.

use logos::Logos;

use super::span::Span;

/// Token kinds for the Go declaration subset.
///
/// `Garbage` and `Eof` are synthesized: `Garbage` by error coalescing,
/// `Eof` by the parser cursor past the end of the token vector.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
pub enum TokenKind {
    #[token("package")]
    Package,

    #[token("import")]
    Import,

    #[token("type")]
    Type,

    #[token("struct")]
    Struct,

    #[token("map")]
    Map,

    #[token("func")]
    Func,

    #[token("interface")]
    Interface,

    #[token("chan")]
    Chan,

    #[token("const")]
    Const,

    #[token("var")]
    Var,

    /// Identifier. Defined after keywords so they take precedence.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,

    /// Interpreted string literal: `"..."` with escapes, no raw newlines.
    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    String,

    /// Raw string literal: backquoted, may span lines. Used for struct tags.
    #[regex(r"`[^`]*`")]
    RawString,

    /// Integer literal (array lengths). The value is never evaluated.
    #[regex(r"[0-9][0-9_]*|0[xX][0-9a-fA-F_]+|0[oO][0-7_]+|0[bB][01_]+")]
    Int,

    #[token("*")]
    Star,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(".")]
    Dot,

    #[token(",")]
    Comma,

    #[token(";")]
    Semi,

    #[token("=")]
    Eq,

    /// Channel receive arrow. Only appears in unsupported type shapes.
    #[token("<-")]
    Arrow,

    #[token("\n")]
    Newline,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// Coalesced unrecognized characters.
    Garbage,
    /// Synthesized by the parser cursor at end of input.
    Eof,
}

impl TokenKind {
    /// Whether a newline after this token terminates the statement
    /// (Go's automatic semicolon insertion rule, restricted to this subset).
    #[inline]
    fn ends_statement(self) -> bool {
        matches!(
            self,
            TokenKind::Ident
                | TokenKind::String
                | TokenKind::RawString
                | TokenKind::Int
                | TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
        )
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the Logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
/// - Replaces newlines (and newline-containing block comments) with `;`
///   tokens after statement-ending tokens, dropping them otherwise
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_run: Option<(usize, usize)> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some((start, end)) = error_run.take() {
                    tokens.push(Token::new(TokenKind::Garbage, Span::new(start, end)));
                }
                push_token(source, &mut tokens, kind, lexer.span().into());
            }
            Some(Err(())) => {
                // Track the run's end ourselves: whitespace between error
                // characters is skipped without an event, so flushing at the
                // next token's start would fold that whitespace in.
                let span = lexer.span();
                match &mut error_run {
                    Some((_, end)) => *end = span.end,
                    None => error_run = Some((span.start, span.end)),
                }
            }
            None => {
                if let Some((start, end)) = error_run.take() {
                    tokens.push(Token::new(TokenKind::Garbage, Span::new(start, end)));
                }
                break;
            }
        }
    }

    tokens
}

/// Applies semicolon insertion while pushing a token.
fn push_token(source: &str, tokens: &mut Vec<Token>, kind: TokenKind, span: Span) {
    let acts_as_newline = match kind {
        TokenKind::Newline => true,
        TokenKind::BlockComment => source[span.range()].contains('\n'),
        _ => false,
    };

    if kind == TokenKind::Newline || kind == TokenKind::BlockComment {
        if acts_as_newline
            && let Some(last) = tokens.last()
            && last.kind.ends_statement()
        {
            tokens.push(Token::new(TokenKind::Semi, Span::empty(span.start as usize)));
        }
        return;
    }

    tokens.push(Token::new(kind, span));
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.range()]
}
