//! Parser infrastructure for Go type declarations.
//!
//! # Architecture
//!
//! The pipeline is deliberately small: the lexer resolves Go's semicolon
//! insertion rule and drops trivia, so the parser works on a clean token
//! stream and builds a closed AST directly. There is no concrete syntax
//! tree; nothing downstream needs the original token layout.
//!
//! # Recovery Strategy
//!
//! The parser is resilient and always produces a tree:
//!
//! 1. Declarations other than `type` are recognized and skipped wholesale
//! 2. Missing expected tokens emit a diagnostic but don't consume
//! 3. A broken field or spec is dropped and the parser resynchronizes at
//!    the next terminator, keeping bracket depth balanced so terminators
//!    inside nested delimiters don't end the skip early
//! 4. At most one diagnostic is reported per source position
//!
//! The recursion limit is the exception and returns an actual error.

pub mod ast;
pub mod lexer;

mod core;
mod grammar;
mod printer;
mod span;

#[cfg(test)]
mod ast_tests;
#[cfg(test)]
mod lexer_tests;

pub use ast::{Field, SourceFile, TypeDecl, TypeExpr};
pub use span::Span;

use crate::PassResult;
use core::Parser;
use lexer::lex;

/// Main entry point. Returns `Err` only when the recursion limit trips;
/// everything else is reported through diagnostics.
pub fn parse(source: &str) -> PassResult<SourceFile> {
    let mut parser = Parser::new(source, lex(source));
    let file = parser.parse_source_file();
    let diagnostics = parser.finish()?;
    Ok((file, diagnostics))
}
