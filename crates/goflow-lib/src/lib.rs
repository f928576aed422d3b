//! Goflow: Go type declarations to Flow type definitions.
//!
//! # Example
//!
//! ```
//! use goflow_lib::Translation;
//!
//! let source = r#"
//!     type User struct {
//!         ID   string `json:"id"`
//!         Name string `json:"name,omitempty"`
//!     }
//! "#;
//!
//! let translation = Translation::try_from(source).expect("nested too deeply");
//! print!("{}", translation.flow());
//! ```

pub mod diagnostics;
pub mod flow;
pub mod parser;

mod source;
mod translate;

#[cfg(test)]
mod translate_tests;

/// Result type for passes that produce both output and diagnostics.
///
/// Each pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (like the recursion guard) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use flow::Config;
pub use source::{Source, SourceId, SourceKind, SourceMap};
pub use translate::Translation;

/// Errors that can occur while translating Go declarations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Recursion limit exceeded (type expression nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, Error>;
