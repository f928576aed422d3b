//! Structured errors and warnings with source-annotated rendering.
//!
//! Every pass reports into a [`Diagnostics`] collection instead of failing
//! fast, so a single run surfaces everything wrong with the input. Rendering
//! goes through [`DiagnosticsPrinter`], which annotates the original source
//! text with spans, related context, and hints.

mod collection;
mod message;
mod printer;


pub use collection::{DiagnosticBuilder, Diagnostics};
pub use message::{DiagnosticKind, DiagnosticMessage, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;
