use super::message::{DiagnosticKind, DiagnosticMessage, RelatedInfo};
use super::printer::DiagnosticsPrinter;
use crate::parser::Span;

/// An ordered collection of diagnostics produced by a pass.
///
/// Passes report into this via [`Diagnostics::report`], which returns a
/// builder. The builder must be finished with
/// [`emit`](DiagnosticBuilder::emit), otherwise the diagnostic is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic with the given kind and span.
    ///
    /// Uses the kind's default message and hint. Call `.message()` on the
    /// builder to override the message, `.hint()` to add hints.
    pub fn report(&mut self, kind: DiagnosticKind, span: Span) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, span),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|m| m.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_warning()).count()
    }

    /// Absorb all diagnostics from another collection, preserving order.
    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    /// Configure rendering of these diagnostics against a source text.
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    /// Render all diagnostics as plain text annotated against `source`.
    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    /// Render all diagnostics, with ANSI colors when `colored` is set.
    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer().source(source).colored(colored).render()
    }
}

impl<'d> IntoIterator for &'d Diagnostics {
    type Item = &'d DiagnosticMessage;
    type IntoIter = std::slice::Iter<'d, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'d> {
    diagnostics: &'d mut Diagnostics,
    message: DiagnosticMessage,
}

impl DiagnosticBuilder<'_> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    /// Attach a secondary span, shown as context below the primary one.
    pub fn related_to(mut self, msg: impl Into<String>, span: Span) -> Self {
        self.message.related.push(RelatedInfo::new(span, msg));
        self
    }

    /// Attach an extra hint, rendered after any default hint.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    /// Record the diagnostic in the collection.
    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
