//! High-level translation facade.
//!
//! [`Translation`] runs the whole pipeline in one step: parse the Go
//! declarations, then lower them to Flow. Most callers want this type
//! rather than the individual passes.

use crate::diagnostics::Diagnostics;
use crate::flow::{self, Config};
use crate::parser::{self, SourceFile};
use crate::{Error, Result};

/// A translated source: the syntax tree, the emitted Flow text, and the
/// diagnostics each pass collected.
///
/// Both passes run eagerly during construction. `TryFrom` uses the
/// default [`Config`]; [`Translation::with_config`] overrides it.
#[derive(Debug)]
pub struct Translation<'a> {
    source: &'a str,
    file: SourceFile,
    flow: String,
    parse_diagnostics: Diagnostics,
    lowering_diagnostics: Diagnostics,
}

impl<'a> Translation<'a> {
    /// Parses and lowers `source` with the given emitter configuration.
    pub fn with_config(source: &'a str, config: Config) -> Result<Self> {
        let (file, parse_diagnostics) = parser::parse(source)?;
        let (flow, lowering_diagnostics) = flow::emit_with_config(&file, config);
        Ok(Self {
            source,
            file,
            flow,
            parse_diagnostics,
            lowering_diagnostics,
        })
    }

    /// The original Go source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The emitted Flow text.
    pub fn flow(&self) -> &str {
        &self.flow
    }

    /// The parsed syntax tree.
    pub fn file(&self) -> &SourceFile {
        &self.file
    }

    /// All diagnostics, parse pass first, then lowering.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut all = Diagnostics::new();
        all.extend(self.parse_diagnostics.clone());
        all.extend(self.lowering_diagnostics.clone());
        all
    }

    /// Whether any pass reported an error. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        !self.parse_diagnostics.has_errors() && !self.lowering_diagnostics.has_errors()
    }
}

impl<'a> TryFrom<&'a str> for Translation<'a> {
    type Error = Error;

    fn try_from(source: &'a str) -> Result<Self> {
        Self::with_config(source, Config::default())
    }
}

impl<'a> TryFrom<&'a String> for Translation<'a> {
    type Error = Error;

    fn try_from(source: &'a String) -> Result<Self> {
        Self::with_config(source, Config::default())
    }
}
