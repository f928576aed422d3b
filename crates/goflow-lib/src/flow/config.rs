//! Configuration for Flow emission.

/// Configuration for Flow emission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Whether to prefix declarations with `export`
    pub export: bool,
    /// Whether to open the output with a `// @flow` pragma line
    pub pragma: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export: true,
            pragma: false,
        }
    }
}

impl Config {
    pub fn export(mut self, value: bool) -> Self {
        self.export = value;
        self
    }

    pub fn pragma(mut self, value: bool) -> Self {
        self.pragma = value;
        self
    }
}
