//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Go files, directories, or `-` for stdin (positional, repeatable).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("FILE")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Go files, directories walked for .go files, or `-` for stdin")
}

/// Inline Go source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline Go source text")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file instead of stdout")
}

/// Emit `type` instead of `export type` (--type-only).
pub fn type_only_arg() -> Arg {
    Arg::new("type_only")
        .long("type-only")
        .action(ArgAction::SetTrue)
        .help("Emit `type` declarations without the `export` prefix")
}

/// Open the output with the `// @flow` pragma (--pragma).
pub fn pragma_arg() -> Arg {
    Arg::new("pragma")
        .long("pragma")
        .action(ArgAction::SetTrue)
        .help("Open the output with the `// @flow` pragma")
}

/// Parse tree output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("tree")
        .value_parser(["tree", "json"])
        .help("Output format")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}
