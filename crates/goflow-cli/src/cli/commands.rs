//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("goflow")
        .about("Translate Go type declarations to Flow type definitions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(gen_command())
        .subcommand(check_command())
        .subcommand(ast_command())
}

/// Translate Go sources and print or write the Flow text.
pub fn gen_command() -> Command {
    Command::new("gen")
        .about("Generate Flow type definitions from Go sources")
        .override_usage(
            "\
  goflow gen <FILE>...
  goflow gen <DIR> -o <FILE>
  goflow gen -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  goflow gen types.go                 # one file to stdout
  goflow gen types.go extra.go        # fragments keep input order
  goflow gen ./models -o types.js     # every .go file under models/
  goflow gen - < types.go             # read stdin
  goflow gen -s 'type ID string'      # inline source
  goflow gen types.go --pragma        # open with // @flow"#,
        )
        .arg(inputs_arg())
        .arg(source_text_arg())
        .arg(output_file_arg())
        .arg(type_only_arg())
        .arg(pragma_arg())
        .arg(color_arg())
}

/// Validate without emitting.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate Go sources without emitting Flow text")
        .override_usage(
            "\
  goflow check <FILE>...
  goflow check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  goflow check types.go               # silent when clean
  goflow check ./models               # whole directory
  goflow check -s 'type T struct {'   # inline source"#,
        )
        .arg(inputs_arg())
        .arg(source_text_arg())
        .arg(color_arg())
}

/// Show the parsed declarations.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the parsed type declarations")
        .override_usage(
            "\
  goflow ast <FILE>
  goflow ast -s <TEXT> [--format json]",
        )
        .after_help(
            r#"EXAMPLES:
  goflow ast types.go                 # indented tree
  goflow ast types.go --format json   # JSON via serde
  goflow ast -s 'type A []B'          # inline source"#,
        )
        .arg(inputs_arg())
        .arg(source_text_arg())
        .arg(format_arg())
        .arg(color_arg())
}
