//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! The `*Params` structs mirror each command's `*Args` but are populated
//! from clap. `from_matches()` pulls the fields, `Into<*Args>` bridges
//! dispatch to the command handlers (resolving the color choice on the
//! way).

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenArgs;

pub struct GenParams {
    pub inputs: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub output: Option<PathBuf>,
    pub type_only: bool,
    pub pragma: bool,
    pub color: ColorChoice,
}

impl GenParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: collect_inputs(m),
            source_text: m.get_one::<String>("source_text").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            type_only: m.get_flag("type_only"),
            pragma: m.get_flag("pragma"),
            color: parse_color(m),
        }
    }
}

impl From<GenParams> for GenArgs {
    fn from(p: GenParams) -> Self {
        Self {
            inputs: p.inputs,
            source_text: p.source_text,
            output: p.output,
            type_only: p.type_only,
            pragma: p.pragma,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub inputs: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: collect_inputs(m),
            source_text: m.get_one::<String>("source_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            inputs: p.inputs,
            source_text: p.source_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub inputs: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub format: String,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            inputs: collect_inputs(m),
            source_text: m.get_one::<String>("source_text").cloned(),
            format: m
                .get_one::<String>("format")
                .cloned()
                .unwrap_or_else(|| "tree".to_string()),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            inputs: p.inputs,
            source_text: p.source_text,
            json: p.format == "json",
            color: p.color.should_colorize(),
        }
    }
}

fn collect_inputs(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("inputs")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default()
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
