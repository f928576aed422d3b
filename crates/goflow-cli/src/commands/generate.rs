//! Generate Flow type definitions from Go sources.

use std::fs;
use std::path::{Path, PathBuf};

use goflow_lib::{Config, Translation};

use super::source_loader::load_sources;

pub struct GenArgs {
    pub inputs: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub output: Option<PathBuf>,
    pub type_only: bool,
    pub pragma: bool,
    pub color: bool,
}

pub fn run(args: GenArgs) {
    let sources = match load_sources(&args.inputs, args.source_text.as_deref()) {
        Ok(sources) => sources,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let config = Config::default().export(!args.type_only);

    // The pragma heads the combined output once, not each source's fragment.
    let mut output = String::new();
    if args.pragma {
        output.push_str("// @flow\n\n");
    }

    let mut failed = false;
    for source in sources.iter() {
        match Translation::with_config(source.content, config) {
            Ok(translation) => {
                let diagnostics = translation.diagnostics();
                if !diagnostics.is_empty() {
                    eprint!(
                        "{}",
                        diagnostics
                            .printer()
                            .source(source.content)
                            .path(source.display_name())
                            .colored(args.color)
                            .render()
                    );
                }
                if translation.is_valid() {
                    output.push_str(translation.flow());
                } else {
                    failed = true;
                }
            }
            Err(err) => {
                eprintln!("error: {}: {}", source.display_name(), err);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }

    write_output(args.output.as_deref(), &output);
}

fn write_output(path: Option<&Path>, output: &str) {
    match path {
        Some(path) => {
            if let Err(err) = fs::write(path, output) {
                eprintln!("error: failed to write '{}': {}", path.display(), err);
                std::process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}
