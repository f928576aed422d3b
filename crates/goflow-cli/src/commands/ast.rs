//! Dump the parsed syntax tree of Go sources.

use std::path::PathBuf;

use goflow_lib::Translation;

use super::source_loader::load_sources;

pub struct AstArgs {
    pub inputs: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let sources = match load_sources(&args.inputs, args.source_text.as_deref()) {
        Ok(sources) => sources,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let show_headers = sources.len() > 1;
    let mut failed = false;
    for source in sources.iter() {
        let translation = match Translation::try_from(source.content) {
            Ok(translation) => translation,
            Err(err) => {
                eprintln!("error: {}: {}", source.display_name(), err);
                failed = true;
                continue;
            }
        };

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
        if !translation.is_valid() {
            failed = true;
        }

        // Recovery leaves a partial tree behind, so dump it even on errors.
        if show_headers {
            println!("# {}", source.display_name());
        }
        if args.json {
            print_json(translation.file());
        } else {
            print!("{}", translation.file().dump());
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn print_json(file: &goflow_lib::parser::SourceFile) {
    match serde_json::to_string_pretty(file) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("error: failed to serialize: {}", err);
            std::process::exit(1);
        }
    }
}
