//! Check Go sources for translation problems without emitting Flow.

use std::path::PathBuf;

use goflow_lib::Translation;

use super::source_loader::load_sources;

pub struct CheckArgs {
    pub inputs: Vec<PathBuf>,
    pub source_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let sources = match load_sources(&args.inputs, args.source_text.as_deref()) {
        Ok(sources) => sources,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let mut failed = false;
    for source in sources.iter() {
        match Translation::try_from(source.content) {
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
                if !translation.is_valid() {
                    failed = true;
                }
            }
            Err(err) => {
                eprintln!("error: {}: {}", source.display_name(), err);
                failed = true;
            }
        }
    }

    // Silent on success, like cargo check.
    if failed {
        std::process::exit(1);
    }
}
