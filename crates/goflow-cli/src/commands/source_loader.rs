//! Resolve CLI inputs into a source map: inline text, stdin (`-`), files,
//! and directories walked for `.go` files.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use goflow_lib::SourceMap;

pub fn load_sources(inputs: &[PathBuf], source_text: Option<&str>) -> Result<SourceMap, String> {
    let mut map = SourceMap::new();

    if let Some(text) = source_text {
        map.add_inline(text);
    }

    for path in inputs {
        if path.as_os_str() == "-" {
            load_stdin(&mut map)?;
        } else if path.is_dir() {
            load_directory(&mut map, path)?;
        } else {
            load_file(&mut map, path)?;
        }
    }

    if map.is_empty() {
        return Err("source is required: pass files, a directory, `-` for stdin, or -s/--source".into());
    }

    Ok(map)
}

fn load_stdin(map: &mut SourceMap) -> Result<(), String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    map.add_stdin(&buf);
    Ok(())
}

fn load_file(map: &mut SourceMap, path: &Path) -> Result<(), String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    map.add_file(&path.to_string_lossy(), &content);
    Ok(())
}

fn load_directory(map: &mut SourceMap, dir: &Path) -> Result<(), String> {
    let files = collect_go_files(dir)?;
    if files.is_empty() {
        return Err(format!("no .go files found in '{}'", dir.display()));
    }
    for file in files {
        load_file(map, &file)?;
    }
    Ok(())
}

// Recursive walk, sorted at each level for deterministic ordering.
fn collect_go_files(dir: &Path) -> Result<Vec<PathBuf>, String> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| format!("failed to read directory '{}': {}", dir.display(), e))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .collect();
    entries.sort();

    let mut files = Vec::new();
    for path in entries {
        if path.is_dir() {
            files.extend(collect_go_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "go") {
            files.push(path);
        }
    }
    Ok(files)
}
