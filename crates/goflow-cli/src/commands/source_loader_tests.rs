//! Tests for CLI source loading.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::source_loader::load_sources;

#[test]
fn inline_text_only() {
    let map = load_sources(&[], Some("type A int")).unwrap();

    assert_eq!(map.len(), 1);
    let source = map.iter().next().unwrap();
    assert_eq!(source.display_name(), "<inline>");
    assert_eq!(source.content, "type A int");
}

#[test]
fn missing_input_is_an_error() {
    let err = load_sources(&[], None).unwrap_err();
    assert!(err.contains("source is required"), "{err}");
}

#[test]
fn single_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("types.go");
    fs::write(&path, "type User struct {}").unwrap();

    let map = load_sources(&[path.clone()], None).unwrap();

    assert_eq!(map.len(), 1);
    let source = map.iter().next().unwrap();
    assert_eq!(source.display_name(), path.to_string_lossy());
    assert_eq!(source.content, "type User struct {}");
}

#[test]
fn missing_file_reports_path() {
    let err = load_sources(&[PathBuf::from("no/such/file.go")], None).unwrap_err();
    assert!(err.contains("no/such/file.go"), "{err}");
}

#[test]
fn directory_walk_is_recursive_and_sorted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b.go"), "type B int").unwrap();
    fs::write(dir.path().join("a.go"), "type A int").unwrap();
    fs::write(dir.path().join("notes.txt"), "not go").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub").join("c.go"), "type C int").unwrap();

    let map = load_sources(&[dir.path().to_path_buf()], None).unwrap();

    let names: Vec<String> = map
        .iter()
        .map(|source| source.display_name().to_owned())
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names[0].ends_with("a.go"), "{names:?}");
    assert!(names[1].ends_with("b.go"), "{names:?}");
    assert!(names[2].ends_with("c.go"), "{names:?}");
}

#[test]
fn empty_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_sources(&[dir.path().to_path_buf()], None).unwrap_err();
    assert!(err.contains("no .go files"), "{err}");
}

#[test]
fn inline_comes_before_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("types.go");
    fs::write(&path, "type B int").unwrap();

    let map = load_sources(&[path], Some("type A int")).unwrap();

    let names: Vec<&str> = map.iter().map(|source| source.display_name()).collect();
    assert_eq!(names[0], "<inline>");
    assert!(names[1].ends_with("types.go"));
}
