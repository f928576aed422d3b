//! Tests for the [`Translation`] facade, plus the assertion helpers
//! shared by the other test modules in this crate.

use crate::Translation;
use crate::flow::Config;

impl<'a> Translation<'a> {
    #[track_caller]
    pub fn expect(source: &'a str) -> Self {
        match Translation::try_from(source) {
            Ok(translation) => translation,
            Err(err) => panic!("Translation failed: {err}"),
        }
    }

    #[track_caller]
    pub fn expect_valid(source: &'a str) -> Self {
        let translation = Self::expect(source);
        if !translation.is_valid() {
            panic!(
                "Expected valid translation, got error:\n{}",
                translation.dump_diagnostics()
            );
        }
        translation
    }

    /// Parses `source` and returns the tree dump, panicking on errors.
    #[track_caller]
    pub fn expect_valid_tree(source: &'a str) -> String {
        Self::expect_valid(source).file().dump()
    }

    /// Translates `source` and returns the Flow text, panicking on errors.
    #[track_caller]
    pub fn expect_valid_flow(source: &'a str) -> String {
        Self::expect_valid(source).flow().to_string()
    }

    /// Translates `source`, panicking unless it produced errors, and
    /// returns the rendered diagnostics.
    #[track_caller]
    pub fn expect_invalid(source: &'a str) -> String {
        let translation = Self::expect(source);
        if translation.is_valid() {
            panic!(
                "Expected invalid translation, got valid:\n{}",
                translation.file().dump()
            );
        }
        translation.dump_diagnostics()
    }

    pub fn dump_diagnostics(&self) -> String {
        self.diagnostics().render(self.source())
    }
}

#[test]
fn try_from_str() {
    let translation = Translation::try_from("type Name string").unwrap();

    assert!(translation.is_valid());
    assert_eq!(translation.flow(), "export type Name = string;\n\n");
}

#[test]
fn try_from_string() {
    let source = String::from("type Count int");
    let translation = Translation::try_from(&source).unwrap();

    assert_eq!(translation.flow(), "export type Count = number;\n\n");
}

#[test]
fn accessors_expose_all_stages() {
    let input = "type User struct { ID string `json:\"id\"` }";
    let translation = Translation::expect_valid(input);

    assert_eq!(translation.source(), input);
    assert_eq!(translation.file().decls.len(), 1);
    assert_eq!(translation.file().decls[0].name, "User");
    assert!(translation.flow().contains("id: string"));
}

#[test]
fn with_config_controls_the_header() {
    let config = Config::default().export(false).pragma(true);
    let translation = Translation::with_config("type A int", config).unwrap();

    assert_eq!(translation.flow(), "// @flow\n\ntype A = number;\n\n");
}

#[test]
fn warnings_do_not_invalidate() {
    let input = "type T struct { **Base; N int `json:\"n\"` }";
    let translation = Translation::expect_valid(input);

    let diagnostics = translation.diagnostics();
    assert_eq!(diagnostics.error_count(), 0);
    assert_eq!(diagnostics.warning_count(), 1);

    insta::assert_snapshot!(translation.dump_diagnostics(), @r#"
    warning: embedded field has no named type
      |
    1 | type T struct { **Base; N int `json:"n"` }
      |                 ^^^^^^
      |
    help: only a named type, or a pointer to one, can be embedded
    "#);
}

#[test]
fn parse_diagnostics_come_before_lowering() {
    let input = "type T struct { **Base; N int `json:\"n\"` }\ntype 3 int";
    let translation = Translation::expect(input);

    assert!(!translation.is_valid());

    let diagnostics = translation.diagnostics();
    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 48..49: expected a type name
    warning at 16..22: embedded field has no named type (hint: only a named type, or a pointer to one, can be embedded)
    ");
}

#[test]
fn broken_input_still_produces_flow() {
    let input = "type T struct { A int `json:\"a\"`";
    let translation = Translation::expect(input);

    assert!(!translation.is_valid());
    assert_eq!(translation.flow(), "export type T = {\n  a: number,\n}\n\n");
}
