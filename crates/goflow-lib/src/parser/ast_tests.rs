use super::ast::{TypeDecl, TypeExpr};
use super::span::Span;
use crate::Translation;

#[test]
fn exportedness_follows_name_casing() {
    let decl = |name: &str| TypeDecl {
        name: name.to_string(),
        span: Span::empty(0),
        ty: TypeExpr::Ident {
            qualifier: None,
            name: "int".to_string(),
        },
    };

    assert!(decl("User").exported());
    assert!(!decl("user").exported());
    assert!(!decl("_User").exported());
    assert!(decl("Ära").exported());
}

#[test]
fn anonymous_fields_have_no_names() {
    let translation = Translation::expect_valid("type T struct { Base; X int }");
    let TypeExpr::Struct { fields } = &translation.file().decls[0].ty else {
        panic!("expected a struct declaration");
    };

    assert!(fields[0].is_anonymous());
    assert!(!fields[1].is_anonymous());
}

#[test]
fn alias_json_serialization() {
    let translation = Translation::expect_valid("type Id int");
    let json = serde_json::to_string_pretty(translation.file()).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "package": null,
      "decls": [
        {
          "name": "Id",
          "span": {
            "start": 5,
            "end": 7
          },
          "ty": {
            "Ident": {
              "qualifier": null,
              "name": "int"
            }
          }
        }
      ]
    }
    "#);
}

#[test]
fn struct_json_serialization() {
    let translation = Translation::expect_valid(r#"type T struct { Base; X int `json:"x"` }"#);
    let json = serde_json::to_string_pretty(translation.file()).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "package": null,
      "decls": [
        {
          "name": "T",
          "span": {
            "start": 5,
            "end": 6
          },
          "ty": {
            "Struct": {
              "fields": [
                {
                  "names": [],
                  "ty": {
                    "Ident": {
                      "qualifier": null,
                      "name": "Base"
                    }
                  },
                  "tag": null,
                  "span": {
                    "start": 16,
                    "end": 20
                  }
                },
                {
                  "names": [
                    "X"
                  ],
                  "ty": {
                    "Ident": {
                      "qualifier": null,
                      "name": "int"
                    }
                  },
                  "tag": "json:\"x\"",
                  "span": {
                    "start": 22,
                    "end": 38
                  }
                }
              ]
            }
          }
        }
      ]
    }
    "#);
}
