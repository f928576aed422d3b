use super::types::{embedded_name, flow_type, is_nullable};
use crate::parser::TypeExpr;

fn ident(name: &str) -> TypeExpr {
    TypeExpr::Ident {
        qualifier: None,
        name: name.to_string(),
    }
}

fn qualified(qualifier: &str, name: &str) -> TypeExpr {
    TypeExpr::Ident {
        qualifier: Some(qualifier.to_string()),
        name: name.to_string(),
    }
}

fn pointer(inner: TypeExpr) -> TypeExpr {
    TypeExpr::Pointer {
        inner: Box::new(inner),
    }
}

fn array(element: TypeExpr) -> TypeExpr {
    TypeExpr::Array {
        element: Box::new(element),
    }
}

fn map(key: TypeExpr, value: TypeExpr) -> TypeExpr {
    TypeExpr::Map {
        key: Box::new(key),
        value: Box::new(value),
    }
}

fn struct_literal() -> TypeExpr {
    TypeExpr::Struct { fields: Vec::new() }
}

#[test]
fn numeric_primitives_become_number() {
    let names = [
        "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32",
        "uint64", "uintptr", "float32", "float64", "byte", "rune",
    ];
    for name in names {
        assert_eq!(flow_type(&ident(name)).as_deref(), Some("number"), "{name}");
    }
}

#[test]
fn bool_and_string_primitives() {
    assert_eq!(flow_type(&ident("bool")).as_deref(), Some("boolean"));
    assert_eq!(flow_type(&ident("string")).as_deref(), Some("string"));
}

#[test]
fn named_types_pass_through() {
    assert_eq!(flow_type(&ident("User")).as_deref(), Some("User"));
    assert_eq!(flow_type(&ident("error")).as_deref(), Some("error"));
}

#[test]
fn qualifier_is_dropped() {
    assert_eq!(flow_type(&qualified("time", "Time")).as_deref(), Some("Time"));
}

#[test]
fn pointers_are_transparent_in_type_text() {
    assert_eq!(flow_type(&pointer(ident("int"))).as_deref(), Some("number"));
    assert_eq!(
        flow_type(&pointer(pointer(ident("User")))).as_deref(),
        Some("User")
    );
}

#[test]
fn arrays() {
    assert_eq!(
        flow_type(&array(ident("string"))).as_deref(),
        Some("Array<string>")
    );
    assert_eq!(
        flow_type(&array(array(ident("int")))).as_deref(),
        Some("Array<Array<number>>")
    );
}

#[test]
fn maps() {
    assert_eq!(
        flow_type(&map(ident("string"), ident("int"))).as_deref(),
        Some("{[string]: number}")
    );
    assert_eq!(
        flow_type(&map(ident("string"), array(pointer(ident("User"))))).as_deref(),
        Some("{[string]: Array<User>}")
    );
}

#[test]
fn struct_literals_have_no_type_text() {
    assert_eq!(flow_type(&struct_literal()), None);
    assert_eq!(flow_type(&array(struct_literal())), None);
    assert_eq!(flow_type(&map(ident("string"), struct_literal())), None);
}

#[test]
fn nullability_is_top_level_only() {
    assert!(is_nullable(&pointer(ident("int"))));
    assert!(!is_nullable(&ident("int")));
    assert!(!is_nullable(&array(pointer(ident("int")))));
}

#[test]
fn embedded_names_reach_through_one_pointer() {
    assert_eq!(embedded_name(&ident("Base")), Some("Base"));
    assert_eq!(embedded_name(&qualified("pkg", "Base")), Some("Base"));
    assert_eq!(embedded_name(&pointer(ident("Base"))), Some("Base"));
    assert_eq!(embedded_name(&pointer(pointer(ident("Base")))), None);
    assert_eq!(embedded_name(&array(ident("Base"))), None);
}
