use crate::parser::lexer::{lex, token_text};

/// Format the token stream as one `Kind "text"` line per token.
fn snapshot(input: &str) -> String {
    let tokens = lex(input);
    let mut out = String::new();
    for token in tokens {
        out.push_str(&format!(
            "{:?} {:?}\n",
            token.kind,
            token_text(input, &token)
        ));
    }
    out
}

#[test]
fn keywords() {
    insta::assert_snapshot!(snapshot("package import type struct map func interface chan const var"), @r#"
    Package "package"
    Import "import"
    Type "type"
    Struct "struct"
    Map "map"
    Func "func"
    Interface "interface"
    Chan "chan"
    Const "const"
    Var "var"
    "#);
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("* [ ] { } ( ) . , ; = <-"), @r#"
    Star "*"
    LBracket "["
    RBracket "]"
    LBrace "{"
    RBrace "}"
    LParen "("
    RParen ")"
    Dot "."
    Comma ","
    Semi ";"
    Eq "="
    Arrow "<-"
    "#);
}

#[test]
fn identifiers() {
    insta::assert_snapshot!(snapshot("User snake_case _private x9"), @r#"
    Ident "User"
    Ident "snake_case"
    Ident "_private"
    Ident "x9"
    "#);
}

#[test]
fn keyword_prefixes_are_identifiers() {
    insta::assert_snapshot!(snapshot("types mapKey structure"), @r#"
    Ident "types"
    Ident "mapKey"
    Ident "structure"
    "#);
}

#[test]
fn interpreted_strings() {
    insta::assert_snapshot!(snapshot(r#""id" "a\tb" """#), @r#"
    String "\"id\""
    String "\"a\\tb\""
    String "\"\""
    "#);
}

#[test]
fn raw_strings() {
    insta::assert_snapshot!(snapshot(r#"`json:"id,omitempty"`"#), @r#"RawString "`json:\"id,omitempty\"`""#);
}

#[test]
fn int_literals() {
    insta::assert_snapshot!(snapshot("3 0x1F 0b1010 0o17 1_000"), @r#"
    Int "3"
    Int "0x1F"
    Int "0b1010"
    Int "0o17"
    Int "1_000"
    "#);
}

#[test]
fn line_comment_skipped_newline_still_counts() {
    insta::assert_snapshot!(snapshot("int // trailing\nint"), @r#"
    Ident "int"
    Semi ""
    Ident "int"
    "#);
}

#[test]
fn line_comment_at_end_of_input() {
    insta::assert_snapshot!(snapshot("type A int // tail"), @r#"
    Type "type"
    Ident "A"
    Ident "int"
    "#);
}

#[test]
fn semicolon_inserted_after_identifier() {
    insta::assert_snapshot!(snapshot("type A string\ntype B bool"), @r#"
    Type "type"
    Ident "A"
    Ident "string"
    Semi ""
    Type "type"
    Ident "B"
    Ident "bool"
    "#);
}

#[test]
fn semicolon_inserted_after_closers() {
    insta::assert_snapshot!(snapshot(")\n]\n}\n"), @r#"
    RParen ")"
    Semi ""
    RBracket "]"
    Semi ""
    RBrace "}"
    Semi ""
    "#);
}

#[test]
fn no_semicolon_after_punctuation() {
    insta::assert_snapshot!(snapshot("{\n,\n=\n"), @r#"
    LBrace "{"
    Comma ","
    Eq "="
    "#);
}

#[test]
fn no_semicolon_after_keyword() {
    insta::assert_snapshot!(snapshot("struct\n{"), @r#"
    Struct "struct"
    LBrace "{"
    "#);
}

#[test]
fn multiline_block_comment_counts_as_newline() {
    insta::assert_snapshot!(snapshot("A /* x\ny */ B"), @r#"
    Ident "A"
    Semi ""
    Ident "B"
    "#);
}

#[test]
fn inline_block_comment_dropped() {
    insta::assert_snapshot!(snapshot("A /* x */ B"), @r#"
    Ident "A"
    Ident "B"
    "#);
}

#[test]
fn carriage_return_is_whitespace() {
    insta::assert_snapshot!(snapshot("A\r\nB"), @r#"
    Ident "A"
    Semi ""
    Ident "B"
    "#);
}

#[test]
fn error_coalescing() {
    insta::assert_snapshot!(snapshot("type ^$% A"), @r#"
    Type "type"
    Garbage "^$%"
    Ident "A"
    "#);
}

#[test]
fn error_at_end() {
    insta::assert_snapshot!(snapshot("A ???"), @r#"
    Ident "A"
    Garbage "???"
    "#);
}

#[test]
fn error_runs_merge_across_whitespace() {
    insta::assert_snapshot!(snapshot("^^ ^^"), @r#"Garbage "^^ ^^""#);
}

#[test]
fn channel_receive_arrow() {
    insta::assert_snapshot!(snapshot("<-chan int"), @r#"
    Arrow "<-"
    Chan "chan"
    Ident "int"
    "#);
}

#[test]
fn struct_declaration() {
    insta::assert_snapshot!(snapshot("type User struct {\n\tID int `json:\"id\"`\n}"), @r#"
    Type "type"
    Ident "User"
    Struct "struct"
    LBrace "{"
    Ident "ID"
    Ident "int"
    RawString "`json:\"id\"`"
    Semi ""
    RBrace "}"
    "#);
}

#[test]
fn empty_input() {
    insta::assert_snapshot!(snapshot(""), @"");
}
