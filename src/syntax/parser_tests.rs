use super::*;

fn round_trip(source: &str) {
    let doc = parse(source).unwrap();
    assert_eq!(doc.to_string(), source);
}

fn first_at_rule(doc: &Document) -> (NodeId, AtRule) {
    let id = doc.at_rules()[0];
    (id, doc.node(id).as_at_rule().unwrap().clone())
}

#[test]
fn round_trips_common_stylesheets() {
    round_trip("");
    round_trip("   \n");
    round_trip("@import \"a\";\n@import \"b\";\n");
    round_trip("@import \"a\";@import \"b\"");
    round_trip("a { color: red; }\n");
    round_trip("a{color:red}");
    round_trip("a {\n  color : red ;\n  margin: 0\n}\n");
    round_trip("@media (min-width: 100px) {\n  a { color: red; }\n}\n");
    round_trip("/* header */\n@charset \"utf-8\";\n");
    round_trip("@import url(foo.css) screen;/* trailing */\n.a{}");
    round_trip("a { background: url(data:image/png;base64,AAA); }");
    round_trip("a[title='x;y'] { content: \"}\"; }");
    round_trip("@font-face{font-family:x}");
    round_trip("@import \"a\";;\n@import \"b\";");
}

#[test]
fn round_trips_crlf_sources() {
    let source = "@import \"a\";\r\n@import \"b\";\r\n";
    let doc = parse(source).unwrap();
    assert_eq!(doc.to_string(), source);
    assert_eq!(doc.newline(), "\r\n");
}

#[test]
fn parses_statement_at_rule() {
    let doc = parse("@import \"a\" screen ;").unwrap();
    let (id, at_rule) = first_at_rule(&doc);
    assert_eq!(at_rule.name, "import");
    assert_eq!(at_rule.params, "\"a\" screen");
    assert!(!at_rule.has_block);
    assert!(!at_rule.variable);
    assert!(!at_rule.mixin);

    let node = doc.node(id);
    assert_eq!(node.raws.after_name, " ");
    assert_eq!(node.raws.between, " ");
    assert!(doc.node(doc.root()).raws.semicolon);
}

#[test]
fn parses_block_at_rule_children() {
    let doc = parse("@media print {\n  @import \"x\";\n}").unwrap();
    let ids = doc.at_rules();
    assert_eq!(ids.len(), 2);

    let media = doc.node(ids[0]).as_at_rule().unwrap();
    assert_eq!(media.name, "media");
    assert_eq!(media.params, "print");
    assert!(media.has_block);
    assert_eq!(doc.parent(ids[1]), Some(ids[0]));
    assert_eq!(doc.node(ids[0]).raws.after, "\n");
    assert_eq!(doc.node(ids[1]).raws.before, "\n  ");
}

#[test]
fn render_excludes_before_and_terminator() {
    let doc = parse("\n@import \"a\";").unwrap();
    let (id, _) = first_at_rule(&doc);
    assert_eq!(doc.render(id), "@import \"a\"");
    assert_eq!(doc.raw_node_string(id), "\n@import \"a\"");
}

#[test]
fn parses_comments_with_inner_whitespace() {
    let doc = parse("/*  note */").unwrap();
    let id = doc.children(doc.root())[0];
    let node = doc.node(id);
    assert_eq!(
        node.kind,
        NodeKind::Comment {
            text: "note".to_string()
        }
    );
    assert_eq!(node.raws.left, "  ");
    assert_eq!(node.raws.right, " ");
}

#[test]
fn parses_empty_comment() {
    round_trip("/**/");
    round_trip("/*   */");
}

#[test]
fn parses_declarations() {
    let doc = parse("a { color : red ; }").unwrap();
    let rule = doc.children(doc.root())[0];
    let decl = doc.children(rule)[0];
    let node = doc.node(decl);
    assert_eq!(
        node.kind,
        NodeKind::Declaration {
            prop: "color".to_string(),
            value: "red".to_string()
        }
    );
    assert_eq!(node.raws.between, " : ");
    assert_eq!(node.raws.after, " ");
}

#[test]
fn parses_rule_selector() {
    let doc = parse("a:hover , b {}").unwrap();
    let rule = doc.children(doc.root())[0];
    assert_eq!(
        doc.node(rule).kind,
        NodeKind::Rule {
            selector: "a:hover , b".to_string()
        }
    );
    assert_eq!(doc.node(rule).raws.between, " ");
}

#[test]
fn last_statement_without_semicolon() {
    let doc = parse("a { color: red }").unwrap();
    let rule = doc.children(doc.root())[0];
    assert!(!doc.node(rule).raws.semicolon);
}

#[test]
fn parses_less_variable() {
    let doc = parse("@color: red;\na { color: @color; }").unwrap();
    let (_, at_rule) = first_at_rule(&doc);
    assert_eq!(at_rule.name, "color");
    assert_eq!(at_rule.params, "red");
    assert!(at_rule.variable);
    assert_eq!(doc.to_string(), "@color: red;\na { color: @color; }");
}

#[test]
fn parses_less_mixin_call() {
    let source = "a {\n  .border-radius(4px);\n  #ns.mixin();\n}";
    let doc = parse(source).unwrap();
    let ids = doc.at_rules();
    assert_eq!(ids.len(), 2);

    let first = doc.node(ids[0]).as_at_rule().unwrap();
    assert!(first.mixin);
    assert_eq!(first.name, "border-radius");
    assert_eq!(first.params, "(4px)");
    assert_eq!(doc.node(ids[0]).raws.identifier, ".");

    let second = doc.node(ids[1]).as_at_rule().unwrap();
    assert_eq!(second.name, "ns.mixin");
    assert_eq!(doc.node(ids[1]).raws.identifier, "#");
    assert_eq!(doc.to_string(), source);
}

#[test]
fn parses_detached_ruleset_call() {
    let doc = parse("@detached();").unwrap();
    let (id, at_rule) = first_at_rule(&doc);
    assert_eq!(at_rule.name, "detached");
    assert_eq!(at_rule.params, "()");
    assert_eq!(doc.node(id).raws.after_name, "");
}

#[test]
fn records_source_offsets() {
    let source = "a{}\n  @import \"x\";";
    let doc = parse(source).unwrap();
    let (id, _) = first_at_rule(&doc);
    assert_eq!(doc.node(id).source_offset(), Some(6));
    assert_eq!(doc.position(id, 0), Some(Position { line: 2, column: 3 }));
    assert_eq!(doc.position(id, 12), Some(Position { line: 2, column: 15 }));
}

#[test]
fn error_unclosed_block() {
    let err = parse("a {\n  color: red;\n").unwrap_err();
    assert_eq!(err, ParseError::UnclosedBlock(Position { line: 1, column: 3 }));
}

#[test]
fn error_unclosed_comment() {
    let err = parse("a {}\n/* open").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnclosedComment(Position { line: 2, column: 1 })
    );
}

#[test]
fn error_unclosed_string() {
    let err = parse("@import \"a;").unwrap_err();
    assert!(matches!(err, ParseError::UnclosedString(_)));
    assert_eq!(err.position(), Position { line: 1, column: 9 });
}

#[test]
fn error_unclosed_bracket() {
    let err = parse("@import url(a.css;").unwrap_err();
    assert!(matches!(err, ParseError::UnclosedBracket(_)));
}

#[test]
fn error_unexpected_close_brace() {
    let err = parse("a {}\n}").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedCloseBrace(Position { line: 2, column: 1 })
    );
    assert_eq!(err.to_string(), "Unexpected } at 2:1");
}

#[test]
fn error_unknown_word() {
    let err = parse("a { color }").unwrap_err();
    assert!(matches!(err, ParseError::UnknownWord(_)));
}
