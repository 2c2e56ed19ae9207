//! Tests for ESTree JSON import.
use super::*;
use crate::ast::NodeKind;
use serde_json::json;

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

#[test]
fn imports_variable_declaration_with_object_literal() {
    let doc = json!({
        "type": "Program",
        "body": [{
            "type": "VariableDeclaration",
            "kind": "var",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": ident("x"),
                "init": {
                    "type": "ObjectExpression",
                    "properties": [{
                        "type": "Property",
                        "key": ident("a"),
                        "value": { "type": "Literal", "value": 1, "raw": "1" },
                        "computed": false,
                        "shorthand": false,
                        "method": false,
                        "kind": "init"
                    }]
                }
            }]
        }]
    });

    let (arena, root) = from_estree(&doc).expect("import succeeds");
    assert_eq!(arena.kind_of(root), Some(NodeKind::Program));

    let stmt = arena.get_statement_list(root).expect("program body").nodes[0];
    assert_eq!(arena.get_parent(stmt), root);
    let Some(Node::VariableDeclaration(var)) = arena.get(stmt) else {
        panic!("expected variable declaration");
    };
    let decl = var.declarations.nodes[0];
    let declarator = arena.get_variable_declarator(decl).expect("declarator");
    assert_eq!(arena.identifier_text(declarator.id), Some("x"));

    let literal = arena.get_object_literal(declarator.init).expect("object literal");
    assert_eq!(literal.properties.len(), 1);
    let prop = arena
        .get_property(literal.properties.nodes[0])
        .expect("property");
    assert_eq!(prop.kind, PropertyKind::Init);
    let value = arena.get_literal(prop.value).expect("literal value");
    assert_eq!(value.value, LiteralValue::Number(1.0));
    assert_eq!(value.raw.as_deref(), Some("1"));
}

#[test]
fn array_holes_become_none() {
    let doc = json!({
        "type": "ArrayExpression",
        "elements": [null, { "type": "Literal", "value": "s", "raw": "\"s\"" }]
    });
    let (arena, root) = from_estree(&doc).expect("import succeeds");
    let children = arena.get_children(root);
    assert_eq!(children.len(), 1);
    assert!(arena.is_literal(children[0]));
}

#[test]
fn parenthesized_expression_is_unwrapped() {
    let doc = json!({
        "type": "ParenthesizedExpression",
        "expression": ident("inner")
    });
    let (arena, root) = from_estree(&doc).expect("import succeeds");
    assert_eq!(arena.identifier_text(root), Some("inner"));
}

#[test]
fn unknown_node_type_is_reported() {
    let doc = json!({
        "type": "Program",
        "body": [{ "type": "ClassDeclaration", "id": ident("C"), "body": { "type": "ClassBody", "body": [] } }]
    });
    let err = from_estree(&doc).expect_err("classes are not modelled");
    let message = format!("{err:#}");
    assert!(
        message.contains("ClassDeclaration"),
        "error should name the node type, got: {message}"
    );
}

#[test]
fn regex_literal_is_rejected() {
    let doc = json!({
        "type": "Literal",
        "value": {},
        "raw": "/a/g",
        "regex": { "pattern": "a", "flags": "g" }
    });
    assert!(from_estree(&doc).is_err());
}

#[test]
fn missing_required_field_is_an_error() {
    let doc = json!({ "type": "ExpressionStatement" });
    let err = from_estree(&doc).expect_err("expression is required");
    assert!(format!("{err:#}").contains("expression"));
}

#[test]
fn invalid_json_text_is_an_error() {
    assert!(from_estree_str("{ not json").is_err());
}

fn number(value: f64) -> Value {
    json!({ "type": "Literal", "value": value })
}

#[test]
fn imports_loops_and_jumps() {
    let doc = json!({
        "type": "ForStatement",
        "init": {
            "type": "VariableDeclaration",
            "kind": "let",
            "declarations": [{ "type": "VariableDeclarator", "id": ident("i"), "init": number(0.0) }]
        },
        "test": null,
        "update": { "type": "UpdateExpression", "operator": "++", "prefix": false, "argument": ident("i") },
        "body": {
            "type": "WhileStatement",
            "test": ident("c"),
            "body": {
                "type": "BlockStatement",
                "body": [
                    { "type": "BreakStatement", "label": null },
                    { "type": "ContinueStatement", "label": ident("outer") },
                    { "type": "EmptyStatement" },
                    { "type": "ThrowStatement", "argument": ident("e") }
                ]
            }
        }
    });

    let (arena, root) = from_estree(&doc).expect("import succeeds");
    let Some(Node::ForStatement(for_stmt)) = arena.get(root) else {
        panic!("expected for statement");
    };
    assert_eq!(arena.kind_of(for_stmt.init), Some(NodeKind::VariableDeclaration));
    assert!(for_stmt.test.is_none());
    let Some(Node::UpdateExpression(update)) = arena.get(for_stmt.update) else {
        panic!("expected update expression");
    };
    assert_eq!(update.operator, "++");
    assert!(!update.prefix);

    let Some(Node::WhileStatement(while_stmt)) = arena.get(for_stmt.body) else {
        panic!("expected while statement");
    };
    assert_eq!(arena.get_parent(for_stmt.body), root);
    let kinds: Vec<_> = arena
        .get_statement_list(while_stmt.body)
        .expect("loop body")
        .iter()
        .filter_map(|stmt| arena.kind_of(stmt))
        .collect();
    assert_eq!(
        kinds,
        [
            NodeKind::BreakStatement,
            NodeKind::ContinueStatement,
            NodeKind::EmptyStatement,
            NodeKind::ThrowStatement,
        ]
    );
}

#[test]
fn imports_operator_expressions() {
    let doc = json!({
        "type": "SequenceExpression",
        "expressions": [
            { "type": "UnaryExpression", "operator": "typeof", "prefix": true, "argument": ident("x") },
            {
                "type": "ConditionalExpression",
                "test": ident("t"),
                "consequent": number(1.0),
                "alternate": number(2.0)
            },
            {
                "type": "NewExpression",
                "callee": ident("Map"),
                "arguments": [ident("entries")]
            }
        ]
    });

    let (arena, root) = from_estree(&doc).expect("import succeeds");
    let children = arena.get_children(root);
    assert_eq!(children.len(), 3);

    let Some(Node::UnaryExpression(unary)) = arena.get(children[0]) else {
        panic!("expected unary expression");
    };
    assert_eq!(unary.operator, "typeof");
    assert!(unary.prefix);
    assert_eq!(
        arena.kind_of(children[1]),
        Some(NodeKind::ConditionalExpression)
    );
    let Some(Node::NewExpression(new_expr)) = arena.get(children[2]) else {
        panic!("expected new expression");
    };
    assert_eq!(arena.identifier_text(new_expr.callee), Some("Map"));
    assert_eq!(new_expr.arguments.len(), 1);
}

#[test]
fn template_literal_keeps_raw_quasis() {
    let doc = json!({
        "type": "TemplateLiteral",
        "quasis": [
            { "type": "TemplateElement", "value": { "raw": "a\\n", "cooked": "a\n" }, "tail": false },
            { "type": "TemplateElement", "value": { "raw": "!", "cooked": "!" }, "tail": true }
        ],
        "expressions": [ident("name")]
    });

    let (arena, root) = from_estree(&doc).expect("import succeeds");
    let Some(Node::TemplateLiteral(template)) = arena.get(root) else {
        panic!("expected template literal");
    };
    assert_eq!(template.quasis, ["a\\n", "!"]);
    assert_eq!(template.expressions.len(), 1);
    assert_eq!(arena.get_parent(template.expressions.nodes[0]), root);
}

#[test]
fn template_literal_with_mismatched_quasis_is_rejected() {
    let doc = json!({
        "type": "TemplateLiteral",
        "quasis": [{ "type": "TemplateElement", "value": { "raw": "a" }, "tail": true }],
        "expressions": [ident("name")]
    });
    let err = from_estree(&doc).expect_err("quasis must outnumber expressions by one");
    assert!(format!("{err:#}").contains("1 quasis for 1 expressions"));
}

fn nested_blocks(levels: usize) -> Value {
    let mut doc = json!({ "type": "EmptyStatement" });
    for _ in 0..levels {
        doc = json!({ "type": "BlockStatement", "body": [doc] });
    }
    doc
}

#[test]
fn in_memory_document_deeper_than_limit_is_rejected() {
    // Debug-build frames are large; give the recursive import room.
    let handle = std::thread::Builder::new()
        .stack_size(32 * 1024 * 1024)
        .spawn(|| {
            let doc = nested_blocks(MAX_ESTREE_DEPTH as usize + 10);
            from_estree(&doc).map(|_| ()).map_err(|err| format!("{err:#}"))
        })
        .expect("spawn import thread");
    let message = handle.join().expect("import thread").expect_err("too deep");
    assert!(message.contains("nested deeper than"), "{message}");
}

#[test]
fn in_memory_document_within_limit_imports() {
    let doc = nested_blocks(50);
    let (arena, root) = from_estree(&doc).expect("import succeeds");
    assert_eq!(arena.kind_of(root), Some(NodeKind::BlockStatement));
}

#[test]
fn deeply_nested_text_fails_as_invalid_json() {
    let levels = 200;
    let mut text = String::new();
    for _ in 0..levels {
        text.push_str(r#"{"type":"BlockStatement","body":["#);
    }
    text.push_str(r#"{"type":"EmptyStatement"}"#);
    for _ in 0..levels {
        text.push_str("]}");
    }

    let err = from_estree_str(&text).expect_err("recursion limit");
    assert!(format!("{err:#}").contains("not valid JSON"));
}
