use super::*;
use crate::printer::NodePrinter;
use flatlit_ast::ast::VariableKind;

fn var_decl(arena: &mut NodeArena, name: &str, init: NodeIndex) -> NodeIndex {
    let id = arena.add_identifier(name);
    let decl = arena.add_variable_declarator(id, init);
    arena.add_variable_declaration(VariableKind::Var, vec![decl])
}

fn object(arena: &mut NodeArena, entries: &[(&str, NodeIndex)]) -> NodeIndex {
    let properties = entries
        .iter()
        .map(|&(key, value)| {
            let key = arena.add_identifier(key);
            arena.add_property(key, value, false)
        })
        .collect();
    arena.add_object_literal(properties)
}

fn run(arena: &mut NodeArena, root: NodeIndex) -> ExtractionSummary {
    let options = FlattenOptions::default();
    ObjectExtractionPass::new(arena, &options).run(root)
}

fn render(arena: &NodeArena, node: NodeIndex) -> String {
    NodePrinter::emit_to_string(arena, node)
}

#[test]
fn pass_counts_every_object_literal() {
    let mut arena = NodeArena::new();
    let one = arena.add_numeric_literal(1.0);
    let inner = object(&mut arena, &[("b", one)]);
    let outer = object(&mut arena, &[("a", inner)]);
    let host = var_decl(&mut arena, "x", outer);
    let two = arena.add_numeric_literal(2.0);
    let argument = object(&mut arena, &[("c", two)]);
    let callee = arena.add_identifier("f");
    let call = arena.add_call(callee, vec![argument]);
    let call_stmt = arena.add_expression_statement(call);
    let program = arena.add_program(vec![host, call_stmt]);

    let summary = run(&mut arena, program);

    // The nested literal was flattened through its parent and is reported
    // ineligible on its own visit.
    assert_eq!(
        summary,
        ExtractionSummary {
            candidates: 3,
            rewritten: 1,
            ineligible: 2,
            statements_inserted: 2,
        }
    );
    assert_eq!(
        render(&arena, program),
        "var x = {};\nx[\"a\"] = {};\nx[\"a\"][\"b\"] = 1;\nf({ c: 1 });"
    );
}

#[test]
fn pass_rewrites_declarations_in_source_order() {
    let mut arena = NodeArena::new();
    let one = arena.add_numeric_literal(1.0);
    let first = object(&mut arena, &[("a", one)]);
    let first_host = var_decl(&mut arena, "x", first);
    let two = arena.add_numeric_literal(2.0);
    let second = object(&mut arena, &[("b", two)]);
    let second_host = var_decl(&mut arena, "y", second);
    let program = arena.add_program(vec![first_host, second_host]);

    let summary = run(&mut arena, program);

    assert_eq!(summary.rewritten, 2);
    assert_eq!(summary.statements_inserted, 2);
    assert_eq!(
        render(&arena, program),
        "var x = {};\nx[\"a\"] = 1;\nvar y = {};\ny[\"b\"] = 2;"
    );
}

#[test]
fn pass_reaches_function_bodies() {
    let mut arena = NodeArena::new();
    let one = arena.add_numeric_literal(1.0);
    let literal = object(&mut arena, &[("a", one)]);
    let host = var_decl(&mut arena, "y", literal);
    let y = arena.add_identifier("y");
    let ret = arena.add_return(y);
    let body = arena.add_block(vec![host, ret]);
    let name = arena.add_identifier("f");
    let function = arena.add_function_declaration(name, vec![], body);
    let program = arena.add_program(vec![function]);

    let summary = run(&mut arena, program);

    assert_eq!(summary.rewritten, 1);
    assert_eq!(
        render(&arena, program),
        "function f() {\n    var y = {};\n    y[\"a\"] = 1;\n    return y;\n}"
    );
}

#[test]
fn empty_literal_is_rewritten_without_statements() {
    let mut arena = NodeArena::new();
    let literal = arena.add_object_literal(vec![]);
    let host = var_decl(&mut arena, "e", literal);
    let program = arena.add_program(vec![host]);

    let summary = run(&mut arena, program);

    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.rewritten, 1);
    assert_eq!(summary.statements_inserted, 0);
    assert_eq!(render(&arena, program), "var e = {};");
}

#[test]
fn arrow_expression_body_is_left_alone() {
    let mut arena = NodeArena::new();
    let one = arena.add_numeric_literal(1.0);
    let literal = object(&mut arena, &[("a", one)]);
    let arrow = arena.add_arrow_function(vec![], literal, true);
    let host = var_decl(&mut arena, "g", arrow);
    let program = arena.add_program(vec![host]);

    let summary = run(&mut arena, program);

    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.ineligible, 1);
    assert_eq!(render(&arena, program), "var g = () => ({ a: 1 });");
}

#[test]
fn detached_literal_without_statement_is_ineligible() {
    let mut arena = NodeArena::new();
    let one = arena.add_numeric_literal(1.0);
    let literal = object(&mut arena, &[("a", one)]);

    let summary = run(&mut arena, literal);

    assert_eq!(summary.candidates, 1);
    assert_eq!(summary.ineligible, 1);
    assert_eq!(summary.rewritten, 0);
}

#[test]
fn second_run_changes_nothing() {
    let mut arena = NodeArena::new();
    let one = arena.add_numeric_literal(1.0);
    let inner = object(&mut arena, &[("b", one)]);
    let outer = object(&mut arena, &[("a", inner)]);
    let host = var_decl(&mut arena, "x", outer);
    let program = arena.add_program(vec![host]);

    run(&mut arena, program);
    let after_first = render(&arena, program);
    let summary = run(&mut arena, program);

    // The emptied top-level literal is eligible again but has nothing left.
    assert_eq!(summary.statements_inserted, 0);
    assert_eq!(render(&arena, program), after_first);
}
