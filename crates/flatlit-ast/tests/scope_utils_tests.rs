//! Tests for enclosing-scope lookup, statement insertion and parent rebuilding.
use super::*;
use crate::ast::NodeList;

fn expr_stmt(arena: &mut NodeArena, name: &str) -> NodeIndex {
    let id = arena.add_identifier(name);
    arena.add_expression_statement(id)
}

fn statement_names(arena: &NodeArena, scope: NodeIndex) -> Vec<String> {
    arena
        .get_statement_list(scope)
        .expect("scope has a statement list")
        .iter()
        .map(|stmt| {
            let expr = arena
                .get_expression_statement(stmt)
                .expect("expression statement")
                .expression;
            arena.identifier_text(expr).unwrap_or("?").to_string()
        })
        .collect()
}

#[test]
fn enclosing_scope_of_top_level_statement_is_program() {
    let mut arena = NodeArena::new();
    let stmt = expr_stmt(&mut arena, "a");
    let program = arena.add_program(vec![stmt]);
    assert_eq!(get_enclosing_scope(&arena, stmt), program);
}

#[test]
fn enclosing_scope_skips_non_list_owners() {
    let mut arena = NodeArena::new();
    let inner = expr_stmt(&mut arena, "a");
    let test = arena.add_identifier("c");
    let if_stmt = arena.add_if(test, inner, NodeIndex::NONE);
    let block = arena.add_block(vec![if_stmt]);
    let _program = arena.add_program(vec![block]);

    assert_eq!(get_enclosing_scope(&arena, inner), block);
    assert_eq!(get_enclosing_scope(&arena, if_stmt), block);
}

#[test]
fn enclosing_scope_of_detached_statement_is_none() {
    let mut arena = NodeArena::new();
    let stmt = expr_stmt(&mut arena, "a");
    assert!(get_enclosing_scope(&arena, stmt).is_none());
}

#[test]
fn insert_after_places_block_right_after_anchor() {
    let mut arena = NodeArena::new();
    let a = expr_stmt(&mut arena, "a");
    let z = expr_stmt(&mut arena, "z");
    let program = arena.add_program(vec![a, z]);

    let b = expr_stmt(&mut arena, "b");
    let c = expr_stmt(&mut arena, "c");
    assert!(insert_after(&mut arena, program, &[b, c], a));

    assert_eq!(statement_names(&arena, program), ["a", "b", "c", "z"]);
    assert_eq!(arena.get_parent(b), program);
}

#[test]
fn later_insertions_land_nearer_the_anchor() {
    let mut arena = NodeArena::new();
    let anchor = expr_stmt(&mut arena, "anchor");
    let program = arena.add_program(vec![anchor]);

    let first = expr_stmt(&mut arena, "first");
    let first_tail = expr_stmt(&mut arena, "first_tail");
    assert!(insert_after(&mut arena, program, &[first, first_tail], anchor));

    let second = expr_stmt(&mut arena, "second");
    assert!(insert_after(&mut arena, program, &[second], anchor));

    assert_eq!(
        statement_names(&arena, program),
        ["anchor", "second", "first", "first_tail"]
    );
}

#[test]
fn insert_after_rejects_anchor_outside_list() {
    let mut arena = NodeArena::new();
    let inner = expr_stmt(&mut arena, "inner");
    let test = arena.add_identifier("c");
    let if_stmt = arena.add_if(test, inner, NodeIndex::NONE);
    let program = arena.add_program(vec![if_stmt]);

    let extra = expr_stmt(&mut arena, "extra");
    assert!(!insert_after(&mut arena, program, &[extra], inner));
    assert_eq!(
        arena.get_statement_list(program).map(NodeList::len),
        Some(1)
    );
}

#[test]
fn rebuild_parent_links_repairs_moved_nodes() {
    let mut arena = NodeArena::new();
    let value = arena.add_object_literal(vec![]);
    let key = arena.add_identifier("a");
    let prop = arena.add_property(key, value, false);
    let _obj = arena.add_object_literal(vec![prop]);

    let x = arena.add_identifier("x");
    let member_key = arena.add_string_literal("a");
    let member = arena.add_member_access(x, member_key, true);
    let assign = arena.add_assignment("=", member, value);
    let stmt = arena.add_expression_statement(assign);
    let program = arena.add_program(vec![stmt]);

    // Builders already re-parented `value`; make it stale to check the rebuild.
    arena.set_parent(value, prop);
    rebuild_parent_links(&mut arena, program);

    assert_eq!(arena.get_parent(value), assign);
    assert_eq!(arena.get_parent(stmt), program);
    assert!(arena.get_parent(program).is_none());
}
