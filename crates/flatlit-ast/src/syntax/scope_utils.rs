//! Scope utilities for statement-level rewrites.
//!
//! A "scope" here is the nearest construct owning an ordered statement
//! list (`Program` or `BlockStatement`). Rewrites splice new statements
//! into that list next to an anchor statement and then call
//! `rebuild_parent_links` before anything queries parents again.

use rustc_hash::FxHashSet;

use crate::ast::{NodeArena, NodeIndex};

/// Find the nearest ancestor of `statement` that owns a statement list.
///
/// Returns `NodeIndex::NONE` when the statement is detached or has no such
/// ancestor.
#[must_use]
pub fn get_enclosing_scope(arena: &NodeArena, statement: NodeIndex) -> NodeIndex {
    let mut current = arena.get_parent(statement);
    while current.is_some() {
        if arena
            .kind_of(current)
            .is_some_and(|kind| kind.owns_statement_list())
        {
            return current;
        }
        current = arena.get_parent(current);
    }
    NodeIndex::NONE
}

/// Splice `statements` into `scope`'s statement list immediately after
/// `anchor`.
///
/// Blocks inserted by later calls at the same anchor end up nearer the
/// anchor than earlier ones; each block keeps its own internal order.
/// Returns `false` (and changes nothing) if `anchor` is not a direct member
/// of the list.
pub fn insert_after(
    arena: &mut NodeArena,
    scope: NodeIndex,
    statements: &[NodeIndex],
    anchor: NodeIndex,
) -> bool {
    let Some(list) = arena.get_statement_list_mut(scope) else {
        return false;
    };
    let Some(position) = list.nodes.iter().position(|&stmt| stmt == anchor) else {
        tracing::trace!(
            scope = scope.0,
            anchor = anchor.0,
            "insert_after: anchor is not in the scope's statement list"
        );
        return false;
    };
    list.nodes
        .splice(position + 1..position + 1, statements.iter().copied());

    for &stmt in statements {
        arena.set_parent(stmt, scope);
    }
    true
}

/// Recompute parent links for every node in the subtree rooted at `root`.
///
/// The parent of `root` itself is left as it is. A node reachable along
/// more than one path is walked once; its parent is the last one seen.
pub fn rebuild_parent_links(arena: &mut NodeArena, root: NodeIndex) {
    if arena.get(root).is_none() {
        return;
    }
    let mut visited = FxHashSet::default();
    let mut stack = vec![root];
    while let Some(parent) = stack.pop() {
        if !visited.insert(parent) {
            continue;
        }
        for child in arena.get_children(parent) {
            arena.set_parent(child, parent);
            stack.push(child);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/scope_utils_tests.rs"]
mod tests;
