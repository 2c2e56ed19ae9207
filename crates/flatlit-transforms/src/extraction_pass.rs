//! Extraction pass - applies object-literal flattening to a whole tree.
//!
//! The pass first walks the tree and records every object literal together
//! with its nearest enclosing statement, then hands the pairs to
//! `ObjectLiteralFlattener::extract` one at a time in source order. Each
//! call (nested levels included) finishes before the next begins, so
//! rewrites that share a scope never interleave.
//!
//! Candidates are collected before any mutation. Literals that end up
//! inside generated assignments (nested values of a flattened literal) are
//! still visited and are reported ineligible, since their parent is no
//! longer a declarator.

use flatlit_ast::ast::{NodeArena, NodeIndex};
use flatlit_common::limits::MAX_AST_DEPTH;

use crate::options::FlattenOptions;
use crate::transforms::object_extraction::{ExtractOutcome, ObjectLiteralFlattener};

/// Counts reported by `ObjectExtractionPass::run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractionSummary {
    /// Object literals found under the root.
    pub candidates: usize,
    /// Literals flattened by the rewrite.
    pub rewritten: usize,
    /// Literals left untouched.
    pub ineligible: usize,
    /// Assignment statements inserted across all rewrites.
    pub statements_inserted: usize,
}

pub struct ObjectExtractionPass<'a> {
    arena: &'a mut NodeArena,
    options: &'a FlattenOptions,
    /// Current recursion depth for stack overflow protection
    visit_depth: u32,
}

impl<'a> ObjectExtractionPass<'a> {
    pub fn new(arena: &'a mut NodeArena, options: &'a FlattenOptions) -> Self {
        ObjectExtractionPass {
            arena,
            options,
            visit_depth: 0,
        }
    }

    /// Flatten every eligible object literal under `root`.
    pub fn run(mut self, root: NodeIndex) -> ExtractionSummary {
        let mut candidates = Vec::new();
        self.collect(root, NodeIndex::NONE, &mut candidates);

        let mut summary = ExtractionSummary {
            candidates: candidates.len(),
            ..ExtractionSummary::default()
        };
        let mut flattener = ObjectLiteralFlattener::new(&mut *self.arena, self.options);
        for (literal, host_statement) in candidates {
            if host_statement.is_none() {
                summary.ineligible += 1;
                continue;
            }
            match flattener.extract(literal, host_statement).outcome {
                ExtractOutcome::Rewritten { statements } => {
                    summary.rewritten += 1;
                    summary.statements_inserted += statements;
                }
                ExtractOutcome::Ineligible(_) => summary.ineligible += 1,
            }
        }

        tracing::debug!(
            candidates = summary.candidates,
            rewritten = summary.rewritten,
            ineligible = summary.ineligible,
            statements = summary.statements_inserted,
            "[extraction] pass complete"
        );
        summary
    }

    /// Pre-order walk recording `(literal, host statement)` pairs.
    fn collect(
        &mut self,
        node: NodeIndex,
        host_statement: NodeIndex,
        out: &mut Vec<(NodeIndex, NodeIndex)>,
    ) {
        if self.visit_depth >= MAX_AST_DEPTH {
            tracing::warn!(
                node = node.0,
                "[extraction] AST deeper than {MAX_AST_DEPTH} levels, subtree skipped"
            );
            return;
        }

        let host_statement = if self.arena.is_statement(node) {
            node
        } else {
            host_statement
        };
        if self.arena.is_object_expression(node) {
            out.push((node, host_statement));
        }

        self.visit_depth += 1;
        for child in self.arena.get_children(node) {
            self.collect(child, host_statement, out);
        }
        self.visit_depth -= 1;
    }
}

#[cfg(test)]
#[path = "../tests/extraction_pass.rs"]
mod tests;
