//! Read an ESTree document, flatten its object literals, print JavaScript.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use flatlit_ast::estree::from_estree_str;
use flatlit_transforms::{ExtractionSummary, FlattenOptions, NodePrinter, ObjectExtractionPass};

/// Counts reported by `--summary`, serialized as one JSON line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub candidates: usize,
    pub rewritten: usize,
    pub ineligible: usize,
    pub statements_inserted: usize,
}

impl From<ExtractionSummary> for SummaryReport {
    fn from(summary: ExtractionSummary) -> Self {
        SummaryReport {
            candidates: summary.candidates,
            rewritten: summary.rewritten,
            ineligible: summary.ineligible,
            statements_inserted: summary.statements_inserted,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RewriteOutput {
    pub javascript: String,
    pub summary: SummaryReport,
}

/// Rewrite ESTree JSON text and return the printed program.
pub fn rewrite_source(estree_json: &str, options: &FlattenOptions) -> Result<RewriteOutput> {
    let (mut arena, root) = from_estree_str(estree_json).context("failed to import ESTree")?;
    tracing::debug!(nodes = arena.len(), "imported ESTree document");

    let summary = ObjectExtractionPass::new(&mut arena, options).run(root);
    let mut javascript = NodePrinter::emit_to_string(&arena, root);
    if !javascript.is_empty() {
        javascript.push('\n');
    }

    Ok(RewriteOutput {
        javascript,
        summary: summary.into(),
    })
}

/// Rewrite the file at `input`. With `output`, the JavaScript is written
/// there as well.
pub fn rewrite_file(
    input: &Path,
    output: Option<&Path>,
    options: &FlattenOptions,
) -> Result<RewriteOutput> {
    let source = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read input: {}", input.display()))?;
    let result = rewrite_source(&source, options)
        .with_context(|| format!("failed to rewrite {}", input.display()))?;

    if let Some(path) = output {
        std::fs::write(path, &result.javascript)
            .with_context(|| format!("failed to write output: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote rewritten program");
    }
    Ok(result)
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
