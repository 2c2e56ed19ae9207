//! Flattening options from a config file and command-line overrides.
//!
//! A config file is a JSON object with camelCase keys; every key is
//! optional:
//!
//! ```json
//! { "flattenAccessors": false, "maxNestingDepth": 8 }
//! ```
//!
//! Flags given on the command line win over the file.

use anyhow::{Context, Result};
use std::path::Path;

use flatlit_transforms::FlattenOptions;

use crate::args::CliArgs;

pub fn parse_options(source: &str) -> Result<FlattenOptions> {
    let options = serde_json::from_str(source).context("invalid flattening options")?;
    Ok(options)
}

pub fn load_options(path: &Path) -> Result<FlattenOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_options(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Options for this run: the config file (or defaults), then CLI flags.
pub fn resolve_options(args: &CliArgs) -> Result<FlattenOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => FlattenOptions::default(),
    };
    apply_cli_overrides(&mut options, args);
    tracing::debug!(?options, "resolved flattening options");
    Ok(options)
}

fn apply_cli_overrides(options: &mut FlattenOptions, args: &CliArgs) {
    if args.no_accessors {
        options.flatten_accessors = false;
    }
    if let Some(depth) = args.max_depth {
        options.max_nesting_depth = depth;
    }
}

#[cfg(test)]
#[path = "../tests/config_tests.rs"]
mod tests;
