use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the flatlit binary.
#[derive(Parser, Debug)]
#[command(
    name = "flatlit",
    version,
    about = "Flatten JavaScript object literals into per-property assignments"
)]
pub struct CliArgs {
    /// ESTree JSON document to rewrite.
    pub input: PathBuf,

    /// Write the rewritten JavaScript here instead of stdout.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// JSON file with flattening options (`flattenAccessors`, `maxNestingDepth`).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Keep getters, setters and methods inside the object literal.
    #[arg(long = "no-accessors")]
    pub no_accessors: bool,

    /// Flatten at most this many nested object levels below the top level.
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<u32>,

    /// Print extraction counts to stderr after rewriting.
    #[arg(long)]
    pub summary: bool,

    /// Print the resolved options as JSON and exit.
    #[arg(long = "show-config", alias = "showConfig")]
    pub show_config: bool,
}
