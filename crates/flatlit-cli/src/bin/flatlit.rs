#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use flatlit_cli::args::CliArgs;
use flatlit_cli::{config, driver, tracing_config};

fn main() -> Result<()> {
    // Installs a subscriber only when FLATLIT_LOG or RUST_LOG is set.
    tracing_config::init_tracing();

    let args = CliArgs::parse();
    let options = config::resolve_options(&args)?;

    if args.show_config {
        let json =
            serde_json::to_string_pretty(&options).context("failed to serialize options")?;
        println!("{json}");
        return Ok(());
    }

    let result = driver::rewrite_file(&args.input, args.output.as_deref(), &options)?;
    if args.output.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(result.javascript.as_bytes())
            .context("failed to write to stdout")?;
    }

    if args.summary {
        let line = serde_json::to_string(&result.summary).context("failed to serialize summary")?;
        eprintln!("{line}");
    }
    Ok(())
}
