//! Command-line driver for flatlit.
//!
//! - `args`: clap argument definitions
//! - `config`: option loading and CLI overrides
//! - `driver`: read, rewrite and print
//! - `tracing_config`: `FLATLIT_LOG` subscriber setup

pub mod args;
pub mod config;
pub mod driver;
pub mod tracing_config;
