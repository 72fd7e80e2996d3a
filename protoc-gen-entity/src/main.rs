//! protoc-gen-entity - entity identifier accessor plugin for protoc.
//!
//! Reads a `CodeGeneratorRequest` from stdin and writes the
//! `CodeGeneratorResponse` to stdout.
//!
//! Parameters (`--entity_opt=`):
//! - `enforce=true` - every message must declare an identifier field
//! - `enforce-suffix=Event` - only messages ending in `Event` are scanned,
//!   and each of them must declare an identifier field
//!
//! Logs go to stderr. `RUST_LOG` controls the filter; setting `DEBUG` to any
//! non-empty value turns on debug output.

use anyhow::Context;
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut input = Vec::new();
    std::io::stdin()
        .read_to_end(&mut input)
        .context("failed to read request from stdin")?;
    tracing::debug!("read {} byte request", input.len());

    let output = entitygen_codegen::plugin::run(&input).context("invalid plugin request")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&output)
        .context("failed to write response to stdout")?;
    stdout.flush()?;

    Ok(())
}

fn init_tracing() {
    let debug = std::env::var("DEBUG").is_ok_and(|v| !v.is_empty());
    let default_level = if debug { "debug" } else { "warn" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
