//! readmegen CLI binary entry point
//!
//! Installs logging, then calls the library's `run_cli()` function.
//!
//! ```bash
//! # With debug logging
//! RUST_LOG=debug readmegen generate --sample
//! ```

use anyhow::Result;
use readmegen_cli::run_cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    run_cli()
}
