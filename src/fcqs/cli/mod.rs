//! # CLI Layer
//!
//! The only place that knows about stdout, stderr, the environment and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap definitions and the version string (`setup`)
//! 2. **Request Selection**: argument count and title checks, before any file is opened
//! 3. **API Dispatch**: one `FcqsApi` call per invocation (`commands`)
//! 4. **Diagnostics**: a `tracing` subscriber on stderr, filtered by `FCQS_LOG`
//!
//! Output is buffered and flushed even when the command fails, so whatever was found
//! before a read error still reaches the reader. A closed stdout (`fcqs | head -1`)
//! is not an error.

mod commands;
pub mod setup;

use clap::Parser;
use fcqs::config::LOG_ENV;
use fcqs::error::Result;
use setup::Cli;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = commands::dispatch(&cli, &mut out);
    let flushed = out.flush();

    match result.and(flushed.map_err(Into::into)) {
        Err(e) if e.is_broken_pipe() => Ok(()),
        other => other,
    }
}
