//! Logging filter helpers and CLI arguments.
//!
//! Diagnostics go to stderr via `tracing`; stdout carries only generated
//! text. Filter precedence follows the usual convention: an explicit
//! directive beats level flags, which beat `RUST_LOG`, which beats the
//! crate-scoped default.

use std::{env, io};

use clap::Args;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Logging controls for the CLI.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_level", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_level", "log_filter"])]
    pub debug: bool,

    /// Set a single global log level for our crates (error|warn|info|debug|trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Set an explicit tracing filter directive (overrides other flags)
    #[arg(long)]
    pub log_filter: Option<String>,
}

/// List of crate targets that constitute "our" logs.
fn our_crates() -> &'static [&'static str] {
    &["keygen", "chip8_keypad"]
}

/// Build a filter directive string that sets the same `level` for all of
/// our crates.
fn level_spec_for(level: &str) -> String {
    let lvl = level.to_ascii_lowercase();
    let parts: Vec<String> = our_crates().iter().map(|t| format!("{t}={lvl}")).collect();
    parts.join(",")
}

/// Compute the final filter spec string with precedence:
/// - `log_filter`
/// - `trace`/`debug`/`log_level` (crate-scoped)
/// - `RUST_LOG` env
/// - default to crate-scoped `info`
pub fn compute_spec(args: &LogArgs) -> String {
    if let Some(spec) = &args.log_filter {
        return spec.clone();
    }
    if args.trace {
        return level_spec_for("trace");
    }
    if args.debug {
        return level_spec_for("debug");
    }
    if let Some(lvl) = &args.log_level {
        return level_spec_for(lvl);
    }
    env::var("RUST_LOG").unwrap_or_else(|_| level_spec_for("info"))
}

/// Install the global subscriber: env filter plus compact stderr output
/// without timestamps.
pub fn init(args: &LogArgs) {
    let filter = EnvFilter::new(compute_spec(args));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();
}
