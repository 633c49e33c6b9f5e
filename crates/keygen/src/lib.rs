#![warn(missing_docs)]
//! Developer tool that prints switch-case fragments for emuGL key handling.
//!
//! The emulator keeps two hand-maintained switch statements: one dispatching
//! `emuGL::KeyScanCode` values to CHIP-8 keypad nibbles, one translating SDL
//! scancodes to `KeyScanCode` members. This tool regenerates the arms of
//! either switch so they can be pasted into the emulator source verbatim.

use std::io;

use clap::{Parser, Subcommand};
use tracing::debug;

/// Switch-case arm rendering over the keypad and SDL token lists.
pub mod emit;
/// Error and result types for `keygen`.
mod error;
/// Logging filter helpers and CLI args.
mod logging;

pub use error::{Error, Result};

/// Command-line interface for the `keygen` binary.
#[derive(Debug, Parser)]
#[command(name = "keygen", about = "Emit switch-case fragments for emuGL key handling", version)]
struct Cli {
    /// The generator to run; defaults to the keypad mapping.
    #[command(subcommand)]
    command: Option<Command>,

    /// Logging controls
    #[command(flatten)]
    log: logging::LogArgs,
}

/// Subcommands selecting which mapping to emit.
#[derive(Debug, Subcommand)]
enum Command {
    /// Emit `KeyScanCode` -> CHIP-8 keypad dispatch arms (the default).
    Chip8,
    /// Emit SDL scancode -> `KeyScanCode` translation arms.
    Sdl,
}

/// Execute the `keygen` CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log);

    let mut out = io::stdout().lock();
    match cli.command.unwrap_or(Command::Chip8) {
        Command::Chip8 => {
            debug!("emitting CHIP-8 keypad dispatch arms");
            emit::write_keypad_arms(&mut out)
        }
        Command::Sdl => {
            debug!("emitting SDL scancode translation arms");
            emit::write_sdl_arms(&mut out)
        }
    }
}
