//! Binary entrypoint for the `keygen` developer tool.

use std::process;

/// Run the CLI and map failure to a nonzero exit code.
fn main() {
    if let Err(e) = keygen::run() {
        eprintln!("{e}");
        process::exit(1);
    }
}
