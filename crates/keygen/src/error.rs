use std::{io, result::Result as StdResult};

use thiserror::Error;

/// A shared `Result` type for `keygen`.
pub type Result<T> = StdResult<T, Error>;

/// Errors for `keygen`.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing generated lines to the output stream failed.
    #[error("failed to write generated output: {source}")]
    Write {
        /// The underlying error.
        source: io::Error,
    },
}
