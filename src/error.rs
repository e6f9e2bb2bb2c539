// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ParseError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Construction rejected its arguments. Nothing was written.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ParseError),

    /// The log directory could not be created or the log file appended to.
    #[error("Failed to write log file '{}': {source}", path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The primary output stream rejected a write.
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Log { .. } | Error::Output(_))
    }
}
