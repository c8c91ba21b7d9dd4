//! Rewrite error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a rewrite run.
///
/// Every variant carries the path it failed on, so the final report can
/// name the file where processing stopped.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("failed to walk `{}`", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    #[error("failed to read `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
