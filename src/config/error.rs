//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("root directory `{}` does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("root `{}` is not a directory", .0.display())]
    RootNotDirectory(PathBuf),
}
