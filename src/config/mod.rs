//! Run configuration.
//!
//! There is no config file. [`RewriteConfig`] is built from the CLI
//! ([`RewriteConfig::from_cli`]) or directly by callers, and the root is
//! validated on construction.

mod error;

pub use error::ConfigError;

use std::path::PathBuf;

use crate::cli::Cli;

/// Validated parameters for one rewrite run.
#[derive(Debug, Clone)]
pub struct RewriteConfig {
    /// Traversal root (as given, not canonicalized).
    pub root: PathBuf,
    /// Report changes without writing files.
    pub dry_run: bool,
}

impl RewriteConfig {
    /// Create a config for `root`, which must be an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let root = root.into();
        if !root.exists() {
            return Err(ConfigError::RootNotFound(root));
        }
        if !root.is_dir() {
            return Err(ConfigError::RootNotDirectory(root));
        }
        Ok(Self {
            root,
            dry_run: false,
        })
    }

    /// Build from parsed CLI arguments.
    ///
    /// Also applies the global verbose flag.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        crate::logger::set_verbose(cli.verbose);
        Ok(Self::new(&cli.root)?.with_dry_run(cli.dry_run))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
