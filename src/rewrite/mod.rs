//! Rewrite `<img>` jpg/png references to webp across a tree of html files.
//!
//! # Module Structure
//!
//! ```text
//! rewrite/
//! ├── rule     # Tag-rewrite regex and pure substitution
//! ├── walk     # Candidate discovery (node_modules pruned)
//! ├── error    # RewriteError
//! └── mod.rs   # run / rewrite_file (this file)
//! ```
//!
//! # Failure Policy
//!
//! Runs are fail-fast. Candidates are collected before any file is read.
//! They are then processed in path order, and the first read or write error
//! stops the run. Files before the failing one are already rewritten and
//! have printed their notice. The failing file and everything after it are
//! left untouched.

mod error;
mod rule;
mod walk;

pub use error::RewriteError;
pub use rule::{find_img_refs, rewrite_img_sources};
pub use walk::collect_candidates;

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::RewriteConfig;
use crate::utils::{plural_count, plural_s};
use crate::debug;
use crate::logger::log_to;

/// Result of processing a single candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No qualifying reference, file left untouched.
    Unchanged,
    /// File content changed (written unless dry-run).
    Rewritten {
        /// Number of references redirected to webp.
        refs: usize,
    },
}

/// Summary of a whole run.
#[derive(Debug, Default)]
pub struct RewriteReport {
    /// Candidate files read.
    pub scanned: usize,
    /// Files whose content changed, in processing order.
    pub rewritten: Vec<PathBuf>,
    /// Total references redirected across all files.
    pub refs: usize,
}

impl fmt::Display for RewriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rewrote {} ({} reference{}, {} scanned)",
            plural_count(self.rewritten.len(), "file"),
            self.refs,
            plural_s(self.refs),
            self.scanned
        )
    }
}

/// Rewrite every candidate under `config.root`, with notices on stdout.
pub fn run(config: &RewriteConfig) -> Result<RewriteReport, RewriteError> {
    run_with(config, &mut io::stdout())
}

/// Rewrite every candidate under `config.root`.
///
/// Writes one `[update]` line per changed file to `out` (`[dry-run]` when
/// `config.dry_run` is set, in which case nothing is written to disk).
pub fn run_with<W: Write>(
    config: &RewriteConfig,
    out: &mut W,
) -> Result<RewriteReport, RewriteError> {
    let candidates = collect_candidates(&config.root)?;
    debug!("scan"; "found {} under {}",
        plural_count(candidates.len(), "html file"), config.root.display());

    let mut report = RewriteReport::default();
    for path in candidates {
        report.scanned += 1;
        match rewrite_file(&path, config.dry_run)? {
            FileOutcome::Rewritten { refs } => {
                let module = if config.dry_run { "dry-run" } else { "update" };
                log_to(out, module, &path.display().to_string());
                report.refs += refs;
                report.rewritten.push(path);
            }
            FileOutcome::Unchanged => {
                debug!("skip"; "unchanged: {}", path.display());
            }
        }
    }

    Ok(report)
}

/// Apply the tag-rewrite rule to one file.
///
/// The file is written back only if its content changed and `dry_run` is false.
pub fn rewrite_file(path: &Path, dry_run: bool) -> Result<FileOutcome, RewriteError> {
    let content = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let updated = rewrite_img_sources(&content);
    if updated == content {
        return Ok(FileOutcome::Unchanged);
    }

    let refs = find_img_refs(&content).len();
    if !dry_run {
        fs::write(path, updated.as_bytes()).map_err(|source| RewriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    Ok(FileOutcome::Rewritten { refs })
}
