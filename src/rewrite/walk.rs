//! Candidate discovery under a root directory.
//!
//! ```text
//! site/
//! ├── index.html            -> candidate
//! ├── about.HTML            -> (case-sensitive suffix, skipped)
//! ├── .drafts/
//! │   └── wip.html          -> candidate (hidden entries are walked)
//! ├── blog/
//! │   └── post.html         -> candidate
//! ├── node_modules/         -> (pruned, never entered)
//! │   └── pkg/readme.html
//! └── node_modules_old/     -> (pruned, name contains node_modules)
//! ```

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use super::error::RewriteError;
use crate::debug;

/// Dependency-cache directory pruned from traversal.
pub const CACHE_DIR: &str = "node_modules";

/// Suffix identifying markup files.
pub const MARKUP_SUFFIX: &str = ".html";

/// Check if a file name marks a markup file (case-sensitive).
#[inline]
pub fn is_markup_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(MARKUP_SUFFIX))
}

/// Check if a directory path falls inside a dependency cache.
///
/// Plain substring test on the whole path, so `node_modules_backup` and a
/// root such as `site/node_modules/pkg` both count.
#[inline]
pub fn is_cache_path(dir: &Path) -> bool {
    dir.to_string_lossy().contains(CACHE_DIR)
}

/// Collect every candidate file under `root`, sorted by path.
///
/// Walks serially. A root inside a cache path yields nothing. Below the
/// root, directories whose name contains [`CACHE_DIR`] are dropped before
/// they are read, so nothing inside them is listed. The first unreadable
/// directory aborts the walk.
pub fn collect_candidates(root: &Path) -> Result<Vec<PathBuf>, RewriteError> {
    if is_cache_path(root) {
        debug!("skip"; "{}", root.display());
        return Ok(Vec::new());
    }

    let walker = WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .sort(true)
        .skip_hidden(false)
        .process_read_dir(|_, _, _, children| {
            children.retain(|entry| {
                let Ok(entry) = entry else {
                    // Keep errors so the iterator reports them
                    return true;
                };
                let prune =
                    entry.file_type().is_dir() && is_cache_path(Path::new(entry.file_name()));
                if prune {
                    debug!("skip"; "{}", entry.path().display());
                }
                !prune
            });
        });

    let mut candidates = Vec::new();
    for entry in walker {
        let mut entry = entry.map_err(|source| RewriteError::Walk {
            path: source.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf),
            source,
        })?;

        // jwalk attaches a failed read_dir to the directory entry itself
        if let Some(source) = entry.read_children_error.take() {
            return Err(RewriteError::Walk {
                path: entry.path(),
                source,
            });
        }

        let path = entry.path();
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if is_file && is_markup_file(&path) {
            candidates.push(path);
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<p></p>").unwrap();
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_is_markup_file() {
        assert!(is_markup_file(Path::new("index.html")));
        assert!(is_markup_file(Path::new("a/b/page.html")));
        assert!(!is_markup_file(Path::new("index.HTML")));
        assert!(!is_markup_file(Path::new("index.htm")));
        assert!(!is_markup_file(Path::new("index.html.bak")));
        assert!(!is_markup_file(Path::new("style.css")));
    }

    #[test]
    fn test_collect_empty() {
        let dir = TempDir::new().unwrap();
        assert!(collect_candidates(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_collect_nested_sorted() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "z.html");
        touch(dir.path(), "a.html");
        touch(dir.path(), "sub/deeper/c.html");
        touch(dir.path(), "sub/b.html");
        touch(dir.path(), "sub/notes.txt");
        touch(dir.path(), "upper.HTML");

        let files = collect_candidates(dir.path()).unwrap();
        let mut rel = relative(dir.path(), &files);
        rel.sort();
        assert_eq!(
            rel,
            vec!["a.html", "sub/b.html", "sub/deeper/c.html", "z.html"]
        );
    }

    #[test]
    fn test_collect_skips_cache_dir() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "node_modules/pkg/readme.html");
        touch(dir.path(), "sub/node_modules/x.html");
        touch(dir.path(), "node_modules_backup/dropped.html");
        touch(dir.path(), "node_modules.html");

        let files = collect_candidates(dir.path()).unwrap();
        let mut rel = relative(dir.path(), &files);
        rel.sort();
        assert_eq!(rel, vec!["index.html", "node_modules.html"]);
    }

    #[test]
    fn test_collect_root_inside_cache_dir() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "node_modules/pkg/demo.html");
        touch(dir.path(), "node_modules/pkg/docs/guide.html");

        let root = dir.path().join("node_modules/pkg");
        assert!(collect_candidates(&root).unwrap().is_empty());
    }

    #[test]
    fn test_is_cache_path() {
        assert!(is_cache_path(Path::new("node_modules")));
        assert!(is_cache_path(Path::new("site/node_modules/pkg")));
        assert!(is_cache_path(Path::new("node_modules_backup")));
        assert!(!is_cache_path(Path::new("site/modules")));
        assert!(!is_cache_path(Path::new("node-modules")));
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_unreadable_dir_fails() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "locked/inner.html");
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users can still list the directory
        let enforced = fs::read_dir(&locked).is_err();
        let result = collect_candidates(dir.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if !enforced {
            return;
        }

        match result {
            Err(RewriteError::Walk { path, .. }) => assert_eq!(path, locked),
            other => panic!("expected walk error, got {other:?}"),
        }
    }

    #[test]
    fn test_collect_includes_hidden() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), ".drafts/wip.html");

        let files = collect_candidates(dir.path()).unwrap();
        assert_eq!(relative(dir.path(), &files), vec![".drafts/wip.html"]);
    }

    #[test]
    fn test_collect_ignores_html_named_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("fake.html")).unwrap();

        assert!(collect_candidates(dir.path()).unwrap().is_empty());
    }
}
