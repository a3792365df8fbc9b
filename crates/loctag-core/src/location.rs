//! Location resolution.
//!
//! Converts an absolute file path into a project-root-relative path
//! with `/` separators, and formats the canonical `path:line:column`
//! identifier. Resolution never errors: any failure yields the
//! `"unknown"` sentinel, so instrumentation can never break a build
//! over a path problem.

use std::path::{Component, Path, PathBuf};

/// Sentinel used when a path cannot be resolved.
pub const UNKNOWN_LOCATION: &str = "unknown";

/// A position in source text. Line and column are 1-based in the
/// canonical identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Format the canonical location identifier.
///
/// Downstream tools parse this exact `path:line:col` triple; the
/// format is compatibility-sensitive.
pub fn location_id(relative_path: &str, line: usize, column: usize) -> String {
    format!("{relative_path}:{line}:{column}")
}

/// Compute `absolute` relative to `root` (or the current directory when
/// `root` is `None`), with separators normalized to `/`.
///
/// Paths outside the root are expressed with `..` components. Fails
/// open: an empty input or an unresolvable current directory yields
/// [`UNKNOWN_LOCATION`].
pub fn relative_path(absolute: &str, root: Option<&Path>) -> String {
    if absolute.is_empty() {
        return UNKNOWN_LOCATION.to_string();
    }

    let root = match root {
        Some(r) => r.to_path_buf(),
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(_) => return UNKNOWN_LOCATION.to_string(),
        },
    };

    let rel = diff_paths(Path::new(absolute), &root);
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if segments.is_empty() {
        return UNKNOWN_LOCATION.to_string();
    }
    segments.join("/").replace('\\', "/")
}

/// Express `path` relative to `base`, walking up with `..` where the
/// two diverge.
fn diff_paths(path: &Path, base: &Path) -> PathBuf {
    let mut path_parts = path.components().peekable();
    let mut base_parts = base.components().peekable();

    // Drop the shared prefix.
    while let (Some(p), Some(b)) = (path_parts.peek(), base_parts.peek()) {
        if p == b {
            path_parts.next();
            base_parts.next();
        } else {
            break;
        }
    }

    let mut rel = PathBuf::new();
    for part in base_parts {
        if matches!(part, Component::Normal(_)) {
            rel.push("..");
        }
    }
    for part in path_parts {
        rel.push(part.as_os_str());
    }
    rel
}
