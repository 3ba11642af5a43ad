//! Fixed ignore-pattern matching.

use std::path::Path;

/// Directory names that are never snapped. Matching is component-anchored:
/// `a/.git/x` matches, `a/gitignore/x` does not.
pub const IGNORED_DIRS: &[&str] = &[".git", "vendor", "node_modules"];

/// Path suffixes that are never snapped. `.env` files and the dependency
/// manifest survive so a project can be rebuilt after the snap.
pub const IGNORED_SUFFIXES: &[&str] = &[".env", "Cargo.toml"];

/// Check whether a path is excluded from the snap entirely.
///
/// Separators are normalized to `/` before matching so behavior is identical
/// across platforms. Once a directory matches, callers must not descend into
/// it; its whole subtree is out of consideration.
pub fn should_ignore(path: &Path) -> bool {
    let normalized = path.to_string_lossy().replace('\\', "/");

    if normalized
        .split('/')
        .any(|component| IGNORED_DIRS.contains(&component))
    {
        return true;
    }

    IGNORED_SUFFIXES
        .iter()
        .any(|suffix| normalized.ends_with(suffix))
}
