//! Post-order tree enumeration with ignore-pattern exclusion.

use crate::patterns::should_ignore;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every file and directory under `root`, excluding ignored entries
/// and their entire subtrees.
///
/// The result is post-order: a directory appears strictly after all of its
/// descendants. Deleting the list front-to-back therefore only ever reaches
/// a directory once it is already empty.
///
/// A root that cannot be listed yields an empty list, and an unreadable
/// subdirectory mid-walk contributes nothing for its subtree; neither case
/// aborts the walk.
pub fn collect_entries(root: &Path) -> Vec<PathBuf> {
    // filter_entry only prunes before descent when walking parent-first, so
    // walk pre-order and reverse: reversed pre-order still puts every
    // directory after all of its descendants.
    let mut entries: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !should_ignore(entry.path()))
        .filter_map(|result| match result {
            Ok(entry) => Some(entry.into_path()),
            Err(err) => {
                eprintln!("Warning: Failed to access entry: {}", err);
                None
            }
        })
        .collect();
    entries.reverse();
    entries
}
