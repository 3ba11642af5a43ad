//! Best-effort removal of a single selected entry.

use std::fs;
use std::io;
use std::path::Path;

/// Remove `path` from disk: files with `remove_file`, directories with
/// `remove_dir_all`.
///
/// Dispatch is on the path's kind at call time, not at enumeration time. A
/// path that no longer exists is skipped silently; selecting both a
/// directory and something nested inside it is normal, and whichever comes
/// second in the sampled order has already been removed. Any other removal
/// failure is reported on stderr and swallowed.
pub fn remove_entry(path: &Path) {
    // symlink_metadata so a symlink is unlinked, never followed into.
    let metadata = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return,
        Err(err) => {
            eprintln!(
                "Warning: Could not get metadata for {}: {}",
                path.display(),
                err
            );
            return;
        }
    };

    let removal_result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    if let Err(err) = removal_result {
        if err.kind() != io::ErrorKind::NotFound {
            eprintln!("Error removing {}: {}. Skipping.", path.display(), err);
        }
    }
}
