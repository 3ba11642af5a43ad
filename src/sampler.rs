//! Random selection of half the enumerated entries.

use rand::seq::SliceRandom;
use rand::Rng;
use std::path::PathBuf;

/// Shuffle `paths` uniformly and keep the first `floor(n/2)` entries.
///
/// A single-entry list yields no selections; there is no minimum of one.
/// The returned order is the post-shuffle order, and callers process it
/// as-is.
pub fn sample<R: Rng + ?Sized>(mut paths: Vec<PathBuf>, rng: &mut R) -> Vec<PathBuf> {
    let count = paths.len() / 2;
    paths.shuffle(rng);
    paths.truncate(count);
    paths
}
