//! Thanos - Randomized Filesystem Reaper
//!
//! Thanos enumerates every file and directory under a root path, excludes a
//! fixed set of ignored patterns (VCS internals, dependency directories,
//! `.env` files, the dependency manifest), then randomly selects half of
//! what remains and deletes it. Perfectly balanced.
//!
//! ## Architecture
//!
//! Four small stages compose into the single `snap` operation:
//! - pattern matching decides what is out of consideration entirely,
//! - the scanner walks the tree post-order (children before parents, so the
//!   deletion pass only reaches a directory once it is already empty),
//! - the sampler shuffles and keeps `floor(n/2)` entries,
//! - the remover deletes best-effort, skipping entries that vanished
//!   earlier in the same snap.
//!
//! Real deletion is gated behind an explicit opt-in flag; the default run
//! refuses and prints an advisory instead.

pub mod patterns;
pub mod remover;
pub mod sampler;
pub mod scanner;
pub mod snap;

// Re-export commonly used items
pub use patterns::{should_ignore, IGNORED_DIRS, IGNORED_SUFFIXES};
pub use remover::remove_entry;
pub use sampler::sample;
pub use scanner::collect_entries;
pub use snap::{snap, GAUNTLET_ADVISORY};
