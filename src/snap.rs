//! The snap itself: gate, enumerate, sample, then report or delete.

use crate::remover::remove_entry;
use crate::sampler::sample;
use crate::scanner::collect_entries;

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Advisory printed when neither `--dry-run` nor `--with-gauntlet` is set.
pub const GAUNTLET_ADVISORY: &str = "Without the gauntlet I am nothing, \
run me with either --dry-run or if you are ready to face my wrath --with-gauntlet";

/// Enumerate everything under `path`, select half of it at random, and
/// either report (`dry_run`) or delete it.
///
/// Real deletion requires `with_gauntlet`; with neither flag set nothing on
/// disk is read or touched and only the advisory is printed. Output is one
/// line per processed entry, in sampled order.
pub fn snap(path: &Path, dry_run: bool, with_gauntlet: bool) -> Result<()> {
    if !dry_run && !with_gauntlet {
        println!("{}", GAUNTLET_ADVISORY.yellow());
        return Ok(());
    }

    let entries = collect_entries(path);

    if entries.is_empty() {
        println!("No files found to snap.");
        return Ok(());
    }

    let selected = sample(entries, &mut rand::rng());

    for entry in &selected {
        if dry_run {
            println!("[Dry Run] Would delete: {}", entry.display());
        } else {
            remove_entry(entry);
            println!("Deleted: {}", entry.display());
        }
    }

    Ok(())
}
