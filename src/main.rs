use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use thanos::snap::snap;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Randomly delete half of the files under a directory",
    long_about = None
)]
struct Args {
    /// Directory to snap (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show what would be deleted without deleting anything
    #[arg(long)]
    dry_run: bool,

    /// Actually perform the deletion
    #[arg(long)]
    with_gauntlet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    snap(&args.path, args.dry_run, args.with_gauntlet)?;

    Ok(())
}
