//! Sweep Binary
//!
//! Solves seeded shuffles in bulk and writes a CSV of verdicts.

use anyhow::Context;
use clap::Parser;
use endgames::analysis::sweep::Sweep;
use endgames::catalog::Catalog;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Bulk infeasibility sweep over seeded decks")]
struct Args {
    /// variant to shuffle
    #[arg(long, default_value = "No Variant")]
    variant: String,
    /// seed prefix; seeds are prefix1, prefix2, ...
    #[arg(long, default_value = "dashing")]
    prefix: String,
    /// number of decks
    #[arg(long, default_value_t = 1000)]
    count: usize,
    /// CSV destination
    #[arg(long, default_value = "sweep.csv")]
    output: PathBuf,
    /// catalog cache directory
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    /// worker threads, defaulting to the core count
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    endgames::init();
    let args = Args::parse();
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads.unwrap_or_else(num_cpus::get))
        .build_global()
        .context("worker pool")?;
    let catalog = Catalog::load(&args.assets).context("catalog")?;
    let variant = catalog.variant(&args.variant).context("variant")?;
    let sweep = Sweep {
        variant,
        prefix: args.prefix,
        count: args.count,
        output: args.output,
    };
    let stats = sweep.run().context("sweep")?;
    log::info!("{}", stats);
    Ok(())
}
