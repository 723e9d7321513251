//! Check Binary
//!
//! Solves one deck, given either a seed or a card string, and prints
//! the verdict with a shareable replay URL.

use anyhow::Context;
use clap::Parser;
use endgames::cards::deck::Deck;
use endgames::catalog::Catalog;
use endgames::solver::Solver;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Infeasibility check for a single deck")]
struct Args {
    /// shuffle the variant's deck with this seed
    #[arg(long, conflicts_with = "deck")]
    seed: Option<String>,
    /// variant of the deck
    #[arg(long, default_value = "No Variant")]
    variant: String,
    /// catalog cache directory
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    /// card tokens, e.g. r1 y2 p5 ...
    #[arg(trailing_var_arg = true)]
    deck: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    endgames::init();
    let args = Args::parse();
    let catalog = Catalog::load(&args.assets).context("catalog")?;
    let variant = catalog.variant(&args.variant).context("variant")?;
    let deck = match &args.seed {
        Some(seed) => {
            let mut deck = Deck::new(variant);
            deck.shuffle(seed);
            deck
        }
        None => {
            anyhow::ensure!(!args.deck.is_empty(), "provide --seed or card tokens");
            Deck::parse(variant, &args.deck.join(" ")).context("deck tokens")?
        }
    };
    let verdict = Solver::new(&deck).solve()?;
    println!("{}", deck);
    println!("{}", deck.replay_url(2));
    println!(
        "infeasible: {}, forced to pace zero: {}",
        verdict.infeasible, verdict.forced
    );
    Ok(())
}
