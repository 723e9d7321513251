/// One CSV row of the bulk run.
#[derive(Debug, Clone, Serialize)]
struct Record {
    #[serde(rename = "Seed")]
    seed: String,
    #[serde(rename = "Deck")]
    deck: String,
    #[serde(rename = "Infeasible")]
    infeasible: bool,
    #[serde(rename = "Forced to Pace Zero")]
    forced: bool,
    #[serde(rename = "Duration")]
    duration: f64,
}

/// Bulk driver: solve `count` seeded shuffles of one variant across the
/// worker pool, write a CSV of verdicts, and summarise.
///
/// Each deck is an independent pure solve; rows come back in seed order
/// regardless of scheduling.
pub struct Sweep {
    pub variant: Arc<Variant>,
    pub prefix: String,
    pub count: usize,
    pub output: PathBuf,
}

impl Sweep {
    pub fn run(&self) -> Result<Stats, Error> {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        let progress = crate::progress(self.count);
        let rows = (1..=self.count)
            .into_par_iter()
            .map(|i| {
                let seed = format!("{}{}", self.prefix, i);
                let mut deck = Deck::new(self.variant.clone());
                deck.shuffle(&seed);
                let start = Instant::now();
                let verdict = Solver::new(&deck).solve()?;
                progress.inc(1);
                Ok(Record {
                    seed,
                    deck: deck.to_string(),
                    infeasible: verdict.infeasible,
                    forced: verdict.forced,
                    duration: start.elapsed().as_secs_f64(),
                })
            })
            .collect::<Result<Vec<Record>, Error>>()?;
        progress.finish();
        let mut writer = csv::Writer::from_path(&self.output)?;
        for row in &rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        log::info!("wrote {} verdicts to {}", rows.len(), self.output.display());
        Ok(Stats::from(rows.as_slice()))
    }
}

/// Aggregates reported after a sweep.
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    pub decks: usize,
    pub infeasible: usize,
    pub forced: usize,
    pub fastest: f64,
    pub slowest: f64,
}

impl From<&[Record]> for Stats {
    fn from(rows: &[Record]) -> Self {
        Self {
            decks: rows.len(),
            infeasible: rows.iter().filter(|r| r.infeasible).count(),
            forced: rows.iter().filter(|r| !r.infeasible && r.forced).count(),
            fastest: rows.iter().map(|r| r.duration).fold(f64::INFINITY, f64::min),
            slowest: rows.iter().map(|r| r.duration).fold(0.0, f64::max),
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let undecided = self.decks.saturating_sub(self.infeasible).max(1);
        write!(
            f,
            "{} decks, {} infeasible ({:.4}%), durations {:.6}s..{:.6}s, {:.3}% of undecided decks forced to pace zero",
            self.decks,
            self.infeasible,
            100.0 * self.infeasible as f64 / self.decks.max(1) as f64,
            self.fastest,
            self.slowest,
            100.0 * self.forced as f64 / undecided as f64,
        )
    }
}

use crate::cards::deck::Deck;
use crate::cards::variant::Variant;
use crate::error::Error;
use crate::solver::Solver;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_round_trip() {
        let output = std::env::temp_dir().join("endgames-sweep.csv");
        let sweep = Sweep {
            variant: Arc::new(Variant::default()),
            prefix: "dashing".to_string(),
            count: 3,
            output: output.clone(),
        };
        let stats = sweep.run().expect("sweep");
        assert!(stats.decks == 3);
        let text = std::fs::read_to_string(&output).expect("csv");
        let mut lines = text.lines();
        assert!(lines.next() == Some("Seed,Deck,Infeasible,Forced to Pace Zero,Duration"));
        assert!(text.lines().count() == 4);
        assert!(text.contains("dashing2"));
    }

    #[test]
    fn aggregate_counts() {
        let record = |infeasible, forced, duration| Record {
            seed: "x".to_string(),
            deck: String::new(),
            infeasible,
            forced,
            duration,
        };
        let rows = [
            record(false, false, 0.5),
            record(true, true, 2.0),
            record(false, true, 1.0),
            record(true, false, 0.25),
        ];
        let stats = Stats::from(rows.as_slice());
        assert!(stats.decks == 4);
        assert!(stats.infeasible == 2);
        assert!(stats.forced == 1);
        assert!(stats.fastest == 0.25);
        assert!(stats.slowest == 2.0);
    }
}
