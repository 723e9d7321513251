pub mod distribution;
pub mod pace;
pub mod paths;
pub mod shape;
pub mod view;

/// What the checks could prove about one deck.
///
/// `infeasible` true is a sound proof that no play sequence wins under
/// the infinite-clue, perfect-information model; false means only that
/// these checks could not refute the deck. `forced` reports whether the
/// distribution stage was reached: every surviving line of play was
/// pinned to pace zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub infeasible: bool,
    pub forced: bool,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.infeasible, self.forced)
    }
}

/// hanab.live hand sizes by player count
pub fn hand_size(players: usize) -> usize {
    match players {
        2 | 3 => 5,
        6 => 3,
        _ => 4,
    }
}

/// The three-stage infeasibility pipeline over one deck.
///
/// Per suit, enumerate the legal play locations; across suits, stream
/// the cartesian product of those choices; per combination, run the
/// capacity and pace filters, and hand whatever survives at pace zero
/// to the distribution solver. The deck is proven infeasible only when
/// every combination is refuted.
pub struct Solver<'a> {
    view: View<'a>,
    shaper: Shaper,
}

impl<'a> Solver<'a> {
    pub fn new(deck: &'a Deck) -> Self {
        Self::sized(deck, 2, None)
    }

    pub fn sized(deck: &'a Deck, players: usize, handsize: Option<usize>) -> Self {
        let view = View::new(deck, players, handsize);
        let shaper = Shaper::new(ShapeOptions::standard(view.capacity()));
        Self { view, shaper }
    }

    pub fn view(&self) -> &View<'a> {
        &self.view
    }

    pub fn solve(&self) -> Result<Verdict, Error> {
        self.decide().inspect_err(|e| {
            log::error!("{} on deck:", e);
            log::error!("{}", self.view.deck());
            log::error!("{}", self.view.deck().replay_url(self.view.players()));
        })
    }

    fn decide(&self) -> Result<Verdict, Error> {
        let suits = (0..self.view.suits())
            .map(|suit| self.shaper.identify(self.view.copies(suit)))
            .collect::<Vec<Vec<SuitPath>>>();
        let mut pinned: Vec<Vec<bool>> = Vec::new();
        for path in paths::product(&suits, self.view.len()) {
            let filter = Filter::new(&self.view, &path);
            if filter.capacity_loss(self.view.capacity()) {
                continue;
            }
            if filter.pace_loss(self.view.players()) {
                continue;
            }
            if !filter.pace_loss(1) {
                // a single merged hand wins this line outright
                return Ok(Verdict {
                    infeasible: false,
                    forced: false,
                });
            }
            pinned.push(path);
        }
        if pinned.is_empty() {
            return Ok(Verdict {
                infeasible: true,
                forced: false,
            });
        }
        for path in &pinned {
            if !Distribution::new(&self.view, path).infeasible()? {
                return Ok(Verdict {
                    infeasible: false,
                    forced: true,
                });
            }
        }
        Ok(Verdict {
            infeasible: true,
            forced: true,
        })
    }

    /// pace screen with unbounded hands: walk the first copy of every
    /// card and ask only whether the tail pins more plays than remain
    pub fn pace_screen(&self) -> bool {
        let mut seen = 0u64;
        let mut path = vec![false; self.view.len()];
        for (location, card) in self.view.deck().cards().iter().enumerate() {
            let index = card.index(self.view.height());
            if seen & (1 << index) == 0 {
                seen |= 1 << index;
                path[location] = true;
            }
        }
        Filter::new(&self.view, &path).pace_loss(self.view.players())
    }
}

use self::distribution::Distribution;
use self::pace::Filter;
use self::shape::ShapeOptions;
use self::shape::Shaper;
use self::shape::SuitPath;
use self::view::View;
use crate::cards::deck::Deck;
use crate::error::Error;
