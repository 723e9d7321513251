/// Hand-distribution analysis for paths pinned to pace zero.
///
/// A surviving path that fails the single-hand pace bound can only win
/// if the two players split the critical endgame cards correctly. This
/// walks the pace-zero window: it enumerates the endings the final turn
/// could hold, bounds when each outstanding card can play, and checks
/// whether draw timing can route the ending cards into opposite hands.
/// The answer is one-sided: `true` is a proof, `false` is conservative.
pub struct Distribution<'a> {
    view: &'a View<'a>,
    path: &'a [bool],
}

impl<'a> Distribution<'a> {
    pub fn new(view: &'a View<'a>, path: &'a [bool]) -> Self {
        Self { view, path }
    }

    pub fn infeasible(&self) -> Result<bool, Error> {
        let view = self.view;
        let filter = Filter::new(view, self.path);
        let marks = filter.breakpoints(view.players(), 0);
        let reached = filter.checkpoints(&marks);
        if marks.is_empty() || reached.len() != marks.len() {
            return Err(Error::Invariant(
                "pace-zero path without matching breakpoints".to_string(),
            ));
        }
        let n = view.len();
        let height = view.height();
        let handsize = view.handsize();
        let first = marks[0];
        let opening = &reached[0];
        let closing = reached.last().expect("at least one breakpoint");

        // split the consumed cards by where they are drawn: the two
        // starting hands, and the pace-zero window from the first
        // breakpoint on. cards already played by then drop out.
        let unplayed = |range: std::ops::Range<usize>| {
            range
                .filter(|&i| self.path[i])
                .map(|i| view.card(i).interpret())
                .filter(|&(suit, rank)| opening[suit] < rank)
                .collect::<Vec<(usize, usize)>>()
        };
        let hand1 = unplayed(0..handsize);
        let hand2 = unplayed(handsize..2 * handsize);
        let window = (first..n)
            .filter(|&i| self.path[i])
            .map(|i| view.card(i).interpret())
            .collect::<Vec<(usize, usize)>>();

        // a single open suit at the last breakpoint leaves only the
        // R-2, R-1, R run of that suit as an ending, and the hand of
        // whoever plays the R-2 starts to matter
        let unique = closing.iter().filter(|&&r| r != height).count() == 1;

        // endings the final turn could hold, blocked when the starting
        // hands already force both cards into one player
        let mut endings: Vec<[(usize, usize); 2]> = Vec::new();
        let open = (0..view.suits())
            .filter(|&s| closing[s] < height)
            .collect::<Vec<usize>>();
        for &i in &open {
            for &j in &open {
                if i == j {
                    continue;
                }
                let attempt = [(i, height), (j, height)];
                if !Self::together(&attempt, &hand1, &hand2) {
                    endings.push(attempt);
                }
            }
        }
        for suit in 0..view.suits() {
            if closing[suit] < height - 1 {
                let attempt = [(suit, height - 1), (suit, height)];
                if !Self::together(&attempt, &hand1, &hand2) {
                    endings.push(attempt);
                }
            }
        }
        if endings.is_empty() {
            return Ok(true);
        }
        if unique {
            let suit = endings[0][0].0;
            if Self::together(&[(suit, height - 2), (suit, height - 1)], &hand1, &hand2) {
                return Ok(true);
            }
            if Self::apart(&[(suit, height - 2), (suit, height)], &hand1, &hand2) {
                return Ok(true);
            }
        }
        // both ending cards drawn before the window: any middle draw
        // can be routed to either hand, so the split always exists
        for ending in &endings {
            if !window.contains(&ending[0]) && !window.contains(&ending[1]) && !unique {
                return Ok(false);
            }
        }

        let intervals = self.intervals(first, opening)?;

        // draw chains: playing u draws v means v lands in u's hand
        let total = view.suits() * height;
        let mut precursors: Vec<Vec<usize>> = vec![Vec::new(); total + 1];
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); total + 1];
        for location in first..n {
            if !self.path[location] {
                continue;
            }
            let drawn = view.card(location).index(height);
            for (index, interval) in intervals.iter().enumerate() {
                if let Some((earliest, latest)) = interval {
                    if *earliest <= location && location <= *latest {
                        precursors[drawn].push(index);
                        successors[index].push(drawn);
                    }
                }
            }
        }
        let mut connected = vec![false; total + 1];
        connected[view.card(first).index(height)] = true;
        for location in first..n {
            if !self.path[location] {
                continue;
            }
            let index = view.card(location).index(height);
            if connected[index] {
                for &next in &successors[index] {
                    connected[next] = true;
                }
            }
        }

        let reachable = endings
            .iter()
            .any(|e| e.iter().any(|&(s, r)| connected[height * s + r]));
        if !reachable {
            let played = opening.iter().sum::<usize>();
            let middle = total - played - (hand1.len() + hand2.len() + window.len());
            // with no free middle draws, a player holding none of the
            // critical cards can be starved by the dead end
            if middle == 0 && (hand1.is_empty() || hand2.is_empty()) {
                return Ok(true);
            }
        }

        // trace who could come to hold the R-2 of the open suit: its
        // holder must avoid the R-1's hand and share the R's hand
        if unique {
            let suit = endings[0][0].0;
            let mut queue = precursors[height * suit + height - 2].clone();
            let mut seen = queue.iter().copied().collect::<HashSet<usize>>();
            let mut routed = queue.is_empty();
            while let Some(index) = queue.pop() {
                let (s, r) = ((index - 1) / height, (index - 1) % height + 1);
                if Self::together(&[(suit, height - 1), (s, r)], &hand1, &hand2) {
                    continue;
                }
                if Self::apart(&[(suit, height), (s, r)], &hand1, &hand2) {
                    continue;
                }
                if precursors[index].is_empty() {
                    routed = true;
                    break;
                }
                for &back in &precursors[index] {
                    if seen.insert(back) {
                        queue.push(back);
                    }
                }
            }
            if !routed {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// for every card outstanding at the window start, the earliest and
    /// latest turn it can be the play. earliest: play every suit's next
    /// card on sight. latest: per suit, defer it while any other suit
    /// can play. at pace zero every turn must play, so both sweeps run
    /// through the last draw plus the final-play turns.
    fn intervals(
        &self,
        first: usize,
        opening: &[usize],
    ) -> Result<Vec<Option<(usize, usize)>>, Error> {
        let view = self.view;
        let n = view.len();
        let height = view.height();
        let total = view.suits() * height;
        let mut held = 0u64;
        for location in 0..=first {
            if !self.path[location] {
                continue;
            }
            let card = view.card(location);
            if card.rank() > opening[card.suit()] {
                held |= 1 << card.index(height);
            }
        }

        let mut earliest: Vec<Option<usize>> = vec![None; total + 1];
        let mut stacks = opening.to_vec();
        let mut hand = held;
        for turn in (first + 1)..=(n + 1) {
            for suit in 0..view.suits() {
                let rank = stacks[suit] + 1;
                if rank > height {
                    continue;
                }
                let index = height * suit + rank;
                if hand & (1 << index) != 0 {
                    hand &= !(1 << index);
                    stacks[suit] += 1;
                    earliest[index] = Some(turn);
                }
            }
            if turn < n && self.path[turn] {
                hand |= 1 << view.card(turn).index(height);
            }
        }

        let mut latest: Vec<Option<usize>> = vec![None; total + 1];
        for deferred in 0..view.suits() {
            let mut stacks = opening.to_vec();
            let mut hand = held;
            for turn in (first + 1)..=(n + 1) {
                let mut play = None;
                for suit in 0..view.suits() {
                    if suit == deferred {
                        continue;
                    }
                    let rank = stacks[suit] + 1;
                    if rank > height {
                        continue;
                    }
                    let index = height * suit + rank;
                    if hand & (1 << index) != 0 {
                        play = Some((suit, index));
                        break;
                    }
                }
                let (suit, index) = match play {
                    Some(hit) => hit,
                    None => {
                        let rank = stacks[deferred] + 1;
                        if rank > height {
                            return Err(Error::Invariant(
                                "pace-zero turn with nothing to play".to_string(),
                            ));
                        }
                        let index = height * deferred + rank;
                        latest[index] = Some(turn);
                        (deferred, index)
                    }
                };
                if hand & (1 << index) == 0 {
                    return Err(Error::Invariant(
                        "pace-zero turn with nothing to play".to_string(),
                    ));
                }
                hand &= !(1 << index);
                stacks[suit] += 1;
                if turn < n && self.path[turn] {
                    hand |= 1 << view.card(turn).index(height);
                }
            }
        }

        let mut intervals: Vec<Option<(usize, usize)>> = vec![None; total + 1];
        for suit in 0..view.suits() {
            for rank in (opening[suit] + 1)..=height {
                let index = height * suit + rank;
                match (earliest[index], latest[index]) {
                    (Some(a), Some(b)) if a <= b => intervals[index] = Some((a, b)),
                    _ => {
                        return Err(Error::Invariant(format!(
                            "no playing window for card index {}",
                            index
                        )))
                    }
                }
            }
        }
        Ok(intervals)
    }

    /// the pair is forced into one starting hand
    fn together(
        pair: &[(usize, usize); 2],
        hand1: &[(usize, usize)],
        hand2: &[(usize, usize)],
    ) -> bool {
        (hand1.contains(&pair[0]) && hand1.contains(&pair[1]))
            || (hand2.contains(&pair[0]) && hand2.contains(&pair[1]))
    }

    /// the pair is forced into different starting hands
    fn apart(
        pair: &[(usize, usize); 2],
        hand1: &[(usize, usize)],
        hand2: &[(usize, usize)],
    ) -> bool {
        (hand1.contains(&pair[0]) && hand2.contains(&pair[1]))
            || (hand2.contains(&pair[0]) && hand1.contains(&pair[1]))
    }
}

use super::pace::Filter;
use super::view::View;
use crate::error::Error;
use std::collections::HashSet;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck::Deck;
    use crate::cards::variant::Variant;
    use std::sync::Arc;

    fn deck(line: &str) -> Deck {
        Deck::parse(Arc::new(Variant::default()), line).expect("deck line")
    }

    fn mask(used: &[usize]) -> Vec<bool> {
        let mut mask = vec![false; 50];
        for &i in used {
            mask[i] = true;
        }
        mask
    }

    #[test]
    fn lone_open_suit_with_free_window_passes() {
        // single breakpoint at 48, stacks (5 5 5 5 2): unique deck, yet
        // the purple tail is routable, so no proof arises
        let deck = deck("r2 b1 p2 y1 g4 p4 p1 g3 g1 r2 p2 b1 b1 y1 b2 p1 g1 y4 p5 y5 b3 b5 r5 y2 y2 r1 r1 g2 y3 b2 r3 b3 y3 g4 g1 g5 g3 y1 p1 p4 g2 b4 y4 r4 r4 r3 b4 r1 p3 p3");
        let view = View::new(&deck, 2, None);
        let path = mask(&[
            25, 0, 30, 43, 22, 3, 23, 28, 17, 19, 8, 27, 7, 4, 35, 1, 14, 20, 41, 21, 6, 2, 48,
            39, 18,
        ]);
        let verdict = Distribution::new(&view, &path).infeasible().expect("solved");
        assert!(!verdict);
    }

    #[test]
    fn masks_off_the_pace_floor_are_rejected() {
        // a comfortably-paced mask has no pace-zero breakpoint at all
        let mut line = Vec::new();
        for suit in ["r", "y", "g", "b", "p"] {
            for (rank, copies) in [(1, 3), (2, 2), (3, 2), (4, 2), (5, 1)] {
                for _ in 0..copies {
                    line.push(format!("{}{}", suit, rank));
                }
            }
        }
        let deck = deck(&line.join(" "));
        let view = View::new(&deck, 2, None);
        let used = (0..5)
            .flat_map(|s| [0, 3, 5, 7, 9].map(|o| 10 * s + o))
            .collect::<Vec<usize>>();
        let path = mask(&used);
        assert!(Distribution::new(&view, &path).infeasible().is_err());
    }
}
