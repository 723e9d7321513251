/// one deck position per rank, in play order 1..=R
pub type SuitPath = Vec<usize>;

/// Knobs for the per-suit enumeration.
#[derive(Debug, Clone, Default)]
pub struct ShapeOptions {
    /// ranks whose first copy starts as bottom-deck risk and is treated
    /// as missed rather than consumed
    pub bdrs: BTreeSet<usize>,
    /// when set, ranks with two copies inside the starting hands are
    /// branched over every copy for the distribution solver's benefit
    pub hand_capacity: Option<usize>,
    /// a just-playable card is assumed to play immediately
    pub playables_play: bool,
}

impl ShapeOptions {
    pub fn standard(capacity: usize) -> Self {
        Self {
            bdrs: BTreeSet::new(),
            hand_capacity: Some(capacity),
            playables_play: true,
        }
    }
}

/// Enumerates, for one suit, every legal assignment of a deck position
/// to each rank.
///
/// Legality is two rules over the chosen positions:
/// - no discarding a playable: once a rank is playable, the first copy
///   drawn afterwards is the one consumed;
/// - no holding a useless duplicate: a copy drawn before the rank is
///   playable, shadowed by a later copy, yields to the later copy.
///
/// Candidate positions are pre-trimmed by replaying the suit under
/// "playables play immediately": copies drawn after a rank resolves are
/// trash and never candidates.
pub struct Shaper {
    options: ShapeOptions,
}

impl Shaper {
    pub fn new(options: ShapeOptions) -> Self {
        Self { options }
    }

    /// every legal path for one suit, in a deterministic order.
    /// `copies` is rank-indexed (entry 0 unused) with sorted positions.
    pub fn identify(&self, copies: &[Vec<usize>]) -> Vec<SuitPath> {
        let concerns = self.concerns(copies);
        let candidates = self.candidates(copies);
        let height = copies.len() - 1;
        self.recurse(&candidates, &concerns, height, 1, Vec::new(), -1)
    }

    /// ranks whose first two copies both sit inside the starting hands;
    /// counted over the raw copies, before any trimming
    fn concerns(&self, copies: &[Vec<usize>]) -> BTreeSet<usize> {
        let mut ranks = BTreeSet::new();
        if let Some(capacity) = self.options.hand_capacity {
            for (rank, locations) in copies.iter().enumerate().skip(1) {
                if locations.len() >= 2 && locations[1] < capacity {
                    ranks.insert(rank);
                }
            }
        }
        ranks
    }

    /// trim each rank to the copies drawn no later than the moment the
    /// rank resolves when every playable plays on sight. once a rank
    /// fails to resolve, later ranks keep every copy.
    fn candidates(&self, copies: &[Vec<usize>]) -> Vec<Vec<usize>> {
        let mut lists = copies.to_vec();
        for (rank, list) in lists.iter_mut().enumerate().skip(1) {
            if self.options.bdrs.contains(&rank) && !list.is_empty() {
                list.remove(0);
            }
        }
        let mut resolved = -1i64;
        let mut open = true;
        for list in lists.iter_mut().skip(1) {
            if !open {
                continue;
            }
            match list.iter().position(|&l| (l as i64) > resolved) {
                Some(i) => {
                    list.truncate(i + 1);
                    resolved = *list.last().expect("nonempty after truncate") as i64;
                }
                None => open = false,
            }
        }
        lists
    }

    fn recurse(
        &self,
        candidates: &[Vec<usize>],
        concerns: &BTreeSet<usize>,
        height: usize,
        rank: usize,
        path: Vec<usize>,
        playable: i64,
    ) -> Vec<SuitPath> {
        if rank > height {
            return vec![path];
        }
        let locations = &candidates[rank];
        if locations.is_empty() {
            return Vec::new();
        }
        let commit = |location: usize, playable: i64| {
            let mut next = path.clone();
            next.push(location);
            self.recurse(candidates, concerns, height, rank + 1, next, playable)
        };
        if concerns.contains(&rank) {
            return locations
                .iter()
                .flat_map(|&location| commit(location, playable.max(location as i64)))
                .collect();
        }
        let first = locations[0];
        if first as i64 > playable {
            return commit(first, first as i64);
        }
        let last = *locations.last().expect("nonempty candidates");
        if (last as i64) < playable {
            return commit(last, playable);
        }
        // candidates straddle the playable moment: use the justified
        // earlier copy, or skip it for the next copy
        let at = locations.partition_point(|&l| (l as i64) <= playable) - 1;
        let mut paths = commit(locations[at], playable);
        paths.extend(commit(locations[at + 1], locations[at + 1] as i64));
        paths
    }
}

use std::collections::BTreeSet;

#[cfg(test)]
mod tests {
    use super::*;

    fn copies(lists: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
        let mut all = vec![Vec::new()];
        all.extend(lists);
        all
    }

    fn shaper() -> Shaper {
        Shaper::new(ShapeOptions::standard(10))
    }

    #[test]
    fn straddling_copies_branch() {
        let suit = copies(vec![vec![3], vec![1, 5], vec![6], vec![7], vec![8]]);
        let paths = shaper().identify(&suit);
        assert!(paths == vec![vec![3, 1, 6, 7, 8], vec![3, 5, 6, 7, 8]]);
    }

    #[test]
    fn held_duplicates_yield_to_the_later_copy() {
        let suit = copies(vec![vec![4], vec![1, 2], vec![5], vec![6], vec![7]]);
        let bare = Shaper::new(ShapeOptions {
            hand_capacity: None,
            playables_play: true,
            ..ShapeOptions::default()
        });
        assert!(bare.identify(&suit) == vec![vec![4, 2, 5, 6, 7]]);
    }

    #[test]
    fn starting_hand_duplicates_branch_every_copy() {
        let suit = copies(vec![vec![4], vec![1, 2], vec![5], vec![6], vec![7]]);
        let paths = shaper().identify(&suit);
        assert!(paths == vec![vec![4, 1, 5, 6, 7], vec![4, 2, 5, 6, 7]]);
    }

    #[test]
    fn resolved_ranks_drop_trailing_copies() {
        let suit = copies(vec![vec![1], vec![0, 4, 9], vec![10], vec![11], vec![12]]);
        let paths = shaper().identify(&suit);
        assert!(paths == vec![vec![1, 0, 10, 11, 12], vec![1, 4, 10, 11, 12]]);
        assert!(paths.iter().all(|p| !p.contains(&9)));
    }

    #[test]
    fn bottom_deck_risk_skips_the_first_copy() {
        let suit = copies(vec![vec![0], vec![2, 7], vec![8], vec![9], vec![10]]);
        let mut options = ShapeOptions::standard(10);
        options.bdrs.insert(2);
        let paths = Shaper::new(options).identify(&suit);
        assert!(paths == vec![vec![0, 7, 8, 9, 10]]);
    }

    #[test]
    fn triple_ones_collapse_to_the_earliest() {
        let suit = copies(vec![vec![0, 1, 2], vec![3], vec![4], vec![5], vec![6]]);
        let paths = shaper().identify(&suit);
        assert!(paths == vec![vec![0, 3, 4, 5, 6]]);
    }

    #[test]
    fn interleaved_concerns_multiply() {
        let suit = copies(vec![vec![5], vec![2, 8], vec![3, 9], vec![10], vec![11]]);
        let paths = shaper().identify(&suit);
        assert!(
            paths
                == vec![
                    vec![5, 2, 3, 10, 11],
                    vec![5, 2, 9, 10, 11],
                    vec![5, 8, 3, 10, 11],
                    vec![5, 8, 9, 10, 11],
                ]
        );
    }

    #[test]
    fn emitted_positions_come_from_the_candidates() {
        let suit = copies(vec![vec![25], vec![0, 9], vec![30], vec![43], vec![22]]);
        for path in shaper().identify(&suit) {
            for (rank, location) in path.iter().enumerate() {
                assert!(suit[rank + 1].contains(location));
            }
        }
    }
}
