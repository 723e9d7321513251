/// Arithmetic filters over one deck mask.
///
/// Both filters are one-sided: a reported loss is a proof, a pass says
/// nothing. The capacity filter replays the deck forward holding every
/// consumed-but-unplayable card; the pace filter walks backward totting
/// up the plays pinned below each suit's tail.
pub struct Filter<'a> {
    view: &'a View<'a>,
    path: &'a [bool],
}

impl<'a> Filter<'a> {
    pub fn new(view: &'a View<'a>, path: &'a [bool]) -> Self {
        Self { view, path }
    }

    /// the shared hands overflow before enough cards come down
    pub fn capacity_loss(&self, capacity: usize) -> bool {
        let height = self.view.height();
        let mut stacks = vec![0usize; self.view.suits()];
        let mut hand = 0u64;
        for (location, &used) in self.path.iter().enumerate() {
            if !used {
                continue;
            }
            let card = self.view.card(location);
            if stacks[card.suit()] == card.rank() - 1 {
                stacks[card.suit()] += 1;
                // cascade: each play may free further held plays
                let mut rank = card.rank() + 1;
                while rank <= height && hand & (1 << (height * card.suit() + rank)) != 0 {
                    hand &= !(1 << (height * card.suit() + rank));
                    stacks[card.suit()] += 1;
                    rank += 1;
                }
            } else {
                hand |= 1 << card.index(height);
                if hand.count_ones() as usize == capacity {
                    return true;
                }
            }
        }
        false
    }

    /// more plays pinned below the tail than turns remain. `finals` is
    /// the play budget after the last draw: the team size, or 1 for the
    /// single-hand bound.
    pub fn pace_loss(&self, finals: usize) -> bool {
        self.walk(finals, |_, _| {}).is_some()
    }

    /// indices where the pinned plays exactly meet the available pace
    /// plus `slack`, latest first as the walk encounters them
    pub fn breakpoints(&self, finals: usize, slack: usize) -> Vec<usize> {
        let mut marks = Vec::new();
        self.walk(finals, |index, state| {
            if state.pinned.iter().sum::<usize>() == state.pace + slack {
                marks.push(index);
            }
        });
        marks.reverse();
        marks
    }

    /// per-suit stacks reached at each marked index (ascending), taken
    /// just before the card at the mark is drawn
    pub fn checkpoints(&self, marks: &[usize]) -> Vec<Vec<usize>> {
        let height = self.view.height();
        let mut stacks = vec![0usize; self.view.suits()];
        let mut hand = 0u64;
        let mut reached = Vec::new();
        for (location, &used) in self.path.iter().enumerate() {
            if !used {
                continue;
            }
            let card = self.view.card(location);
            if marks.get(reached.len()) == Some(&location) {
                reached.push(stacks.clone());
                if reached.len() == marks.len() {
                    break;
                }
            }
            if stacks[card.suit()] == card.rank() - 1 {
                stacks[card.suit()] += 1;
                let mut rank = card.rank() + 1;
                while rank <= height && hand & (1 << (height * card.suit() + rank)) != 0 {
                    hand &= !(1 << (height * card.suit() + rank));
                    stacks[card.suit()] += 1;
                    rank += 1;
                }
            } else {
                hand |= 1 << card.index(height);
            }
        }
        reached
    }

    /// backward walk shared by the pace check and breakpoint scan.
    /// returns the index of the first proven loss, if any.
    fn walk(&self, finals: usize, mut visit: impl FnMut(usize, &Walk)) -> Option<usize> {
        let n = self.view.len();
        let goal = self.view.max_score();
        let height = self.view.height();
        let mut state = Walk {
            pace: finals,
            pinned: vec![0usize; self.view.suits()],
        };
        if self.path[n - 1] {
            let card = self.view.card(n - 1);
            if card.rank() != height {
                return Some(n - 1);
            }
            state.pinned[card.suit()] = height + 1 - card.rank();
        }
        let mut index = n - 1;
        while state.pace < goal {
            state.pace += 1;
            index -= 1;
            if self.path[index] {
                let card = self.view.card(index);
                let below = height + 1 - card.rank();
                state.pinned[card.suit()] = state.pinned[card.suit()].max(below);
            }
            if state.pinned.iter().sum::<usize>() > state.pace {
                return Some(index);
            }
            visit(index, &state);
        }
        None
    }
}

struct Walk {
    pace: usize,
    pinned: Vec<usize>,
}

use super::view::View;
