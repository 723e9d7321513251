/// A card is a (suit, rank) pair. Suits are 0-indexed into the variant's
/// suit list; ranks run 1..=R where R is the variant's stack size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    suit: usize,
    rank: usize,
}

impl Card {
    pub fn new(suit: usize, rank: usize) -> Self {
        Self { suit, rank }
    }
    pub fn suit(&self) -> usize {
        self.suit
    }
    pub fn rank(&self) -> usize {
        self.rank
    }
    /// compact identity in [1, S * R]; 0 is reserved for "nothing"
    pub fn index(&self, height: usize) -> usize {
        height * self.suit + self.rank
    }
    pub fn interpret(&self) -> (usize, usize) {
        (self.suit, self.rank)
    }
}

// (suit, rank) isomorphism
impl From<(usize, usize)> for Card {
    fn from((suit, rank): (usize, usize)) -> Self {
        Self { suit, rank }
    }
}
impl From<Card> for (usize, usize) {
    fn from(card: Card) -> Self {
        (card.suit, card.rank)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "({}, {})", self.suit, self.rank)
    }
}

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_index() {
        assert!(Card::new(0, 1).index(5) == 1);
        assert!(Card::new(4, 5).index(5) == 25);
        assert!(Card::new(2, 3).index(5) == 13);
    }

    #[test]
    fn bijective_pair() {
        let card = Card::new(3, 2);
        assert!(Card::from(<(usize, usize)>::from(card)) == card);
    }
}
