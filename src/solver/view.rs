/// Immutable per-solve view of a shuffled deck.
///
/// Precomputes, for every suit, the sorted deck positions of each rank:
/// `copies` holds every position, `locations` applies the collapse that
/// only the earliest copy of rank 1 and of the top rank can matter.
/// Also carries the game-size constants the filters share.
pub struct View<'a> {
    deck: &'a Deck,
    players: usize,
    handsize: usize,
    copies: Vec<Vec<Vec<usize>>>,
    locations: Vec<Vec<Vec<usize>>>,
}

impl<'a> View<'a> {
    pub fn new(deck: &'a Deck, players: usize, handsize: Option<usize>) -> Self {
        let handsize = handsize.unwrap_or_else(|| super::hand_size(players));
        let suits = deck.variant().suits.len();
        let height = deck.variant().stack_size;
        let mut copies = vec![vec![Vec::new(); height + 1]; suits];
        for (location, card) in deck.cards().iter().enumerate() {
            copies[card.suit()][card.rank()].push(location);
        }
        let mut locations = copies.clone();
        for ranks in locations.iter_mut() {
            for rank in [1, height] {
                if let Some(&first) = ranks[rank].first() {
                    ranks[rank] = vec![first];
                }
            }
        }
        Self {
            deck,
            players,
            handsize,
            copies,
            locations,
        }
    }

    pub fn card(&self, location: usize) -> Card {
        self.deck.cards()[location]
    }
    /// every deck position of every copy, by rank
    pub fn copies(&self, suit: usize) -> &[Vec<usize>] {
        &self.copies[suit]
    }
    /// copies with the rank-1 / top-rank collapse applied
    pub fn locations(&self, suit: usize) -> &[Vec<usize>] {
        &self.locations[suit]
    }
    pub fn deck(&self) -> &Deck {
        self.deck
    }
    pub fn len(&self) -> usize {
        self.deck.len()
    }
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }
    pub fn suits(&self) -> usize {
        self.deck.variant().suits.len()
    }
    /// the top rank R
    pub fn height(&self) -> usize {
        self.deck.variant().stack_size
    }
    pub fn max_score(&self) -> usize {
        self.suits() * self.height()
    }
    pub fn players(&self) -> usize {
        self.players
    }
    pub fn handsize(&self) -> usize {
        self.handsize
    }
    /// cards held across all hands at once
    pub fn capacity(&self) -> usize {
        self.players * self.handsize
    }
}

use crate::cards::card::Card;
use crate::cards::deck::Deck;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::variant::Variant;
    use std::sync::Arc;

    fn deck(line: &str) -> Deck {
        Deck::parse(Arc::new(Variant::default()), line).expect("deck line")
    }

    #[test]
    fn constants() {
        let deck = Deck::default();
        let view = View::new(&deck, 2, None);
        assert!(view.len() == 50);
        assert!(view.suits() == 5);
        assert!(view.height() == 5);
        assert!(view.max_score() == 25);
        assert!(view.capacity() == 10);
    }

    #[test]
    fn collapsed_locations() {
        let deck = deck("r1 r1 r1 r2 r2 r3 r3 r4 r4 r5 y1 y1 y1 y2 y2 y3 y3 y4 y4 y5 g1 g1 g1 g2 g2 g3 g3 g4 g4 g5 b1 b1 b1 b2 b2 b3 b3 b4 b4 b5 p1 p1 p1 p2 p2 p3 p3 p4 p4 p5");
        let view = View::new(&deck, 2, None);
        assert!(view.copies(0)[1] == vec![0, 1, 2]);
        assert!(view.locations(0)[1] == vec![0]);
        assert!(view.copies(0)[3] == vec![5, 6]);
        assert!(view.locations(0)[3] == vec![5, 6]);
        assert!(view.locations(4)[5] == vec![49]);
    }

    #[test]
    fn hand_size_table() {
        let deck = Deck::default();
        assert!(View::new(&deck, 2, None).handsize() == 5);
        assert!(View::new(&deck, 3, None).handsize() == 5);
        assert!(View::new(&deck, 4, None).handsize() == 4);
        assert!(View::new(&deck, 6, None).handsize() == 3);
        assert!(View::new(&deck, 2, Some(4)).handsize() == 4);
    }
}
