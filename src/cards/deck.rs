const BASE_62: &str = "abcdefghijklmnopqrstuvwxyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const REPLAY_PREFIX: &str = "https://hanab.live/shared-replay-json/";

/// An ordered deck of cards for one game.
///
/// Built unordered from the variant's multiplicity rules, then either
/// shuffled by seed or overwritten by parsing a bespoke card string.
/// A card's deck location is its index in the sequence; index 0 is the
/// first card dealt.
#[derive(Debug, Clone)]
pub struct Deck {
    variant: Arc<Variant>,
    cards: Vec<Card>,
    seed: Option<String>,
}

impl Deck {
    pub fn new(variant: Arc<Variant>) -> Self {
        let cards = Self::populate(&variant);
        Self {
            variant,
            cards,
            seed: None,
        }
    }

    /// multiplicities: rank 1 gets 3 copies, middle ranks 2, top rank 1,
    /// bent by the one-of-each / sudoku / reversed / critical-rank flags
    fn populate(variant: &Variant) -> Vec<Card> {
        let mut cards = Vec::new();
        for (index, suit) in variant.suits.iter().enumerate() {
            for &rank in &variant.clue_ranks {
                if variant.stack_size == 4 && rank == 5 {
                    continue;
                }
                cards.push(Card::new(index, rank));
                if suit.one_of_each {
                    continue;
                }
                if variant.sudoku {
                    cards.push(Card::new(index, rank));
                } else if rank == 1 {
                    if variant.up_or_down || suit.reversed {
                        continue;
                    }
                    cards.push(Card::new(index, rank));
                    cards.push(Card::new(index, rank));
                } else if Some(rank) == variant.critical_rank {
                    continue;
                } else if rank == 5 {
                    if suit.reversed {
                        cards.push(Card::new(index, rank));
                        cards.push(Card::new(index, rank));
                    }
                } else {
                    cards.push(Card::new(index, rank));
                }
            }
        }
        cards
    }

    /// deterministic reorder from a seed string. the stream cipher keyed
    /// by the folded seed bytes is stable across platforms; it does not
    /// reproduce the shuffle used on hanab.live.
    pub fn shuffle(&mut self, seed: &str) {
        let mut key = [0u8; 32];
        for (i, byte) in seed.bytes().enumerate() {
            key[i % 32] = key[i % 32].wrapping_mul(33) ^ byte;
        }
        let mut rng = ChaCha8Rng::from_seed(key);
        self.cards.shuffle(&mut rng);
        self.seed = Some(seed.to_string());
    }

    /// read a bespoke deck from whitespace-or-comma-separated tokens.
    /// each token is a suit identifier with a rank digit 1..5 anywhere
    /// in it; unknown suits and missing digits abort the deck.
    pub fn parse(variant: Arc<Variant>, line: &str) -> Result<Self, Error> {
        let mut cards = Vec::new();
        let tokens = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());
        for token in tokens {
            let (digit, rank) = token
                .char_indices()
                .find(|(_, c)| ('1'..='5').contains(c))
                .map(|(i, c)| (i, c as usize - '0' as usize))
                .ok_or_else(|| Error::Parse(token.to_string()))?;
            let word = format!("{}{}", &token[..digit], &token[digit + 1..]);
            let suit = variant
                .suits
                .iter()
                .position(|s| s.matches(&word))
                .ok_or_else(|| Error::Parse(token.to_string()))?;
            cards.push(Card::new(suit, rank));
        }
        Ok(Self {
            variant,
            cards,
            seed: None,
        })
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }
    pub fn variation(&self) -> Arc<Variant> {
        self.variant.clone()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn seed(&self) -> Option<&str> {
        self.seed.as_deref()
    }

    /// suit-agnostic rendering of the first `cutoff` cards as pairs
    pub fn pairs(&self, cutoff: Option<usize>) -> String {
        let cutoff = cutoff.unwrap_or(self.cards.len());
        self.cards[..cutoff]
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// shareable replay URL for loading this deck on hanab.live.
    ///
    /// Three comma-separated sections (players + rank range + deck in
    /// base 62, a trivial action literal, the variant id), then dashes
    /// every 20 characters for readability.
    pub fn replay_url(&self, players: usize) -> String {
        let height = self.variant.stack_size;
        let mut payload = String::new();
        payload.push_str(&players.to_string());
        payload.push_str("15");
        for card in &self.cards {
            let index = card.index(height) - 1;
            payload.push(BASE_62.as_bytes()[index] as char);
        }
        payload.push(',');
        payload.push_str("00ae");
        payload.push(',');
        payload.push_str(&self.variant.id.to_string());
        let chunks = payload
            .as_bytes()
            .chunks(20)
            .map(|c| std::str::from_utf8(c).expect("ascii payload"))
            .collect::<Vec<&str>>()
            .join("-");
        format!("{}{}", REPLAY_PREFIX, chunks)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(Arc::new(Variant::default()))
    }
}

/// canonical abbreviation string: lowercase suit abbreviation (or id
/// when there is no abbreviation) followed by the rank digit
impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line = self
            .cards
            .iter()
            .map(|card| {
                let suit = &self.variant.suits[card.suit()];
                format!("{}{}", suit.abbr(), card.rank())
            })
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", line)
    }
}

impl crate::Arbitrary for Deck {
    fn random() -> Self {
        use rand::Rng;
        let mut deck = Deck::default();
        let seed = rand::rng().random::<u64>().to_string();
        deck.shuffle(&seed);
        deck
    }
}

use super::card::Card;
use super::variant::Variant;
use crate::error::Error;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn base_deck_size() {
        let deck = Deck::default();
        assert!(deck.len() == 50);
        let ones = deck.cards().iter().filter(|c| c.rank() == 1).count();
        let fives = deck.cards().iter().filter(|c| c.rank() == 5).count();
        assert!(ones == 15);
        assert!(fives == 5);
    }

    #[test]
    fn bijective_string() {
        let deck = Deck::random();
        let line = deck.to_string();
        let back = Deck::parse(deck.variation(), &line).expect("canonical string");
        assert!(back.cards() == deck.cards());
    }

    #[test]
    fn tolerant_tokens() {
        let variant = Arc::new(Variant::default());
        let deck = Deck::parse(variant, "R1, y2 GREEN3 4b p5").expect("mixed tokens");
        assert!(deck.cards()[0] == Card::new(0, 1));
        assert!(deck.cards()[1] == Card::new(1, 2));
        assert!(deck.cards()[2] == Card::new(2, 3));
        assert!(deck.cards()[3] == Card::new(3, 4));
        assert!(deck.cards()[4] == Card::new(4, 5));
    }

    #[test]
    fn rejected_tokens() {
        let variant = Arc::new(Variant::default());
        assert!(Deck::parse(variant.clone(), "r1 q3").is_err());
        assert!(Deck::parse(variant, "r1 y").is_err());
    }

    #[test]
    fn seeded_shuffle_is_stable() {
        let mut a = Deck::default();
        let mut b = Deck::default();
        let mut c = Deck::default();
        a.shuffle("dashing1");
        b.shuffle("dashing1");
        c.shuffle("dashing2");
        assert!(a.cards() == b.cards());
        assert!(a.cards() != c.cards());
        assert!(a.seed() == Some("dashing1"));
    }

    #[test]
    fn replay_url_short() {
        let variant = Arc::new(Variant::default());
        let deck = Deck::parse(variant, "r1 y1 g1 b1 p1 r2 y2 g2 b2 p2").expect("tokens");
        assert!(deck.replay_url(2) == "https://hanab.live/shared-replay-json/215afkpubglqv,00ae,0");
    }

    #[test]
    fn replay_url_dashed() {
        let mut line = Vec::new();
        for suit in ["r", "y", "g", "b", "p"] {
            for (rank, copies) in [(1, 3), (2, 2), (3, 2), (4, 2), (5, 1)] {
                for _ in 0..copies {
                    line.push(format!("{}{}", suit, rank));
                }
            }
        }
        let variant = Arc::new(Variant::default());
        let deck = Deck::parse(variant, &line.join(" ")).expect("sorted deck");
        assert!(
            deck.replay_url(2)
                == "https://hanab.live/shared-replay-json/215aaabbccddefffgghh-iijkkkllmmnnopppqqrr-sstuuuvvwwxxy,00ae,0"
        );
    }

    #[test]
    fn pair_printout() {
        let variant = Arc::new(Variant::default());
        let deck = Deck::parse(variant, "r1 p5 g3").expect("tokens");
        assert!(deck.pairs(Some(2)) == "(0, 1) (4, 5)");
        assert!(deck.pairs(None) == "(0, 1) (4, 5) (2, 3)");
    }
}
