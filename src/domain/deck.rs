use super::{Card, FaceState, Symbol};
use rand::Rng;

/// Number of cards on the board
pub const DECK_SIZE: usize = Symbol::ALL.len() * 2;

/// Number of pairs that must be found to finish a game
pub const PAIR_COUNT: usize = Symbol::ALL.len();

/// Deck holds the sixteen cards of one game in board order.
/// The multiset of symbols never changes, only their order and faces.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck: each symbol twice, adjacent
    pub fn new() -> Self {
        let cards = Symbol::ALL
            .iter()
            .flat_map(|&symbol| [Card::new(symbol), Card::new(symbol)])
            .collect();
        Self { cards }
    }

    /// Fresh deck in a uniformly random order
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// Fisher-Yates shuffle; also turns every card face-down
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        self.cards.iter_mut().for_each(|card| card.face = FaceState::Hidden);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get card at position (with bounds checking)
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    pub fn set_face(&mut self, index: usize, face: FaceState) {
        if let Some(card) = self.cards.get_mut(index) {
            card.face = face;
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Count of cards already matched
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count()
    }

    /// Index of the other card carrying the same symbol
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        let symbol = self.get(index)?.symbol;
        self.cards
            .iter()
            .enumerate()
            .find(|&(i, card)| i != index && card.symbol == symbol)
            .map(|(i, _)| i)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn symbol_counts(deck: &Deck) -> HashMap<Symbol, usize> {
        let mut counts = HashMap::new();
        for card in deck.cards() {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_new_deck_has_every_symbol_twice() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        let counts = symbol_counts(&deck);
        assert_eq!(counts.len(), PAIR_COUNT);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::shuffled(&mut rng);
        assert_eq!(deck.len(), DECK_SIZE);
        assert_eq!(symbol_counts(&deck), symbol_counts(&Deck::new()));
    }

    #[test]
    fn test_shuffle_is_deterministic_for_seed() {
        let a = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        let b = Deck::shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn test_shuffle_hides_all_cards() {
        let mut deck = Deck::new();
        deck.set_face(0, FaceState::Matched);
        deck.set_face(3, FaceState::Revealed);
        deck.shuffle(&mut StdRng::seed_from_u64(1));
        assert!(deck.cards().iter().all(|card| card.is_hidden()));
    }

    #[test]
    fn test_partner_of() {
        let deck = Deck::shuffled(&mut StdRng::seed_from_u64(3));
        for i in 0..deck.len() {
            let j = deck.partner_of(i).unwrap();
            assert_ne!(i, j);
            assert_eq!(deck.get(i).unwrap().symbol, deck.get(j).unwrap().symbol);
        }
        assert_eq!(deck.partner_of(DECK_SIZE), None);
    }

    #[test]
    fn test_set_face_out_of_range_is_noop() {
        let mut deck = Deck::new();
        deck.set_face(99, FaceState::Matched);
        assert_eq!(deck.matched_count(), 0);
    }
}
