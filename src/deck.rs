use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// A standard 52-card deck, dealt from the front.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// All 52 cards, unshuffled: suits in `♥ ♦ ♣ ♠` order, ranks ascending within a suit.
    ///
    /// ```
    /// use holdem_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = VecDeque::with_capacity(52);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push_back(Card::new(r, s));
            }
        }
        Self { cards }
    }

    /// A standard deck minus the given cards, keeping generation order.
    pub fn standard_without(excluded: &[Card]) -> Self {
        let mut deck = Self::standard();
        deck.cards.retain(|c| !excluded.contains(c));
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the deck, front first.
    pub fn remaining(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Remove and return the front card.
    ///
    /// # Panics
    ///
    /// Panics when the deck is empty. A hand never needs more than 28 cards,
    /// so running dry means the caller dealt outside the game flow.
    pub fn deal_card(&mut self) -> Card {
        match self.cards.pop_front() {
            Some(card) => card,
            None => panic!("dealt from an empty deck"),
        }
    }

    /// Deal `n` cards from the front.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map(|_| self.deal_card()).collect()
    }

    /// Discard the front card.
    pub fn burn(&mut self) {
        let _ = self.deal_card();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_has_52_distinct_cards() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let set: HashSet<Card> = d.remaining().copied().collect();
        assert_eq!(set.len(), 52);
    }

    #[test]
    fn standard_deck_generation_order() {
        let d = Deck::standard();
        let first: Vec<Card> = d.remaining().take(2).copied().collect();
        assert_eq!(
            first,
            vec![Card::new(Rank::Two, Suit::Hearts), Card::new(Rank::Three, Suit::Hearts)]
        );
        assert_eq!(d.remaining().last().copied(), Some(Card::new(Rank::Ace, Suit::Spades)));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deals_from_the_front() {
        let mut d = Deck::standard();
        assert_eq!(d.deal_card(), Card::new(Rank::Two, Suit::Hearts));
        d.burn();
        assert_eq!(d.deal_card(), Card::new(Rank::Four, Suit::Hearts));
        let five = d.deal_n(5);
        assert_eq!(five.len(), 5);
        assert_eq!(d.len(), 44);
    }

    #[test]
    fn dealing_the_whole_deck_yields_every_card_once() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let dealt: HashSet<Card> = (0..52).map(|_| d.deal_card()).collect();
        assert_eq!(dealt.len(), 52);
        assert!(d.is_empty());
    }

    #[test]
    #[should_panic(expected = "empty deck")]
    fn dealing_from_empty_deck_panics() {
        let mut d = Deck::standard();
        d.deal_n(52);
        d.deal_card();
    }

    #[test]
    fn standard_without_excludes_known_cards() {
        let gone = [Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ten, Suit::Hearts)];
        let d = Deck::standard_without(&gone);
        assert_eq!(d.len(), 50);
        assert!(d.remaining().all(|c| !gone.contains(c)));
    }
}
