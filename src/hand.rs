use crate::cards::{parse_cards, Card};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("at most two hole cards, got {0}")]
    TooManyHoleCards(usize),
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("duplicate cards on board")]
    DuplicateBoardCards,
    #[error("card {0} appears more than once on the table")]
    Overlap(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's private hole cards: empty between hands, two once dealt.
///
/// ```
/// use holdem_rs::cards::{Card, Rank, Suit};
/// use holdem_rs::hand::PlayerHand;
///
/// let mut hand = PlayerHand::default();
/// hand.add_card(Card::new(Rank::Ace, Suit::Spades));
/// hand.add_card(Card::new(Rank::King, Suit::Spades));
/// assert_eq!(hand.cards().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct PlayerHand {
    cards: Vec<Card>,
}

impl PlayerHand {
    pub const MAX_CARDS: usize = 2;

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > Self::MAX_CARDS {
            return Err(HandError::TooManyHoleCards(cards.len()));
        }
        if cards.len() == 2 && cards[0] == cards[1] {
            return Err(HandError::DuplicateHoleCards);
        }
        Ok(Self { cards })
    }

    /// Add a dealt card.
    ///
    /// # Panics
    ///
    /// Panics if the hand already holds two cards.
    pub fn add_card(&mut self, card: Card) {
        assert!(self.cards.len() < Self::MAX_CARDS, "a hand holds at most two cards");
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl TryFrom<Vec<Card>> for PlayerHand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_new(cards)
    }
}

impl From<PlayerHand> for Vec<Card> {
    fn from(hand: PlayerHand) -> Self {
        hand.cards
    }
}

impl FromStr for PlayerHand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_new(cards)
    }
}

/// Community cards on the board (flop, turn, river).
///
/// ```
/// use holdem_rs::cards::{Card, Rank, Suit};
/// use holdem_rs::hand::Board;
///
/// let board = Board::try_new(vec![
///     Card::new(Rank::Two, Suit::Clubs),
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Clubs),
/// ]).unwrap();
/// assert_eq!(board.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > 5 {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateBoardCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }

    pub(crate) fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
        debug_assert!(self.cards.len() <= 5);
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

/// Check that no card is visible twice across the hands and the board.
pub fn validate_table<'a, I>(hands: I, board: &Board) -> Result<(), HandError>
where
    I: IntoIterator<Item = &'a PlayerHand>,
{
    let mut seen: HashSet<Card> = board.as_slice().iter().copied().collect();
    if seen.len() != board.len() {
        return Err(HandError::DuplicateBoardCards);
    }
    for hand in hands {
        for &card in hand.cards() {
            if !seen.insert(card) {
                return Err(HandError::Overlap(card));
            }
        }
    }
    Ok(())
}
