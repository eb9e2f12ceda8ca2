pub(crate) mod combinations;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use serde::Serialize;
use std::fmt;

pub use detector::Detector;

/// Poker hand category from weakest (1) to strongest (9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
#[repr(u8)]
pub enum HandRank {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

impl HandRank {
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Human readable name, as shown to players.
    pub const fn label(self) -> &'static str {
        match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified five-card hand.
///
/// `cards` is in tiebreak order: the primary structure first, kickers after,
/// so that comparing two hands of the same rank is a positional comparison of
/// card ranks. Suits never take part in the ordering.
#[derive(Debug, Clone, Copy, Serialize)]
#[non_exhaustive]
pub struct PokerHand {
    pub rank: HandRank,
    pub cards: [Card; 5],
}

impl PokerHand {
    pub(crate) fn new(rank: HandRank, cards: [Card; 5]) -> Self {
        Self { rank, cards }
    }

    /// Card ranks in comparison order.
    pub fn ranks_for_comparison(&self) -> [Rank; 5] {
        self.cards.map(Card::rank)
    }
}

impl Ord for PokerHand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.ranks_for_comparison().cmp(&other.ranks_for_comparison()))
    }
}

impl PartialOrd for PokerHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for PokerHand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PokerHand {}

impl fmt::Display for PokerHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.rank)?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}

/// Classify exactly five cards by running the detector chain.
pub fn evaluate_five(cards: &[Card; 5]) -> PokerHand {
    use detector::CHAIN;
    use hand_analysis::HandAnalysis;

    let analysis = HandAnalysis::new(cards);

    for detector in CHAIN.iter() {
        if let Some(hand) = detector.detect(&analysis) {
            return hand;
        }
    }

    unreachable!("HighCard detector should always match")
}

/// Best hand among all 21 five-card subsets of seven cards.
pub fn evaluate_seven(cards: &[Card; 7]) -> PokerHand {
    use combinations::Combinations7Choose5;

    let first = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    Combinations7Choose5::new().fold(first, |best, indices| {
        let candidate = evaluate_five(&indices.map(|i| cards[i]));
        // strictly greater: the first of equal hands is kept
        if candidate > best {
            candidate
        } else {
            best
        }
    })
}

/// Evaluate a player's two hole cards plus the five community cards.
///
/// # Panics
///
/// Panics unless exactly seven cards are given.
///
/// ```
/// use holdem_rs::cards::parse_cards;
/// use holdem_rs::evaluator::{evaluate, HandRank};
///
/// let cards = parse_cards("A♥ 2♦ 3♣ 4♠ 5♥ K♣ Q♦").unwrap();
/// let hand = evaluate(&cards);
/// assert_eq!(hand.rank, HandRank::Straight);
/// assert_eq!(hand.cards[4].to_string(), "A♥");
/// ```
pub fn evaluate(cards: &[Card]) -> PokerHand {
    let seven: &[Card; 7] = match cards.try_into() {
        Ok(seven) => seven,
        Err(_) => panic!("evaluator needs exactly 7 cards, got {}", cards.len()),
    };
    evaluate_seven(seven)
}

/// Compare the best hands of two seven-card sets.
pub fn compare(a: &[Card], b: &[Card]) -> Ordering {
    evaluate(a).cmp(&evaluate(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn five(s: &str) -> [Card; 5] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1], v[2], v[3], v[4]]
    }

    #[test]
    fn evaluate_five_categories() {
        let cases = [
            ("A♠ K♠ Q♠ J♠ 10♠", HandRank::StraightFlush),
            ("K♣ K♦ K♥ K♠ 2♠", HandRank::FourOfAKind),
            ("10♣ 10♦ 10♥ 2♠ 2♥", HandRank::FullHouse),
            ("A♥ 9♥ 7♥ 3♥ 2♥", HandRank::Flush),
            ("A♣ 2♦ 3♥ 4♠ 5♣", HandRank::Straight),
            ("Q♣ Q♦ Q♥ 9♠ 2♣", HandRank::ThreeOfAKind),
            ("J♣ J♦ 9♣ 9♥ 2♠", HandRank::TwoPair),
            ("A♥ A♦ 10♠ 9♣ 2♦", HandRank::OnePair),
            ("A♥ K♦ 7♠ 5♣ 2♦", HandRank::HighCard),
        ];
        for (cards, rank) in cases {
            assert_eq!(evaluate_five(&five(cards)).rank, rank, "{cards}");
        }
    }

    #[test]
    fn rank_values_and_labels() {
        assert_eq!(HandRank::StraightFlush.value(), 9);
        assert_eq!(HandRank::HighCard.value(), 1);
        assert_eq!(HandRank::FullHouse.label(), "Full House");
        assert!(HandRank::Flush > HandRank::Straight);
    }

    #[test]
    fn kicker_decides_equal_pairs() {
        let a = evaluate_five(&five("A♥ A♦ K♠ 9♣ 2♦"));
        let b = evaluate_five(&five("A♣ A♠ Q♠ 9♦ 2♥"));
        assert!(a > b);
    }

    #[test]
    fn equal_ranks_with_different_suits_tie() {
        let a = evaluate_five(&five("A♥ K♦ 7♠ 5♣ 2♦"));
        let b = evaluate_five(&five("A♣ K♠ 7♥ 5♦ 2♣"));
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
    }

    #[test]
    fn wheel_ranks_below_six_high_straight() {
        let wheel = evaluate_five(&five("A♣ 2♦ 3♥ 4♠ 5♣"));
        let six_high = evaluate_five(&five("2♣ 3♦ 4♥ 5♠ 6♣"));
        assert!(wheel < six_high);
    }

    #[test]
    fn seven_card_picks_best_subset() {
        let cards = parse_cards("K♥ K♦ K♣ A♠ A♥ 2♣ 7♦").unwrap();
        let hand = evaluate(&cards);
        assert_eq!(hand.rank, HandRank::FullHouse);
        assert_eq!(
            hand.ranks_for_comparison(),
            [Rank::King, Rank::King, Rank::King, Rank::Ace, Rank::Ace]
        );
    }

    #[test]
    #[should_panic(expected = "exactly 7 cards")]
    fn evaluate_rejects_wrong_card_count() {
        let cards = parse_cards("K♥ K♦ K♣ A♠ A♥").unwrap();
        let _ = evaluate(&cards);
    }

    #[test]
    fn compare_orders_seven_card_sets() {
        let board = "Q♣ J♦ 9♥ 3♠ 2♣";
        let a = parse_cards(&format!("A♠ A♥ {board}")).unwrap();
        let b = parse_cards(&format!("K♠ K♥ {board}")).unwrap();
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn display_shows_label_and_cards() {
        let hand = evaluate_five(&five("A♥ A♦ 10♠ 9♣ 2♦"));
        assert_eq!(hand.to_string(), "One Pair [A♦ A♥ 10♠ 9♣ 2♦]");
    }
}
