use super::hand_analysis::HandAnalysis;
use crate::cards::Card;
use crate::evaluator::{HandRank, PokerHand};

/// One classifier per hand category. Each either recognises the analysed
/// five cards and returns them in tiebreak order, or declines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Detector {
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    OnePair,
    HighCard,
}

/// Detectors from strongest to weakest. `HighCard` is last and never declines.
pub const CHAIN: [Detector; 9] = [
    Detector::StraightFlush,
    Detector::FourOfAKind,
    Detector::FullHouse,
    Detector::Flush,
    Detector::Straight,
    Detector::ThreeOfAKind,
    Detector::TwoPair,
    Detector::OnePair,
    Detector::HighCard,
];

impl Detector {
    pub const fn hand_rank(self) -> HandRank {
        match self {
            Detector::StraightFlush => HandRank::StraightFlush,
            Detector::FourOfAKind => HandRank::FourOfAKind,
            Detector::FullHouse => HandRank::FullHouse,
            Detector::Flush => HandRank::Flush,
            Detector::Straight => HandRank::Straight,
            Detector::ThreeOfAKind => HandRank::ThreeOfAKind,
            Detector::TwoPair => HandRank::TwoPair,
            Detector::OnePair => HandRank::OnePair,
            Detector::HighCard => HandRank::HighCard,
        }
    }

    pub fn detect(self, analysis: &HandAnalysis) -> Option<PokerHand> {
        let cards = match self {
            Detector::StraightFlush => straight_flush(analysis),
            Detector::FourOfAKind => four_of_a_kind(analysis),
            Detector::FullHouse => full_house(analysis),
            Detector::Flush => analysis.suit_info.is_flush.then_some(analysis.sorted_cards),
            Detector::Straight => analysis.straight_info.ordered,
            Detector::ThreeOfAKind => three_of_a_kind(analysis),
            Detector::TwoPair => two_pair(analysis),
            Detector::OnePair => one_pair(analysis),
            Detector::HighCard => Some(analysis.sorted_cards),
        }?;
        Some(PokerHand::new(self.hand_rank(), cards))
    }
}

fn straight_flush(analysis: &HandAnalysis) -> Option<[Card; 5]> {
    if !analysis.suit_info.is_flush {
        return None;
    }
    analysis.straight_info.ordered
}

fn four_of_a_kind(analysis: &HandAnalysis) -> Option<[Card; 5]> {
    let quad = analysis.rank_groups.quad()?;
    let kicker = *analysis.rank_groups.kickers().first()?;
    Some([quad.cards[0], quad.cards[1], quad.cards[2], quad.cards[3], kicker])
}

fn full_house(analysis: &HandAnalysis) -> Option<[Card; 5]> {
    let trips = analysis.rank_groups.trips()?;
    let pairs = analysis.rank_groups.pairs();
    let [pair] = pairs.as_slice() else {
        return None;
    };
    Some([trips.cards[0], trips.cards[1], trips.cards[2], pair.cards[0], pair.cards[1]])
}

fn three_of_a_kind(analysis: &HandAnalysis) -> Option<[Card; 5]> {
    let trips = analysis.rank_groups.trips()?;
    let kickers = analysis.rank_groups.kickers();
    let [high, low] = kickers.as_slice() else {
        return None;
    };
    Some([trips.cards[0], trips.cards[1], trips.cards[2], *high, *low])
}

fn two_pair(analysis: &HandAnalysis) -> Option<[Card; 5]> {
    // pairs() is already highest rank first
    let pairs = analysis.rank_groups.pairs();
    let [high, low] = pairs.as_slice() else {
        return None;
    };
    let kicker = *analysis.rank_groups.kickers().first()?;
    Some([high.cards[0], high.cards[1], low.cards[0], low.cards[1], kicker])
}

fn one_pair(analysis: &HandAnalysis) -> Option<[Card; 5]> {
    let pairs = analysis.rank_groups.pairs();
    let [pair] = pairs.as_slice() else {
        return None;
    };
    let kickers = analysis.rank_groups.kickers();
    let [k1, k2, k3] = kickers.as_slice() else {
        return None;
    };
    Some([pair.cards[0], pair.cards[1], *k1, *k2, *k3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    fn analyze(s: &str) -> HandAnalysis {
        let v = parse_cards(s).unwrap();
        HandAnalysis::new(&[v[0], v[1], v[2], v[3], v[4]])
    }

    fn ranks(hand: &PokerHand) -> [Rank; 5] {
        hand.ranks_for_comparison()
    }

    #[test]
    fn straight_flush_uses_straight_order() {
        let a = analyze("A♥ 2♥ 3♥ 4♥ 5♥");
        let hand = Detector::StraightFlush.detect(&a).unwrap();
        assert_eq!(hand.rank, HandRank::StraightFlush);
        assert_eq!(ranks(&hand), [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]);
        assert!(Detector::StraightFlush.detect(&analyze("A♥ 2♥ 3♥ 4♥ 6♥")).is_none());
    }

    #[test]
    fn four_of_a_kind_puts_kicker_last() {
        let hand = Detector::FourOfAKind.detect(&analyze("A♥ K♥ K♦ K♣ K♠")).unwrap();
        assert_eq!(ranks(&hand), [Rank::King, Rank::King, Rank::King, Rank::King, Rank::Ace]);
    }

    #[test]
    fn full_house_is_triple_then_pair() {
        let hand = Detector::FullHouse.detect(&analyze("A♠ K♥ A♥ K♦ K♣")).unwrap();
        assert_eq!(ranks(&hand), [Rank::King, Rank::King, Rank::King, Rank::Ace, Rank::Ace]);
        assert!(Detector::FullHouse.detect(&analyze("K♥ K♦ K♣ A♠ Q♥")).is_none());
    }

    #[test]
    fn three_of_a_kind_kickers_descending() {
        let hand = Detector::ThreeOfAKind.detect(&analyze("2♣ Q♣ 9♠ Q♦ Q♥")).unwrap();
        assert_eq!(ranks(&hand), [Rank::Queen, Rank::Queen, Rank::Queen, Rank::Nine, Rank::Two]);
    }

    #[test]
    fn two_pair_orders_higher_pair_first() {
        let hand = Detector::TwoPair.detect(&analyze("9♣ 2♠ J♣ 9♥ J♦")).unwrap();
        assert_eq!(ranks(&hand), [Rank::Jack, Rank::Jack, Rank::Nine, Rank::Nine, Rank::Two]);
    }

    #[test]
    fn one_pair_declines_two_pair() {
        assert!(Detector::OnePair.detect(&analyze("9♣ 2♠ J♣ 9♥ J♦")).is_none());
        let hand = Detector::OnePair.detect(&analyze("9♣ 2♠ J♣ 9♥ A♦")).unwrap();
        assert_eq!(ranks(&hand), [Rank::Nine, Rank::Nine, Rank::Ace, Rank::Jack, Rank::Two]);
    }

    #[test]
    fn high_card_always_matches() {
        let hand = Detector::HighCard.detect(&analyze("K♥ K♦ K♣ K♠ A♥")).unwrap();
        assert_eq!(hand.rank, HandRank::HighCard);
    }

    #[test]
    fn chain_is_strongest_first() {
        let values: Vec<u8> = CHAIN.iter().map(|d| d.hand_rank().value()).collect();
        assert_eq!(values, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }
}
