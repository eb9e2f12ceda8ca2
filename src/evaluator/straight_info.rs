use crate::cards::{Card, Rank};

/// Straight order of five cards, if they form one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    /// High to low; the wheel is ordered 5-4-3-2-A.
    pub ordered: Option<[Card; 5]>,
}

impl StraightInfo {
    /// Detect a straight from five cards sorted by rank descending.
    /// Handles both regular straights and the wheel (A-2-3-4-5).
    pub fn detect(sorted: &[Card; 5]) -> Self {
        let is_consecutive =
            (0..4).all(|i| sorted[i].rank().value() == sorted[i + 1].rank().value() + 1);

        if is_consecutive {
            return StraightInfo { ordered: Some(*sorted) };
        }

        let ranks = sorted.map(Card::rank);
        if ranks == [Rank::Ace, Rank::Five, Rank::Four, Rank::Three, Rank::Two] {
            // ace plays low and moves to the back
            return StraightInfo {
                ordered: Some([sorted[1], sorted[2], sorted[3], sorted[4], sorted[0]]),
            };
        }

        StraightInfo { ordered: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn detect(s: &str) -> StraightInfo {
        let mut v = parse_cards(s).unwrap();
        v.sort_by(|a, b| b.rank().cmp(&a.rank()));
        StraightInfo::detect(&[v[0], v[1], v[2], v[3], v[4]])
    }

    fn top(info: StraightInfo) -> Option<Rank> {
        info.ordered.map(|cards| cards[0].rank())
    }

    #[test]
    fn test_regular_straight() {
        assert_eq!(top(detect("9♠ K♦ 10♥ J♣ Q♠")), Some(Rank::King));
    }

    #[test]
    fn test_ace_high_straight() {
        assert_eq!(top(detect("A♠ K♦ Q♥ J♣ 10♠")), Some(Rank::Ace));
    }

    #[test]
    fn test_wheel_moves_ace_last() {
        let info = detect("A♠ 2♦ 3♥ 4♣ 5♠");
        assert_eq!(top(info), Some(Rank::Five));
        let ranks = info.ordered.unwrap().map(Card::rank);
        assert_eq!(ranks, [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]);
    }

    #[test]
    fn test_not_straight() {
        assert!(detect("A♠ K♦ Q♥ J♣ 9♠").ordered.is_none());
        assert!(detect("A♠ A♦ K♥ Q♣ J♠").ordered.is_none());
        assert!(detect("A♠ K♦ 2♥ 3♣ 4♠").ordered.is_none());
    }
}
