use crate::cards::{Card, Rank};

/// Cards of one rank within a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroup {
    pub rank: Rank,
    pub cards: Vec<Card>,
}

impl RankGroup {
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Groups cards by rank, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<RankGroup>,
}

impl RankGroups {
    /// Build groups from cards already sorted by rank descending.
    pub fn from_sorted(cards: &[Card; 5]) -> Self {
        let mut groups: Vec<RankGroup> = Vec::with_capacity(5);
        for &card in cards {
            match groups.last_mut() {
                Some(g) if g.rank == card.rank() => g.cards.push(card),
                _ => groups.push(RankGroup { rank: card.rank(), cards: vec![card] }),
            }
        }

        // stable: equal counts keep the rank-descending order from the input
        groups.sort_by(|a, b| b.count().cmp(&a.count()).then(b.rank.cmp(&a.rank)));

        Self { groups }
    }

    fn with_count(&self, count: usize) -> impl Iterator<Item = &RankGroup> + '_ {
        self.groups.iter().filter(move |g| g.count() == count)
    }

    /// The four-of-a-kind group, if present.
    pub fn quad(&self) -> Option<&RankGroup> {
        self.with_count(4).next()
    }

    /// The three-of-a-kind group, if present.
    pub fn trips(&self) -> Option<&RankGroup> {
        self.with_count(3).next()
    }

    /// All pair groups, highest rank first.
    pub fn pairs(&self) -> Vec<&RankGroup> {
        self.with_count(2).collect()
    }

    /// Unpaired cards, highest rank first.
    pub fn kickers(&self) -> Vec<Card> {
        self.with_count(1).flat_map(|g| g.cards.iter().copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn groups(s: &str) -> RankGroups {
        let mut v = parse_cards(s).unwrap();
        v.sort_by(|a, b| b.rank().cmp(&a.rank()));
        RankGroups::from_sorted(&[v[0], v[1], v[2], v[3], v[4]])
    }

    #[test]
    fn test_quad() {
        let g = groups("A♠ A♥ A♦ A♣ K♠");
        assert_eq!(g.quad().map(|q| q.rank), Some(Rank::Ace));
        assert!(g.trips().is_none());
        assert!(g.pairs().is_empty());
        assert_eq!(g.kickers().len(), 1);
    }

    #[test]
    fn test_full_house() {
        let g = groups("K♠ A♥ K♦ A♣ K♥");
        assert_eq!(g.trips().map(|t| t.rank), Some(Rank::King));
        assert_eq!(g.pairs()[0].rank, Rank::Ace);
    }

    #[test]
    fn test_two_pair_sorted_by_rank() {
        let g = groups("K♠ 10♦ A♥ K♦ A♣");
        let pairs: Vec<Rank> = g.pairs().iter().map(|p| p.rank).collect();
        assert_eq!(pairs, vec![Rank::Ace, Rank::King]);
        assert_eq!(g.kickers()[0].rank(), Rank::Ten);
    }

    #[test]
    fn test_one_pair_kickers_descending() {
        let g = groups("5♠ 8♦ A♥ 8♣ Q♦");
        assert_eq!(g.pairs()[0].rank, Rank::Eight);
        let kickers: Vec<Rank> = g.kickers().iter().map(|c| c.rank()).collect();
        assert_eq!(kickers, vec![Rank::Ace, Rank::Queen, Rank::Five]);
    }

    #[test]
    fn test_high_card() {
        let g = groups("A♥ 10♦ 7♣ 5♠ 2♥");
        assert!(g.quad().is_none());
        assert!(g.trips().is_none());
        assert!(g.pairs().is_empty());
        assert_eq!(g.kickers().len(), 5);
    }
}
