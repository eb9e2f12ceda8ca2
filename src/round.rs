use crate::player::PlayerId;
use std::collections::HashMap;

/// Money state of one betting round (one street).
///
/// The pot accumulates over the whole hand and is carried into each new
/// street's round; `current_bet` and the per-player contributions start from
/// zero on every street.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    pot: u64,
    current_bet: u64,
    committed: HashMap<PlayerId, u64>,
}

impl Round {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a round from persisted parts.
    pub(crate) fn from_parts(
        pot: u64,
        current_bet: u64,
        committed: HashMap<PlayerId, u64>,
    ) -> Self {
        Self { pot, current_bet, committed }
    }

    /// Fresh round for the next street, carrying the pot.
    pub fn next_street(&self) -> Round {
        Round { pot: self.pot, ..Round::default() }
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    /// Chips `player` has put in on this street.
    pub fn committed(&self, player: PlayerId) -> u64 {
        self.committed.get(&player).copied().unwrap_or(0)
    }

    /// What `player` still owes to match the current bet.
    pub fn to_call(&self, player: PlayerId) -> u64 {
        self.current_bet.saturating_sub(self.committed(player))
    }

    /// Record a forced bet; it counts as the player's contribution so they
    /// are not asked to call it again.
    pub(crate) fn post_blind(&mut self, player: PlayerId, amount: u64) {
        self.contribute(player, amount);
    }

    /// # Panics
    ///
    /// Panics if the pot would overflow.
    pub(crate) fn contribute(&mut self, player: PlayerId, amount: u64) {
        assert!(amount <= u64::MAX - self.pot, "pot of {} cannot take {amount} more", self.pot);
        self.pot += amount;
        *self.committed.entry(player).or_insert(0) += amount;
    }

    pub(crate) fn set_current_bet(&mut self, amount: u64) {
        self.current_bet = amount;
    }

    /// Empty the pot for distribution.
    pub(crate) fn take_pot(&mut self) -> u64 {
        std::mem::take(&mut self.pot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contributions_accumulate_per_player() {
        let a = PlayerId::new();
        let b = PlayerId::new();
        let mut r = Round::new();
        r.post_blind(a, 10);
        r.post_blind(b, 20);
        r.set_current_bet(20);
        assert_eq!(r.pot(), 30);
        assert_eq!(r.to_call(a), 10);
        assert_eq!(r.to_call(b), 0);
        r.contribute(a, 10);
        assert_eq!(r.committed(a), 20);
        assert_eq!(r.pot(), 40);
    }

    #[test]
    fn next_street_keeps_only_the_pot() {
        let a = PlayerId::new();
        let mut r = Round::new();
        r.contribute(a, 50);
        r.set_current_bet(50);
        let next = r.next_street();
        assert_eq!(next.pot(), 50);
        assert_eq!(next.current_bet(), 0);
        assert_eq!(next.committed(a), 0);
    }

    #[test]
    fn take_pot_resets_to_zero() {
        let mut r = Round::new();
        r.contribute(PlayerId::new(), 70);
        assert_eq!(r.take_pot(), 70);
        assert_eq!(r.pot(), 0);
    }

    #[test]
    #[should_panic(expected = "cannot take")]
    fn pot_overflow_is_caught() {
        let mut r = Round::new();
        r.contribute(PlayerId::new(), u64::MAX - 5);
        r.contribute(PlayerId::new(), 10);
    }
}
