use crate::error::ValidationError;
use crate::player::Player;
use crate::round::Round;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The action names accepted at the command boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl ActionKind {
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::Fold => "FOLD",
            ActionKind::Check => "CHECK",
            ActionKind::Call => "CALL",
            ActionKind::Raise => "RAISE",
            ActionKind::AllIn => "ALL_IN",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActionKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FOLD" => Ok(ActionKind::Fold),
            "CHECK" => Ok(ActionKind::Check),
            "CALL" => Ok(ActionKind::Call),
            "RAISE" => Ok(ActionKind::Raise),
            "ALL_IN" | "ALLIN" | "ALL-IN" => Ok(ActionKind::AllIn),
            _ => Err(ValidationError::UnknownAction(s.to_string())),
        }
    }
}

/// A validated player action. `Raise` carries the raise-to amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(u64),
    AllIn,
}

impl Action {
    /// Build an action from its wire parts. The amount is only meaningful for
    /// a raise but is never allowed to be negative.
    ///
    /// ```
    /// use holdem_rs::betting::{Action, ActionKind};
    ///
    /// assert_eq!(Action::from_command(ActionKind::Raise, 60).unwrap(), Action::Raise(60));
    /// assert!(Action::from_command(ActionKind::Call, -1).is_err());
    /// ```
    pub fn from_command(kind: ActionKind, amount: i64) -> Result<Self, ValidationError> {
        let amount = u64::try_from(amount).map_err(|_| ValidationError::NegativeAmount(amount))?;
        Ok(match kind {
            ActionKind::Fold => Action::Fold,
            ActionKind::Check => Action::Check,
            ActionKind::Call => Action::Call,
            ActionKind::Raise => Action::Raise(amount),
            ActionKind::AllIn => Action::AllIn,
        })
    }

    pub fn kind(self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::Raise(_) => ActionKind::Raise,
            Action::AllIn => ActionKind::AllIn,
        }
    }
}

/// Legal shape, illegal given the betting state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("cannot check: {to_call} to call")]
    CheckFacingBet { to_call: u64 },
    #[error("insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: u64, available: u64 },
    #[error("raise must exceed the current bet: current {current_bet}, got {amount}")]
    RaiseNotAboveBet { current_bet: u64, amount: u64 },
    #[error("it is not this player's turn")]
    NotYourTurn,
}

/// What an accepted action did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub kind: ActionKind,
    /// Chips moved from the player's stack into the pot.
    pub paid: u64,
    pub pot: u64,
    pub current_bet: u64,
    pub folded: bool,
}

/// Applies single actions to a [`Round`].
///
/// Every check happens before any chip moves, so a rejected action leaves both
/// the round and the player untouched.
pub struct BettingRound<'a> {
    round: &'a mut Round,
}

impl<'a> BettingRound<'a> {
    pub fn new(round: &'a mut Round) -> Self {
        Self { round }
    }

    /// # Panics
    ///
    /// Panics if `player` has already folded; turn order never hands a folded
    /// player the action.
    pub fn apply(
        &mut self,
        player: &mut Player,
        action: Action,
    ) -> Result<ActionOutcome, ActionError> {
        assert!(!player.is_folded(), "folded player {} cannot act", player.id());

        let id = player.id();
        let to_call = self.round.to_call(id);
        let current_bet = self.round.current_bet();

        let paid = match action {
            Action::Fold => {
                player.fold();
                0
            }
            Action::Check => {
                if to_call > 0 {
                    return Err(ActionError::CheckFacingBet { to_call });
                }
                0
            }
            Action::Call => {
                if to_call > player.chips() {
                    return Err(ActionError::InsufficientChips {
                        needed: to_call,
                        available: player.chips(),
                    });
                }
                self.pay(player, to_call);
                to_call
            }
            Action::Raise(amount) => {
                if amount <= current_bet {
                    return Err(ActionError::RaiseNotAboveBet { current_bet, amount });
                }
                let delta = amount.saturating_sub(self.round.committed(id));
                if delta > player.chips() {
                    return Err(ActionError::InsufficientChips {
                        needed: delta,
                        available: player.chips(),
                    });
                }
                self.pay(player, delta);
                self.round.set_current_bet(amount);
                delta
            }
            Action::AllIn => {
                let stack = player.chips();
                self.pay(player, stack);
                let total = self.round.committed(id);
                if total > current_bet {
                    self.round.set_current_bet(total);
                }
                stack
            }
        };

        Ok(ActionOutcome {
            kind: action.kind(),
            paid,
            pot: self.round.pot(),
            current_bet: self.round.current_bet(),
            folded: player.is_folded(),
        })
    }

    fn pay(&mut self, player: &mut Player, amount: u64) {
        player.subtract_chips(amount);
        self.round.contribute(player.id(), amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(chips: u64, committed: u64, current_bet: u64) -> (Player, Round) {
        let p = Player::new("p", chips).unwrap();
        let mut r = Round::new();
        if committed > 0 {
            r.post_blind(p.id(), committed);
        }
        r.set_current_bet(current_bet);
        (p, r)
    }

    #[test]
    fn check_only_with_nothing_to_call() {
        let (mut p, mut r) = setup(100, 0, 20);
        let err = BettingRound::new(&mut r).apply(&mut p, Action::Check).unwrap_err();
        assert_eq!(err, ActionError::CheckFacingBet { to_call: 20 });

        let (mut p, mut r) = setup(100, 20, 20);
        let out = BettingRound::new(&mut r).apply(&mut p, Action::Check).unwrap();
        assert_eq!(out.paid, 0);
    }

    #[test]
    fn call_charges_the_difference() {
        let (mut p, mut r) = setup(100, 10, 20);
        let out = BettingRound::new(&mut r).apply(&mut p, Action::Call).unwrap();
        assert_eq!(out.paid, 10);
        assert_eq!(p.chips(), 90);
        assert_eq!(out.pot, 20);
        assert_eq!(out.current_bet, 20);
    }

    #[test]
    fn call_rejected_when_short() {
        let (mut p, mut r) = setup(15, 0, 20);
        let err = BettingRound::new(&mut r).apply(&mut p, Action::Call).unwrap_err();
        assert_eq!(err, ActionError::InsufficientChips { needed: 20, available: 15 });
        assert_eq!(p.chips(), 15);
        assert_eq!(r.pot(), 0);
    }

    #[test]
    fn raise_must_exceed_current_bet() {
        let (mut p, mut r) = setup(100, 0, 20);
        for amount in [5, 20] {
            let err = BettingRound::new(&mut r).apply(&mut p, Action::Raise(amount)).unwrap_err();
            assert_eq!(err, ActionError::RaiseNotAboveBet { current_bet: 20, amount });
        }
        assert_eq!(p.chips(), 100);
        assert_eq!(r.current_bet(), 20);
    }

    #[test]
    fn raise_to_charges_delta_over_commitment() {
        let (mut p, mut r) = setup(100, 20, 20);
        let out = BettingRound::new(&mut r).apply(&mut p, Action::Raise(50)).unwrap();
        assert_eq!(out.paid, 30);
        assert_eq!(p.chips(), 70);
        assert_eq!(r.current_bet(), 50);
        assert_eq!(r.committed(p.id()), 50);
    }

    #[test]
    fn raise_rejected_when_unaffordable() {
        let (mut p, mut r) = setup(40, 0, 20);
        let err = BettingRound::new(&mut r).apply(&mut p, Action::Raise(50)).unwrap_err();
        assert_eq!(err, ActionError::InsufficientChips { needed: 50, available: 40 });
    }

    #[test]
    fn all_in_raises_bet_only_when_above_it() {
        let (mut p, mut r) = setup(30, 0, 20);
        let out = BettingRound::new(&mut r).apply(&mut p, Action::AllIn).unwrap();
        assert_eq!(out.paid, 30);
        assert_eq!(r.current_bet(), 30);
        assert!(p.is_all_in());

        let (mut p, mut r) = setup(5, 0, 20);
        BettingRound::new(&mut r).apply(&mut p, Action::AllIn).unwrap();
        assert_eq!(r.current_bet(), 20);
    }

    #[test]
    fn fold_marks_player() {
        let (mut p, mut r) = setup(30, 0, 20);
        let out = BettingRound::new(&mut r).apply(&mut p, Action::Fold).unwrap();
        assert!(out.folded);
        assert_eq!(out.paid, 0);
    }

    #[test]
    #[should_panic(expected = "cannot act")]
    fn folded_player_panics() {
        let (mut p, mut r) = setup(30, 0, 20);
        p.fold();
        let _ = BettingRound::new(&mut r).apply(&mut p, Action::Call);
    }

    #[test]
    fn negative_amounts_are_rejected_for_every_kind() {
        let kinds = [
            ActionKind::Fold,
            ActionKind::Check,
            ActionKind::Call,
            ActionKind::Raise,
            ActionKind::AllIn,
        ];
        for kind in kinds {
            assert_eq!(Action::from_command(kind, -5), Err(ValidationError::NegativeAmount(-5)));
        }
    }

    #[test]
    fn action_kind_parses_wire_names() {
        assert_eq!("all_in".parse::<ActionKind>().unwrap(), ActionKind::AllIn);
        assert_eq!("Raise".parse::<ActionKind>().unwrap(), ActionKind::Raise);
        assert!("bet".parse::<ActionKind>().is_err());
        assert_eq!(serde_json::to_string(&ActionKind::AllIn).unwrap(), "\"ALL_IN\"");
    }
}
