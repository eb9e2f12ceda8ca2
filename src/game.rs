use crate::betting::{Action, ActionError, ActionOutcome, BettingRound};
use crate::cards::Card;
use crate::deck::Deck;
use crate::error::{PokerError, ValidationError};
use crate::evaluator::{evaluate, PokerHand};
use crate::hand::{validate_table, Board};
use crate::player::{Player, PlayerId};
use crate::round::Round;
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for GameId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    Waiting,
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Finished,
}

impl Phase {
    /// Phases in which players act.
    pub const fn is_betting(self) -> bool {
        matches!(self, Phase::PreFlop | Phase::Flop | Phase::Turn | Phase::River)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Phase::Waiting => "WAITING",
            Phase::PreFlop => "PRE_FLOP",
            Phase::Flop => "FLOP",
            Phase::Turn => "TURN",
            Phase::River => "RIVER",
            Phase::Showdown => "SHOWDOWN",
            Phase::Finished => "FINISHED",
        }
    }

    /// Community cards on the table once this phase has been dealt.
    const fn board_len(self) -> Option<usize> {
        match self {
            Phase::Waiting | Phase::PreFlop => Some(0),
            Phase::Flop => Some(3),
            Phase::Turn => Some(4),
            Phase::River => Some(5),
            Phase::Showdown | Phase::Finished => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Forced bets.
///
/// ```
/// use holdem_rs::game::Blinds;
///
/// let blinds = Blinds::new(10, 20).unwrap();
/// assert_eq!(blinds.to_string(), "10/20");
/// assert!(Blinds::new(20, 10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blinds {
    small: u64,
    big: u64,
}

impl Blinds {
    pub fn new(small: u64, big: u64) -> Result<Self, ValidationError> {
        if small == 0 || big < small {
            return Err(ValidationError::InvalidBlinds { small, big });
        }
        Ok(Self { small, big })
    }

    pub fn small(&self) -> u64 {
        self.small
    }

    pub fn big(&self) -> u64 {
        self.big
    }
}

impl fmt::Display for Blinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.small, self.big)
    }
}

/// Operation not allowed in the game's current state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StateError {
    #[error("game already started (phase {0})")]
    AlreadyStarted(Phase),
    #[error("expected phase {expected}, game is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("no betting takes place in phase {0}")]
    NotBetting(Phase),
    #[error("no street left to deal in phase {0}")]
    NothingToDeal(Phase),
    #[error("betting round for {0} is not complete")]
    BettingIncomplete(Phase),
    #[error("betting round for {0} is already complete")]
    RoundComplete(Phase),
    #[error("no player left in the hand to award the pot")]
    NoContenders,
    #[error("game is over")]
    GameOver,
}

/// Result of a showdown. The whole pot goes to one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Showdown {
    pub winner: PlayerId,
    pub winner_name: String,
    pub hand: PokerHand,
    pub amount: u64,
}

/// One step of automatic progression after a betting round completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    StreetDealt { completed: Phase, phase: Phase, cards: Vec<Card> },
    Showdown { completed: Phase, showdown: Showdown },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextHand {
    Started { eliminated: Vec<PlayerId> },
    /// Fewer than two players have chips left.
    GameOver { winner: Option<PlayerId>, eliminated: Vec<PlayerId> },
}

/// A table playing a series of hands.
///
/// The game owns its deck, board, seats and the current betting round. All
/// mutation goes through the methods below; accessors hand out read-only
/// views.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) id: GameId,
    pub(crate) phase: Phase,
    pub(crate) blinds: Blinds,
    pub(crate) deck: Deck,
    pub(crate) community: Board,
    pub(crate) players: Vec<Player>,
    pub(crate) round: Round,
    pub(crate) dealer: usize,
    pub(crate) turn: usize,
    pub(crate) acted: HashSet<PlayerId>,
    pub(crate) hand_number: u32,
    pub(crate) over: bool,
    last_showdown: Option<Showdown>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Seat `players` in the given order, dealer button on seat 0.
    pub fn new(players: Vec<Player>, blinds: Blinds) -> Result<Self, ValidationError> {
        Self::check_seats(&players)?;
        if players.iter().any(|p| p.chips() == 0) {
            return Err(ValidationError::NoChips);
        }
        let mut players = players;
        for p in &mut players {
            p.reset_for_new_hand();
        }
        Ok(Self {
            id: GameId::new(),
            phase: Phase::Waiting,
            blinds,
            deck: Deck::standard(),
            community: Board::default(),
            players,
            round: Round::new(),
            dealer: 0,
            turn: 0,
            acted: HashSet::new(),
            hand_number: 0,
            over: false,
            last_showdown: None,
            rng: ChaCha8Rng::seed_from_u64(rand::rng().random()),
        })
    }

    /// Use a fixed seed for every shuffle this game performs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    fn check_seats(players: &[Player]) -> Result<(), ValidationError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
            return Err(ValidationError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                got: players.len(),
            });
        }
        let mut seen = HashSet::new();
        for p in players {
            if !seen.insert(p.id()) {
                return Err(ValidationError::DuplicatePlayer(p.id()));
            }
            if p.chips() > Player::MAX_CHIPS {
                let max = Player::MAX_CHIPS;
                return Err(ValidationError::TooManyChips { max, got: p.chips() });
            }
        }
        Ok(())
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn blinds(&self) -> Blinds {
        self.blinds
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn community_cards(&self) -> &[Card] {
        self.community.as_slice()
    }

    /// Hole cards of a seated player.
    pub fn hole_cards(&self, id: PlayerId) -> Option<&[Card]> {
        self.player(id).map(|p| p.hand().cards())
    }

    pub fn pot(&self) -> u64 {
        self.round.pot()
    }

    pub fn current_bet(&self) -> u64 {
        self.round.current_bet()
    }

    /// Chips `id` has put in on the current street.
    pub fn committed(&self, id: PlayerId) -> u64 {
        self.round.committed(id)
    }

    pub fn has_acted(&self, id: PlayerId) -> bool {
        self.acted.contains(&id)
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Seat index of the turn pointer.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player expected to act, if anyone is.
    pub fn current_player(&self) -> Option<&Player> {
        if !self.phase.is_betting() || self.is_betting_round_complete() {
            return None;
        }
        self.players.get(self.turn).filter(|p| p.can_act())
    }

    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn last_showdown(&self) -> Option<&Showdown> {
        self.last_showdown.as_ref()
    }

    fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    /// First seat at or after `start` (wrapping) whose player can act.
    /// Scans each seat at most once.
    fn first_eligible_from(&self, start: usize) -> Option<usize> {
        let n = self.players.len();
        (0..n).map(|offset| (start + offset) % n).find(|&seat| self.players[seat].can_act())
    }

    /// Begin a hand: fresh deck, blinds posted, two hole cards each.
    pub fn start(&mut self) -> Result<(), StateError> {
        if self.over {
            return Err(StateError::GameOver);
        }
        if self.phase != Phase::Waiting {
            return Err(StateError::AlreadyStarted(self.phase));
        }
        let n = self.players.len();

        self.deck = Deck::standard();
        self.deck.shuffle_with(&mut self.rng);
        self.community.clear();
        self.round = Round::new();
        self.acted.clear();
        self.last_showdown = None;
        for p in &mut self.players {
            p.reset_for_new_hand();
        }

        let sb = (self.dealer + 1) % n;
        let bb = (self.dealer + 2) % n;
        self.post_blind(sb, self.blinds.small());
        self.post_blind(bb, self.blinds.big());
        self.round.set_current_bet(self.blinds.big());

        self.deal_hole_cards();

        self.hand_number += 1;
        self.phase = Phase::PreFlop;
        let first = (self.dealer + 3) % n;
        self.turn = self.first_eligible_from(first).unwrap_or(first);

        info!(
            "game {}: hand #{} started, dealer seat {}, blinds {}, pot {}",
            self.id,
            self.hand_number,
            self.dealer,
            self.blinds,
            self.round.pot()
        );
        Ok(())
    }

    /// A short stack posts whatever it has.
    fn post_blind(&mut self, seat: usize, blind: u64) {
        let player = &mut self.players[seat];
        let amount = player.chips().min(blind);
        player.subtract_chips(amount);
        self.round.post_blind(player.id(), amount);
        debug!("game {}: {} posts blind {}", self.id, player.name(), amount);
    }

    /// Round-robin from the seat left of the dealer, one card per pass.
    fn deal_hole_cards(&mut self) {
        let n = self.players.len();
        for _ in 0..2 {
            for offset in 1..=n {
                let seat = (self.dealer + offset) % n;
                let card = self.deck.deal_card();
                self.players[seat].hand.add_card(card);
            }
        }
    }

    pub fn is_player_turn(&self, id: PlayerId) -> bool {
        self.phase.is_betting()
            && self.players.get(self.turn).is_some_and(|p| p.id() == id && p.can_act())
    }

    /// Validate and apply one action for the player whose turn it is.
    pub fn apply_action(
        &mut self,
        id: PlayerId,
        action: Action,
    ) -> Result<ActionOutcome, PokerError> {
        if !self.phase.is_betting() {
            return Err(StateError::NotBetting(self.phase).into());
        }
        let seat = self.seat_of(id).ok_or_else(|| PokerError::not_found("player", id))?;
        if self.is_betting_round_complete() {
            return Err(StateError::RoundComplete(self.phase).into());
        }
        if !self.is_player_turn(id) {
            return Err(ActionError::NotYourTurn.into());
        }

        let outcome = BettingRound::new(&mut self.round).apply(&mut self.players[seat], action)?;
        self.record_player_action(seat);

        debug!(
            "game {}: {} {} (paid {}), pot {}, bet {}",
            self.id,
            self.players[seat].name(),
            outcome.kind,
            outcome.paid,
            outcome.pot,
            outcome.current_bet
        );
        Ok(outcome)
    }

    /// Mark `seat` as having acted and pass the turn to the next seat that
    /// can act, skipping folded and all-in players.
    fn record_player_action(&mut self, seat: usize) {
        self.acted.insert(self.players[seat].id());
        let n = self.players.len();
        if let Some(next) = self.first_eligible_from((seat + 1) % n) {
            self.turn = next;
        }
    }

    /// Whether the current street's betting is settled.
    ///
    /// Settled when at most one player is left in the hand, or when every
    /// player who can still bet has acted and matched the current bet. A
    /// player with no chips left is never waited on, and once at most one
    /// player with chips remains and has matched, nobody is left to bet
    /// against.
    pub fn is_betting_round_complete(&self) -> bool {
        let in_hand: Vec<&Player> = self.players.iter().filter(|p| !p.is_folded()).collect();
        if in_hand.len() <= 1 {
            return true;
        }
        let bet = self.round.current_bet();
        let matched = |p: &Player| self.round.committed(p.id()) >= bet;
        let live: Vec<&Player> = in_hand.into_iter().filter(|p| p.chips() > 0).collect();

        if live.iter().all(|p| self.acted.contains(&p.id()) && matched(*p)) {
            return true;
        }
        live.len() == 1 && matched(live[0])
    }

    pub fn deal_flop(&mut self) -> Result<Vec<Card>, StateError> {
        self.deal_street(Phase::PreFlop, Phase::Flop, 3)
    }

    pub fn deal_turn(&mut self) -> Result<Vec<Card>, StateError> {
        self.deal_street(Phase::Flop, Phase::Turn, 1)
    }

    pub fn deal_river(&mut self) -> Result<Vec<Card>, StateError> {
        self.deal_street(Phase::Turn, Phase::River, 1)
    }

    fn deal_street(
        &mut self,
        from: Phase,
        to: Phase,
        count: usize,
    ) -> Result<Vec<Card>, StateError> {
        if self.phase != from {
            return Err(StateError::WrongPhase { expected: from, actual: self.phase });
        }
        if !self.is_betting_round_complete() {
            return Err(StateError::BettingIncomplete(from));
        }

        self.deck.burn();
        let cards = self.deck.deal_n(count);
        self.community.extend(cards.iter().copied());
        self.round = self.round.next_street();
        self.acted.clear();
        self.phase = to;

        let n = self.players.len();
        let first = (self.dealer + 1) % n;
        self.turn = self.first_eligible_from(first).unwrap_or(first);

        info!(
            "game {}: {} dealt [{}], pot {}",
            self.id,
            to,
            cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" "),
            self.round.pot()
        );
        Ok(cards)
    }

    /// Evaluate every remaining hand and pay the whole pot to the best one.
    /// Among equal hands the earliest seat wins.
    pub fn determine_winner(&mut self) -> Result<Showdown, StateError> {
        if self.phase != Phase::River {
            return Err(StateError::WrongPhase { expected: Phase::River, actual: self.phase });
        }
        if !self.is_betting_round_complete() {
            return Err(StateError::BettingIncomplete(Phase::River));
        }

        let board = self.community.as_slice();
        let mut best: Option<(usize, PokerHand)> = None;
        for (seat, player) in self.players.iter().enumerate().filter(|(_, p)| !p.is_folded()) {
            let mut cards = Vec::with_capacity(7);
            cards.extend_from_slice(player.hand().cards());
            cards.extend_from_slice(board);
            let hand = evaluate(&cards);
            debug!("game {}: {} shows {}", self.id, player.name(), hand);
            if best.as_ref().map_or(true, |(_, b)| hand > *b) {
                best = Some((seat, hand));
            }
        }
        let Some((seat, hand)) = best else {
            return Err(StateError::NoContenders);
        };

        self.phase = Phase::Showdown;
        let amount = self.round.take_pot();
        let winner = &mut self.players[seat];
        winner.add_chips(amount);
        let showdown =
            Showdown { winner: winner.id(), winner_name: winner.name().to_string(), hand, amount };

        info!("game {}: {} wins {} with {}", self.id, showdown.winner_name, amount, hand.rank);
        self.last_showdown = Some(showdown.clone());
        self.phase = Phase::Finished;
        Ok(showdown)
    }

    /// Move past a settled betting round: deal the next street, or run the
    /// showdown after the river.
    pub fn advance(&mut self) -> Result<Progress, StateError> {
        let completed = self.phase;
        let dealt = |phase: Phase| {
            move |cards: Vec<Card>| Progress::StreetDealt { completed, phase, cards }
        };
        match completed {
            Phase::PreFlop => self.deal_flop().map(dealt(Phase::Flop)),
            Phase::Flop => self.deal_turn().map(dealt(Phase::Turn)),
            Phase::Turn => self.deal_river().map(dealt(Phase::River)),
            Phase::River => {
                self.determine_winner().map(|showdown| Progress::Showdown { completed, showdown })
            }
            other => Err(StateError::NotBetting(other)),
        }
    }

    /// Move the button one seat to the left.
    pub fn advance_dealer(&mut self) {
        self.dealer = (self.dealer + 1) % self.players.len();
    }

    /// Drop players with no chips. The button stays anchored so that
    /// `advance_dealer` moves it to the first survivor after the old dealer.
    pub fn remove_broke_players(&mut self) -> Vec<PlayerId> {
        let up_to_dealer = self.players[..=self.dealer].iter().filter(|p| p.chips() > 0).count();
        let (kept, removed): (Vec<Player>, Vec<Player>) =
            std::mem::take(&mut self.players).into_iter().partition(|p| p.chips() > 0);
        self.players = kept;
        let len = self.players.len();
        if len > 0 {
            self.dealer = (up_to_dealer + len - 1) % len;
        }
        for p in &removed {
            info!("game {}: {} is out of chips", self.id, p.name());
        }
        removed.iter().map(Player::id).collect()
    }

    /// After a finished hand: eliminate broke players, move the button and
    /// deal the next hand, or end the game when fewer than two remain.
    pub fn start_next_hand(&mut self) -> Result<NextHand, StateError> {
        if self.over {
            return Err(StateError::GameOver);
        }
        if self.phase != Phase::Finished {
            return Err(StateError::WrongPhase { expected: Phase::Finished, actual: self.phase });
        }
        let eliminated = self.remove_broke_players();
        if self.players.len() < MIN_PLAYERS {
            self.over = true;
            let winner = self.players.first().map(Player::id);
            info!("game {}: over after {} hands", self.id, self.hand_number);
            return Ok(NextHand::GameOver { winner, eliminated });
        }
        self.advance_dealer();
        self.phase = Phase::Waiting;
        self.start()?;
        Ok(NextHand::Started { eliminated })
    }

    pub fn view(&self) -> GameView {
        GameView {
            id: self.id,
            phase: self.phase,
            hand_number: self.hand_number,
            pot: self.round.pot(),
            current_bet: self.round.current_bet(),
            dealer: self.dealer,
            current_player: self.current_player().map(Player::id),
            small_blind: self.blinds.small(),
            big_blind: self.blinds.big(),
            community_cards: self.community.as_slice().to_vec(),
            seats: self
                .players
                .iter()
                .map(|p| SeatView {
                    id: p.id(),
                    name: p.name().to_string(),
                    chips: p.chips(),
                    committed: self.round.committed(p.id()),
                    folded: p.is_folded(),
                    all_in: p.is_all_in(),
                    acted: self.acted.contains(&p.id()),
                })
                .collect(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            phase: self.phase,
            small_blind: self.blinds.small(),
            big_blind: self.blinds.big(),
            dealer: self.dealer,
            turn: self.turn,
            pot: self.round.pot(),
            current_bet: self.round.current_bet(),
            community_cards: self.community.as_slice().to_vec(),
            hand_number: self.hand_number,
            over: self.over,
            seats: self
                .players
                .iter()
                .map(|p| SeatSnapshot {
                    player: p.clone(),
                    committed: self.round.committed(p.id()),
                    acted: self.acted.contains(&p.id()),
                })
                .collect(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// The deck is not part of the snapshot: a fresh shuffled deck is built
    /// from the cards not visible in any hand or on the board.
    pub fn reconstitute(snapshot: GameSnapshot) -> Result<Self, ValidationError> {
        let malformed = |msg: String| ValidationError::MalformedSnapshot(msg);

        let blinds = Blinds::new(snapshot.small_blind, snapshot.big_blind)?;
        let players: Vec<Player> = snapshot.seats.iter().map(|s| s.player.clone()).collect();
        Self::check_seats(&players)?;
        let n = players.len();
        let pot_limit = Player::MAX_CHIPS * MAX_PLAYERS as u64;
        if snapshot.pot > pot_limit || snapshot.seats.iter().any(|s| s.committed > pot_limit) {
            return Err(malformed(format!("pot {} exceeds the table limit", snapshot.pot)));
        }
        if snapshot.dealer >= n || snapshot.turn >= n {
            return Err(malformed(format!(
                "dealer {} / turn {} outside {} seats",
                snapshot.dealer, snapshot.turn, n
            )));
        }

        let community =
            Board::try_new(snapshot.community_cards).map_err(|e| malformed(e.to_string()))?;
        if let Some(expected) = snapshot.phase.board_len() {
            if community.len() != expected {
                return Err(malformed(format!(
                    "{} community cards in phase {}",
                    community.len(),
                    snapshot.phase
                )));
            }
        }
        validate_table(players.iter().map(Player::hand), &community)
            .map_err(|e| malformed(e.to_string()))?;

        let committed: HashMap<PlayerId, u64> = snapshot
            .seats
            .iter()
            .filter(|s| s.committed > 0)
            .map(|s| (s.player.id(), s.committed))
            .collect();
        let acted: HashSet<PlayerId> =
            snapshot.seats.iter().filter(|s| s.acted).map(|s| s.player.id()).collect();

        let mut visible: Vec<Card> = community.as_slice().to_vec();
        for p in &players {
            visible.extend_from_slice(p.hand().cards());
        }
        let mut rng = ChaCha8Rng::seed_from_u64(rand::rng().random());
        let mut deck = Deck::standard_without(&visible);
        deck.shuffle_with(&mut rng);

        Ok(Self {
            id: snapshot.id,
            phase: snapshot.phase,
            blinds,
            deck,
            community,
            players,
            round: Round::from_parts(snapshot.pot, snapshot.current_bet, committed),
            dealer: snapshot.dealer,
            turn: snapshot.turn,
            acted,
            hand_number: snapshot.hand_number,
            over: snapshot.over,
            last_showdown: None,
            rng,
        })
    }
}

/// Everything needed to rebuild a [`Game`] except the deck order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub id: GameId,
    pub phase: Phase,
    pub small_blind: u64,
    pub big_blind: u64,
    pub dealer: usize,
    pub turn: usize,
    pub pot: u64,
    pub current_bet: u64,
    pub community_cards: Vec<Card>,
    pub seats: Vec<SeatSnapshot>,
    #[serde(default)]
    pub hand_number: u32,
    #[serde(default)]
    pub over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub player: Player,
    pub committed: u64,
    pub acted: bool,
}

/// Public table state. Hole cards are not included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub id: GameId,
    pub phase: Phase,
    pub hand_number: u32,
    pub pot: u64,
    pub current_bet: u64,
    pub dealer: usize,
    pub current_player: Option<PlayerId>,
    pub small_blind: u64,
    pub big_blind: u64,
    pub community_cards: Vec<Card>,
    pub seats: Vec<SeatView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatView {
    pub id: PlayerId,
    pub name: String,
    pub chips: u64,
    pub committed: u64,
    pub folded: bool,
    pub all_in: bool,
    pub acted: bool,
}
