//! Table events and the publisher port they go out through.
//!
//! Events are a side channel. Game state never depends on whether a publish
//! succeeds or whether anyone is listening.

use crate::betting::ActionKind;
use crate::cards::Card;
use crate::game::{GameId, Phase};
use crate::player::PlayerId;
use log::info;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    GameStarted {
        game_id: GameId,
        hand_number: u32,
        dealer: usize,
        players: Vec<PlayerId>,
        small_blind: u64,
        big_blind: u64,
    },
    /// Private: sent only to the player holding the cards.
    PlayerCardsDealt {
        game_id: GameId,
        player_id: PlayerId,
        cards: Vec<Card>,
    },
    PlayerAction {
        game_id: GameId,
        player_id: PlayerId,
        action: ActionKind,
        amount: u64,
        pot: u64,
        current_bet: u64,
    },
    RoundCompleted {
        game_id: GameId,
        completed_phase: Phase,
        next_phase: Phase,
    },
    DealtCards {
        game_id: GameId,
        phase: Phase,
        new_cards: Vec<Card>,
        community_cards: Vec<Card>,
    },
    WinnerDetermined {
        game_id: GameId,
        winner_id: PlayerId,
        winner_name: String,
        hand_rank: String,
        hand: Vec<Card>,
        amount: u64,
    },
    GameStateChanged {
        game_id: GameId,
        phase: Phase,
        current_player: Option<PlayerId>,
        pot: u64,
        message: String,
    },
}

impl GameEvent {
    pub fn game_id(&self) -> GameId {
        match self {
            GameEvent::GameStarted { game_id, .. }
            | GameEvent::PlayerCardsDealt { game_id, .. }
            | GameEvent::PlayerAction { game_id, .. }
            | GameEvent::RoundCompleted { game_id, .. }
            | GameEvent::DealtCards { game_id, .. }
            | GameEvent::WinnerDetermined { game_id, .. }
            | GameEvent::GameStateChanged { game_id, .. } => *game_id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::GameStarted { .. } => "GAME_STARTED",
            GameEvent::PlayerCardsDealt { .. } => "PLAYER_CARDS_DEALT",
            GameEvent::PlayerAction { .. } => "PLAYER_ACTION",
            GameEvent::RoundCompleted { .. } => "ROUND_COMPLETED",
            GameEvent::DealtCards { .. } => "DEALT_CARDS",
            GameEvent::WinnerDetermined { .. } => "WINNER_DETERMINED",
            GameEvent::GameStateChanged { .. } => "GAME_STATE_CHANGED",
        }
    }

    pub fn to_json(&self) -> Result<String, PublishError> {
        serde_json::to_string(self).map_err(|e| PublishError::Encode(e.to_string()))
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PublishError {
    #[error("could not encode event: {0}")]
    Encode(String),
    #[error("channel unavailable: {0}")]
    Unavailable(String),
}

/// Where events go. Delivery is at most once.
pub trait EventPublisher: Send + Sync {
    /// Broadcast to everyone watching `scope` (a game id).
    fn publish_to_scope(&self, scope: &str, event: &GameEvent) -> Result<(), PublishError>;

    fn publish_to_player(&self, player: PlayerId, event: &GameEvent) -> Result<(), PublishError>;
}

impl<P: EventPublisher + ?Sized> EventPublisher for Arc<P> {
    fn publish_to_scope(&self, scope: &str, event: &GameEvent) -> Result<(), PublishError> {
        (**self).publish_to_scope(scope, event)
    }

    fn publish_to_player(&self, player: PlayerId, event: &GameEvent) -> Result<(), PublishError> {
        (**self).publish_to_player(player, event)
    }
}

/// Drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish_to_scope(&self, _scope: &str, _event: &GameEvent) -> Result<(), PublishError> {
        Ok(())
    }

    fn publish_to_player(&self, _player: PlayerId, _event: &GameEvent) -> Result<(), PublishError> {
        Ok(())
    }
}

/// Writes each event as a JSON line at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPublisher;

impl EventPublisher for LogPublisher {
    fn publish_to_scope(&self, scope: &str, event: &GameEvent) -> Result<(), PublishError> {
        info!(target: "holdem::events", "[{scope}] {}", event.to_json()?);
        Ok(())
    }

    fn publish_to_player(&self, player: PlayerId, event: &GameEvent) -> Result<(), PublishError> {
        info!(target: "holdem::events", "[player {player}] {}", event.to_json()?);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Scope(String, GameEvent),
    Player(PlayerId, GameEvent),
}

impl Delivery {
    pub fn event(&self) -> &GameEvent {
        match self {
            Delivery::Scope(_, e) | Delivery::Player(_, e) => e,
        }
    }
}

/// Records deliveries in order. Can be told to fail every publish.
#[derive(Debug, Default)]
pub struct MemoryPublisher {
    deliveries: Mutex<Vec<Delivery>>,
    failing: bool,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every call returns `Unavailable`; nothing is recorded.
    pub fn failing() -> Self {
        Self { deliveries: Mutex::default(), failing: true }
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().clone()
    }

    /// Names of broadcast events, in publish order.
    pub fn scope_event_names(&self) -> Vec<&'static str> {
        self.deliveries
            .lock()
            .iter()
            .filter_map(|d| match d {
                Delivery::Scope(_, e) => Some(e.name()),
                Delivery::Player(..) => None,
            })
            .collect()
    }

    pub fn player_events(&self, player: PlayerId) -> Vec<GameEvent> {
        self.deliveries
            .lock()
            .iter()
            .filter_map(|d| match d {
                Delivery::Player(p, e) if *p == player => Some(e.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.deliveries.lock().clear();
    }

    fn record(&self, delivery: Delivery) -> Result<(), PublishError> {
        if self.failing {
            return Err(PublishError::Unavailable("memory publisher set to fail".into()));
        }
        self.deliveries.lock().push(delivery);
        Ok(())
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish_to_scope(&self, scope: &str, event: &GameEvent) -> Result<(), PublishError> {
        self.record(Delivery::Scope(scope.to_string(), event.clone()))
    }

    fn publish_to_player(&self, player: PlayerId, event: &GameEvent) -> Result<(), PublishError> {
        self.record(Delivery::Player(player, event.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = GameEvent::DealtCards {
            game_id: GameId::new(),
            phase: Phase::Flop,
            new_cards: parse_cards("10♠ A♥ 2♣").unwrap(),
            community_cards: parse_cards("10♠ A♥ 2♣").unwrap(),
        };
        let json: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "DEALT_CARDS");
        assert_eq!(json["phase"], "FLOP");
        assert_eq!(json["new_cards"][0], "10♠");
    }

    #[test]
    fn memory_publisher_separates_scope_and_player() {
        let p = MemoryPublisher::new();
        let pid = PlayerId::new();
        let gid = GameId::new();
        let started = GameEvent::RoundCompleted {
            game_id: gid,
            completed_phase: Phase::PreFlop,
            next_phase: Phase::Flop,
        };
        let private = GameEvent::PlayerCardsDealt { game_id: gid, player_id: pid, cards: vec![] };
        p.publish_to_scope(&gid.to_string(), &started).unwrap();
        p.publish_to_player(pid, &private).unwrap();

        assert_eq!(p.scope_event_names(), vec!["ROUND_COMPLETED"]);
        assert_eq!(p.player_events(pid), vec![private]);
        assert!(p.player_events(PlayerId::new()).is_empty());
        assert_eq!(p.deliveries()[0].event().game_id(), gid);
    }

    #[test]
    fn failing_publisher_records_nothing() {
        let p = MemoryPublisher::failing();
        let event = GameEvent::GameStateChanged {
            game_id: GameId::new(),
            phase: Phase::Waiting,
            current_player: None,
            pot: 0,
            message: String::new(),
        };
        assert!(p.publish_to_scope("x", &event).is_err());
        assert!(p.deliveries().is_empty());
    }
}
