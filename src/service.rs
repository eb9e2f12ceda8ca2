//! Use cases over games and players.
//!
//! Each game lives behind its own mutex in a registry keyed by id, so
//! actions on one table never wait for another. Every use case runs its state
//! transition under the game lock. It saves the result and then publishes
//! the collected events after the lock is released. Save and publish failures
//! are logged and never undo a transition.

use crate::betting::{Action, ActionKind};
use crate::cards::Card;
use crate::config::GameConfig;
use crate::error::{PokerError, PokerResult, ValidationError};
use crate::events::{Delivery, EventPublisher, GameEvent};
use crate::game::{Game, GameId, GameView, NextHand, Phase, Progress, Showdown, StateError};
use crate::player::{Player, PlayerId};
use crate::repository::{GameRepository, PlayerRepository};
use log::{info, warn};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A player action as it arrives from a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerActionCommand {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub action: ActionKind,
    /// Raise-to amount; ignored for other actions but must not be negative.
    #[serde(default)]
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionResponse {
    pub game_state: Phase,
    pub current_bet: u64,
    pub pot: u64,
    pub player_folded: bool,
}

pub struct GameService<G, P, E> {
    config: GameConfig,
    games: G,
    players: P,
    events: E,
    tables: RwLock<HashMap<GameId, Arc<Mutex<Game>>>>,
}

impl<G, P, E> GameService<G, P, E>
where
    G: GameRepository,
    P: PlayerRepository,
    E: EventPublisher,
{
    pub fn new(
        config: GameConfig,
        games: G,
        players: P,
        events: E,
    ) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config, games, players, events, tables: RwLock::new(HashMap::new()) })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn register_player(&self, name: &str, chips: u64) -> PokerResult<Player> {
        let player = Player::new(name, chips)?;
        if self.players.find_by_name(player.name())?.is_some() {
            return Err(ValidationError::DuplicateName(player.name().to_string()).into());
        }
        self.players.save(&player)?;
        info!("registered player {} ({}) with {} chips", player.name(), player.id(), chips);
        Ok(player)
    }

    pub fn leaderboard(&self, limit: usize) -> PokerResult<Vec<Player>> {
        Ok(self.players.find_top_by_chips(limit)?)
    }

    /// Seat registered players in the given order and deal the first hand.
    pub fn start_game(&self, player_ids: &[PlayerId]) -> PokerResult<GameView> {
        let (min, max) = (self.config.min_players, self.config.max_players);
        if !(min..=max).contains(&player_ids.len()) {
            return Err(ValidationError::PlayerCount { min, max, got: player_ids.len() }.into());
        }

        let required = self.config.min_stack();
        let mut seated = Vec::with_capacity(player_ids.len());
        for &id in player_ids {
            let player =
                self.players.find_by_id(id)?.ok_or_else(|| PokerError::not_found("player", id))?;
            if player.chips() < required {
                return Err(ValidationError::StackBelowMinimum {
                    name: player.name().to_string(),
                    chips: player.chips(),
                    required,
                }
                .into());
            }
            seated.push(player);
        }

        let mut game = Game::new(seated, self.config.blinds()?)?;
        if let Some(seed) = self.config.deck_seed {
            game = game.with_seed(seed);
        }
        game.start()?;

        let outbox = hand_started_events(&game);
        let view = game.view();
        self.persist(&game);
        self.tables.write().insert(game.id(), Arc::new(Mutex::new(game)));
        self.publish(outbox);
        Ok(view)
    }

    /// Apply one action, then deal and settle automatically for as long as
    /// the betting is settled.
    pub fn player_action(&self, command: PlayerActionCommand) -> PokerResult<ActionResponse> {
        let action = Action::from_command(command.action, command.amount)?;
        let table = self.table(command.game_id)?;

        let mut outbox = Vec::new();
        let response = {
            let mut game = table.lock();
            let outcome = game.apply_action(command.player_id, action)?;
            outbox.push(scoped(
                &game,
                GameEvent::PlayerAction {
                    game_id: game.id(),
                    player_id: command.player_id,
                    action: outcome.kind,
                    amount: outcome.paid,
                    pot: outcome.pot,
                    current_bet: outcome.current_bet,
                },
            ));

            while game.phase().is_betting() && game.is_betting_round_complete() {
                match game.advance() {
                    Ok(progress) => outbox.extend(progress_events(&game, &progress)),
                    Err(e) => {
                        warn!("game {}: automatic progression stopped: {e}", game.id());
                        break;
                    }
                }
            }

            self.persist(&game);
            if game.phase() == Phase::Finished {
                self.sync_players(&game);
            }
            ActionResponse {
                game_state: game.phase(),
                current_bet: game.current_bet(),
                pot: game.pot(),
                player_folded: outcome.folded,
            }
        };
        self.publish(outbox);
        Ok(response)
    }

    /// Deal the next street by hand. Returns the new cards.
    pub fn deal_next_street(&self, game_id: GameId) -> PokerResult<Vec<Card>> {
        let table = self.table(game_id)?;
        let (cards, outbox) = {
            let mut game = table.lock();
            let completed = game.phase();
            let (cards, phase) = match completed {
                Phase::PreFlop => (game.deal_flop()?, Phase::Flop),
                Phase::Flop => (game.deal_turn()?, Phase::Turn),
                Phase::Turn => (game.deal_river()?, Phase::River),
                other => return Err(StateError::NothingToDeal(other).into()),
            };
            let outbox = street_events(&game, completed, phase, &cards);
            self.persist(&game);
            (cards, outbox)
        };
        self.publish(outbox);
        Ok(cards)
    }

    pub fn determine_winner(&self, game_id: GameId) -> PokerResult<Showdown> {
        let table = self.table(game_id)?;
        let (showdown, outbox) = {
            let mut game = table.lock();
            let completed = game.phase();
            let showdown = game.determine_winner()?;
            let progress = Progress::Showdown { completed, showdown: showdown.clone() };
            let outbox = progress_events(&game, &progress);
            self.persist(&game);
            self.sync_players(&game);
            (showdown, outbox)
        };
        self.publish(outbox);
        Ok(showdown)
    }

    /// Move the button and deal the next hand, or end the game when fewer
    /// than two players have chips.
    pub fn start_new_hand(&self, game_id: GameId) -> PokerResult<GameView> {
        let table = self.table(game_id)?;
        let (view, outbox) = {
            let mut game = table.lock();
            let outbox = match game.start_next_hand()? {
                NextHand::Started { .. } => hand_started_events(&game),
                NextHand::GameOver { winner, .. } => {
                    let name = winner
                        .and_then(|id| game.player(id))
                        .map_or_else(|| "nobody".to_string(), |p| p.name().to_string());
                    vec![scoped(
                        &game,
                        GameEvent::GameStateChanged {
                            game_id: game.id(),
                            phase: game.phase(),
                            current_player: None,
                            pot: game.pot(),
                            message: format!("Game over: {name} is the last player standing"),
                        },
                    )]
                }
            };
            self.persist(&game);
            (game.view(), outbox)
        };
        self.publish(outbox);
        Ok(view)
    }

    pub fn game_state(&self, game_id: GameId) -> PokerResult<GameView> {
        Ok(self.table(game_id)?.lock().view())
    }

    /// Private hole-card lookup.
    pub fn player_cards(&self, game_id: GameId, player_id: PlayerId) -> PokerResult<Vec<Card>> {
        let table = self.table(game_id)?;
        let game = table.lock();
        game.hole_cards(player_id)
            .map(<[Card]>::to_vec)
            .ok_or_else(|| PokerError::not_found("player", player_id))
    }

    /// Registry lookup, loading from the repository on a miss.
    fn table(&self, id: GameId) -> PokerResult<Arc<Mutex<Game>>> {
        if let Some(table) = self.tables.read().get(&id) {
            return Ok(Arc::clone(table));
        }
        let game = self.games.find_by_id(id)?.ok_or_else(|| PokerError::not_found("game", id))?;
        info!("game {id}: loaded from repository");
        let mut tables = self.tables.write();
        Ok(Arc::clone(tables.entry(id).or_insert_with(|| Arc::new(Mutex::new(game)))))
    }

    fn persist(&self, game: &Game) {
        if let Err(e) = self.games.save(game) {
            warn!("game {}: save failed: {e}", game.id());
        }
    }

    fn sync_players(&self, game: &Game) {
        for player in game.players() {
            if let Err(e) = self.players.save(player) {
                warn!("player {}: save failed: {e}", player.id());
            }
        }
    }

    fn publish(&self, outbox: Vec<Delivery>) {
        for delivery in outbox {
            let result = match &delivery {
                Delivery::Scope(scope, event) => self.events.publish_to_scope(scope, event),
                Delivery::Player(player, event) => self.events.publish_to_player(*player, event),
            };
            if let Err(e) = result {
                warn!("dropping {} event: {e}", delivery.event().name());
            }
        }
    }
}

fn scoped(game: &Game, event: GameEvent) -> Delivery {
    Delivery::Scope(game.id().to_string(), event)
}

fn state_changed(game: &Game, message: String) -> Delivery {
    scoped(
        game,
        GameEvent::GameStateChanged {
            game_id: game.id(),
            phase: game.phase(),
            current_player: game.current_player().map(Player::id),
            pot: game.pot(),
            message,
        },
    )
}

fn hand_started_events(game: &Game) -> Vec<Delivery> {
    let mut outbox = vec![scoped(
        game,
        GameEvent::GameStarted {
            game_id: game.id(),
            hand_number: game.hand_number(),
            dealer: game.dealer(),
            players: game.players().iter().map(Player::id).collect(),
            small_blind: game.blinds().small(),
            big_blind: game.blinds().big(),
        },
    )];
    for p in game.players() {
        outbox.push(Delivery::Player(
            p.id(),
            GameEvent::PlayerCardsDealt {
                game_id: game.id(),
                player_id: p.id(),
                cards: p.hand().cards().to_vec(),
            },
        ));
    }
    outbox.push(state_changed(game, format!("Hand #{} started", game.hand_number())));
    outbox
}

fn street_events(game: &Game, completed: Phase, phase: Phase, cards: &[Card]) -> Vec<Delivery> {
    vec![
        scoped(
            game,
            GameEvent::RoundCompleted {
                game_id: game.id(),
                completed_phase: completed,
                next_phase: phase,
            },
        ),
        scoped(
            game,
            GameEvent::DealtCards {
                game_id: game.id(),
                phase,
                new_cards: cards.to_vec(),
                community_cards: game.community_cards().to_vec(),
            },
        ),
        state_changed(game, format!("{phase} dealt")),
    ]
}

fn progress_events(game: &Game, progress: &Progress) -> Vec<Delivery> {
    match progress {
        Progress::StreetDealt { completed, phase, cards } => {
            street_events(game, *completed, *phase, cards)
        }
        Progress::Showdown { completed, showdown } => vec![
            scoped(
                game,
                GameEvent::RoundCompleted {
                    game_id: game.id(),
                    completed_phase: *completed,
                    next_phase: Phase::Showdown,
                },
            ),
            scoped(
                game,
                GameEvent::WinnerDetermined {
                    game_id: game.id(),
                    winner_id: showdown.winner,
                    winner_name: showdown.winner_name.clone(),
                    hand_rank: showdown.hand.rank.label().to_string(),
                    hand: showdown.hand.cards.to_vec(),
                    amount: showdown.amount,
                },
            ),
            state_changed(
                game,
                format!(
                    "{} wins {} with {}",
                    showdown.winner_name,
                    showdown.amount,
                    showdown.hand.rank.label()
                ),
            ),
        ],
    }
}
