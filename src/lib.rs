//! holdem-rs: Texas Hold'em game engine
//!
//! - Cards, a 52-card deck and seven-card hand evaluation
//! - A betting state machine for one table (`game`)
//! - A service layer with per-table locking, persistence and events
//!
//! ## Quick start: evaluate a Hold'em hand
//! ```
//! use holdem_rs::cards::parse_cards;
//! use holdem_rs::evaluator::{evaluate, HandRank};
//!
//! let seven = parse_cards("A♠ A♥ K♣ Q♦ J♥ 3♠ 2♣").unwrap();
//! let best = evaluate(&seven);
//! assert_eq!(best.rank, HandRank::OnePair);
//! assert_eq!(best.to_string(), "One Pair [A♠ A♥ K♣ Q♦ J♥]");
//! ```
//!
//! ## Playing a hand
//! ```
//! use holdem_rs::betting::Action;
//! use holdem_rs::game::{Blinds, Game, Phase};
//! use holdem_rs::player::Player;
//!
//! let players = vec![Player::new("alice", 1000).unwrap(), Player::new("bob", 1000).unwrap()];
//! let ids: Vec<_> = players.iter().map(Player::id).collect();
//! let mut game = Game::new(players, Blinds::new(10, 20).unwrap()).unwrap().with_seed(1);
//! game.start().unwrap();
//! assert_eq!(game.pot(), 30);
//!
//! game.apply_action(ids[1], Action::Call).unwrap();
//! game.apply_action(ids[0], Action::Check).unwrap();
//! assert_eq!(game.deal_flop().unwrap().len(), 3);
//! assert_eq!(game.phase(), Phase::Flop);
//! ```

pub mod betting;
pub mod cards;
pub mod config;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod events;
pub mod game;
pub mod hand;
pub mod player;
pub mod repository;
pub mod round;
pub mod service;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
