//! Persistence ports and in-memory adapters.

use crate::error::ValidationError;
use crate::game::{Game, GameId};
use crate::player::{Player, PlayerId};
use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub use crate::game::{GameSnapshot, SeatSnapshot};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RepositoryError {
    #[error("could not encode game {id}: {reason}")]
    Encode { id: String, reason: String },
    #[error("could not decode stored game {id}: {reason}")]
    Decode { id: String, reason: String },
    #[error("stored game {id} is inconsistent: {source}")]
    Corrupt {
        id: String,
        #[source]
        source: ValidationError,
    },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

pub trait GameRepository: Send + Sync {
    fn save(&self, game: &Game) -> RepositoryResult<()>;

    /// Rebuild a stored game. The deck comes back freshly shuffled.
    fn find_by_id(&self, id: GameId) -> RepositoryResult<Option<Game>>;
}

pub trait PlayerRepository: Send + Sync {
    fn save(&self, player: &Player) -> RepositoryResult<()>;

    fn find_by_id(&self, id: PlayerId) -> RepositoryResult<Option<Player>>;

    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Player>>;

    /// Richest players first.
    fn find_top_by_chips(&self, limit: usize) -> RepositoryResult<Vec<Player>>;
}

impl<R: GameRepository + ?Sized> GameRepository for Arc<R> {
    fn save(&self, game: &Game) -> RepositoryResult<()> {
        (**self).save(game)
    }

    fn find_by_id(&self, id: GameId) -> RepositoryResult<Option<Game>> {
        (**self).find_by_id(id)
    }
}

impl<R: PlayerRepository + ?Sized> PlayerRepository for Arc<R> {
    fn save(&self, player: &Player) -> RepositoryResult<()> {
        (**self).save(player)
    }

    fn find_by_id(&self, id: PlayerId) -> RepositoryResult<Option<Player>> {
        (**self).find_by_id(id)
    }

    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Player>> {
        (**self).find_by_name(name)
    }

    fn find_top_by_chips(&self, limit: usize) -> RepositoryResult<Vec<Player>> {
        (**self).find_top_by_chips(limit)
    }
}

/// Stores each game as a JSON snapshot.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<GameId, String>>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.read().is_empty()
    }

    /// The stored JSON text for `id`.
    pub fn raw(&self, id: GameId) -> Option<String> {
        self.games.read().get(&id).cloned()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn save(&self, game: &Game) -> RepositoryResult<()> {
        let json = serde_json::to_string(&game.snapshot()).map_err(|e| {
            RepositoryError::Encode { id: game.id().to_string(), reason: e.to_string() }
        })?;
        debug!("saving game {} ({} bytes)", game.id(), json.len());
        self.games.write().insert(game.id(), json);
        Ok(())
    }

    fn find_by_id(&self, id: GameId) -> RepositoryResult<Option<Game>> {
        let Some(json) = self.raw(id) else {
            return Ok(None);
        };
        let snapshot: GameSnapshot = serde_json::from_str(&json)
            .map_err(|e| RepositoryError::Decode { id: id.to_string(), reason: e.to_string() })?;
        Game::reconstitute(snapshot)
            .map(Some)
            .map_err(|source| RepositoryError::Corrupt { id: id.to_string(), source })
    }
}

#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<PlayerId, Player>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    /// Only identity and chips are kept; table state is dropped.
    fn save(&self, player: &Player) -> RepositoryResult<()> {
        let mut stored = player.clone();
        stored.reset_for_new_hand();
        self.players.write().insert(stored.id(), stored);
        Ok(())
    }

    fn find_by_id(&self, id: PlayerId) -> RepositoryResult<Option<Player>> {
        Ok(self.players.read().get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Player>> {
        Ok(self.players.read().values().find(|p| p.name() == name).cloned())
    }

    fn find_top_by_chips(&self, limit: usize) -> RepositoryResult<Vec<Player>> {
        let mut all: Vec<Player> = self.players.read().values().cloned().collect();
        all.sort_by(|a, b| b.chips().cmp(&a.chips()).then_with(|| a.name().cmp(b.name())));
        all.truncate(limit);
        Ok(all)
    }
}
