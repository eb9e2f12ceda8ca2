//! Error taxonomy shared by the game core and the service layer.
//!
//! Each concern keeps its own enum (`ActionError` in [`crate::betting`],
//! `StateError` in [`crate::game`], `ValidationError` here); [`PokerError`]
//! is the union returned by use cases, and [`ErrorKind`] is what a protocol
//! layer switches on when turning an error into a response.

use crate::betting::ActionError;
use crate::game::StateError;
use crate::player::PlayerId;
use crate::repository::RepositoryError;

/// Bad input shape or values. Rejected before any state is touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("a game needs {min} to {max} players, got {got}")]
    PlayerCount { min: usize, max: usize, got: usize },
    #[error("invalid blinds {small}/{big}: both must be positive and big >= small")]
    InvalidBlinds { small: u64, big: u64 },
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(i64),
    #[error("player name must not be empty")]
    EmptyName,
    #[error("player name is too long: max {max} characters, got {got}")]
    NameTooLong { max: usize, got: usize },
    #[error("starting chips must be positive")]
    NoChips,
    #[error("stack of {got} chips exceeds the maximum of {max}")]
    TooManyChips { max: u64, got: u64 },
    #[error("player {name} has {chips} chips, table minimum is {required}")]
    StackBelowMinimum { name: String, chips: u64, required: u64 },
    #[error("player name '{0}' is already taken")]
    DuplicateName(String),
    #[error("player {0} is seated twice")]
    DuplicatePlayer(PlayerId),
    #[error("unknown action '{0}'")]
    UnknownAction(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("malformed game snapshot: {0}")]
    MalformedSnapshot(String),
}

/// Coarse error category for callers that only need to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    Validation,
    IllegalAction,
    InvalidState,
    NotFound,
    Infrastructure,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PokerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    IllegalAction(#[from] ActionError),
    #[error(transparent)]
    InvalidState(#[from] StateError),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl PokerError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        PokerError::NotFound { entity, id: id.to_string() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PokerError::Validation(_) => ErrorKind::Validation,
            PokerError::IllegalAction(_) => ErrorKind::IllegalAction,
            PokerError::InvalidState(_) => ErrorKind::InvalidState,
            PokerError::NotFound { .. } => ErrorKind::NotFound,
            PokerError::Repository(_) => ErrorKind::Infrastructure,
        }
    }
}

pub type PokerResult<T> = Result<T, PokerError>;
