use crate::error::ValidationError;
use crate::hand::PlayerHand;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for PlayerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A seated or registered player.
///
/// The chip stack carries over between hands; the hand and folded flag are
/// reset at the start of each one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) name: String,
    pub(crate) chips: u64,
    #[serde(default)]
    pub(crate) hand: PlayerHand,
    #[serde(default)]
    pub(crate) folded: bool,
}

impl Player {
    pub const MAX_NAME_LEN: usize = 50;
    /// Largest stack a player may hold. A full table of maximum stacks still
    /// fits in a `u64` pot.
    pub const MAX_CHIPS: u64 = 1_000_000_000_000_000;

    /// ```
    /// use holdem_rs::player::Player;
    ///
    /// let p = Player::new("  alice ", 1000).unwrap();
    /// assert_eq!(p.name(), "alice");
    /// assert!(Player::new("   ", 1000).is_err());
    /// ```
    pub fn new(name: &str, chips: u64) -> Result<Self, ValidationError> {
        Self::with_id(PlayerId::new(), name, chips)
    }

    pub fn with_id(id: PlayerId, name: &str, chips: u64) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let len = name.chars().count();
        if len > Self::MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong { max: Self::MAX_NAME_LEN, got: len });
        }
        if chips == 0 {
            return Err(ValidationError::NoChips);
        }
        if chips > Self::MAX_CHIPS {
            return Err(ValidationError::TooManyChips { max: Self::MAX_CHIPS, got: chips });
        }
        Ok(Self { id, name: name.to_string(), chips, hand: PlayerHand::default(), folded: false })
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chips(&self) -> u64 {
        self.chips
    }

    pub fn hand(&self) -> &PlayerHand {
        &self.hand
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    /// Still in the hand with nothing left to bet.
    pub fn is_all_in(&self) -> bool {
        !self.folded && self.chips == 0
    }

    /// Able to take a turn: not folded and holding chips.
    pub fn can_act(&self) -> bool {
        !self.folded && self.chips > 0
    }

    /// # Panics
    ///
    /// Panics if the stack would overflow; seat checks keep table totals far
    /// below that.
    pub(crate) fn add_chips(&mut self, amount: u64) {
        assert!(
            amount <= u64::MAX - self.chips,
            "cannot add {amount} chips to a stack of {}",
            self.chips
        );
        self.chips += amount;
    }

    /// # Panics
    ///
    /// Panics if `amount` exceeds the stack; callers check affordability first.
    pub(crate) fn subtract_chips(&mut self, amount: u64) {
        assert!(amount <= self.chips, "cannot take {amount} chips from a stack of {}", self.chips);
        self.chips -= amount;
    }

    pub(crate) fn fold(&mut self) {
        self.folded = true;
    }

    pub(crate) fn reset_for_new_hand(&mut self) {
        self.hand.clear();
        self.folded = false;
    }
}
