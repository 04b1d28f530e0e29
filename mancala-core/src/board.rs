//! Board state: players, turn owner, half-boards

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of playable houses per side
pub const DEFAULT_HOUSES: usize = 6;

/// Default number of stones seeded into each house
pub const DEFAULT_STONES_PER_HOUSE: u32 = 6;

/// One of the two sides of the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Player {
    Top,
    Bottom,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Top => Player::Bottom,
            Player::Bottom => Player::Top,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Player::Top => "TOP",
            Player::Bottom => "BOTTOM",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized player label
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid player: {0:?}")]
pub struct InvalidPlayer(pub String);

impl FromStr for Player {
    type Err = InvalidPlayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("top") {
            Ok(Player::Top)
        } else if s.eq_ignore_ascii_case("bottom") {
            Ok(Player::Bottom)
        } else {
            Err(InvalidPlayer(s.to_string()))
        }
    }
}

/// Whose move is next.
///
/// A finished game has no next player, so "requesting player is finished"
/// cannot be expressed: `Finished` only ever appears as a turn owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Turn {
    Player(Player),
    Finished,
}

impl Turn {
    pub fn as_str(self) -> &'static str {
        match self {
            Turn::Player(p) => p.as_str(),
            Turn::Finished => "FINISHED",
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, Turn::Finished)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Turn> for String {
    fn from(turn: Turn) -> Self {
        turn.as_str().to_string()
    }
}

impl TryFrom<String> for Turn {
    type Error = InvalidPlayer;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.eq_ignore_ascii_case("finished") {
            Ok(Turn::Finished)
        } else {
            s.parse::<Player>().map(Turn::Player)
        }
    }
}

/// Opaque board identifier, assigned by the storage layer at creation
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BoardId(pub u64);

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Board shape, fixed for the lifetime of a board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playable houses per side
    pub houses: usize,
    /// Stones seeded into each house on a fresh board
    pub stones_per_house: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            houses: DEFAULT_HOUSES,
            stones_per_house: DEFAULT_STONES_PER_HOUSE,
        }
    }
}

/// Full board state.
///
/// Each half has length `houses + 1`: the playable houses in order, then
/// that side's store. All entries stay non-negative by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    #[serde(rename = "nextPlayer")]
    pub turn: Turn,
    #[serde(rename = "topHalf")]
    pub top: Vec<u32>,
    #[serde(rename = "bottomHalf")]
    pub bottom: Vec<u32>,
}

impl Board {
    /// Fresh board: every house seeded, stores empty, TOP to move
    pub fn new(id: BoardId, config: &GameConfig) -> Self {
        let mut half = vec![config.stones_per_house; config.houses + 1];
        half[config.houses] = 0;
        Self {
            id,
            turn: Turn::Player(Player::Top),
            top: half.clone(),
            bottom: half,
        }
    }

    /// Number of playable houses per side
    pub fn houses(&self) -> usize {
        self.top.len() - 1
    }

    /// A side's half-board, houses first, store last
    pub fn half(&self, player: Player) -> &[u32] {
        match player {
            Player::Top => &self.top,
            Player::Bottom => &self.bottom,
        }
    }

    /// Stones in a side's store
    pub fn store(&self, player: Player) -> u32 {
        let houses = self.houses();
        self.half(player)[houses]
    }

    /// Total stones on the board, both stores included
    pub fn total_stones(&self) -> u32 {
        self.top.iter().sum::<u32>() + self.bottom.iter().sum::<u32>()
    }
}
