use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of players appearing in synthetic events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Alice,
    Bob,
    Charlie,
}

impl Player {
    #[inline]
    pub const fn all() -> [Player; 3] {
        [Player::Alice, Player::Bob, Player::Charlie]
    }

    /// Stable lowercase label, used for display and as the wire name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Alice => "alice",
            Player::Bob => "bob",
            Player::Charlie => "charlie",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed set of action labels appearing in synthetic events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "killed monster")]
    KilledMonster,
    #[serde(rename = "found treasure")]
    FoundTreasure,
    #[serde(rename = "leveled up")]
    LeveledUp,
}

impl Action {
    #[inline]
    pub const fn all() -> [Action; 3] {
        [Action::KilledMonster, Action::FoundTreasure, Action::LeveledUp]
    }

    /// Stable label, used for display and as the wire name.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Action::KilledMonster => "killed monster",
            Action::FoundTreasure => "found treasure",
            Action::LeveledUp => "leveled up",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
