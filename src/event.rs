use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Action, Player};

/// Inclusive bounds for the level draw.
pub const LEVEL_MIN: u8 = 1;
pub const LEVEL_MAX: u8 = 15;

/// One synthetic game event.
///
/// `id` is the 1-based position in its stream, assigned by the stream itself
/// and independent of the RNG. Events are created on demand and consumed
/// immediately; nothing retains them past one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub player: Player,
    pub level: u8,
    pub action: Action,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event {}: Player {} (level {}) {}",
            self.id, self.player, self.level, self.action
        )
    }
}
