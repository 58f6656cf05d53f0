use std::iter::FusedIterator;

use rand::Rng;

use crate::error::StreamError;
use crate::event::{Event, LEVEL_MAX, LEVEL_MIN};
use crate::types::{Action, Player};

/// Validate a count arriving as a raw integer (CLI flag, config value).
///
/// Counts inside the library are `u64`, so negative lengths are unrepresentable
/// past this boundary. Fails before any element is produced; the caller may
/// retry with a corrected value.
#[inline]
pub fn checked_count(raw: i64) -> Result<u64, StreamError> {
    u64::try_from(raw).map_err(|_| {
        StreamError::InvalidArgument(format!("event count must be non-negative, got {raw}"))
    })
}

/// Lazy, finite source of synthetic game events.
///
/// Pull-driven: each `next()` call draws one event from the owned RNG and
/// returns control. The instance is single-pass; once exhausted (or abandoned
/// part-way, which is free) a replay means building a new instance against an
/// RNG re-seeded with the same value. Two instances of equal count whose RNGs
/// were seeded alike produce identical event sequences; callers rely on this
/// to recompute statistics over "the same" stream without materializing it.
///
/// The per-event draw order is part of that contract, not incidental:
/// player choice, then level draw, then action choice. `id` is the 1-based
/// stream position and never touches the RNG.
#[derive(Debug)]
pub struct EventStream<R: Rng> {
    rng: R,
    count: u64,
    next_id: u64,
}

impl<R: Rng> EventStream<R> {
    #[inline]
    pub fn new(count: u64, rng: R) -> Self {
        Self {
            rng,
            count,
            next_id: 0,
        }
    }

    /// Construct from a raw count, guarding negative values with
    /// [`StreamError::InvalidArgument`].
    pub fn from_raw_count(raw: i64, rng: R) -> Result<Self, StreamError> {
        Ok(Self::new(checked_count(raw)?, rng))
    }

    /// Events this instance has yet to produce.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.count - self.next_id
    }
}

impl<R: Rng> Iterator for EventStream<R> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if self.next_id == self.count {
            return None;
        }
        self.next_id += 1;

        // Fixed draw order: player, level, action.
        let players = Player::all();
        let player = players[self.rng.gen_range(0..players.len())];
        let level = self.rng.gen_range(LEVEL_MIN..=LEVEL_MAX);
        let actions = Action::all();
        let action = actions[self.rng.gen_range(0..actions.len())];

        Some(Event {
            id: self.next_id,
            player,
            level,
            action,
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for EventStream<R> {}

// Exhaustion is terminal: next() keeps returning None.
impl<R: Rng> FusedIterator for EventStream<R> {}
