use crate::event::Event;
use crate::types::{Action, Player};

/// Count elements of a lazy sequence satisfying `predicate`.
///
/// Single forward traversal holding one element at a time: auxiliary memory is
/// O(1) regardless of sequence length. The sequence instance is consumed;
/// passing a partially-pulled instance or reusing one afterwards is a caller
/// contract violation the fold cannot detect in general.
pub fn aggregate<I, P>(sequence: I, mut predicate: P) -> u64
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut count = 0u64;
    for item in sequence {
        if predicate(&item) {
            count += 1;
        }
    }
    count
}

/// Closed set of event predicates for stream statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFilter {
    /// Event level at or above the threshold.
    MinLevel(u8),
    ActionIs(Action),
    PlayerIs(Player),
}

impl EventFilter {
    #[inline]
    pub fn matches(self, event: &Event) -> bool {
        match self {
            EventFilter::MinLevel(threshold) => event.level >= threshold,
            EventFilter::ActionIs(action) => event.action == action,
            EventFilter::PlayerIs(player) => event.player == player,
        }
    }
}

/// Count several filters in one traversal: one counter per filter, same
/// element-at-a-time memory profile as [`aggregate`].
///
/// Explicit alternative for callers who want to trade the replay-per-statistic
/// pattern for a single shared pass. Offered alongside [`aggregate`], which
/// stays the primitive for the one-statistic-per-replay shape.
pub fn aggregate_many<I>(sequence: I, filters: &[EventFilter]) -> Vec<u64>
where
    I: Iterator<Item = Event>,
{
    let mut counts = vec![0u64; filters.len()];
    for event in sequence {
        for (slot, filter) in counts.iter_mut().zip(filters.iter()) {
            if filter.matches(&event) {
                *slot += 1;
            }
        }
    }
    counts
}
