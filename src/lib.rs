#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod error;
pub mod event;
pub mod rng;
pub mod sequences;
pub mod stats;
pub mod stream;
pub mod types;

// Re-exports: stable minimal API surface for external callers
pub use crate::error::StreamError;
pub use crate::event::{Event, LEVEL_MAX, LEVEL_MIN};
pub use crate::rng::rng_for_stream;
pub use crate::sequences::{is_prime, Fibonacci, Primes};
pub use crate::stats::{aggregate, aggregate_many, EventFilter};
pub use crate::stream::{checked_count, EventStream};
pub use crate::types::{Action, Player};
