//! Error types for stream and generator construction.
//!
//! The only recoverable failure class is a bad argument at a raw boundary;
//! everything past construction is total over its domain.

/// Errors surfaced when building a stream or generator from raw caller input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// A length or count that cannot describe a finite sequence.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
