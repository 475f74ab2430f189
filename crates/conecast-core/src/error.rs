//! Error type for cone construction.

use thiserror::Error;

/// Errors raised when a cone query is geometrically undefined.
///
/// Both variants surface synchronously at [`Cone`](crate::Cone) construction,
/// before any broad-phase work happens. They are never retried or recovered.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConeCastError {
    /// The maximum search distance was non-finite or not positive. A bounding
    /// sweep radius cannot be derived from an unbounded distance.
    #[error("max distance must be finite and positive, got {0}")]
    InvalidMaxDistance(f32),

    /// The cone direction had zero length, leaving the angular test undefined.
    #[error("cone direction must have non-zero length")]
    ZeroDirection,
}
