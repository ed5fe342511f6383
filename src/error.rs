//! Domain errors raised by board construction and the engines.

use thiserror::Error;

/// Errors a caller can trigger through bad input.
///
/// Position bookkeeping bugs are not represented here: a position outside
/// the board is an invariant violation and panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// A board needs at least one square.
    #[error("Invalid board: no squares")]
    EmptyBoard,
    /// Every square must be worth at least one point.
    #[error("Invalid board: square {index} has no points")]
    ZeroSquare { index: usize },
    /// The whole track is worth less than the finish threshold, so no game
    /// on it can ever end.
    #[error("Unreachable threshold: board totals {total} points, {threshold} needed")]
    Unreachable { total: u32, threshold: u32 },
    /// A die value outside 1..=6 was handed to an engine.
    #[error("Invalid roll: {0} is not a die face")]
    InvalidRoll(u8),
}
