//! Fixed game rules and driver defaults.
//!
//! The board shape, the finish threshold and the knockback distance are rules
//! of the game, not tuning knobs. The driver defaults only control how many
//! trials are run and how often progress is reported.

// =============================================================================
// Game Rules
// =============================================================================

/// Point values of the sample track, in order from the first square.
pub const SAMPLE_BOARD: [u32; 25] = [
    5, 10, 8, 10, 7, 5, 9, 10, 6, 7, 10, 6, 5, 8, 9, 5, 10, 5, 9, 6, 8, 7, 10, 6, 8,
];

/// Minimum accumulated score needed to finish when reaching the end of the track.
pub const FINISH_THRESHOLD: u32 = 44;

/// Number of squares a player is sent back when another player lands on them.
pub const KNOCKBACK: usize = 7;

/// Number of players in a race.
pub const N_PLAYERS: usize = 4;

/// Lowest face of the die.
pub const DIE_MIN: u8 = 1;

/// Highest face of the die.
pub const DIE_MAX: u8 = 6;

// =============================================================================
// Driver Defaults
// =============================================================================

/// Default number of trials per engine.
pub const N_TRIALS: usize = 1000;

/// Progress report period (number of trials between reports).
pub const REPORT_PERIOD: usize = 100;

/// Display labels for players, indexed by seat.
pub const PLAYER_LABELS: [char; N_PLAYERS] = ['A', 'B', 'C', 'D'];
