//! Single-player engine.
//!
//! One player walks the track alone, banking the value of every square they
//! land on. Running off the end of the track finishes the game if the bank
//! holds at least the threshold; otherwise the player goes back to the start
//! with an empty bank and keeps rolling.

use log::{debug, trace};

use crate::board::{Board, Spot};
use crate::constants::FINISH_THRESHOLD;
use crate::dice::{check_roll, Dice};
use crate::error::GameError;

/// What the last roll did to the walker.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SoloState {
    Advancing,
    Wrapping,
    Finished,
}

/// Summary of a finished solo game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SoloOutcome {
    /// Rolls taken, including rolls that sent the walker back to the start
    pub moves: u32,
    /// Bank at the moment of finishing
    pub final_score: u32,
    /// Times the walker reached the end short of the threshold
    pub wraps: u32,
}

/// A lone player on the track.
#[derive(Clone, Debug)]
pub struct Walker {
    pub spot: Spot,
    pub score: u32,
    pub moves: u32,
    pub wraps: u32,
    pub state: SoloState,
    threshold: u32,
}

impl Default for Walker {
    fn default() -> Self {
        Self::new(FINISH_THRESHOLD)
    }
}

impl Walker {
    pub fn new(threshold: u32) -> Self {
        Self {
            spot: Spot::Start,
            score: 0,
            moves: 0,
            wraps: 0,
            state: SoloState::Advancing,
            threshold,
        }
    }

    /// Apply one roll.
    ///
    /// The walker moves one square per pip. If a pip would step past the last
    /// square, the bank decides: finish, or wrap to the start with the bank
    /// emptied. A wrapping roll scores nothing but still counts as a move.
    pub fn step(&mut self, board: &Board, roll: u8) -> Result<SoloState, GameError> {
        let roll = check_roll(roll)?;
        assert!(
            self.state != SoloState::Finished,
            "walker already finished after {} moves",
            self.moves
        );
        self.moves += 1;

        let mut spot = self.spot;
        for _ in 0..roll {
            match board.step(spot) {
                Some(next) => spot = next,
                None if self.score >= self.threshold => {
                    self.spot = Spot::Finished;
                    self.state = SoloState::Finished;
                    trace!("roll {roll}: finished with {} points", self.score);
                    return Ok(self.state);
                }
                None => {
                    debug!("roll {roll}: end of track with {} points, back to start", self.score);
                    self.spot = Spot::Start;
                    self.score = 0;
                    self.wraps += 1;
                    self.state = SoloState::Wrapping;
                    return Ok(self.state);
                }
            }
        }

        self.spot = spot;
        self.score += board.score_at(spot);
        self.state = SoloState::Advancing;
        trace!("roll {roll}: {:?}, score {}", self.spot, self.score);
        Ok(self.state)
    }

    pub fn is_finished(&self) -> bool {
        self.state == SoloState::Finished
    }

    fn outcome(&self) -> SoloOutcome {
        SoloOutcome {
            moves: self.moves,
            final_score: self.score,
            wraps: self.wraps,
        }
    }
}

/// Play one solo game with the standard threshold and return the number of moves.
pub fn play(board: &Board, dice: &mut impl Dice) -> Result<u32, GameError> {
    play_with_threshold(board, dice, FINISH_THRESHOLD)
}

pub fn play_with_threshold(
    board: &Board,
    dice: &mut impl Dice,
    threshold: u32,
) -> Result<u32, GameError> {
    Ok(play_traced(board, dice, threshold)?.moves)
}

/// Play one solo game and report moves, final bank and wrap count.
///
/// Fails with [`GameError::Unreachable`] before rolling if the board cannot
/// reach `threshold`.
pub fn play_traced(
    board: &Board,
    dice: &mut impl Dice,
    threshold: u32,
) -> Result<SoloOutcome, GameError> {
    board.check_reachable(threshold)?;
    let mut walker = Walker::new(threshold);
    while !walker.is_finished() {
        walker.step(board, dice.roll())?;
    }
    let outcome = walker.outcome();
    debug!(
        "solo game over: {} moves, {} points, {} wraps",
        outcome.moves, outcome.final_score, outcome.wraps
    );
    Ok(outcome)
}
