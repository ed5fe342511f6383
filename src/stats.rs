//! Trial aggregation.
//!
//! Engines return plain results; everything cumulative lives here. Tallies
//! are per run, never global.

use std::fmt;

use log::debug;

use crate::board::Board;
use crate::constants::{N_PLAYERS, PLAYER_LABELS};
use crate::dice::Dice;
use crate::error::GameError;
use crate::race::{play4, RaceResult};
use crate::solo;

/// Running totals for single-player trials.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SoloTally {
    pub trials: usize,
    pub total_moves: u64,
}

impl SoloTally {
    pub fn record(&mut self, moves: u32) {
        self.trials += 1;
        self.total_moves += moves as u64;
    }

    pub fn average_moves(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.trials as f64
    }

    /// A lone player always finishes, so every trial is a win.
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 { 0.0 } else { 100.0 }
    }
}

impl fmt::Display for SoloTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player A average move is {:.2}", self.average_moves())?;
        writeln!(f, "Player A winning rate is {:.1}%", self.win_rate())
    }
}

/// Running totals for four-player races.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RaceTally {
    pub trials: usize,
    pub total_moves: [u64; N_PLAYERS],
    pub wins: [u32; N_PLAYERS],
}

impl RaceTally {
    pub fn record(&mut self, result: &RaceResult) {
        assert!(
            (1..=N_PLAYERS).contains(&result.winner),
            "winner {} is not a player",
            result.winner
        );
        self.trials += 1;
        self.wins[result.winner - 1] += 1;
        for (total, &m) in self.total_moves.iter_mut().zip(&result.moves) {
            *total += m as u64;
        }
    }

    pub fn average_moves(&self, seat: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.total_moves[seat] as f64 / self.trials as f64
    }

    /// Share of trials won by `seat`, in percent.
    pub fn win_rate(&self, seat: usize) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.wins[seat] as f64 * 100.0 / self.trials as f64
    }
}

impl fmt::Display for RaceTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (seat, label) in PLAYER_LABELS.iter().enumerate() {
            writeln!(f, "Player {label} average move is {:.2}", self.average_moves(seat))?;
            writeln!(f, "Player {label} winning rate is {:.1}%", self.win_rate(seat))?;
        }
        Ok(())
    }
}

/// Trials after which an intermediate report is due: the first one, then
/// every `period`-th, leaving the last trial to the final report.
#[inline]
pub fn is_report_point(trial: usize, period: usize, total: usize) -> bool {
    trial < total && (trial == 1 || (period > 0 && trial % period == 0))
}

/// Run `n` solo games and collect the move counts.
pub fn run_solo_trials(
    board: &Board,
    dice: &mut impl Dice,
    n: usize,
) -> Result<SoloTally, GameError> {
    let mut tally = SoloTally::default();
    for _ in 0..n {
        tally.record(solo::play(board, dice)?);
    }
    debug!("{n} solo trials, average {:.2} moves", tally.average_moves());
    Ok(tally)
}

/// Run `n` races, calling `on_report` with the trial number and the running
/// tally at each intermediate report point.
pub fn run_race_trials(
    board: &Board,
    dice: &mut impl Dice,
    n: usize,
    period: usize,
    mut on_report: impl FnMut(usize, &RaceTally),
) -> Result<RaceTally, GameError> {
    let mut tally = RaceTally::default();
    for trial in 1..=n {
        let result = play4(board, dice)?;
        tally.record(&result);
        if is_report_point(trial, period, n) {
            on_report(trial, &tally);
        }
    }
    debug!("{n} races, wins {:?}", tally.wins);
    Ok(tally)
}
