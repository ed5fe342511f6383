//! Four-player race.
//!
//! Players take turns in seat order A, B, C, D. Each round all four dice are
//! rolled up front; the round stops early as soon as someone finishes, so a
//! player earlier in the order wins ties. Landing exactly on another player's
//! square knocks that player back [`KNOCKBACK`] squares.
//!
//! [`KNOCKBACK`]: crate::constants::KNOCKBACK

use log::{debug, trace};

use crate::board::{Board, Spot};
use crate::constants::{FINISH_THRESHOLD, N_PLAYERS};
use crate::dice::{check_roll, Dice};
use crate::error::GameError;

/// Per-player race state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Racer {
    pub spot: Spot,
    pub score: u32,
    pub moves: u32,
}

impl Racer {
    pub fn at(spot: Spot, score: u32) -> Self {
        Self {
            spot,
            score,
            moves: 0,
        }
    }
}

/// How a roll resolves for the player moving.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Ran off the end with enough points
    Finish,
    /// Ran off the end short of the threshold
    Wrap,
    /// Landed on the square of `others[i]`
    Hit(usize),
    /// Landed on a free square
    Normal,
}

/// Result of a completed race.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RaceResult {
    /// Winning player, 1 through 4
    pub winner: usize,
    /// Moves taken by each player when the race ended
    pub moves: [u32; N_PLAYERS],
}

/// Walk a probe forward `roll` squares from the mover's spot and classify
/// where it ends up. Returns the outcome and the probe's final spot.
///
/// Hits are checked against `others` in order, so the first match wins.
pub fn check_position(
    board: &Board,
    mover: &Racer,
    others: &[Spot],
    roll: u8,
    threshold: u32,
) -> Result<(Outcome, Spot), GameError> {
    let roll = check_roll(roll)?;
    let mut probe = mover.spot;
    for _ in 0..roll {
        match board.step(probe) {
            Some(next) => probe = next,
            None if mover.score >= threshold => return Ok((Outcome::Finish, Spot::Finished)),
            None => return Ok((Outcome::Wrap, Spot::Start)),
        }
    }

    let outcome = match others.iter().position(|&s| s == probe) {
        Some(i) => Outcome::Hit(i),
        None => Outcome::Normal,
    };
    Ok((outcome, probe))
}

/// A race in progress.
#[derive(Clone, Debug)]
pub struct Race {
    pub racers: [Racer; N_PLAYERS],
    /// Seat whose turn is next
    pub turn: usize,
    winner: Option<usize>,
    threshold: u32,
}

impl Default for Race {
    fn default() -> Self {
        Self::new()
    }
}

impl Race {
    /// Everyone on the start marker with an empty bank.
    pub fn new() -> Self {
        Self::from_racers([Racer::default(); N_PLAYERS])
    }

    /// Start from arbitrary positions, with seat A to move.
    pub fn from_racers(racers: [Racer; N_PLAYERS]) -> Self {
        Self {
            racers,
            turn: 0,
            winner: None,
            threshold: FINISH_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Winning seat (0-based), once someone has finished.
    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn result(&self) -> Option<RaceResult> {
        self.winner.map(|seat| RaceResult {
            winner: seat + 1,
            moves: self.racers.map(|r| r.moves),
        })
    }

    /// Seats of everyone except `seat`, in seat order.
    fn others_of(seat: usize) -> [usize; N_PLAYERS - 1] {
        let mut out = [0; N_PLAYERS - 1];
        for (slot, other) in (0..N_PLAYERS).filter(|&s| s != seat).enumerate() {
            out[slot] = other;
        }
        out
    }

    /// Play the current seat's turn with `roll` and pass the turn on.
    pub fn take_turn(&mut self, board: &Board, roll: u8) -> Result<Outcome, GameError> {
        assert!(self.winner.is_none(), "race is already over");
        let seat = self.turn;
        let others = Self::others_of(seat);
        let other_spots = others.map(|s| self.racers[s].spot);

        let (outcome, landed) =
            check_position(board, &self.racers[seat], &other_spots, roll, self.threshold)?;

        let mover = &mut self.racers[seat];
        mover.spot = landed;
        match outcome {
            Outcome::Hit(_) | Outcome::Normal => mover.score += board.score_at(landed),
            Outcome::Wrap => mover.score = 0,
            Outcome::Finish => {}
        }
        mover.moves += 1;

        if let Outcome::Hit(i) = outcome {
            let target = &mut self.racers[others[i]];
            let from = target.spot;
            target.spot = board.knock_back(from);
            trace!(
                "seat {seat} knocks seat {} back from {from:?} to {:?}",
                others[i], target.spot
            );
        }

        trace!(
            "seat {seat} rolls {roll}: {outcome:?}, now {:?} with {} points",
            self.racers[seat].spot, self.racers[seat].score
        );
        debug_assert!(self.racers.iter().all(|r| board.is_valid(r.spot)));

        if outcome == Outcome::Finish {
            self.winner = Some(seat);
        }
        self.turn = (seat + 1) % N_PLAYERS;
        Ok(outcome)
    }

    /// Play one round from seat A. `rolls[i]` is seat `i`'s roll; rolls
    /// after a finishing turn are unused. Panics if a round is already
    /// part-way through.
    pub fn play_round(
        &mut self,
        board: &Board,
        rolls: [u8; N_PLAYERS],
    ) -> Result<Option<RaceResult>, GameError> {
        for r in rolls {
            check_roll(r)?;
        }
        assert_eq!(self.turn, 0, "rounds start with seat A");
        for roll in rolls {
            if self.take_turn(board, roll)? == Outcome::Finish {
                return Ok(self.result());
            }
        }
        Ok(None)
    }
}

/// Race four players to the finish and report the winner and everyone's moves.
///
/// Fails with [`GameError::Unreachable`] before rolling if the board cannot
/// reach the finish threshold.
pub fn play4(board: &Board, dice: &mut impl Dice) -> Result<RaceResult, GameError> {
    board.check_reachable(FINISH_THRESHOLD)?;
    let mut race = Race::new();
    loop {
        let rolls = [dice.roll(), dice.roll(), dice.roll(), dice.roll()];
        if let Some(result) = race.play_round(board, rolls)? {
            debug!("race won by player {} with moves {:?}", result.winner, result.moves);
            return Ok(result);
        }
    }
}
