use std::fmt;

use crate::constants::{KNOCKBACK, SAMPLE_BOARD};
use crate::error::GameError;

/// Where a player stands.
///
/// `Start` sits before the first square. There is no square past the last
/// one: stepping beyond it is the end of the track, and a player who clears
/// it with enough points becomes `Finished`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Spot {
    #[default]
    Start,
    Square(usize),
    Finished,
}

impl Spot {
    /// The board index, if the player stands on a square.
    pub fn index(self) -> Option<usize> {
        match self {
            Spot::Square(i) => Some(i),
            _ => None,
        }
    }
}

/// The track: an ordered, read-only run of scored squares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: Vec<u32>,
}

impl Board {
    pub fn new(squares: Vec<u32>) -> Result<Self, GameError> {
        if squares.is_empty() {
            return Err(GameError::EmptyBoard);
        }
        if let Some(index) = squares.iter().position(|&v| v == 0) {
            return Err(GameError::ZeroSquare { index });
        }
        Ok(Self { squares })
    }

    /// The 25-square track the game is played on.
    pub fn sample() -> Self {
        Self {
            squares: SAMPLE_BOARD.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// False for every constructed board.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<u32> {
        self.squares.get(index).copied()
    }

    /// Points for standing on `spot`. Panics if `spot` is not a square of this board.
    pub fn score_at(&self, spot: Spot) -> u32 {
        match spot {
            Spot::Square(i) => match self.value(i) {
                Some(v) => v,
                None => panic!("position {i} is off a board of {} squares", self.len()),
            },
            other => panic!("{other:?} has no square value"),
        }
    }

    pub fn is_start(&self, spot: Spot) -> bool {
        spot == Spot::Start
    }

    /// True when `index` is at or beyond the one-past-end marker.
    pub fn is_past_end(&self, index: usize) -> bool {
        index >= self.squares.len()
    }

    /// Move one square forward. Returns `None` when the step runs off the end
    /// of the track.
    pub fn step(&self, spot: Spot) -> Option<Spot> {
        let next = match spot {
            Spot::Start => 0,
            Spot::Square(i) => i + 1,
            Spot::Finished => panic!("finished player cannot move"),
        };
        if self.is_past_end(next) {
            None
        } else {
            Some(Spot::Square(next))
        }
    }

    /// Send a player back `KNOCKBACK` squares, stopping at `Start`.
    pub fn knock_back(&self, spot: Spot) -> Spot {
        match spot {
            Spot::Square(i) if i >= KNOCKBACK => Spot::Square(i - KNOCKBACK),
            Spot::Square(_) | Spot::Start => Spot::Start,
            Spot::Finished => Spot::Finished,
        }
    }

    /// Sum of every square's points.
    pub fn total(&self) -> u32 {
        self.squares.iter().sum()
    }

    /// A player who lands on every square banks `total()` points; below the
    /// threshold the end of the track can never be cleared.
    pub fn check_reachable(&self, threshold: u32) -> Result<(), GameError> {
        let total = self.total();
        if total < threshold {
            return Err(GameError::Unreachable { total, threshold });
        }
        Ok(())
    }

    /// Mean points per square.
    pub fn expected_square_value(&self) -> f64 {
        self.total() as f64 / self.squares.len() as f64
    }

    pub fn is_valid(&self, spot: Spot) -> bool {
        match spot {
            Spot::Square(i) => i < self.squares.len(),
            Spot::Start | Spot::Finished => true,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[start]")?;
        for v in &self.squares {
            write!(f, " {v}")?;
        }
        write!(f, " [end]")
    }
}
