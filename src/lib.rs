//! Dice-race: a simulator for a linear dice race board game.
//!
//! Players walk a fixed track of scored squares, banking points for each
//! square they land on. Running off the end of the track finishes the game
//! only with at least 44 points banked; otherwise the player starts over
//! with nothing. In the four-player game, landing on another player sends
//! them back seven squares.
//!
//! ## Modules
//!
//! - [`constants`] - Game rules and driver defaults
//! - [`board`] - The track and player positions
//! - [`dice`] - Roll sources (fair and scripted)
//! - [`solo`] - Single-player engine
//! - [`race`] - Four-player engine with knockback
//! - [`stats`] - Trial aggregation and reports
//! - [`error`] - Domain errors
//!
//! ## Example
//!
//! ```
//! use dice_race::board::Board;
//! use dice_race::dice::FairDice;
//! use dice_race::{race, solo};
//!
//! let board = Board::sample();
//! let mut dice = FairDice::with_seed(1);
//!
//! let moves = solo::play(&board, &mut dice).unwrap();
//! assert!(moves >= 1);
//!
//! let result = race::play4(&board, &mut dice).unwrap();
//! assert!((1..=4).contains(&result.winner));
//! ```

pub mod board;
pub mod constants;
pub mod dice;
pub mod error;
pub mod race;
pub mod solo;
pub mod stats;

pub use error::GameError;
