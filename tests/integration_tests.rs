//! Integration tests for dice-race
//!
//! Scenarios are driven by loaded dice so every roll, score and knockback
//! can be checked by hand against the sample board:
//!
//! ```text
//! index: 0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24
//! value: 5 10  8 10  7  5  9 10  6  7 10  6  5  8  9  5 10  5  9  6  8  7 10  6  8
//! ```

use dice_race::board::{Board, Spot};
use dice_race::constants::{FINISH_THRESHOLD, N_TRIALS, REPORT_PERIOD};
use dice_race::dice::{Dice, FairDice, LoadedDice};
use dice_race::race::{play4, Outcome, Race, RaceResult, Racer};
use dice_race::solo::{self, play_traced, SoloOutcome};
use dice_race::stats::{run_race_trials, run_solo_trials};
use dice_race::GameError;

// =============================================================================
// Helper functions
// =============================================================================

/// A race where seat A stands on `spot` with `score` points and the rest wait at the start.
fn race_with_leader(spot: Spot, score: u32) -> Race {
    Race::from_racers([
        Racer::at(spot, score),
        Racer::default(),
        Racer::default(),
        Racer::default(),
    ])
}

// =============================================================================
// Board construction
// =============================================================================

#[test]
fn test_board_rejects_empty() {
    assert_eq!(Board::new(Vec::new()), Err(GameError::EmptyBoard));
}

#[test]
fn test_boards_below_threshold_do_not_hang() {
    let unreachable = GameError::Unreachable {
        total: 40,
        threshold: FINISH_THRESHOLD,
    };
    let short = Board::new(vec![5, 10, 8, 10, 7]).unwrap();
    assert_eq!(
        solo::play(&short, &mut FairDice::with_seed(1)),
        Err(unreachable.clone())
    );
    assert_eq!(
        play4(&short, &mut FairDice::with_seed(1)),
        Err(unreachable)
    );

    let single = Board::new(vec![1]).unwrap();
    assert_eq!(
        play4(&single, &mut FairDice::with_seed(1)),
        Err(GameError::Unreachable {
            total: 1,
            threshold: FINISH_THRESHOLD
        })
    );
    assert!(run_solo_trials(&single, &mut FairDice::with_seed(1), 10).is_err());
}

#[test]
fn test_board_error_messages() {
    assert_eq!(GameError::EmptyBoard.to_string(), "Invalid board: no squares");
    assert_eq!(
        GameError::InvalidRoll(9).to_string(),
        "Invalid roll: 9 is not a die face"
    );
}

// =============================================================================
// Single player
// =============================================================================

#[test]
fn test_solo_single_steps_visit_every_square() {
    // Ones land on all 25 squares (189 points); the 26th roll runs off the end
    let board = Board::sample();
    let mut dice = LoadedDice::new(vec![1]);
    let outcome = play_traced(&board, &mut dice, FINISH_THRESHOLD).unwrap();
    assert_eq!(
        outcome,
        SoloOutcome {
            moves: 26,
            final_score: 189,
            wraps: 0
        }
    );
}

#[test]
fn test_solo_threes() {
    // Squares 2,5,8,11,14,17,20,23 bank 8+5+6+6+9+5+8+6 = 53
    let board = Board::sample();
    let mut dice = LoadedDice::new(vec![3]);
    assert_eq!(solo::play(&board, &mut dice), Ok(9));
}

#[test]
fn test_solo_wrap_then_finish() {
    // Sixes bank 5+6+5+6 = 22 on squares 5,11,17,23, then run off short
    let board = Board::sample();
    let mut script = vec![6; 5];
    script.extend(std::iter::repeat_n(1, 26));
    let mut dice = LoadedDice::new(script);
    let outcome = play_traced(&board, &mut dice, FINISH_THRESHOLD).unwrap();
    assert_eq!(outcome.wraps, 1);
    assert_eq!(outcome.moves, 5 + 26);
    assert_eq!(outcome.final_score, 189);
}

#[test]
fn test_solo_seeded_runs_repeat() {
    let board = Board::sample();
    let a = run_solo_trials(&board, &mut FairDice::with_seed(3), 50).unwrap();
    let b = run_solo_trials(&board, &mut FairDice::with_seed(3), 50).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_solo_average_is_plausible() {
    // About len / 3.5 landings per pass at the mean square value is well over
    // the threshold, so most games finish on the first pass.
    let board = Board::sample();
    let landings = board.len() as f64 / 3.5;
    let per_pass = landings * board.expected_square_value();
    assert!(per_pass > FINISH_THRESHOLD as f64);

    let tally = run_solo_trials(&board, &mut FairDice::with_seed(2024), 2000).unwrap();
    let avg = tally.average_moves();
    assert!(
        avg > landings && avg < 2.0 * (landings + 1.0),
        "average {avg:.2} outside plausible range"
    );
    assert_eq!(tally.win_rate(), 100.0);
}

// =============================================================================
// Four players
// =============================================================================

#[test]
fn test_race_knockback_from_start() {
    let board = Board::sample();
    let mut race = Race::new();

    // A -> 0, B -> 2, C -> 1, then D lands on C and sends it home
    assert_eq!(race.take_turn(&board, 1), Ok(Outcome::Normal));
    assert_eq!(race.take_turn(&board, 3), Ok(Outcome::Normal));
    assert_eq!(race.take_turn(&board, 2), Ok(Outcome::Normal));
    assert_eq!(race.take_turn(&board, 2), Ok(Outcome::Hit(2)));
    assert_eq!(race.racers[2].spot, Spot::Start);
    assert_eq!(race.racers[2].score, 10);
    assert_eq!(race.racers[3].spot, Spot::Square(1));
    assert_eq!(race.racers[3].score, 10);

    // A lands on B at square 2; B clamps at the start
    assert_eq!(race.take_turn(&board, 2), Ok(Outcome::Hit(0)));
    assert_eq!(
        race.racers[0],
        Racer {
            spot: Spot::Square(2),
            score: 13,
            moves: 2
        }
    );
    assert_eq!(race.racers[1].spot, Spot::Start);
    assert_eq!(race.racers[1].moves, 1);
}

#[test]
fn test_race_knockback_seven_squares() {
    let board = Board::sample();
    let mut race = Race::from_racers([
        Racer::at(Spot::Square(10), 40),
        Racer::at(Spot::Square(15), 30),
        Racer::default(),
        Racer::default(),
    ]);
    assert_eq!(race.take_turn(&board, 5), Ok(Outcome::Hit(0)));
    assert_eq!(race.racers[1].spot, Spot::Square(8));
    assert_eq!(race.racers[0].score, 45);
}

#[test]
fn test_race_turn_order_breaks_ties() {
    let board = Board::sample();
    let mut race = Race::from_racers([
        Racer::at(Spot::Square(23), 50),
        Racer::at(Spot::Square(23), 50),
        Racer::default(),
        Racer::default(),
    ]);
    let result = race.play_round(&board, [2, 2, 2, 2]).unwrap();
    assert_eq!(
        result,
        Some(RaceResult {
            winner: 1,
            moves: [1, 0, 0, 0]
        })
    );
    assert_eq!(race.racers[1].spot, Spot::Square(23));
}

#[test]
fn test_race_later_seat_can_win() {
    let board = Board::sample();
    let mut race = Race::from_racers([
        Racer::at(Spot::Square(23), 10),
        Racer::default(),
        Racer::at(Spot::Square(20), 60),
        Racer::default(),
    ]);
    let result = race.play_round(&board, [6, 1, 6, 1]).unwrap();
    assert_eq!(
        result,
        Some(RaceResult {
            winner: 3,
            moves: [1, 1, 1, 0]
        })
    );
    // A ran off the end short of the threshold
    assert_eq!(race.racers[0].spot, Spot::Start);
    assert_eq!(race.racers[0].score, 0);
}

#[test]
fn test_race_wrap_leaves_others_alone() {
    let board = Board::sample();
    let mut race = race_with_leader(Spot::Square(24), 20);
    race.racers[1] = Racer::at(Spot::Square(3), 10);
    assert_eq!(race.take_turn(&board, 4), Ok(Outcome::Wrap));
    assert_eq!(race.racers[1].spot, Spot::Square(3));
}

#[test]
fn test_race_lower_threshold() {
    let board = Board::sample();
    let mut race = race_with_leader(Spot::Square(24), 20).with_threshold(20);
    assert_eq!(race.take_turn(&board, 1), Ok(Outcome::Finish));
    assert_eq!(race.winner(), Some(0));
    assert_eq!(race.racers[0].spot, Spot::Finished);
    assert_eq!(race.racers[0].score, 20);
}

#[test]
fn test_play4_move_counts_follow_turn_order() {
    let board = Board::sample();
    let mut dice = FairDice::with_seed(99);
    for _ in 0..200 {
        let result = play4(&board, &mut dice).unwrap();
        let w = result.winner - 1;
        let won_in = result.moves[w];
        assert!(won_in >= 1);
        for (seat, &m) in result.moves.iter().enumerate() {
            if seat <= w {
                assert_eq!(m, won_in, "seat {seat} in {result:?}");
            } else {
                assert_eq!(m, won_in - 1, "seat {seat} in {result:?}");
            }
        }
    }
}

#[test]
fn test_play4_rejects_bad_dice() {
    struct Broken;
    impl Dice for Broken {
        fn roll(&mut self) -> u8 {
            0
        }
    }
    let board = Board::sample();
    assert_eq!(play4(&board, &mut Broken), Err(GameError::InvalidRoll(0)));
}

// =============================================================================
// Aggregation
// =============================================================================

#[test]
fn test_race_trials_report_cadence() {
    let board = Board::sample();
    let mut reported = Vec::new();
    let tally = run_race_trials(
        &board,
        &mut FairDice::with_seed(11),
        N_TRIALS,
        REPORT_PERIOD,
        |trial, tally| {
            assert_eq!(tally.trials, trial);
            reported.push(trial);
        },
    )
    .unwrap();

    assert_eq!(reported, vec![1, 100, 200, 300, 400, 500, 600, 700, 800, 900]);
    assert_eq!(tally.trials, N_TRIALS);
    assert_eq!(tally.wins.iter().sum::<u32>() as usize, N_TRIALS);
    let total_rate: f64 = (0..4).map(|s| tally.win_rate(s)).sum();
    assert!((total_rate - 100.0).abs() < 1e-6);
}

#[test]
fn test_first_seat_advantage() {
    // Ties go to the earlier seat, so A should win at least as often as D
    let board = Board::sample();
    let tally = run_race_trials(&board, &mut FairDice::with_seed(5), 4000, 0, |_, _| {}).unwrap();
    assert!(
        tally.wins[0] > tally.wins[3],
        "wins {:?}",
        tally.wins
    );
}
