//! Dice-race: a Monte Carlo simulator for a linear dice race.
//!
//! ## Usage
//!
//! - `dice-race` - Run both the solo and the four-player trials
//! - `dice-race solo` - Average moves for a lone player
//! - `dice-race race` - Average moves and win rates for four players
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow individual games.

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use dice_race::board::Board;
use dice_race::constants::{N_TRIALS, REPORT_PERIOD};
use dice_race::dice::FairDice;
use dice_race::stats::{run_race_trials, run_solo_trials};

/// Dice-race: average moves and win rates for a linear dice race
#[derive(Parser)]
#[command(name = "dice-race")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of trials per game mode
    #[arg(long, global = true, default_value_t = N_TRIALS)]
    trials: usize,

    /// Print running four-player statistics every this many trials
    #[arg(long, global = true, default_value_t = REPORT_PERIOD)]
    report_every: usize,

    /// Seed for reproducible dice
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Single-player trials
    Solo,
    /// Four-player trials
    Race,
    /// Both, solo first
    All,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    ensure!(cli.trials > 0, "--trials must be at least 1");

    let board = Board::sample();
    let mut dice = match cli.seed {
        Some(seed) => FairDice::with_seed(seed),
        None => FairDice::new(),
    };
    info!(
        "{} trials on {} squares, seed {:?}",
        cli.trials,
        board.len(),
        cli.seed
    );

    match cli.command {
        Some(Commands::Solo) => run_solo(&board, &mut dice, cli.trials)?,
        Some(Commands::Race) => run_race(&board, &mut dice, cli.trials, cli.report_every)?,
        Some(Commands::All) | None => {
            run_solo(&board, &mut dice, cli.trials)?;
            run_race(&board, &mut dice, cli.trials, cli.report_every)?;
        }
    }
    Ok(())
}

fn run_solo(board: &Board, dice: &mut FairDice, trials: usize) -> Result<()> {
    let tally = run_solo_trials(board, dice, trials).context("single-player trial failed")?;
    println!("One Player\n");
    println!("{tally}");
    Ok(())
}

fn run_race(board: &Board, dice: &mut FairDice, trials: usize, report_every: usize) -> Result<()> {
    println!("Four Players\n");
    let tally = run_race_trials(board, dice, trials, report_every, |trial, tally| {
        if trial == 1 {
            println!("First result is");
        } else {
            println!("The result for {trial} games is");
        }
        println!("{tally}");
    })
    .context("four-player trial failed")?;

    println!("Final result over {trials} games is");
    println!("{tally}");
    Ok(())
}
