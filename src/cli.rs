//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac::{Board, Difficulty, Mode, TicTacToePlayer as Mark};

/// Tictac - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe with a minimax computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the terminal
    Play {
        /// Config file (defaults to $TICTAC_CONFIG if set)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// single (against the computer) or two (two humans)
        #[arg(short, long)]
        mode: Option<Mode>,

        /// easy, normal, hard or perfect
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Explicit chance per move that the computer plays randomly
        #[arg(long)]
        mistake: Option<f64>,

        /// Seed for the computer's random source
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        think_ms: Option<u64>,
    },

    /// Show the computer's evaluation of a position
    Suggest {
        /// Nine cells in row-major order, e.g. "XX.OO...."
        #[arg(short, long)]
        board: Board,

        /// Mark to move
        #[arg(long, default_value = "O")]
        mark: Mark,

        /// Chance that the suggestion is a random square
        #[arg(long, default_value_t = 0.0)]
        mistake: f64,

        /// Seed for the random source
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the computer play itself and report the tally
    Selfplay {
        /// Number of games
        #[arg(short, long, default_value_t = 10)]
        games: u32,

        /// Chance per move that either side plays randomly
        #[arg(long, default_value_t = 0.0)]
        mistake: f64,

        /// Seed for both sides' random sources
        #[arg(long)]
        seed: Option<u64>,
    },
}
