//! Tictac - terminal front end
//!
//! Plays tic-tac-toe against the minimax opponent, inspects positions,
//! and runs computer-vs-computer matches.

#![warn(missing_docs)]

mod cli;

use anyhow::{Result, ensure};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Write;
use std::time::Duration;
use tictac::{
    AiPlayer, Board, GameEvent, GameState, HumanPlayer, LineSource, Mode, MoveSelector, Orchestrator,
    Outcome, Player, StdinSource, TicTacToePlayer as Mark, TictacConfig, score_moves,
    select_move,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            difficulty,
            mistake,
            seed,
            think_ms,
        } => {
            let mut config = TictacConfig::load(config.as_deref())?;
            if let Some(mode) = mode {
                config = config.with_mode(mode);
            }
            if let Some(difficulty) = difficulty {
                config = config.with_difficulty(difficulty);
            }
            if let Some(mistake) = mistake {
                config = config.with_mistake_probability(mistake);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            if let Some(think_ms) = think_ms {
                config = config.with_think_ms(think_ms);
            }
            config.validate()?;
            run_play(&config)
        }
        Command::Suggest {
            board,
            mark,
            mistake,
            seed,
            json,
        } => run_suggest(&board, mark, mistake, seed, json),
        Command::Selfplay {
            games,
            mistake,
            seed,
        } => run_selfplay(games, mistake, seed),
    }
}

/// Random source from a seed, or from the OS when none is given.
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    }
}

fn print_event(event: GameEvent) {
    match event {
        GameEvent::StateChanged(board) => println!("\n{}\n", board),
        GameEvent::MoveMade { player, mv } => println!("{} plays {}", player, mv.position),
        GameEvent::GameOver { .. } => {}
    }
}

/// Interactive game with a rematch prompt.
#[instrument(skip(config))]
fn run_play(config: &TictacConfig) -> Result<()> {
    info!(mode = %config.mode(), "Starting interactive game");

    let player_x: Box<dyn Player> =
        Box::new(HumanPlayer::new("Player X", StdinSource, std::io::stdout()));
    let player_o: Box<dyn Player> = match config.mode() {
        Mode::Single => {
            let selector = MoveSelector::new(
                GameState::AI_MARK,
                config.effective_mistake_probability(),
                make_rng(*config.seed()),
            );
            Box::new(
                AiPlayer::new("Computer", selector)
                    .with_think_time(Duration::from_millis(*config.think_ms())),
            )
        }
        Mode::Two => Box::new(HumanPlayer::new("Player O", StdinSource, std::io::stdout())),
    };

    let mut orchestrator = Orchestrator::new(*config.mode(), player_x, player_o);
    loop {
        let outcome = orchestrator.run(print_event)?;
        println!("{}", orchestrator.state().status_text());
        debug!(%outcome, "Game complete");

        print!("Play again? [y/N] ");
        std::io::stdout().flush()?;
        let again = StdinSource
            .next_line()?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"));
        if !again {
            return Ok(());
        }
        orchestrator.restart();
    }
}

/// Prints each empty square's score and the selector's pick.
#[instrument(skip(board))]
fn run_suggest(board: &Board, mark: Mark, mistake: f64, seed: Option<u64>, json: bool) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&mistake),
        "mistake must be within [0, 1], got {}",
        mistake
    );

    let scores = score_moves(board, mark, mark.opponent());
    let selected = select_move(board, mark, mark.opponent(), mistake, &mut make_rng(seed));

    if json {
        let report = serde_json::json!({
            "mark": mark,
            "board": board,
            "scores": scores,
            "selected": selected.map(|pos| pos.to_index()),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    for scored in &scores {
        println!(
            "  {} ({}): {:+}",
            scored.position.to_index() + 1,
            scored.position,
            scored.score
        );
    }
    match selected {
        Some(pos) => println!("{} plays {} ({})", mark, pos.to_index() + 1, pos),
        None => println!("No move available"),
    }
    Ok(())
}

/// Computer against computer.
#[instrument]
fn run_selfplay(games: u32, mistake: f64, seed: Option<u64>) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&mistake),
        "mistake must be within [0, 1], got {}",
        mistake
    );

    let (mut x_wins, mut o_wins, mut draws) = (0u32, 0u32, 0u32);
    for game in 0..games {
        let game_seed = seed.map(|s| s.wrapping_add(u64::from(game) * 2));
        let x = MoveSelector::new(Mark::X, mistake, make_rng(game_seed));
        let o = MoveSelector::new(Mark::O, mistake, make_rng(game_seed.map(|s| s.wrapping_add(1))));

        let mut orchestrator = Orchestrator::new(
            Mode::Two,
            Box::new(AiPlayer::new("X", x)),
            Box::new(AiPlayer::new("O", o)),
        );
        match orchestrator.run(|_| {})? {
            Outcome::Won(Mark::X) => x_wins += 1,
            Outcome::Won(Mark::O) => o_wins += 1,
            _ => draws += 1,
        }
    }

    info!(x_wins, o_wins, draws, "Selfplay finished");
    println!(
        "{} games: X won {}, O won {}, {} drawn",
        games, x_wins, o_wins, draws
    );
    Ok(())
}
