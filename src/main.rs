use std::io::Read as _;

use clap::Parser;
use tesserae::prelude::*;
use tesserae::{comms, game};
use tracing::{Level, span, trace};

fn main() -> miette::Result<()> {
    init();

    let span = span!(Level::DEBUG, "main");
    let _guard = span.enter();
    match Cli::parse().command {
        Some(cmd) => match cmd {
            Commands::Play { size, base, depth } => {
                trace!("starting game: size {size}, base {base}, depth {depth}");
                game::game_loop(size, base, depth)?;
            }
            Commands::Solve {
                file,
                depth,
                time,
                weights,
            } => {
                trace!("solving snapshot: depth {depth}, time {time:?}");
                solve(file, depth, time, weights)?;
            }
            Commands::Headless => {
                trace!("running headless");
                comms::serve()?;
            }
        },
        None => {
            println!("Starting default game");
            game::game_loop(DEFAULT_BOARD_SIZE, DEFAULT_BASE, DEFAULT_DEPTH)?;
        }
    }
    Ok(())
}

fn solve(
    file: Option<std::path::PathBuf>,
    depth: u8,
    time: Option<u64>,
    weights: Option<std::path::PathBuf>,
) -> miette::Result<()> {
    let json = match file {
        Some(path) => std::fs::read_to_string(&path)
            .into_diagnostic()
            .with_context(|| format!("reading snapshot from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .into_diagnostic()
                .context("reading snapshot from stdin")?;
            buf
        }
    };
    let snapshot = BoardSnapshot::from_json(&json)?;
    let board = Board::try_from(&snapshot)?;

    let mut engine = match time {
        Some(ms) => SearchEngine::with_time_control(depth, board.base(), ms),
        None => SearchEngine::new(depth, board.base()),
    };
    if let Some(path) = weights {
        engine = engine.with_weights(Weights::load_from_file(&path)?);
    }

    println!("{board}");
    let result = engine.find_best_move(&board);
    match result.direction {
        Some(direction) => {
            println!(
                "bestmove: {direction} (optimal: {}, score {:.3})",
                result.optimal, result.score
            );
            println!(
                "depth {} | {} nodes | {} pruned | {:?}",
                result.depth,
                result.nodes_searched,
                engine.pruned_nodes(),
                result.time_taken,
            );
        }
        None => println!("bestmove: none (no legal move found)"),
    }
    Ok(())
}
