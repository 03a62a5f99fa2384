//! Headless line protocol for a presentation shell. The shell owns the
//! authoritative game state; it feeds the engine snapshots, asks for
//! simulated transitions or a recommended direction, and applies the
//! results to its own board for display.

pub mod proto;

use std::io::BufRead;

use crate::consts::{DEFAULT_BASE, DEFAULT_BOARD_SIZE, DEFAULT_DEPTH};
use crate::prelude::*;
use proto::{GoParams, ShellCommand, parse_line};

#[derive(Debug)]
pub struct ShellState {
    board: Board,
    search_depth: u8,
    weights: Weights,
    generator: TileGenerator,
}

impl ShellState {
    fn new(size: usize, base: u32) -> Self {
        Self {
            board: Board::new(size, base),
            search_depth: DEFAULT_DEPTH,
            weights: Weights::default(),
            generator: TileGenerator::new(base),
        }
    }
}

pub fn serve() -> miette::Result<()> {
    let mut state = ShellState::new(DEFAULT_BOARD_SIZE, DEFAULT_BASE);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(Ok(line)) = lines.next() {
        match parse_line(&line) {
            ShellCommand::Hello => cmd_hello(),
            ShellCommand::Position { json } => {
                if let Err(e) = cmd_position(&mut state, &json) {
                    warn!("rejected position payload: {e}");
                    println!("error {e}");
                }
            }
            ShellCommand::NewBoard { size, base } => {
                let size = size.unwrap_or(DEFAULT_BOARD_SIZE);
                let base = base.unwrap_or(DEFAULT_BASE);
                state = ShellState {
                    search_depth: state.search_depth,
                    ..ShellState::new(size, base)
                };
                println!("ok");
            }
            ShellCommand::Go(params) => cmd_go(&mut state, params),
            ShellCommand::Move { direction } => cmd_move(&mut state, direction),
            ShellCommand::Spawn => cmd_spawn(&mut state),
            ShellCommand::Eval => {
                println!("score {}", evaluate(&state.board, &state.weights));
            }
            ShellCommand::Board => match BoardSnapshot::from(&state.board).to_json() {
                Ok(json) => println!("board {json}"),
                Err(e) => println!("error {e}"),
            },
            ShellCommand::Print => print!("{}", state.board),
            ShellCommand::Quit => break,
            ShellCommand::Unknown(cmd) => {
                if !cmd.trim().is_empty() {
                    info!("received unknown command: {cmd}");
                    println!("error unknown command");
                }
            }
        }
    }
    Ok(())
}

fn cmd_hello() {
    println!("id name {}", env!("CARGO_PKG_NAME"));
    println!("id version {}", env!("APP_VERSION"));
    println!("ok");
}

fn cmd_position(state: &mut ShellState, json: &str) -> miette::Result<()> {
    let snapshot = BoardSnapshot::from_json(json)?;
    state.board = Board::try_from(&snapshot)?;
    state.generator = TileGenerator::new(state.board.base());
    println!("ok");
    Ok(())
}

fn cmd_go(state: &mut ShellState, params: GoParams) {
    let depth = params.depth.unwrap_or(state.search_depth);
    let base = state.board.base();
    let mut engine = match params.time_ms {
        Some(ms) => SearchEngine::with_time_control(depth, base, ms),
        None => SearchEngine::new(depth, base),
    }
    .with_weights(state.weights);

    let result = engine.find_best_move(&state.board);
    match result.direction {
        Some(direction) => println!(
            "bestmove {direction} optimal {} score {} depth {} nodes {} time {}",
            result.optimal,
            result.score,
            result.depth,
            result.nodes_searched,
            result.time_taken.as_millis(),
        ),
        None => println!("bestmove none"),
    }
}

fn cmd_move(state: &mut ShellState, direction: Direction) {
    if !state.board.can_move(direction) {
        println!("nomove");
        return;
    }
    let merges = state.board.merge(direction);
    let slides = state.board.slide(direction);
    let gained: u32 = merges.iter().map(|m| m.score).sum();
    println!(
        "moved {direction} merges {} slides {} gained {gained}",
        merges.len(),
        slides.len(),
    );
}

fn cmd_spawn(state: &mut ShellState) {
    match state.generator.spawn(&mut state.board) {
        Ok(cell) => println!("spawned {} {} {}", cell.value, cell.coord.x, cell.coord.y),
        Err(e) => println!("error {e}"),
    }
}
