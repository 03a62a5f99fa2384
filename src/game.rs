//! Interactive terminal game for the `play` subcommand. The player (or
//! the engine, via `auto`) moves the board, a tile spawns after every
//! accepted move, and the loop ends on a win or a stuck board.

use std::io::{self, BufRead, Write};

use clap::Parser;

use crate::prelude::*;
use crate::utils::cli::{GameCommand, GameSubcommand};

pub fn game_loop(size: usize, base: u32, depth: u8) -> miette::Result<()> {
    let generator = TileGenerator::new(base);
    let mut engine = SearchEngine::new(depth, base);
    let mut board = fresh_board(size, base, &generator)?;
    let mut score: u64 = 0;

    println!("{board}");
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.into_diagnostic()?;
        let words = match shell_words::split(&line) {
            Ok(words) => words,
            Err(e) => {
                println!("{e}");
                prompt()?;
                continue;
            }
        };
        if words.is_empty() {
            prompt()?;
            continue;
        }

        match GameCommand::try_parse_from(words) {
            Ok(command) => match command.cmd {
                GameSubcommand::Move { direction } => match Direction::from_str(&direction) {
                    Ok(direction) => {
                        if play_turn(&mut board, direction, &generator, &mut score)? {
                            break;
                        }
                    }
                    Err(e) => println!("{e}"),
                },
                GameSubcommand::Hint => {
                    let result = engine.find_best_move(&board);
                    match result.direction {
                        Some(direction) => println!(
                            "hint: {direction} (score {:.3}, depth {}, {} nodes in {:?})",
                            result.score, result.depth, result.nodes_searched, result.time_taken,
                        ),
                        None => println!("hint: no suggestion"),
                    }
                }
                GameSubcommand::Auto { moves } => {
                    let budget = moves.unwrap_or(u32::MAX);
                    let mut played = 0;
                    let mut over = false;
                    while played < budget && !over {
                        let result = engine.find_best_move(&board);
                        let Some(direction) = result.direction else {
                            println!("engine has no suggestion, stopping");
                            break;
                        };
                        println!("engine plays {direction}");
                        over = play_turn(&mut board, direction, &generator, &mut score)?;
                        played += 1;
                    }
                    if over {
                        break;
                    }
                }
                GameSubcommand::Print => println!("{board}"),
                GameSubcommand::Evaluate => {
                    println!("eval: {:.3}", evaluate(&board, engine.weights()));
                }
                GameSubcommand::Depth { depth } => {
                    engine.change_depth(depth);
                    println!("search depth set to {depth}");
                }
                GameSubcommand::Clear => utils::clear_screen()?,
                GameSubcommand::Restart => {
                    board = fresh_board(size, base, &generator)?;
                    score = 0;
                    println!("{board}");
                }
                GameSubcommand::Quit => break,
            },
            Err(e) => println!("{e}"),
        }
        prompt()?;
    }
    Ok(())
}

/// Empty board with the two opening tiles spawned in.
fn fresh_board(size: usize, base: u32, generator: &TileGenerator) -> miette::Result<Board> {
    let mut board = Board::new(size, base);
    generator.spawn(&mut board)?;
    generator.spawn(&mut board)?;
    Ok(board)
}

/// Runs one full turn. Returns true when the game ended.
fn play_turn(
    board: &mut Board,
    direction: Direction,
    generator: &TileGenerator,
    score: &mut u64,
) -> miette::Result<bool> {
    if !board.can_move(direction) {
        println!("cannot move {direction}");
        return Ok(false);
    }

    let merges = board.merge(direction);
    board.slide(direction);
    *score += merges.iter().map(|m| u64::from(m.score)).sum::<u64>();

    let spawned = generator.spawn(board)?;
    debug!("turn: {direction}, spawned {} at {}", spawned.value, spawned.coord);

    println!("{board}");
    println!("score: {score}");

    if board.win_reached() {
        println!("You win!");
        return Ok(true);
    }
    if !board.any_move_left() {
        println!("Game over!");
        return Ok(true);
    }
    Ok(false)
}

fn prompt() -> miette::Result<()> {
    print!("> ");
    io::stdout().flush().into_diagnostic().context("flushing prompt")
}
