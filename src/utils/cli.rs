use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"), version = env!("APP_VERSION"), about = env!("CARGO_PKG_DESCRIPTION") )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive game on a fresh board
    Play {
        /// board side length
        #[arg(short, long, default_value = "4")]
        size: usize,
        /// smallest tile value
        #[arg(short, long, default_value = "2")]
        base: u32,
        /// set search depth
        #[arg(short, long, default_value = "5")]
        depth: u8,
    },

    /// Search a board snapshot once and print the recommended direction
    Solve {
        /// path to a snapshot json file, read from stdin if omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// set search depth
        #[arg(short, long, default_value = "5")]
        depth: u8,
        /// time budget in milliseconds for iterative deepening
        #[arg(short, long)]
        time: Option<u64>,
        /// path to an evaluation weights toml file
        #[arg(short, long)]
        weights: Option<PathBuf>,
    },

    /// Run headless to serve a GUI shell over stdin/stdout
    Headless,
}

#[derive(Parser, Debug)]
#[command(name = "game_cmd", no_binary_name = true)]
pub struct GameCommand {
    #[command(subcommand)]
    pub cmd: GameSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum GameSubcommand {
    /// Move the board in a direction (left/right/up/down)
    #[clap(visible_alias = "m")]
    Move { direction: String },

    /// Ask the engine for its recommended direction
    #[clap(visible_alias = "h")]
    Hint,

    /// Let the engine play, optionally limited to a number of moves
    #[clap(visible_alias = "a")]
    Auto { moves: Option<u32> },

    /// Print the current board state
    #[clap(visible_alias = "p")]
    Print,

    /// Show the current evaluation of the board
    #[clap(visible_alias = "e")]
    Evaluate,

    /// Change the AI search depth
    #[clap(visible_alias = "d")]
    Depth { depth: u8 },

    /// Clear screen
    #[clap(visible_alias = "c")]
    Clear,

    /// Restart game with a fresh board
    #[clap(visible_alias = "r")]
    Restart,

    /// Quit game
    #[clap(visible_alias = "q")]
    Quit,
}
