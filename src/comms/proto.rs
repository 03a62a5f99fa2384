use std::str::FromStr;

use tracing::warn;

use crate::board::components::Direction;

/// Line commands the presentation shell can send. One command per line,
/// responses are plain lines on stdout.
#[derive(Debug, PartialEq)]
pub enum ShellCommand {
    /// "hello" cmd, sent at startup to identify the engine
    Hello,
    /// "position" cmd, to load a board snapshot (json cell list)
    Position { json: String },
    /// "newboard" cmd, to start from an empty board
    NewBoard {
        size: Option<usize>,
        base: Option<u32>,
    },
    /// "go" cmd, to start search + limits
    Go(GoParams),
    /// "move" cmd, to advance the held board in a direction
    Move { direction: Direction },
    /// "spawn" cmd, to place a random tile
    Spawn,
    /// "eval" cmd, to score the held board
    Eval,
    /// "board" cmd, to dump the held board as a snapshot
    Board,
    /// "print" cmd, to render the held board as a grid
    Print,
    /// "quit" cmd, to exit
    Quit,
    /// unknown or unsupported cmd
    Unknown(String),
}

#[derive(Debug, PartialEq, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub time_ms: Option<u64>,
}

pub fn parse_line(line: &str) -> ShellCommand {
    let parts: Vec<&str> = line.trim().split_ascii_whitespace().collect();
    if parts.is_empty() {
        return ShellCommand::Unknown(line.to_string());
    }

    match parts[0] {
        "hello" => ShellCommand::Hello,
        "position" => parse_position(line, &parts[1..]),
        "newboard" => parse_newboard(&parts[1..]),
        "go" => parse_go(&parts[1..]),
        "move" => parse_move(line, &parts[1..]),
        "spawn" => ShellCommand::Spawn,
        "eval" => ShellCommand::Eval,
        "board" => ShellCommand::Board,
        "print" => ShellCommand::Print,
        "quit" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line.to_string()),
    }
}

fn parse_position(line: &str, parts: &[&str]) -> ShellCommand {
    if parts.is_empty() {
        warn!("position without a payload");
        return ShellCommand::Unknown(line.to_string());
    }
    ShellCommand::Position {
        json: parts.join(" "),
    }
}

fn parse_newboard(parts: &[&str]) -> ShellCommand {
    ShellCommand::NewBoard {
        size: parts.first().and_then(|p| p.parse().ok()),
        base: parts.get(1).and_then(|p| p.parse().ok()),
    }
}

fn parse_go(parts: &[&str]) -> ShellCommand {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < parts.len() {
        match parts[i] {
            "depth" => {
                if let Some(val) = parts.get(i + 1) {
                    params.depth = val.parse().ok();
                }
                i += 1;
            }
            "time" => {
                if let Some(val) = parts.get(i + 1) {
                    params.time_ms = val.parse().ok();
                }
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }

    ShellCommand::Go(params)
}

fn parse_move(line: &str, parts: &[&str]) -> ShellCommand {
    match parts.first().map(|p| Direction::from_str(p)) {
        Some(Ok(direction)) => ShellCommand::Move { direction },
        _ => ShellCommand::Unknown(line.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go_limits() {
        assert_eq!(
            parse_line("go depth 4 time 250"),
            ShellCommand::Go(GoParams {
                depth: Some(4),
                time_ms: Some(250),
            })
        );
        assert_eq!(parse_line("go"), ShellCommand::Go(GoParams::default()));
    }

    #[test]
    fn test_parse_position_keeps_payload() {
        let cmd = parse_line(r#"position {"size":4,"cells":[]}"#);
        assert_eq!(
            cmd,
            ShellCommand::Position {
                json: r#"{"size":4,"cells":[]}"#.to_string(),
            }
        );
    }

    #[test]
    fn test_parse_move_directions() {
        assert_eq!(
            parse_line("move left"),
            ShellCommand::Move {
                direction: Direction::Left,
            }
        );
        assert!(matches!(
            parse_line("move diagonal"),
            ShellCommand::Unknown(_)
        ));
    }

    #[test]
    fn test_parse_newboard_defaults() {
        assert_eq!(
            parse_line("newboard"),
            ShellCommand::NewBoard {
                size: None,
                base: None,
            }
        );
        assert_eq!(
            parse_line("newboard 5 2"),
            ShellCommand::NewBoard {
                size: Some(5),
                base: Some(2),
            }
        );
    }
}
