use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four axis-aligned player moves.
///
/// `ALL` fixes the enumeration order the search scans directions in;
/// equal-scoring moves tie-break toward the earlier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Up,
    ];

    /// Left/Right act along rows, Up/Down along columns.
    #[inline(always)]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Right and Up push toward the high end of their axis, so lines are
    /// scanned in reverse for them.
    #[inline(always)]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Up)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Direction {
    type Err = miette::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "down" | "d" => Ok(Direction::Down),
            "up" | "u" => Ok(Direction::Up),
            other => Err(miette::miette!("unknown direction: {other}")),
        }
    }
}

/// Zero-based grid coordinate, `x` for column and `y` for row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A grid cell with its value. Identity is the (x, y, value) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    pub value: u32,
}

/// Two equal tiles combined into `to`, which now holds the doubled value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeEvent {
    pub from: Coord,
    pub to: Coord,
    /// Value of the merged tile, which is also the score gained.
    pub score: u32,
}

/// A tile compacted from `from` to `to` without changing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub from: Coord,
    pub to: Coord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_orientation() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Down.is_horizontal());

        assert!(Direction::Right.is_reversed());
        assert!(Direction::Up.is_reversed());
        assert!(!Direction::Left.is_reversed());
        assert!(!Direction::Down.is_reversed());
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!(Direction::from_str("left").unwrap(), Direction::Left);
        assert_eq!(Direction::from_str("U").unwrap(), Direction::Up);
        assert!(Direction::from_str("sideways").is_err());
    }
}
