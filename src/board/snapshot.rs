//! Serialized board form exchanged with a presentation shell: a flat list
//! of cell records plus the board size and base. JSON on the wire.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BASE;
use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRecord {
    pub x: usize,
    pub y: usize,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: usize,
    #[serde(default = "default_base")]
    pub base: u32,
    pub cells: Vec<CellRecord>,
}

fn default_base() -> u32 {
    DEFAULT_BASE
}

impl BoardSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .into_diagnostic()
            .context("parsing board snapshot json")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .into_diagnostic()
            .context("serializing board snapshot")
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let mut cells = Vec::with_capacity(board.size() * board.size());
        for y in 0..board.size() {
            for x in 0..board.size() {
                cells.push(CellRecord {
                    x,
                    y,
                    value: board.value_at(Coord::new(x, y)),
                });
            }
        }
        Self {
            size: board.size(),
            base: board.base(),
            cells,
        }
    }
}

impl TryFrom<&BoardSnapshot> for Board {
    type Error = miette::Report;

    fn try_from(snapshot: &BoardSnapshot) -> Result<Board> {
        if snapshot.size == 0 {
            miette::bail!("snapshot has zero board size");
        }
        if snapshot.base < 2 {
            miette::bail!("snapshot base {} is below 2", snapshot.base);
        }

        let mut board = Board::new(snapshot.size, snapshot.base);
        let mut seen = vec![false; snapshot.size * snapshot.size];
        for record in &snapshot.cells {
            if !board.is_inside(record.x, record.y) {
                miette::bail!(
                    "cell ({}, {}) is outside a size-{} board",
                    record.x,
                    record.y,
                    snapshot.size
                );
            }
            let idx = record.y * snapshot.size + record.x;
            if seen[idx] {
                miette::bail!("cell ({}, {}) appears more than once", record.x, record.y);
            }
            seen[idx] = true;
            if record.value != 0 && !is_power_of(record.value, snapshot.base) {
                miette::bail!(
                    "cell value {} is not a power of base {}",
                    record.value,
                    snapshot.base
                );
            }
            board.set_value(Coord::new(record.x, record.y), record.value);
        }
        if !seen.iter().all(|&s| s) {
            miette::bail!(
                "snapshot covers {} of {} cells",
                seen.iter().filter(|&&s| s).count(),
                seen.len()
            );
        }
        Ok(board)
    }
}

fn is_power_of(mut value: u32, base: u32) -> bool {
    while value % base == 0 {
        value /= base;
    }
    value == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_snapshot(values: [[u32; 4]; 4]) -> BoardSnapshot {
        let mut cells = Vec::new();
        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                cells.push(CellRecord { x, y, value });
            }
        }
        BoardSnapshot {
            size: 4,
            base: 2,
            cells,
        }
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = full_snapshot([[2, 0, 4, 0], [0, 0, 0, 8], [0, 2, 0, 0], [0, 0, 0, 0]]);
        let board = Board::try_from(&snapshot).unwrap();
        assert_eq!(board.value_at(Coord::new(2, 0)), 4);
        assert_eq!(board.value_at(Coord::new(3, 1)), 8);
        assert_eq!(board.empty_count(), 12);

        let back = BoardSnapshot::from(&board);
        assert_eq!(Board::try_from(&back).unwrap(), board);
    }

    #[test]
    fn test_snapshot_rejects_bad_cells() {
        // Value 6 is not a power of 2.
        let snapshot = full_snapshot([[6, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(Board::try_from(&snapshot).is_err());

        // Missing cells.
        let sparse = BoardSnapshot {
            size: 4,
            base: 2,
            cells: vec![CellRecord { x: 0, y: 0, value: 2 }],
        };
        assert!(Board::try_from(&sparse).is_err());

        // Duplicate coordinate.
        let mut dup = full_snapshot([[0; 4]; 4]);
        dup.cells.push(CellRecord { x: 1, y: 1, value: 2 });
        assert!(Board::try_from(&dup).is_err());

        // Out-of-range coordinate.
        let mut outside = full_snapshot([[0; 4]; 4]);
        outside.cells[0] = CellRecord { x: 4, y: 0, value: 2 };
        assert!(Board::try_from(&outside).is_err());
    }

    #[test]
    fn test_snapshot_json_defaults_base() {
        let json = r#"{"size":2,"cells":[
            {"x":0,"y":0,"value":2},{"x":1,"y":0,"value":0},
            {"x":0,"y":1,"value":0},{"x":1,"y":1,"value":4}]}"#;
        let snapshot = BoardSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.base, 2);
        let board = Board::try_from(&snapshot).unwrap();
        assert_eq!(board.max_value(), 4);
    }
}
