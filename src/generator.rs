//! Tile generation: the random spawn that follows every player move, and
//! the exhaustive candidate enumeration the adversary layer searches over.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::consts::SPAWN_BASE_PROBABILITY;
use crate::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct TileGenerator {
    base: u32,
}

impl TileGenerator {
    pub fn new(base: u32) -> Self {
        debug_assert!(base >= 2, "base must be at least 2");
        Self { base }
    }

    #[inline(always)]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// The two values a spawn can produce.
    #[inline(always)]
    pub fn spawn_values(&self) -> [u32; 2] {
        [self.base, 2 * self.base]
    }

    /// Picks a uniformly random cell among `empty` and assigns it the base
    /// value with probability 0.9, twice the base otherwise. Fails when no
    /// vacant cell is left; callers are expected to check first.
    pub fn pick(&self, empty: &[Coord]) -> Result<Cell> {
        let mut rng = rand::thread_rng();
        let coord = *empty
            .choose(&mut rng)
            .ok_or_else(|| miette::miette!("no vacant cell to spawn into"))?;
        let value = if rng.gen_bool(SPAWN_BASE_PROBABILITY) {
            self.base
        } else {
            2 * self.base
        };
        Ok(Cell { coord, value })
    }

    /// Spawns a tile into a vacant cell of `board` and returns it.
    pub fn spawn(&self, board: &mut Board) -> Result<Cell> {
        let cell = self.pick(&board.empty_cells())?;
        board.set_value(cell.coord, cell.value);
        debug!("spawned {} at {}", cell.value, cell.coord);
        Ok(cell)
    }

    /// Every placement the adversary could make: each empty cell crossed
    /// with both spawn values, in enumeration order. Deliberately not
    /// weighted by the spawn probabilities; the search treats the
    /// adversary as worst-case, not as an expectation.
    pub fn adversary_candidates(&self, board: &Board) -> Vec<(Coord, u32)> {
        let mut candidates = Vec::with_capacity(board.empty_count() * 2);
        for coord in board.empty_cells() {
            for value in self.spawn_values() {
                candidates.push((coord, value));
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_fails_with_no_vacancy() {
        let generator = TileGenerator::new(2);
        assert!(generator.pick(&[]).is_err());
    }

    #[test]
    fn test_spawn_fills_an_empty_cell() {
        let generator = TileGenerator::new(2);
        let mut board = Board::new(4, 2);
        board.set_value(Coord::new(0, 0), 2);

        let cell = generator.spawn(&mut board).unwrap();
        assert_ne!(cell.coord, Coord::new(0, 0));
        assert!(cell.value == 2 || cell.value == 4);
        assert_eq!(board.value_at(cell.coord), cell.value);
        assert_eq!(board.empty_count(), 14);
    }

    #[test]
    fn test_spawn_on_full_board_fails() {
        let generator = TileGenerator::new(2);
        let mut board = Board::new(2, 2);
        for y in 0..2 {
            for x in 0..2 {
                board.set_value(Coord::new(x, y), 2);
            }
        }
        assert!(generator.spawn(&mut board).is_err());
    }

    #[test]
    fn test_adversary_candidates_cross_empties_with_both_values() {
        let generator = TileGenerator::new(2);
        let mut board = Board::new(2, 2);
        board.set_value(Coord::new(0, 0), 2);
        board.set_value(Coord::new(1, 1), 4);

        let candidates = generator.adversary_candidates(&board);
        assert_eq!(candidates.len(), 4);
        assert!(candidates.contains(&(Coord::new(1, 0), 2)));
        assert!(candidates.contains(&(Coord::new(1, 0), 4)));
        assert!(candidates.contains(&(Coord::new(0, 1), 2)));
        assert!(candidates.contains(&(Coord::new(0, 1), 4)));
    }
}
