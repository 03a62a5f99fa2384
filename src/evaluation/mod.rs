//! Board desirability scoring: structural features (one module each)
//! combined by a weighted sum, with a fixed dominating score for a won
//! board.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::WIN_SCORE;
use crate::prelude::*;

pub mod islands;
pub mod monotonicity;
pub mod smoothness;

pub use islands::islands;
pub use monotonicity::monotonicity;
pub use smoothness::smoothness;

/// Feature weights of the evaluator. Kept as data so tuned sets can be
/// saved and reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub smoothness: f64,
    pub monotonicity: f64,
    pub max_tile: f64,
    pub vacancy: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            smoothness: 0.1,
            monotonicity: 1.0,
            max_tile: 1.0,
            vacancy: 2.7,
        }
    }
}

impl Weights {
    /// Save to TOML File
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> miette::Result<()> {
        let toml_string = toml::to_string_pretty(self).into_diagnostic()?;
        fs::write(path, toml_string).into_diagnostic()?;
        Ok(())
    }

    /// Load from a TOML File
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> miette::Result<Self> {
        let file_content = fs::read_to_string(path).into_diagnostic()?;
        let weights: Self = toml::from_str(&file_content).into_diagnostic()?;
        Ok(weights)
    }
}

/// Scores a board, higher is better.
///
/// A won board short-circuits to [`WIN_SCORE`], which dominates any
/// reachable weighted sum. Otherwise the score combines smoothness,
/// monotonicity, the log2 of the highest tile, and the natural log of the
/// vacancy count. `log2(0)` and `ln(0)` are negative infinity, never NaN:
/// a full board (or the degenerate empty board, through its zero max tile)
/// loses every strict comparison but stays well-ordered.
pub fn evaluate(board: &Board, weights: &Weights) -> f64 {
    if board.win_reached() {
        return WIN_SCORE;
    }

    let max_tile = f64::from(board.max_value()).log2();
    let vacancy = (board.empty_count() as f64).ln();
    smoothness(board) * weights.smoothness
        + monotonicity(board) * weights.monotonicity
        + max_tile * weights.max_tile
        + vacancy * weights.vacancy
}
