use tracing::*;

use crate::prelude::*;
use std::time::{Duration, Instant};

pub mod alpha_beta;

use alpha_beta::Node;

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub direction: Option<Direction>,
    /// True when the search proved a winning line reachable, not merely
    /// that this was the best direction of the explored depth.
    pub optimal: bool,
    pub score: f64,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_taken: Duration,
}

impl SearchResult {
    fn no_move(depth: u8) -> Self {
        Self {
            direction: None,
            optimal: false,
            score: f64::NAN,
            depth,
            nodes_searched: 0,
            time_taken: Duration::from_secs(0),
        }
    }
}

#[derive(Debug)]
pub struct SearchEngine {
    max_depth: u8,
    max_time: Option<Duration>,
    weights: Weights,
    generator: TileGenerator,
    start_time: Instant,
    nodes_searched: u64,
    pruned_nodes: u64,
}

impl SearchEngine {
    pub fn new(max_depth: u8, base: u32) -> Self {
        Self {
            max_depth,
            max_time: None,
            weights: Weights::default(),
            generator: TileGenerator::new(base),
            start_time: Instant::now(),
            nodes_searched: 0,
            pruned_nodes: 0,
        }
    }

    pub fn with_time_control(max_depth: u8, base: u32, max_time_ms: u64) -> Self {
        Self {
            max_time: Some(Duration::from_millis(max_time_ms)),
            ..Self::new(max_depth, base)
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn change_depth(&mut self, new_max_depth: u8) {
        self.max_depth = new_max_depth;
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn pruned_nodes(&self) -> u64 {
        self.pruned_nodes
    }

    /// Iterative deepening: searches at depth 1, 2, ... up to the engine's
    /// max depth, keeping the deepest completed answer. Stops early when
    /// the time budget runs out (checked only between whole depths; an
    /// in-flight descent is never interrupted), when a depth finds no
    /// direction to move, or as soon as a proven win appears.
    pub fn find_best_move(&mut self, board: &Board) -> SearchResult {
        let span = info_span!("search_root");
        let _guard = span.enter();
        self.start_time = Instant::now();
        self.nodes_searched = 0;
        self.pruned_nodes = 0;

        let mut best = SearchResult::no_move(0);
        for depth in 1..=self.max_depth {
            if self.is_time_up() {
                debug!("time budget spent before depth {depth}");
                break;
            }
            let result = self.search_at(board, depth);
            if result.direction.is_none() {
                // No legal move at this depth; keep the previous answer.
                break;
            }
            let optimal = result.optimal;
            best = result;
            if optimal {
                info!("proven win at depth {depth}");
                break;
            }
        }

        best.nodes_searched = self.nodes_searched;
        best.time_taken = self.start_time.elapsed();
        best
    }

    /// Single fixed-depth search.
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.start_time = Instant::now();
        self.nodes_searched = 0;
        self.pruned_nodes = 0;
        self.search_at(board, depth)
    }

    fn search_at(&mut self, board: &Board, depth: u8) -> SearchResult {
        // The caller's board is never touched; the root owns a clone and
        // every branch below clones again.
        let mut root = Node::root(board.clone());
        self.descend(&mut root, depth);

        if root.score.is_nan() {
            debug!("no improving move within depth {depth}");
            return SearchResult {
                nodes_searched: self.nodes_searched,
                time_taken: self.start_time.elapsed(),
                ..SearchResult::no_move(depth)
            };
        }
        SearchResult {
            direction: root.direction,
            optimal: root.score >= WIN_SCORE,
            score: root.score,
            depth,
            nodes_searched: self.nodes_searched,
            time_taken: self.start_time.elapsed(),
        }
    }

    fn is_time_up(&self) -> bool {
        if let Some(max_time) = self.max_time {
            self.start_time.elapsed() >= max_time
        } else {
            false
        }
    }
}
