//! Alpha-beta minimax over the puzzle's two-ply turn: a maximizing layer
//! where the player picks one of the four directions, then a minimizing
//! layer where the adversary places the most damaging spawn it can.

use crate::evaluation::{self, evaluate};
use crate::prelude::*;

use super::SearchEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Max,
    Min,
}

impl NodeKind {
    fn flipped(self) -> Self {
        match self {
            NodeKind::Max => NodeKind::Min,
            NodeKind::Min => NodeKind::Max,
        }
    }
}

/// One node of the search tree: a private board plus the alpha-beta window
/// inherited from the parent at creation time. Score stays NaN until a
/// child (or a leaf evaluation) provides one; NaN marks "no result", so it
/// is excluded from every comparison explicitly.
#[derive(Debug)]
pub(crate) struct Node {
    kind: NodeKind,
    board: Board,
    alpha: f64,
    beta: f64,
    pub(crate) score: f64,
    pub(crate) direction: Option<Direction>,
}

impl Node {
    pub(crate) fn root(board: Board) -> Self {
        Self {
            kind: NodeKind::Max,
            board,
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
            score: f64::NAN,
            direction: None,
        }
    }

    fn child(&self, board: Board) -> Self {
        Self {
            kind: self.kind.flipped(),
            board,
            alpha: self.alpha,
            beta: self.beta,
            score: f64::NAN,
            direction: None,
        }
    }

    fn adopt_best(&mut self, child: &Node, direction: Direction) {
        self.score = child.score;
        self.alpha = child.score;
        self.direction = Some(direction);
    }

    fn adopt_worst(&mut self, child: &Node) {
        self.score = child.score;
        self.beta = child.score;
    }

    #[inline(always)]
    fn window_closed(&self) -> bool {
        self.alpha >= self.beta
    }
}

impl SearchEngine {
    pub(crate) fn descend(&mut self, node: &mut Node, depth: u8) {
        // Leaves carry a score only; alpha and beta stay as inherited.
        if depth == 0 {
            node.score = evaluate(&node.board, &self.weights);
            return;
        }
        match node.kind {
            NodeKind::Max => self.search_player(node, depth),
            NodeKind::Min => self.search_adversary(node, depth),
        }
    }

    /// Player layer: one child per movable direction, in `Direction::ALL`
    /// order. A strictly better non-NaN child raises score and alpha and
    /// records its direction.
    fn search_player(&mut self, node: &mut Node, depth: u8) {
        for direction in Direction::ALL {
            if !node.board.can_move(direction) {
                continue;
            }
            self.nodes_searched += 1;

            let mut board = node.board.clone();
            board.merge(direction);
            board.slide(direction);
            let mut child = node.child(board);

            // A child that already won ends the scan: no alternative can
            // beat a guaranteed win.
            if child.board.win_reached() {
                self.descend(&mut child, 0);
                node.adopt_best(&child, direction);
                break;
            }

            self.descend(&mut child, depth - 1);
            if !child.score.is_nan() && (node.score.is_nan() || child.score > node.score) {
                node.adopt_best(&child, direction);
            }

            if node.window_closed() {
                self.pruned_nodes += 1;
                trace!("max cutoff: alpha {} >= beta {}", node.alpha, node.beta);
                break;
            }
        }
    }

    /// Adversary layer: children only for the worst-case placements. A
    /// strictly worse non-NaN child lowers score and beta. Placements do
    /// not consume depth; only player moves descend.
    fn search_adversary(&mut self, node: &mut Node, depth: u8) {
        for (coord, value) in self.worst_candidates(&mut node.board) {
            self.nodes_searched += 1;

            let mut board = node.board.clone();
            board.set_value(coord, value);
            let mut child = node.child(board);

            self.descend(&mut child, depth);
            if !child.score.is_nan() && (node.score.is_nan() || child.score < node.score) {
                node.adopt_worst(&child);
            }

            if node.window_closed() {
                self.pruned_nodes += 1;
                trace!("min cutoff: alpha {} >= beta {}", node.alpha, node.beta);
                break;
            }
        }
    }

    /// Filters the full spawn candidate set down to the placements that
    /// hurt the player most right now, keeping ties in enumeration order.
    ///
    /// Each candidate is scored as `-smoothness + islands` with the tile
    /// placed speculatively on this node's own board and removed again.
    /// The score is read off the pre-move board, not the prospective
    /// child; the adversary model depends on exactly this proxy.
    fn worst_candidates(&self, board: &mut Board) -> Vec<(Coord, u32)> {
        let mut kept = Vec::new();
        let mut worst = f64::NEG_INFINITY;
        for (coord, value) in self.generator.adversary_candidates(board) {
            board.set_value(coord, value);
            let annoyance =
                -evaluation::smoothness(board) + evaluation::islands(board) as f64;
            board.clear_value(coord);

            if annoyance < worst {
                continue;
            }
            if annoyance > worst {
                kept.clear();
                worst = annoyance;
            }
            kept.push((coord, value));
        }
        kept
    }
}
