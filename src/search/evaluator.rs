//! Recursive depth-bounded move evaluation.
//!
//! Each `evaluate` call represents one ply: it clones the board it was
//! given, sows the chosen pit on that private clone, and either scores the
//! position or recurses one ply deeper. Cloning per call means sibling
//! branches never observe each other's mutation, so a selector can run many
//! evaluations concurrently over clones of the same root board.
//!
//! ## Aggregation
//!
//! A non-leaf node returns the **minimum** of its six children, regardless
//! of whose ply it is — the aggregation never alternates between minimizing
//! and maximizing the way a conventional adversarial search (negamax, or
//! min/max by depth parity) would. That asymmetry is the engine's historical
//! behavior and is kept exactly as-is; tests pin it.

use crate::core::{Board, Side, PITS_PER_SIDE};

/// Depth-bounded exhaustive evaluator for one root side.
///
/// The score sign is fixed at construction: leaves are always scored as the
/// root side's store count minus the other store's, no matter whose turn it
/// is at the leaf.
#[derive(Clone, Copy, Debug)]
pub struct MoveEvaluator {
    root: Side,
    ply_limit: u32,
}

impl MoveEvaluator {
    /// Create an evaluator scoring from `root`'s perspective.
    #[must_use]
    pub fn new(root: Side, ply_limit: u32) -> Self {
        assert!(ply_limit > 0, "ply limit must be at least 1");
        Self { root, ply_limit }
    }

    /// Evaluate sowing `pit` as `mover` on a private clone of `board`.
    ///
    /// `depth` counts plies already taken; the root call passes 0. A chosen
    /// pit that happens to be empty still costs a ply: no seeds move, but
    /// turn and termination are evaluated and the search continues below it.
    #[must_use]
    pub fn evaluate(&self, board: &Board, mover: Side, pit: usize, depth: u32) -> i32 {
        let mut board = board.clone();
        let outcome = board.sow(pit, mover);

        if outcome.game_over || depth + 1 >= self.ply_limit {
            return self.score(&board);
        }

        let next = if outcome.turn_retained {
            mover
        } else {
            mover.opposite()
        };

        let mut best = i32::MAX;
        for candidate in 0..PITS_PER_SIDE {
            let value = self.evaluate(&board, next, candidate, depth + 1);
            if value < best {
                best = value;
            }
        }
        best
    }

    /// Store differential from the root side's perspective.
    fn score(&self, board: &Board) -> i32 {
        board.store_count(self.root) as i32 - board.store_count(self.root.opposite()) as i32
    }
}
