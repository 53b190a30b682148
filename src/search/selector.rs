//! Parallel root search.
//!
//! The selector reads the live board once to enumerate the mover's
//! non-empty pits, hands each candidate its own board clone, and runs one
//! evaluation task per candidate on its own thread. Every task runs to
//! completion; the selector blocks on a join-all barrier and only then
//! reduces. Results are collected into a pit-indexed array before the
//! reduction, so the chosen pit depends on board order alone, never on which
//! task finished first.

use log::{debug, warn};
use smallvec::SmallVec;
use std::thread;

use crate::core::{Game, PITS_PER_SIDE};

use super::config::SearchConfig;
use super::evaluator::MoveEvaluator;
use super::SelectionPolicy;

/// Exhaustive parallel opponent: one evaluation task per candidate pit,
/// minimum score wins, ties break to the lowest pit index.
#[derive(Clone, Debug, Default)]
pub struct MoveSelector {
    config: SearchConfig,
}

impl MoveSelector {
    /// Create a selector with the given configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Pick a pit for the current mover.
    ///
    /// Returns `None` when the mover has no non-empty pit — a position the
    /// board's termination rule should already have marked as over.
    #[must_use]
    pub fn select_move(&self, game: &Game) -> Option<usize> {
        let mover = game.current_mover();
        let board = game.board();

        let candidates: SmallVec<[usize; PITS_PER_SIDE]> = (0..PITS_PER_SIDE)
            .filter(|&pit| board.pit_count(mover, pit) > 0)
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let evaluator = MoveEvaluator::new(mover, self.config.ply_limit);
        let mut scores: [Option<i32>; PITS_PER_SIDE] = [None; PITS_PER_SIDE];

        thread::scope(|scope| {
            let handles: Vec<(usize, thread::ScopedJoinHandle<'_, i32>)> = candidates
                .iter()
                .map(|&pit| {
                    let branch = board.clone();
                    let handle =
                        scope.spawn(move || evaluator.evaluate(&branch, mover, pit, 0));
                    (pit, handle)
                })
                .collect();

            for (pit, handle) in handles {
                match handle.join() {
                    Ok(value) => scores[pit] = Some(value),
                    // A failed task contributes nothing; the remaining
                    // candidates still produce a selection.
                    Err(_) => warn!("evaluation task for pit {pit} failed, dropping its score"),
                }
            }
        });

        let mut best: Option<(usize, i32)> = None;
        for (pit, value) in scores.iter().enumerate() {
            if let Some(value) = *value {
                if best.map_or(true, |(_, best_value)| value < best_value) {
                    best = Some((pit, value));
                }
            }
        }

        if let Some((pit, value)) = best {
            debug!(
                "{mover} selects pit {pit} (score {value}, {} candidates, ply limit {})",
                candidates.len(),
                self.config.ply_limit
            );
        }
        best.map(|(pit, _)| pit)
    }
}

impl SelectionPolicy for MoveSelector {
    fn choose(&mut self, game: &Game) -> Option<usize> {
        self.select_move(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Game, Side};

    #[test]
    fn test_returns_none_without_candidates() {
        let board = Board::from_counts([4; 6], 0, [0; 6], 24);
        let game = Game::with_board(board, Side::Opponent);
        let selector = MoveSelector::new(SearchConfig::default());

        assert_eq!(selector.select_move(&game), None);
    }

    #[test]
    fn test_only_candidate_is_selected() {
        let board = Board::from_counts([4; 6], 0, [0, 0, 0, 2, 0, 0], 0);
        let game = Game::with_board(board, Side::Opponent);
        let selector = MoveSelector::new(SearchConfig::default().with_ply_limit(4));

        assert_eq!(selector.select_move(&game), Some(3));
    }

    #[test]
    fn test_live_board_is_untouched() {
        let mut game = Game::new();
        game.select_house(0).unwrap();
        let snapshot = game.board().clone();

        let selector = MoveSelector::new(SearchConfig::default().with_ply_limit(5));
        let _ = selector.select_move(&game);

        assert_eq!(game.board(), &snapshot);
        assert_eq!(game.current_mover(), Side::Opponent);
    }
}
