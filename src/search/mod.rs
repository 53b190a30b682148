//! The computer opponent: depth-bounded evaluation and move selection.

pub mod config;
pub mod evaluator;
pub mod random;
pub mod selector;

pub use config::{SearchConfig, DEFAULT_PLY_LIMIT};
pub use evaluator::MoveEvaluator;
pub use random::{RandomSelector, SearchRng};
pub use selector::MoveSelector;

use crate::core::Game;

/// The seam the UI collaborator drives when it is the computer's turn.
///
/// The returned pit index is applied through [`Game::select_house`], the
/// same entry point used for human moves.
pub trait SelectionPolicy {
    /// Pick a pit for the current mover, or `None` if there is nothing to
    /// play.
    fn choose(&mut self, game: &Game) -> Option<usize>;
}
