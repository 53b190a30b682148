//! Baseline random opponent.
//!
//! Deterministic under a fixed seed, useful as a weak sparring partner and
//! for driving long rule-level test games without hand-scripting moves.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use crate::core::{Game, PITS_PER_SIDE};

use super::config::SearchConfig;
use super::SelectionPolicy;

/// Seeded RNG for move selection.
///
/// Uses ChaCha8: fast, and the same seed always reproduces the same
/// sequence.
#[derive(Clone, Debug)]
pub struct SearchRng {
    inner: ChaCha8Rng,
}

impl SearchRng {
    /// Create an RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

/// Uniformly random selector over the mover's non-empty pits.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: SearchRng,
}

impl RandomSelector {
    /// Create a selector seeded from the configuration.
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            rng: SearchRng::new(config.seed),
        }
    }

    /// Pick a uniformly random non-empty pit for the current mover.
    pub fn select_move(&mut self, game: &Game) -> Option<usize> {
        let mover = game.current_mover();
        let candidates: SmallVec<[usize; PITS_PER_SIDE]> = (0..PITS_PER_SIDE)
            .filter(|&pit| game.pit_count(mover, pit) > 0)
            .collect();
        self.rng.choose(&candidates).copied()
    }
}

impl SelectionPolicy for RandomSelector {
    fn choose(&mut self, game: &Game) -> Option<usize> {
        self.select_move(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Game, Side};

    #[test]
    fn test_same_seed_same_sequence() {
        let config = SearchConfig::default().with_seed(7);
        let mut first = RandomSelector::new(&config);
        let mut second = RandomSelector::new(&config);
        let game = Game::new();

        for _ in 0..20 {
            assert_eq!(first.select_move(&game), second.select_move(&game));
        }
    }

    #[test]
    fn test_only_non_empty_pits_are_chosen() {
        let board = Board::from_counts([0, 3, 0, 0, 1, 0], 0, [4; 6], 20);
        let game = Game::with_board(board, Side::Player);
        let mut selector = RandomSelector::new(&SearchConfig::default());

        for _ in 0..50 {
            let pit = selector.select_move(&game).unwrap();
            assert!(pit == 1 || pit == 4);
        }
    }

    #[test]
    fn test_none_without_candidates() {
        let board = Board::from_counts([0; 6], 24, [4; 6], 0);
        let game = Game::with_board(board, Side::Player);
        let mut selector = RandomSelector::new(&SearchConfig::default());

        assert_eq!(selector.select_move(&game), None);
    }
}
