//! # kalah-engine
//!
//! A two-player Kalah (Mancala) engine with a computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Rules in one place**: the [`Board`] owns sowing, capture,
//!    extra-turn, and termination; nothing else mutates seeds.
//!
//! 2. **Clone-per-branch search**: every search branch owns a full,
//!    independent copy of the board. No locks, no shared mutable state
//!    between evaluation tasks.
//!
//! 3. **Thin UI boundary**: rendering and input live outside this crate.
//!    The collaborator reads seed counts, the current mover, and the
//!    game-over flag, and submits moves through [`Game::select_house`].
//!
//! ## Modules
//!
//! - `core`: sides, seeds, houses, the board, and the game session
//! - `search`: the depth-bounded parallel opponent and the random baseline
//!
//! ## Example
//!
//! ```
//! use kalah_engine::{Game, MoveSelector, SearchConfig, Side};
//!
//! let mut game = Game::new();
//! game.select_house(1).unwrap();
//! assert_eq!(game.current_mover(), Side::Opponent);
//!
//! let selector = MoveSelector::new(SearchConfig::default().with_ply_limit(4));
//! let pit = selector.select_move(&game).unwrap();
//! game.select_house(pit).unwrap();
//! ```

pub mod core;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, Game, House, MoveRecord, Role, Seed, Side, SowOutcome, PITS_PER_SIDE, STARTING_SEEDS,
};

pub use crate::search::{
    MoveEvaluator, MoveSelector, RandomSelector, SearchConfig, SearchRng, SelectionPolicy,
    DEFAULT_PLY_LIMIT,
};
