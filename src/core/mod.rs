//! Core game model: sides, seeds, houses, the board, and the session.
//!
//! Everything here is pure rule enforcement; nothing in this module knows
//! about search or about the UI collaborator.

pub mod board;
pub mod game;
pub mod house;
pub mod seed;
pub mod side;

pub use board::{Board, SowOutcome, PITS_PER_SIDE, STARTING_SEEDS};
pub use game::{Game, MoveRecord};
pub use house::{House, Role};
pub use seed::Seed;
pub use side::Side;
