//! A single play session.
//!
//! `Game` is the only entry point the UI collaborator drives: read-only
//! queries for rendering, plus `select_house` as the single mutating
//! operation for both human moves and moves picked by a selector. A session
//! is never reset; starting over means constructing a new `Game`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::{Board, SowOutcome};
use super::side::Side;

/// One applied move, as recorded in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who sowed.
    pub mover: Side,
    /// The pit that was selected.
    pub pit: usize,
    /// Whether the move earned another turn.
    pub extra_turn: bool,
}

/// One mutable game session: a board plus whose turn it is.
///
/// ```
/// use kalah_engine::{Game, Side};
///
/// let mut game = Game::new();
/// assert_eq!(game.current_mover(), Side::Player);
///
/// // The third pit's four seeds end in the player's store: extra turn.
/// let outcome = game.select_house(2).unwrap();
/// assert!(outcome.turn_retained);
/// assert_eq!(game.current_mover(), Side::Player);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    mover: Side,
    over: bool,
    /// Applied moves in order. Persistent vector, so history snapshots are
    /// cheap to hand out.
    history: Vector<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a new session from the standard position, player to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::new(), Side::Player)
    }

    /// Start a session from an arbitrary position.
    #[must_use]
    pub fn with_board(board: Board, mover: Side) -> Self {
        Self {
            board,
            mover,
            over: false,
            history: Vector::new(),
        }
    }

    // === Queries ===

    /// The live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_mover(&self) -> Side {
        self.mover
    }

    /// Whether the terminal sweep has run.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Seed count in one of `side`'s pits.
    #[must_use]
    pub fn pit_count(&self, side: Side, pit: usize) -> usize {
        self.board.pit_count(side, pit)
    }

    /// Seed count in `side`'s store.
    #[must_use]
    pub fn store_count(&self, side: Side) -> usize {
        self.board.store_count(side)
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The winner by store count, once the game is over. `None` while the
    /// game is running or on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        if !self.over {
            return None;
        }
        let player = self.board.store_count(Side::Player);
        let opponent = self.board.store_count(Side::Opponent);
        match player.cmp(&opponent) {
            std::cmp::Ordering::Greater => Some(Side::Player),
            std::cmp::Ordering::Less => Some(Side::Opponent),
            std::cmp::Ordering::Equal => None,
        }
    }

    // === The single mutating entry point ===

    /// Apply a move for the current mover: sow from `pit`, then update turn
    /// and terminal state.
    ///
    /// Returns `None` once the game is over; no further sowing is accepted.
    /// Panics if `pit` is out of range (caller-contract violation).
    pub fn select_house(&mut self, pit: usize) -> Option<SowOutcome> {
        if self.over {
            return None;
        }

        let mover = self.mover;
        let outcome = self.board.sow(pit, mover);

        self.history.push_back(MoveRecord {
            mover,
            pit,
            extra_turn: outcome.turn_retained,
        });

        if !outcome.turn_retained {
            self.mover = mover.opposite();
        }
        if outcome.game_over {
            self.over = true;
        }

        Some(outcome)
    }
}
