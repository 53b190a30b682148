//! The board and its sowing rules.
//!
//! ## Layout
//!
//! Both sides own six pits and one store. Internally the fourteen houses
//! live in a flat vector: player pits, player store, opponent pits,
//! opponent store. Each mover sows along a thirteen-house cycle derived from
//! that layout — own pits, own store, then the opponent's pits — skipping
//! the opponent's store entirely.
//!
//! ## Invariants
//!
//! - The total number of seeds across all houses never changes after
//!   creation; every rule (sowing, capture, the terminal sweep) relocates
//!   seeds, never discards them.
//! - `Clone` produces a fully independent copy sharing no house or seed with
//!   its source. Search branches each own a clone outright, which is what
//!   makes parallel evaluation safe without any locking.

use serde::{Deserialize, Serialize};

use super::house::{House, Role};
use super::side::Side;

/// Pits per side.
pub const PITS_PER_SIDE: usize = 6;

/// Seeds in each pit at board creation.
pub const STARTING_SEEDS: usize = 4;

/// Houses visited by one mover's sowing cycle (own pits, own store,
/// opponent pits).
const CYCLE_LEN: usize = 2 * PITS_PER_SIDE + 1;

/// All houses on the board, stores included.
const HOUSE_COUNT: usize = 2 * PITS_PER_SIDE + 2;

/// What a single sowing operation reported back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SowOutcome {
    /// The last seed landed in the mover's own store, so the mover moves
    /// again.
    pub turn_retained: bool,
    /// One side's pits came up all empty; the terminal sweep has run and no
    /// further sowing is legal.
    pub game_over: bool,
}

/// Both sides' pits and stores, plus the sowing rules that act on them.
///
/// ```
/// use kalah_engine::{Board, Side};
///
/// let mut board = Board::new();
/// // Four seeds from the third pit reach exactly the player's store.
/// let outcome = board.sow(2, Side::Player);
/// assert!(outcome.turn_retained);
/// assert!(!outcome.game_over);
/// assert_eq!(board.store_count(Side::Player), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    houses: Vec<House>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create the starting position: every pit holds [`STARTING_SEEDS`],
    /// both stores are empty.
    #[must_use]
    pub fn new() -> Self {
        Self::from_counts(
            [STARTING_SEEDS; PITS_PER_SIDE],
            0,
            [STARTING_SEEDS; PITS_PER_SIDE],
            0,
        )
    }

    /// Create an arbitrary position.
    ///
    /// Pit arrays run in sowing order (index 0 is the pit furthest from the
    /// side's store). Used by tests and by collaborators that set up
    /// positions directly.
    #[must_use]
    pub fn from_counts(
        player_pits: [usize; PITS_PER_SIDE],
        player_store: usize,
        opponent_pits: [usize; PITS_PER_SIDE],
        opponent_store: usize,
    ) -> Self {
        let mut houses = Vec::with_capacity(HOUSE_COUNT);
        for count in player_pits {
            houses.push(House::new(Side::Player, Role::Pit, count));
        }
        houses.push(House::new(Side::Player, Role::Store, player_store));
        for count in opponent_pits {
            houses.push(House::new(Side::Opponent, Role::Pit, count));
        }
        houses.push(House::new(Side::Opponent, Role::Store, opponent_store));
        Self { houses }
    }

    // === Queries ===

    /// Seed count in one of `side`'s pits.
    ///
    /// Panics if `pit` is out of range; an invalid index is a caller-contract
    /// violation, not a modeled failure.
    #[must_use]
    pub fn pit_count(&self, side: Side, pit: usize) -> usize {
        self.houses[Self::pit_house(side, pit)].count()
    }

    /// Seed counts of all of `side`'s pits, in sowing order.
    #[must_use]
    pub fn pit_counts(&self, side: Side) -> [usize; PITS_PER_SIDE] {
        std::array::from_fn(|pit| self.pit_count(side, pit))
    }

    /// Seed count in `side`'s store.
    #[must_use]
    pub fn store_count(&self, side: Side) -> usize {
        self.houses[Self::store_house(side)].count()
    }

    /// Whether every pit on `side` is empty.
    #[must_use]
    pub fn side_pits_empty(&self, side: Side) -> bool {
        (0..PITS_PER_SIDE).all(|pit| self.pit_count(side, pit) == 0)
    }

    /// Total seeds across every pit and store. Constant for the lifetime of
    /// the board.
    #[must_use]
    pub fn total_seeds(&self) -> usize {
        self.houses.iter().map(House::count).sum()
    }

    // === Sowing ===

    /// Sow from one of `mover`'s pits.
    ///
    /// Takes every seed from the selected pit and distributes them one per
    /// house along the mover's cycle, then applies the extra-turn, capture,
    /// and termination rules. A selected pit that is already empty moves no
    /// seeds, but the turn still passes and termination is still evaluated.
    ///
    /// Panics if `pit` is out of range.
    pub fn sow(&mut self, pit: usize, mover: Side) -> SowOutcome {
        assert!(pit < PITS_PER_SIDE, "pit index out of range: {pit}");

        let order = Self::sowing_order(mover);
        let seeds = self.houses[Self::pit_house(mover, pit)].take_all();
        let count = seeds.len();

        let mut turn_retained = false;
        // The selected pit sits at cycle position `pit` for either mover.
        let mut cycle_pos = pit;
        for (i, seed) in seeds.into_iter().enumerate() {
            cycle_pos = (cycle_pos + 1) % CYCLE_LEN;
            let target = order[cycle_pos];
            let was_empty = self.houses[target].is_empty();
            self.houses[target].add(seed);

            if i + 1 == count {
                let landed = &self.houses[target];
                if landed.side() == mover && landed.role() == Role::Store {
                    turn_retained = true;
                } else if landed.side() == mover && landed.role() == Role::Pit && was_empty {
                    let mirror = order[CYCLE_LEN - 1 - cycle_pos];
                    if !self.houses[mirror].is_empty() {
                        self.capture(mover, target, mirror);
                    }
                }
            }
        }

        let game_over = self.check_termination();
        SowOutcome {
            turn_retained,
            game_over,
        }
    }

    /// Move the landing pit's and its mirror's entire contents into the
    /// mover's store.
    fn capture(&mut self, mover: Side, landing: usize, mirror: usize) {
        let store = Self::store_house(mover);
        for house in [landing, mirror] {
            let seeds = self.houses[house].take_all();
            for seed in seeds {
                self.houses[store].add(seed);
            }
        }
    }

    /// If either side's pits are all empty, sweep the other side's remaining
    /// pit seeds into that side's store and report the game over.
    fn check_termination(&mut self) -> bool {
        if self.side_pits_empty(Side::Player) {
            self.sweep(Side::Opponent);
            true
        } else if self.side_pits_empty(Side::Opponent) {
            self.sweep(Side::Player);
            true
        } else {
            false
        }
    }

    /// Move every seed left in `side`'s pits into `side`'s own store.
    fn sweep(&mut self, side: Side) {
        let store = Self::store_house(side);
        for pit in 0..PITS_PER_SIDE {
            let seeds = self.houses[Self::pit_house(side, pit)].take_all();
            for seed in seeds {
                self.houses[store].add(seed);
            }
        }
    }

    // === Layout ===

    fn base(side: Side) -> usize {
        match side {
            Side::Player => 0,
            Side::Opponent => PITS_PER_SIDE + 1,
        }
    }

    fn pit_house(side: Side, pit: usize) -> usize {
        assert!(pit < PITS_PER_SIDE, "pit index out of range: {pit}");
        Self::base(side) + pit
    }

    fn store_house(side: Side) -> usize {
        Self::base(side) + PITS_PER_SIDE
    }

    /// House indices visited by `mover`'s sowing cycle: own pits, own store,
    /// opponent pits. The opponent's store is never visited.
    fn sowing_order(mover: Side) -> [usize; CYCLE_LEN] {
        let own = Self::base(mover);
        let other = Self::base(mover.opposite());
        std::array::from_fn(|pos| {
            if pos <= PITS_PER_SIDE {
                own + pos
            } else {
                other + (pos - PITS_PER_SIDE - 1)
            }
        })
    }
}
