//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Ply limit the engine ships with.
pub const DEFAULT_PLY_LIMIT: u32 = 25;

/// Search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum search depth in plies (one sowing step = one ply).
    ///
    /// The evaluator enumerates the full game tree up to this depth, so the
    /// cost grows exponentially; tests and benches run with small limits.
    pub ply_limit: u32,

    /// Seed for the baseline random selector.
    /// Same seed produces the same move sequence.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            ply_limit: DEFAULT_PLY_LIMIT,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a config with a custom ply limit.
    pub fn with_ply_limit(mut self, ply_limit: u32) -> Self {
        assert!(ply_limit > 0, "ply limit must be at least 1");
        self.ply_limit = ply_limit;
        self
    }

    /// Create a config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
