//! The unit of game material.

use serde::{Deserialize, Serialize};

/// An identity-only token of game material.
///
/// Seeds carry no state; only their count in a house matters. They are still
/// modeled as values (rather than bare counters) so that sowing, capture, and
/// the terminal sweep are all expressed as relocation: a seed is never
/// created or destroyed after board setup, only moved between houses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed;
