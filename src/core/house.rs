//! Seed containers: pits and stores.
//!
//! Every house carries a tag naming its owning side and its role. The sowing
//! rules inspect the tag by explicit comparison (`house.side() == mover`,
//! `house.role() == Role::Store`); there is no dispatch on concrete container
//! types.

use serde::{Deserialize, Serialize};

use super::seed::Seed;
use super::side::Side;

/// What a house is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// A non-scoring container that seeds are sown from and into.
    Pit,
    /// A side's scoring container. Seeds deposited here are never re-sown;
    /// after board creation its count only ever increases.
    Store,
}

/// An ordered container of seeds tagged with side and role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct House {
    side: Side,
    role: Role,
    seeds: Vec<Seed>,
}

impl House {
    /// Create a house holding `count` seeds.
    #[must_use]
    pub fn new(side: Side, role: Role, count: usize) -> Self {
        Self {
            side,
            role,
            seeds: vec![Seed; count],
        }
    }

    /// The side this house belongs to.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Whether this house is a pit or a store.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Number of seeds currently held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.seeds.len()
    }

    /// Whether the house holds no seeds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Drop a single seed into this house.
    pub fn add(&mut self, seed: Seed) {
        self.seeds.push(seed);
    }

    /// Remove and return every seed, leaving the house empty.
    #[must_use]
    pub fn take_all(&mut self) -> Vec<Seed> {
        std::mem::take(&mut self.seeds)
    }

    /// Move every seed from `other` into this house.
    pub fn absorb(&mut self, other: &mut House) {
        self.seeds.append(&mut other.seeds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_house() {
        let house = House::new(Side::Player, Role::Pit, 4);
        assert_eq!(house.side(), Side::Player);
        assert_eq!(house.role(), Role::Pit);
        assert_eq!(house.count(), 4);
        assert!(!house.is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store = House::new(Side::Opponent, Role::Store, 0);
        assert_eq!(store.role(), Role::Store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_and_take_all() {
        let mut house = House::new(Side::Player, Role::Pit, 2);
        house.add(Seed);
        assert_eq!(house.count(), 3);

        let seeds = house.take_all();
        assert_eq!(seeds.len(), 3);
        assert!(house.is_empty());
    }

    #[test]
    fn test_absorb_moves_everything() {
        let mut store = House::new(Side::Player, Role::Store, 1);
        let mut pit = House::new(Side::Player, Role::Pit, 5);

        store.absorb(&mut pit);

        assert_eq!(store.count(), 6);
        assert!(pit.is_empty());
    }
}
