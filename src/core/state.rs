//! World state: the map, both players and the global timers.
//!
//! ## Player
//!
//! Per-player mutable record:
//! - Health (`Dead`, `Injured`, `Alive`)
//! - Position: index into the map, or `Departed`
//! - Inventory counts and the running `item_total`
//! - Whether the current zone has been searched
//!
//! ## WorldState
//!
//! The unit of persistence. Everything needed to resume a game from the
//! last completed turn lives here.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::RulesConfig;
use super::player::{PlayerId, PlayerPair};
use crate::map::{Item, Map, Zone};

/// Health of a player. Ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthState {
    Dead,
    Injured,
    Alive,
}

impl HealthState {
    /// Snapshot code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a snapshot code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(HealthState::Dead),
            1 => Some(HealthState::Injured),
            2 => Some(HealthState::Alive),
            _ => None,
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HealthState::Dead => "Dead",
            HealthState::Injured => "Injured",
            HealthState::Alive => "Alive",
        })
    }
}

/// Where a player is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// 0-based index into the map.
    At(usize),
    /// Escaped or dead; no longer on the map.
    Departed,
}

impl Position {
    /// Map index, if still on the map.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Position::At(index) => Some(index),
            Position::Departed => None,
        }
    }

    /// Snapshot zone id: index + 1, or 0 for departed.
    #[must_use]
    pub fn zone_id(self) -> u32 {
        match self {
            Position::At(index) => u32::try_from(index + 1).unwrap_or(u32::MAX),
            Position::Departed => 0,
        }
    }
}

/// Item counts in [`Item::ALL`] order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inventory {
    counts: [u16; 6],
}

impl Inventory {
    /// An empty inventory.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 6] }
    }

    /// Build from raw counts in inventory order.
    #[must_use]
    pub const fn from_counts(counts: [u16; 6]) -> Self {
        Self { counts }
    }

    /// Builder-style: set the count of one item.
    #[must_use]
    pub fn with(mut self, item: Item, count: u16) -> Self {
        self.counts[item.index()] = count;
        self
    }

    /// Raw counts in inventory order.
    #[must_use]
    pub const fn counts(&self) -> &[u16; 6] {
        &self.counts
    }

    #[must_use]
    pub fn count(&self, item: Item) -> u16 {
        self.counts[item.index()]
    }

    #[must_use]
    pub fn has(&self, item: Item) -> bool {
        self.count(item) > 0
    }

    /// Add one of `item`.
    pub fn add(&mut self, item: Item) {
        self.counts[item.index()] = self.counts[item.index()].saturating_add(1);
    }

    /// Remove one of `item`. Returns false if none was held.
    pub fn remove(&mut self, item: Item) -> bool {
        let slot = &mut self.counts[item.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }
}

impl Index<Item> for Inventory {
    type Output = u16;

    fn index(&self, item: Item) -> &Self::Output {
        &self.counts[item.index()]
    }
}

impl IndexMut<Item> for Inventory {
    fn index_mut(&mut self, item: Item) -> &mut Self::Output {
        &mut self.counts[item.index()]
    }
}

/// Per-player mutable record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub health: HealthState,
    pub position: Position,
    pub inventory: Inventory,
    /// Running count of items held, maintained separately from `inventory`.
    ///
    /// Crafting adds an item without counting it here, so the two can
    /// drift apart.
    pub item_total: i32,
    /// True once the player has searched the current zone.
    pub zone_searched: bool,
}

impl Player {
    /// A fresh, healthy player at `position` holding `inventory`.
    #[must_use]
    pub fn new(position: Position, inventory: Inventory) -> Self {
        Self {
            health: HealthState::Alive,
            position,
            inventory,
            item_total: i32::try_from(inventory.total()).unwrap_or(i32::MAX),
            zone_searched: false,
        }
    }

    /// Still on the map.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.position != Position::Departed
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health == HealthState::Dead
    }

    /// Mark as dead and off the map.
    pub fn kill(&mut self) {
        self.health = HealthState::Dead;
        self.position = Position::Departed;
    }

    /// Consume one item, keeping `item_total` in step.
    ///
    /// Returns false if none was held.
    pub fn consume(&mut self, item: Item) -> bool {
        let removed = self.inventory.remove(item);
        if removed {
            self.item_total -= 1;
        }
        removed
    }
}

/// Complete mutable world.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldState {
    pub map: Map,
    pub players: PlayerPair<Player>,
    /// Remaining encounter suppressions granted by gasoline.
    pub gasoline_safe_turns: u32,
    /// Who completed the last turn, if the scheduler is mid-sequence.
    pub last_actor: Option<PlayerId>,
}

impl WorldState {
    /// Start a game on a closed map: both players on the first zone with
    /// the configured starting inventories.
    #[must_use]
    pub fn new(map: Map, config: &RulesConfig) -> Self {
        let start = if map.is_empty() {
            Position::Departed
        } else {
            Position::At(0)
        };
        let players = PlayerPair::from_fn(|p| Player::new(start, config.starting_inventory[p]));

        Self {
            map,
            players,
            gasoline_safe_turns: 0,
            last_actor: None,
        }
    }

    /// The zone a player is standing in.
    #[must_use]
    pub fn current_zone(&self, player: PlayerId) -> Option<&Zone> {
        self.players[player]
            .position
            .index()
            .and_then(|index| self.map.get(index))
    }

    /// Whether a player is still on the map.
    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.players[player].is_active()
    }

    /// Neither player is left on the map.
    #[must_use]
    pub fn all_departed(&self) -> bool {
        self.players.iter().all(|(_, p)| !p.is_active())
    }

    /// At least one player is dead.
    #[must_use]
    pub fn any_dead(&self) -> bool {
        self.players.iter().any(|(_, p)| p.is_dead())
    }
}
