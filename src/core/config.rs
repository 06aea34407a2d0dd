//! Rules configuration.
//!
//! Every tunable constant of the simulation lives in [`RulesConfig`]:
//! backpack capacity, map length, encounter thresholds, crafting odds,
//! starting inventories, item tables and the scheduling policy.
//!
//! Defaults reproduce the standard game.

use serde::{Deserialize, Serialize};

use super::player::PlayerPair;
use super::state::Inventory;
use crate::map::{Item, ItemTable};

/// How the scheduler picks the next actor while both players are on the map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulingPolicy {
    /// Coin flip for the first turn, then strict alternation.
    #[default]
    Alternate,
    /// Coin flip at the start of every round of two turns.
    ShuffledRounds,
}

/// Rules configuration parameters.
///
/// Missing fields take their default when deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Take is refused once `item_total` exceeds this.
    pub backpack_size: i32,

    /// Authored zones required before the map can be closed.
    pub min_authored_zones: usize,

    /// Encounter suppressions granted by using gasoline.
    pub gasoline_safe_turns: u32,

    /// Craft succeeds when the roll is at least this.
    pub craft_success_threshold: u32,

    /// Appearance threshold when the actor just escaped and nobody is dead.
    pub escape_appearance: u32,

    /// Appearance threshold once either player is dead.
    pub bereaved_appearance: u32,

    /// Appearance threshold otherwise.
    pub base_appearance: u32,

    /// Rolls at or below this without an appearance give a near miss.
    pub near_miss_threshold: u32,

    /// Player A takes the first turn when the coin roll exceeds this.
    pub first_actor_threshold: u32,

    /// Inventories at map close.
    pub starting_inventory: PlayerPair<Inventory>,

    /// Item weights per zone kind.
    pub item_table: ItemTable,

    pub scheduling: SchedulingPolicy,

    /// Times an invalid controller answer is re-asked before giving up.
    pub max_reprompts: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            backpack_size: 4,
            min_authored_zones: 7,
            gasoline_safe_turns: 4,
            craft_success_threshold: 30,
            escape_appearance: 75,
            bereaved_appearance: 50,
            base_appearance: 30,
            near_miss_threshold: 40,
            first_actor_threshold: 50,
            starting_inventory: PlayerPair::new(
                Inventory::new().with(Item::Knife, 1),
                Inventory::new().with(Item::Adrenaline, 2),
            ),
            item_table: ItemTable::default(),
            scheduling: SchedulingPolicy::Alternate,
            max_reprompts: 16,
        }
    }
}

impl RulesConfig {
    /// Set the scheduling policy.
    #[must_use]
    pub fn with_scheduling(mut self, policy: SchedulingPolicy) -> Self {
        self.scheduling = policy;
        self
    }

    /// Set both starting inventories.
    #[must_use]
    pub fn with_starting_inventory(mut self, a: Inventory, b: Inventory) -> Self {
        self.starting_inventory = PlayerPair::new(a, b);
        self
    }

    /// Set the backpack capacity.
    #[must_use]
    pub fn with_backpack_size(mut self, size: i32) -> Self {
        self.backpack_size = size;
        self
    }

    /// Set the minimum number of authored zones.
    #[must_use]
    pub fn with_min_authored_zones(mut self, zones: usize) -> Self {
        self.min_authored_zones = zones;
        self
    }

    /// Set the item table.
    #[must_use]
    pub fn with_item_table(mut self, table: ItemTable) -> Self {
        self.item_table = table;
        self
    }
}
