//! Rules of the encounter.
//!
//! - `actions`: the six player actions and the per-turn move loop
//! - `encounter`: the adversary check that follows every resolved action
//! - `scheduler`: who acts next
//! - `controller`: the decision seam for front-ends and automated players
//! - `event`: notifications emitted while playing
//!
//! Every rule function works on a [`RulesContext`], which bundles the world
//! with the randomness, configuration and event sink it is played against.

pub mod actions;
pub mod controller;
pub mod encounter;
pub mod event;
pub mod scheduler;

pub use actions::{ActionResolver, TurnEnding, TurnReport};
pub use controller::{Controller, TurnView};
pub use encounter::{EncounterEngine, EncounterOutcome};
pub use event::{EventLog, GameEvent, PartnerFate};
pub use scheduler::{SchedulerState, TurnScheduler};

use crate::core::{GameRng, RulesConfig, WorldState};

/// Mutable view of a game handed to the rules.
pub struct RulesContext<'a> {
    pub world: &'a mut WorldState,
    pub rng: &'a mut GameRng,
    pub config: &'a RulesConfig,
    pub events: &'a mut EventLog,
}
