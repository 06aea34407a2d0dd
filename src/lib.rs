//! # camp-escape
//!
//! A two-player, turn-based survival encounter simulator.
//!
//! Two players walk a linear sequence of zones, search them for items and try
//! to reach the end alive. After every real action an adversary may appear;
//! what happens then depends on the items the actor holds.
//!
//! ## Design Principles
//!
//! 1. **Explicit World**: All mutable state lives in one `WorldState` that is
//!    passed through the rules. No globals.
//!
//! 2. **Seeded Randomness**: Every draw goes through `GameRng`, so a seed
//!    reproduces a game exactly.
//!
//! 3. **Outcomes, Not Errors**: Wasted actions are ordinary outcomes. Errors
//!    are reserved for authoring mistakes, snapshot I/O and broken invariants.
//!
//! 4. **Headless Rules**: Decisions come from a `Controller`; the rules never
//!    read input or render anything.
//!
//! ## Modules
//!
//! - `core`: Players, world state, actions, RNG, configuration, errors
//! - `map`: Zones, items, weighted item tables and map authoring
//! - `rules`: Actions, encounters, turn scheduling, events
//! - `persistence`: The text snapshot and its file
//! - `game`: Sessions and built-in controllers

pub mod core;
pub mod map;
pub mod rules;
pub mod persistence;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionOutcome, ActionRecord, WasteReason,
    RulesConfig, SchedulingPolicy,
    GameError, SaveError,
    PlayerId, PlayerPair,
    GameRng, GameRngState,
    HealthState, Inventory, Player, Position, WorldState,
};

pub use crate::map::{Item, ItemTable, Map, MapBuilder, Pick, Zone, ZoneKind};

pub use crate::rules::{
    ActionResolver, Controller, EncounterEngine, EncounterOutcome,
    EventLog, GameEvent, PartnerFate,
    RulesContext, SchedulerState, TurnEnding, TurnReport, TurnScheduler, TurnView,
};

pub use crate::persistence::{SaveStore, DEFAULT_SAVE_PATH};

pub use crate::game::{
    CautiousController, GameSummary, RandomController, ScriptedController, Session,
};
