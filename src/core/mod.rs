//! Core types: players, world state, actions, RNG, configuration, errors.
//!
//! Everything the rules, persistence and session layers share.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionOutcome, ActionRecord, WasteReason};
pub use config::{RulesConfig, SchedulingPolicy};
pub use error::{GameError, SaveError};
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState};
pub use state::{HealthState, Inventory, Player, Position, WorldState};
