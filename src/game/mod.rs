//! Playing a game end to end.
//!
//! - `session`: the turn loop with snapshots after every turn
//! - `controllers`: ready-made [`Controller`](crate::rules::Controller)s

pub mod controllers;
pub mod session;

pub use controllers::{CautiousController, RandomController, ScriptedController};
pub use session::{GameSummary, Session};
