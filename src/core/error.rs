//! Error types.
//!
//! In-game rule violations (wasted actions) are not errors; they are
//! reported as [`ActionOutcome::Wasted`](super::ActionOutcome::Wasted).
//! What remains here:
//!
//! - authoring conditions the caller reports and recovers from
//!   (`EmptyMap`, `MapTooShort`, `MissingExit`, `ReservedZoneKind`,
//!   `MapClosed`)
//! - internal consistency failures (`Invariant`), raised before any state
//!   is touched
//! - snapshot I/O ([`SaveError`])

use thiserror::Error;

use crate::map::ZoneKind;

/// Errors raised by the simulation core.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("the map has no zones")]
    EmptyMap,

    #[error("the map needs at least {need} zones before closing, it has {have}")]
    MapTooShort { have: usize, need: usize },

    #[error("the map must end with an empty camp exit")]
    MissingExit,

    #[error("zone kind {0} cannot be authored directly")]
    ReservedZoneKind(ZoneKind),

    #[error("the map is already closed")]
    MapClosed,

    #[error("internal consistency error: {0}")]
    Invariant(String),

    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Snapshot errors.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The snapshot could not be written or read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No snapshot exists; there is no game to resume.
    #[error("no saved game found")]
    NotFound,

    #[error("save file corrupted at line {line}: {reason}")]
    Corrupted { line: usize, reason: String },
}

impl SaveError {
    pub(crate) fn corrupted(line: usize, reason: impl Into<String>) -> Self {
        Self::Corrupted {
            line,
            reason: reason.into(),
        }
    }
}

impl GameError {
    /// Whether the caller can report this and carry on.
    ///
    /// Unwritable snapshots and internal inconsistencies are not recoverable.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            GameError::EmptyMap
            | GameError::MapTooShort { .. }
            | GameError::MissingExit
            | GameError::ReservedZoneKind(_)
            | GameError::MapClosed => true,
            GameError::Save(SaveError::NotFound) => true,
            GameError::Save(_) | GameError::Invariant(_) => false,
        }
    }
}
