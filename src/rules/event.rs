//! Game events.
//!
//! Every notification a front-end may want to show is emitted as a
//! [`GameEvent`] and appended to an [`EventLog`]. The log is backed by an
//! `im::Vector`, so renderers can take cheap snapshots of it.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Action, PlayerId, WasteReason};
use crate::map::{Item, ZoneKind};

/// What became of the other player when someone escapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartnerFate {
    /// Both players made it out.
    Escaped,
    /// The partner is still somewhere in the camp.
    StillInside,
    Dead,
}

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnStarted { player: PlayerId, turn: u32 },
    Advanced { player: PlayerId, zone: u32, kind: ZoneKind },
    /// Stepped past the last zone.
    LeftCamp { player: PlayerId },
    ItemRevealed { player: PlayerId, item: Item },
    ItemTaken { player: PlayerId, item: Item },
    ActionWasted { player: PlayerId, action: Action, reason: WasteReason },
    Healed { player: PlayerId },
    AdrenalineUsed { player: PlayerId, bonus: u32 },
    Crafted { player: PlayerId, item: Item, junk_used: u16 },
    CraftFailed { player: PlayerId },
    EncounterSuppressed { player: PlayerId, remaining: u32 },
    NearMiss { player: PlayerId },
    AdversaryAppeared { player: PlayerId },
    /// Fended off with an item at no health cost.
    Repelled { player: PlayerId, item: Item },
    /// Fought back with a knife and got injured.
    Wounded { player: PlayerId },
    Killed { player: PlayerId },
    Victory { player: PlayerId, partner: PartnerFate },
    Defeat { player: PlayerId },
    GameSaved { turn: u32 },
    GameFinished,
}

/// Append-only event log.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vector<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event.
    pub fn push(&mut self, event: GameEvent) {
        log::debug!("{event:?}");
        self.events.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events so far.
    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.events
    }

    /// Events recorded at or after position `start`.
    pub fn since(&self, start: usize) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().skip(start)
    }

    /// Whether any recorded event matches.
    pub fn any(&self, pred: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(pred)
    }
}
