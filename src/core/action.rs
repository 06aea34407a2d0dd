//! Actions a player can take during a turn, and their outcomes.
//!
//! Every action either resolves (changes the world and exposes the actor
//! to an encounter) or is wasted (no effect, the move is refunded).

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// The six action kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move to the next zone, or leave the camp from the last one.
    Advance,
    /// Search the current zone for its item.
    Reveal,
    /// Put the revealed item in the backpack.
    Take,
    /// Use a bandage to recover from an injury.
    Heal,
    /// Use adrenaline for extra moves.
    UseAdrenaline,
    /// Try to turn junk into something useful.
    Craft,
}

impl Action {
    /// All actions in menu order.
    pub const ALL: [Action; 6] = [
        Action::Advance,
        Action::Reveal,
        Action::Take,
        Action::Heal,
        Action::UseAdrenaline,
        Action::Craft,
    ];

    /// Map a 1-based menu number to an action.
    #[must_use]
    pub fn from_menu(choice: u32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Action::Advance => "Advance to the next zone",
            Action::Reveal => "Search the zone",
            Action::Take => "Take the item",
            Action::Heal => "Heal with a bandage",
            Action::UseAdrenaline => "Use a shot of adrenaline",
            Action::Craft => "Try to use the junk",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Why an action had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WasteReason {
    /// The zone was already searched.
    AlreadySearched,
    /// The zone holds nothing.
    NothingHere,
    /// Take before searching.
    NotSearched,
    /// Backpack over capacity.
    BackpackFull,
    /// Heal while not injured.
    NotInjured,
    NoBandage,
    NoAdrenaline,
    NoJunk,
}

impl std::fmt::Display for WasteReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WasteReason::AlreadySearched => "the zone has already been searched",
            WasteReason::NothingHere => "there is nothing here",
            WasteReason::NotSearched => "the zone has not been searched yet",
            WasteReason::BackpackFull => "the backpack is full",
            WasteReason::NotInjured => "not injured",
            WasteReason::NoBandage => "no bandage to use",
            WasteReason::NoAdrenaline => "no adrenaline to use",
            WasteReason::NoJunk => "no junk to use",
        })
    }
}

/// Result of resolving one action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// The world changed; the encounter check follows.
    Resolved,
    /// Nothing happened and the move was refunded.
    Wasted(WasteReason),
}

impl ActionOutcome {
    #[must_use]
    pub const fn is_wasted(self) -> bool {
        matches!(self, ActionOutcome::Wasted(_))
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    pub outcome: ActionOutcome,

    /// Turn number when the action was taken (starts at 1).
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, outcome: ActionOutcome, turn: u32) -> Self {
        Self {
            player,
            action,
            outcome,
            turn,
        }
    }
}
