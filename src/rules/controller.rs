//! Decision seam between the rules and whoever plays.
//!
//! The rules never read input themselves. Each decision is delegated to a
//! [`Controller`]: a menu front-end, a scripted replay or an automated
//! policy. Controllers only see a read-only [`TurnView`].

use crate::core::{Action, HealthState, Inventory, Player, PlayerId};
use crate::map::{Item, Zone};

/// What the acting player can see when choosing an action.
#[derive(Clone, Copy, Debug)]
pub struct TurnView<'a> {
    pub actor: PlayerId,
    pub player: &'a Player,
    /// Current zone, `None` once departed.
    pub zone: Option<&'a Zone>,
    /// Moves left in this turn, including the one being chosen.
    pub moves: u32,
    pub gasoline_safe_turns: u32,
}

impl<'a> TurnView<'a> {
    #[must_use]
    pub fn health(&self) -> HealthState {
        self.player.health
    }

    #[must_use]
    pub fn inventory(&self) -> &'a Inventory {
        &self.player.inventory
    }

    /// The zone's item as far as the player knows.
    ///
    /// `None` until the zone is searched; `Some(None)` for a searched,
    /// empty zone.
    #[must_use]
    pub fn known_item(&self) -> Option<Option<Item>> {
        let zone = self.zone?;
        self.player.zone_searched.then_some(zone.item)
    }
}

/// Source of player decisions.
pub trait Controller {
    /// Pick the next action for the acting player.
    fn choose_action(&mut self, view: &TurnView<'_>) -> Action;

    /// Pick a defensive item when several are held.
    ///
    /// `options` is in priority order (gasoline, gun, knife) and always has
    /// at least two entries. Return an index into it; out-of-range answers
    /// are asked again.
    fn choose_defense(&mut self, actor: PlayerId, options: &[Item]) -> usize;
}

impl<C: Controller + ?Sized> Controller for &mut C {
    fn choose_action(&mut self, view: &TurnView<'_>) -> Action {
        (**self).choose_action(view)
    }

    fn choose_defense(&mut self, actor: PlayerId, options: &[Item]) -> usize {
        (**self).choose_defense(actor, options)
    }
}
