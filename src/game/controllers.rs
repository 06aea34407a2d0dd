//! Built-in controllers.
//!
//! - [`ScriptedController`]: replays queued decisions (tests, replays)
//! - [`RandomController`]: uniform over actions and defense options
//! - [`CautiousController`]: a small heuristic, used by the binary

use std::collections::VecDeque;

use crate::core::{Action, GameRng, HealthState, PlayerId};
use crate::map::Item;
use crate::rules::{Controller, TurnView};

// =============================================================================
// Scripted
// =============================================================================

/// Replays a fixed list of decisions.
///
/// Once the action queue runs dry every further turn advances, so a scripted
/// game always terminates. Defense choices default to the first option.
#[derive(Clone, Debug, Default)]
pub struct ScriptedController {
    actions: VecDeque<Action>,
    defenses: VecDeque<usize>,
}

impl ScriptedController {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            defenses: VecDeque::new(),
        }
    }

    /// Queue answers for defense prompts.
    #[must_use]
    pub fn with_defenses(mut self, choices: impl IntoIterator<Item = usize>) -> Self {
        self.defenses.extend(choices);
        self
    }

    /// Actions not yet handed out.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl Controller for ScriptedController {
    fn choose_action(&mut self, _view: &TurnView<'_>) -> Action {
        self.actions.pop_front().unwrap_or(Action::Advance)
    }

    fn choose_defense(&mut self, _actor: PlayerId, _options: &[Item]) -> usize {
        self.defenses.pop_front().unwrap_or(0)
    }
}

// =============================================================================
// Random
// =============================================================================

/// Picks uniformly at random, with its own seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomController {
    rng: GameRng,
}

impl RandomController {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Controller for RandomController {
    fn choose_action(&mut self, _view: &TurnView<'_>) -> Action {
        Action::ALL[self.rng.below(Action::ALL.len())]
    }

    fn choose_defense(&mut self, _actor: PlayerId, options: &[Item]) -> usize {
        self.rng.below(options.len().max(1))
    }
}

// =============================================================================
// Cautious
// =============================================================================

/// Heals when hurt, searches every zone once, picks up whatever fits, crafts
/// once junk piles up, then moves on.
///
/// Never repeats an action that was already wasted in the same zone, so it
/// cannot stall a turn.
#[derive(Clone, Debug)]
pub struct CautiousController {
    backpack_size: i32,
    /// Zone ids where a search has already been tried, per player.
    searched: [Option<u32>; 2],
}

impl Default for CautiousController {
    fn default() -> Self {
        Self::new(4)
    }
}

impl CautiousController {
    #[must_use]
    pub fn new(backpack_size: i32) -> Self {
        Self {
            backpack_size,
            searched: [None; 2],
        }
    }
}

impl Controller for CautiousController {
    fn choose_action(&mut self, view: &TurnView<'_>) -> Action {
        let inventory = view.inventory();
        let zone_id = view.zone.map(|zone| zone.id);

        if view.health() == HealthState::Injured && inventory.has(Item::Bandage) {
            return Action::Heal;
        }

        match view.known_item() {
            None if self.searched[view.actor.index()] != zone_id => {
                self.searched[view.actor.index()] = zone_id;
                return Action::Reveal;
            }
            Some(Some(_)) if view.player.item_total <= self.backpack_size => return Action::Take,
            _ => {}
        }

        if inventory.count(Item::Junk) >= 2 {
            return Action::Craft;
        }
        Action::Advance
    }

    /// Prefers the gun, which costs nothing, over the others.
    fn choose_defense(&mut self, _actor: PlayerId, options: &[Item]) -> usize {
        options.iter().position(|&item| item == Item::Gun).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Inventory, Player, Position};
    use crate::map::{Zone, ZoneKind};

    fn view<'a>(player: &'a Player, zone: &'a Zone) -> TurnView<'a> {
        TurnView {
            actor: PlayerId::A,
            player,
            zone: Some(zone),
            moves: 1,
            gasoline_safe_turns: 0,
        }
    }

    #[test]
    fn test_scripted_replays_then_advances() {
        let zone = Zone::new(1, ZoneKind::Kitchen, None);
        let player = Player::new(Position::At(0), Inventory::new());
        let mut controller =
            ScriptedController::new([Action::Reveal, Action::Take]).with_defenses([2]);

        assert_eq!(controller.choose_action(&view(&player, &zone)), Action::Reveal);
        assert_eq!(controller.choose_action(&view(&player, &zone)), Action::Take);
        assert_eq!(controller.remaining(), 0);
        assert_eq!(controller.choose_action(&view(&player, &zone)), Action::Advance);

        let options = [Item::Gasoline, Item::Gun, Item::Knife];
        assert_eq!(controller.choose_defense(PlayerId::A, &options), 2);
        assert_eq!(controller.choose_defense(PlayerId::A, &options), 0);
    }

    #[test]
    fn test_random_is_seeded() {
        let zone = Zone::new(1, ZoneKind::Kitchen, None);
        let player = Player::new(Position::At(0), Inventory::new());
        let mut a = RandomController::new(9);
        let mut b = RandomController::new(9);

        for _ in 0..20 {
            let turn = view(&player, &zone);
            assert_eq!(a.choose_action(&turn), b.choose_action(&turn));
            let choice = a.choose_defense(PlayerId::A, &[Item::Gun, Item::Knife]);
            assert!(choice < 2);
            b.choose_defense(PlayerId::A, &[Item::Gun, Item::Knife]);
        }
    }

    #[test]
    fn test_cautious_searches_once_per_zone() {
        let empty = Zone::new(1, ZoneKind::Street, None);
        let player = Player::new(Position::At(0), Inventory::new());
        let mut controller = CautiousController::default();

        assert_eq!(controller.choose_action(&view(&player, &empty)), Action::Reveal);
        // The search was wasted; the flag stays unset but we move on.
        assert_eq!(controller.choose_action(&view(&player, &empty)), Action::Advance);
    }

    #[test]
    fn test_cautious_heals_and_takes() {
        let zone = Zone::new(3, ZoneKind::Shed, Some(Item::Gasoline));
        let mut player = Player::new(Position::At(2), Inventory::new().with(Item::Bandage, 1));
        player.health = HealthState::Injured;
        player.zone_searched = true;
        let mut controller = CautiousController::default();

        assert_eq!(controller.choose_action(&view(&player, &zone)), Action::Heal);
        player.health = HealthState::Alive;
        assert_eq!(controller.choose_action(&view(&player, &zone)), Action::Take);

        player.item_total = 5;
        assert_eq!(controller.choose_action(&view(&player, &zone)), Action::Advance);
    }

    #[test]
    fn test_cautious_prefers_gun() {
        let mut controller = CautiousController::default();
        assert_eq!(controller.choose_defense(PlayerId::B, &[Item::Gasoline, Item::Gun]), 1);
        assert_eq!(controller.choose_defense(PlayerId::B, &[Item::Gasoline, Item::Knife]), 0);
    }
}
