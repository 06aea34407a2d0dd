//! Adversary encounters.
//!
//! After every resolved action the acting player risks an encounter. A
//! positive gasoline timer suppresses the check outright (and ticks down,
//! whichever player triggered it). Otherwise a percent roll is compared
//! against a threshold picked by context:
//!
//! | Context | Appears on roll ≤ |
//! |---|---|
//! | actor just left the camp, nobody dead | `escape_appearance` (75) |
//! | either player dead | `bereaved_appearance` (50) |
//! | otherwise | `base_appearance` (30) |
//!
//! On an appearance the actor defends with gasoline, gun or knife, in that
//! priority; the controller picks only when two or more are held.

use smallvec::SmallVec;

use super::controller::Controller;
use super::event::GameEvent;
use super::RulesContext;
use crate::core::{HealthState, PlayerId, RulesConfig, WorldState};
use crate::map::Item;

/// What an encounter check came to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterOutcome {
    /// Gasoline kept the adversary away; `remaining` suppressions left.
    Suppressed { remaining: u32 },
    /// Nothing happened.
    Quiet,
    /// A scare with no effect.
    NearMiss,
    /// Fended off with gasoline or a gun.
    Repelled(Item),
    /// Fought off with a knife at the cost of an injury.
    Wounded,
    /// The actor died.
    Killed,
}

/// Appearance model and defense resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncounterEngine;

impl EncounterEngine {
    /// Appearance threshold for the current context.
    #[must_use]
    pub fn appearance_threshold(world: &WorldState, actor: PlayerId, config: &RulesConfig) -> u32 {
        let escaped = !world.is_active(actor) && !world.players[actor].is_dead();
        if escaped && !world.any_dead() {
            config.escape_appearance
        } else if world.any_dead() {
            config.bereaved_appearance
        } else {
            config.base_appearance
        }
    }

    /// Run one encounter check for `actor`.
    ///
    /// `moves` is forced to 0 if the actor dies.
    pub fn check(
        ctx: &mut RulesContext<'_>,
        actor: PlayerId,
        moves: &mut u32,
        controller: &mut impl Controller,
    ) -> EncounterOutcome {
        let roll = ctx.rng.roll_percent();

        let mut suppressed = None;
        let appeared = if ctx.world.gasoline_safe_turns > 0 {
            ctx.world.gasoline_safe_turns -= 1;
            let remaining = ctx.world.gasoline_safe_turns;
            ctx.events.push(GameEvent::EncounterSuppressed { player: actor, remaining });
            suppressed = Some(remaining);
            false
        } else {
            roll <= Self::appearance_threshold(ctx.world, actor, ctx.config)
        };

        if appeared {
            log::info!("{actor}: adversary appeared (roll {roll})");
            ctx.events.push(GameEvent::AdversaryAppeared { player: actor });
            let defense = Self::choose_defense(ctx, actor, controller);
            return Self::defend(ctx, actor, defense, moves);
        }

        // A timer that just ran out still lets the scare through.
        if roll <= ctx.config.near_miss_threshold && ctx.world.gasoline_safe_turns == 0 {
            ctx.events.push(GameEvent::NearMiss { player: actor });
            return EncounterOutcome::NearMiss;
        }

        match suppressed {
            Some(remaining) => EncounterOutcome::Suppressed { remaining },
            None => EncounterOutcome::Quiet,
        }
    }

    /// Defensive items held, in priority order.
    #[must_use]
    pub fn defensive_options(world: &WorldState, actor: PlayerId) -> SmallVec<[Item; 3]> {
        let inventory = &world.players[actor].inventory;
        Item::DEFENSIVE
            .iter()
            .copied()
            .filter(|&item| inventory.has(item))
            .collect()
    }

    fn choose_defense(
        ctx: &mut RulesContext<'_>,
        actor: PlayerId,
        controller: &mut impl Controller,
    ) -> Option<Item> {
        let options = Self::defensive_options(ctx.world, actor);
        if options.len() < 2 {
            return options.first().copied();
        }

        for attempt in 1..=ctx.config.max_reprompts.max(1) {
            let choice = controller.choose_defense(actor, &options);
            if let Some(&item) = options.get(choice) {
                return Some(item);
            }
            log::warn!("{actor}: defense choice {choice} out of range (attempt {attempt})");
        }

        log::warn!("{actor}: no valid defense choice, using {}", options[0]);
        Some(options[0])
    }

    fn defend(
        ctx: &mut RulesContext<'_>,
        actor: PlayerId,
        defense: Option<Item>,
        moves: &mut u32,
    ) -> EncounterOutcome {
        let safe_turns = ctx.config.gasoline_safe_turns;
        let player = &mut ctx.world.players[actor];

        match defense {
            Some(Item::Gasoline) => {
                player.consume(Item::Gasoline);
                ctx.world.gasoline_safe_turns = safe_turns;
                ctx.events.push(GameEvent::Repelled { player: actor, item: Item::Gasoline });
                EncounterOutcome::Repelled(Item::Gasoline)
            }
            Some(Item::Gun) => {
                player.consume(Item::Gun);
                ctx.events.push(GameEvent::Repelled { player: actor, item: Item::Gun });
                EncounterOutcome::Repelled(Item::Gun)
            }
            Some(Item::Knife) if player.health > HealthState::Injured => {
                player.consume(Item::Knife);
                player.health = HealthState::Injured;
                ctx.events.push(GameEvent::Wounded { player: actor });
                EncounterOutcome::Wounded
            }
            _ => {
                player.kill();
                *moves = 0;
                log::info!("{actor}: killed by the adversary");
                ctx.events.push(GameEvent::Killed { player: actor });
                EncounterOutcome::Killed
            }
        }
    }
}
