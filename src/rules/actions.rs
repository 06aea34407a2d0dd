//! Action resolution and the per-turn move loop.
//!
//! A turn starts with a budget of one move. Each chosen action is resolved,
//! then the budget drops by one. Wasted actions refund their move first, so
//! they cost nothing; only resolved actions are followed by an encounter
//! check. The turn ends when the budget runs out or the actor leaves the map.

use super::controller::{Controller, TurnView};
use super::encounter::{EncounterEngine, EncounterOutcome};
use super::event::{GameEvent, PartnerFate};
use super::RulesContext;
use crate::core::{
    Action, ActionOutcome, ActionRecord, GameError, HealthState, PlayerId, Position, WasteReason,
};
use crate::map::Item;

/// How a turn ended for the actor, if it ended their game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEnding {
    Escaped,
    Died,
}

/// Everything that happened in one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub actor: PlayerId,
    pub turn: u32,
    pub actions: Vec<ActionRecord>,
    pub encounters: Vec<EncounterOutcome>,
    pub ending: Option<TurnEnding>,
}

/// Applies actions to the world.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionResolver;

impl ActionResolver {
    /// Resolve one action for `actor`.
    ///
    /// `moves` is the budget before this action is paid for; wasted actions
    /// add one to it and adrenaline adds its bonus. The caller deducts the
    /// action's own cost afterwards.
    pub fn resolve(
        ctx: &mut RulesContext<'_>,
        actor: PlayerId,
        action: Action,
        moves: &mut u32,
    ) -> Result<ActionOutcome, GameError> {
        let Some(index) = ctx.world.players[actor].position.index() else {
            return Err(GameError::Invariant(format!("{actor} acted after leaving the map")));
        };

        let outcome = match action {
            Action::Advance => Self::advance(ctx, actor, index),
            Action::Reveal => Self::reveal(ctx, actor, index),
            Action::Take => Self::take(ctx, actor, index),
            Action::Heal => Self::heal(ctx, actor),
            Action::UseAdrenaline => Self::use_adrenaline(ctx, actor, moves),
            Action::Craft => Self::craft(ctx, actor)?,
        };

        match outcome {
            ActionOutcome::Wasted(reason) => {
                *moves += 1;
                log::debug!("{actor}: {action:?} wasted ({reason})");
                ctx.events.push(GameEvent::ActionWasted { player: actor, action, reason });
            }
            ActionOutcome::Resolved => log::debug!("{actor}: {action:?} resolved"),
        }
        Ok(outcome)
    }

    /// Play a whole turn for `actor`, asking `controller` for each action.
    pub fn run_turn(
        ctx: &mut RulesContext<'_>,
        actor: PlayerId,
        turn: u32,
        controller: &mut impl Controller,
    ) -> Result<TurnReport, GameError> {
        let mut report = TurnReport {
            actor,
            turn,
            actions: Vec::new(),
            encounters: Vec::new(),
            ending: None,
        };
        ctx.events.push(GameEvent::TurnStarted { player: actor, turn });

        let mut moves: u32 = 1;
        while moves > 0 {
            let action = {
                let view = TurnView {
                    actor,
                    player: &ctx.world.players[actor],
                    zone: ctx.world.current_zone(actor),
                    moves,
                    gasoline_safe_turns: ctx.world.gasoline_safe_turns,
                };
                controller.choose_action(&view)
            };

            let outcome = Self::resolve(ctx, actor, action, &mut moves)?;
            moves -= 1;
            report.actions.push(ActionRecord::new(actor, action, outcome, turn));

            if !outcome.is_wasted() {
                report
                    .encounters
                    .push(EncounterEngine::check(ctx, actor, &mut moves, controller));
            }

            let player = &ctx.world.players[actor];
            if player.is_dead() {
                moves = 0;
                report.ending = Some(TurnEnding::Died);
                log::info!("{actor}: defeat");
                ctx.events.push(GameEvent::Defeat { player: actor });
            } else if !player.is_active() {
                moves = 0;
                report.ending = Some(TurnEnding::Escaped);
                let partner = Self::partner_fate(ctx, actor);
                log::info!("{actor}: victory ({partner:?})");
                ctx.events.push(GameEvent::Victory { player: actor, partner });
            }
        }

        Ok(report)
    }

    fn partner_fate(ctx: &RulesContext<'_>, actor: PlayerId) -> PartnerFate {
        let partner = &ctx.world.players[actor.other()];
        if partner.is_dead() {
            PartnerFate::Dead
        } else if partner.is_active() {
            PartnerFate::StillInside
        } else {
            PartnerFate::Escaped
        }
    }

    fn advance(ctx: &mut RulesContext<'_>, actor: PlayerId, index: usize) -> ActionOutcome {
        let map = &ctx.world.map;
        let target = map
            .next_index(index)
            .and_then(|next| map.get(next).map(|zone| (next, zone.id, zone.kind)));

        let player = &mut ctx.world.players[actor];
        match target {
            Some((next, zone, kind)) => {
                player.position = Position::At(next);
                player.zone_searched = false;
                ctx.events.push(GameEvent::Advanced { player: actor, zone, kind });
            }
            None => {
                player.position = Position::Departed;
                ctx.events.push(GameEvent::LeftCamp { player: actor });
            }
        }
        ActionOutcome::Resolved
    }

    fn reveal(ctx: &mut RulesContext<'_>, actor: PlayerId, index: usize) -> ActionOutcome {
        let item = ctx.world.map.get(index).and_then(|zone| zone.item);
        let player = &mut ctx.world.players[actor];
        match item {
            Some(item) if !player.zone_searched => {
                player.zone_searched = true;
                ctx.events.push(GameEvent::ItemRevealed { player: actor, item });
                ActionOutcome::Resolved
            }
            Some(_) => ActionOutcome::Wasted(WasteReason::AlreadySearched),
            None => ActionOutcome::Wasted(WasteReason::NothingHere),
        }
    }

    fn take(ctx: &mut RulesContext<'_>, actor: PlayerId, index: usize) -> ActionOutcome {
        let backpack_size = ctx.config.backpack_size;
        let has_item = ctx.world.map.get(index).is_some_and(|zone| zone.item.is_some());
        let player = &ctx.world.players[actor];

        if !player.zone_searched {
            return ActionOutcome::Wasted(WasteReason::NotSearched);
        }
        if !has_item {
            return ActionOutcome::Wasted(WasteReason::NothingHere);
        }
        if player.item_total > backpack_size {
            return ActionOutcome::Wasted(WasteReason::BackpackFull);
        }

        let Some(item) = ctx.world.map.take_item(index) else {
            return ActionOutcome::Wasted(WasteReason::NothingHere);
        };
        let player = &mut ctx.world.players[actor];
        player.inventory.add(item);
        player.item_total += 1;
        ctx.events.push(GameEvent::ItemTaken { player: actor, item });
        ActionOutcome::Resolved
    }

    fn heal(ctx: &mut RulesContext<'_>, actor: PlayerId) -> ActionOutcome {
        let player = &mut ctx.world.players[actor];
        if !player.inventory.has(Item::Bandage) {
            return ActionOutcome::Wasted(WasteReason::NoBandage);
        }
        if player.health == HealthState::Alive {
            return ActionOutcome::Wasted(WasteReason::NotInjured);
        }

        player.consume(Item::Bandage);
        player.health = HealthState::Alive;
        ctx.events.push(GameEvent::Healed { player: actor });
        ActionOutcome::Resolved
    }

    fn use_adrenaline(
        ctx: &mut RulesContext<'_>,
        actor: PlayerId,
        moves: &mut u32,
    ) -> ActionOutcome {
        if !ctx.world.players[actor].consume(Item::Adrenaline) {
            return ActionOutcome::Wasted(WasteReason::NoAdrenaline);
        }

        let bonus = if *moves == 1 { 2 } else { 3 };
        *moves += bonus;
        ctx.events.push(GameEvent::AdrenalineUsed { player: actor, bonus });
        ActionOutcome::Resolved
    }

    /// Items a successful craft can yield for a given junk count.
    fn craft_candidates(junk: u16) -> &'static [Item] {
        match junk {
            0 => &[],
            1 => &[Item::Knife, Item::Gun, Item::Gasoline],
            2 => &[Item::Gun, Item::Gasoline],
            _ => &[Item::Gasoline],
        }
    }

    fn craft(ctx: &mut RulesContext<'_>, actor: PlayerId) -> Result<ActionOutcome, GameError> {
        let junk = ctx.world.players[actor].inventory[Item::Junk];
        if junk == 0 {
            return Ok(ActionOutcome::Wasted(WasteReason::NoJunk));
        }

        if ctx.rng.roll_percent() < ctx.config.craft_success_threshold {
            ctx.world.players[actor].consume(Item::Junk);
            ctx.events.push(GameEvent::CraftFailed { player: actor });
            return Ok(ActionOutcome::Resolved);
        }

        let crafted = *ctx
            .rng
            .pick(Self::craft_candidates(junk))
            .ok_or_else(|| GameError::Invariant(format!("no craft result for {junk} junk")))?;

        // The crafted item is not counted in item_total.
        let player = &mut ctx.world.players[actor];
        player.inventory.add(crafted);
        player.inventory[Item::Junk] = 0;
        player.item_total -= i32::from(junk);
        ctx.events.push(GameEvent::Crafted { player: actor, item: crafted, junk_used: junk });
        Ok(ActionOutcome::Resolved)
    }
}
