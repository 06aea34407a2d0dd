//! Rules integration tests.
//!
//! These tests play whole turns through `ActionResolver::run_turn` and check
//! the encounter scenarios end to end: knife fights, gasoline suppression,
//! wasted actions and escapes.

use camp_escape::core::{Inventory, Position};
use camp_escape::rules::RulesContext;
use camp_escape::{
    Action, ActionOutcome, ActionResolver, EncounterOutcome, EventLog, GameEvent, GameRng,
    HealthState, Item, Map, PartnerFate, PlayerId, RulesConfig, ScriptedController, TurnEnding,
    TurnReport, WasteReason, WorldState, ZoneKind,
};

const A: PlayerId = PlayerId::A;
const B: PlayerId = PlayerId::B;

struct Table {
    world: WorldState,
    rng: GameRng,
    config: RulesConfig,
    events: EventLog,
}

impl Table {
    fn new(config: RulesConfig) -> Self {
        let map = Map::from_pairs(
            [
                (ZoneKind::Kitchen, Some(Item::Bandage)),
                (ZoneKind::LivingRoom, Some(Item::Gun)),
                (ZoneKind::Shed, Some(Item::Junk)),
                (ZoneKind::Street, None),
                (ZoneKind::AlongLake, Some(Item::Gasoline)),
                (ZoneKind::Street, None),
                (ZoneKind::Kitchen, Some(Item::Knife)),
                (ZoneKind::ExitCamp, None),
            ],
        );
        Self {
            world: WorldState::new(map, &config),
            rng: GameRng::new(2024),
            config,
            events: EventLog::new(),
        }
    }

    fn act(&mut self, actor: PlayerId, action: Action) -> ActionOutcome {
        let mut moves = 1;
        let mut ctx = RulesContext {
            world: &mut self.world,
            rng: &mut self.rng,
            config: &self.config,
            events: &mut self.events,
        };
        ActionResolver::resolve(&mut ctx, actor, action, &mut moves).unwrap()
    }

    fn turn(&mut self, actor: PlayerId, actions: impl IntoIterator<Item = Action>) -> TurnReport {
        let mut controller = ScriptedController::new(actions);
        let mut ctx = RulesContext {
            world: &mut self.world,
            rng: &mut self.rng,
            config: &self.config,
            events: &mut self.events,
        };
        ActionResolver::run_turn(&mut ctx, actor, 1, &mut controller).unwrap()
    }
}

/// Every unsuppressed check is an appearance, and no near misses.
fn hostile() -> RulesConfig {
    RulesConfig {
        escape_appearance: 100,
        bereaved_appearance: 100,
        base_appearance: 100,
        near_miss_threshold: 0,
        ..RulesConfig::default()
    }
}

/// The adversary never shows up.
fn peaceful() -> RulesConfig {
    RulesConfig {
        escape_appearance: 0,
        bereaved_appearance: 0,
        base_appearance: 0,
        near_miss_threshold: 0,
        ..RulesConfig::default()
    }
}

// =============================================================================
// Encounter Scenarios
// =============================================================================

/// Test that a knife saves the first encounter at the cost of an injury and
/// the second encounter kills.
#[test]
fn test_knife_injures_then_kills() {
    let mut table = Table::new(hostile());

    let report = table.turn(A, [Action::Advance]);
    assert_eq!(report.encounters, vec![EncounterOutcome::Wounded]);
    assert_eq!(report.ending, None);
    let a = &table.world.players[A];
    assert_eq!(a.health, HealthState::Injured);
    assert_eq!(a.inventory[Item::Knife], 0);
    assert_eq!(a.item_total, 0);
    assert_eq!(a.position, Position::At(1));

    // Second encounter with a fresh knife but already injured: fatal.
    table.world.players[A].inventory.add(Item::Knife);
    let report = table.turn(A, [Action::Advance]);
    assert_eq!(report.encounters, vec![EncounterOutcome::Killed]);
    assert_eq!(report.ending, Some(TurnEnding::Died));
    let a = &table.world.players[A];
    assert_eq!(a.health, HealthState::Dead);
    assert_eq!(a.position, Position::Departed);
    assert!(table.events.any(|e| matches!(e, GameEvent::Defeat { player } if *player == A)));
}

/// Test that the injury from a knife does not cost moves.
#[test]
fn test_knife_leaves_budget_alone() {
    let mut table = Table::new(hostile());
    table.world.players[A].inventory.add(Item::Adrenaline);
    table.world.players[A].inventory.add(Item::Knife);

    // Adrenaline leaves two moves; its encounter wounds, the next one kills.
    let report = table.turn(A, [Action::UseAdrenaline, Action::Advance, Action::Advance]);
    assert_eq!(report.actions.len(), 2);
    assert_eq!(report.encounters, vec![EncounterOutcome::Wounded, EncounterOutcome::Killed]);
    assert_eq!(report.ending, Some(TurnEnding::Died));
}

/// Test that gasoline suppresses the next four checks for either player.
#[test]
fn test_gasoline_suppresses_four_checks() {
    let mut table = Table::new(hostile());
    table.world.players[A].inventory.add(Item::Gasoline);
    table.world.players[A].item_total += 1;

    let report = table.turn(A, [Action::Advance]);
    assert_eq!(report.encounters, vec![EncounterOutcome::Repelled(Item::Gasoline)]);
    assert_eq!(table.world.players[A].inventory[Item::Gasoline], 0);
    assert_eq!(table.world.gasoline_safe_turns, 4);
    assert_eq!(table.world.players[A].health, HealthState::Alive);

    let mut remaining = Vec::new();
    for actor in [B, A, B, A] {
        let report = table.turn(actor, [Action::Advance]);
        match report.encounters.as_slice() {
            [EncounterOutcome::Suppressed { remaining: left }] => remaining.push(*left),
            other => panic!("expected a suppression, got {other:?}"),
        }
    }
    assert_eq!(remaining, vec![3, 2, 1, 0]);
    assert_eq!(table.world.gasoline_safe_turns, 0);

    // B holds nothing defensive, so the next appearance kills.
    let report = table.turn(B, [Action::Advance]);
    assert_eq!(report.encounters, vec![EncounterOutcome::Killed]);
}

/// Test that the player picks among several defensive items.
#[test]
fn test_defense_choice() {
    let mut table = Table::new(hostile());
    table.world.players[A].inventory.add(Item::Gun);
    table.world.players[A].inventory.add(Item::Gasoline);

    // Options are [Gasoline, Gun, Knife]; pick the gun.
    let mut controller = ScriptedController::new([Action::Advance]).with_defenses([1]);
    let mut ctx = RulesContext {
        world: &mut table.world,
        rng: &mut table.rng,
        config: &table.config,
        events: &mut table.events,
    };
    let report = ActionResolver::run_turn(&mut ctx, A, 1, &mut controller).unwrap();
    assert_eq!(report.encounters, vec![EncounterOutcome::Repelled(Item::Gun)]);
    let inv = table.world.players[A].inventory;
    assert_eq!(inv[Item::Gun], 0);
    assert_eq!(inv[Item::Gasoline], 1);
    assert_eq!(inv[Item::Knife], 1);
}

/// Test that an out-of-range defense answer falls back to the priority item.
#[test]
fn test_defense_choice_fallback() {
    let mut table = Table::new(hostile());
    table.config.max_reprompts = 3;
    table.world.players[A].inventory.add(Item::Gun);

    let mut controller = ScriptedController::new([Action::Advance]).with_defenses([9, 9, 9]);
    let mut ctx = RulesContext {
        world: &mut table.world,
        rng: &mut table.rng,
        config: &table.config,
        events: &mut table.events,
    };
    let report = ActionResolver::run_turn(&mut ctx, A, 1, &mut controller).unwrap();
    assert_eq!(report.encounters, vec![EncounterOutcome::Repelled(Item::Gun)]);
}

// =============================================================================
// Wasted Actions
// =============================================================================

/// Test that a wasted action refunds its move and skips the encounter, while
/// a real action always triggers one.
#[test]
fn test_wasted_action_never_triggers_encounter() {
    let mut table = Table::new(hostile());

    let report = table.turn(
        A,
        [Action::Heal, Action::Heal, Action::UseAdrenaline, Action::Take, Action::Advance],
    );
    assert_eq!(report.actions.len(), 5);
    for record in &report.actions[..4] {
        assert!(record.outcome.is_wasted(), "{record:?}");
    }
    assert_eq!(report.actions[0].outcome, ActionOutcome::Wasted(WasteReason::NoBandage));
    assert_eq!(report.actions[3].outcome, ActionOutcome::Wasted(WasteReason::NotSearched));
    assert_eq!(report.actions[4].outcome, ActionOutcome::Resolved);

    // Exactly one encounter, for the advance.
    assert_eq!(report.encounters.len(), 1);
    let appearances = table
        .events
        .events()
        .iter()
        .filter(|e| matches!(e, GameEvent::AdversaryAppeared { .. }))
        .count();
    assert_eq!(appearances, 1);
}

/// Test that healing while alive is wasted even with a bandage.
#[test]
fn test_heal_while_alive_is_wasted() {
    let mut table = Table::new(hostile());
    table.world.players[A].inventory.add(Item::Bandage);

    let report = table.turn(A, [Action::Heal, Action::Advance]);
    assert_eq!(report.actions[0].outcome, ActionOutcome::Wasted(WasteReason::NotInjured));
    assert_eq!(report.encounters.len(), 1);
    assert_eq!(table.world.players[A].inventory[Item::Bandage], 1);
}

// =============================================================================
// Inventory
// =============================================================================

/// Test that takes keep succeeding up to a total of five, then are refused.
#[test]
fn test_backpack_capacity() {
    let mut table = Table::new(peaceful());
    let mut totals = Vec::new();

    for _ in 0..7 {
        table.act(A, Action::Reveal);
        table.act(A, Action::Take);
        totals.push(table.world.players[A].item_total);
        table.act(A, Action::Advance);
    }

    // Knife to start, then Bandage, Gun, Junk, (empty), Gasoline, (empty), Knife.
    assert_eq!(totals, vec![2, 3, 4, 4, 5, 5, 5]);
    let a = &table.world.players[A];
    assert_eq!(a.inventory[Item::Knife], 1);
    assert_eq!(a.position, Position::At(7));
    assert_eq!(table.world.map.get(6).and_then(|z| z.item), Some(Item::Knife));
    assert!(table.events.any(|e| matches!(
        e,
        GameEvent::ActionWasted { reason: WasteReason::BackpackFull, .. }
    )));
}

/// Test that adrenaline grants two moves on a fresh budget and three otherwise.
#[test]
fn test_adrenaline_budget() {
    let mut table = Table::new(peaceful());

    // 1 -> 3 -> 2 after the first dose, 2 -> 5 -> 4 after the second.
    let report = table.turn(
        B,
        [
            Action::UseAdrenaline,
            Action::UseAdrenaline,
            Action::Advance,
            Action::Advance,
            Action::Advance,
            Action::Advance,
        ],
    );
    assert_eq!(report.actions.len(), 6);
    assert_eq!(table.world.players[B].position, Position::At(4));
    assert_eq!(table.world.players[B].item_total, 0);
    assert!(table.events.any(|e| matches!(e, GameEvent::AdrenalineUsed { bonus: 3, .. })));
}

/// Test that crafting turns three junk into gasoline.
#[test]
fn test_craft_gasoline() {
    let config = RulesConfig {
        craft_success_threshold: 0,
        ..peaceful()
    };
    let mut table = Table::new(config);
    table.world.players[B].inventory = Inventory::new().with(Item::Junk, 3);
    table.world.players[B].item_total = 3;

    let report = table.turn(B, [Action::Craft]);
    assert_eq!(report.actions[0].outcome, ActionOutcome::Resolved);
    let b = &table.world.players[B];
    assert_eq!(b.inventory[Item::Gasoline], 1);
    assert_eq!(b.inventory[Item::Junk], 0);
    assert_eq!(b.item_total, 0);
}

// =============================================================================
// Escapes
// =============================================================================

/// Test that leaving the camp is a victory that reports the partner's fate.
#[test]
fn test_escape_reports_partner() {
    let mut table = Table::new(peaceful());
    table.world.players[A].position = Position::At(7);
    table.world.players[B].position = Position::At(7);

    let report = table.turn(A, [Action::Advance]);
    assert_eq!(report.ending, Some(TurnEnding::Escaped));
    assert!(table.events.any(|e| matches!(
        e,
        GameEvent::Victory { player, partner: PartnerFate::StillInside } if *player == A
    )));
    assert!(table.world.is_active(B));

    let report = table.turn(B, [Action::Advance]);
    assert_eq!(report.ending, Some(TurnEnding::Escaped));
    assert!(table.events.any(|e| matches!(
        e,
        GameEvent::Victory { player, partner: PartnerFate::Escaped } if *player == B
    )));
    assert!(table.world.all_departed());
}

/// Test that leaving the camp is more dangerous than walking through it.
#[test]
fn test_escape_appearance_threshold() {
    let config = RulesConfig {
        escape_appearance: 100,
        bereaved_appearance: 0,
        base_appearance: 0,
        near_miss_threshold: 0,
        ..RulesConfig::default()
    };
    let mut table = Table::new(config);
    table.world.players[A].position = Position::At(6);

    let report = table.turn(A, [Action::Advance]);
    assert_eq!(report.encounters, vec![EncounterOutcome::Quiet]);

    // Escaping with a knife: wounded, but still out.
    let report = table.turn(A, [Action::Advance]);
    assert_eq!(report.encounters, vec![EncounterOutcome::Wounded]);
    assert_eq!(report.ending, Some(TurnEnding::Escaped));
    assert_eq!(table.world.players[A].health, HealthState::Injured);
}
