//! Game session: drives the scheduler, the rules and the snapshot store.
//!
//! ## Cycle
//!
//! 1. The scheduler picks an actor (or finishes the game).
//! 2. The actor plays a whole turn through its controller.
//! 3. The world is written to the snapshot store.
//!
//! When the scheduler finishes, the snapshot is deleted and
//! [`GameEvent::GameFinished`] is emitted.

use im::Vector;

use crate::core::{
    ActionRecord, GameError, GameRng, GameRngState, PlayerId, PlayerPair, RulesConfig, WorldState,
};
use crate::map::Map;
use crate::persistence::SaveStore;
use crate::rules::{
    ActionResolver, Controller, EventLog, GameEvent, RulesContext, TurnEnding, TurnReport,
    TurnScheduler,
};

/// How a finished game came out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// Turns played in this session (not counting turns before a resume).
    pub turns: u32,
    pub results: PlayerPair<TurnEnding>,
}

impl GameSummary {
    #[must_use]
    pub fn escaped(&self, player: PlayerId) -> bool {
        self.results[player] == TurnEnding::Escaped
    }
}

/// A game in progress.
#[derive(Debug)]
pub struct Session {
    world: WorldState,
    rng: GameRng,
    config: RulesConfig,
    scheduler: TurnScheduler,
    store: Option<SaveStore>,
    events: EventLog,
    history: Vector<ActionRecord>,
    turn: u32,
}

impl Session {
    /// Start a new game on a closed map.
    ///
    /// Both players are placed on the first zone with their starting
    /// inventories. If a store is given, the initial world is saved.
    ///
    /// The map needs at least `min_authored_zones` zones before a final
    /// camp exit that holds no item.
    pub fn new(
        map: Map,
        config: RulesConfig,
        seed: u64,
        store: Option<SaveStore>,
    ) -> Result<Self, GameError> {
        map.check_playable(config.min_authored_zones)?;
        config.item_table.validate()?;

        let world = WorldState::new(map, &config);
        let session = Self::from_parts(world, config, seed, store);
        session.save()?;
        log::info!("new game on a {}-zone map (seed {seed})", session.world.map.len());
        Ok(session)
    }

    /// Resume the game saved in `store`.
    ///
    /// Fails with [`SaveError::NotFound`](crate::core::SaveError::NotFound)
    /// when there is nothing to resume.
    pub fn resume(store: SaveStore, config: RulesConfig, seed: u64) -> Result<Self, GameError> {
        let world = store.load()?;
        log::info!("resumed game from {}", store.path().display());
        Ok(Self::from_parts(world, config, seed, Some(store)))
    }

    fn from_parts(
        world: WorldState,
        config: RulesConfig,
        seed: u64,
        store: Option<SaveStore>,
    ) -> Self {
        Self {
            world,
            rng: GameRng::new(seed),
            scheduler: TurnScheduler::new(config.scheduling),
            config,
            store,
            events: EventLog::new(),
            history: Vector::new(),
            turn: 0,
        }
    }

    fn save(&self) -> Result<(), GameError> {
        if let Some(store) = &self.store {
            store.save(&self.world)?;
        }
        Ok(())
    }

    // =========================================================================
    // Play
    // =========================================================================

    /// Play one scheduler cycle.
    ///
    /// Returns the turn that was played, or `None` once the game is over.
    pub fn play_turn(
        &mut self,
        controller: &mut impl Controller,
    ) -> Result<Option<TurnReport>, GameError> {
        if self.scheduler.is_finished() {
            return Ok(None);
        }

        let Some(actor) = self.scheduler.next_actor(&self.world, &mut self.rng, &self.config) else {
            if let Some(store) = &self.store {
                store.delete()?;
            }
            self.events.push(GameEvent::GameFinished);
            log::info!("game finished after {} turns", self.turn);
            return Ok(None);
        };

        self.turn += 1;
        log::info!("turn {}: {actor}", self.turn);
        let mut ctx = RulesContext {
            world: &mut self.world,
            rng: &mut self.rng,
            config: &self.config,
            events: &mut self.events,
        };
        let report = ActionResolver::run_turn(&mut ctx, actor, self.turn, controller)?;
        self.scheduler.complete_turn(&mut self.world, actor);
        self.history.extend(report.actions.iter().cloned());

        if self.store.is_some() {
            self.save()?;
            self.events.push(GameEvent::GameSaved { turn: self.turn });
        }
        Ok(Some(report))
    }

    /// Play until both players have left the map.
    pub fn run(&mut self, controller: &mut impl Controller) -> Result<GameSummary, GameError> {
        while self.play_turn(controller)?.is_some() {}
        Ok(self.summary())
    }

    fn summary(&self) -> GameSummary {
        GameSummary {
            turns: self.turn,
            results: PlayerPair::from_fn(|player| {
                if self.world.players[player].is_dead() {
                    TurnEnding::Died
                } else {
                    TurnEnding::Escaped
                }
            }),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Every action played in this session.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Turns played so far in this session.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.scheduler.is_finished()
    }

    /// Where the session's random stream currently stands.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn store(&self) -> Option<&SaveStore> {
        self.store.as_ref()
    }
}
