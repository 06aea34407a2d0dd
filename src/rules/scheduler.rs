//! Turn order.
//!
//! ## States
//!
//! `Start -> Turn(A | B) -> ... -> Finished`
//!
//! While both players are active they alternate. The very first actor is
//! drawn with a percent roll (player A on a roll above
//! `first_actor_threshold`). Once one player has left the map the other
//! acts every cycle, and when both have left the game is finished.
//!
//! All the scheduler needs to resume is `WorldState::last_actor`, which is
//! part of every snapshot.
//!
//! ## Policies
//!
//! - [`SchedulingPolicy::Alternate`]: strict alternation after the opening draw.
//! - [`SchedulingPolicy::ShuffledRounds`]: turns are grouped in rounds of two
//!   and the opening actor is drawn again at the start of every round.

use crate::core::{GameRng, PlayerId, RulesConfig, SchedulingPolicy, WorldState};

/// Scheduler state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchedulerState {
    #[default]
    Start,
    Turn(PlayerId),
    Finished,
}

/// Picks the next actor.
#[derive(Clone, Debug, Default)]
pub struct TurnScheduler {
    policy: SchedulingPolicy,
    state: SchedulerState,
    /// Whether the current turn was the first of a round.
    opened_round: bool,
}

impl TurnScheduler {
    #[must_use]
    pub fn new(policy: SchedulingPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[must_use]
    pub fn policy(&self) -> SchedulingPolicy {
        self.policy
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == SchedulerState::Finished
    }

    /// Decide who acts next, or `None` once both players have left.
    pub fn next_actor(
        &mut self,
        world: &WorldState,
        rng: &mut GameRng,
        config: &RulesConfig,
    ) -> Option<PlayerId> {
        let actor = match (world.is_active(PlayerId::A), world.is_active(PlayerId::B)) {
            (false, false) => {
                if self.state != SchedulerState::Finished {
                    log::info!("both players have left the camp");
                }
                self.state = SchedulerState::Finished;
                return None;
            }
            (true, false) => PlayerId::A,
            (false, true) => PlayerId::B,
            (true, true) => match world.last_actor {
                Some(last) => last.other(),
                None if rng.roll_percent() > config.first_actor_threshold => PlayerId::A,
                None => PlayerId::B,
            },
        };

        self.opened_round = world.last_actor.is_none();
        self.state = SchedulerState::Turn(actor);
        Some(actor)
    }

    /// Record that `actor` finished a turn.
    pub fn complete_turn(&mut self, world: &mut WorldState, actor: PlayerId) {
        world.last_actor = match self.policy {
            SchedulingPolicy::Alternate => Some(actor),
            SchedulingPolicy::ShuffledRounds if self.opened_round => Some(actor),
            SchedulingPolicy::ShuffledRounds => None,
        };
    }
}
