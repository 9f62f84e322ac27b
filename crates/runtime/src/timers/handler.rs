use std::collections::HashMap;

use adventure_core::PlayerId;
use tracing::{debug, trace};

use crate::config::TimerConfig;
use crate::events::{Event, EventBus, TimerEvent, TurnEvent};

use super::host::{PlayerStatus, TimerHost};
use super::info::TurnTimerInfo;

const TRACE_TARGET: &str = "runtime::timers";

/// Per-player countdown of adventure turns and battles.
///
/// All callbacks come from the single thread owning the game loop. Callbacks
/// that need game state the host does not have yet do nothing.
pub struct TurnTimerHandler<H: TimerHost> {
    host: H,
    config: TimerConfig,
    bus: EventBus,
    timers: HashMap<PlayerId, TurnTimerInfo>,
}

impl<H: TimerHost> TurnTimerHandler<H> {
    pub fn new(host: H, config: TimerConfig, bus: EventBus) -> Self {
        Self {
            host,
            config,
            bus,
            timers: HashMap::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn timer(&self, player: PlayerId) -> Option<&TurnTimerInfo> {
        self.timers.get(&player)
    }

    /// Hands the configured budget to a player joining the game. The turn
    /// counter starts empty and is filled on the first turn.
    pub fn on_gameplay_start(&mut self, player: PlayerId) {
        let budget = self.config.budget;
        if !budget.is_enabled() {
            return;
        }

        self.timers.insert(
            player,
            TurnTimerInfo {
                turn_timer: 0,
                ..budget
            },
        );
    }

    /// Unused turn time is banked into the reserve and the turn counter is
    /// refilled.
    pub fn on_player_get_turn(&mut self, player: PlayerId) {
        let budget = self.config.budget;
        if !budget.is_enabled() {
            return;
        }

        let timer = self.timers.entry(player).or_default();
        timer.base_timer += timer.turn_timer;
        timer.turn_timer = budget.turn_timer;
        let snapshot = *timer;

        self.broadcast(player, snapshot);
    }

    /// Counts down the turn of a human player outside of battle.
    ///
    /// Once the turn counter is spent the reserve is moved into it. With both
    /// empty the turn is ended, unless the player still has a query open.
    pub fn on_player_making_turn(&mut self, player: PlayerId, wait_time: i32) {
        let Some(state) = self.host.player(player) else {
            return;
        };
        if !state.human || !self.config.budget.is_enabled() || self.host.battle().is_some() {
            return;
        }

        let timer = self.timers.entry(player).or_default();
        if timer.turn_timer > 0 {
            timer.turn_timer -= wait_time;
            let remaining = timer.turn_timer;
            let snapshot = *timer;

            if state.status == PlayerStatus::InGame && self.is_broadcast_tick(remaining) {
                self.broadcast(player, snapshot);
            }
        } else if timer.base_timer > 0 {
            timer.turn_timer = timer.base_timer;
            timer.base_timer = 0;
            trace!(target: TRACE_TARGET, %player, "turn timer drawing on reserve");
            self.on_player_making_turn(player, 0);
        } else if !self.host.has_pending_query(player) {
            debug!(target: TRACE_TARGET, %player, "turn time over, ending turn");
            self.host.end_turn(player);
            self.bus.publish(Event::Turn(TurnEvent::TurnForfeited { player }));
        }
    }

    /// Both sides of a new battle get fresh battle and creature budgets.
    pub fn on_battle_start(&mut self) {
        let budget = self.config.budget;
        if !budget.is_battle_enabled() {
            return;
        }
        let Some(battle) = self.host.battle() else {
            return;
        };

        for player in [battle.attacker, battle.defender] {
            if !player.is_valid_player() {
                continue;
            }

            let timer = self.timers.entry(player).or_default();
            timer.battle_timer = budget.battle_timer;
            timer.creature_timer = budget.creature_timer;
            let snapshot = *timer;

            self.broadcast(player, snapshot);
        }
    }

    /// A new stack of `owner` starts acting.
    ///
    /// When the previous creature dipped into the battle reserve, the reserve
    /// is set to whatever that creature had left. The creature counter is
    /// always refilled.
    pub fn on_battle_next_stack(&mut self, owner: PlayerId) {
        let budget = self.config.budget;
        if !budget.is_battle_enabled() || self.host.battle().is_none() {
            return;
        }
        if !owner.is_valid_player() {
            return;
        }

        let timer = self.timers.entry(owner).or_default();
        if timer.battle_timer < budget.battle_timer {
            timer.battle_timer = timer.creature_timer;
        }
        timer.creature_timer = budget.creature_timer;
        let snapshot = *timer;

        self.broadcast(owner, snapshot);
    }

    /// Counts down the acting creature of a human player.
    ///
    /// A spent creature counter takes over the battle reserve. With both empty
    /// the creature is made to defend.
    pub fn on_battle_loop(&mut self, wait_time: i32) {
        let Some(battle) = self.host.battle() else {
            return;
        };
        let Some(stack) = battle.active_stack else {
            return;
        };
        if !stack.owner.is_valid_player() {
            return;
        }

        let player = battle.side_player(stack.side);
        let Some(state) = self.host.player(player) else {
            return;
        };
        if !state.human || !self.config.budget.is_battle_enabled() {
            return;
        }

        if self.tick_creature(player, state.status, wait_time) {
            return;
        }

        let timer = self.timers.entry(player).or_default();
        if timer.battle_timer > 0 {
            timer.creature_timer = timer.battle_timer;
            timer.battle_timer = 0;
            trace!(target: TRACE_TARGET, %player, "creature timer drawing on battle reserve");
            self.tick_creature(player, state.status, 0);
        } else {
            debug!(target: TRACE_TARGET, %player, stack = stack.id, "creature time over, defending");
            self.host.defend(player, stack);
            self.bus.publish(Event::Turn(TurnEvent::DefendForced { player, stack }));
        }
    }

    /// Returns false when the creature counter was already spent.
    fn tick_creature(&mut self, player: PlayerId, status: PlayerStatus, wait_time: i32) -> bool {
        let configured = self.config.budget.creature_timer;
        let threshold = self.config.propagate_threshold;

        let timer = self.timers.entry(player).or_default();
        if timer.creature_timer <= 0 {
            return false;
        }

        timer.creature_timer -= wait_time;
        let remaining = timer.creature_timer;
        let snapshot = *timer;

        // A creature that has just started acting is reported at the tight rate too.
        let frequency = if remaining > threshold && configured - remaining > threshold {
            self.config.propagate_frequency
        } else {
            self.config.propagate_frequency_critical
        };

        if status == PlayerStatus::InGame && remaining.checked_rem(frequency) == Some(0) {
            self.broadcast(player, snapshot);
        }
        true
    }

    fn is_broadcast_tick(&self, remaining: i32) -> bool {
        remaining.checked_rem(self.config.frequency_for(remaining)) == Some(0)
    }

    fn broadcast(&self, player: PlayerId, timer: TurnTimerInfo) {
        trace!(
            target: TRACE_TARGET,
            %player,
            turn = timer.turn_timer,
            base = timer.base_timer,
            creature = timer.creature_timer,
            battle = timer.battle_timer,
            "turn time update"
        );
        self.bus
            .publish(Event::Timer(TimerEvent::TurnTimeUpdate { player, timer }));
    }
}
