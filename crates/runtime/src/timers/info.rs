use serde::{Deserialize, Serialize};

/// Remaining time budgets of one player, in milliseconds.
///
/// `base_timer` is the reserve built from unused turn time. `turn_timer`
/// counts down the current adventure turn; `battle_timer` and
/// `creature_timer` do the same for the battle reserve and the acting
/// creature. Counters may go negative when a tick overshoots zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnTimerInfo {
    pub base_timer: i32,
    pub turn_timer: i32,
    pub battle_timer: i32,
    pub creature_timer: i32,
}

impl TurnTimerInfo {
    pub const fn new(base_timer: i32, turn_timer: i32, battle_timer: i32, creature_timer: i32) -> Self {
        Self {
            base_timer,
            turn_timer,
            battle_timer,
            creature_timer,
        }
    }

    /// Adventure turns are timed at all.
    pub const fn is_enabled(&self) -> bool {
        self.turn_timer > 0
    }

    /// Battles are timed at all.
    pub const fn is_battle_enabled(&self) -> bool {
        self.creature_timer > 0 || self.battle_timer > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_budget_disables_everything() {
        let info = TurnTimerInfo::default();
        assert!(!info.is_enabled());
        assert!(!info.is_battle_enabled());
    }

    #[test]
    fn battle_timing_is_independent_of_turn_timing() {
        let battle_only = TurnTimerInfo::new(0, 0, 0, 30_000);
        assert!(!battle_only.is_enabled());
        assert!(battle_only.is_battle_enabled());

        let turn_only = TurnTimerInfo::new(0, 60_000, 0, 0);
        assert!(turn_only.is_enabled());
        assert!(!turn_only.is_battle_enabled());
    }
}
