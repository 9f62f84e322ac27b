//! Event types for different topics.

use adventure_core::PlayerId;
use serde::{Deserialize, Serialize};

use crate::timers::{StackView, TurnTimerInfo};

/// Timer state updates for observers (clients, spectators).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerEvent {
    /// Current budgets of one player.
    TurnTimeUpdate {
        player: PlayerId,
        timer: TurnTimerInfo,
    },
}

/// Actions the runtime forced because a player ran out of time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// The adventure turn was ended on the player's behalf.
    TurnForfeited { player: PlayerId },

    /// The acting creature was made to defend.
    DefendForced { player: PlayerId, stack: StackView },
}
