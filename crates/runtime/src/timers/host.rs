//! Game-side collaborators the timer handler consults and drives.

use adventure_core::PlayerId;
use serde::{Deserialize, Serialize};

/// Whether a player still takes part in the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum PlayerStatus {
    #[default]
    InGame,
    Lost,
    Won,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerView {
    pub human: bool,
    pub status: PlayerStatus,
}

impl PlayerView {
    pub const fn human() -> Self {
        Self {
            human: true,
            status: PlayerStatus::InGame,
        }
    }

    pub const fn ai() -> Self {
        Self {
            human: false,
            status: PlayerStatus::InGame,
        }
    }

    pub const fn with_status(mut self, status: PlayerStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BattleSide {
    Attacker,
    Defender,
}

/// The creature stack whose turn it is in the current battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackView {
    pub id: u32,
    pub owner: PlayerId,
    pub side: BattleSide,
}

/// The battle in progress. Sides fought by neutrals carry [`PlayerId::NEUTRAL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleView {
    pub attacker: PlayerId,
    pub defender: PlayerId,
    pub active_stack: Option<StackView>,
}

impl BattleView {
    pub const fn new(attacker: PlayerId, defender: PlayerId) -> Self {
        Self {
            attacker,
            defender,
            active_stack: None,
        }
    }

    pub const fn with_active_stack(mut self, stack: StackView) -> Self {
        self.active_stack = Some(stack);
        self
    }

    pub const fn side_player(&self, side: BattleSide) -> PlayerId {
        match side {
            BattleSide::Attacker => self.attacker,
            BattleSide::Defender => self.defender,
        }
    }
}

/// Read access to the game plus the two actions timers may force.
///
/// `player` returns `None` while no game state is loaded, and `battle` returns
/// `None` outside of battles. The handler treats both as "nothing to do".
pub trait TimerHost {
    fn player(&self, player: PlayerId) -> Option<PlayerView>;

    fn battle(&self) -> Option<BattleView>;

    /// Whether the player still has to answer a dialog or query.
    fn has_pending_query(&self, player: PlayerId) -> bool;

    /// Ends the player's adventure turn.
    fn end_turn(&mut self, player: PlayerId);

    /// Makes `stack` defend in place.
    fn defend(&mut self, player: PlayerId, stack: StackView);
}
