//! Turn and battle timers.
//!
//! [`TurnTimerHandler`] keeps one [`TurnTimerInfo`] per player and is driven by
//! game-loop callbacks. When a budget runs out it forces the end of the turn or
//! a defend action through the [`TimerHost`].

mod handler;
mod host;
mod info;

pub use handler::TurnTimerHandler;
pub use host::{BattleSide, BattleView, PlayerStatus, PlayerView, StackView, TimerHost};
pub use info::TurnTimerInfo;
