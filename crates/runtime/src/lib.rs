//! Runtime services around the adventure-map pathfinding policy.
//!
//! This crate hosts the pieces that live next to the search rather than inside
//! it: per-player turn and battle timers, the event bus that broadcasts their
//! state, and loading of the combined configuration from RON.
//!
//! Modules are organized by responsibility:
//! - [`timers`] tracks turn/battle budgets and forces actions when they run out
//! - [`events`] provides the topic-based event bus observers subscribe to
//! - [`config`] loads [`RuntimeConfig`] and validates timer budgets
pub mod config;
pub mod error;
pub mod events;
pub mod timers;

pub use config::{RuntimeConfig, TimerConfig};
pub use error::{ConfigError, Result};
pub use events::{Event, EventBus, TimerEvent, Topic, TurnEvent};
pub use timers::{
    BattleSide, BattleView, PlayerStatus, PlayerView, StackView, TimerHost, TurnTimerHandler,
    TurnTimerInfo,
};
