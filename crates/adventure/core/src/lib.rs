//! Deterministic pathfinding policy for adventure-map movement.
//!
//! `adventure-core` decides, for every edge a search engine wants to expand,
//! whether the move is legal and how an obstacle on the destination tile can be
//! bypassed: by fighting, by a pending quest check, or by walking past guards
//! that were already beaten. The search algorithm itself stays outside this
//! crate and talks to the rules through [`pathfinding::NodeStorage`] and the
//! oracles bundled in [`env::Env`].
pub mod config;
pub mod env;
pub mod error;
pub mod pathfinding;
pub mod state;

pub use config::PathfinderConfig;
pub use env::{CombatOracle, Env, OracleError, PathfinderEnv, WorldOracle};
pub use error::{ErrorSeverity, GameError};
pub use pathfinding::{
    ActorId, ActorSpec, BlockingReason, ChainActor, DestinationNodeInfo, MovementAfterDestinationRule,
    NodeAction, NodeArena, NodeMutation, NodeRef, NodeStorage, PathNode, PathNodeInfo,
    PathfinderHelper, PathfinderRule, PreviousNodeRule, QuestInfo, SpecialAction, StorageError,
};
pub use state::{
    HeroId, Layer, MapObject, MissionKind, ObjectId, ObjectKind, PlayerId, PlayerRelations,
    Position, Quest,
};
