//! Edge-expansion policy for the adventure-map search.
//!
//! The search engine owns traversal order and distance relaxation. For each
//! candidate edge it asks [`MovementAfterDestinationRule`] whether the
//! destination may be expanded further, and reads the outcome back from
//! [`DestinationNodeInfo::blocked`] and the node's `locked` flag.
//!
//! Modules are organized leaves first:
//! - [`node`] path nodes, chain actors and special actions
//! - [`storage`] the node storage contract and the in-memory [`NodeArena`]
//! - [`blocking`] classification of destinations
//! - [`rules`] bypass resolvers, combat bypass and the edge rule itself
pub mod blocking;
pub mod node;
pub mod rules;
pub mod storage;

mod info;

pub use blocking::{BlockingReason, classify};
pub use info::{DestinationNodeInfo, PathNodeInfo, PathfinderHelper};
pub use node::{ActorId, ChainActor, NodeAction, NodeRef, PathNode, QuestInfo, SpecialAction};
pub use rules::{MovementAfterDestinationRule, PathfinderRule, PreviousNodeRule};
pub use storage::{ActorSpec, NodeArena, NodeMutation, NodeStorage, StorageError};
