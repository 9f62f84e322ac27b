//! Node storage contract consumed by the edge rules.
//!
//! Storage owns every [`PathNode`] and [`ChainActor`]; rules address them by
//! handle and express every change as a [`NodeMutation`] so the intent of each
//! write stays inspectable.
mod arena;

pub use arena::{ActorSpec, NodeArena};

use crate::error::{ErrorSeverity, GameError};
use crate::state::{HeroId, Layer, Position};

use super::info::{DestinationNodeInfo, PathNodeInfo};
use super::node::{ActorId, ChainActor, NodeRef, PathNode, SpecialAction};

/// A single, data-only change to a stored node.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeMutation {
    /// Mark the node terminal. Locking twice is a no-op; there is no unlock.
    Lock,
    /// Replace the node's special action.
    AttachAction(SpecialAction),
    /// Add to the accumulated army loss.
    AddArmyLoss(u64),
    /// Raise the recorded danger to at least this value.
    RaiseDanger(u64),
}

/// Raised when a node handle does not resolve.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("unknown node {0}")]
    UnknownNode(NodeRef),
}

impl GameError for StorageError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownNode(_) => "STORAGE_UNKNOWN_NODE",
        }
    }
}

/// Node lifecycle, allocation and search bookkeeping.
///
/// The search engine and the rules share one storage; only the expansion step
/// currently running writes to it.
pub trait NodeStorage {
    fn node(&self, node: NodeRef) -> Option<&PathNode>;

    fn actor(&self, actor: ActorId) -> Option<&ChainActor>;

    /// Actor owning `node`.
    fn node_actor(&self, node: NodeRef) -> Option<&ChainActor> {
        self.node(node).and_then(|n| self.actor(n.actor))
    }

    /// Hero moving through `node`.
    fn hero(&self, node: NodeRef) -> Option<HeroId> {
        self.node_actor(node).map(|actor| actor.hero)
    }

    /// Returns the node for (coord, layer, actor), allocating it on first use.
    /// `None` when allocation is exhausted or the actor is unknown.
    fn get_or_create_node(&mut self, coord: Position, layer: Layer, actor: ActorId)
    -> Option<NodeRef>;

    /// Whether the move re-treads ground some other chain already covers better.
    fn is_movement_inefficient(&self, source: &PathNodeInfo, destination: &DestinationNodeInfo)
    -> bool;

    /// Whether continuing past the destination exceeds the turn budget.
    fn is_distance_limit_reached(
        &self,
        source: &PathNodeInfo,
        destination: &DestinationNodeInfo,
    ) -> bool;

    /// Writes the step described by `destination` into its node.
    fn commit(
        &mut self,
        destination: &DestinationNodeInfo,
        source: &PathNodeInfo,
    ) -> Result<(), StorageError>;

    fn apply(&mut self, node: NodeRef, mutation: NodeMutation) -> Result<(), StorageError>;

    /// Points `child` back at `parent` and records the cost of reaching it.
    fn record_predecessor(
        &mut self,
        child: NodeRef,
        parent: NodeRef,
        edge_cost: f32,
    ) -> Result<(), StorageError>;
}
