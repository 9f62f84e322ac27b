//! Edge rules invoked by the search engine once per candidate edge.
//!
//! [`MovementAfterDestinationRule`] is the policy entry point. Its resolvers
//! live in `bypass` (one per [`BlockingReason`](super::BlockingReason)) and
//! `battle` (combat bypass), and [`PreviousNodeRule`] keeps backpointers of
//! redirected nodes in line with ordinary edges.
mod battle;
mod bypass;
mod movement_after_destination;
mod previous_node;

pub use movement_after_destination::MovementAfterDestinationRule;
pub use previous_node::PreviousNodeRule;

use crate::config::PathfinderConfig;

use super::info::{DestinationNodeInfo, PathNodeInfo, PathfinderHelper};
use super::storage::NodeStorage;

/// Tracing target shared by every rule.
pub(crate) const TRACE_TARGET: &str = "adventure::pathfinding";

/// A rule the search engine applies to each candidate edge.
///
/// Rules communicate only through `destination` and `storage`; the engine
/// reads back `destination.blocked` and the node's `locked` flag afterwards.
pub trait PathfinderRule {
    fn process(
        &self,
        source: &PathNodeInfo,
        destination: &mut DestinationNodeInfo,
        config: &PathfinderConfig,
        helper: &PathfinderHelper,
        storage: &mut dyn NodeStorage,
    );
}
