use tracing::warn;

use crate::config::PathfinderConfig;
use crate::pathfinding::info::{DestinationNodeInfo, PathNodeInfo, PathfinderHelper};
use crate::pathfinding::storage::NodeStorage;

use super::{PathfinderRule, TRACE_TARGET};

/// Records `source` as the predecessor of `destination.node`.
///
/// The edge cost is whatever the step adds on top of the source node, so the
/// stored cost of the destination ends up equal to the step's total cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviousNodeRule;

impl PathfinderRule for PreviousNodeRule {
    fn process(
        &self,
        source: &PathNodeInfo,
        destination: &mut DestinationNodeInfo,
        _config: &PathfinderConfig,
        _helper: &PathfinderHelper,
        storage: &mut dyn NodeStorage,
    ) {
        let source_cost = storage.node(source.node).map(|n| n.cost).unwrap_or(0.0);
        let edge_cost = (destination.cost - source_cost).max(0.0);

        if let Err(error) = storage.record_predecessor(destination.node, source.node, edge_cost) {
            warn!(
                target: TRACE_TARGET,
                error = %error,
                from = %source.coord,
                to = %destination.coord,
                "failed to record predecessor"
            );
        }
    }
}
