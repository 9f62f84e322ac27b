use tracing::{trace, warn};

use crate::config::PathfinderConfig;
use crate::env::{CombatOracle, OracleError, PathfinderEnv, WorldOracle};
use crate::pathfinding::blocking::{BlockingReason, classify};
use crate::pathfinding::info::{DestinationNodeInfo, PathNodeInfo, PathfinderHelper};
use crate::pathfinding::storage::{NodeMutation, NodeStorage};

use super::{PathfinderRule, TRACE_TARGET};

/// Decides whether the search may continue past a destination tile.
///
/// Each invocation ends in exactly one of three ways:
/// 1. the move is inefficient: the destination is locked and blocked;
/// 2. nothing blocks the destination: it is left untouched;
/// 3. a resolver decided: `blocked = !allow || distance limit reached`, and the
///    node is locked when bypass was denied.
///
/// A locked node is never unlocked, so a denied destination stays pruned for
/// every later expansion that reaches it.
#[derive(Clone, Copy)]
pub struct MovementAfterDestinationRule<'a> {
    pub(super) world: &'a dyn WorldOracle,
    pub(super) combat: &'a dyn CombatOracle,
}

impl<'a> MovementAfterDestinationRule<'a> {
    /// Builds the rule from an oracle bundle.
    ///
    /// # Errors
    ///
    /// Returns an [`OracleError`] when the world or combat oracle is missing.
    pub fn new(env: PathfinderEnv<'a>) -> Result<Self, OracleError> {
        Ok(Self {
            world: env.world()?,
            combat: env.combat()?,
        })
    }

    pub fn from_oracles(world: &'a dyn WorldOracle, combat: &'a dyn CombatOracle) -> Self {
        Self { world, combat }
    }

    fn resolve(
        &self,
        blocker: BlockingReason,
        source: &PathNodeInfo,
        destination: &mut DestinationNodeInfo,
        config: &PathfinderConfig,
        helper: &PathfinderHelper,
        storage: &mut dyn NodeStorage,
    ) -> bool {
        match blocker {
            BlockingReason::None => true,

            BlockingReason::DestinationGuarded => {
                let guards = self.world.guarding_creatures(destination.coord);
                self.bypass_destination_guards(guards, source, destination, config, helper, storage)
            }

            BlockingReason::DestinationBlockVisitable => {
                let allow = destination.node_object.is_some()
                    && self.bypass_removable_object(destination, helper, storage);
                if !allow {
                    return false;
                }

                // Guards around the object still have to be dealt with.
                let guards = self.world.guarding_creatures(destination.coord);
                guards.is_empty()
                    || self.bypass_destination_guards(
                        guards,
                        source,
                        destination,
                        config,
                        helper,
                        storage,
                    )
            }

            BlockingReason::DestinationVisit => true,

            BlockingReason::DestinationBlocked => {
                self.bypass_blocker(source, destination, config, helper, storage)
            }
        }
    }
}

impl PathfinderRule for MovementAfterDestinationRule<'_> {
    fn process(
        &self,
        source: &PathNodeInfo,
        destination: &mut DestinationNodeInfo,
        config: &PathfinderConfig,
        helper: &PathfinderHelper,
        storage: &mut dyn NodeStorage,
    ) {
        if storage.is_movement_inefficient(source, destination) {
            trace!(
                target: TRACE_TARGET,
                from = %source.coord,
                to = %destination.coord,
                "inefficient movement, pruning destination"
            );
            lock(storage, destination);
            destination.blocked = true;
            return;
        }

        let blocker = classify(source, destination, config, helper);
        if !blocker.is_blocking() {
            return;
        }

        let allow_bypass = self.resolve(blocker, source, destination, config, helper, storage);

        trace!(
            target: TRACE_TARGET,
            reason = %blocker,
            allow_bypass,
            from = %source.coord,
            to = %destination.coord,
            node = %destination.node,
            "resolved blocked destination"
        );

        destination.blocked = !allow_bypass || storage.is_distance_limit_reached(source, destination);
        if !allow_bypass {
            lock(storage, destination);
        }
    }
}

fn lock(storage: &mut dyn NodeStorage, destination: &DestinationNodeInfo) {
    if let Err(error) = storage.apply(destination.node, NodeMutation::Lock) {
        warn!(
            target: TRACE_TARGET,
            error = %error,
            to = %destination.coord,
            "failed to lock destination node"
        );
    }
}
