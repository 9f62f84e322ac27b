//! Resolvers deciding whether a classified obstacle can be bypassed.

use tracing::{trace, warn};

use crate::config::PathfinderConfig;
use crate::pathfinding::info::{DestinationNodeInfo, PathNodeInfo, PathfinderHelper};
use crate::pathfinding::node::{QuestInfo, SpecialAction};
use crate::pathfinding::storage::{NodeMutation, NodeStorage};
use crate::state::{MissionKind, ObjectId, ObjectKind};

use super::{MovementAfterDestinationRule, TRACE_TARGET};

impl MovementAfterDestinationRule<'_> {
    /// Hard blockers are only passable by fighting an enemy hero standing there.
    pub(super) fn bypass_blocker(
        &self,
        source: &PathNodeInfo,
        destination: &mut DestinationNodeInfo,
        config: &PathfinderConfig,
        helper: &PathfinderHelper,
        storage: &mut dyn NodeStorage,
    ) -> bool {
        if destination.has_enemy_hero() {
            return self.bypass_battle(source, destination, config, helper, storage);
        }

        false
    }

    /// Blocking but interactable objects.
    ///
    /// Quest gates let the chain through and leave a pending quest check on the
    /// node, unless the gate is a quest guard with no mission at all. Any other
    /// object that neither belongs to an enemy hero nor disappears on visit only
    /// passes when the node's hero is the one already standing there.
    pub(super) fn bypass_removable_object(
        &self,
        destination: &DestinationNodeInfo,
        helper: &PathfinderHelper,
        storage: &mut dyn NodeStorage,
    ) -> bool {
        let Some(object) = destination.node_object.as_ref() else {
            return false;
        };

        if let Some(quest) = object.quest() {
            if matches!(object.kind, ObjectKind::QuestGuard(_)) && quest.mission == MissionKind::None {
                return false;
            }

            if !self.world.was_visited(object.id, helper.owner)
                || !self.world.check_quest(object, helper.hero)
            {
                let action = SpecialAction::Quest(QuestInfo {
                    quest: quest.clone(),
                    object: object.id,
                    position: destination.coord,
                });

                if let Err(error) = storage.apply(destination.node, NodeMutation::AttachAction(action)) {
                    warn!(
                        target: TRACE_TARGET,
                        error = %error,
                        object = %object.id,
                        "failed to attach quest action"
                    );
                }
            }

            return true;
        }

        if !destination.has_enemy_hero() && !self.world.is_object_removable(object) {
            return storage.hero(destination.node) == destination.node_hero;
        }

        true
    }

    /// Guards at the destination that were already present at the source have
    /// been dealt with when the chain reached the source, and are not counted
    /// again. If nothing new remains and the actor may pass beaten guards the
    /// move is free; otherwise the guards have to be fought.
    pub(super) fn bypass_destination_guards(
        &self,
        mut destination_guards: Vec<ObjectId>,
        source: &PathNodeInfo,
        destination: &mut DestinationNodeInfo,
        config: &PathfinderConfig,
        helper: &PathfinderHelper,
        storage: &mut dyn NodeStorage,
    ) -> bool {
        if destination_guards.is_empty() {
            return false;
        }

        let source_guards = self.world.guarding_creatures(source.coord);
        destination_guards.retain(|guard| !source_guards.contains(guard));

        let guards_already_bypassed = destination_guards.is_empty() && !source_guards.is_empty();
        let allow_battle = storage
            .node_actor(source.node)
            .is_some_and(|actor| actor.allow_battle);

        if guards_already_bypassed && allow_battle {
            trace!(
                target: TRACE_TARGET,
                from = %source.coord,
                to = %destination.coord,
                "bypass guard at destination"
            );
            return true;
        }

        self.bypass_battle(source, destination, config, helper, storage)
    }
}
