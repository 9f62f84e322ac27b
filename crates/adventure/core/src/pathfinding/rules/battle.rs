//! Combat bypass: forking a post-battle node when a fight is worth it.

use tracing::{debug, trace, warn};

use crate::config::PathfinderConfig;
use crate::pathfinding::info::{DestinationNodeInfo, PathNodeInfo, PathfinderHelper};
use crate::pathfinding::node::SpecialAction;
use crate::pathfinding::storage::{NodeMutation, NodeStorage, StorageError};

use super::{MovementAfterDestinationRule, PathfinderRule, PreviousNodeRule, TRACE_TARGET};

impl MovementAfterDestinationRule<'_> {
    /// Tries to pass the destination by fighting there.
    ///
    /// The fight is accepted only when the projected loss is strictly below the
    /// army still alive on the source chain: a projected wipe is refused, a
    /// near-total loss is not. On acceptance `destination.node` is redirected to
    /// the battle actor's node at the same coordinate and layer, which then
    /// accumulates the loss, keeps the worst danger and carries a battle action
    /// for the turn executor. On refusal nothing is mutated.
    pub(super) fn bypass_battle(
        &self,
        source: &PathNodeInfo,
        destination: &mut DestinationNodeInfo,
        config: &PathfinderConfig,
        helper: &PathfinderHelper,
        storage: &mut dyn NodeStorage,
    ) -> bool {
        let Some((layer, battle_actor)) = storage.node(destination.node).and_then(|node| {
            let battle_actor = storage.actor(node.actor)?.battle_actor?;
            Some((node.layer, battle_actor))
        }) else {
            trace!(
                target: TRACE_TARGET,
                from = %source.coord,
                to = %destination.coord,
                "destination actor cannot fight"
            );
            return false;
        };

        let Some(battle_node) = storage.get_or_create_node(destination.coord, layer, battle_actor)
        else {
            trace!(
                target: TRACE_TARGET,
                from = %source.coord,
                to = %destination.coord,
                "can not allocate battle node"
            );
            return false;
        };

        if storage.node(battle_node).is_none_or(|node| node.locked) {
            trace!(
                target: TRACE_TARGET,
                from = %source.coord,
                to = %destination.coord,
                "block bypass guard at destination"
            );
            return false;
        }

        let Some((hero, army_value, army_loss)) = storage.node(source.node).and_then(|node| {
            let actor = storage.actor(node.actor)?;
            Some((actor.hero, actor.army_value, node.army_loss))
        }) else {
            return false;
        };

        let danger = self.combat.evaluate_danger(destination.coord, hero, true);
        let actual_army_value = army_value.saturating_sub(army_loss);
        let loss = self.combat.evaluate_army_loss(hero, actual_army_value, danger);

        if loss >= actual_army_value {
            trace!(
                target: TRACE_TARGET,
                danger,
                loss,
                army = actual_army_value,
                from = %source.coord,
                to = %destination.coord,
                "battle not worth it"
            );
            return false;
        }

        destination.node = battle_node;
        if let Err(error) = commit_battle(storage, source, destination, loss, danger) {
            warn!(
                target: TRACE_TARGET,
                error = %error,
                to = %destination.coord,
                "failed to commit battle node"
            );
        }

        PreviousNodeRule.process(source, destination, config, helper, storage);

        if let Err(error) = storage.apply(
            battle_node,
            NodeMutation::AttachAction(SpecialAction::Battle {
                target: destination.coord,
            }),
        ) {
            warn!(
                target: TRACE_TARGET,
                error = %error,
                to = %destination.coord,
                "failed to attach battle action"
            );
        }

        debug!(
            target: TRACE_TARGET,
            danger,
            loss,
            from = %source.coord,
            to = %destination.coord,
            node = %battle_node,
            "begin bypass guard at destination"
        );

        true
    }
}

fn commit_battle(
    storage: &mut dyn NodeStorage,
    source: &PathNodeInfo,
    destination: &DestinationNodeInfo,
    loss: u64,
    danger: u64,
) -> Result<(), StorageError> {
    storage.commit(destination, source)?;
    storage.apply(destination.node, NodeMutation::AddArmyLoss(loss))?;
    storage.apply(destination.node, NodeMutation::RaiseDanger(danger))
}
