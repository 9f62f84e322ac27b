use std::collections::HashMap;

use crate::config::PathfinderConfig;
use crate::state::{HeroId, Layer, PlayerId, Position};

use super::{NodeMutation, NodeStorage, StorageError};
use crate::pathfinding::info::{DestinationNodeInfo, PathNodeInfo};
use crate::pathfinding::node::{ActorId, ChainActor, NodeAction, NodeRef, PathNode};

/// Description of an actor to register with [`NodeArena::add_actor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActorSpec {
    pub hero: HeroId,
    pub owner: PlayerId,
    pub army_value: u64,
    pub allow_battle: bool,
    pub scout: bool,
}

impl ActorSpec {
    pub const fn new(hero: HeroId, owner: PlayerId, army_value: u64) -> Self {
        Self {
            hero,
            owner,
            army_value,
            allow_battle: true,
            scout: false,
        }
    }

    pub const fn with_allow_battle(mut self, allow_battle: bool) -> Self {
        self.allow_battle = allow_battle;
        self
    }

    pub const fn with_scout(mut self, scout: bool) -> Self {
        self.scout = scout;
        self
    }
}

/// In-memory node storage addressed by [`NodeRef`] handles.
///
/// Nodes are allocated lazily per (coordinate, layer, actor) and live as long
/// as the arena. Handles are indices and stay valid until the arena is dropped.
#[derive(Clone, Debug)]
pub struct NodeArena {
    config: PathfinderConfig,
    nodes: Vec<PathNode>,
    actors: Vec<ChainActor>,
    index: HashMap<(Position, Layer, ActorId), NodeRef>,
    by_tile: HashMap<(Position, Layer), Vec<NodeRef>>,
}

impl NodeArena {
    pub fn new(config: PathfinderConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            actors: Vec::new(),
            index: HashMap::new(),
            by_tile: HashMap::new(),
        }
    }

    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    /// Registers an actor together with its post-battle counterpart.
    ///
    /// The battle actor carries the same hero and army. It is always allowed to
    /// walk past guards it has beaten, and fighting again from a battle node
    /// stays on the battle actor.
    pub fn add_actor(&mut self, spec: ActorSpec) -> ActorId {
        let base = ActorId(self.actors.len() as u32);
        let battle = ActorId(base.0 + 1);

        self.actors.push(ChainActor {
            hero: spec.hero,
            owner: spec.owner,
            army_value: spec.army_value,
            allow_battle: spec.allow_battle,
            scout: spec.scout,
            battle_actor: Some(battle),
        });
        self.actors.push(ChainActor {
            hero: spec.hero,
            owner: spec.owner,
            army_value: spec.army_value,
            allow_battle: true,
            scout: spec.scout,
            battle_actor: Some(battle),
        });

        base
    }

    /// Allocates the starting node of a search and marks it reached at zero cost.
    pub fn initialize_start(
        &mut self,
        coord: Position,
        layer: Layer,
        actor: ActorId,
        moves_left: u32,
    ) -> Option<NodeRef> {
        let node = self.get_or_create_node(coord, layer, actor)?;
        let start = &mut self.nodes[node.0 as usize];
        start.action = NodeAction::Normal;
        start.cost = 0.0;
        start.turns = 0;
        start.moves_left = moves_left;
        Some(node)
    }

    /// Looks up an already allocated node without creating it.
    pub fn find(&self, coord: Position, layer: Layer, actor: ActorId) -> Option<NodeRef> {
        self.index.get(&(coord, layer, actor)).copied()
    }

    /// All nodes allocated on a tile, in allocation order.
    pub fn nodes_at(&self, coord: Position, layer: Layer) -> impl Iterator<Item = &PathNode> + '_ {
        self.by_tile
            .get(&(coord, layer))
            .into_iter()
            .flatten()
            .map(|node| &self.nodes[node.0 as usize])
    }

    /// Walks `previous` links back to the start, returning nodes start-first.
    pub fn path_to(&self, node: NodeRef) -> Vec<NodeRef> {
        let mut path = vec![node];
        let mut current = node;
        while let Some(previous) = self.node(current).and_then(|n| n.previous) {
            if path.contains(&previous) {
                break;
            }
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node_mut(&mut self, node: NodeRef) -> Result<&mut PathNode, StorageError> {
        self.nodes
            .get_mut(node.0 as usize)
            .ok_or(StorageError::UnknownNode(node))
    }

    /// Army still alive when standing on `node`.
    fn remaining_army(&self, node: &PathNode) -> u64 {
        self.actor(node.actor)
            .map(|actor| actor.army_value.saturating_sub(node.army_loss))
            .unwrap_or(0)
    }
}

impl NodeStorage for NodeArena {
    fn node(&self, node: NodeRef) -> Option<&PathNode> {
        self.nodes.get(node.0 as usize)
    }

    fn actor(&self, actor: ActorId) -> Option<&ChainActor> {
        self.actors.get(actor.0 as usize)
    }

    fn get_or_create_node(
        &mut self,
        coord: Position,
        layer: Layer,
        actor: ActorId,
    ) -> Option<NodeRef> {
        if let Some(existing) = self.find(coord, layer, actor) {
            return Some(existing);
        }
        if self.actor(actor).is_none() || self.nodes.len() >= self.config.max_nodes {
            return None;
        }

        let node = NodeRef(self.nodes.len() as u32);
        self.nodes.push(PathNode::new(coord, layer, actor));
        self.index.insert((coord, layer, actor), node);
        self.by_tile.entry((coord, layer)).or_default().push(node);
        Some(node)
    }

    /// A move is inefficient when another chain of the same hero already
    /// reached the destination tile at no greater cost with at least as much
    /// army left, and is strictly better on one of the two.
    fn is_movement_inefficient(
        &self,
        source: &PathNodeInfo,
        destination: &DestinationNodeInfo,
    ) -> bool {
        let (Some(src), Some(dst)) = (self.node(source.node), self.node(destination.node)) else {
            return false;
        };
        let Some(hero) = self.actor(dst.actor).map(|actor| actor.hero) else {
            return false;
        };
        let our_army = self
            .actor(dst.actor)
            .map(|actor| actor.army_value.saturating_sub(src.army_loss))
            .unwrap_or(0);

        self.nodes_at(destination.coord, dst.layer).any(|other| {
            if other.actor == dst.actor || !other.is_reached() {
                return false;
            }
            if self.actor(other.actor).map(|actor| actor.hero) != Some(hero) {
                return false;
            }
            let other_army = self.remaining_army(other);
            other.cost <= destination.cost
                && other_army >= our_army
                && (other.cost < destination.cost || other_army > our_army)
        })
    }

    fn is_distance_limit_reached(
        &self,
        _source: &PathNodeInfo,
        destination: &DestinationNodeInfo,
    ) -> bool {
        let scout = self
            .node_actor(destination.node)
            .map(|actor| actor.scout)
            .unwrap_or(false);
        destination.turn > self.config.turn_limit(scout)
    }

    /// Copies the step into the node. Loss and danger inherited from the
    /// source only ever raise the stored values.
    fn commit(
        &mut self,
        destination: &DestinationNodeInfo,
        source: &PathNodeInfo,
    ) -> Result<(), StorageError> {
        let (src_loss, src_danger) = self
            .node(source.node)
            .map(|src| (src.army_loss, src.danger))
            .ok_or(StorageError::UnknownNode(source.node))?;

        let node = self.node_mut(destination.node)?;
        node.action = destination.action;
        node.cost = destination.cost;
        node.turns = destination.turn;
        node.moves_left = destination.moves_left;
        node.army_loss = node.army_loss.max(src_loss);
        node.danger = node.danger.max(src_danger);
        node.previous = Some(source.node);
        Ok(())
    }

    fn apply(&mut self, node: NodeRef, mutation: NodeMutation) -> Result<(), StorageError> {
        let node = self.node_mut(node)?;
        match mutation {
            NodeMutation::Lock => node.locked = true,
            NodeMutation::AttachAction(action) => node.special_action = Some(action),
            NodeMutation::AddArmyLoss(loss) => node.army_loss = node.army_loss.saturating_add(loss),
            NodeMutation::RaiseDanger(danger) => node.danger = node.danger.max(danger),
        }
        Ok(())
    }

    fn record_predecessor(
        &mut self,
        child: NodeRef,
        parent: NodeRef,
        edge_cost: f32,
    ) -> Result<(), StorageError> {
        let parent_cost = self
            .node(parent)
            .map(|p| p.cost)
            .ok_or(StorageError::UnknownNode(parent))?;
        let node = self.node_mut(child)?;
        node.previous = Some(parent);
        node.cost = parent_cost + edge_cost;
        Ok(())
    }
}
