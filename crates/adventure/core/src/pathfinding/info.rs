use crate::state::{HeroId, MapObject, PlayerId, PlayerRelations, Position};

use super::node::{NodeAction, NodeRef};

/// Snapshot of the node an edge is expanded from.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNodeInfo {
    pub node: NodeRef,
    pub coord: Position,
    pub guarded: bool,
    pub node_object: Option<MapObject>,
    pub node_hero: Option<HeroId>,
}

impl PathNodeInfo {
    pub fn new(node: NodeRef, coord: Position) -> Self {
        Self {
            node,
            coord,
            guarded: false,
            node_object: None,
            node_hero: None,
        }
    }

    pub fn with_guarded(mut self, guarded: bool) -> Self {
        self.guarded = guarded;
        self
    }

    pub fn with_object(mut self, object: MapObject) -> Self {
        self.node_object = Some(object);
        self
    }
}

/// Mutable descriptor of the node an edge leads to.
///
/// Rules may redirect `node` to a freshly allocated battle node. `blocked` is
/// recomputed on every evaluation and only affects the current expansion.
#[derive(Clone, Debug, PartialEq)]
pub struct DestinationNodeInfo {
    pub node: NodeRef,
    pub coord: Position,
    pub blocked: bool,
    pub guarded: bool,
    pub action: NodeAction,
    pub node_object: Option<MapObject>,
    pub node_hero: Option<HeroId>,
    pub hero_relations: PlayerRelations,

    /// Accumulated path cost after this step.
    pub cost: f32,
    /// Turn index the step ends in.
    pub turn: u8,
    pub moves_left: u32,
}

impl DestinationNodeInfo {
    pub fn new(node: NodeRef, coord: Position, action: NodeAction) -> Self {
        Self {
            node,
            coord,
            blocked: false,
            guarded: false,
            action,
            node_object: None,
            node_hero: None,
            hero_relations: PlayerRelations::Neutral,
            cost: 0.0,
            turn: 0,
            moves_left: 0,
        }
    }

    pub fn with_guarded(mut self, guarded: bool) -> Self {
        self.guarded = guarded;
        self
    }

    pub fn with_object(mut self, object: MapObject) -> Self {
        self.node_object = Some(object);
        self
    }

    pub fn with_hero(mut self, hero: HeroId, relations: PlayerRelations) -> Self {
        self.node_hero = Some(hero);
        self.hero_relations = relations;
        self
    }

    pub fn with_step(mut self, cost: f32, turn: u8, moves_left: u32) -> Self {
        self.cost = cost;
        self.turn = turn;
        self.moves_left = moves_left;
        self
    }

    /// Whether an enemy hero stands on the destination tile.
    pub fn has_enemy_hero(&self) -> bool {
        self.node_hero.is_some() && self.hero_relations.is_enemy()
    }
}

/// Per-search context describing who is moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathfinderHelper {
    pub hero: HeroId,
    pub owner: PlayerId,
}

impl PathfinderHelper {
    pub const fn new(hero: HeroId, owner: PlayerId) -> Self {
        Self { hero, owner }
    }
}
