#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use adventure_core::{
    ActorId, ActorSpec, CombatOracle, DestinationNodeInfo, HeroId, Layer, MapObject, NodeAction,
    NodeArena, NodeStorage, ObjectId, PathNodeInfo, PathfinderConfig, PathfinderHelper, PlayerId,
    Position, WorldOracle,
};

pub const HERO: HeroId = HeroId(1);
pub const OWNER: PlayerId = PlayerId(0);

/// World with explicit guard placement and quest bookkeeping.
#[derive(Default)]
pub struct StubWorld {
    pub guards: HashMap<Position, Vec<ObjectId>>,
    pub visited: HashSet<(ObjectId, PlayerId)>,
    pub quests_met: HashSet<ObjectId>,
}

impl StubWorld {
    pub fn guard(mut self, position: Position, guard: ObjectId) -> Self {
        self.guards.entry(position).or_default().push(guard);
        self
    }

    pub fn visited(mut self, object: ObjectId, player: PlayerId) -> Self {
        self.visited.insert((object, player));
        self
    }

    pub fn quest_met(mut self, object: ObjectId) -> Self {
        self.quests_met.insert(object);
        self
    }
}

impl WorldOracle for StubWorld {
    fn guarding_creatures(&self, position: Position) -> Vec<ObjectId> {
        self.guards.get(&position).cloned().unwrap_or_default()
    }

    fn was_visited(&self, object: ObjectId, player: PlayerId) -> bool {
        self.visited.contains(&(object, player))
    }

    fn check_quest(&self, object: &MapObject, _hero: HeroId) -> bool {
        self.quests_met.contains(&object.id)
    }
}

/// Combat predictor returning a fixed danger and a loss computed from a plain function.
pub struct StubCombat {
    pub danger: u64,
    pub loss: fn(u64, u64) -> u64,
}

impl StubCombat {
    pub fn new(danger: u64, loss: fn(u64, u64) -> u64) -> Self {
        Self { danger, loss }
    }
}

impl CombatOracle for StubCombat {
    fn evaluate_danger(&self, _position: Position, _hero: HeroId, _committing: bool) -> u64 {
        self.danger
    }

    fn evaluate_army_loss(&self, _hero: HeroId, army_value: u64, danger: u64) -> u64 {
        (self.loss)(army_value, danger)
    }
}

pub fn helper() -> PathfinderHelper {
    PathfinderHelper::new(HERO, OWNER)
}

/// Arena with one actor, a reached start node and an unreached neighbour.
pub struct Edge {
    pub arena: NodeArena,
    pub actor: ActorId,
    pub source: PathNodeInfo,
    pub destination: DestinationNodeInfo,
}

pub const FROM: Position = Position::new(0, 0, 0);
pub const TO: Position = Position::new(1, 0, 0);

pub fn edge(army_value: u64, action: NodeAction) -> Edge {
    edge_with(ActorSpec::new(HERO, OWNER, army_value), action)
}

pub fn edge_with(spec: ActorSpec, action: NodeAction) -> Edge {
    edge_in(PathfinderConfig::default(), spec, action)
}

pub fn edge_in(config: PathfinderConfig, spec: ActorSpec, action: NodeAction) -> Edge {
    let mut arena = NodeArena::new(config);
    let actor = arena.add_actor(spec);
    let start = arena
        .initialize_start(FROM, Layer::Land, actor, 1500)
        .expect("start node");
    let target = arena
        .get_or_create_node(TO, Layer::Land, actor)
        .expect("destination node");

    Edge {
        arena,
        actor,
        source: PathNodeInfo::new(start, FROM),
        destination: DestinationNodeInfo::new(target, TO, action).with_step(1.0, 0, 1400),
    }
}

/// Routes rule traces to the test harness output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

pub fn battle_actor(arena: &NodeArena, actor: ActorId) -> ActorId {
    arena
        .actor(actor)
        .and_then(|a| a.battle_actor)
        .expect("battle actor")
}
