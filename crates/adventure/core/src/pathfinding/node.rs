use std::fmt;

use crate::state::{HeroId, Layer, ObjectId, PlayerId, Position, Quest};

/// Stable handle to a node inside a [`NodeStorage`](super::NodeStorage).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRef(pub u32);

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Stable handle to a chain actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// A hero together with the army it moves with, as tracked per node.
///
/// Every actor that can fight has a distinct `battle_actor`: the same army
/// after winning a forced engagement. Nodes owned by the battle actor are the
/// post-battle branches of the search graph.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainActor {
    pub hero: HeroId,
    pub owner: PlayerId,
    pub army_value: u64,
    /// Whether guards already beaten upstream let this actor walk on freely.
    pub allow_battle: bool,
    /// Scouts run under the shorter scout turn limit.
    pub scout: bool,
    pub battle_actor: Option<ActorId>,
}

/// How the search engine intends to enter a destination tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum NodeAction {
    /// Node not reached yet.
    #[default]
    Unknown,
    Normal,
    Embark,
    Disembark,
    Battle,
    Visit,
    BlockingVisit,
    Blocked,
}

/// Quest check recorded on a node so the turn executor can run it at move time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestInfo {
    pub quest: Quest,
    pub object: ObjectId,
    pub position: Position,
}

/// Action the turn executor must perform when the hero reaches the node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialAction {
    /// Complete (or re-check) a quest before passing the object.
    Quest(QuestInfo),
    /// Fight whatever guards `target` before continuing.
    Battle { target: Position },
}

impl SpecialAction {
    pub fn target(&self) -> Position {
        match self {
            Self::Quest(info) => info.position,
            Self::Battle { target } => *target,
        }
    }
}

/// Node of the search graph: one per (coordinate, layer, actor).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub coord: Position,
    pub layer: Layer,
    pub actor: ActorId,

    /// Terminal marker. Set at most once and never cleared.
    pub locked: bool,
    /// Army value lost along the best chain reaching this node. Only grows.
    pub army_loss: u64,
    /// Worst danger seen on the way here. Only grows.
    pub danger: u64,
    pub special_action: Option<SpecialAction>,

    pub action: NodeAction,
    pub cost: f32,
    pub turns: u8,
    pub moves_left: u32,
    pub previous: Option<NodeRef>,
}

impl PathNode {
    pub fn new(coord: Position, layer: Layer, actor: ActorId) -> Self {
        Self {
            coord,
            layer,
            actor,
            locked: false,
            army_loss: 0,
            danger: 0,
            special_action: None,
            action: NodeAction::Unknown,
            cost: f32::MAX,
            turns: u8::MAX,
            moves_left: 0,
            previous: None,
        }
    }

    /// Whether the search engine has reached this node at least once.
    pub fn is_reached(&self) -> bool {
        self.action != NodeAction::Unknown
    }
}
