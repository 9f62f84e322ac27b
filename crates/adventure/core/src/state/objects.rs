use super::{ObjectId, PlayerId};

/// A map object occupying a tile, as reported by the world query layer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub owner: Option<PlayerId>,
}

impl MapObject {
    pub fn new(id: ObjectId, kind: ObjectKind) -> Self {
        Self {
            id,
            kind,
            owner: None,
        }
    }

    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Quest attached to quest-bearing kinds.
    pub fn quest(&self) -> Option<&Quest> {
        self.kind.quest()
    }
}

/// Object classes the edge rules distinguish between.
///
/// Quest-bearing kinds carry their requirement inline so no runtime type
/// inspection is needed to reach it.
#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ObjectKind {
    /// Seer-hut style guard that only steps aside once its quest is met.
    QuestGuard(Quest),
    /// Keymaster-tent gated border guard.
    BorderGuard(Quest),
    /// Border gate: passable once the matching key is owned.
    BorderGate(Quest),
    Garrison,
    Teleporter,
    Monster,
    /// Pick-up objects (resources, chests, artifacts) that vanish once collected.
    Treasure,
    Hero,
    Town,
    Mine,
    Other,
}

impl ObjectKind {
    pub fn quest(&self) -> Option<&Quest> {
        match self {
            Self::QuestGuard(quest) | Self::BorderGuard(quest) | Self::BorderGate(quest) => {
                Some(quest)
            }
            _ => None,
        }
    }

    pub fn is_quest_gate(&self) -> bool {
        self.quest().is_some()
    }
}

/// Requirement a quest-bearing object checks before letting a hero through.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quest {
    pub mission: MissionKind,
}

impl Quest {
    pub const fn new(mission: MissionKind) -> Self {
        Self { mission }
    }

    pub const fn none() -> Self {
        Self::new(MissionKind::None)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissionKind {
    /// Trivial mission. A quest guard with no mission never opens.
    #[default]
    None,
    Experience(u32),
    PrimarySkill,
    Kill(ObjectId),
    Artifacts,
    Army,
    Resources,
    Hero,
    Player,
    Keymaster(u8),
}
