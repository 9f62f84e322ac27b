use std::fmt;

/// Tile coordinate on the adventure map. `z` selects the map level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Player slot. Only the first [`PlayerId::MAX_PLAYERS`] slots are real players;
/// anything above marks neutral owners or sentinels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const MAX_PLAYERS: u8 = 8;

    /// Owner of unclaimed objects and wandering monsters.
    pub const NEUTRAL: Self = Self(255);

    #[inline]
    pub const fn is_valid_player(self) -> bool {
        self.0 < Self::MAX_PLAYERS
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid_player() {
            write!(f, "player{}", self.0)
        } else {
            f.write_str("neutral")
        }
    }
}

/// Identity of a hero on the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroId(pub u32);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hero#{}", self.0)
    }
}

/// Identity of a map object instance (monsters, quest guards, gates, ...).
///
/// Guard de-duplication compares these handles, so they must be stable for
/// the lifetime of a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj#{}", self.0)
    }
}

/// Movement domain. Part of the node identity together with the coordinate
/// and the actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Layer {
    #[default]
    Land,
    Sail,
    Water,
    Air,
}

/// Relation between the moving hero's owner and whoever stands on the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum PlayerRelations {
    /// Nobody relevant on the tile.
    #[default]
    Neutral,
    SamePlayer,
    Allies,
    Enemies,
}

impl PlayerRelations {
    #[inline]
    pub const fn is_enemy(self) -> bool {
        matches!(self, Self::Enemies)
    }
}
