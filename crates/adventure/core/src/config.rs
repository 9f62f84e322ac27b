/// Pathfinder configuration constants and tunable parameters.
///
/// The search engine hands the same config to every rule invocation, so rules
/// never keep their own copy of these options.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathfinderConfig {
    /// Whether boarding and leaving boats is an ordinary move.
    /// When disabled, embark/disembark edges are hard blocked.
    pub use_embark_and_disembark: bool,

    /// Whether a visitable teleporter may be walked through without stopping.
    pub allow_teleport_transit: bool,

    /// Number of turns after which an ordinary chain stops expanding.
    pub max_turns: u8,

    /// Turn limit applied to scout actors instead of `max_turns`.
    pub scout_turn_distance_limit: u8,

    /// Upper bound on nodes the arena will allocate before reporting exhaustion.
    pub max_nodes: usize,
}

impl PathfinderConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TURNS: u8 = 7;
    pub const DEFAULT_SCOUT_TURN_DISTANCE_LIMIT: u8 = 5;
    pub const DEFAULT_MAX_NODES: usize = 1 << 20;

    pub fn new() -> Self {
        Self {
            use_embark_and_disembark: true,
            allow_teleport_transit: true,
            max_turns: Self::DEFAULT_MAX_TURNS,
            scout_turn_distance_limit: Self::DEFAULT_SCOUT_TURN_DISTANCE_LIMIT,
            max_nodes: Self::DEFAULT_MAX_NODES,
        }
    }

    pub fn with_max_turns(mut self, max_turns: u8) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Turn budget for an actor, depending on whether it is scouting.
    pub fn turn_limit(&self, scout: bool) -> u8 {
        if scout {
            self.scout_turn_distance_limit
        } else {
            self.max_turns
        }
    }
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self::new()
    }
}
