//! Classification of destination tiles.
//!
//! [`classify`] is a pure function of the step the search engine proposes: it
//! looks at how the destination would be entered and what occupies it, and
//! never touches node storage.

use crate::config::PathfinderConfig;
use crate::state::ObjectKind;

use super::info::{DestinationNodeInfo, PathNodeInfo, PathfinderHelper};
use super::node::NodeAction;

/// Why a destination cannot simply be expanded through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BlockingReason {
    /// Freely traversable.
    None,
    /// Guards cover the destination.
    DestinationGuarded,
    /// An interactable object blocks the tile.
    DestinationBlockVisitable,
    /// The tile is a visit target; the path ends there.
    DestinationVisit,
    /// Hard blocker.
    DestinationBlocked,
}

impl BlockingReason {
    pub const fn is_blocking(self) -> bool {
        !matches!(self, Self::None)
    }
}

pub fn classify(
    _source: &PathNodeInfo,
    destination: &DestinationNodeInfo,
    config: &PathfinderConfig,
    _helper: &PathfinderHelper,
) -> BlockingReason {
    match destination.action {
        NodeAction::Visit => {
            // Transit through teleporters and unguarded garrisons never stops the chain.
            match destination.node_object.as_ref().map(|object| &object.kind) {
                Some(ObjectKind::Teleporter) if config.allow_teleport_transit => BlockingReason::None,
                Some(ObjectKind::Garrison | ObjectKind::BorderGate(_)) => BlockingReason::None,
                _ => BlockingReason::DestinationVisit,
            }
        }

        NodeAction::BlockingVisit => {
            if destination.guarded {
                BlockingReason::DestinationGuarded
            } else {
                BlockingReason::DestinationBlockVisitable
            }
        }

        NodeAction::Normal => BlockingReason::None,

        NodeAction::Embark => {
            if config.use_embark_and_disembark {
                BlockingReason::None
            } else {
                BlockingReason::DestinationBlocked
            }
        }

        NodeAction::Disembark => {
            if !config.use_embark_and_disembark {
                BlockingReason::DestinationBlocked
            } else if destination.guarded {
                BlockingReason::DestinationGuarded
            } else {
                BlockingReason::None
            }
        }

        // Leaving a battle is only possible from a guarded tile onto a passable one.
        NodeAction::Battle if destination.guarded => BlockingReason::DestinationGuarded,

        NodeAction::Battle | NodeAction::Blocked | NodeAction::Unknown => {
            BlockingReason::DestinationBlocked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinding::node::NodeRef;
    use crate::state::{HeroId, MapObject, ObjectId, PlayerId, Position, Quest};

    fn source() -> PathNodeInfo {
        PathNodeInfo::new(NodeRef(0), Position::ORIGIN)
    }

    fn destination(action: NodeAction) -> DestinationNodeInfo {
        DestinationNodeInfo::new(NodeRef(1), Position::new(1, 0, 0), action)
    }

    fn run(destination: &DestinationNodeInfo, config: &PathfinderConfig) -> BlockingReason {
        let helper = PathfinderHelper::new(HeroId(1), PlayerId(0));
        classify(&source(), destination, config, &helper)
    }

    #[test]
    fn normal_move_is_free() {
        let config = PathfinderConfig::default();
        assert_eq!(run(&destination(NodeAction::Normal), &config), BlockingReason::None);
    }

    #[test]
    fn blocking_visit_depends_on_guards() {
        let config = PathfinderConfig::default();
        let unguarded = destination(NodeAction::BlockingVisit);
        let guarded = destination(NodeAction::BlockingVisit).with_guarded(true);

        assert_eq!(run(&unguarded, &config), BlockingReason::DestinationBlockVisitable);
        assert_eq!(run(&guarded, &config), BlockingReason::DestinationGuarded);
    }

    #[test]
    fn visit_passes_through_garrisons_and_teleporters() {
        let config = PathfinderConfig::default();
        let garrison = destination(NodeAction::Visit)
            .with_object(MapObject::new(ObjectId(3), ObjectKind::Garrison));
        let gate = destination(NodeAction::Visit)
            .with_object(MapObject::new(ObjectId(4), ObjectKind::BorderGate(Quest::none())));
        let teleporter = destination(NodeAction::Visit)
            .with_object(MapObject::new(ObjectId(5), ObjectKind::Teleporter));
        let mine = destination(NodeAction::Visit)
            .with_object(MapObject::new(ObjectId(6), ObjectKind::Mine));

        assert_eq!(run(&garrison, &config), BlockingReason::None);
        assert_eq!(run(&gate, &config), BlockingReason::None);
        assert_eq!(run(&teleporter, &config), BlockingReason::None);
        assert_eq!(run(&mine, &config), BlockingReason::DestinationVisit);

        let no_transit = PathfinderConfig {
            allow_teleport_transit: false,
            ..PathfinderConfig::default()
        };
        assert_eq!(run(&teleporter, &no_transit), BlockingReason::DestinationVisit);
    }

    #[test]
    fn embarking_follows_config() {
        let allowed = PathfinderConfig::default();
        let forbidden = PathfinderConfig {
            use_embark_and_disembark: false,
            ..PathfinderConfig::default()
        };

        assert_eq!(run(&destination(NodeAction::Embark), &allowed), BlockingReason::None);
        assert_eq!(
            run(&destination(NodeAction::Embark), &forbidden),
            BlockingReason::DestinationBlocked
        );
        assert_eq!(
            run(&destination(NodeAction::Disembark).with_guarded(true), &allowed),
            BlockingReason::DestinationGuarded
        );
        assert_eq!(
            run(&destination(NodeAction::Disembark), &forbidden),
            BlockingReason::DestinationBlocked
        );
    }

    #[test]
    fn battle_without_guards_is_blocked() {
        let config = PathfinderConfig::default();
        assert_eq!(
            run(&destination(NodeAction::Battle), &config),
            BlockingReason::DestinationBlocked
        );
        assert_eq!(
            run(&destination(NodeAction::Battle).with_guarded(true), &config),
            BlockingReason::DestinationGuarded
        );
        assert!(!BlockingReason::None.is_blocking());
    }
}
