use crate::state::{HeroId, MapObject, ObjectId, ObjectKind, PlayerId, Position};

/// World query layer: guard placement, visitation history and quest checks.
pub trait WorldOracle: Send + Sync {
    /// Guards whose zone of control covers `position`, in map order.
    fn guarding_creatures(&self, position: Position) -> Vec<ObjectId>;

    /// Whether `player` has already visited `object`.
    fn was_visited(&self, object: ObjectId, player: PlayerId) -> bool;

    /// Whether `hero` currently satisfies the quest attached to `object`.
    fn check_quest(&self, object: &MapObject, hero: HeroId) -> bool;

    /// Whether interacting with `object` removes it from the map, leaving the
    /// tile free for the rest of the path.
    fn is_object_removable(&self, object: &MapObject) -> bool {
        matches!(
            object.kind,
            ObjectKind::Monster | ObjectKind::Treasure | ObjectKind::BorderGuard(_)
        )
    }
}
