//! Map-level identities and objects the edge rules reason about.
//!
//! These are plain values copied out of the world query layer. The rules never
//! hold references into the world itself.
mod common;
mod objects;

pub use common::{HeroId, Layer, ObjectId, PlayerId, PlayerRelations, Position};
pub use objects::{MapObject, MissionKind, ObjectKind, Quest};
