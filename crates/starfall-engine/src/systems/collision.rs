use glam::Vec3;
use crate::api::types::EntityId;
use crate::core::scene::Scene;
use crate::systems::motion::within;

/// What happens when a live object reaches its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// The session ends: the loop halts and the scene is cleared.
    #[default]
    GameOver,
    /// Arrivals are not checked.
    Ignore,
}

impl CollisionPolicy {
    pub fn checks_contact(self) -> bool {
        self == CollisionPolicy::GameOver
    }
}

/// First candidate (in list order) within `threshold` of `target`.
/// Ids missing from the scene are skipped.
pub fn first_contact(scene: &Scene, candidates: &[EntityId], target: Vec3, threshold: f32) -> Option<EntityId> {
    candidates.iter().copied().find(|&id| {
        scene
            .get(id)
            .is_some_and(|e| within(e.pos, target, threshold))
    })
}
