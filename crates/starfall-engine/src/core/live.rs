use crate::api::types::EntityId;
use crate::components::entity::Entity;
use crate::core::scene::Scene;

/// Ordered list of the live, pickable objects of a game.
///
/// Every id in the set is also in the scene. Insertion and removal go through
/// this type and touch both containers in the same call, so the two can never
/// disagree about which objects are alive.
///
/// With a capacity set, inserting into a full set first evicts the oldest
/// object, so the set never outgrows what the host renders.
#[derive(Debug, Default)]
pub struct LiveSet {
    ids: Vec<EntityId>,
    capacity: Option<usize>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the set to `capacity` objects (at least one), evicting the
    /// oldest ones if it is already larger.
    pub fn set_capacity(&mut self, scene: &mut Scene, capacity: usize) {
        let capacity = capacity.max(1);
        self.capacity = Some(capacity);
        while self.ids.len() > capacity {
            self.evict_oldest(scene);
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Add an entity to the scene and register it as live.
    pub fn insert(&mut self, scene: &mut Scene, entity: Entity) -> EntityId {
        let id = entity.id;
        debug_assert!(!self.contains(id), "live id {id:?} registered twice");
        if self.capacity.is_some_and(|cap| self.ids.len() >= cap) {
            self.evict_oldest(scene);
        }
        scene.spawn(entity);
        self.ids.push(id);
        id
    }

    fn evict_oldest(&mut self, scene: &mut Scene) {
        if self.ids.is_empty() {
            return;
        }
        let id = self.ids.remove(0);
        scene.despawn(id);
        log::debug!("live set full, evicted {id:?}");
    }

    /// Remove a live object from both the list and the scene.
    /// Linear scan by id; returns false when the id is not live.
    pub fn remove(&mut self, scene: &mut Scene, id: EntityId) -> bool {
        let Some(idx) = self.ids.iter().position(|&live| live == id) else {
            return false;
        };
        self.ids.remove(idx);
        let removed = scene.despawn(id);
        debug_assert!(removed.is_some(), "live id {id:?} missing from scene");
        true
    }

    /// Remove every live object from the scene and forget them.
    pub fn clear(&mut self, scene: &mut Scene) {
        for id in self.ids.drain(..) {
            scene.despawn(id);
        }
    }

    pub fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
