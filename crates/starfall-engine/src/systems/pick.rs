//! Ray picking against live sphere meshes.
//!
//! Each frame the pick helper undoes the previous highlight, casts a ray
//! from the pointer through the camera, and highlights the nearest hit.
//! Only the caller-supplied candidate ids are tested, never the whole scene.

use glam::Vec3;
use crate::api::types::EntityId;
use crate::components::color::Color;
use crate::core::scene::Scene;
use crate::input::pointer::PointerState;
use crate::renderer::camera::PerspectiveCamera;

/// Half-line with a unit direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// The direction is normalized; a zero direction stays zero and hits nothing.
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }

    /// Distance along the ray to the first intersection with a sphere.
    /// A ray starting inside the sphere reports the exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        if self.dir == Vec3::ZERO {
            return None;
        }
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }
}

/// One ray hit against a live object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub id: EntityId,
    pub distance: f32,
    pub point: Vec3,
}

/// Intersect a ray with the given candidates, nearest first.
/// Candidates that are missing, inactive, or meshless are skipped.
pub fn intersect_objects(ray: &Ray, scene: &Scene, candidates: &[EntityId]) -> Vec<Intersection> {
    let mut hits: Vec<Intersection> = candidates
        .iter()
        .filter_map(|&id| {
            let entity = scene.get(id).filter(|e| e.active)?;
            let mesh = entity.mesh.as_ref()?;
            let distance = ray.intersect_sphere(entity.pos, mesh.radius)?;
            Some(Intersection {
                id,
                distance,
                point: ray.at(distance),
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

/// Tracks the currently highlighted object and its original emissive colour.
#[derive(Debug, Default)]
pub struct PickHelper {
    picked: Option<EntityId>,
    saved_emissive: Color,
}

impl PickHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-resolve the pick for this frame. Returns the highlighted id, if any.
    pub fn pick(
        &mut self,
        pointer: &PointerState,
        camera: &PerspectiveCamera,
        scene: &mut Scene,
        candidates: &[EntityId],
        highlight: Color,
    ) -> Option<EntityId> {
        self.restore(scene);

        let ndc = pointer.ndc()?;
        let ray = camera.ray_from_ndc(ndc);
        let nearest = intersect_objects(&ray, scene, candidates).into_iter().next()?;
        let mesh = scene.get_mut(nearest.id)?.mesh.as_mut()?;

        self.saved_emissive = mesh.material.emissive;
        mesh.material.emissive = highlight;
        self.picked = Some(nearest.id);
        log::debug!("picked {:?} at distance {:.2}", nearest.id, nearest.distance);
        self.picked
    }

    /// Undo the current highlight, if the object still exists.
    pub fn restore(&mut self, scene: &mut Scene) {
        let Some(id) = self.picked.take() else {
            return;
        };
        if let Some(mesh) = scene.get_mut(id).and_then(|e| e.mesh.as_mut()) {
            mesh.material.emissive = self.saved_emissive;
        }
    }

    /// The object highlighted by the most recent `pick`.
    pub fn picked(&self) -> Option<EntityId> {
        self.picked
    }

    /// Drop the pick without touching the scene (the object is gone).
    pub fn forget(&mut self) {
        self.picked = None;
    }
}
