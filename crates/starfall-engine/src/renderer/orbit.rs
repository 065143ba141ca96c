//! Orbit controls: drag to swing the camera around its target, wheel to zoom.

use glam::{Vec2, Vec3};
use crate::renderer::camera::PerspectiveCamera;

#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Rotation around the Y axis (radians).
    pub azimuth: f32,
    /// Rotation above the XZ plane (radians), clamped short of the poles.
    pub elevation: f32,
    /// Distance from target point.
    pub distance: f32,
    /// Point the camera orbits.
    pub target: Vec3,
    /// Last pointer position of an active drag, in NDC.
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    /// Radians of rotation per NDC unit of pointer travel.
    const ROTATE_SPEED: f32 = std::f32::consts::PI;
    const ZOOM_SPEED: f32 = 0.1;
    const MIN_DISTANCE: f32 = 0.5;
    const MAX_DISTANCE: f32 = 90.0;
    const MAX_ELEVATION: f32 = 1.4; // ~80 degrees

    /// Derive orbit parameters from where the camera currently sits.
    pub fn from_camera(camera: &PerspectiveCamera) -> Self {
        let offset = camera.position - camera.target;
        let distance = offset.length().max(Self::MIN_DISTANCE);
        let elevation = (offset.y / distance).clamp(-1.0, 1.0).asin();
        let azimuth = offset.x.atan2(offset.z);
        Self {
            azimuth,
            elevation: elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION),
            distance,
            target: camera.target,
            drag_from: None,
        }
    }

    /// Orbit by a pointer delta in NDC units.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * Self::ROTATE_SPEED;
        self.elevation -= dy * Self::ROTATE_SPEED;
        self.elevation = self.elevation.clamp(-Self::MAX_ELEVATION, Self::MAX_ELEVATION);
    }

    /// Zoom camera (positive = zoom in).
    pub fn zoom(&mut self, delta: f32) {
        self.distance *= 1.0 - delta * Self::ZOOM_SPEED;
        self.distance = self.distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    pub fn begin_drag(&mut self, ndc: Vec2) {
        self.drag_from = Some(ndc);
    }

    /// Continue a drag. Returns true if the camera angles changed.
    pub fn drag_to(&mut self, ndc: Vec2) -> bool {
        let Some(from) = self.drag_from else {
            return false;
        };
        let delta = ndc - from;
        self.drag_from = Some(ndc);
        if delta == Vec2::ZERO {
            return false;
        }
        self.orbit(delta.x, delta.y);
        true
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        let (sin_el, cos_el) = self.elevation.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target + Vec3::new(cos_el * sin_az, sin_el, cos_el * cos_az) * self.distance
    }

    /// Write position and target into the camera.
    pub fn apply(&self, camera: &mut PerspectiveCamera) {
        camera.position = self.position();
        camera.look_at(self.target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(position: Vec3) -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(75.0, 2.0, 0.1, 100.0);
        cam.position = position;
        cam.look_at(Vec3::ZERO);
        cam
    }

    #[test]
    fn from_camera_round_trips_position() {
        let cam = camera_at(Vec3::new(1.0, 0.5, 2.0));
        let controls = OrbitControls::from_camera(&cam);
        assert!((controls.position() - cam.position).length() < 1e-5);
    }

    #[test]
    fn camera_on_z_axis_has_zero_angles() {
        let controls = OrbitControls::from_camera(&camera_at(Vec3::new(0.0, 0.0, 2.0)));
        assert!(controls.azimuth.abs() < 1e-6);
        assert!(controls.elevation.abs() < 1e-6);
        assert!((controls.distance - 2.0).abs() < 1e-6);
    }

    #[test]
    fn orbit_keeps_distance() {
        let mut controls = OrbitControls::from_camera(&camera_at(Vec3::new(0.0, 0.0, 2.0)));
        controls.orbit(0.3, -0.2);
        assert!((controls.position().length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn orbit_clamps_elevation() {
        let mut controls = OrbitControls::from_camera(&camera_at(Vec3::new(0.0, 0.0, 2.0)));
        controls.orbit(0.0, -100.0);
        assert!(controls.elevation <= OrbitControls::MAX_ELEVATION);
        controls.orbit(0.0, 100.0);
        assert!(controls.elevation >= -OrbitControls::MAX_ELEVATION);
    }

    #[test]
    fn zoom_clamps() {
        let mut controls = OrbitControls::from_camera(&camera_at(Vec3::new(0.0, 0.0, 2.0)));
        for _ in 0..200 {
            controls.zoom(1.0);
        }
        assert!(controls.distance >= OrbitControls::MIN_DISTANCE);
        for _ in 0..200 {
            controls.zoom(-1.0);
        }
        assert!(controls.distance <= OrbitControls::MAX_DISTANCE);
    }

    #[test]
    fn drag_only_moves_while_held() {
        let mut controls = OrbitControls::from_camera(&camera_at(Vec3::new(0.0, 0.0, 2.0)));
        assert!(!controls.drag_to(Vec2::new(0.5, 0.0)));
        controls.begin_drag(Vec2::ZERO);
        assert!(controls.drag_to(Vec2::new(0.5, 0.0)));
        controls.end_drag();
        let azimuth = controls.azimuth;
        assert!(!controls.drag_to(Vec2::new(0.9, 0.0)));
        assert_eq!(controls.azimuth, azimuth);
    }
}
