//! Solar System: a spinning sun with orbit controls.
//!
//! Small bodies are released from a fixed point and drift into the sun.
//! Clicking a body removes it; drag anywhere else to orbit, wheel to zoom.
//! Reaching the sun is harmless.

use starfall_engine::*;
use starfall_engine::systems::motion::{approach, spin, APPROACH_FRACTION};
use glam::{Vec2, Vec3};

// ── Camera ──────────────────────────────────────────────────────────

const CAMERA_FOV: f32 = 75.0;
const CAMERA_NEAR: f32 = 0.1;
const CAMERA_FAR: f32 = 100.0;
const CAMERA_POS: Vec3 = Vec3::new(0.0, 0.0, 2.0);

// ── Sun ─────────────────────────────────────────────────────────────

const SUN_RADIUS: f32 = 5.0;
/// Halfway to the far plane.
const SUN_POS: Vec3 = Vec3::new(0.0, 0.0, -CAMERA_FAR / 2.0);
const SUN_COLOR: u32 = 0xFF0000;
/// Radians added per simulation step on both x and y.
const SUN_SPIN_STEP: f32 = 0.1;

// ── Bodies ──────────────────────────────────────────────────────────

const BODY_RADIUS: f32 = 1.0;
const BODY_START: Vec3 = Vec3::new(30.0, 0.0, -50.0);
const BODY_SPIN: f32 = 0.5;
const BODY_SPAWN_RATE: u32 = 100;
const HIGHLIGHT: u32 = 0x0F0F0F;

// ── Custom event kinds from the debug panel ─────────────────────────

pub const CUSTOM_SPAWN_RATE: u32 = 1;

pub struct SolarSystem {
    sun: Option<EntityId>,
    bodies: LiveSet,
    picker: PickHelper,
    controls: Option<OrbitControls>,
    spawn: SpawnSettings,
    policy: CollisionPolicy,
    removed: u32,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            sun: None,
            bodies: LiveSet::new(),
            picker: PickHelper::new(),
            controls: None,
            spawn: SpawnSettings::new(BODY_SPAWN_RATE),
            policy: CollisionPolicy::Ignore,
            removed: 0,
        }
    }

    /// The visualizer ignores arrivals by default; `GameOver` ends the
    /// session when a body reaches the sun's surface.
    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn removed(&self) -> u32 {
        self.removed
    }

    pub fn spawn_body_at(&mut self, ctx: &mut EngineContext, pos: Vec3) -> EntityId {
        let id = ctx.next_id();
        let body = Entity::new(id)
            .with_tag(format!("body{}", id.0))
            .with_pos(pos)
            .with_mesh(MeshComponent::sphere(BODY_RADIUS, Material::phong(Color::WHITE)));
        self.bodies.insert(&mut ctx.scene, body);
        log::debug!("body {id:?} released");
        id
    }

    fn sun_pos(&self, ctx: &EngineContext) -> Vec3 {
        self.sun
            .and_then(|id| ctx.scene.get(id))
            .map_or(SUN_POS, |e| e.pos)
    }

    /// A press either removes the highlighted body or starts an orbit drag.
    fn press(&mut self, ctx: &mut EngineContext, ndc: Vec2) {
        if let Some(id) = self.picker.picked() {
            self.picker.forget();
            if self.bodies.remove(&mut ctx.scene, id) {
                ctx.highlighted = None;
                self.removed += 1;
                log::debug!("body {id:?} removed");
                return;
            }
        }
        if let Some(controls) = &mut self.controls {
            controls.begin_drag(ndc);
        }
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { x, y } => self.press(ctx, Vec2::new(x, y)),
                InputEvent::PointerMove { x, y } => {
                    if let Some(controls) = &mut self.controls {
                        controls.drag_to(Vec2::new(x, y));
                    }
                }
                InputEvent::PointerUp { .. } | InputEvent::PointerLeave => {
                    if let Some(controls) = &mut self.controls {
                        controls.end_drag();
                    }
                }
                InputEvent::Wheel { delta } => {
                    if let Some(controls) = &mut self.controls {
                        controls.zoom(delta);
                    }
                }
                InputEvent::Custom { kind: CUSTOM_SPAWN_RATE, a, .. } => {
                    let rate = self.spawn.set_rate_f32(a);
                    log::debug!("spawn rate set to {rate}");
                }
                InputEvent::Custom { kind, .. } => log::warn!("unknown control {kind}"),
            }
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            camera: CameraConfig {
                fov_y_deg: CAMERA_FOV,
                aspect: 2.0,
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                position: CAMERA_POS,
                target: Vec3::ZERO,
                up: Vec3::Y,
            },
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let id = ctx.next_id();
        let sun = Entity::new(id)
            .with_tag("sun")
            .with_pos(SUN_POS)
            .with_mesh(MeshComponent::sphere(SUN_RADIUS, Material::basic(Color::from_hex(SUN_COLOR))));
        ctx.scene.spawn(sun);
        self.sun = Some(id);
        let spare = ctx.spare_instances();
        self.bodies.set_capacity(&mut ctx.scene, spare);
        self.controls = Some(OrbitControls::from_camera(&ctx.camera));
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if ctx.is_halted() {
            return;
        }

        self.handle_input(ctx, input);

        if let Some(controls) = &self.controls {
            controls.apply(&mut ctx.camera);
        }

        if self.spawn.roll(&mut ctx.rng) {
            self.spawn_body_at(ctx, BODY_START);
        }

        if let Some(sun) = self.sun.and_then(|id| ctx.scene.get_mut(id)) {
            sun.rotation.x += SUN_SPIN_STEP;
            sun.rotation.y += SUN_SPIN_STEP;
        }

        let t = ctx.elapsed();
        let target = self.sun_pos(ctx);
        for &id in self.bodies.ids() {
            if let Some(body) = ctx.scene.get_mut(id) {
                body.pos = approach(body.pos, target, APPROACH_FRACTION);
                body.rotation.x = spin(t, BODY_SPIN);
                body.rotation.y = spin(t, BODY_SPIN);
            }
        }

        if self.policy.checks_contact()
            && first_contact(&ctx.scene, self.bodies.ids(), target, SUN_RADIUS + BODY_RADIUS).is_some()
        {
            self.picker.forget();
            self.bodies.clear(&mut ctx.scene);
            ctx.halt();
            return;
        }

        ctx.highlighted = self.picker.pick(
            &ctx.pointer,
            &ctx.camera,
            &mut ctx.scene,
            self.bodies.ids(),
            Color::from_hex(HIGHLIGHT),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starfall_engine::systems::render::build_render_buffer;

    fn setup() -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::from_config(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn step(game: &mut SolarSystem, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for &event in events {
            input.push(event);
        }
        ctx.clear_frame_data();
        game.update(ctx, &input);
    }

    #[test]
    fn sun_is_red_unlit_and_far() {
        let (_, ctx) = setup();
        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert_eq!(sun.pos, Vec3::new(0.0, 0.0, -50.0));
        let mesh = sun.mesh.unwrap();
        assert_eq!(mesh.radius, 5.0);
        assert_eq!(mesh.material.shading, Shading::Basic);
        assert_eq!(mesh.material.color.to_hex(), 0xFF0000);
        assert_eq!(ctx.camera.fov_y_deg, 75.0);
        assert_eq!(ctx.camera.far, 100.0);
    }

    #[test]
    fn sun_spins_a_fixed_step_per_update() {
        let (mut game, mut ctx) = setup();
        for _ in 0..3 {
            step(&mut game, &mut ctx, &[]);
        }
        let sun = ctx.scene.find_by_tag("sun").unwrap();
        assert!((sun.rotation.x - 0.3).abs() < 1e-5);
        assert!((sun.rotation.y - 0.3).abs() < 1e-5);
    }

    #[test]
    fn bodies_drift_into_the_sun_without_ending_the_session() {
        let (mut game, mut ctx) = setup();
        let id = game.spawn_body_at(&mut ctx, BODY_START);
        let start = BODY_START.distance(SUN_POS);
        for _ in 0..1000 {
            step(&mut game, &mut ctx, &[]);
        }
        assert!(!ctx.is_halted());
        let now = ctx.scene.get(id).unwrap().pos.distance(SUN_POS);
        assert!(now < start * 0.01);
    }

    #[test]
    fn reaching_the_sun_ends_the_session_under_game_over() {
        let mut game = SolarSystem::new().with_policy(CollisionPolicy::GameOver);
        let mut ctx = EngineContext::from_config(&game.config());
        game.init(&mut ctx);
        game.spawn_body_at(&mut ctx, BODY_START);

        let mut game_overs = 0;
        let mut steps = 0;
        while !ctx.is_halted() && steps < 1000 {
            step(&mut game, &mut ctx, &[]);
            game_overs += ctx.events.iter().filter(|e| e.kind == GameEvent::GAME_OVER).count();
            steps += 1;
        }
        assert!(ctx.is_halted());
        assert_eq!(game_overs, 1);
        assert_eq!(game.body_count(), 0);
        assert!(ctx.scene.is_empty());

        step(&mut game, &mut ctx, &[]);
        assert!(ctx.events.is_empty());
        assert_eq!(game.body_count(), 0);
    }

    #[test]
    fn every_pickable_body_is_published() {
        let (mut game, mut ctx) = setup();
        let max = game.config().max_instances;
        for _ in 0..300 {
            game.spawn_body_at(&mut ctx, Vec3::new(0.0, 0.0, -20.0));
        }
        let near = game.spawn_body_at(&mut ctx, Vec3::new(0.0, 0.0, -5.0));
        ctx.pointer = PointerState::at(Vec2::ZERO);
        step(&mut game, &mut ctx, &[]);

        assert_eq!(game.body_count(), max - 1);
        assert_eq!(ctx.highlighted, Some(near));

        let mut buffer = RenderBuffer::with_capacity(max);
        build_render_buffer(ctx.scene.iter(), &mut buffer);
        assert!(buffer.instance_count() as usize <= max);
        let published: Vec<Vec3> = buffer.instances.iter().map(|i| Vec3::new(i.x, i.y, i.z)).collect();
        for &id in game.bodies.ids() {
            let pos = ctx.scene.get(id).unwrap().pos;
            assert!(published.contains(&pos), "{id:?} is pickable but not drawn");
        }
    }

    #[test]
    fn drag_orbits_the_camera() {
        let (mut game, mut ctx) = setup();
        let before = ctx.camera.position;
        step(&mut game, &mut ctx, &[
            InputEvent::PointerDown { x: -0.5, y: 0.5 },
            InputEvent::PointerMove { x: -0.4, y: 0.5 },
            InputEvent::PointerUp { x: -0.4, y: 0.5 },
        ]);
        let after = ctx.camera.position;
        assert!((after - before).length() > 1e-3);
        assert!((after.length() - 2.0).abs() < 1e-4);

        // Drag ended: further moves leave the camera alone
        step(&mut game, &mut ctx, &[InputEvent::PointerMove { x: 0.9, y: 0.0 }]);
        assert!((ctx.camera.position - after).length() < 1e-6);
    }

    #[test]
    fn wheel_zooms_toward_target() {
        let (mut game, mut ctx) = setup();
        step(&mut game, &mut ctx, &[InputEvent::Wheel { delta: 1.0 }]);
        assert!((ctx.camera.position.length() - 1.8).abs() < 1e-4);
    }

    #[test]
    fn clicking_a_body_removes_it_instead_of_dragging() {
        let (mut game, mut ctx) = setup();
        let id = game.spawn_body_at(&mut ctx, Vec3::new(0.0, 0.0, -10.0));
        ctx.pointer = PointerState::at(Vec2::ZERO);
        step(&mut game, &mut ctx, &[]);
        assert_eq!(ctx.highlighted, Some(id));

        step(&mut game, &mut ctx, &[InputEvent::PointerDown { x: 0.0, y: 0.0 }]);
        assert!(!ctx.scene.contains(id));
        assert_eq!(game.removed(), 1);
        assert!(!game.controls.as_ref().unwrap().is_dragging());
    }

    #[test]
    fn spawn_rate_control() {
        let (mut game, mut ctx) = setup();
        step(&mut game, &mut ctx, &[
            InputEvent::Custom { kind: CUSTOM_SPAWN_RATE, a: 20.0, b: 0.0, c: 0.0 },
        ]);
        assert_eq!(game.spawn.rate(), 20);
    }
}
