use starfall_engine::*;
use starfall_engine::systems::motion::{approach, spin, APPROACH_FRACTION};
use glam::Vec3;

/// Custom event: spawn-rate slider. `a` = new rate.
pub const CUSTOM_SPAWN_RATE: u32 = 1;
/// Custom event: comet colour picker. `a` = 24-bit RGB value.
pub const CUSTOM_COMET_COLOUR: u32 = 2;

pub const EARTH_TEXTURE: &str = "earth";
pub const COMET_TEXTURE: &str = "comet";

const EARTH_RADIUS: f32 = 6.0;
const COMET_RADIUS: f32 = 1.0;
/// Centre distance at which a comet has hit the earth.
const IMPACT_DISTANCE: f32 = 7.0;
const EARTH_SPIN: f32 = 0.2;
const COMET_SPIN: f32 = 0.5;
const HIGHLIGHT: u32 = 0x0F0F0F;

/// Comets fly in from either side of the earth and must be clicked before
/// they reach it. One impact ends the game.
pub struct CometClicker {
    earth: Option<EntityId>,
    comets: LiveSet,
    picker: PickHelper,
    score: u32,
    spawn: SpawnSettings,
    /// Copied into each new comet; later edits leave existing comets alone.
    template: Material,
    earth_texture: Option<TextureId>,
    policy: CollisionPolicy,
}

impl CometClicker {
    pub fn new() -> Self {
        Self {
            earth: None,
            comets: LiveSet::new(),
            picker: PickHelper::new(),
            score: 0,
            spawn: SpawnSettings::default(),
            template: Material::phong(Color::WHITE),
            earth_texture: None,
            policy: CollisionPolicy::GameOver,
        }
    }

    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn comet_count(&self) -> usize {
        self.comets.len()
    }

    pub fn spawn_rate(&self) -> u32 {
        self.spawn.rate()
    }

    /// Template colour as `#rrggbb`, for the colour picker.
    pub fn colour_hex(&self) -> String {
        self.template.color.to_css_hex()
    }

    fn earth_pos(&self, ctx: &EngineContext) -> Vec3 {
        self.earth
            .and_then(|id| ctx.scene.get(id))
            .map_or(Vec3::ZERO, |e| e.pos)
    }

    /// Random start point left or right of the earth.
    fn spawn_comet(&mut self, ctx: &mut EngineContext) -> EntityId {
        let rng = &mut ctx.rng;
        let x = if rng.coin() { rng.between(20, 35) } else { rng.between(-20, -35) };
        let y = rng.between(-15, 15);
        let z = rng.between(-50, 50);
        self.spawn_comet_at(ctx, Vec3::new(x as f32, y as f32, z as f32))
    }

    pub fn spawn_comet_at(&mut self, ctx: &mut EngineContext, pos: Vec3) -> EntityId {
        let id = ctx.next_id();
        let comet = Entity::new(id)
            .with_tag(format!("comet{}", id.0))
            .with_pos(pos)
            .with_mesh(MeshComponent::sphere(COMET_RADIUS, self.template));
        self.comets.insert(&mut ctx.scene, comet);
        log::debug!("comet {id:?} spawned at {pos}");
        id
    }

    /// Destroy the comet highlighted by the previous pick, if any.
    fn click(&mut self, ctx: &mut EngineContext) {
        let Some(id) = self.picker.picked() else {
            return;
        };
        self.picker.forget();
        if !self.comets.remove(&mut ctx.scene, id) {
            return;
        }
        ctx.highlighted = None;
        self.score += 1;
        log::debug!("comet {id:?} destroyed, score {}", self.score);
        ctx.emit_event(GameEvent::new(GameEvent::SCORE, self.score as f32));
        ctx.hud(HudCommand::SetScoreText(score_text(self.score)));
    }

    fn apply_control(&mut self, kind: u32, value: f32) {
        match kind {
            CUSTOM_SPAWN_RATE => {
                let rate = self.spawn.set_rate_f32(value);
                log::debug!("spawn rate set to {rate}");
            }
            CUSTOM_COMET_COLOUR => {
                if !(0.0..=0xFF_FFFF as f32).contains(&value) {
                    log::warn!("ignoring comet colour {value}");
                    return;
                }
                self.template.color = Color::from_hex(value as u32);
                log::debug!("comet colour set to {}", self.colour_hex());
            }
            _ => log::warn!("unknown control {kind}"),
        }
    }
}

impl Default for CometClicker {
    fn default() -> Self {
        Self::new()
    }
}

pub fn score_text(score: u32) -> String {
    format!("comets clicked: {score}")
}

impl Game for CometClicker {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            camera: CameraConfig {
                fov_y_deg: 40.0,
                aspect: 2.0,
                near: 0.1,
                far: 1000.0,
                position: Vec3::new(0.0, 0.0, 50.0),
                target: Vec3::ZERO,
                up: Vec3::Y,
            },
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.lighting = Lighting::ambient(Color::WHITE, 1.0);

        let id = ctx.next_id();
        let earth = Entity::new(id)
            .with_tag("earth")
            .with_mesh(MeshComponent::sphere(
                EARTH_RADIUS,
                Material::phong(Color::WHITE).with_map(self.earth_texture),
            ));
        ctx.scene.spawn(earth);
        self.earth = Some(id);
        // Comets beyond what the host can draw would be pickable but invisible
        let spare = ctx.spare_instances();
        self.comets.set_capacity(&mut ctx.scene, spare);
    }

    fn assets_loaded(&mut self, ctx: &mut EngineContext) -> Result<(), AssetError> {
        let earth = ctx.textures.require(EARTH_TEXTURE)?;
        let comet = ctx.textures.require(COMET_TEXTURE)?;

        self.earth_texture = Some(earth);
        // Comet texture doubles as the bump map
        self.template = self.template.with_map(Some(comet)).with_bump_map(Some(comet));

        if let Some(mesh) = self
            .earth
            .and_then(|id| ctx.scene.get_mut(id))
            .and_then(|e| e.mesh.as_mut())
        {
            mesh.material.map = Some(earth);
        }
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if ctx.is_halted() {
            return;
        }

        // Clicks resolve against the previous step's pick
        for event in input.iter() {
            match *event {
                InputEvent::PointerDown { .. } => self.click(ctx),
                InputEvent::Custom { kind, a, .. } => self.apply_control(kind, a),
                _ => {}
            }
        }

        if self.spawn.roll(&mut ctx.rng) {
            self.spawn_comet(ctx);
        }

        let t = ctx.elapsed();
        let target = self.earth_pos(ctx);
        if let Some(earth) = self.earth.and_then(|id| ctx.scene.get_mut(id)) {
            earth.rotation.y = spin(t, EARTH_SPIN);
        }
        for &id in self.comets.ids() {
            if let Some(comet) = ctx.scene.get_mut(id) {
                comet.pos = approach(comet.pos, target, APPROACH_FRACTION);
                comet.rotation.x = spin(t, COMET_SPIN);
                comet.rotation.y = spin(t, COMET_SPIN);
            }
        }

        if self.policy.checks_contact() {
            if let Some(id) = first_contact(&ctx.scene, self.comets.ids(), target, IMPACT_DISTANCE) {
                log::info!("comet {id:?} hit the earth, final score {}", self.score);
                self.picker.forget();
                self.comets.clear(&mut ctx.scene);
                ctx.halt();
                return;
            }
        }

        ctx.highlighted = self.picker.pick(
            &ctx.pointer,
            &ctx.camera,
            &mut ctx.scene,
            self.comets.ids(),
            Color::from_hex(HIGHLIGHT),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (CometClicker, EngineContext) {
        let mut game = CometClicker::new();
        let mut ctx = EngineContext::from_config(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    fn step(game: &mut CometClicker, ctx: &mut EngineContext, events: &[InputEvent]) {
        let mut input = InputQueue::new();
        for &event in events {
            input.push(event);
        }
        ctx.clear_frame_data();
        game.update(ctx, &input);
    }

    fn manifest(json: &str) -> TextureRegistry {
        TextureRegistry::from_manifest(&AssetManifest::from_json(json).unwrap())
    }

    #[test]
    fn init_places_earth_only() {
        let (game, ctx) = setup();
        assert_eq!(ctx.scene.len(), 1);
        assert_eq!(game.comet_count(), 0);
        let earth = ctx.scene.find_by_tag("earth").unwrap();
        assert_eq!(earth.mesh.unwrap().radius, EARTH_RADIUS);
        assert_eq!(ctx.camera.fov_y_deg, 40.0);
        assert_eq!(ctx.camera.position, Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn spawned_comets_start_in_the_side_bands() {
        let (mut game, mut ctx) = setup();
        for _ in 0..500 {
            let id = game.spawn_comet(&mut ctx);
            let pos = ctx.scene.get(id).unwrap().pos;
            assert!((20.0..=35.0).contains(&pos.x.abs()), "x = {}", pos.x);
            assert!((-15.0..=15.0).contains(&pos.y));
            assert!((-50.0..=50.0).contains(&pos.z));
        }
        // Capped at what the host draws: 256 instances minus the earth
        assert_eq!(game.comet_count(), 255);
        assert_eq!(ctx.scene.len(), 256);
    }

    #[test]
    fn comet_ids_are_unique() {
        let (mut game, mut ctx) = setup();
        let mut ids: Vec<EntityId> = (0..100).map(|_| game.spawn_comet(&mut ctx)).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn impact_ends_the_game_exactly_once() {
        let (mut game, mut ctx) = setup();
        game.spawn_comet_at(&mut ctx, Vec3::new(50.0, 0.0, 0.0));

        let mut game_overs = 0;
        let mut steps = 0;
        while !ctx.is_halted() && steps < 1000 {
            step(&mut game, &mut ctx, &[]);
            game_overs += ctx.events.iter().filter(|e| e.kind == GameEvent::GAME_OVER).count();
            steps += 1;
        }
        assert!(ctx.is_halted());
        assert!(steps <= 196, "took {steps} steps");
        assert!(ctx.hud.contains(&HudCommand::RevealGameOver));

        for _ in 0..10 {
            step(&mut game, &mut ctx, &[]);
            game_overs += ctx.events.iter().filter(|e| e.kind == GameEvent::GAME_OVER).count();
        }
        assert_eq!(game_overs, 1);
        assert!(ctx.scene.is_empty());
        assert_eq!(game.comet_count(), 0);
    }

    #[test]
    fn ignore_policy_never_halts() {
        let mut game = CometClicker::new().with_policy(CollisionPolicy::Ignore);
        let mut ctx = EngineContext::from_config(&game.config());
        game.init(&mut ctx);
        game.spawn_comet_at(&mut ctx, Vec3::new(50.0, 0.0, 0.0));
        for _ in 0..500 {
            step(&mut game, &mut ctx, &[]);
        }
        assert!(!ctx.is_halted());
    }

    #[test]
    fn pointer_highlights_and_click_destroys() {
        let (mut game, mut ctx) = setup();
        let target = game.spawn_comet_at(&mut ctx, Vec3::new(0.0, 0.0, 20.0));
        ctx.pointer = PointerState::at(Vec2::ZERO);

        step(&mut game, &mut ctx, &[]);
        assert_eq!(ctx.highlighted, Some(target));
        let emissive = ctx.scene.get(target).unwrap().mesh.unwrap().material.emissive;
        assert_eq!(emissive.to_hex(), HIGHLIGHT);

        step(&mut game, &mut ctx, &[InputEvent::PointerDown { x: 0.0, y: 0.0 }]);
        assert!(!ctx.scene.contains(target));
        assert_eq!(game.score(), 1);
        assert!(ctx.events.iter().any(|e| e.kind == GameEvent::SCORE && e.a == 1.0));
        assert_eq!(ctx.hud, vec![HudCommand::SetScoreText("comets clicked: 1".into())]);
        // Earth survives
        assert!(ctx.scene.find_by_tag("earth").is_some());
    }

    #[test]
    fn click_without_pick_does_nothing() {
        let (mut game, mut ctx) = setup();
        game.spawn_comet_at(&mut ctx, Vec3::new(30.0, 0.0, 0.0));
        step(&mut game, &mut ctx, &[InputEvent::PointerDown { x: 0.0, y: 0.0 }]);
        assert_eq!(game.score(), 0);
        assert!(ctx.hud.is_empty());
    }

    #[test]
    fn highlight_is_restored_when_pointer_leaves() {
        let (mut game, mut ctx) = setup();
        let target = game.spawn_comet_at(&mut ctx, Vec3::new(0.0, 0.0, 20.0));
        ctx.pointer = PointerState::at(Vec2::ZERO);
        step(&mut game, &mut ctx, &[]);

        ctx.pointer.clear();
        step(&mut game, &mut ctx, &[]);
        assert_eq!(ctx.highlighted, None);
        let emissive = ctx.scene.get(target).unwrap().mesh.unwrap().material.emissive;
        assert_eq!(emissive, Color::BLACK);
    }

    #[test]
    fn nearest_comet_wins_the_pick() {
        let (mut game, mut ctx) = setup();
        let far = game.spawn_comet_at(&mut ctx, Vec3::new(0.0, 0.0, 10.0));
        let near = game.spawn_comet_at(&mut ctx, Vec3::new(0.0, 0.0, 30.0));
        ctx.pointer = PointerState::at(Vec2::ZERO);
        step(&mut game, &mut ctx, &[]);
        assert_eq!(ctx.highlighted, Some(near));
        let far_emissive = ctx.scene.get(far).unwrap().mesh.unwrap().material.emissive;
        assert_eq!(far_emissive, Color::BLACK);
    }

    #[test]
    fn controls_adjust_rate_and_colour() {
        let (mut game, mut ctx) = setup();
        step(&mut game, &mut ctx, &[
            InputEvent::Custom { kind: CUSTOM_SPAWN_RATE, a: 35.0, b: 0.0, c: 0.0 },
            InputEvent::Custom { kind: CUSTOM_COMET_COLOUR, a: 0xFF0000 as f32, b: 0.0, c: 0.0 },
        ]);
        assert_eq!(game.spawn_rate(), 40);
        assert_eq!(game.colour_hex(), "#ff0000");

        let id = game.spawn_comet_at(&mut ctx, Vec3::new(30.0, 0.0, 0.0));
        let color = ctx.scene.get(id).unwrap().mesh.unwrap().material.color;
        assert_eq!(color.to_hex(), 0xFF0000);

        step(&mut game, &mut ctx, &[
            InputEvent::Custom { kind: CUSTOM_COMET_COLOUR, a: -1.0, b: 0.0, c: 0.0 },
        ]);
        assert_eq!(game.colour_hex(), "#ff0000");
    }

    #[test]
    fn colour_change_leaves_existing_comets() {
        let (mut game, mut ctx) = setup();
        let id = game.spawn_comet_at(&mut ctx, Vec3::new(30.0, 0.0, 0.0));
        game.apply_control(CUSTOM_COMET_COLOUR, 0x00FF00 as f32);
        let color = ctx.scene.get(id).unwrap().mesh.unwrap().material.color;
        assert_eq!(color, Color::WHITE);
    }

    #[test]
    fn textures_are_resolved_from_the_manifest() {
        let (mut game, mut ctx) = setup();
        ctx.textures = manifest(
            r#"{"textures":[{"name":"earth","path":"earthmap1k.jpg"},{"name":"comet","path":"cometbump1k.jpg"}]}"#,
        );
        game.assets_loaded(&mut ctx).unwrap();

        let earth = ctx.scene.find_by_tag("earth").unwrap().mesh.unwrap();
        assert_eq!(earth.material.map, Some(TextureId(0)));

        let id = game.spawn_comet_at(&mut ctx, Vec3::new(30.0, 0.0, 0.0));
        let material = ctx.scene.get(id).unwrap().mesh.unwrap().material;
        assert_eq!(material.map, Some(TextureId(1)));
        assert_eq!(material.bump_map, Some(TextureId(1)));
    }

    #[test]
    fn missing_texture_is_an_error() {
        let (mut game, mut ctx) = setup();
        ctx.textures = manifest(r#"{"textures":[{"name":"earth","path":"earthmap1k.jpg"}]}"#);
        assert!(matches!(
            game.assets_loaded(&mut ctx),
            Err(AssetError::MissingTexture(name)) if name == "comet"
        ));
    }

    #[test]
    fn comets_spin_with_elapsed_time() {
        let (mut game, mut ctx) = setup();
        let id = game.spawn_comet_at(&mut ctx, Vec3::new(30.0, 0.0, 0.0));
        ctx.set_elapsed(4.0);
        step(&mut game, &mut ctx, &[]);
        let comet = ctx.scene.get(id).unwrap();
        assert_eq!(comet.rotation.x, 2.0);
        assert_eq!(comet.rotation.y, 2.0);
        let earth = ctx.scene.find_by_tag("earth").unwrap();
        assert!((earth.rotation.y - 0.8).abs() < 1e-6);
    }
}
