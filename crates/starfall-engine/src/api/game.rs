use glam::Vec3;
use crate::api::types::{EntityId, GameEvent, HudCommand};
use crate::assets::registry::TextureRegistry;
use crate::core::schedule::LoopState;
use crate::core::scene::Scene;
use crate::error::AssetError;
use crate::input::pointer::PointerState;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::lighting::Lighting;
use crate::systems::rng::Rng;

/// Initial camera setup, provided by the game.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Aspect used until the first resize reports the real canvas size.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 40.0,
            aspect: 2.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 50.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    pub camera: CameraConfig,
    /// Maximum number of render instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// RNG seed. The web runner replaces it with a clock seed at init.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            camera: CameraConfig::default(),
            max_instances: 256,
            max_events: 32,
            seed: 42,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed simulation step.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Called after a texture manifest has been loaded into `ctx.textures`.
    /// Games resolve their texture names here and fail on missing ones.
    fn assets_loaded(&mut self, _ctx: &mut EngineContext) -> Result<(), AssetError> {
        Ok(())
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub lighting: Lighting,
    /// Latest pointer position in NDC, updated as host events arrive.
    pub pointer: PointerState,
    pub rng: Rng,
    pub events: Vec<GameEvent>,
    pub hud: Vec<HudCommand>,
    pub textures: TextureRegistry,
    /// Object currently under the pointer, published in the protocol header.
    pub highlighted: Option<EntityId>,
    elapsed: f32,
    loop_state: LoopState,
    next_id: u32,
    max_instances: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::from_config(&config.camera),
            lighting: Lighting::default(),
            pointer: PointerState::absent(),
            rng: Rng::new(config.seed),
            events: Vec::new(),
            hud: Vec::new(),
            textures: TextureRegistry::new(),
            highlighted: None,
            elapsed: 0.0,
            loop_state: LoopState::Running,
            next_id: 1,
            max_instances: config.max_instances,
        }
    }

    /// Generate the next unique entity ID. Ids are never reused.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Instances the host can still draw on top of the current scene.
    pub fn spare_instances(&self) -> usize {
        self.max_instances.saturating_sub(self.scene.len())
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Queue a DOM update for the runner to apply after this frame.
    pub fn hud(&mut self, command: HudCommand) {
        self.hud.push(command);
    }

    /// Clear per-frame transient data (events, HUD commands).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.hud.clear();
    }

    /// Wall-clock seconds of simulated time since init.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn set_elapsed(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
    }

    /// Enter the terminal state: clear the scene, emit `GAME_OVER` and
    /// reveal the game-over element. Only the first call has any effect.
    pub fn halt(&mut self) -> bool {
        if !self.loop_state.halt() {
            return false;
        }
        self.scene.clear();
        self.highlighted = None;
        self.emit_event(GameEvent::new(GameEvent::GAME_OVER, 0.0));
        self.hud(HudCommand::RevealGameOver);
        log::info!("game over at t={:.2}s", self.elapsed);
        true
    }

    pub fn is_halted(&self) -> bool {
        self.loop_state.is_terminal()
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = Rng::new(seed);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
