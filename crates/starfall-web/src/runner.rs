use starfall_engine::{
    Game, GameConfig, EngineContext,
    InputEvent, InputQueue, RenderBuffer, CameraUniform,
    FixedTimestep, FrameHeader, FrameStatus, ProtocolLayout,
    AssetError, AssetManifest, TextureRegistry, Viewport, canvas_to_ndc,
};
use starfall_engine::bridge::protocol::HEADER_FLOATS;
use starfall_engine::systems::render::build_render_buffer;
use glam::Vec2;
use crate::dom::{DomError, DomSurface};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `comet-clicker`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
///
/// Without an attached [`DomSurface`] the runner is fully headless: the host
/// reports sizes through [`GameRunner::resize`] and pointer coordinates are
/// taken as canvas-relative.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: GameConfig,
    layout: ProtocolLayout,
    viewport: Viewport,
    surface: Option<DomSurface>,
    header: [f32; HEADER_FLOATS],
    camera: CameraUniform,
    frame: u32,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            game,
            ctx: EngineContext::from_config(&config),
            input: InputQueue::new(),
            render_buffer,
            timestep,
            layout,
            config,
            viewport: Viewport::default(),
            surface: None,
            header: [0.0; HEADER_FLOATS],
            camera: CameraUniform::default(),
            frame: 0,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.timestep = FixedTimestep::new(self.config.fixed_dt);
        self.game.init(&mut self.ctx);
        self.camera = self.ctx.camera.uniform();
        self.initialized = true;
    }

    /// Replace the RNG seed (the export layer seeds from the clock).
    pub fn reseed(&mut self, seed: u64) {
        self.ctx.reseed(seed);
    }

    /// Bind the canvas and HUD elements. The viewport starts from the
    /// canvas's current drawing-buffer size.
    pub fn attach(&mut self, canvas_id: &str, score_id: &str, game_over_id: &str) -> Result<(), DomError> {
        let surface = DomSurface::bind(canvas_id, score_id, game_over_id)?;
        let (bw, bh) = surface.backing_size();
        let (cw, ch, dpr) = surface.client_size();
        self.viewport = Viewport::new(bw, bh);
        self.viewport.set_client_size(cw, ch, dpr);
        self.surface = Some(surface);
        log::info!("attached to #{canvas_id} ({bw}x{bh})");
        Ok(())
    }

    /// Parse a texture manifest and hand the registry to the game.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), AssetError> {
        let manifest = AssetManifest::from_json(json)?;
        self.ctx.textures = TextureRegistry::from_manifest(&manifest);
        self.game.assets_loaded(&mut self.ctx)?;
        log::info!("manifest loaded: {} textures", self.ctx.textures.len());
        Ok(())
    }

    /// Host-reported canvas size, for pages that drive the runner without a DOM surface.
    pub fn resize(&mut self, client_width: f32, client_height: f32, pixel_ratio: f32) {
        self.viewport.set_client_size(client_width, client_height, pixel_ratio);
    }

    fn pointer_ndc(&self, client_x: f32, client_y: f32) -> Option<Vec2> {
        let (x, y) = match &self.surface {
            Some(surface) => surface.to_canvas(client_x, client_y),
            None => (client_x, client_y),
        };
        let (w, h) = self.viewport.client_size();
        canvas_to_ndc(x, y, w, h)
    }

    /// The pointer state is updated immediately so the next pick sees it;
    /// the event is also queued for the game.
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        if let Some(ndc) = self.pointer_ndc(client_x, client_y) {
            self.ctx.pointer.set(ndc);
            self.input.push(InputEvent::PointerMove { x: ndc.x, y: ndc.y });
        }
    }

    pub fn pointer_down(&mut self, client_x: f32, client_y: f32) {
        if let Some(ndc) = self.pointer_ndc(client_x, client_y) {
            self.ctx.pointer.set(ndc);
            self.input.push(InputEvent::PointerDown { x: ndc.x, y: ndc.y });
        }
    }

    pub fn pointer_up(&mut self, client_x: f32, client_y: f32) {
        if let Some(ndc) = self.pointer_ndc(client_x, client_y) {
            self.input.push(InputEvent::PointerUp { x: ndc.x, y: ndc.y });
        }
    }

    pub fn pointer_leave(&mut self) {
        self.ctx.pointer.clear();
        self.input.push(InputEvent::PointerLeave);
    }

    pub fn wheel(&mut self, delta: f32) {
        self.input.push(InputEvent::Wheel { delta });
    }

    pub fn push_custom(&mut self, kind: u32, a: f32, b: f32, c: f32) {
        self.input.push(InputEvent::Custom { kind, a, b, c });
    }

    /// Run one frame: resize check, fixed simulation steps, render buffer,
    /// HUD updates, header. Once the game halts, later ticks do nothing.
    pub fn tick(&mut self, dt: f32) -> FrameStatus {
        if !self.initialized {
            return FrameStatus::Continue;
        }
        if self.ctx.is_halted() {
            return FrameStatus::Halted;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        let resized = self.sync_viewport();

        let steps = self.timestep.accumulate(dt);
        self.ctx.set_elapsed(self.timestep.elapsed());
        for step in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
            // Input belongs to the first step only
            if step == 0 {
                self.input.drain();
            }
            if self.ctx.is_halted() {
                break;
            }
        }

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
        self.camera = self.ctx.camera.uniform();
        self.apply_hud();

        self.frame = self.frame.wrapping_add(1);
        let frame = FrameHeader {
            frame: self.frame,
            loop_state: self.ctx.loop_state(),
            instance_count: self.render_buffer.instance_count(),
            event_count: self.ctx.events.len() as u32,
            backing_size: self.viewport.backing_size(),
            lighting: self.ctx.lighting,
            resized,
            picked: self.ctx.highlighted,
        };
        self.layout.write_header(&frame, &mut self.header);

        FrameStatus::from(self.ctx.loop_state())
    }

    /// Compare the displayed size with the drawing buffer and resize on mismatch.
    fn sync_viewport(&mut self) -> bool {
        if let Some(surface) = &self.surface {
            let (w, h, dpr) = surface.client_size();
            self.viewport.set_client_size(w, h, dpr);
        }
        if !self.viewport.resize_if_needed() {
            return false;
        }

        let (bw, bh) = self.viewport.backing_size();
        if let Some(surface) = &self.surface {
            surface.set_backing_size(bw, bh);
        }
        if let Some(aspect) = self.viewport.aspect() {
            self.ctx.camera.set_aspect(aspect);
        }
        log::info!("drawing buffer resized to {bw}x{bh}");
        true
    }

    fn apply_hud(&self) {
        let Some(surface) = &self.surface else {
            return;
        };
        for command in &self.ctx.hud {
            if let Err(err) = surface.apply(command) {
                log::warn!("hud update failed: {err}");
            }
        }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    // ---- Pointer accessors for host-side buffer reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header_len(&self) -> u32 {
        HEADER_FLOATS as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count().min(self.layout.max_instances as u32)
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        (self.ctx.events.len() as u32).min(self.layout.max_events as u32)
    }

    pub fn backing_width(&self) -> u32 {
        self.viewport.backing_size().0
    }

    pub fn backing_height(&self) -> u32 {
        self.viewport.backing_size().1
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }
}
