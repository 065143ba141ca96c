//! Buffers shared between the WASM module and the host renderer.
//! Must stay in sync with the host's `protocol.ts`.
//!
//! Four separate regions, each behind its own pointer export
//! (all values in f32 / 4 bytes):
//! ```text
//! header     16 floats                  get_header_ptr
//! camera     20 floats                  get_camera_ptr
//! instances  instance_count × 16 floats get_instances_ptr
//! events     event_count × 4 floats     get_game_events_ptr
//! ```
//!
//! Counts and capacities are written into the header every frame.
//! The host re-reads the pointers after each tick, since the instance and
//! event vectors may move when they grow.

use crate::api::game::GameConfig;
use crate::api::types::{EntityId, GameEvent};
use crate::core::schedule::LoopState;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::MeshInstance;
use crate::systems::lighting::Lighting;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_LOOP_STATE: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_BACKING_WIDTH: usize = 7;
pub const HEADER_BACKING_HEIGHT: usize = 8;
pub const HEADER_AMBIENT_R: usize = 9;
pub const HEADER_AMBIENT_G: usize = 10;
pub const HEADER_AMBIENT_B: usize = 11;
pub const HEADER_AMBIENT_INTENSITY: usize = 12;
pub const HEADER_RESIZED: usize = 13;
pub const HEADER_PICKED_ID: usize = 14;
pub const HEADER_RESERVED: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Floats per render instance (wire format).
pub const INSTANCE_FLOATS: usize = MeshInstance::FLOATS;

/// Floats per game event: kind, a, b, c (wire format).
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;

/// Per-frame values that go into the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameHeader {
    pub frame: u32,
    pub loop_state: LoopState,
    pub instance_count: u32,
    pub event_count: u32,
    pub backing_size: (u32, u32),
    pub lighting: Lighting,
    /// The drawing buffer changed size this frame.
    pub resized: bool,
    pub picked: Option<EntityId>,
}

/// Capacities published to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_events: usize,
}

impl ProtocolLayout {
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        Self {
            max_instances,
            max_events,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }

    /// Fill the header section. Counts are clamped to the capacities.
    pub fn write_header(&self, frame: &FrameHeader, header: &mut [f32; HEADER_FLOATS]) {
        let [r, g, b, intensity] = frame.lighting.to_floats();

        header[HEADER_FRAME_COUNTER] = frame.frame as f32;
        header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        header[HEADER_LOOP_STATE] = frame.loop_state.as_f32();
        header[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        header[HEADER_INSTANCE_COUNT] = (frame.instance_count as usize).min(self.max_instances) as f32;
        header[HEADER_MAX_EVENTS] = self.max_events as f32;
        header[HEADER_EVENT_COUNT] = (frame.event_count as usize).min(self.max_events) as f32;
        header[HEADER_BACKING_WIDTH] = frame.backing_size.0 as f32;
        header[HEADER_BACKING_HEIGHT] = frame.backing_size.1 as f32;
        header[HEADER_AMBIENT_R] = r;
        header[HEADER_AMBIENT_G] = g;
        header[HEADER_AMBIENT_B] = b;
        header[HEADER_AMBIENT_INTENSITY] = intensity;
        header[HEADER_RESIZED] = if frame.resized { 1.0 } else { 0.0 };
        header[HEADER_PICKED_ID] = frame.picked.map_or(-1.0, |id| id.0 as f32);
        header[HEADER_RESERVED] = 0.0;
    }
}
