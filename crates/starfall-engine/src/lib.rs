pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, CameraConfig, EngineContext};
pub use api::types::{EntityId, GameEvent, HudCommand};
pub use components::color::{Color, ColorError};
pub use components::entity::Entity;
pub use components::mesh::{Material, MeshComponent, Shading};
pub use core::live::LiveSet;
pub use core::scene::Scene;
pub use core::schedule::{FrameStatus, LoopState};
pub use core::time::FixedTimestep;
pub use renderer::{CameraUniform, MeshInstance, OrbitControls, PerspectiveCamera, RenderBuffer};
pub use input::pointer::{canvas_to_ndc, PointerState};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{AssetManifest, TextureDescriptor};
pub use assets::registry::{TextureId, TextureRegistry};
pub use bridge::protocol::{FrameHeader, ProtocolLayout};
pub use error::AssetError;
pub use systems::lighting::Lighting;
pub use systems::pick::{PickHelper, Ray};
pub use systems::resize::Viewport;
pub use systems::rng::Rng;
pub use systems::spawn::SpawnSettings;
pub use systems::collision::{first_contact, CollisionPolicy};
