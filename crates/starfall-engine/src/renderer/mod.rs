pub mod camera;
pub mod instance;
pub mod orbit;

pub use camera::{CameraUniform, PerspectiveCamera};
pub use instance::{MeshInstance, RenderBuffer};
pub use orbit::OrbitControls;
