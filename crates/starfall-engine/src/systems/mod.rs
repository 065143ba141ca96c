pub mod collision;
pub mod lighting;
pub mod motion;
pub mod pick;
pub mod render;
pub mod resize;
pub mod rng;
pub mod spawn;
