use glam::Vec3;

/// Fraction of the remaining distance covered per simulation step.
pub const APPROACH_FRACTION: f32 = 0.01;

/// Move `pos` a fixed fraction of the way toward `target`.
/// Repeated application is an exponential approach that never overshoots.
#[inline]
pub fn approach(pos: Vec3, target: Vec3, fraction: f32) -> Vec3 {
    pos + (target - pos) * fraction
}

/// Whether `pos` is at or inside `threshold` of `target`.
#[inline]
pub fn within(pos: Vec3, target: Vec3, threshold: f32) -> bool {
    pos.distance(target) <= threshold
}

/// Spin angle that depends only on elapsed time, not on how many frames ran.
#[inline]
pub fn spin(elapsed: f32, rate: f32) -> f32 {
    elapsed * rate
}
