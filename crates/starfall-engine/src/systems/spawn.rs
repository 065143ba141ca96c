use crate::systems::rng::Rng;

/// The draw that triggers a spawn.
pub const SPAWN_SENTINEL: u32 = 1;

pub const RATE_MIN: u32 = 10;
pub const RATE_MAX: u32 = 100;
pub const RATE_STEP: u32 = 10;

/// Live-tunable spawn rate. Each step spawns with probability `1 / rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnSettings {
    rate: u32,
}

impl SpawnSettings {
    pub fn new(rate: u32) -> Self {
        let mut settings = Self { rate: RATE_MIN };
        settings.set_rate(rate);
        settings
    }

    /// Clamp into `RATE_MIN..=RATE_MAX` and snap to the nearest `RATE_STEP`,
    /// as the debug slider does.
    pub fn set_rate(&mut self, rate: u32) -> u32 {
        let clamped = rate.clamp(RATE_MIN, RATE_MAX);
        let snapped = (clamped + RATE_STEP / 2) / RATE_STEP * RATE_STEP;
        self.rate = snapped.clamp(RATE_MIN, RATE_MAX);
        self.rate
    }

    /// Slider values arrive as floats; NaN and negatives land on the minimum.
    pub fn set_rate_f32(&mut self, rate: f32) -> u32 {
        let rate = if rate.is_finite() && rate > 0.0 { rate.round() as u32 } else { 0 };
        self.set_rate(rate)
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// One Bernoulli trial: draw in `[0, rate)` and compare to the sentinel.
    pub fn roll(&self, rng: &mut Rng) -> bool {
        rng.next_int(self.rate) == SPAWN_SENTINEL
    }
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self::new(RATE_MIN)
    }
}
