/// Fixed timestep accumulator with a wall-clock reading.
///
/// Simulation steps (spawn roll, 1% approach) run at the fixed rate so their
/// pace does not depend on the display refresh rate. Time-driven values such
/// as spin angles read `elapsed()` instead, which follows real frame time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Total wall-clock seconds seen so far.
    elapsed: f32,
}

/// Upper bound on catch-up steps per frame.
const MAX_STEPS_PER_FRAME: u32 = 10;

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            elapsed: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.max(0.0);
        self.elapsed += frame_dt;
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death after a long tab suspension
        self.accumulator = self.accumulator.min(self.dt * MAX_STEPS_PER_FRAME as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Seconds of wall-clock time since the loop started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        let steps = ts.accumulate(1.0 / 60.0);
        assert_eq!(steps, 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), 10);
    }

    #[test]
    fn elapsed_tracks_wall_clock_not_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        ts.accumulate(1.0);
        ts.accumulate(0.5);
        assert!((ts.elapsed() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn negative_frame_time_is_ignored() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(-1.0), 0);
        assert_eq!(ts.elapsed(), 0.0);
    }
}
