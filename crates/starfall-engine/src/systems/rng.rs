//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic and fast; the web runner reseeds it from the clock.

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound). Zero bound yields 0.
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        if upper_bound == 0 {
            return 0;
        }
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Uniform float in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// `floor(random * (max - min + 1) + min)`.
    ///
    /// Inclusive of both ends when `min <= max`. With reversed bounds the
    /// span goes negative and the result lands in `[max + 1, min]`, which the
    /// comet spawner relies on for its left band.
    pub fn between(&mut self, min: i32, max: i32) -> i32 {
        let span = (max - min + 1) as f64;
        (self.next_f64() * span + min as f64).floor() as i32
    }

    /// Fair coin.
    pub fn coin(&mut self) -> bool {
        self.between(0, 1) == 0
    }
}
