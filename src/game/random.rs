//! Random Source
//!
//! One generator per game, seeded once at startup and reused for every draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Deterministic generator (tests, replays)
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Seed from the wall clock.
    /// Uses miniquad's clock, which works in WASM (SystemTime::now() panics there).
    pub fn from_time() -> Self {
        let seconds = macroquad::miniquad::date::now();
        Self::seeded((seconds * 1_000_000.0) as u64)
    }

    /// Uniform integer in `[min, max]`
    pub fn generate_int(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Uniform float in `[min, max]`. An empty range yields `min`.
    pub fn generate_float(&mut self, min: f32, max: f32) -> f32 {
        if !(min < max) {
            return min;
        }
        self.rng.gen_range(min..=max)
    }
}
