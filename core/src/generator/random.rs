use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Draws samples from any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<SmallRng> {
    /// Reproducible source, the same seed always yields the same boards.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MineSource for RngSource<R> {
    fn next_sample(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}
