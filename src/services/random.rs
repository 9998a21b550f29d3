use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Uniform random integer provider used for page and movie selection
pub trait RandomSource: Send + Sync {
    /// Uniform value in `0..upper`. `upper` must be non-zero.
    fn below(&self, upper: usize) -> usize;
}

/// Thread-local RNG; holds no state of its own, so requests never contend.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Reproducible sequence from a fixed seed
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&self, upper: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..upper)
    }
}
