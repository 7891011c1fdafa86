use crate::RandSource;
use rand::{RngCore, SeedableRng, rng, rngs::SmallRng};

/// A `RandSource` owned by a single worker.
///
/// Wraps a [`SmallRng`] seeded from the thread-local, OS-seeded generator,
/// so every worker gets an independent stream and no generator state is ever
/// shared between threads. Values are 63-bit non-negative integers.
///
/// Not cryptographically secure; it only has to be fast.
#[derive(Clone, Debug)]
pub struct WorkerRandom {
    rng: SmallRng,
}

impl WorkerRandom {
    /// Creates a source with a fresh, independent seed.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rng()),
        }
    }

    /// Creates a source with a fixed seed, producing a reproducible stream.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for WorkerRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandSource<u64> for WorkerRandom {
    fn rand(&mut self) -> u64 {
        self.rng.next_u64() >> 1
    }
}
