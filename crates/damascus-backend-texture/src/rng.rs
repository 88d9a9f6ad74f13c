//! RNG wrapper using PCG32.
//!
//! Random banding is the one generator without a determinism guarantee by
//! default. Passing a seed routes it through this wrapper so tests and
//! reproducible exports get identical stripes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for seeded random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Create an RNG from fresh OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>())
    }

    /// Create from an optional seed, drawing entropy when `None`.
    pub fn from_seed_or_entropy(seed: Option<u32>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }
}
