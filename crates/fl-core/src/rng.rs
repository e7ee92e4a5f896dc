//! Injectable random source for the demo driver.
//!
//! # Determinism strategy
//!
//! The driver never reaches for ambient randomness.  It owns exactly one
//! `DemoRng`, injected at construction: production callers build it from
//! entropy, tests build it from a fixed seed and get identical destination
//! choices and transaction identifiers on every run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A seedable random source wrapped around `SmallRng`.
///
/// `SmallRng` is non-cryptographic by design — everything the demo generates
/// (destination picks, display-only transaction hashes) is presentation
/// state, never a security artifact.
pub struct DemoRng(SmallRng);

impl DemoRng {
    /// Seed deterministically.  The same seed always produces the same run.
    pub fn new(seed: u64) -> Self {
        DemoRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy — for interactive runs where each demo should
    /// look different.
    pub fn from_entropy() -> Self {
        DemoRng(SmallRng::from_entropy())
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose an index uniformly from `0..len`.
    ///
    /// Returns `None` if `len == 0`.
    #[inline]
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.0.gen_range(0..len))
        }
    }

    /// Fill `bytes` with uniform random data.
    #[inline]
    pub fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.0.fill(bytes);
    }
}
