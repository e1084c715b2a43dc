//! Seedable random source shared by every stochastic operator.
//!
//! A [`RandomSource`] is owned by the engine and lent (`&mut`) to selection
//! strategies, crossover and mutation. There is no process-wide generator:
//! reproducibility comes from seeding the source explicitly, and concurrent
//! engines each get their own stream (see [`RandomSource::fork`]).

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Distribution, Poisson};

/// Pseudo-random engine supplying uniform reals, uniform integers and
/// Poisson-distributed counts.
///
/// Implements [`RngCore`], so it can be passed to any `rand` API
/// (`shuffle`, `seq::index::sample`, ...).
///
/// # Examples
///
/// ```
/// use u_evolve::RandomSource;
///
/// let mut a = RandomSource::from_seed(7);
/// let mut b = RandomSource::from_seed(7);
/// assert_eq!(a.uniform_int(0, 100), b.uniform_int(0, 100));
/// ```
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creates a deterministic source from a 64-bit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from a non-deterministic 64-bit seed.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Derives an independent stream, advancing this one.
    pub fn fork(&mut self) -> Self {
        Self::from_seed(self.rng.next_u64())
    }

    /// Uniform real in `[0, 1)`.
    #[inline]
    pub fn uniform_real(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform integer in `[min, max]` (both inclusive).
    ///
    /// # Panics
    /// Panics if `min > max`.
    #[inline]
    pub fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "uniform_int: min ({min}) > max ({max})");
        self.rng.random_range(min..=max)
    }

    /// Poisson-distributed count with the given mean.
    ///
    /// A non-positive or non-finite mean yields 0.
    pub fn poisson(&mut self, mean: f64) -> u64 {
        if !mean.is_finite() || mean <= 0.0 {
            return 0;
        }
        match Poisson::new(mean) {
            Ok(dist) => {
                let count: f64 = dist.sample(&mut self.rng);
                count as u64
            }
            Err(_) => 0,
        }
    }
}

impl RngCore for RandomSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
