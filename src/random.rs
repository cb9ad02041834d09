/*!
# Random Source

All randomness of a generation run is drawn from a single generator passed by
`&mut` through every builder. [`RandomSource`] is the seeded default; any
[`rand::Rng`] works, [`RandomExt`] adds the draws the builders need on top.

```rust
use nestgraphs::random::*;

let mut a = RandomSource::new(42);
let mut b = RandomSource::new(42);
assert_eq!(a.random_int(1, 6), b.random_int(1, 6));
```
*/

use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;
use rand_pcg::Pcg64Mcg;

/// Seeded random number generator owning the state of exactly one generation run.
///
/// Two sources created from the same seed yield identical sequences.
#[derive(Debug)]
pub struct RandomSource {
    rng: Pcg64Mcg,
}

impl RandomSource {
    /// Creates a source from a 64 bit seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl SeedableRng for RandomSource {
    type Seed = <Pcg64Mcg as SeedableRng>::Seed;

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            rng: Pcg64Mcg::from_seed(seed),
        }
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}

/// Draws used by the topology builders, available on every [`Rng`]
pub trait RandomExt: Rng {
    /// Returns a uniform integer in `[from, to]` (both inclusive).
    /// Returns `from` without drawing if the range holds at most one value.
    fn random_int(&mut self, from: u32, to: u32) -> u32 {
        if from >= to {
            from
        } else {
            self.random_range(from..=to)
        }
    }

    /// Returns a uniform index in `0..len`
    /// ** Panics if `len == 0` **
    fn random_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }

    /// Returns a uniform float in `[0, 1)`
    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }

    /// Biased coin: *true* with probability `p`.
    /// Nothing is drawn for `p <= 0`.
    fn chance(&mut self, p: f64) -> bool {
        p > 0.0 && self.uniform() < p
    }

    /// Returns a sample of the standard normal distribution
    fn gaussian(&mut self) -> f64 {
        self.sample(StandardNormal)
    }
}

impl<R: Rng + ?Sized> RandomExt for R {}
