//! Sources of the uniform jitter mixed into synthesized lunar parameters.
//!
//! Production code draws from an entropy-seeded [`StdRng`]; tests and the
//! "central estimate" mode use [`FixedJitter`] so outputs can be pinned.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform samples on `[low, high)`.
pub trait JitterSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Jitter drawn from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngJitter<R> {
    rng: R,
}

impl<R: Rng> RngJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngJitter<StdRng> {
    /// Reproducible jitter for `Some(seed)`, entropy-seeded for `None`.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }
}

impl<R: Rng> JitterSource for RngJitter<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..high)
    }
}

/// Deterministic jitter at a fixed fraction of each interval.
///
/// `FixedJitter(0.0)` always returns `low`; [`FixedJitter::center`] returns
/// the midpoint, which is zero for the symmetric intervals used here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl FixedJitter {
    pub const fn center() -> Self {
        Self(0.5)
    }
}

impl JitterSource for FixedJitter {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_jitter_endpoints() {
        assert_eq!(FixedJitter(0.0).uniform(-0.5, 0.5), -0.5);
        assert_eq!(FixedJitter::center().uniform(-0.5, 0.5), 0.0);
        assert_eq!(FixedJitter::center().uniform(-0.15, 0.15), 0.0);
    }

    #[test]
    fn rng_jitter_stays_in_interval() {
        let mut j = RngJitter::seeded(Some(7));
        for _ in 0..1000 {
            let v = j.uniform(-0.15, 0.15);
            assert!((-0.15..0.15).contains(&v), "v = {v}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RngJitter::seeded(Some(42));
        let mut b = RngJitter::seeded(Some(42));
        for _ in 0..16 {
            assert_eq!(a.uniform(-0.5, 0.5), b.uniform(-0.5, 0.5));
        }
    }
}
