use std::fmt;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the random tie-breaking term added to article scores.
pub trait JitterSource {
    /// Returns a value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<J: JitterSource + ?Sized> JitterSource for &mut J {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Uniform jitter backed by a `rand` generator.
pub struct RandomJitter<R = ThreadRng> {
    rng: R,
}

impl<R> fmt::Debug for RandomJitter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomJitter").finish()
    }
}

impl RandomJitter<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomJitter<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomJitter<StdRng> {
    /// Reproducible jitter, for runs that must rank the same way twice.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Disables jitter entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroJitter;

impl JitterSource for ZeroJitter {
    fn next_unit(&mut self) -> f64 {
        0.0
    }
}

/// Replays a fixed list of values, cycling when exhausted. An empty list
/// behaves like [`ZeroJitter`].
#[derive(Debug, Clone, Default)]
pub struct SequenceJitter {
    values: Vec<f64>,
    next: usize,
}

impl SequenceJitter {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl JitterSource for SequenceJitter {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_jitter_in_unit_range() {
        let mut jitter = RandomJitter::new();
        for _ in 0..1_000 {
            let value = jitter.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_seeded_jitter_is_reproducible() {
        let mut a = RandomJitter::seeded(7);
        let mut b = RandomJitter::seeded(7);
        let xs: Vec<f64> = (0..16).map(|_| a.next_unit()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.next_unit()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut jitter = SequenceJitter::new(vec![0.25, 0.5]);
        assert_eq!(jitter.next_unit(), 0.25);
        assert_eq!(jitter.next_unit(), 0.5);
        assert_eq!(jitter.next_unit(), 0.25);
        assert_eq!(SequenceJitter::default().next_unit(), 0.0);
    }
}
