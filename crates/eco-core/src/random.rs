//! Random number sources.
//!
//! Every probabilistic decision in the simulation goes through a
//! [`RandomSource`] handle that the engine owns and passes down explicitly.
//! Given the same seed and the same sequence of calls, a run is exactly
//! reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// The draws the simulation needs
pub trait RandomSource {
    /// Uniform boolean
    fn next_bool(&mut self) -> bool;

    /// Uniform integer in `[0, bound)`. A zero bound yields 0.
    fn next_int(&mut self, bound: u32) -> u32;

    /// Uniform double in `[0, 1)`
    fn next_double(&mut self) -> f64;
}

/// Seeded ChaCha8 generator
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_bool(&mut self) -> bool {
        self.rng.gen()
    }

    fn next_int(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }

    fn next_double(&mut self) -> f64 {
        self.rng.gen()
    }
}

/// Replays fixed draws, for tests that need to force an outcome.
///
/// Each kind of draw has its own queue. An exhausted queue yields `false`,
/// `0` or `0.0`. Integer draws are clamped below their bound.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    bools: VecDeque<bool>,
    ints: VecDeque<u32>,
    doubles: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bools(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.bools.extend(values);
        self
    }

    pub fn with_ints(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(values);
        self
    }

    pub fn with_doubles(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.doubles.extend(values);
        self
    }

    /// Number of scripted draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.bools.len() + self.ints.len() + self.doubles.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_bool(&mut self) -> bool {
        self.bools.pop_front().unwrap_or(false)
    }

    fn next_int(&mut self, bound: u32) -> u32 {
        let value = self.ints.pop_front().unwrap_or(0);
        value.min(bound.saturating_sub(1))
    }

    fn next_double(&mut self) -> f64 {
        self.doubles.pop_front().unwrap_or(0.0)
    }
}
