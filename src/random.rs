//! Random number capability
//!
//! Galaxy generation, sector population, phaser variance and Klingon fire
//! all draw from a [`RandomSource`] handed in by the caller, so a game can
//! be replayed from a seed or driven by a fixed script in tests.

use rand::rngs::StdRng;
use rand::Rng;
use std::collections::VecDeque;

/// Source of uniform random draws.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `low..=high`.
    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        let span = (high - low + 1) as f64;
        let offset = (self.next_unit() * span).floor() as i32;
        (low + offset).min(high)
    }
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_in_range(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.gen_range(low..=high)
    }
}

/// Deterministic source that replays a fixed list of unit draws.
///
/// Once the script is used up it continues with a fixed splitmix64 stream,
/// so unscripted draws stay reproducible and rejection sampling such as
/// sector placement always terminates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<f64>,
    fallback_step: u64,
}

impl ScriptedRandom {
    pub fn new<I: IntoIterator<Item = f64>>(units: I) -> Self {
        ScriptedRandom {
            script: units.into_iter().collect(),
            fallback_step: 0,
        }
    }

    /// Queue a raw unit draw.
    pub fn push_unit(&mut self, unit: f64) -> &mut Self {
        self.script.push_back(unit.clamp(0.0, 0.999_999));
        self
    }

    /// Queue the draw that makes `next_in_range(low, high)` return `value`.
    pub fn push_in_range(&mut self, low: i32, high: i32, value: i32) -> &mut Self {
        let span = (high - low + 1).max(1) as f64;
        let unit = ((value - low) as f64 + 0.5) / span;
        self.push_unit(unit)
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if let Some(unit) = self.script.pop_front() {
            return unit;
        }
        self.fallback_step = self.fallback_step.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.fallback_step;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }
}
