use crate::types::Value;

/// Park–Miller modulus (a Mersenne prime, 2^31 − 1).
const MODULUS: u32 = 2_147_483_647;
/// Park–Miller multiplier.
const MULTIPLIER: u64 = 16_807;
/// Largest f32 below 1.0. The topmost states make the quotient round up to
/// exactly 1.0 when narrowed to f32; draws are pinned here instead.
const UNIT_MAX: Value = 1.0 - f32::EPSILON / 2.0;

/// Deterministic noise source: a minimal-standard linear-congruential
/// generator.
///
/// ```text
/// state = (state * 16807) mod 2147483647
/// out   = (state - 1) / 2147483646        -- in [0, 1)
/// ```
///
/// The same seed always yields the same sequence, which is what makes every
/// derived rendering (jagged edge, fibers, grain) reproducible when it is
/// recomputed from scratch. Consumers create their own instance per call and
/// never share one mutably.
#[derive(Debug, Clone)]
pub struct NoiseSource {
    state: u32,
}

impl NoiseSource {
    /// Creates a generator from an arbitrary seed.
    ///
    /// The recurrence fixes 0 forever, so seeds are folded into
    /// `[1, 2147483646]` before the first draw.
    pub fn new(seed: u32) -> Self {
        let mut state = seed % MODULUS;
        if state == 0 {
            state = 1;
        }
        Self { state }
    }

    /// Advances the generator and returns the next value in `[0, 1)`.
    ///
    /// States from 2147483586 up would round the quotient to exactly 1.0 in
    /// f32; those draws come back as [`UNIT_MAX`], keeping the range
    /// half-open so scaled draws like `(v * n as f32) as usize` stay below
    /// `n`.
    pub fn next_value(&mut self) -> Value {
        self.state = ((self.state as u64 * MULTIPLIER) % MODULUS as u64) as u32;
        ((self.state - 1) as Value / (MODULUS - 1) as Value).min(UNIT_MAX)
    }

    /// Next value mapped linearly into `[lo, hi)`.
    pub fn range(&mut self, lo: Value, hi: Value) -> Value {
        lo + self.next_value() * (hi - lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = NoiseSource::new(42);
        let mut b = NoiseSource::new(42);
        for _ in 0..64 {
            assert_eq!(a.next_value().to_bits(), b.next_value().to_bits());
        }
    }

    #[test]
    fn output_stays_in_unit_interval() {
        let mut noise = NoiseSource::new(7);
        for _ in 0..1000 {
            let v = noise.next_value();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn top_of_range_states_stay_below_one() {
        // 31048880 * 16807 mod 2147483647 = 2147483586, one of the states
        // whose quotient rounds to 1.0 in f32 before the pin.
        let mut noise = NoiseSource::new(31_048_880);
        let v = noise.next_value();
        assert!(v < 1.0);
        assert_eq!(v, UNIT_MAX);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = NoiseSource::new(1);
        let mut b = NoiseSource::new(2);
        let first: Vec<u32> = (0..8).map(|_| a.next_value().to_bits()).collect();
        let second: Vec<u32> = (0..8).map(|_| b.next_value().to_bits()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn degenerate_seeds_do_not_collapse() {
        // 0 and exact multiples of the modulus would pin the raw recurrence
        // at zero; the constructor folds them to a live state instead.
        for seed in [0, MODULUS] {
            let mut noise = NoiseSource::new(seed);
            let a = noise.next_value();
            let b = noise.next_value();
            assert_ne!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn range_respects_bounds() {
        let mut noise = NoiseSource::new(99);
        for _ in 0..100 {
            let v = noise.range(2.0, 8.0);
            assert!((2.0..8.0).contains(&v));
        }
    }
}
