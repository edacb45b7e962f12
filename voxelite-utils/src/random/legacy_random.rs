//! 48-bit linear congruential generator with `java.util.Random` semantics.
//!
//! Chosen for the permutation-table shuffle because its output for a given
//! seed is fixed by a published algorithm, so heightmaps regenerate
//! identically on every platform and toolchain.

use crate::random::Random;

const MULTIPLIER: u64 = 0x5DEE_CE66D;
const INCREMENT: u64 = 0xB;
const MASK_48: u64 = (1 << 48) - 1;
/// Scale factor mapping a 53-bit integer onto `[0, 1)`.
const DOUBLE_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Linear congruential generator over a 48-bit state.
#[derive(Debug, Clone)]
pub struct LegacyRandom {
    seed: u64,
}

impl LegacyRandom {
    /// Advance the state and return the high `bits` bits.
    #[inline]
    fn next_bits(&mut self, bits: u32) -> i32 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & MASK_48;
        (self.seed >> (48 - bits)) as i32
    }
}

impl Random for LegacyRandom {
    fn from_seed(seed: u64) -> Self {
        Self {
            seed: (seed ^ MULTIPLIER) & MASK_48,
        }
    }

    #[inline]
    fn next_i32(&mut self) -> i32 {
        self.next_bits(32)
    }

    #[inline]
    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        debug_assert!(bound > 0, "bound must be positive, got {bound}");

        // Power of two: take the high bits directly.
        if (bound & bound.wrapping_neg()) == bound {
            return ((i64::from(bound) * i64::from(self.next_bits(31))) >> 31) as i32;
        }

        // Rejection loop discarding the biased tail of the 31-bit range.
        loop {
            let bits = self.next_bits(31);
            let value = bits % bound;
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next_bits(26)) << 27;
        let low = i64::from(self.next_bits(27));
        (high + low) as f64 * DOUBLE_UNIT
    }
}
