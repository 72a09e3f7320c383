//! Random number generation with hardware entropy.
//!
//! Everything that needs randomness takes a `&mut impl RandomSource`, so the
//! process-wide generator lives in `main` and tests can swap in a seeded one.

mod hw;
mod primes;

use zeroize::Zeroize;

use primes::PRIMES;

// =============================================================================
// Capability
// =============================================================================

/// A source of uniformly distributed 64-bit words.
///
/// Only `next_u64` is required; index selection and shuffling are built on
/// top of it.
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform index in `0..n`. Rejection sampling keeps it free of modulo bias.
    ///
    /// Panics if `n` is zero.
    fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot sample from an empty range");
        let n = n as u64;
        let limit = u64::MAX - u64::MAX % n;
        loop {
            let x = self.next_u64();
            if x < limit {
                return (x % n) as usize;
            }
        }
    }

    /// Pick one element uniformly. `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.below(items.len()))
    }

    /// Fisher-Yates shuffle in place.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

// =============================================================================
// RNG
// =============================================================================

// Stands in for the hardware reading when seeded (odd, golden ratio).
const SEEDED_ENTROPY: u64 = 0x9e37_79b9_7f4a_7c15;

/// Process-local generator.
///
/// Each step mixes a fresh entropy reading into the state, multiplies by a
/// prime picked from the mixed value, and runs the SplitMix64 finalizer over
/// the result. A seeded generator skips the hardware reading and is fully
/// deterministic.
#[derive(Clone)]
pub struct Rand {
    state: u64,
    seeded: bool,
}

impl Rand {
    pub fn new() -> Self {
        let pid = std::process::id() as u64;
        Rand {
            state: hw::entropy() ^ pid.rotate_left(32),
            seeded: false,
        }
    }

    /// Deterministic generator for tests and reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Rand {
            state: seed,
            seeded: true,
        }
    }

    pub fn entropy_source(&self) -> &'static str {
        if self.seeded { "fixed seed" } else { hw::source_name() }
    }

    #[inline(always)]
    fn entropy(&self) -> u64 {
        if self.seeded {
            SEEDED_ENTROPY
        } else {
            hw::entropy()
        }
    }
}

impl Default for Rand {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for Rand {
    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        let ent = self.entropy();

        // Mix entropy into prime selection
        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

        // State transition: rotate, multiply by prime, XOR entropy
        self.state = self.state.rotate_left(17).wrapping_mul(PRIMES[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

impl Drop for Rand {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
