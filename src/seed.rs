//! Splittable pseudo-random seed.
//!
//! [`Seed`] is the single source of randomness threaded through every
//! [`crate::generator::Generator`]. Unlike a conventional PRNG handle, it is
//! never mutated in place: [`Seed::split`] is a pure function from one seed
//! to two independent seeds, which is what lets sibling sub-generators draw
//! from streams that do not interfere with each other, and what makes a
//! whole generation run reproducible from a single starting integer.

use core::fmt;
use fastrand::Rng;

/// Opaque, splittable pseudo-random state.
///
/// `Seed` is `Copy`: threading it through a generator pipeline never
/// requires cloning or locking, only passing by value. Two seeds obtained
/// from the same call to [`Seed::split`] are independent streams; the same
/// call, repeated, always returns the same pair.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Seed").field(&self.0).finish()
    }
}

// The SplitMix64 constants (Steele, Lea & Flood 2014), the same avalanche
// mix most splittable generators (Haskell's `splitmix`, JDK's
// `SplittableRandom`) build on. We only borrow the finalizer, not the whole
// generator: each `split` mixes the parent state with two distinct odd
// constants to produce two children that are each, independently, good
// seeds for `fastrand`.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_LEFT: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_RIGHT: u64 = 0x94D0_49BB_1331_11EB;

#[inline]
const fn mix(value: u64) -> u64 {
    let z = value.wrapping_add(GOLDEN_GAMMA);
    let x = (z ^ (z >> 30)).wrapping_mul(MIX_LEFT);
    let x = (x ^ (x >> 27)).wrapping_mul(MIX_RIGHT);
    x ^ (x >> 31)
}

impl Seed {
    /// Derives a seed from an integer, typically the test framework's
    /// reproducibility seed.
    #[inline]
    pub const fn new_seed(value: u64) -> Self {
        Seed(value)
    }

    /// Produces a seed sourced from the process-wide entropy pool. Intended
    /// for [`crate::sample::pick`] and other documentation-only entry
    /// points; [`crate::runner::check_all`] always takes an explicit seed so
    /// that a failing run stays reproducible.
    pub fn fresh() -> Self {
        Seed(fastrand::u64(..))
    }

    /// The raw integer behind this seed. Exposed so a [`crate::runner`]
    /// failure report can print the seed that reproduces it.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Deterministically splits this seed into two independent streams.
    /// `split` never mutates or consumes `self` in a way observable to the
    /// caller (it takes `self` by value because `Seed` is `Copy`); calling it
    /// twice on equal seeds always returns equal pairs.
    #[inline]
    pub const fn split(self) -> (Seed, Seed) {
        let left = mix(self.0);
        // Re-mixing `left` with the parent's own mixed state (rather than
        // mixing `self.0` twice with the same constants) keeps the two
        // children from being related by a single, guessable XOR.
        let right = mix(left ^ self.0.rotate_left(32));
        (Seed(left), Seed(right))
    }

    /// Splits into `n` independent streams in one call, useful when a
    /// combinator needs more than two children (e.g. `tuple` of arity > 2).
    pub fn split_n(self, n: usize) -> Vec<Seed> {
        let mut seeds = Vec::with_capacity(n);
        let mut current = self;
        for _ in 0..n {
            let (head, rest) = current.split();
            seeds.push(head);
            current = rest;
        }
        seeds
    }

    /// Returns an integer uniformly distributed in `[lo, hi]`, normalizing
    /// reversed ranges by swapping them. Does not consume or mutate `self`;
    /// callers that need an independent subsequent draw must `split` first.
    pub fn uniform_in_range(self, lo: i128, hi: i128) -> i128 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let span = (hi - lo) as u128 + 1;
        let mut rng = Rng::with_seed(self.0);
        lo + rng.u128(0..span) as i128
    }

    /// Returns a float uniformly distributed in `[0.0, 1.0)`.
    pub fn uniform_float(self) -> f64 {
        let mut rng = Rng::with_seed(self.0);
        rng.f64()
    }
}
