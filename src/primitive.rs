//! Primitive generators: integers, floats, booleans, bytes.
//!
//! The shrink strategy for every numeric type here is the same one
//! `checkito::state`'s `integer!`/`ranges!` macros use: shrink toward an
//! "origin" (zero if the range contains it, otherwise whichever bound is
//! closest to zero) by repeated halving of the distance, so a failing large
//! number shrinks down in `O(log n)` steps rather than one-at-a-time.

use core::ops::{Bound, RangeBounds};

use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::seed::Seed;
use crate::size::Size;
use crate::tree::LazyTree;

/// Normalizes any `RangeBounds<i128>` into an inclusive `[lo, hi]` pair,
/// turning `Excluded` endpoints into the adjacent `Included` ones. Returns
/// [`GeneratorError::EmptyRange`] if no integers satisfy the bounds (e.g.
/// `5..5` or `5..=4`).
pub fn normalize_range(range: impl RangeBounds<i128>) -> Result<(i128, i128), GeneratorError> {
    let lo = match range.start_bound() {
        Bound::Included(&lo) => lo,
        Bound::Excluded(&lo) => lo.saturating_add(1),
        Bound::Unbounded => i128::MIN,
    };
    let hi = match range.end_bound() {
        Bound::Included(&hi) => hi,
        Bound::Excluded(&hi) => hi.saturating_sub(1),
        Bound::Unbounded => i128::MAX,
    };
    if lo > hi {
        Err(GeneratorError::EmptyRange)
    } else {
        Ok((lo, hi))
    }
}

fn origin(lo: i128, hi: i128) -> i128 {
    0.clamp(lo, hi)
}

/// Halves the remaining distance from `from` to `toward`, offering the
/// boldest cut (closest to `toward`) first and the most conservative cut
/// (closest to `from`) last. Each step takes the *ceiling* of half the
/// previous distance, not the floor: a plain `distance >> k` would stall one
/// step early on odd distances (e.g. `100 -> 88` instead of `100 -> 87`),
/// which would also mean it never converges tightly on a minimal
/// counterexample.
fn shrink_steps(from: i128, toward: i128) -> Vec<i128> {
    if from == toward {
        return Vec::new();
    }
    let mut steps = Vec::new();
    let mut distance = from - toward;
    loop {
        let next = distance - distance / 2;
        if next == distance {
            break;
        }
        distance = next;
        steps.push(from - distance);
    }
    steps
}

pub(crate) fn integer_tree(value: i128, toward: i128) -> LazyTree<i128> {
    LazyTree::new(value, move || {
        Box::new(
            shrink_steps(value, toward)
                .into_iter()
                .map(move |step| integer_tree(step, toward)),
        )
    })
}

macro_rules! integer_in_range_for {
    ($name:ident, $ty:ty) => {
        /// Generates a value of this integer type within `range`, shrinking
        /// toward zero (or the closest-to-zero bound, if zero is outside the
        /// range).
        pub fn $name(range: impl RangeBounds<$ty>) -> IntegerInRange<$ty> {
            let lo = match range.start_bound() {
                Bound::Included(&lo) => lo as i128,
                Bound::Excluded(&lo) => lo as i128 + 1,
                Bound::Unbounded => <$ty>::MIN as i128,
            };
            let hi = match range.end_bound() {
                Bound::Included(&hi) => hi as i128,
                Bound::Excluded(&hi) => hi as i128 - 1,
                Bound::Unbounded => <$ty>::MAX as i128,
            };
            IntegerInRange { lo, hi, _marker: core::marker::PhantomData }
        }
    };
}

/// Generates values of a fixed integer type within an inclusive-normalized
/// range.
pub struct IntegerInRange<T> {
    lo: i128,
    hi: i128,
    _marker: core::marker::PhantomData<T>,
}

macro_rules! impl_integer_generator {
    ($ty:ty) => {
        impl Generator for IntegerInRange<$ty> {
            type Item = $ty;

            fn generate(&self, seed: Seed, _size: Size) -> LazyTree<$ty> {
                if self.lo > self.hi {
                    panic!("{}", GeneratorError::EmptyRange);
                }
                let value = seed.uniform_in_range(self.lo, self.hi);
                let toward = origin(self.lo, self.hi);
                integer_tree(value, toward).map(|v| v as $ty)
            }
        }
    };
}

integer_in_range_for!(i8_in_range, i8);
integer_in_range_for!(i16_in_range, i16);
integer_in_range_for!(i32_in_range, i32);
integer_in_range_for!(i64_in_range, i64);
integer_in_range_for!(u8_in_range, u8);
integer_in_range_for!(u16_in_range, u16);
integer_in_range_for!(u32_in_range, u32);
integer_in_range_for!(u64_in_range, u64);
integer_in_range_for!(usize_in_range, usize);
integer_in_range_for!(isize_in_range, isize);

impl_integer_generator!(i8);
impl_integer_generator!(i16);
impl_integer_generator!(i32);
impl_integer_generator!(i64);
impl_integer_generator!(u8);
impl_integer_generator!(u16);
impl_integer_generator!(u32);
impl_integer_generator!(u64);
impl_integer_generator!(usize);
impl_integer_generator!(isize);

/// `i64` is the default integer type for generic call sites (`integer`,
/// `positive_integer`); narrower types are reached via the `*_in_range`
/// functions above.
pub fn integer_in_range(range: impl RangeBounds<i64>) -> IntegerInRange<i64> {
    i64_in_range(range)
}

/// The full range of `i64`, scaled so that `size` bounds the magnitude
/// rather than always spanning the whole type — matches the "size as a
/// hint, not a hard limit" contract by widening geometrically with size.
pub fn integer() -> Integer {
    Integer
}

pub struct Integer;

impl Generator for Integer {
    type Item = i64;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<i64> {
        let bound = (size.as_i128() + 1).saturating_mul(10).min(i64::MAX as i128);
        i64_in_range(-bound as i64..=bound as i64).generate(seed, size)
    }
}

/// Non-negative `i64` values, bounded by `size` the same way [`integer`] is.
pub fn positive_integer() -> PositiveInteger {
    PositiveInteger
}

pub struct PositiveInteger;

impl Generator for PositiveInteger {
    type Item = i64;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<i64> {
        let bound = (size.as_i128() + 1).saturating_mul(10).min(i64::MAX as i128);
        i64_in_range(0..=bound as i64).generate(seed, size)
    }
}

/// A single byte, `0..=255`, shrinking toward zero.
pub fn byte() -> IntegerInRange<u8> {
    u8_in_range(0..=255)
}

/// Uniformly `true` or `false`, shrinking `true` toward `false`.
pub fn boolean() -> Boolean {
    Boolean
}

pub struct Boolean;

impl Generator for Boolean {
    type Item = bool;

    fn generate(&self, seed: Seed, _size: Size) -> LazyTree<bool> {
        let value = seed.uniform_in_range(0, 1) == 1;
        LazyTree::new(value, move || {
            if value {
                Box::new(core::iter::once(LazyTree::constant(false)))
            } else {
                Box::new(core::iter::empty())
            }
        })
    }
}

/// Generates a finite `f64` within `[lo, hi]`, shrinking toward zero (or the
/// nearest bound) in a fixed number of halving steps.
pub fn float_in_range(lo: f64, hi: f64) -> FloatInRange {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    FloatInRange { lo, hi }
}

pub struct FloatInRange {
    lo: f64,
    hi: f64,
}

fn float_origin(lo: f64, hi: f64) -> f64 {
    0.0f64.clamp(lo, hi)
}

fn float_tree(value: f64, toward: f64) -> LazyTree<f64> {
    LazyTree::new(value, move || {
        let diff = value - toward;
        if diff.abs() < f64::EPSILON {
            return Box::new(core::iter::empty());
        }
        let mut steps = Vec::new();
        let mut distance = diff;
        for _ in 0..16 {
            distance /= 2.0;
            if distance.abs() < f64::EPSILON {
                break;
            }
            steps.push(toward + distance);
        }
        Box::new(steps.into_iter().map(move |step| float_tree(step, toward)))
    })
}

impl Generator for FloatInRange {
    type Item = f64;

    fn generate(&self, seed: Seed, _size: Size) -> LazyTree<f64> {
        if self.hi < self.lo {
            panic!("{}", GeneratorError::EmptyRange);
        }
        let ratio = seed.uniform_float();
        let value = self.lo + ratio * (self.hi - self.lo);
        float_tree(value, float_origin(self.lo, self.hi))
    }
}

/// A finite `f64` scaled by `size`, analogous to [`integer`].
pub fn float() -> FloatInRange {
    FloatInRange { lo: -1.0e6, hi: 1.0e6 }
}
