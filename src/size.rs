//! Size hints.
//!
//! `Size` plays the same role here that `checkito`'s `Sizes`/`State::size`
//! pair plays in the teacher crate, but as a plain, non-negative integer
//! hint rather than a `[0.0, 1.0]` ratio: the spec's data model defines size
//! as "a non-negative integer hint", starting at `initial_size` and growing
//! by one per successful run up to an optional ceiling.

use core::fmt;

/// A non-negative hint scaling the magnitude or length of generated values.
///
/// `Size` is not a hard limit; it is a contract generators are expected to
/// honour monotonically (a bigger size should widen, never narrow, a
/// generator's range).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Size(u32);

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Size").field(&self.0).finish()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Size {
    /// The zero size, used by primitives that want their smallest possible
    /// value regardless of the ambient size (e.g. a fully-shrunk child).
    pub const ZERO: Size = Size(0);

    #[inline]
    pub const fn new(value: u32) -> Self {
        Size(value)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Grows by one, clamped to an optional ceiling.
    #[inline]
    pub fn grow(self, max: Option<Size>) -> Size {
        let next = self.0.saturating_add(1);
        match max {
            Some(max) => Size(next.min(max.0)),
            None => Size(next),
        }
    }

    /// Scales this size by a fraction in `[0.0, 1.0]`, used by `scale` and by
    /// the recursive `tree` combinator to shrink the size passed to nested
    /// sub-generators as recursion depth increases.
    #[inline]
    pub fn scale(self, factor: f64) -> Size {
        let factor = factor.clamp(0.0, 1.0);
        Size((self.0 as f64 * factor).round() as u32)
    }

    /// As an `i128`, for use in range-centered integer generation.
    #[inline]
    pub const fn as_i128(self) -> i128 {
        self.0 as i128
    }
}

impl From<u32> for Size {
    fn from(value: u32) -> Self {
        Size(value)
    }
}
