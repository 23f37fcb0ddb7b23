//! Raw byte sequences: `binary` (a `Vec<u8>`) and `bitstring` (a `Vec<bool>`).

use crate::collection::list_of;
use crate::generator::Generator;
use crate::primitive::{boolean, byte};
use crate::seed::Seed;
use crate::size::Size;
use crate::tree::LazyTree;

/// A `Vec<u8>` of length in `[min_len, max_len]`, each byte shrinking toward
/// zero and the length shrinking toward `min_len` — built directly on
/// [`list_of`] over [`byte`].
pub fn binary(min_len: usize, max_len: Option<usize>) -> Binary {
    Binary { inner: list_of(byte(), min_len, max_len) }
}

pub struct Binary {
    inner: crate::collection::ListOf<crate::primitive::IntegerInRange<u8>>,
}

impl Generator for Binary {
    type Item = Vec<u8>;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<Vec<u8>> {
        self.inner.generate(seed, size)
    }
}

/// A `Vec<bool>` of length in `[min_len, max_len]`, each bit shrinking
/// toward `false`.
pub fn bitstring(min_len: usize, max_len: Option<usize>) -> Bitstring {
    Bitstring { inner: list_of(boolean(), min_len, max_len) }
}

pub struct Bitstring {
    inner: crate::collection::ListOf<crate::primitive::Boolean>,
}

impl Generator for Bitstring {
    type Item = Vec<bool>;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<Vec<bool>> {
        self.inner.generate(seed, size)
    }
}
