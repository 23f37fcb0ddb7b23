//! Text generators: `string` (arbitrary characters from a chosen alphabet)
//! and `atom` (identifier-shaped strings: a letter or underscore followed
//! by alphanumerics/underscores).

use crate::choice::{member_of, MemberOf};
use crate::collection::{list_of, ListOf};
use crate::generator::Generator;
use crate::seed::Seed;
use crate::size::Size;
use crate::tree::LazyTree;

const ASCII_ALPHANUMERIC: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const IDENT_HEAD: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_";
const IDENT_TAIL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";

fn char_alphabet(alphabet: &'static str) -> MemberOf<char> {
    member_of(alphabet.chars().collect())
}

/// A `String` of length in `[min_len, max_len]`, drawn from ASCII letters
/// and digits, shrinking the same way [`crate::collection::list_of`] does:
/// shorter first, then each character toward the alphabet's first member.
pub fn string(min_len: usize, max_len: Option<usize>) -> StringGen {
    StringGen { inner: list_of(char_alphabet(ASCII_ALPHANUMERIC), min_len, max_len) }
}

pub struct StringGen {
    inner: ListOf<MemberOf<char>>,
}

impl Generator for StringGen {
    type Item = String;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<String> {
        self.inner.generate(seed, size).map(|chars| chars.into_iter().collect())
    }
}

/// An identifier-shaped `String`: one head character (letter or
/// underscore) followed by `len_tail` alphanumeric/underscore characters.
pub fn atom(max_tail_len: usize) -> Atom {
    Atom {
        head: char_alphabet(IDENT_HEAD),
        tail: list_of(char_alphabet(IDENT_TAIL), 0, Some(max_tail_len)),
    }
}

pub struct Atom {
    head: MemberOf<char>,
    tail: ListOf<MemberOf<char>>,
}

impl Generator for Atom {
    type Item = String;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<String> {
        let (head_seed, tail_seed) = seed.split();
        let head_tree = self.head.generate(head_seed, size);
        let tail_tree = self.tail.generate(tail_seed, size);
        let head_value = *head_tree.root();
        tail_tree.map(move |tail| {
            let mut result = String::with_capacity(tail.len() + 1);
            result.push(head_value);
            result.extend(tail);
            result
        })
    }
}
