//! Variable-length collections: `list_of` and `uniq_list_of`.
//!
//! Grounded in `checkito::collect`'s two-phase shrink strategy: first try
//! dropping whole elements (shrinking the *length*), then try shrinking
//! each remaining element in place (shrinking the *contents*) — dropping
//! elements first is what lets a failing 50-element list collapse down to
//! a 1-element list before the runner even starts shrinking that element's
//! value.

use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::seed::Seed;
use crate::size::Size;
use crate::tree::LazyTree;

/// Generates a `Vec<T>` of length in `[min_len, max_len]`; when `max_len` is
/// `None` the upper bound scales with `size`.
pub fn list_of<G>(element: G, min_len: usize, max_len: Option<usize>) -> ListOf<G> {
    ListOf { element, min_len, max_len }
}

pub struct ListOf<G> {
    element: G,
    min_len: usize,
    max_len: Option<usize>,
}

fn upper_bound(size: Size, min_len: usize, max_len: Option<usize>) -> usize {
    let scaled = min_len + size.get() as usize;
    match max_len {
        Some(max) => max.max(min_len).min(scaled.max(min_len)),
        None => scaled,
    }
}

impl<G> Generator for ListOf<G>
where
    G: Generator,
    G::Item: Clone + 'static,
{
    type Item = Vec<G::Item>;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<Vec<G::Item>> {
        let upper = upper_bound(size, self.min_len, self.max_len);
        let (len_seed, elems_seed) = seed.split();
        let len = if upper <= self.min_len {
            self.min_len
        } else {
            len_seed.uniform_in_range(self.min_len as i128, upper as i128) as usize
        };
        let seeds = elems_seed.split_n(len);
        let trees: Vec<LazyTree<G::Item>> =
            seeds.into_iter().map(|s| self.element.generate(s, size)).collect();
        list_tree(trees, self.min_len)
    }
}

/// Builds the shrink tree for a list from its element trees: children are
/// (in order) every one-element-shorter sublist above `min_len`, followed by
/// every single-position element shrink.
fn list_tree<T: Clone + 'static>(trees: Vec<LazyTree<T>>, min_len: usize) -> LazyTree<Vec<T>> {
    let root: Vec<T> = trees.iter().map(|t| t.root().clone()).collect();
    LazyTree::new(root, move || {
        let len = trees.len();
        let mut removals: Vec<LazyTree<Vec<T>>> = Vec::new();
        if len > min_len {
            for index in 0..len {
                let mut without = trees.clone();
                without.remove(index);
                removals.push(list_tree(without, min_len));
            }
        }
        let trees_for_shrink = trees.clone();
        let shrink_each = (0..len).flat_map(move |index| {
            let trees = trees_for_shrink.clone();
            let element_children: Vec<_> = trees[index].children().collect();
            element_children.into_iter().map(move |child| {
                let mut replaced = trees.clone();
                replaced[index] = child;
                list_tree(replaced, min_len)
            })
        });
        Box::new(removals.into_iter().chain(shrink_each))
    })
}

/// Generates a `Vec<T>` of exactly `len` pairwise-distinct elements (by
/// `PartialEq`), retrying element draws up to `attempts` times per position
/// before raising [`GeneratorError::TooManyDuplicates`].
pub fn uniq_list_of<G>(element: G, len: usize, attempts: u32) -> UniqListOf<G> {
    UniqListOf { element, len, attempts }
}

pub struct UniqListOf<G> {
    element: G,
    len: usize,
    attempts: u32,
}

impl<G> Generator for UniqListOf<G>
where
    G: Generator,
    G::Item: Clone + PartialEq + 'static,
{
    type Item = Vec<G::Item>;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<Vec<G::Item>> {
        let mut trees: Vec<LazyTree<G::Item>> = Vec::with_capacity(self.len);
        let mut current = seed;
        let budget = self.attempts.max(1) * self.len.max(1) as u32;
        let mut spent = 0u32;
        while trees.len() < self.len {
            if spent >= budget {
                panic!(
                    "{}",
                    GeneratorError::TooManyDuplicates {
                        attempts: spent,
                        wanted: self.len,
                        found: trees.len(),
                    }
                );
            }
            spent += 1;
            let (draw, rest) = current.split();
            current = rest;
            let candidate = self.element.generate(draw, size);
            if !trees.iter().any(|t| t.root() == candidate.root()) {
                trees.push(candidate);
            }
        }
        let len = self.len;
        list_tree(trees, self.len).filter(move |v| v.len() == len && has_no_duplicates(v))
    }
}

fn has_no_duplicates<T: PartialEq>(values: &[T]) -> bool {
    for i in 0..values.len() {
        for j in (i + 1)..values.len() {
            if values[i] == values[j] {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::integer_in_range;

    #[test]
    fn list_of_respects_length_bounds() {
        let gen = list_of(integer_in_range(0..=9), 2, Some(5));
        for i in 0..100u64 {
            let tree = gen.generate(Seed::new_seed(i), Size::new(10));
            assert!((2..=5).contains(&tree.root().len()));
        }
    }

    #[test]
    fn list_shrink_tries_shorter_lists_first() {
        let tree = list_of(integer_in_range(0..=9), 0, Some(3))
            .generate(Seed::new_seed(5), Size::new(10));
        if tree.root().len() > 0 {
            let first_child = tree.children().next().unwrap();
            assert!(first_child.root().len() <= tree.root().len());
        }
    }

    #[test]
    fn uniq_list_of_has_no_duplicates() {
        let gen = uniq_list_of(integer_in_range(0..=50), 5, 25);
        let tree = gen.generate(Seed::new_seed(3), Size::new(10));
        assert!(has_no_duplicates(tree.root()));
        assert_eq!(tree.root().len(), 5);
    }
}
