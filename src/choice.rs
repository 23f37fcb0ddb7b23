//! Weighted and uniform choice among alternative generators or values.
//!
//! Grounded in `checkito::any`'s `Any`/`Weight` pair: an index is drawn
//! first (uniformly for `one_of`, weighted for `frequency`), then the chosen
//! generator runs. Shrinking tries earlier, lower-declared alternatives
//! before falling back — the chosen index itself is part of the shrink
//! tree: it shrinks toward `0` the same way `integer_in_range` shrinks
//! toward its origin, and each earlier-index candidate is flattened in
//! ahead of the chosen value's own shrinks.

use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::primitive::integer_tree;
use crate::seed::Seed;
use crate::size::Size;
use crate::tree::{ChildIter, LazyTree};

/// One weighted alternative in a [`frequency`] call.
pub struct Weighted<G> {
    pub weight: u32,
    pub generator: G,
}

pub fn weighted<G>(weight: u32, generator: G) -> Weighted<G> {
    Weighted { weight, generator }
}

/// Picks among `alternatives` proportionally to their weights. Panics with
/// [`GeneratorError::EmptyEnum`] if `alternatives` is empty or every weight
/// is zero.
pub fn frequency<T: Clone + 'static>(
    alternatives: Vec<Weighted<Box<dyn Generator<Item = T>>>>,
) -> Frequency<T> {
    Frequency { alternatives }
}

pub struct Frequency<T> {
    alternatives: Vec<Weighted<Box<dyn Generator<Item = T>>>>,
}

impl<T: Clone + 'static> Generator for Frequency<T> {
    type Item = T;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<T> {
        let total: u128 = self.alternatives.iter().map(|w| w.weight as u128).sum();
        if self.alternatives.is_empty() || total == 0 {
            panic!("{}", GeneratorError::EmptyEnum);
        }
        let (pick_seed, draw_seed) = seed.split();
        let mut target = pick_seed.uniform_in_range(0, total as i128 - 1) as u128;
        let mut index = 0;
        for (position, weighted) in self.alternatives.iter().enumerate() {
            if (weighted.weight as u128) > target {
                index = position;
                break;
            }
            target -= weighted.weight as u128;
        }

        let chosen = self.alternatives[index].generator.generate(draw_seed, size);
        let chosen_children: Vec<LazyTree<T>> = chosen.children().collect();
        // Earlier indices are offered the same way `integer_in_range` offers
        // smaller magnitudes: halving the distance to `0` each step, so the
        // search tries a big jump back toward the first alternative before
        // falling back to neighbouring ones.
        let earlier_indices: Vec<usize> = integer_tree(index as i128, 0)
            .children()
            .map(|t| *t.root() as usize)
            .collect();
        let earlier_trees: Vec<LazyTree<T>> = earlier_indices
            .into_iter()
            .map(|i| self.alternatives[i].generator.generate(draw_seed, size))
            .collect();

        LazyTree::new(chosen.into_root(), move || {
            let chosen_children = chosen_children.clone();
            let earlier_trees = earlier_trees.clone();
            Box::new(chosen_children.into_iter().chain(earlier_trees)) as ChildIter<T>
        })
    }
}

/// Picks uniformly among `alternatives`. Shorthand over [`frequency`] with
/// equal weights.
pub fn one_of<T: Clone + 'static>(
    alternatives: Vec<Box<dyn Generator<Item = T>>>,
) -> Frequency<T> {
    Frequency {
        alternatives: alternatives
            .into_iter()
            .map(|generator| Weighted { weight: 1, generator })
            .collect(),
    }
}

/// Picks uniformly among a fixed slice of values (not generators) — the
/// common case of "generate one of these literals".
pub fn member_of<T: Clone + 'static>(values: Vec<T>) -> MemberOf<T> {
    MemberOf { values }
}

pub struct MemberOf<T> {
    values: Vec<T>,
}

impl<T: Clone + 'static> Generator for MemberOf<T> {
    type Item = T;

    fn generate(&self, seed: Seed, _size: Size) -> LazyTree<T> {
        if self.values.is_empty() {
            panic!("{}", GeneratorError::EmptyEnum);
        }
        let index = seed.uniform_in_range(0, self.values.len() as i128 - 1) as usize;
        // Shrinking walks back toward the first member, matching this
        // spec's decision that enum-like choices shrink toward the first
        // declared alternative.
        let value = self.values[index].clone();
        let earlier = self.values[..index].to_vec();
        LazyTree::new(value, move || {
            Box::new(earlier.clone().into_iter().rev().map(LazyTree::constant))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::constant;

    #[test]
    fn one_of_only_produces_listed_alternatives() {
        let gen = one_of(vec![
            Box::new(constant(1)) as Box<dyn Generator<Item = i32>>,
            Box::new(constant(2)),
            Box::new(constant(3)),
        ]);
        for i in 0..50u64 {
            let tree = gen.generate(Seed::new_seed(i), Size::new(1));
            assert!([1, 2, 3].contains(tree.root()));
        }
    }

    #[test]
    fn frequency_never_picks_a_zero_weight_alternative() {
        let gen = frequency(vec![
            weighted(0, Box::new(constant("never")) as Box<dyn Generator<Item = &'static str>>),
            weighted(10, Box::new(constant("always"))),
        ]);
        for i in 0..50u64 {
            let tree = gen.generate(Seed::new_seed(i), Size::new(1));
            assert_eq!(*tree.root(), "always");
        }
    }

    #[test]
    fn member_of_shrinks_toward_the_first_alternative() {
        let gen = member_of(vec!["a", "b", "c"]);
        let tree = gen.generate(Seed::new_seed(2), Size::new(1));
        if *tree.root() != "a" {
            let children: Vec<_> = tree.children().map(|c| c.into_root()).collect();
            assert!(children.contains(&"a"));
        }
    }

    #[test]
    fn one_of_shrinks_toward_earlier_alternatives() {
        let gen = one_of(vec![
            Box::new(constant("a")) as Box<dyn Generator<Item = &'static str>>,
            Box::new(constant("b")),
            Box::new(constant("c")),
            Box::new(constant("d")),
        ]);
        let mut found = false;
        for i in 0..200u64 {
            let tree = gen.generate(Seed::new_seed(i), Size::new(1));
            if *tree.root() == "d" {
                // The index itself shrinks, so picking the last alternative
                // must offer earlier-declared ones among the children, not
                // just "d"'s own (nonexistent) internal shrinks.
                let children: Vec<_> = tree.children().map(|c| c.into_root()).collect();
                assert!(!children.is_empty());
                assert!(children.iter().all(|c| *c != "d"));
                found = true;
                break;
            }
        }
        assert!(found, "no seed picked the last alternative in 200 tries");
    }

    #[test]
    #[should_panic]
    fn empty_member_of_panics() {
        let gen: MemberOf<i32> = member_of(vec![]);
        let _ = gen.generate(Seed::new_seed(0), Size::new(1));
    }
}
