//! Recursive generator definitions (trees of values whose branches are
//! themselves generated).
//!
//! Unbounded recursion would make both generation and shrinking diverge, so
//! `tree` dampens *and* makes descent stochastic: at every level it draws
//! `frequency([(1, leaf), (2, subtree resized one level further)])`, so the
//! branching factor — not just the size — is what bounds recursion depth.
//! A purely size-gated descent keeps recursing for as long as the size
//! hasn't bottomed out, which for something like a JSON value generator
//! means every sample is a maximally deep tree; weighting the leaf in makes
//! shallow (and eventually leaf) values reachable at every level, which is
//! also what lets shrinking walk a failing deep value back down toward a
//! leaf one frequency choice at a time. Grounded in `checkito::dampen`'s
//! size reduction combined with `checkito::any`'s weighted choice.

use crate::choice::{frequency, weighted};
use crate::generator::{BoxGenerator, Generator};
use crate::seed::Seed;
use crate::size::Size;
use crate::tree::LazyTree;

/// Builds a recursive generator: `leaf` is used once size has dampened to
/// zero, otherwise `branch` is called with a recursive reference to `self`
/// (dampened one level further) to build the next level.
///
/// `factor` is the fraction of the remaining size passed to each recursive
/// call (e.g. `0.5` halves the size at every level), so depth is bounded by
/// `log(size) / log(1 / factor)`.
pub fn tree<L, B>(leaf: L, factor: f64, branch: B) -> Tree<L, B>
where
    L: Generator + Clone + 'static,
    L::Item: Clone + 'static,
    B: Fn(BoxGenerator<L::Item>) -> BoxGenerator<L::Item> + 'static,
{
    Tree { leaf, factor: factor.clamp(0.0, 1.0), branch: std::rc::Rc::new(branch) }
}

pub struct Tree<L, B> {
    leaf: L,
    factor: f64,
    branch: std::rc::Rc<B>,
}

impl<L, B> Clone for Tree<L, B>
where
    L: Clone,
{
    fn clone(&self) -> Self {
        Tree { leaf: self.leaf.clone(), factor: self.factor, branch: std::rc::Rc::clone(&self.branch) }
    }
}

impl<L, B> Generator for Tree<L, B>
where
    L: Generator + Clone + 'static,
    L::Item: Clone + 'static,
    B: Fn(BoxGenerator<L::Item>) -> BoxGenerator<L::Item> + 'static,
{
    type Item = L::Item;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<L::Item> {
        if size == Size::ZERO {
            return self.leaf.generate(seed, size);
        }
        let dampened = size.scale(self.factor);
        let next = if dampened == size {
            // Guard against a factor of 1.0 (or a size so small that
            // scaling doesn't move it) stalling recursion forever.
            Size::ZERO
        } else {
            dampened
        };
        // `self.clone().boxed()` is the recursive reference: `branch` is
        // free to call it again at whatever size its own combinators pass
        // down, which re-enters this same dampening check. `resize(next)`
        // pins the subtree branch to the dampened size regardless of what
        // size `Frequency::generate` would otherwise thread through.
        let subtree = (self.branch)(self.clone().boxed()).resize(next);
        let leaf = self.leaf.clone().boxed();
        let choice = frequency(vec![
            weighted(1, Box::new(leaf) as Box<dyn Generator<Item = L::Item>>),
            weighted(2, Box::new(subtree) as Box<dyn Generator<Item = L::Item>>),
        ]);
        choice.generate(seed, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::constant;

    #[test]
    fn tree_terminates_at_zero_size() {
        let gen = tree(constant(0i32), 0.5, |inner: BoxGenerator<i32>| inner);
        let result = gen.generate(Seed::new_seed(1), Size::ZERO);
        assert_eq!(*result.root(), 0);
    }

    #[test]
    fn tree_dampens_size_each_level() {
        let gen = tree(
            constant(1i32),
            0.5,
            |inner: BoxGenerator<i32>| inner.map(|x| x + 1).boxed(),
        );
        // With size > 0 the branch runs at least once, bumping the leaf.
        let result = gen.generate(Seed::new_seed(1), Size::new(4));
        assert!(*result.root() >= 1);
    }
}
