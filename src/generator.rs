//! The `Generator` trait: a pure function from `(Seed, Size)` to a
//! [`LazyTree`], plus the combinators built purely out of the tree algebra.
//!
//! Every combinator here is a thin adapter that reshapes the `LazyTree`
//! returned by an inner generator — none of them hand-write a shrink
//! strategy, which is the whole point of integrated shrinking: composition
//! "just works" because the tree algebra composes.

use std::rc::Rc;

use crate::error::GeneratorError;
use crate::seed::Seed;
use crate::size::Size;
use crate::tree::{Cont, LazyTree};

/// A size-parameterized, seed-threaded random value producer.
///
/// `generate` must be pure: the same `(seed, size)` pair always yields the
/// same tree, including the same lazy children once forced. This is what
/// lets the runner replay a failing seed and get the exact same
/// counterexample back.
pub trait Generator {
    type Item;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<Self::Item>;

    /// Applies `f` to every value in the tree — the generated root and,
    /// lazily, every shrink candidate.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U + Clone + 'static,
    {
        Map { inner: self, f }
    }

    /// Uses this generator's value to build a second generator, then flattens
    /// the resulting tree-of-trees. The bound value's own shrinks are tried
    /// before falling back to a different `self` draw (see
    /// [`LazyTree::flatten`]).
    fn bind<G, F>(self, f: F) -> Bind<Self, F>
    where
        Self: Sized,
        G: Generator,
        F: Fn(Self::Item) -> G + Clone + 'static,
    {
        Bind { inner: self, f }
    }

    /// Like [`Generator::bind`], but the continuation may reject the bound
    /// value (`Cont::Skip`), retrying generation up to a fixed attempt budget
    /// before raising [`GeneratorError::FilterTooNarrow`].
    fn bind_filter<U, F>(self, attempts: u32, f: F) -> BindFilter<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> Cont<U> + Clone + 'static,
    {
        BindFilter { inner: self, attempts, f }
    }

    /// Retries generation, growing the size hint each attempt, until `pred`
    /// accepts a value or `attempts` is exhausted.
    fn filter<F>(self, attempts: u32, pred: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> bool + Clone + 'static,
    {
        Filter { inner: self, attempts, pred }
    }

    /// Runs the inner generator at a fixed size, ignoring whatever size the
    /// runner would otherwise pass in.
    fn resize(self, size: Size) -> Resize<Self>
    where
        Self: Sized,
    {
        Resize { inner: self, size }
    }

    /// Runs the inner generator at a size computed from the ambient one.
    fn sized<F>(self, f: F) -> SizedGen<Self, F>
    where
        Self: Sized,
        F: Fn(Size) -> Size + Clone + 'static,
    {
        SizedGen { inner: self, f }
    }

    /// Scales the ambient size by a fixed factor in `[0.0, 1.0]` before
    /// delegating — shorthand over [`Generator::sized`].
    fn scale(self, factor: f64) -> SizedGen<Self, Box<dyn Fn(Size) -> Size>>
    where
        Self: Sized,
    {
        SizedGen { inner: self, f: Box::new(move |size: Size| size.scale(factor)) }
    }

    /// Disables shrinking: the generated root is kept, but its tree of
    /// children is discarded. Grounded in `checkito::keep`, whose `shrink`
    /// always returns `None`.
    fn no_shrink(self) -> NoShrink<Self>
    where
        Self: Sized,
    {
        NoShrink { inner: self }
    }

    /// Ignores the runner-provided seed and always draws from a fixed one —
    /// useful for generators that should be deterministic regardless of the
    /// surrounding run.
    fn seeded(self, seed: Seed) -> Seeded<Self>
    where
        Self: Sized,
    {
        Seeded { inner: self, seed }
    }

    /// Erases the concrete generator type behind a trait object, needed for
    /// recursive and branching generator definitions whose type would
    /// otherwise be infinite.
    fn boxed(self) -> BoxGenerator<Self::Item>
    where
        Self: Sized + 'static,
    {
        BoxGenerator { inner: Rc::new(self) }
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    type Item = G::Item;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<G::Item> {
        (**self).generate(seed, size)
    }
}

/// A type-erased generator, the return type of [`Generator::boxed`].
pub struct BoxGenerator<T> {
    inner: Rc<dyn Generator<Item = T>>,
}

impl<T> Clone for BoxGenerator<T> {
    fn clone(&self) -> Self {
        BoxGenerator { inner: Rc::clone(&self.inner) }
    }
}

impl<T> Generator for BoxGenerator<T> {
    type Item = T;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<T> {
        self.inner.generate(seed, size)
    }
}

pub struct Map<G, F> {
    inner: G,
    f: F,
}

impl<G, F, U> Generator for Map<G, F>
where
    G: Generator,
    G::Item: 'static,
    U: 'static,
    F: Fn(G::Item) -> U + Clone + 'static,
{
    type Item = U;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<U> {
        self.inner.generate(seed, size).map(self.f.clone())
    }
}

pub struct Bind<G, F> {
    inner: G,
    f: F,
}

impl<G, F, H> Generator for Bind<G, F>
where
    G: Generator,
    G::Item: 'static,
    H: Generator + 'static,
    H::Item: 'static,
    F: Fn(G::Item) -> H + Clone + 'static,
{
    type Item = H::Item;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<H::Item> {
        let (outer_seed, inner_seed) = seed.split();
        let f = self.f.clone();
        let outer = self.inner.generate(outer_seed, size);
        outer.map(move |value| f(value).generate(inner_seed, size)).flatten()
    }
}

pub struct BindFilter<G, F> {
    inner: G,
    attempts: u32,
    f: F,
}

impl<G, F, U> Generator for BindFilter<G, F>
where
    G: Generator,
    G::Item: 'static,
    U: 'static,
    F: Fn(G::Item) -> Cont<U> + Clone + 'static,
{
    type Item = U;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<U> {
        let mut current = seed;
        for attempt in 0..self.attempts.max(1) {
            let (this_seed, next_seed) = current.split();
            let grown = size.grow(None).scale(
                ((attempt as f64) + 1.0) / (self.attempts.max(1) as f64),
            );
            let tree = self.inner.generate(this_seed, grown);
            if let Some(result) = tree.map_filter(self.f.clone()) {
                return result;
            }
            current = next_seed;
        }
        panic!(
            "{}",
            GeneratorError::FilterTooNarrow { attempts: self.attempts.max(1) }
        )
    }
}

pub struct Filter<G, F> {
    inner: G,
    attempts: u32,
    pred: F,
}

impl<G, F> Generator for Filter<G, F>
where
    G: Generator,
    G::Item: 'static,
    F: Fn(&G::Item) -> bool + Clone + 'static,
{
    type Item = G::Item;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<G::Item> {
        let mut current = seed;
        for attempt in 0..self.attempts.max(1) {
            let (this_seed, next_seed) = current.split();
            let grown = size.grow(None).scale(
                ((attempt as f64) + 1.0) / (self.attempts.max(1) as f64),
            );
            let tree = self.inner.generate(this_seed, grown);
            if (self.pred)(tree.root()) {
                return tree.filter(self.pred.clone());
            }
            current = next_seed;
        }
        panic!(
            "{}",
            GeneratorError::FilterTooNarrow { attempts: self.attempts.max(1) }
        )
    }
}

pub struct Resize<G> {
    inner: G,
    size: Size,
}

impl<G: Generator> Generator for Resize<G> {
    type Item = G::Item;

    fn generate(&self, seed: Seed, _size: Size) -> LazyTree<G::Item> {
        self.inner.generate(seed, self.size)
    }
}

pub struct SizedGen<G, F> {
    inner: G,
    f: F,
}

impl<G, F> Generator for SizedGen<G, F>
where
    G: Generator,
    F: Fn(Size) -> Size,
{
    type Item = G::Item;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<G::Item> {
        self.inner.generate(seed, (self.f)(size))
    }
}

pub struct NoShrink<G> {
    inner: G,
}

impl<G> Generator for NoShrink<G>
where
    G: Generator,
    G::Item: 'static,
{
    type Item = G::Item;

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<G::Item> {
        LazyTree::constant(self.inner.generate(seed, size).into_root())
    }
}

pub struct Seeded<G> {
    inner: G,
    seed: Seed,
}

impl<G: Generator> Generator for Seeded<G> {
    type Item = G::Item;

    fn generate(&self, _seed: Seed, size: Size) -> LazyTree<G::Item> {
        self.inner.generate(self.seed, size)
    }
}
