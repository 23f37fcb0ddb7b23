//! The lazy rose tree: the data type that makes shrinking "integrated"
//! rather than hand-written per type.
//!
//! A [`LazyTree<T>`] pairs an eagerly-realized `root: T` with a lazily
//! re-iterable sequence of child trees, each representing a smaller
//! candidate of the same type. Combinators on [`crate::generator::Generator`]
//! (`map`, `bind`, `filter`, ...) are implemented purely in terms of the five
//! operations below, so a generator's shrink behavior always follows from
//! how it was built.
//!
//! `children` is deliberately represented as a closure-producing-an-iterator
//! (`Rc<dyn Fn() -> Box<dyn Iterator<Item = LazyTree<T>>>>`) rather than a
//! cached `Vec` or a stateful iterator: forcing the same node a second time
//! must reconstruct an equivalent subtree from the node's captured
//! parameters, not replay mutated state. This mirrors the
//! `Rc<dyn Fn() -> Vec<Tree<A>>>` representation used by from-scratch
//! Rust ports of Hedgehog's tree, generalized here into the small algebra
//! (`map`/`flatten`/`filter`/`map_filter`/`zip`) this spec requires.

use std::fmt;
use std::rc::Rc;

/// The boxed iterator type a [`LazyTree`]'s child-producing closure returns.
pub type ChildIter<T> = Box<dyn Iterator<Item = LazyTree<T>>>;

struct Children<T>(Rc<dyn Fn() -> ChildIter<T>>);

impl<T: 'static> Children<T> {
    fn empty() -> Self {
        Children(Rc::new(|| Box::new(core::iter::empty()) as ChildIter<T>))
    }

    fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> ChildIter<T> + 'static,
    {
        Children(Rc::new(f))
    }

    fn force(&self) -> ChildIter<T> {
        (self.0)()
    }
}

impl<T> Clone for Children<T> {
    fn clone(&self) -> Self {
        Children(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Children<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Children(<lazy>)")
    }
}

/// A rose tree whose root is realized and whose children are a lazy,
/// re-iterable sequence of progressively "smaller" trees of the same type.
pub struct LazyTree<T> {
    root: T,
    children: Children<T>,
}

impl<T: fmt::Debug> fmt::Debug for LazyTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyTree")
            .field("root", &self.root)
            .field("children", &self.children)
            .finish()
    }
}

impl<T: Clone> Clone for LazyTree<T> {
    fn clone(&self) -> Self {
        LazyTree {
            root: self.root.clone(),
            children: self.children.clone(),
        }
    }
}

/// The outcome of a [`LazyTree::map_filter`] mapping function: either a
/// continuation value or a signal to drop this node (and, transitively, the
/// subtree rooted at it) from the shrink tree.
pub enum Cont<T> {
    Cont(T),
    Skip,
}

impl<T> LazyTree<T> {
    /// A leaf tree: `root = x`, no children. The algebraic identity for
    /// shrinking — there is nothing smaller to offer.
    pub fn constant(value: T) -> Self
    where
        T: 'static,
    {
        LazyTree {
            root: value,
            children: Children::empty(),
        }
    }

    /// Builds a tree from an eagerly-known root and a thunk that produces
    /// (and, on each call, re-produces) its children.
    pub fn new<F>(root: T, children: F) -> Self
    where
        T: 'static,
        F: Fn() -> ChildIter<T> + 'static,
    {
        LazyTree {
            root,
            children: Children::from_fn(children),
        }
    }

    pub fn root(&self) -> &T {
        &self.root
    }

    pub fn into_root(self) -> T {
        self.root
    }

    /// Forces the lazy child sequence. Each call reconstructs the sequence
    /// independently; iterating it twice yields equivalent (though not
    /// `==`-comparable, since trees carry closures) subtrees.
    pub fn children(&self) -> impl Iterator<Item = LazyTree<T>>
    where
        T: 'static,
    {
        self.children.force()
    }

    /// `f` is applied eagerly to `root` and lazily, recursively, to each
    /// child as it is forced.
    pub fn map<U, F>(self, f: F) -> LazyTree<U>
    where
        T: 'static,
        U: 'static,
        F: Fn(T) -> U + Clone + 'static,
    {
        let LazyTree { root, children } = self;
        let new_root = f(root);
        let map_children = f.clone();
        let new_children = Children::from_fn(move || {
            let f = map_children.clone();
            let inner = children.force();
            Box::new(inner.map(move |child| child.map(f.clone()))) as ChildIter<U>
        });
        LazyTree {
            root: new_root,
            children: new_children,
        }
    }

    /// Filters children by `pred(child.root)`, recursively applying the same
    /// filter to the kept children's own children. Does *not* apply `pred`
    /// to `self.root` — the caller guarantees the root already passes.
    pub fn filter<F>(self, pred: F) -> LazyTree<T>
    where
        T: 'static,
        F: Fn(&T) -> bool + Clone + 'static,
    {
        let LazyTree { root, children } = self;
        let predicate = pred.clone();
        let new_children = Children::from_fn(move || {
            let keep = predicate.clone();
            let recurse = predicate.clone();
            Box::new(
                children
                    .force()
                    .filter(move |child| keep(&child.root))
                    .map(move |child| child.filter(recurse.clone())),
            ) as ChildIter<T>
        });
        LazyTree {
            root,
            children: new_children,
        }
    }

    /// If `f(root)` is `Skip`, the whole node (this spec's caller-visible
    /// contract: a rejected root) is dropped — returns `None`. Otherwise
    /// returns a tree rooted at the continuation value, whose children are
    /// `self`'s children mapped through `map_filter` and filtered down to
    /// the ones that didn't skip.
    pub fn map_filter<U, F>(self, f: F) -> Option<LazyTree<U>>
    where
        T: 'static,
        U: 'static,
        F: Fn(T) -> Cont<U> + Clone + 'static,
    {
        let LazyTree { root, children } = self;
        match f(root) {
            Cont::Skip => None,
            Cont::Cont(value) => {
                let map_children = f.clone();
                let new_children = Children::from_fn(move || {
                    let f = map_children.clone();
                    Box::new(
                        children
                            .force()
                            .filter_map(move |child| child.map_filter(f.clone())),
                    ) as ChildIter<U>
                });
                Some(LazyTree {
                    root: value,
                    children: new_children,
                })
            }
        }
    }
}

impl<T: 'static> LazyTree<LazyTree<T>> {
    /// Flattens a tree-of-trees. The inner tree's own shrinks are offered
    /// *before* the outer tree's shrinks (`inner_children` is chained ahead
    /// of `outer_children`), which is what makes `bind`'s bound value shrink
    /// toward its minimal instance before the generator that produced the
    /// binding itself tries alternatives.
    pub fn flatten(self) -> LazyTree<T> {
        let LazyTree {
            root: inner_tree,
            children: outer_children,
        } = self;
        let LazyTree {
            root,
            children: inner_children,
        } = inner_tree;
        let new_children = Children::from_fn(move || {
            let inner = inner_children.clone();
            let outer = outer_children.clone();
            Box::new(
                inner
                    .force()
                    .chain(outer.force().map(LazyTree::flatten)),
            ) as ChildIter<T>
        });
        LazyTree {
            root,
            children: new_children,
        }
    }
}

/// Zips a fixed collection of trees into a tree of vectors: the root is the
/// vector of child roots, and each child replaces exactly one position with
/// one of that position's own children, recursing. This is what lets
/// `tuple`/fixed-arity combinators shrink each component independently.
pub fn zip<T: Clone + 'static>(trees: Vec<LazyTree<T>>) -> LazyTree<Vec<T>> {
    let root = trees.iter().map(|t| t.root.clone()).collect();
    let new_children = Children::from_fn(move || {
        let trees = trees.clone();
        let len = trees.len();
        Box::new((0..len).flat_map(move |index| {
            let trees = trees.clone();
            let position = trees[index].clone();
            position.children.force().map(move |sub| {
                let mut replaced = trees.clone();
                replaced[index] = sub;
                zip(replaced)
            })
        })) as ChildIter<Vec<T>>
    });
    LazyTree { root, children: new_children }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn halving(n: i64) -> LazyTree<i64> {
        LazyTree::new(n, move || {
            let mut subtrahend = n;
            let mut steps = Vec::new();
            loop {
                subtrahend /= 2;
                if subtrahend == 0 {
                    break;
                }
                steps.push(n - subtrahend);
            }
            Box::new(steps.into_iter().map(halving)) as ChildIter<i64>
        })
    }

    #[test]
    fn map_identity_preserves_root_and_children() {
        let tree = halving(10).map(|x| x);
        assert_eq!(*tree.root(), 10);
        let children: Vec<_> = tree.children().map(|c| *c.root()).collect();
        assert_eq!(children, vec![5, 8, 9]);
    }

    #[test]
    fn map_composition_matches_sequential_maps() {
        let double = |x: i64| x * 2;
        let to_string = |x: i64| x.to_string();

        let composed = halving(6).map(move |x| to_string(double(x)));
        let sequential = halving(6).map(double).map(to_string);

        assert_eq!(composed.root(), sequential.root());
        let composed_children: Vec<_> = composed.children().map(|c| c.into_root()).collect();
        let sequential_children: Vec<_> = sequential.children().map(|c| c.into_root()).collect();
        assert_eq!(composed_children, sequential_children);
    }

    #[test]
    fn flatten_of_constant_of_constant_is_constant() {
        let nested = LazyTree::constant(LazyTree::constant(5));
        let flat = nested.flatten();
        assert_eq!(*flat.root(), 5);
        assert_eq!(flat.children().count(), 0);
    }

    #[test]
    fn flatten_right_identity_at_root() {
        let tree = halving(10);
        let flattened = tree.clone().map(LazyTree::constant).flatten();
        assert_eq!(flattened.root(), tree.root());
    }

    #[test]
    fn filter_keeps_only_matching_children_recursively() {
        let tree = halving(10).filter(|x| x % 2 == 0);
        let roots: Vec<_> = tree.children().map(|c| *c.root()).collect();
        assert_eq!(roots, vec![8]);
    }

    #[test]
    fn map_filter_skip_drops_the_node() {
        let tree = halving(10);
        let mapped: Option<LazyTree<i64>> = tree.map_filter(|x| {
            if x == 10 { Cont::Skip } else { Cont::Cont(x) }
        });
        assert!(mapped.is_none());
    }

    #[test]
    fn zip_root_is_component_roots() {
        let zipped = zip(vec![halving(4), halving(8)]);
        assert_eq!(*zipped.root(), vec![4, 8]);
    }

    #[test]
    fn zip_children_replace_one_position_at_a_time() {
        let zipped = zip(vec![halving(2), LazyTree::constant(100)]);
        let children: Vec<_> = zipped.children().map(|c| c.into_root()).collect();
        // Only the first position has children (second is a leaf), so every
        // child replaces position 0.
        assert_eq!(children, vec![vec![1, 100]]);
    }

    #[test]
    fn forcing_children_twice_yields_equivalent_subtrees() {
        let tree = halving(10);
        let first: Vec<_> = tree.children().map(|c| *c.root()).collect();
        let second: Vec<_> = tree.children().map(|c| *c.root()).collect();
        assert_eq!(first, second);
    }
}
