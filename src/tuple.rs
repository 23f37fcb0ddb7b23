//! Fixed-arity tuple generators.
//!
//! Each tuple position shrinks independently: a shrink candidate for an
//! n-tuple replaces exactly one position with one of that position's own
//! shrinks, holding the others fixed — the same contract as
//! [`crate::tree::zip`], specialized per arity here because a tuple's
//! positions have different element types. Arities 2 through 4 are provided;
//! higher arities compose via nesting (`tuple2(a, tuple2(b, c))`), the way
//! `checkito::utility`'s `tuples!` macro builds its arity ladder from pairs.

use crate::generator::Generator;
use crate::seed::Seed;
use crate::size::Size;
use crate::tree::LazyTree;

fn zip2<A, B>(ta: LazyTree<A>, tb: LazyTree<B>) -> LazyTree<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    let root = (ta.root().clone(), tb.root().clone());
    LazyTree::new(root, move || {
        let ta = ta.clone();
        let tb = tb.clone();
        let tb_for_a = tb.clone();
        let from_a = ta.clone().children().map(move |ca| zip2(ca, tb_for_a.clone()));
        let from_b = tb.children().map(move |cb| zip2(ta.clone(), cb));
        Box::new(from_a.chain(from_b))
    })
}

pub struct Tuple2<A, B> {
    a: A,
    b: B,
}

pub fn tuple2<A, B>(a: A, b: B) -> Tuple2<A, B> {
    Tuple2 { a, b }
}

impl<A, B> Generator for Tuple2<A, B>
where
    A: Generator,
    A::Item: Clone + 'static,
    B: Generator,
    B::Item: Clone + 'static,
{
    type Item = (A::Item, B::Item);

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<Self::Item> {
        let (sa, sb) = seed.split();
        zip2(self.a.generate(sa, size), self.b.generate(sb, size))
    }
}

pub struct Tuple3<A, B, C> {
    a: A,
    b: B,
    c: C,
}

pub fn tuple3<A, B, C>(a: A, b: B, c: C) -> Tuple3<A, B, C> {
    Tuple3 { a, b, c }
}

impl<A, B, C> Generator for Tuple3<A, B, C>
where
    A: Generator,
    A::Item: Clone + 'static,
    B: Generator,
    B::Item: Clone + 'static,
    C: Generator,
    C::Item: Clone + 'static,
{
    type Item = (A::Item, B::Item, C::Item);

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<Self::Item> {
        let (sa, rest) = seed.split();
        let (sb, sc) = rest.split();
        let ta = self.a.generate(sa, size);
        let tb = self.b.generate(sb, size);
        let tc = self.c.generate(sc, size);
        zip2(ta, zip2(tb, tc)).map(|(a, (b, c))| (a, b, c))
    }
}

pub struct Tuple4<A, B, C, D> {
    a: A,
    b: B,
    c: C,
    d: D,
}

pub fn tuple4<A, B, C, D>(a: A, b: B, c: C, d: D) -> Tuple4<A, B, C, D> {
    Tuple4 { a, b, c, d }
}

impl<A, B, C, D> Generator for Tuple4<A, B, C, D>
where
    A: Generator,
    A::Item: Clone + 'static,
    B: Generator,
    B::Item: Clone + 'static,
    C: Generator,
    C::Item: Clone + 'static,
    D: Generator,
    D::Item: Clone + 'static,
{
    type Item = (A::Item, B::Item, C::Item, D::Item);

    fn generate(&self, seed: Seed, size: Size) -> LazyTree<Self::Item> {
        let (sa, rest) = seed.split();
        let (sb, rest) = rest.split();
        let (sc, sd) = rest.split();
        let ta = self.a.generate(sa, size);
        let tb = self.b.generate(sb, size);
        let tc = self.c.generate(sc, size);
        let td = self.d.generate(sd, size);
        zip2(zip2(ta, tb), zip2(tc, td)).map(|((a, b), (c, d))| (a, b, c, d))
    }
}
