//! Enumerable-value lifting: letting call sites pass either a generator or a
//! bare literal wherever a generator is expected, resolved statically.
//!
//! `IntoGenerator` is implemented for every `Generator` (the identity case)
//! and, separately, for a handful of concrete literal types via
//! `constant`. Because the crate-local `Generator` trait is never
//! implemented for `i32`/`bool`/`String`/etc. directly, these impls never
//! overlap — no runtime type inspection (`Any::downcast`) is needed to
//! decide which applies.

use crate::constant::{constant, Constant};
use crate::generator::Generator;
use crate::tuple::{tuple2, tuple3, tuple4, Tuple2, Tuple3, Tuple4};

/// Lifts `Self` into a concrete `Generator`. Implemented for every
/// `Generator` as the identity, and for bare literal types by wrapping them
/// in [`constant`].
pub trait IntoGenerator {
    type Item;
    type Generator: Generator<Item = Self::Item>;

    fn into_generator(self) -> Self::Generator;
}

impl<G: Generator> IntoGenerator for G {
    type Item = G::Item;
    type Generator = G;

    fn into_generator(self) -> G {
        self
    }
}

macro_rules! lift_literal {
    ($ty:ty) => {
        impl IntoGenerator for $ty {
            type Item = $ty;
            type Generator = Constant<$ty>;

            fn into_generator(self) -> Constant<$ty> {
                constant(self)
            }
        }
    };
}

// These are deliberately *not* blanket impls over `Clone + 'static`: a
// blanket `impl<T: Clone + 'static> IntoGenerator for T` would overlap with
// `impl<G: Generator> IntoGenerator for G` the moment some future generator
// type is also `Clone`, so each liftable literal type is named here
// instead.
lift_literal!(bool);
lift_literal!(char);
lift_literal!(i8);
lift_literal!(i16);
lift_literal!(i32);
lift_literal!(i64);
lift_literal!(u8);
lift_literal!(u16);
lift_literal!(u32);
lift_literal!(u64);
lift_literal!(usize);
lift_literal!(isize);
lift_literal!(f64);
lift_literal!(String);

// Literal tuples lift element-wise: each position is lifted on its own
// (a bare value via `lift_literal!`, a generator via the identity impl
// above), then the lifted positions are combined with the fixed-arity
// tuple generators. No coherence overlap with the blanket `Generator`
// impl above: the crate-local `Generator` trait is never implemented for
// a bare tuple type, only for the named `Tuple2`/`Tuple3`/`Tuple4` structs.
impl<A, B> IntoGenerator for (A, B)
where
    A: IntoGenerator,
    A::Item: Clone + 'static,
    B: IntoGenerator,
    B::Item: Clone + 'static,
{
    type Item = (A::Item, B::Item);
    type Generator = Tuple2<A::Generator, B::Generator>;

    fn into_generator(self) -> Self::Generator {
        let (a, b) = self;
        tuple2(a.into_generator(), b.into_generator())
    }
}

impl<A, B, C> IntoGenerator for (A, B, C)
where
    A: IntoGenerator,
    A::Item: Clone + 'static,
    B: IntoGenerator,
    B::Item: Clone + 'static,
    C: IntoGenerator,
    C::Item: Clone + 'static,
{
    type Item = (A::Item, B::Item, C::Item);
    type Generator = Tuple3<A::Generator, B::Generator, C::Generator>;

    fn into_generator(self) -> Self::Generator {
        let (a, b, c) = self;
        tuple3(a.into_generator(), b.into_generator(), c.into_generator())
    }
}

impl<A, B, C, D> IntoGenerator for (A, B, C, D)
where
    A: IntoGenerator,
    A::Item: Clone + 'static,
    B: IntoGenerator,
    B::Item: Clone + 'static,
    C: IntoGenerator,
    C::Item: Clone + 'static,
    D: IntoGenerator,
    D::Item: Clone + 'static,
{
    type Item = (A::Item, B::Item, C::Item, D::Item);
    type Generator = Tuple4<A::Generator, B::Generator, C::Generator, D::Generator>;

    fn into_generator(self) -> Self::Generator {
        let (a, b, c, d) = self;
        tuple4(a.into_generator(), b.into_generator(), c.into_generator(), d.into_generator())
    }
}
