//! Streaming access to a generator outside of a property run: `take` for a
//! bounded sequence of values, `pick` for a single ambient-seed draw.
//!
//! Grounded in `checkito::sample::Sample`: a `fastrand`-seeded iterator that
//! grows the size hint by one each draw, the same growth rule the runner
//! itself uses, so a sampled sequence looks like what a real run would
//! generate.

use crate::generator::Generator;
use crate::seed::Seed;
use crate::size::Size;

/// An iterator over a generator's roots, growing size by one per draw.
pub struct Sample<G> {
    generator: G,
    seed: Seed,
    size: Size,
    max_size: Option<Size>,
}

impl<G> Iterator for Sample<G>
where
    G: Generator,
{
    type Item = G::Item;

    fn next(&mut self) -> Option<G::Item> {
        let (this_seed, next_seed) = self.seed.split();
        self.seed = next_seed;
        let tree = self.generator.generate(this_seed, self.size);
        self.size = self.size.grow(self.max_size);
        Some(tree.into_root())
    }
}

/// Returns an infinite (but lazily-produced) iterator of values from
/// `generator`, starting at `initial_size` and growing without bound unless
/// `max_size` caps it. Callers typically chain `.take(n)`.
pub fn sample<G>(generator: G, seed: Seed, initial_size: Size, max_size: Option<Size>) -> Sample<G> {
    Sample { generator, seed, size: initial_size, max_size }
}

/// The first `count` values `generator` would produce from `seed`.
pub fn take<G>(generator: G, seed: Seed, count: usize) -> Vec<G::Item>
where
    G: Generator,
{
    sample(generator, seed, Size::new(1), None).take(count).collect()
}

/// A single value from `generator`, drawn from process-wide entropy — for
/// quick inspection at a REPL or in documentation, not for reproducible
/// test runs (use [`crate::runner::check_all`] with an explicit seed for
/// that).
pub fn pick<G>(generator: G, size: Size) -> G::Item
where
    G: Generator,
{
    generator.generate(Seed::fresh(), size).into_root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::integer_in_range;

    #[test]
    fn take_returns_the_requested_count() {
        let values = take(integer_in_range(0..=9), Seed::new_seed(1), 20);
        assert_eq!(values.len(), 20);
        assert!(values.iter().all(|v| (0..=9).contains(v)));
    }

    #[test]
    fn take_is_deterministic_for_a_fixed_seed() {
        let a = take(integer_in_range(0..=1000), Seed::new_seed(42), 10);
        let b = take(integer_in_range(0..=1000), Seed::new_seed(42), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn pick_returns_a_value_in_range() {
        let value = pick(integer_in_range(-5..=5), Size::new(3));
        assert!((-5..=5).contains(&value));
    }
}
