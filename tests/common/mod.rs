//! Shared helpers for the integration test suite.

use seedling::prelude::*;

/// Runs a property to completion with a fixed, reproducible seed and panics
/// with the shrunk counterexample if it fails — the common case for "this
/// should always hold" assertions below.
pub fn assert_holds<G, F>(generator: G, property: F, max_runs: u32)
where
    G: Generator,
    G::Item: Clone + std::fmt::Debug + 'static,
    F: Fn(G::Item) -> bool + Clone + 'static,
{
    let outcome = check_all(
        generator,
        property,
        Config { max_runs, seed: Seed::new_seed(1), ..Config::default() },
    );
    match outcome {
        Outcome::Ok { .. } => {}
        Outcome::Fail { shrunk, .. } => panic!("property failed: {shrunk}"),
    }
}

/// Runs a property expected to fail, returning the shrunk counterexample's
/// debug string for callers to assert on.
pub fn assert_shrinks_to<G, F>(generator: G, property: F, seed: u64, max_runs: u32) -> String
where
    G: Generator,
    G::Item: Clone + std::fmt::Debug + 'static,
    F: Fn(G::Item) -> bool + Clone + 'static,
{
    let outcome = check_all(
        generator,
        property,
        Config { max_runs, seed: Seed::new_seed(seed), ..Config::default() },
    );
    match outcome {
        Outcome::Fail { shrunk, .. } => shrunk.generated_bindings[0].value.clone(),
        Outcome::Ok { .. } => panic!("expected the property to fail"),
    }
}
