mod common;

use seedling::prelude::*;
use seedling::{Checker, Event};

#[test]
fn check_all_reports_ok_for_a_universally_true_property() {
    let outcome = check_all(
        integer_in_range(0..=100),
        |n: i64| n * 2 >= n,
        Config { max_runs: 200, ..Config::default() },
    );
    assert!(matches!(outcome, Outcome::Ok { successes: 200 }));
}

#[test]
fn check_all_reports_fail_with_original_and_shrunk() {
    let outcome = check_all(
        list_of(integer_in_range(0..=20), 0, Some(8)),
        |xs: Vec<i64>| xs.len() < 5,
        Config { max_runs: 200, seed: Seed::new_seed(9), ..Config::default() },
    );
    match outcome {
        Outcome::Fail { original, shrunk, successful_runs, .. } => {
            assert!(original.generated_bindings[0].value.len() >= shrunk.generated_bindings[0].value.len());
            assert!(successful_runs < 200);
        }
        Outcome::Ok { .. } => panic!("a five-or-more-element list is reachable within 200 runs"),
    }
}

#[test]
fn panics_are_captured_as_failures_with_exception_kind_panic() {
    let outcome = check_all(
        integer_in_range(0..=5i64),
        |n: i64| -> bool {
            if n == 3 {
                panic!("unexpected three");
            }
            true
        },
        Config { max_runs: 200, seed: Seed::new_seed(21), ..Config::default() },
    );
    match outcome {
        Outcome::Fail { shrunk, .. } => assert_eq!(shrunk.exception_kind, "panic"),
        Outcome::Ok { .. } => panic!("n == 3 is reachable within 200 runs over 0..=5"),
    }
}

#[test]
fn the_streaming_checks_iterator_yields_pass_before_any_failure() {
    let checker = Checker::new(
        integer_in_range(0..=10i64),
        |n: i64| n < 1000,
        Config { max_runs: 10, ..Config::default() },
    );
    let events: Vec<Event> = checker.checks().collect();
    assert!(events.iter().all(|event| matches!(event, Event::Pass)));
    assert_eq!(events.len(), 10);
}

#[test]
fn a_result_returning_property_carries_the_error_message() {
    let outcome = check_all(
        integer_in_range(0..=10i64),
        |n: i64| -> Result<(), String> {
            if n > 5 {
                Err(format!("{n} is too large"))
            } else {
                Ok(())
            }
        },
        Config { max_runs: 200, seed: Seed::new_seed(8), ..Config::default() },
    );
    match outcome {
        Outcome::Fail { shrunk, .. } => assert!(shrunk.cause.to_string().contains("too large")),
        Outcome::Ok { .. } => panic!("n > 5 is reachable within 200 runs over 0..=10"),
    }
}
