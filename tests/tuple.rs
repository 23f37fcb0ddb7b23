mod common;

use common::assert_holds;
use seedling::prelude::*;

#[test]
fn tuple2_respects_both_ranges() {
    assert_holds(
        tuple2(integer_in_range(0..=9), integer_in_range(100..=109)),
        |(a, b): (i64, i64)| (0..=9).contains(&a) && (100..=109).contains(&b),
        300,
    );
}

#[test]
fn tuple3_respects_all_three_ranges() {
    assert_holds(
        tuple3(
            integer_in_range(0..=9),
            integer_in_range(0..=9),
            integer_in_range(0..=9),
        ),
        |(a, b, c): (i64, i64, i64)| (0..=9).contains(&a) && (0..=9).contains(&b) && (0..=9).contains(&c),
        300,
    );
}

#[test]
fn tuple4_respects_all_four_ranges() {
    assert_holds(
        tuple4(
            integer_in_range(0..=9),
            integer_in_range(0..=9),
            integer_in_range(0..=9),
            integer_in_range(0..=9),
        ),
        |(a, b, c, d): (i64, i64, i64, i64)| {
            (0..=9).contains(&a) && (0..=9).contains(&b) && (0..=9).contains(&c) && (0..=9).contains(&d)
        },
        300,
    );
}

#[test]
fn tuple_shrinks_one_position_at_a_time() {
    // A property that fails whenever both positions exceed a threshold:
    // since shrink candidates only ever move one position, the runner's
    // search should be able to drive at least one of the two positions down
    // to (or below) the threshold in the shrunk counterexample.
    let shrunk = common::assert_shrinks_to(
        tuple2(integer_in_range(0..=500), integer_in_range(0..=500)),
        |(a, b): (i64, i64)| !(a > 100 && b > 100),
        11,
        500,
    );
    assert!(shrunk.starts_with('('));
}
