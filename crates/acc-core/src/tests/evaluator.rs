use crate::tests::r5_large_mapping;
use crate::{CoreError, Evaluation, LimitMapping, UserArgs, Verdict, evaluate};

use googletest::assert_that;
use googletest::prelude::eq;
use proptest::prelude::*;

#[test]
fn given_demand_below_capacity_when_evaluate_then_good() {
    // Given
    let args = UserArgs::new("db.r5.large", 2, 10, 50);

    // When
    let evaluation = evaluate(&args, &r5_large_mapping()).unwrap();

    // Then
    assert_that!(evaluation.max_app_connections, eq(500));
    assert_that!(evaluation.max_db_connections, eq(2000));
    assert_that!(evaluation.verdict(), eq(Verdict::Good));
}

#[test]
fn given_demand_above_capacity_when_evaluate_then_over_the_limit() {
    // Given
    let args = UserArgs::new("db.r5.large", 1, 100, 50);

    // When
    let evaluation = evaluate(&args, &r5_large_mapping()).unwrap();

    // Then
    assert_that!(evaluation.max_app_connections, eq(5000));
    assert_that!(evaluation.max_db_connections, eq(1000));
    assert_that!(evaluation.verdict(), eq(Verdict::OverTheLimit));
}

#[test]
fn given_demand_equal_to_capacity_when_evaluate_then_good() {
    let args = UserArgs::new("db.r5.large", 1, 20, 50);

    let evaluation = evaluate(&args, &r5_large_mapping()).unwrap();

    assert!(evaluation.is_within_capacity());
    assert_that!(evaluation.verdict(), eq(Verdict::Good));
}

#[test]
fn given_negative_counts_when_evaluate_then_arithmetic_unchecked() {
    let args = UserArgs::new("db.r5.large", -1, 0, 50);

    let evaluation = evaluate(&args, &r5_large_mapping()).unwrap();

    assert_that!(evaluation.max_db_connections, eq(-1000));
    assert_that!(evaluation.verdict(), eq(Verdict::OverTheLimit));
}

#[test]
fn given_unknown_class_when_evaluate_then_lookup_error() {
    // Given
    let args = UserArgs::new("db.x2g.large", 1, 1, 1);

    // When
    let result = evaluate(&args, &r5_large_mapping());

    // Then
    assert!(matches!(
        result,
        Err(CoreError::UnknownInstanceClass { .. })
    ));
}

#[test]
fn given_empty_mapping_when_evaluate_then_lookup_error() {
    let args = UserArgs::new("db.r5.large", 1, 1, 1);

    let result = evaluate(&args, &LimitMapping::default());

    assert!(matches!(
        result,
        Err(CoreError::UnknownInstanceClass { .. })
    ));
}

#[test]
fn given_huge_pool_when_evaluate_then_overflow_error() {
    let args = UserArgs::new("db.r5.large", 1, i64::MAX, 2);

    let result = evaluate(&args, &r5_large_mapping());

    assert!(matches!(
        result,
        Err(CoreError::Overflow {
            what: "max_app_connections",
            ..
        })
    ));
}

#[test]
fn given_unknown_class_and_huge_pool_when_evaluate_then_lookup_error_first() {
    let args = UserArgs::new("db.x2g.large", 1, i64::MAX, 2);

    let result = evaluate(&args, &r5_large_mapping());

    assert!(matches!(
        result,
        Err(CoreError::UnknownInstanceClass { .. })
    ));
}

#[test]
fn given_same_inputs_when_evaluate_twice_then_same_result() {
    let args = UserArgs::new("db.r5.large", 3, 7, 40);
    let mapping = r5_large_mapping();

    let first = evaluate(&args, &mapping).unwrap();
    let second = evaluate(&args, &mapping).unwrap();

    assert_that!(first, eq(second));
}

#[test]
fn verdict_display_phrases() {
    assert_eq!(Verdict::Good.to_string(), "good!");
    assert_eq!(Verdict::OverTheLimit.to_string(), "over the limit!");
}

proptest! {
    #[test]
    fn verdict_is_good_exactly_when_demand_fits(
        limit in 0i64..200_000,
        instances in 0i64..64,
        pods in 0i64..10_000,
        pool in 0i64..1_000,
    ) {
        let mapping: LimitMapping = [("db.r5.large".to_string(), limit)].into_iter().collect();
        let args = UserArgs::new("db.r5.large", instances, pods, pool);

        let evaluation = evaluate(&args, &mapping).unwrap();

        prop_assert_eq!(
            evaluation,
            Evaluation {
                max_app_connections: pods * pool,
                max_db_connections: limit * instances,
            }
        );
        let expected = if pods * pool <= limit * instances {
            Verdict::Good
        } else {
            Verdict::OverTheLimit
        };
        prop_assert_eq!(evaluation.verdict(), expected);
    }
}
