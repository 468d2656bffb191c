use super::*;

#[test]
fn nearest() {
    assert_eq!(round(21.11111, 2), 21.11);
    assert_eq!(round(67.86, 1), 67.9);
    assert_eq!(round(50.0, 1), 50.0);
    assert_eq!(round(0.0, 2), 0.0);
}

#[test]
fn ties_round_to_even() {
    assert_eq!(round(0.125, 2), 0.12);
    assert_eq!(round(0.375, 2), 0.38);
    assert_eq!(round(0.25, 1), 0.2);
    assert_eq!(round(0.75, 1), 0.8);
    assert_eq!(round(12.5, 0), 12.0);
}

#[test]
fn near_ties_follow_the_stored_value() {
    // 2.675 is stored as 2.67499999999999982236431605997495353221893310546875.
    assert_eq!(round(2.675, 2), 2.67);
    // 0.15 is stored as 0.1499999999999999944488848768742172978818416595458984375.
    assert_eq!(round(0.15, 1), 0.1);
}

#[test]
fn non_finite_values_pass_through() {
    assert!(round(f64::NAN, 1).is_nan());
    assert_eq!(round(f64::INFINITY, 1), f64::INFINITY);
}
