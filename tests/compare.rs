use std::cmp::Ordering;

use classic_sorts::compare::{compare, reverse};

#[test]
fn three_way() {
    assert_eq!(compare(&0, &1), Ordering::Less);
    assert_eq!(compare(&'a', &'a'), Ordering::Equal);
    assert_eq!(compare(&(2, 1), &(1, 2)), Ordering::Greater);
    assert_eq!(compare("abc", "abd"), Ordering::Less);
}

#[test]
fn numeric_form() {
    assert_eq!(compare(&0, &1) as i8, -1);
    assert_eq!(compare(&1, &1) as i8, 0);
    assert_eq!(compare(&2, &1) as i8, 1);
}

#[test]
fn floats() {
    assert_eq!(compare(&-0.5f64, &0.25), Ordering::Less);
    assert_eq!(compare(&0.0f64, &-0.0), Ordering::Equal);
    // Incomparable values fall through to Equal.
    assert_eq!(compare(&f64::NAN, &1.0), Ordering::Equal);
}

#[test]
fn reversed() {
    let mut desc = reverse(compare::<i32>);

    assert_eq!(desc(&0, &1), Ordering::Greater);
    assert_eq!(desc(&1, &1), Ordering::Equal);
    assert_eq!(desc(&2, &1), Ordering::Less);
}
