use classic_sorts::derived::quicksort::{self, SortImpl};
use classic_sorts::DerivedSort;

sort_test_tools::instantiate_sort_tests!(SortImpl);

#[test]
fn leaves_input_untouched() {
    let input = vec![5, 3, 8, 1, 9, 2];
    let sorted = <SortImpl as DerivedSort>::sorted(&input);

    assert_eq!(input, [5, 3, 8, 1, 9, 2]);
    assert_eq!(sorted, [1, 2, 3, 5, 8, 9]);
}

#[test]
fn empty_and_single() {
    assert_eq!(quicksort::sorted::<i32>(&[]), Vec::<i32>::new());
    assert_eq!(quicksort::sorted(&[42]), [42]);
}

#[test]
fn trailing_pivot_is_quadratic_on_sorted_input() {
    let len = 200;
    let v = (0..len).collect::<Vec<i32>>();

    let mut comp_count = 0;
    let sorted = quicksort::sorted_by(&v, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    assert_eq!(sorted, v);
    // Each round compares everything but the pivot and only peels the pivot off.
    assert_eq!(comp_count, (len as usize) * (len as usize - 1) / 2);
}

#[test]
fn deep_sorted_input() {
    // Would need one stack frame per element with a naive recursion.
    let v = (0..5_000u32).collect::<Vec<_>>();
    let sorted = quicksort::into_sorted_by(v.clone(), |a, b| a.cmp(b));

    assert_eq!(sorted, v);
}

#[test]
fn keeps_equal_keys_in_order() {
    // The pivot (2, 'f') shares its key with (2, 'a') and (2, 'd'), both must stay in front of it.
    let v = vec![(2, 'a'), (9, 'b'), (1, 'c'), (2, 'd'), (1, 'e'), (2, 'f')];
    let sorted = quicksort::into_sorted_by(v, |a, b| a.0.cmp(&b.0));

    assert_eq!(
        sorted,
        [(1, 'c'), (1, 'e'), (2, 'a'), (2, 'd'), (2, 'f'), (9, 'b')]
    );
}

#[test]
fn non_clone_elements() {
    let v = vec![Box::new(3), Box::new(1), Box::new(2)];
    let sorted = <SortImpl as DerivedSort>::into_sorted_by(v, |a, b| a.cmp(b));

    assert_eq!(sorted, [Box::new(1), Box::new(2), Box::new(3)]);
}
