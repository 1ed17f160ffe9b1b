use classic_sorts::compare::reverse;
use classic_sorts::in_place::insertion_sort::{self, SortImpl};
use classic_sorts::InPlaceSort;

sort_test_tools::instantiate_sort_tests!(SortImpl);

#[test]
fn sorted_input_is_linear() {
    let len = 1_000;
    let mut v = (0..len).collect::<Vec<i32>>();

    let mut comp_count = 0;
    <SortImpl as InPlaceSort>::sort_by(&mut v, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    assert_eq!(v, (0..len).collect::<Vec<i32>>());
    assert_eq!(comp_count, len as usize - 1);
}

#[test]
fn descending_with_reverse() {
    let mut v = vec!["pear", "apple", "fig", "banana", "fig"];
    insertion_sort::sort_by(&mut v, reverse(|a: &&str, b: &&str| a.cmp(b)));

    assert_eq!(v, ["pear", "fig", "fig", "banana", "apple"]);
}

#[test]
fn keeps_equal_keys_in_order() {
    let mut v = [(3, 'a'), (1, 'b'), (3, 'c'), (1, 'd'), (2, 'e')];
    insertion_sort::sort_by(&mut v, |a, b| a.0.cmp(&b.0));

    assert_eq!(v, [(1, 'b'), (1, 'd'), (2, 'e'), (3, 'a'), (3, 'c')]);
}
