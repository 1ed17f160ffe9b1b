//! Sorts that return a new `Vec` and leave their input alone.

pub mod merge_sort;
pub mod quicksort;
