//! Sorts that permute the caller's slice directly.

pub mod insertion_sort;
pub mod selection_sort;
