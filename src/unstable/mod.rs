//! Sorts that may reorder equal elements.

pub mod quick_sort;
pub mod selection_sort;
