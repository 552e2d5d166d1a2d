use std::cmp::Ordering;

use crate::sort_impl;

sort_impl!("selection_sort");

/// For each position, swaps in the minimum of the unsorted suffix. Ties
/// resolve to the first occurrence, but the long-range swap can still
/// reorder equal elements.
pub fn sort<T: Ord>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    selection_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F: FnMut(&T, &T) -> bool>(v: &mut [T], is_less: &mut F) {
    for i in 0..v.len() {
        let mut min_pos = i;
        for scan in i + 1..v.len() {
            if is_less(&v[scan], &v[min_pos]) {
                min_pos = scan;
            }
        }
        v.swap(i, min_pos);
    }
}
