use std::cmp::Ordering;

use crate::sort_impl;

sort_impl!("merge_sort");

/// Splits at the midpoint (lower half gets `floor(len / 2)` elements),
/// sorts both halves recursively as owned buffers and merges them. The
/// merged buffer replaces the input, so this is not strictly in-place.
pub fn sort<T: Ord + Clone>(data: &mut [T]) {
    sort_by(data, |a, b| a.cmp(b));
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    let merged = sort_buffer(data.to_vec(), &mut |a, b| compare(a, b) == Ordering::Less);
    for (slot, value) in data.iter_mut().zip(merged) {
        *slot = value;
    }
}

fn sort_buffer<T, F: FnMut(&T, &T) -> bool>(mut values: Vec<T>, is_less: &mut F) -> Vec<T> {
    if values.len() <= 1 {
        return values;
    }

    let mid = values.len() / 2;
    let right = values.split_off(mid);
    let left = sort_buffer(values, is_less);
    let right = sort_buffer(right, is_less);

    merge(left, right, is_less)
}

fn merge<T, F: FnMut(&T, &T) -> bool>(left: Vec<T>, right: Vec<T>, is_less: &mut F) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        // The left head wins ties, which keeps the merge stable.
        if is_less(r, l) {
            merged.push(right.next().unwrap());
        } else {
            merged.push(left.next().unwrap());
        }
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
