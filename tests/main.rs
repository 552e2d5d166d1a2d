use std::cmp::Ordering;

use sort_measure_rs::tests::Sort;
use sort_measure_rs::{instantiate_sort_tests, stable, unstable};

struct BubbleSort;

impl Sort for BubbleSort {
    fn name() -> String {
        "bubble_sort".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone,
    {
        stable::bubble_sort::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        stable::bubble_sort::sort_by(arr, compare);
    }
}

instantiate_sort_tests!(bubble_sort, BubbleSort, stable);

struct InsertionSort;

impl Sort for InsertionSort {
    fn name() -> String {
        "insertion_sort".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone,
    {
        stable::insertion_sort::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        stable::insertion_sort::sort_by(arr, compare);
    }
}

instantiate_sort_tests!(insertion_sort, InsertionSort, stable);

struct SelectionSort;

impl Sort for SelectionSort {
    fn name() -> String {
        "selection_sort".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone,
    {
        unstable::selection_sort::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        unstable::selection_sort::sort_by(arr, compare);
    }
}

instantiate_sort_tests!(selection_sort, SelectionSort, unstable);

struct MergeSort;

impl Sort for MergeSort {
    fn name() -> String {
        "merge_sort".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone,
    {
        stable::merge_sort::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        stable::merge_sort::sort_by(arr, compare);
    }
}

instantiate_sort_tests!(merge_sort, MergeSort, stable);

struct QuickSort;

impl Sort for QuickSort {
    fn name() -> String {
        "quick_sort".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone,
    {
        unstable::quick_sort::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        unstable::quick_sort::sort_by(arr, compare);
    }
}

instantiate_sort_tests!(quick_sort, QuickSort, unstable);
